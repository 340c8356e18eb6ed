/// How the host should decorate a printed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prefix {
    Plain,
    Error,
}

/// One line destined for a buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub prefix: Prefix,
    pub text: String,
}

impl Output {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            prefix: Prefix::Plain,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            prefix: Prefix::Error,
            text: text.into(),
        }
    }

    pub fn render(&self) -> String {
        match self.prefix {
            Prefix::Plain => self.text.clone(),
            Prefix::Error => format!("error: {}", self.text),
        }
    }

    /// The rendered line behind an HHMMSS stamp, the way the simulator
    /// displays it.
    pub fn stamped(&self) -> String {
        use chrono::prelude::*;
        let now: DateTime<Local> = Local::now();
        format!(
            "{:02}{:02}{:02} {}",
            now.hour(),
            now.minute(),
            now.second(),
            self.render()
        )
    }
}

impl<'a> From<&'a str> for Output {
    fn from(s: &'a str) -> Self {
        Output::plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prefixes_errors() {
        assert_eq!(Output::plain("#news").render(), "#news");
        assert_eq!(
            Output::error("must specify at least one channel").render(),
            "error: must specify at least one channel"
        );
    }
}
