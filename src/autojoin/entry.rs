/// The ordered list of primary channels for one server. Stored as a
/// comma-joined string under the server's config key; an absent key reads
/// back as an empty entry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Entry {
    channels: Vec<String>,
}

impl Entry {
    pub fn parse(stored: &str) -> Self {
        Self {
            channels: stored
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn serialize(&self) -> String {
        self.channels.join(",")
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    /// Appends a channel, refusing duplicates.
    pub fn add(&mut self, channel: &str) -> bool {
        if self.contains(channel) {
            return false;
        }
        self.channels.push(channel.to_owned());
        true
    }

    pub fn remove(&mut self, channel: &str) -> bool {
        match self.channels.iter().position(|c| c == channel) {
            Some(pos) => {
                self.channels.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The ", "-joined display form, "(none)" when empty.
    pub fn display(&self) -> String {
        if self.channels.is_empty() {
            "(none)".to_owned()
        } else {
            self.channels.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_in_insertion_order() {
        let entry = Entry::parse("#a,#b,#c");
        assert_eq!(entry.serialize(), "#a,#b,#c");
        assert_eq!(entry.iter().collect::<Vec<_>>(), vec!["#a", "#b", "#c"]);
    }

    #[test]
    fn empty_string_is_an_empty_entry() {
        let entry = Entry::parse("");
        assert!(entry.is_empty());
        assert_eq!(entry.serialize(), "");
        assert_eq!(entry.display(), "(none)");
    }

    #[test]
    fn parse_skips_blank_segments() {
        let entry = Entry::parse("#a,, #b ,");
        assert_eq!(entry.serialize(), "#a,#b");
    }

    #[test]
    fn add_refuses_duplicates() {
        let mut entry = Entry::default();
        assert!(entry.add("#x"));
        assert!(!entry.add("#x"));
        assert_eq!(entry.serialize(), "#x");
    }

    #[test]
    fn remove_of_a_non_member_is_refused() {
        let mut entry = Entry::parse("#a,#b");
        assert!(!entry.remove("#c"));
        assert!(entry.remove("#a"));
        assert_eq!(entry.serialize(), "#b");
    }

    #[test]
    fn display_joins_with_comma_space() {
        let entry = Entry::parse("#news,#chat");
        assert_eq!(entry.display(), "#news, #chat");
    }
}
