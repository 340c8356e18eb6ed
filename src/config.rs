use std::collections::HashMap;
use std::io::Error as IoError;
use std::path::Path;
use std::{fmt, fs};
use toml_document::ParserError as TomlError;

/// The simulator profile: which servers exist, whether they are
/// connected, which channel buffers are open, and any pre-seeded
/// primary lists.
#[derive(Clone, PartialEq)]
pub struct Profile {
    pub servers: Vec<ServerProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerProfile {
    pub name: String,
    pub connected: bool,
    pub channels: Vec<String>,
    pub autojoin: String,
}

pub enum Error {
    CannotRead(IoError),
    CannotParse(TomlError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotRead(err) => {
                error!("CannotRead: {}", err);
                write!(f, "cannot read the profile file")
            }
            Error::CannotParse(err) => {
                error!("CannotParse: {}", err);
                write!(f, "cannot parse the profile file")
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotRead(err) => write!(f, "CannotRead({:?})", err),
            Error::CannotParse(_) => write!(f, "CannotParse"),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            servers: vec![
                ServerProfile {
                    name: "freenode".to_owned(),
                    connected: true,
                    channels: vec!["#news".to_owned(), "#rust".to_owned(), "#random".to_owned()],
                    autojoin: "#news".to_owned(),
                },
                ServerProfile {
                    name: "example".to_owned(),
                    connected: false,
                    channels: vec![],
                    autojoin: String::new(),
                },
            ],
        }
    }
}

impl Profile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = fs::read_to_string(path.as_ref()).map_err(Error::CannotRead)?;
        Self::parse(&data)
    }

    /// Three tables in fixed order: [connected], [channels], [autojoin],
    /// each keyed by server name with string values. Servers appear in
    /// [connected] document order.
    pub fn parse(data: &str) -> Result<Self, Error> {
        use toml_document::*;
        let doc = Document::parse(data).map_err(Error::CannotParse)?;

        let mut order = Vec::new();
        let mut connected = HashMap::new();
        for child in doc.get_container(0).iter_children() {
            if let ValueRef::String(data) = child.value() {
                order.push(child.key().get().to_string());
                connected.insert(child.key().get().to_string(), data.get() == "true");
            }
        }

        let mut channels: HashMap<String, String> = HashMap::new();
        for child in doc.get_container(1).iter_children() {
            if let ValueRef::String(data) = child.value() {
                channels.insert(child.key().get().to_string(), data.get().to_string());
            }
        }

        let mut autojoin: HashMap<String, String> = HashMap::new();
        for child in doc.get_container(2).iter_children() {
            if let ValueRef::String(data) = child.value() {
                autojoin.insert(child.key().get().to_string(), data.get().to_string());
            }
        }

        let servers = order
            .into_iter()
            .map(|name| ServerProfile {
                connected: connected[&name],
                channels: channels
                    .get(&name)
                    .map(|list| {
                        list.split(',')
                            .map(str::trim)
                            .filter(|c| !c.is_empty())
                            .map(str::to_owned)
                            .collect()
                    })
                    .unwrap_or_default(),
                autojoin: autojoin.get(&name).cloned().unwrap_or_default(),
                name,
            })
            .collect();

        Ok(Profile { servers })
    }

    pub fn dump(&self, w: &mut impl ::std::io::Write) {
        use toml_document::*;

        let mut doc = Document::new();
        let container = doc.insert_container(0, vec!["connected"].into_iter(), ContainerKind::Table);
        for (i, server) in self.servers.iter().enumerate() {
            container.insert_string(i, server.name.clone(), server.connected.to_string());
        }

        let container = doc.insert_container(1, vec!["channels"].into_iter(), ContainerKind::Table);
        for (i, server) in self.servers.iter().enumerate() {
            container.insert_string(i, server.name.clone(), server.channels.join(","));
        }

        let container = doc.insert_container(2, vec!["autojoin"].into_iter(), ContainerKind::Table);
        for (i, server) in self.servers.iter().enumerate() {
            container.insert_string(i, server.name.clone(), server.autojoin.clone());
        }

        writeln!(w, "{}", doc.to_string()).expect("to write profile");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_a_profile() {
        let data = r##"
[connected]
freenode = "true"
oftc = "false"

[channels]
freenode = "#news,#rust"

[autojoin]
freenode = "#news"
"##;

        let profile = Profile::parse(data).unwrap();
        assert_eq!(
            profile.servers,
            vec![
                ServerProfile {
                    name: "freenode".to_owned(),
                    connected: true,
                    channels: vec!["#news".to_owned(), "#rust".to_owned()],
                    autojoin: "#news".to_owned(),
                },
                ServerProfile {
                    name: "oftc".to_owned(),
                    connected: false,
                    channels: vec![],
                    autojoin: String::new(),
                },
            ]
        );
    }

    #[test]
    fn dump_then_parse_round_trips() {
        let profile = Profile::default();
        let mut data = Vec::new();
        profile.dump(&mut data);

        let parsed = Profile::parse(::std::str::from_utf8(&data).unwrap()).unwrap();
        assert_eq!(parsed.servers, profile.servers);
    }
}
