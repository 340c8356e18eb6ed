pub mod memory;
pub use self::memory::MemoryHost;
pub mod output;
pub use self::output::{Output, Prefix};
pub mod queue;
pub use self::queue::RequestQueue;
pub mod request;
pub use self::request::{Request, Target};

/// Opaque handle to one of the host's buffers.
pub type BufferId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub name: String,
    pub connected: bool,
    /// The server's main buffer, the target for joins.
    pub buffer: BufferId,
}

/// A channel buffer currently open on some server.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelBuffer {
    pub name: String,
    pub buffer: BufferId,
}

/// Everything the command handlers need from the surrounding chat client:
/// a key-value config store, buffer ownership lookup, server and channel
/// enumeration, and the channel-name syntax check.
///
/// Imperative operations (join, close, print) are not part of this trait,
/// they are queued as [`Request`]s and applied by the embedding.
pub trait Host {
    fn config_get(&self, key: &str) -> Option<String>;
    fn config_set(&self, key: &str, value: &str);

    /// The server owning a buffer, be it the server's main buffer or one
    /// of its channel buffers. `None` for the core buffer and anything
    /// else without a server behind it.
    fn server_for(&self, buffer: BufferId) -> Option<String>;

    /// Every server known to the host, connected or not.
    fn servers(&self) -> Vec<Server>;

    fn open_channels(&self, server: &str) -> Vec<ChannelBuffer>;

    fn is_channel(&self, name: &str) -> bool;
}

/// Whether `name` is syntactically a channel name. RFC 2812: a channel
/// prefix, then up to 49 more characters with no space, comma, colon or
/// BEL.
pub fn is_channel_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some('#') | Some('&') | Some('+') | Some('!') => {}
        _ => return false,
    }

    if name.len() < 2 || name.len() > 50 {
        return false;
    }

    chars.all(|c| !c.is_whitespace() && c != ',' && c != ':' && c != '\x07')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_name_syntax() {
        let valid = &["#news", "&local", "+modeless", "!12345ABCDE", "#multi-word-name"];
        for name in valid {
            assert!(is_channel_name(name), "{} should be valid", name);
        }

        let invalid = &[
            "",
            "#",
            "news",
            "#has space",
            "#has,comma",
            "#has:colon",
            "-all",
            "#bell\x07",
        ];
        for name in invalid {
            assert!(!is_channel_name(name), "{} should be invalid", name);
        }
    }

    #[test]
    fn channel_name_length_is_bounded() {
        let name = format!("#{}", "x".repeat(49));
        assert!(is_channel_name(&name));

        let name = format!("#{}", "x".repeat(50));
        assert!(!is_channel_name(&name));
    }
}
