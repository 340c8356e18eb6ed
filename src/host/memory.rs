use std::collections::HashMap;
use std::sync::RwLock;

use super::{is_channel_name, BufferId, ChannelBuffer, Host, Server};

struct ServerState {
    name: String,
    connected: bool,
    buffer: BufferId,
    channels: Vec<ChannelBuffer>,
}

struct Inner {
    config: HashMap<String, String>,
    servers: Vec<ServerState>,
    next_buffer: BufferId,
}

/// An in-memory host: just enough of a chat client for the command
/// handlers. Backs the tests and the simulator binary.
pub struct MemoryHost {
    inner: RwLock<Inner>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                config: HashMap::new(),
                servers: Vec::new(),
                // buffer 0 is the core buffer
                next_buffer: 1,
            }),
        }
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a server and returns its main buffer.
    pub fn add_server(&self, name: impl Into<String>, connected: bool) -> BufferId {
        let inner = &mut self.inner.write().unwrap();
        let buffer = inner.next_buffer;
        inner.next_buffer += 1;
        inner.servers.push(ServerState {
            name: name.into(),
            connected,
            buffer,
            channels: Vec::new(),
        });
        buffer
    }

    /// Opens a channel buffer on a server. Opening an already-open channel
    /// hands back the existing buffer.
    pub fn open_channel(&self, server: &str, name: impl Into<String>) -> Option<BufferId> {
        let inner = &mut self.inner.write().unwrap();
        let name = name.into();

        let pos = match inner.servers.iter().position(|s| s.name == server) {
            Some(pos) => pos,
            None => {
                warn!("not a server: {}", server);
                return None;
            }
        };

        if let Some(existing) = inner.servers[pos].channels.iter().find(|c| c.name == name) {
            return Some(existing.buffer);
        }

        let buffer = inner.next_buffer;
        inner.next_buffer += 1;
        inner.servers[pos].channels.push(ChannelBuffer { name, buffer });
        Some(buffer)
    }

    pub fn close(&self, buffer: BufferId) {
        let inner = &mut self.inner.write().unwrap();
        for server in &mut inner.servers {
            if let Some(pos) = server.channels.iter().position(|c| c.buffer == buffer) {
                server.channels.remove(pos);
                return;
            }
        }
        warn!("not an open channel buffer: {}", buffer);
    }

    /// Server and channel name behind an open channel buffer.
    pub fn channel_at(&self, buffer: BufferId) -> Option<(String, String)> {
        let inner = &*self.inner.read().unwrap();
        for server in &inner.servers {
            if let Some(ch) = server.channels.iter().find(|c| c.buffer == buffer) {
                return Some((server.name.clone(), ch.name.clone()));
            }
        }
        None
    }
}

impl Host for MemoryHost {
    fn config_get(&self, key: &str) -> Option<String> {
        self.inner.read().unwrap().config.get(key).cloned()
    }

    fn config_set(&self, key: &str, value: &str) {
        self.inner
            .write()
            .unwrap()
            .config
            .insert(key.to_owned(), value.to_owned());
    }

    fn server_for(&self, buffer: BufferId) -> Option<String> {
        let inner = &*self.inner.read().unwrap();
        inner
            .servers
            .iter()
            .find(|s| s.buffer == buffer || s.channels.iter().any(|c| c.buffer == buffer))
            .map(|s| s.name.clone())
    }

    fn servers(&self) -> Vec<Server> {
        let inner = &*self.inner.read().unwrap();
        inner
            .servers
            .iter()
            .map(|s| Server {
                name: s.name.clone(),
                connected: s.connected,
                buffer: s.buffer,
            })
            .collect()
    }

    fn open_channels(&self, server: &str) -> Vec<ChannelBuffer> {
        let inner = &*self.inner.read().unwrap();
        inner
            .servers
            .iter()
            .find(|s| s.name == server)
            .map(|s| s.channels.clone())
            .unwrap_or_default()
    }

    fn is_channel(&self, name: &str) -> bool {
        is_channel_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_for_covers_main_and_channel_buffers() {
        let host = MemoryHost::new();
        let main = host.add_server("freenode", true);
        let chan = host.open_channel("freenode", "#news").unwrap();

        assert_eq!(host.server_for(main), Some("freenode".to_owned()));
        assert_eq!(host.server_for(chan), Some("freenode".to_owned()));
        assert_eq!(host.server_for(0), None);
    }

    #[test]
    fn reopening_a_channel_reuses_its_buffer() {
        let host = MemoryHost::new();
        host.add_server("freenode", true);

        let first = host.open_channel("freenode", "#news");
        let second = host.open_channel("freenode", "#news");
        assert_eq!(first, second);
        assert_eq!(host.open_channels("freenode").len(), 1);
    }

    #[test]
    fn close_removes_the_channel_buffer() {
        let host = MemoryHost::new();
        host.add_server("freenode", true);
        let chan = host.open_channel("freenode", "#news").unwrap();

        host.close(chan);
        assert!(host.open_channels("freenode").is_empty());
        assert_eq!(host.channel_at(chan), None);
    }

    #[test]
    fn open_channel_on_unknown_server_is_refused() {
        let host = MemoryHost::new();
        assert_eq!(host.open_channel("nowhere", "#news"), None);
    }
}
