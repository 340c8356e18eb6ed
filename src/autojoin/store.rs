use super::entry::Entry;
use crate::host::Host;

/// Config key holding a server's primary channels.
pub fn key(server: &str) -> String {
    format!("{}.autojoin", server)
}

/// Every command re-reads the store fresh, nothing is cached between
/// invocations.
pub fn load(host: &dyn Host, server: &str) -> Entry {
    let entry = host
        .config_get(&key(server))
        .map(|stored| Entry::parse(&stored))
        .unwrap_or_default();
    trace!("loaded entry for {}: {:?}", server, entry);
    entry
}

pub fn save(host: &dyn Host, server: &str, entry: &Entry) {
    let stored = entry.serialize();
    trace!("storing {}={}", key(server), stored);
    host.config_set(&key(server), &stored);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn key_scheme() {
        assert_eq!(key("freenode"), "freenode.autojoin");
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let host = MemoryHost::new();
        assert!(load(&host, "freenode").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let host = MemoryHost::new();
        let entry = Entry::parse("#a,#b,#c");

        save(&host, "freenode", &entry);
        assert_eq!(host.config_get("freenode.autojoin"), Some("#a,#b,#c".to_owned()));
        assert_eq!(load(&host, "freenode"), entry);
    }
}
