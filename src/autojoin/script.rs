pub const SCRIPT_NAME: &str = "autojoin_primary";
pub const SCRIPT_VERSION: &str = "1.0";
pub const SCRIPT_DESC: &str = "A smaller autojoin list for your primary channels";

/// What the host needs to hook the command up: the command name, a usage
/// synopsis, per-subcommand help and an argument completion template.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub command: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub completion: &'static str,
}

pub fn registration() -> Registration {
    Registration {
        command: SCRIPT_NAME,
        description: SCRIPT_DESC,
        usage: "[list] [-all] \
                || add <channel> [<channel>...] \
                || del <channel> [<channel>...] \
                || join [-all] \
                || only [-all]",
        help: "\
list: list primary channels\n\
add: add primary channels for the current server\n\
del: delete primary channels for the current server\n\
join: join all primary channels\n\
only: close every channel that is not primary\n\
\n\
Without arguments, lists the primary channels for the current server.\n\
With -all, list/join/only cover every server instead of the current one.",
        completion: "list -all \
                     || add %(irc_channel)|%* \
                     || del %(irc_channel)|%* \
                     || join -all \
                     || only -all",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_covers_every_subcommand() {
        let reg = registration();
        for sub in &["list", "add", "del", "join", "only"] {
            assert!(reg.usage.contains(sub), "{} missing from usage", sub);
            assert!(reg.help.contains(sub), "{} missing from help", sub);
            assert!(reg.completion.contains(sub), "{} missing from completion", sub);
        }
    }
}
