#[macro_use]
extern crate log;
extern crate env_logger;

extern crate autojoin_primary;

use std::io::Write;
use std::rc::Rc;

use autojoin_primary::autojoin::{registration, script::SCRIPT_VERSION, store};
use autojoin_primary::host::{BufferId, Host, MemoryHost, Request, RequestQueue};
use autojoin_primary::{Processor, Profile};

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp(false)
        .init();

    let mut args = ::std::env::args();
    if let Some(next) = args.nth(1) {
        match next.as_str() {
            "-c" | "--config" => {
                info!("writing a default profile to stdout");
                let mut stdout = ::std::io::stdout();
                Profile::default().dump(&mut stdout);
                return;
            }

            "-h" | "--help" | _ => {
                let reg = registration();
                info!(
                    "{} {}: {}\n\nusage: {}\n\n{}\n\n\
                     The simulator reads its host state from autojoin.toml. \
                     `buffer <server>` and `core` switch the invoking buffer, \
                     `servers` shows the host state, `quit` leaves. Anything \
                     else is dispatched as command arguments.",
                    reg.command, SCRIPT_VERSION, reg.description, reg.usage, reg.help
                );
                return;
            }
        }
    }

    let profile = Profile::load("autojoin.toml")
        .map_err(|e| {
            error!("{}", e);
            error!("try: autojoin --config > autojoin.toml");
            ::std::process::exit(2);
        })
        .unwrap();

    let host = Rc::new(MemoryHost::new());
    for server in &profile.servers {
        host.add_server(server.name.as_str(), server.connected);
        for channel in &server.channels {
            let _ = host.open_channel(&server.name, channel.as_str());
        }
        if !server.autojoin.is_empty() {
            host.config_set(&store::key(&server.name), &server.autojoin);
        }
    }

    let queue = Rc::new(RequestQueue::new());
    let processor = Processor::new(Rc::clone(&host) as Rc<dyn Host>, Rc::clone(&queue));

    let mut buffer: BufferId = host.servers().first().map(|s| s.buffer).unwrap_or(0);

    let stdin = ::std::io::stdin();
    loop {
        let name = host.server_for(buffer).unwrap_or_else(|| "core".to_owned());
        print!("{}> ", name);
        ::std::io::stdout().flush().expect("to flush the prompt");

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();

        let mut words = line.split_whitespace();
        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("core") => buffer = 0,

            Some("buffer") => match words.next() {
                Some(name) => match host.servers().into_iter().find(|s| s.name == name) {
                    Some(server) => buffer = server.buffer,
                    None => println!("not a server: {}", name),
                },
                None => println!("try: buffer <server>"),
            },

            Some("servers") => {
                for server in host.servers() {
                    let channels = host
                        .open_channels(&server.name)
                        .into_iter()
                        .map(|c| c.name)
                        .collect::<Vec<_>>();
                    println!(
                        "{} [{}] {}",
                        server.name,
                        if server.connected { "connected" } else { "offline" },
                        channels.join(" ")
                    );
                }
            }

            Some(_) => {
                let result = processor.dispatch(buffer, line);
                for req in queue.drain() {
                    apply(&host, req);
                }
                if let Err(err) = result {
                    debug!("command failed: {:?}", err);
                }
            }
        }
    }
}

/// Plays the host: prints go to the console, joins open channel buffers,
/// closes remove them.
fn apply(host: &MemoryHost, req: Request) {
    match req {
        Request::Print { output, .. } => println!("{}", output.stamped()),

        Request::Join { buffer, channel } => {
            if let Some(server) = host.server_for(buffer) {
                let _ = host.open_channel(&server, channel.as_str());
                println!("--> {} joined {}", server, channel);
            }
        }

        Request::Close { buffer } => {
            if let Some((server, channel)) = host.channel_at(buffer) {
                host.close(buffer);
                println!("<-- {} closed {}", server, channel);
            }
        }
    }
}
