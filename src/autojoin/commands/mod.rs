use std::rc::Rc;

use crate::host::{BufferId, Host, Output, Request, RequestQueue, Server, Target};

mod add;
mod del;
mod join;
mod list;
mod only;

use self::add::add_command;
use self::del::del_command;
use self::join::join_command;
use self::list::list_command;
use self::only::only_command;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Command was not run from a buffer owned by a server. Carries the
    /// subcommand name for the error line.
    NotIrcBuffer(&'static str),
    InvalidChannel(String),
    NoChannels,
    NothingChanged,
    UnknownCommand(String),
}

type CommandResult = Result<(), Error>;

/// The five things this command knows how to do, selected by exact match.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Subcommand {
    List,
    Add,
    Del,
    Join,
    Only,
}

impl Subcommand {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "list" => Some(Subcommand::List),
            "add" => Some(Subcommand::Add),
            "del" => Some(Subcommand::Del),
            "join" => Some(Subcommand::Join),
            "only" => Some(Subcommand::Only),
            _ => None,
        }
    }
}

pub(crate) struct Context<'a> {
    pub(crate) host: Rc<dyn Host>,
    pub(crate) queue: Rc<RequestQueue>,
    /// The buffer the command was typed in.
    pub(crate) buffer: BufferId,
    pub(crate) parts: &'a [&'a str],
}

impl<'a> Context<'a> {
    pub fn request(&self, req: Request) {
        self.queue.enqueue(req)
    }

    pub fn print(&self, target: Target, output: impl Into<Output>) {
        self.request(Request::Print {
            target,
            output: output.into(),
        });
    }

    /// Error lines go to the invoking buffer.
    pub fn error(&self, text: impl Into<String>) {
        self.print(Target::Buffer(self.buffer), Output::error(text));
    }
}

pub struct Processor {
    host: Rc<dyn Host>,
    queue: Rc<RequestQueue>,
}

impl Processor {
    pub fn new(host: Rc<dyn Host>, queue: Rc<RequestQueue>) -> Self {
        Self { host, queue }
    }

    /// Runs one command invocation: tokenize, route, handle. `input` is
    /// the raw text after the command name, `buffer` the buffer it was
    /// typed in.
    pub fn dispatch(&self, buffer: BufferId, input: &str) -> Result<(), Error> {
        let mut tokens = input.split_whitespace();

        let sub = match tokens.next() {
            None => Subcommand::List,
            Some(token) => match Subcommand::parse(token) {
                Some(sub) => sub,
                None => {
                    let ctx = self.context(buffer, &[]);
                    ctx.error(format!("unknown command: {}", token));
                    return Err(Error::UnknownCommand(token.to_owned()));
                }
            },
        };

        let parts = tokens.collect::<Vec<_>>();
        trace!("dispatching {:?} {:?}", sub, parts);

        let ctx = self.context(buffer, &parts);
        match sub {
            Subcommand::List => list_command(&ctx),
            Subcommand::Add => add_command(&ctx),
            Subcommand::Del => del_command(&ctx),
            Subcommand::Join => join_command(&ctx),
            Subcommand::Only => only_command(&ctx),
        }
    }

    fn context<'a>(&self, buffer: BufferId, parts: &'a [&'a str]) -> Context<'a> {
        Context {
            host: Rc::clone(&self.host),
            queue: Rc::clone(&self.queue),
            buffer,
            parts,
        }
    }
}

/// Resolves the server owning the invoking buffer, for everything that
/// operates on "the current server".
fn current_server(ctx: &Context, command: &'static str) -> Result<Server, Error> {
    let server = ctx
        .host
        .server_for(ctx.buffer)
        .and_then(|name| ctx.host.servers().into_iter().find(|s| s.name == name));

    match server {
        Some(server) => Ok(server),
        None => {
            ctx.error(format!("{} must be run on an irc buffer", command));
            Err(Error::NotIrcBuffer(command))
        }
    }
}

fn wants_all(ctx: &Context) -> bool {
    ctx.parts.iter().any(|p| *p == "-all")
}
