#[macro_use]
extern crate log;

pub mod autojoin;
pub use self::autojoin::Processor;

pub mod config;
pub use self::config::Profile;

pub mod host;
