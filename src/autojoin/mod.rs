pub mod commands;
pub use self::commands::{Error, Processor};

pub mod entry;
pub use self::entry::Entry;

pub mod script;
pub use self::script::{registration, Registration};

pub mod store;
