//! High-level operations behind the command-line interface.

pub mod flags;
pub mod locate;

pub use flags::{flags, Flags};
pub use locate::{build_request, locate, LocateOptions};
