//! Role traits satisfied by external collaborators
//!
//! The registries store handles to these abstractions, never concrete
//! types. Concrete domain implementations live outside this crate; the
//! traits enumerate exactly the operations the kernel calls.

pub mod command;
pub mod mediator;
pub mod proxy;

pub use command::{Command, CommandFactory, CompositeCommand};
pub use mediator::Mediator;
pub use proxy::Proxy;
