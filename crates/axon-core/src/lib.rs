//! Axon Core - In-process publish/subscribe and named-registry kernel
//!
//! This crate lets loosely-coupled application components (data proxies,
//! view mediators, command handlers) communicate without holding direct
//! references to one another:
//! - Notification envelopes fanned out synchronously, in registration order
//! - Observer bindings matched for removal by opaque context identity
//! - Name-keyed registries for proxies, mediators, and command factories
//! - Idempotent command-to-observer binding across re-registration cycles
//! - A Facade context value aggregating one Model, one View, one Controller
//!
//! Dispatch is single-threaded and cooperative: a broadcast runs every
//! matching handler to completion on the calling context before returning,
//! and handlers may re-enter the registries mid-broadcast.

pub mod controller;
pub mod errors;
pub mod facade;
pub mod logging_facility;
pub mod model;
pub mod notification;
pub mod notifier;
pub mod observer;
pub mod roles;
pub mod view;

// Re-export commonly used types
pub use controller::Controller;
pub use errors::{AxonError, Result};
pub use facade::Facade;
pub use model::Model;
pub use notification::{Body, Notification};
pub use notifier::Notifier;
pub use observer::{NotifyHandler, Observer};
pub use roles::{Command, CommandFactory, CompositeCommand, Mediator, Proxy};
pub use view::View;
