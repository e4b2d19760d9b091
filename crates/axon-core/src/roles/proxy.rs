use std::any::Any;
use std::rc::Weak;

use crate::facade::Facade;

/// Model-facing registry entry encapsulating data access
///
/// The kernel never looks at a proxy's data; it stores the handle by name
/// and invokes the lifecycle hooks. Consumers retrieve the abstraction and
/// reach the concrete type (and its data) through `as_any`.
pub trait Proxy {
    /// Unique registry key for this proxy
    fn name(&self) -> &str;

    /// Receive the facade handle before registration is delegated
    fn initialize_notifier(&self, _facade: Weak<Facade>) {}

    /// Hook invoked after the proxy is stored
    fn on_register(&self) {}

    /// Hook invoked after the proxy is removed
    fn on_remove(&self) {}

    /// Downcast support for retrieved instances
    fn as_any(&self) -> &dyn Any;
}
