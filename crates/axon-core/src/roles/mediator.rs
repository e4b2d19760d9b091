use std::any::Any;
use std::rc::Weak;

use crate::facade::Facade;
use crate::notification::Notification;

/// View-facing participant with a declared, fixed set of notification
/// interests
///
/// A mediator is registered under its unique `name()`. Its interest list is
/// queried exactly once, at registration time; changing the returned value
/// later has no effect on an existing registration. `handle_notification`
/// takes `&self`: an implementation that mutates its own state does so via
/// interior mutability, which is what keeps nested broadcasts that reach
/// the same mediator legal.
pub trait Mediator {
    /// Unique registry key for this mediator
    fn name(&self) -> &str;

    /// Notification names this mediator wants delivered
    ///
    /// Evaluated eagerly at registration, never re-queried.
    fn list_notification_interests(&self) -> Vec<String>;

    /// Handle one delivered notification
    fn handle_notification(&self, note: &Notification);

    /// Receive the facade handle before registration is delegated
    ///
    /// Implementations that broadcast store the handle (typically in an
    /// embedded [`crate::Notifier`]). The default ignores it.
    fn initialize_notifier(&self, _facade: Weak<Facade>) {}

    /// Hook invoked after registration completes
    ///
    /// Runs last, after the interest observers are installed and all
    /// registry borrows are released, so the hook may broadcast.
    fn on_register(&self) {}

    /// Hook invoked after removal completes
    fn on_remove(&self) {}

    /// Downcast support for retrieved instances
    fn as_any(&self) -> &dyn Any;
}
