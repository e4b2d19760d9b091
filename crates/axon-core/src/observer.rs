use std::fmt;
use std::rc::Rc;

use axon_core_types::ContextId;

use crate::notification::Notification;

/// Handler function invoked with each delivered notification
pub type NotifyHandler = Rc<dyn Fn(&Notification)>;

/// A binding of a handler function to an owning context
///
/// Observers are compared for removal by context id, never by handler:
/// two observers wrapping the same function but stamped with different
/// contexts are distinct registrations. Cloning is cheap (the handler is
/// reference-counted), which is what lets the view snapshot an observer
/// list before iterating it.
#[derive(Clone)]
pub struct Observer {
    handler: NotifyHandler,
    context: ContextId,
}

impl Observer {
    /// Create a new Observer binding a handler to an owning context
    pub fn new(handler: NotifyHandler, context: ContextId) -> Self {
        Self { handler, context }
    }

    /// Invoke the stored handler with the given notification
    pub fn notify(&self, note: &Notification) {
        (self.handler)(note);
    }

    /// Check whether this observer is owned by the given context
    pub fn compare_context(&self, context: &ContextId) -> bool {
        self.context == *context
    }

    /// Get the owning context id
    pub fn context(&self) -> &ContextId {
        &self.context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_invokes_handler_with_notification() {
        let seen: Rc<Cell<bool>> = Rc::new(Cell::new(false));
        let handler: NotifyHandler = {
            let seen = seen.clone();
            Rc::new(move |note: &Notification| {
                assert_eq!(note.name(), "ping");
                seen.set(true);
            })
        };

        let observer = Observer::new(handler, ContextId::new());
        observer.notify(&Notification::new("ping"));
        assert!(seen.get());
    }

    #[test]
    fn test_same_handler_different_contexts_are_distinct() {
        let handler: NotifyHandler = Rc::new(|_| {});
        let ctx_a = ContextId::new();
        let ctx_b = ContextId::new();

        let a = Observer::new(handler.clone(), ctx_a.clone());
        let b = Observer::new(handler, ctx_b.clone());

        assert!(a.compare_context(&ctx_a));
        assert!(!a.compare_context(&ctx_b));
        assert!(b.compare_context(&ctx_b));
        assert!(!b.compare_context(&ctx_a));
    }

    #[test]
    fn test_clone_preserves_context() {
        let observer = Observer::new(Rc::new(|_| {}), ContextId::new());
        let cloned = observer.clone();
        assert!(cloned.compare_context(observer.context()));
    }
}
