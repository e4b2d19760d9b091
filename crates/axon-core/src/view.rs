use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use axon_core_types::{ContextId, DispatchId};

use crate::errors::{AxonError, Result};
use crate::notification::Notification;
use crate::observer::{NotifyHandler, Observer};
use crate::roles::Mediator;

/// One registered mediator plus everything captured at registration time
struct MediatorRecord {
    mediator: Rc<dyn Mediator>,
    context: ContextId,
    /// Interest list queried exactly once, at registration
    interests: Vec<String>,
}

/// Mediator registry and observer fan-out
///
/// The view owns the broadcast algorithm. Observer lists are keyed by
/// notification name and delivered in insertion order; `notify_observers`
/// iterates a snapshot copy, so a handler that registers or removes
/// observers for the same name mid-broadcast can neither corrupt the
/// in-flight iteration nor change which handlers receive that broadcast.
///
/// All interior borrows are scoped to single registry operations. Handlers
/// run with no borrow held, which is what makes re-entrant registration,
/// removal, and nested broadcasts legal.
pub struct View {
    mediator_map: RefCell<HashMap<String, MediatorRecord>>,
    observer_map: RefCell<HashMap<String, Vec<Observer>>>,
}

impl View {
    /// Create an empty view
    pub fn new() -> Self {
        Self {
            mediator_map: RefCell::new(HashMap::new()),
            observer_map: RefCell::new(HashMap::new()),
        }
    }

    /// Append an observer to the delivery sequence for a notification name
    ///
    /// The sequence is created on first registration; insertion order is
    /// delivery order.
    pub fn register_observer(&self, note_name: &str, observer: Observer) {
        self.observer_map
            .borrow_mut()
            .entry(note_name.to_string())
            .or_default()
            .push(observer);
    }

    /// Broadcast a notification to every observer registered for its name
    ///
    /// No-op when no observer list exists. Otherwise a defensive snapshot
    /// of the current sequence is taken before iterating, then each
    /// observer is invoked synchronously in snapshot order. Every observer
    /// present in the snapshot is invoked exactly once; there is no
    /// cancellation. A panic in a handler propagates to the caller,
    /// aborting delivery to the rest of the snapshot.
    pub fn notify_observers(&self, note: &Notification) {
        let snapshot = {
            let map = self.observer_map.borrow();
            match map.get(note.name()) {
                Some(observers) => observers.clone(),
                None => return,
            }
        };

        let dispatch_id = DispatchId::new();
        tracing::debug!(
            component = module_path!(),
            note_name = note.name(),
            observer_count = snapshot.len(),
            dispatch_id = %dispatch_id,
            "dispatching notification"
        );

        for observer in &snapshot {
            observer.notify(note);
        }
    }

    /// Remove the observer owned by `context` from the sequence for a name
    ///
    /// At most one observer per context per name exists by invariant, so
    /// the scan removes the first match. When the sequence drains, the
    /// name key is deleted with it. A present sequence with no matching
    /// context is a quiet no-op.
    ///
    /// # Errors
    ///
    /// Returns `ObserversNotFound` when no sequence exists for `note_name`.
    pub fn remove_observer(&self, note_name: &str, context: &ContextId) -> Result<()> {
        let mut map = self.observer_map.borrow_mut();
        let observers = map
            .get_mut(note_name)
            .ok_or_else(|| AxonError::ObserversNotFound {
                note_name: note_name.to_string(),
            })?;

        if let Some(pos) = observers.iter().position(|o| o.compare_context(context)) {
            observers.remove(pos);
        }

        // A name key never fronts an empty sequence
        if observers.is_empty() {
            map.remove(note_name);
        }

        Ok(())
    }

    /// Register a mediator and subscribe it to its declared interests
    ///
    /// A name that is already registered is a no-op: the original
    /// registration is retained untouched. Otherwise the interest list is
    /// queried once, a single observer forwarding to `handle_notification`
    /// is installed under every interest name, and `on_register` is
    /// invoked last, with no borrow held, so the hook may broadcast or
    /// re-enter the registries.
    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        let name = mediator.name().to_string();
        if self.mediator_map.borrow().contains_key(&name) {
            tracing::debug!(
                component = module_path!(),
                mediator_name = %name,
                "mediator already registered; keeping original"
            );
            return;
        }

        let context = ContextId::new();
        let interests = mediator.list_notification_interests();

        self.mediator_map.borrow_mut().insert(
            name,
            MediatorRecord {
                mediator: Rc::clone(&mediator),
                context: context.clone(),
                interests: interests.clone(),
            },
        );

        // One observer instance, registered under every interest
        let handler: NotifyHandler = {
            let mediator = Rc::clone(&mediator);
            Rc::new(move |note: &Notification| mediator.handle_notification(note))
        };
        let observer = Observer::new(handler, context);
        for interest in &interests {
            self.register_observer(interest, observer.clone());
        }

        mediator.on_register();
    }

    /// Retrieve a registered mediator by name
    pub fn retrieve_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.mediator_map
            .borrow()
            .get(name)
            .map(|record| Rc::clone(&record.mediator))
    }

    /// Check whether a mediator is registered under the name
    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediator_map.borrow().contains_key(name)
    }

    /// Remove a mediator, deregistering every declared interest
    ///
    /// Returns the removed instance, or None when the name is absent.
    /// `on_remove` is invoked after the observers are gone and all borrows
    /// are released. An interest whose observer list has already drained
    /// (a handler may have removed it mid-life) is tolerated.
    pub fn remove_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        let record = self.mediator_map.borrow_mut().remove(name)?;

        for interest in &record.interests {
            if let Err(err) = self.remove_observer(interest, &record.context) {
                tracing::debug!(
                    component = module_path!(),
                    mediator_name = name,
                    note_name = %interest,
                    err.code = err.code(),
                    "interest list already gone during mediator removal"
                );
            }
        }

        record.mediator.on_remove();
        Some(record.mediator)
    }

    /// Number of observers currently registered for a name
    ///
    /// None when no list exists. This is a public method to enable test
    /// helpers; by invariant it never returns `Some(0)`.
    pub fn observer_count(&self, note_name: &str) -> Option<usize> {
        self.observer_map.borrow().get(note_name).map(Vec::len)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("mediators", &self.mediator_map.borrow().len())
            .field("observer_lists", &self.observer_map.borrow().len())
            .finish()
    }
}
