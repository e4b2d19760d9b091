use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::errors::{AxonError, Result};
use crate::facade::Facade;
use crate::notification::Body;

/// Embeddable broadcast handle bound to the facade at registration time
///
/// Any Mediator, Proxy, or Command implementation can hold a Notifier and
/// forward its `initialize_notifier` call to [`Notifier::attach`]; from
/// then on the collaborator broadcasts without constructing notifications
/// itself. The handle is weak — the notifier never keeps the facade (and
/// with it the registries holding the collaborator) alive.
#[derive(Default)]
pub struct Notifier {
    facade: RefCell<Weak<Facade>>,
}

impl Notifier {
    /// Create a detached notifier
    pub fn new() -> Self {
        Self {
            facade: RefCell::new(Weak::new()),
        }
    }

    /// Bind this notifier to a facade
    pub fn attach(&self, facade: Weak<Facade>) {
        *self.facade.borrow_mut() = facade;
    }

    /// Upgrade to the bound facade, or None when detached or dropped
    pub fn facade(&self) -> Option<Rc<Facade>> {
        self.facade.borrow().upgrade()
    }

    /// Broadcast through the bound facade
    ///
    /// # Errors
    ///
    /// Returns `NotifierDetached` when this notifier was never attached or
    /// the facade has been dropped.
    pub fn send_notification(&self, name: &str, body: Option<Body>, kind: Option<&str>) -> Result<()> {
        let facade = self.facade().ok_or(AxonError::NotifierDetached)?;
        facade.send_notification(name, body, kind);
        Ok(())
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("attached", &self.facade().is_some())
            .finish()
    }
}
