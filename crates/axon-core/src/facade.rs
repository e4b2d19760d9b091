use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

use crate::controller::Controller;
use crate::model::Model;
use crate::notification::{Body, Notification};
use crate::roles::{Command, Mediator, Proxy};
use crate::view::View;
use crate::{log_op_end, log_op_start};

/// Application context aggregating one Model, one View, one Controller
///
/// The facade is the single entry point application code uses to register,
/// retrieve, and remove collaborators, and to broadcast. It is an explicit
/// context value: `Facade::new()` constructs the one instance the whole
/// application shares, and collaborators receive its handle at
/// registration time instead of resolving a global.
///
/// # Example
///
/// ```
/// use axon_core::Facade;
///
/// let facade = Facade::new();
/// facade.send_notification("app/start", None, None);
/// ```
pub struct Facade {
    model: Rc<Model>,
    view: Rc<View>,
    controller: Rc<Controller>,
    this: Weak<Facade>,
}

impl Facade {
    /// Construct the application context
    ///
    /// Builds the Model, View, and Controller trio exactly once and wires
    /// the controller back to this facade so fresh commands receive its
    /// handle.
    pub fn new() -> Rc<Self> {
        let view = Rc::new(View::new());
        let model = Rc::new(Model::new());
        let controller = Controller::new(Rc::clone(&view));

        let facade = Rc::new_cyclic(|this| Self {
            model,
            view,
            controller,
            this: this.clone(),
        });
        facade.controller.bind_facade(facade.this.clone());
        facade
    }

    /// Handle to the owned model registry
    pub fn model(&self) -> &Rc<Model> {
        &self.model
    }

    /// Handle to the owned view
    pub fn view(&self) -> &Rc<View> {
        &self.view
    }

    /// Handle to the owned controller
    pub fn controller(&self) -> &Rc<Controller> {
        &self.controller
    }

    // ===== Command surface =====

    /// Map a notification name to a command factory
    pub fn register_command<F>(&self, note_name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        self.controller.register_command(note_name, factory);
    }

    /// Unmap a command and retire its observer
    pub fn remove_command(&self, note_name: &str) {
        self.controller.remove_command(note_name);
    }

    /// Check whether a command is registered for the name
    pub fn has_command(&self, note_name: &str) -> bool {
        self.controller.has_command(note_name)
    }

    // ===== Proxy surface =====

    /// Hand the proxy this facade's handle, then store it in the model
    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        proxy.initialize_notifier(self.this.clone());
        self.model.register_proxy(proxy);
    }

    /// Retrieve a registered proxy by name
    pub fn retrieve_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.model.retrieve_proxy(name)
    }

    /// Remove and return a registered proxy
    pub fn remove_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.model.remove_proxy(name)
    }

    /// Check whether a proxy is registered under the name
    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    // ===== Mediator surface =====

    /// Hand the mediator this facade's handle, then register it in the view
    ///
    /// The handle arrives before `on_register` runs, so the hook may
    /// already broadcast.
    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        mediator.initialize_notifier(self.this.clone());
        self.view.register_mediator(mediator);
    }

    /// Retrieve a registered mediator by name
    pub fn retrieve_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.view.retrieve_mediator(name)
    }

    /// Remove a mediator, deregistering every declared interest
    pub fn remove_mediator(&self, name: &str) -> Option<Rc<dyn Mediator>> {
        self.view.remove_mediator(name)
    }

    /// Check whether a mediator is registered under the name
    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    // ===== Broadcast =====

    /// Construct a notification and fan it out through the view
    ///
    /// The sanctioned broadcast entry point for application code. Runs
    /// every matching handler synchronously to completion before
    /// returning; with nothing registered for the name it is a no-op.
    pub fn send_notification(&self, name: &str, body: Option<Body>, kind: Option<&str>) {
        log_op_start!("send_notification", note_name = name);
        let started = Instant::now();

        let mut note = Notification::new(name);
        if let Some(body) = body {
            note = note.with_body(body);
        }
        if let Some(kind) = kind {
            note = note.with_kind(kind);
        }

        self.view.notify_observers(&note);

        log_op_end!(
            "send_notification",
            duration_ms = started.elapsed().as_millis() as u64,
            note_name = name
        );
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("model", &self.model)
            .field("view", &self.view)
            .field("controller", &self.controller)
            .finish()
    }
}
