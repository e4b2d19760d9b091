use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use axon_core_types::ContextId;

use crate::facade::Facade;
use crate::notification::Notification;
use crate::observer::{NotifyHandler, Observer};
use crate::roles::{Command, CommandFactory};
use crate::view::View;

/// Command registry mapping notification names to command factories
///
/// The controller stores factories, never command instances: every
/// execution builds a fresh command, so no state leaks across unrelated
/// broadcasts of the same name. Observer bookkeeping is delegated to the
/// view, and it is idempotent — however many times a name is
/// re-registered, exactly one observer for it ever exists in the view.
pub struct Controller {
    command_map: RefCell<HashMap<String, CommandFactory>>,
    view: Rc<View>,
    /// Observer-context identity shared by every command observer
    context: ContextId,
    this: Weak<Controller>,
    facade: RefCell<Weak<Facade>>,
}

impl Controller {
    /// Create a controller delegating observer bookkeeping to `view`
    pub fn new(view: Rc<View>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            command_map: RefCell::new(HashMap::new()),
            view,
            context: ContextId::new(),
            this: this.clone(),
            facade: RefCell::new(Weak::new()),
        })
    }

    /// Bind the owning facade so fresh commands can receive its handle
    pub(crate) fn bind_facade(&self, facade: Weak<Facade>) {
        *self.facade.borrow_mut() = facade;
    }

    /// Map a notification name to a command factory
    ///
    /// The first registration for a name installs one observer in the view
    /// routing broadcasts of that name back into `execute_command`; that
    /// step runs exactly once per registration lifetime of the name.
    /// The factory mapping itself is overwritten unconditionally — last
    /// writer wins, observer creation stays idempotent.
    pub fn register_command<F>(&self, note_name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        let install_observer = !self.command_map.borrow().contains_key(note_name);

        if install_observer {
            let handler: NotifyHandler = {
                let controller = self.this.clone();
                Rc::new(move |note: &Notification| {
                    if let Some(controller) = controller.upgrade() {
                        controller.execute_command(note);
                    }
                })
            };
            self.view
                .register_observer(note_name, Observer::new(handler, self.context.clone()));
        }

        self.command_map
            .borrow_mut()
            .insert(note_name.to_string(), Rc::new(factory));
    }

    /// Instantiate and run the command registered for a notification
    ///
    /// No-op when the name has no factory. Otherwise a fresh command is
    /// built, handed the facade handle, and executed synchronously. The
    /// map borrow is released before any command code runs, so a command
    /// may re-enter the registry (including re-registering its own name).
    pub fn execute_command(&self, note: &Notification) {
        let factory = {
            let map = self.command_map.borrow();
            map.get(note.name()).cloned()
        };
        let Some(factory) = factory else {
            return;
        };

        tracing::debug!(
            component = module_path!(),
            note_name = note.name(),
            "executing command"
        );

        let mut command = factory();
        command.initialize_notifier(self.facade.borrow().clone());
        command.execute(note);
    }

    /// Check whether a command is registered for the name
    pub fn has_command(&self, note_name: &str) -> bool {
        self.command_map.borrow().contains_key(note_name)
    }

    /// Unmap a command and retire its observer
    ///
    /// No-op when the name is not registered. The observer owned by the
    /// controller context is removed from the view first, then the factory
    /// mapping is dropped. An observer list that has already drained is
    /// tolerated.
    pub fn remove_command(&self, note_name: &str) {
        if !self.has_command(note_name) {
            return;
        }

        if let Err(err) = self.view.remove_observer(note_name, &self.context) {
            tracing::debug!(
                component = module_path!(),
                note_name,
                err.code = err.code(),
                "observer list already gone during command removal"
            );
        }

        self.command_map.borrow_mut().remove(note_name);
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("commands", &self.command_map.borrow().len())
            .field("context", &self.context)
            .finish()
    }
}
