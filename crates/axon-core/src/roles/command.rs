use std::rc::{Rc, Weak};

use crate::facade::Facade;
use crate::notification::Notification;

/// Stateless-per-invocation handler bound to a notification name
///
/// Commands are never stored; the controller keeps a factory and builds a
/// fresh instance for every execution, so no state leaks across unrelated
/// broadcasts of the same name. `execute` takes `&mut self` because the
/// instance is exclusively owned for the duration of one run.
pub trait Command {
    /// Receive the facade handle before `execute`
    ///
    /// The controller calls this on every fresh instance. Implementations
    /// that broadcast or reach registries store the handle; the default
    /// ignores it.
    fn initialize_notifier(&mut self, _facade: Weak<Facade>) {}

    /// Run the command against one notification
    fn execute(&mut self, note: &Notification);
}

/// Zero-argument factory producing a fresh command per execution
pub type CommandFactory = Rc<dyn Fn() -> Box<dyn Command>>;

/// Ordered aggregation of sub-command factories executed as one command
///
/// Each execution instantiates every sub-command fresh and runs them in
/// insertion order, synchronously, forwarding the facade handle to each.
///
/// # Example
///
/// ```
/// use axon_core::{CompositeCommand, Command, Notification};
///
/// struct Step;
/// impl Command for Step {
///     fn execute(&mut self, _note: &Notification) {}
/// }
///
/// let mut composite = CompositeCommand::new()
///     .add(|| Box::new(Step))
///     .add(|| Box::new(Step));
/// composite.execute(&Notification::new("boot"));
/// ```
#[derive(Default)]
pub struct CompositeCommand {
    sub_factories: Vec<CommandFactory>,
    facade: Weak<Facade>,
}

impl CompositeCommand {
    /// Create an empty composite
    pub fn new() -> Self {
        Self {
            sub_factories: Vec::new(),
            facade: Weak::new(),
        }
    }

    /// Append a sub-command factory
    pub fn add<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        self.sub_factories.push(Rc::new(factory));
        self
    }

    /// Number of sub-command factories
    pub fn len(&self) -> usize {
        self.sub_factories.len()
    }

    /// Whether the composite has no sub-commands
    pub fn is_empty(&self) -> bool {
        self.sub_factories.is_empty()
    }
}

impl Command for CompositeCommand {
    fn initialize_notifier(&mut self, facade: Weak<Facade>) {
        self.facade = facade;
    }

    fn execute(&mut self, note: &Notification) {
        for factory in &self.sub_factories {
            let mut sub = factory();
            sub.initialize_notifier(self.facade.clone());
            sub.execute(note);
        }
    }
}
