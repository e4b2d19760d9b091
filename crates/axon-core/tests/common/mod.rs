#![allow(dead_code)]

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use axon_core::{Command, Facade, Mediator, Notification, Notifier, Proxy};

/// Value object shared through notification bodies in accumulation tests
///
/// Interior mutability on both fields lets handlers accumulate into it
/// while the notification envelope stays immutable.
#[derive(Debug, Default)]
pub struct CounterVo {
    pub input: Cell<i32>,
    pub result: Cell<i32>,
}

impl CounterVo {
    #[allow(dead_code)]
    pub fn with_input(input: i32) -> Rc<Self> {
        let vo = Self::default();
        vo.input.set(input);
        Rc::new(vo)
    }
}

/// Mediator test double recording every delivered notification name
///
/// Interests are fixed at construction. When a delivered body downcasts
/// to [`CounterVo`], the handler performs `result += 2 * input`.
pub struct RecordingMediator {
    name: String,
    interests: Vec<String>,
    pub seen: RefCell<Vec<String>>,
    pub registered: Cell<bool>,
    pub removed: Cell<bool>,
    pub interests_queried: Cell<u32>,
    pub notifier: Notifier,
}

impl RecordingMediator {
    #[allow(dead_code)]
    pub fn new(name: &str, interests: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            seen: RefCell::new(Vec::new()),
            registered: Cell::new(false),
            removed: Cell::new(false),
            interests_queried: Cell::new(0),
            notifier: Notifier::new(),
        })
    }
}

impl Mediator for RecordingMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn list_notification_interests(&self) -> Vec<String> {
        self.interests_queried.set(self.interests_queried.get() + 1);
        self.interests.clone()
    }

    fn handle_notification(&self, note: &Notification) {
        self.seen.borrow_mut().push(note.name().to_string());
        if let Some(vo) = note.body_as::<CounterVo>() {
            vo.result.set(vo.result.get() + 2 * vo.input.get());
        }
    }

    fn initialize_notifier(&self, facade: Weak<Facade>) {
        self.notifier.attach(facade);
    }

    fn on_register(&self) {
        self.registered.set(true);
    }

    fn on_remove(&self) {
        self.removed.set(true);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Proxy test double with lifecycle flags and a trivial data payload
pub struct StubProxy {
    name: String,
    pub data: RefCell<Vec<String>>,
    pub registered: Cell<bool>,
    pub removed: Cell<bool>,
}

impl StubProxy {
    #[allow(dead_code)]
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            data: RefCell::new(Vec::new()),
            registered: Cell::new(false),
            removed: Cell::new(false),
        })
    }
}

impl Proxy for StubProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_register(&self) {
        self.registered.set(true);
    }

    fn on_remove(&self) {
        self.removed.set(true);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Command doubling the shared input into the shared result
///
/// Performs `result += 2 * input` against a [`CounterVo`] body.
#[derive(Default)]
pub struct DoubleInputCommand;

impl Command for DoubleInputCommand {
    fn execute(&mut self, note: &Notification) {
        if let Some(vo) = note.body_as::<CounterVo>() {
            vo.result.set(vo.result.get() + 2 * vo.input.get());
        }
    }
}

/// Command counting its executions into a shared tally
pub struct TallyCommand {
    pub tally: Rc<Cell<u32>>,
}

impl TallyCommand {
    #[allow(dead_code)]
    pub fn factory(tally: Rc<Cell<u32>>) -> impl Fn() -> Box<dyn Command> {
        move || {
            Box::new(TallyCommand {
                tally: tally.clone(),
            })
        }
    }
}

impl Command for TallyCommand {
    fn execute(&mut self, _note: &Notification) {
        self.tally.set(self.tally.get() + 1);
    }
}
