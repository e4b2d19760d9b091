use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Shared notification body
///
/// The body is handed to every receiving handler by reference. A concrete
/// body type that needs to accumulate results across deliveries uses
/// interior mutability (`Cell`/`RefCell` fields); the envelope itself never
/// changes after construction.
pub type Body = Rc<dyn Any>;

/// Immutable message envelope broadcast to registered observers
///
/// A Notification is created once per broadcast and passed by reference
/// through dispatch. The optional body is the sole mutable surface: it is
/// intentionally shared with receiving handlers so they can accumulate
/// results across repeated or multiple deliveries of the same instance.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use axon_core::Notification;
///
/// let note = Notification::new("user/login")
///     .with_body(Rc::new(42u32))
///     .with_kind("auth");
///
/// assert_eq!(note.name(), "user/login");
/// assert_eq!(note.body_as::<u32>(), Some(&42));
/// assert_eq!(note.kind(), Some("auth"));
/// ```
#[derive(Clone)]
pub struct Notification {
    name: String,
    body: Option<Body>,
    kind: Option<String>,
}

impl Notification {
    /// Create a new Notification with the given name and no body
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Attach a shared body
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a kind discriminator
    ///
    /// The kind lets several logical message flavors share one
    /// notification name; handlers may branch on it.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Get the notification name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shared body, if any
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Downcast the body to a concrete type
    ///
    /// Returns None when there is no body or the body is a different type.
    pub fn body_as<T: 'static>(&self) -> Option<&T> {
        self.body.as_ref().and_then(|b| b.downcast_ref::<T>())
    }

    /// Get the kind discriminator, if any
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}
