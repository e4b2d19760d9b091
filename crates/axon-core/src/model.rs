use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::roles::Proxy;

/// Name-keyed registry of proxy instances
///
/// Pure CRUD; no dispatch logic lives here. Lifecycle hooks run after the
/// registry borrow is released, so a hook may re-enter the model.
pub struct Model {
    proxy_map: RefCell<HashMap<String, Rc<dyn Proxy>>>,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self {
            proxy_map: RefCell::new(HashMap::new()),
        }
    }

    /// Store a proxy under its name, then invoke `on_register`
    ///
    /// Re-registering a name replaces the previous entry; the replacement
    /// instance gets the hook.
    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        let name = proxy.name().to_string();
        tracing::debug!(
            component = module_path!(),
            proxy_name = %name,
            "registering proxy"
        );
        self.proxy_map.borrow_mut().insert(name, Rc::clone(&proxy));
        proxy.on_register();
    }

    /// Retrieve the stored proxy, or None when the name is absent
    pub fn retrieve_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        self.proxy_map.borrow().get(name).map(Rc::clone)
    }

    /// Check whether a proxy is registered under the name
    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxy_map.borrow().contains_key(name)
    }

    /// Remove and return the stored proxy, invoking `on_remove` on it
    ///
    /// Returns None when the name is absent.
    pub fn remove_proxy(&self, name: &str) -> Option<Rc<dyn Proxy>> {
        let removed = self.proxy_map.borrow_mut().remove(name);
        if let Some(ref proxy) = removed {
            proxy.on_remove();
        }
        removed
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("proxies", &self.proxy_map.borrow().len())
            .finish()
    }
}
