use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub const ACTION_ATTRIBUTE: &str = "data-action";

pub type ActionHandler = Rc<dyn Fn()>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Handler function '{0}' not found")]
    NotFound(String),
}

/// Maps `data-action` identifiers to handlers, built once at startup.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    handlers: BTreeMap<&'static str, ActionHandler>,
}

impl ActionRegistry {
    pub fn register(mut self, name: &'static str, handler: impl Fn() + 'static) -> Self {
        self.handlers.insert(name, Rc::new(handler));
        self
    }

    pub fn resolve(&self, name: &str) -> Result<ActionHandler, ActionError> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| ActionError::NotFound(name.to_string()))
    }

    /// Runs the handler for `name`. Unknown names only produce a warning.
    pub fn dispatch(&self, name: &str) -> Result<(), ActionError> {
        match self.resolve(name) {
            Ok(handler) => {
                handler();
                Ok(())
            }
            Err(err) => {
                log::warn!("{}", err);
                Err(err)
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

impl PartialEq for ActionRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|((a, ha), (b, hb))| a == b && Rc::ptr_eq(ha, hb))
    }
}

/// The `data-action` value of the nearest tagged ancestor of the event target.
pub fn action_of(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let tagged = target.closest(&format!("[{}]", ACTION_ATTRIBUTE)).ok()??;
    tagged.get_attribute(ACTION_ATTRIBUTE)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn dispatch_runs_registered_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let registry = ActionRegistry::default().register("scroll-to-top", move || counter.set(counter.get() + 1));

        assert_eq!(registry.dispatch("scroll-to-top"), Ok(()));
        assert_eq!(registry.dispatch("scroll-to-top"), Ok(()));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn unknown_action_is_a_typed_error() {
        let registry = ActionRegistry::default().register("toggle-theme", || {});
        let err = registry.dispatch("launchRockets").unwrap_err();
        assert_eq!(err, ActionError::NotFound("launchRockets".into()));
        assert_eq!(err.to_string(), "Handler function 'launchRockets' not found");
    }

    #[test]
    fn names_are_listed_in_order() {
        let registry = ActionRegistry::default()
            .register("toggle-theme", || {})
            .register("open-signup", || {});
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["open-signup", "toggle-theme"]);
    }
}
