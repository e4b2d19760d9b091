use std::cell::RefCell;
use std::rc::Rc;

use axon_core::{AxonError, Notification, NotifyHandler, Observer, View};
use axon_core_types::ContextId;

fn recording_handler(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> NotifyHandler {
    let log = log.clone();
    Rc::new(move |_note: &Notification| log.borrow_mut().push(label))
}

// ===== DELIVERY ORDER TESTS =====

#[test]
fn test_observers_fire_in_insertion_order() {
    let view = View::new();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    view.register_observer("evt", Observer::new(recording_handler(&log, "a"), ContextId::new()));
    view.register_observer("evt", Observer::new(recording_handler(&log, "b"), ContextId::new()));
    view.register_observer("evt", Observer::new(recording_handler(&log, "c"), ContextId::new()));

    view.notify_observers(&Notification::new("evt"));
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn test_notify_with_no_observer_list_is_a_no_op() {
    let view = View::new();
    // Nothing registered; must return without error or side effect
    view.notify_observers(&Notification::new("unheard"));
    assert_eq!(view.observer_count("unheard"), None);
}

#[test]
fn test_observers_for_other_names_are_not_invoked() {
    let view = View::new();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    view.register_observer("evt", Observer::new(recording_handler(&log, "evt"), ContextId::new()));
    view.register_observer(
        "other",
        Observer::new(recording_handler(&log, "other"), ContextId::new()),
    );

    view.notify_observers(&Notification::new("evt"));
    assert_eq!(*log.borrow(), vec!["evt"]);
}

// ===== REMOVAL TESTS =====

#[test]
fn test_remove_observer_matches_on_context_identity() {
    let view = View::new();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let ctx_a = ContextId::new();
    let ctx_b = ContextId::new();

    view.register_observer("evt", Observer::new(recording_handler(&log, "a"), ctx_a.clone()));
    view.register_observer("evt", Observer::new(recording_handler(&log, "b"), ctx_b));

    view.remove_observer("evt", &ctx_a).unwrap();
    view.notify_observers(&Notification::new("evt"));

    assert_eq!(*log.borrow(), vec!["b"]);
    assert_eq!(view.observer_count("evt"), Some(1));
}

#[test]
fn test_removing_last_observer_deletes_the_name_key() {
    let view = View::new();
    let ctx = ContextId::new();

    view.register_observer("evt", Observer::new(Rc::new(|_: &Notification| {}), ctx.clone()));
    assert_eq!(view.observer_count("evt"), Some(1));

    view.remove_observer("evt", &ctx).unwrap();

    // The key is gone, so a second removal reports the missing list
    assert_eq!(view.observer_count("evt"), None);
    assert_eq!(
        view.remove_observer("evt", &ctx),
        Err(AxonError::ObserversNotFound {
            note_name: "evt".to_string()
        })
    );
}

#[test]
fn test_remove_observer_without_matching_context_is_quiet() {
    let view = View::new();
    let stranger = ContextId::new();

    view.register_observer("evt", Observer::new(Rc::new(|_: &Notification| {}), ContextId::new()));
    view.remove_observer("evt", &stranger).unwrap();

    assert_eq!(view.observer_count("evt"), Some(1));
}

#[test]
fn test_remove_observer_on_absent_name_errors() {
    let view = View::new();
    let result = view.remove_observer("never-registered", &ContextId::new());
    assert!(matches!(result, Err(AxonError::ObserversNotFound { .. })));
}

// ===== SNAPSHOT ISOLATION TESTS =====

#[test]
fn test_observer_registered_mid_dispatch_misses_current_broadcast() {
    let view = Rc::new(View::new());
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let registrar: NotifyHandler = {
        let view = Rc::clone(&view);
        let log = log.clone();
        Rc::new(move |_note: &Notification| {
            log.borrow_mut().push("registrar");
            view.register_observer(
                "evt",
                Observer::new(recording_handler(&log, "late"), ContextId::new()),
            );
        })
    };
    view.register_observer("evt", Observer::new(registrar, ContextId::new()));

    view.notify_observers(&Notification::new("evt"));
    // The late observer was not in the snapshot
    assert_eq!(*log.borrow(), vec!["registrar"]);

    view.notify_observers(&Notification::new("evt"));
    // It is in the next one
    assert_eq!(*log.borrow(), vec!["registrar", "registrar", "late"]);
}
