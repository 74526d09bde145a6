use std::cell::Cell;
use std::rc::Rc;

use pagedom::{listener, Document, Event, EventKind, Key};

// ============================================================================
// Tree and Queries
// ============================================================================

#[test]
fn test_created_element_is_detached_until_appended() {
    let doc = Document::new();
    let panel = doc.create_element("div").with_id("panel");

    assert!(!panel.is_connected());
    assert!(doc.get_element_by_id("panel").is_none());

    doc.body().append_child(&panel);

    assert!(panel.is_connected());
    assert_eq!(doc.get_element_by_id("panel"), Some(panel));
    assert_eq!(doc.connected_len(), 1);
}

#[test]
fn test_remove_detaches_subtree() {
    let doc = Document::new();
    let outer = doc.create_element("div").with_id("outer");
    let inner = doc.create_element("span").with_id("inner");
    outer.append_child(&inner);
    doc.body().append_child(&outer);

    assert!(inner.is_connected());

    outer.remove();

    assert!(!outer.is_connected());
    assert!(!inner.is_connected());
    assert!(doc.get_element_by_id("inner").is_none());
    assert_eq!(doc.connected_len(), 0);
}

#[test]
fn test_query_all_by_attribute_in_document_order() {
    let doc = Document::new();
    let body = doc.body();
    let a = doc.create_element("button").with_id("a");
    a.set_attribute("data-toggle", "x");
    let wrapper = doc.create_element("div");
    let b = doc.create_element("button").with_id("b");
    b.set_attribute("data-toggle", "y");
    let c = doc.create_element("button").with_id("c");
    wrapper.append_child(&b);
    body.append_child(&a);
    body.append_child(&wrapper);
    body.append_child(&c);

    let ids: Vec<String> = doc
        .query_all_by_attribute("data-toggle")
        .iter()
        .map(|el| el.id())
        .collect();

    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_append_ancestor_into_descendant_is_ignored() {
    let doc = Document::new();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    outer.append_child(&inner);
    doc.body().append_child(&outer);

    inner.append_child(&outer);

    assert!(outer.is_connected());
    assert_eq!(outer.children(), vec![inner]);
}

// ============================================================================
// Attributes and Classes
// ============================================================================

#[test]
fn test_attributes() {
    let doc = Document::new();
    let el = doc.create_element("div");

    assert!(!el.has_attribute("aria-hidden"));
    el.set_attribute("aria-hidden", "true");
    assert_eq!(el.get_attribute("aria-hidden").as_deref(), Some("true"));

    el.set_attribute("aria-hidden", "false");
    assert_eq!(el.get_attribute("aria-hidden").as_deref(), Some("false"));

    el.remove_attribute("aria-hidden");
    assert!(!el.has_attribute("aria-hidden"));
    assert_eq!(el.id(), "");
}

#[test]
fn test_class_list_is_ordered_and_unique() {
    let doc = Document::new();
    let el = doc.create_element("div");

    el.add_class("left-0");
    el.add_class("top-0");
    el.add_class("left-0");
    el.add_class("");

    assert_eq!(el.classes(), vec!["left-0".to_string(), "top-0".to_string()]);
    assert!(el.has_class("top-0"));

    el.remove_class("left-0");
    el.remove_class("missing");
    assert_eq!(el.classes(), vec!["top-0".to_string()]);
}

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_click_runs_listener_once_even_if_added_twice() {
    let doc = Document::new();
    let button = doc.create_element("button");
    let clicks = Rc::new(Cell::new(0));

    let handler = {
        let clicks = Rc::clone(&clicks);
        listener(move |event| {
            assert!(matches!(event, Event::Click { .. }));
            clicks.set(clicks.get() + 1);
        })
    };

    assert!(button.add_event_listener(EventKind::Click, &handler));
    assert!(!button.add_event_listener(EventKind::Click, &handler));

    button.click();
    assert_eq!(clicks.get(), 1);
    assert_eq!(button.listener_count(EventKind::Click), 1);
}

#[test]
fn test_remove_requires_the_same_listener() {
    let doc = Document::new();
    let button = doc.create_element("button");
    let clicks = Rc::new(Cell::new(0));

    let make = |clicks: Rc<Cell<u32>>| listener(move |_| clicks.set(clicks.get() + 1));
    let original = make(Rc::clone(&clicks));
    let lookalike = make(Rc::clone(&clicks));

    button.add_event_listener(EventKind::Click, &original);
    assert!(!button.remove_event_listener(EventKind::Click, &lookalike));

    button.click();
    assert_eq!(clicks.get(), 1);

    assert!(button.remove_event_listener(EventKind::Click, &original));
    button.click();
    assert_eq!(clicks.get(), 1);
}

#[test]
fn test_listener_may_mutate_document_during_dispatch() {
    let doc = Document::new();
    let button = doc.create_element("button");
    doc.body().append_child(&button);

    let handler = {
        let doc = doc.clone();
        listener(move |_| {
            let created = doc.create_element("div").with_id("created");
            doc.body().append_child(&created);
            doc.body().add_class("touched");
        })
    };
    button.add_event_listener(EventKind::Click, &handler);

    button.click();

    assert!(doc.get_element_by_id("created").is_some());
    assert!(doc.body().has_class("touched"));
}

#[test]
fn test_document_key_listeners() {
    let doc = Document::new();
    let seen = Rc::new(Cell::new(None));

    let handler = {
        let seen = Rc::clone(&seen);
        listener(move |event| {
            if let Event::KeyDown { key } = event {
                seen.set(Some(*key));
            }
        })
    };

    doc.add_event_listener(EventKind::KeyDown, &handler);
    doc.dispatch_key(Key::Escape);
    assert_eq!(seen.get(), Some(Key::Escape));

    assert!(doc.remove_event_listener(EventKind::KeyDown, &handler));
    assert_eq!(doc.listener_count(EventKind::KeyDown), 0);
    doc.dispatch_key(Key::Enter);
    assert_eq!(seen.get(), Some(Key::Escape));
}
