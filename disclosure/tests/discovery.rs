use disclosure::drawer::BACKDROP_ATTRIBUTE;
use disclosure::prelude::*;
use pagedom::{Document, Element, EventKind, Key};

fn element(doc: &Document, tag: &str, attrs: &[(&str, &str)]) -> Element {
    let el = doc.create_element(tag);
    for (name, value) in attrs {
        el.set_attribute(name, value);
    }
    doc.body().append_child(&el);
    el
}

// ============================================================================
// Collapses
// ============================================================================

#[test]
fn test_collapse_markup() {
    let doc = Document::new();
    let trigger = element(
        &doc,
        "button",
        &[("data-collapse-toggle", "menu"), ("aria-expanded", "false")],
    );
    let menu = element(&doc, "ul", &[("id", "menu")]);
    menu.add_class("hidden");

    let page = Page::new(doc.clone());
    let report = page.init_collapses();

    assert!(report.is_clean());
    assert_eq!(report.created, 1);

    let collapse = page.registry().collapse("menu").expect("collapse created");
    assert_eq!(collapse.trigger(), Some(&trigger));
    assert!(collapse.is_hidden());

    trigger.click();
    assert!(collapse.is_visible());
    assert!(!menu.has_class("hidden"));
}

#[test]
fn test_rescan_does_not_double_bind() {
    let doc = Document::new();
    let trigger = element(&doc, "button", &[("data-collapse-toggle", "menu")]);
    element(&doc, "ul", &[("id", "menu")]);

    let page = Page::new(doc.clone());
    page.init_all();
    let again = page.init_all();

    assert_eq!(again.created, 0);
    assert_eq!(trigger.listener_count(EventKind::Click), 1);
}

#[test]
fn test_missing_collapse_target_is_reported_and_skipped() {
    let doc = Document::new();
    element(&doc, "button", &[("data-collapse-toggle", "ghost")]);
    element(&doc, "button", &[("data-collapse-toggle", "real")]);
    element(&doc, "div", &[("id", "real")]);

    let page = Page::new(doc);
    let report = page.init_collapses();

    assert_eq!(report.created, 1);
    assert_eq!(
        report.errors,
        vec![DiscoveryError::TargetNotFound {
            attribute: "data-collapse-toggle",
            id: "ghost".to_string(),
        }]
    );
    assert!(page.registry().collapse("real").is_some());
}

#[test]
fn test_every_collapse_trigger_is_bound() {
    let doc = Document::new();
    let first = element(&doc, "button", &[("data-collapse-toggle", "menu")]);
    let second = element(&doc, "button", &[("data-collapse-toggle", "menu")]);
    let menu = element(&doc, "ul", &[("id", "menu")]);
    menu.add_class("hidden");

    let page = Page::new(doc.clone());
    let report = page.init_collapses();

    assert_eq!(report.created, 1);
    assert_eq!(report.bound, 1);
    assert_eq!(first.listener_count(EventKind::Click), 1);
    assert_eq!(second.listener_count(EventKind::Click), 1);

    second.click();
    assert!(!menu.has_class("hidden"));
    first.click();
    assert!(menu.has_class("hidden"));

    let again = page.init_collapses();
    assert_eq!(again.bound, 0);
    assert_eq!(second.listener_count(EventKind::Click), 1);
}

// ============================================================================
// Drawers
// ============================================================================

#[test]
fn test_drawer_markup_with_options() {
    let doc = Document::new();
    let sidebar = element(&doc, "aside", &[("id", "sidebar")]);
    let opener = element(
        &doc,
        "button",
        &[
            ("data-drawer-target", "sidebar"),
            ("data-drawer-show", "sidebar"),
            ("data-drawer-placement", "right"),
            ("data-drawer-backdrop", "false"),
            ("data-drawer-body-scrolling", "true"),
        ],
    );
    let closer = element(&doc, "button", &[("data-drawer-hide", "sidebar")]);
    let toggler = element(&doc, "button", &[("data-drawer-toggle", "sidebar")]);

    let page = Page::new(doc.clone());
    let report = page.init_drawers();

    assert!(report.is_clean());
    assert_eq!(report.created, 1);
    assert_eq!(report.bound, 3);

    let drawer = page.registry().drawer("sidebar").expect("drawer created");
    let settings = drawer.options().settings();
    assert_eq!(settings.placement, Placement::Right);
    assert!(!settings.backdrop);
    assert!(settings.body_scrolling);
    assert!(sidebar.has_class("right-0"));

    opener.click();
    assert!(drawer.is_visible());
    assert!(doc.query_all_by_attribute(BACKDROP_ATTRIBUTE).is_empty());
    assert!(!doc.body().has_class("overflow-hidden"));

    closer.click();
    assert!(drawer.is_hidden());

    toggler.click();
    assert!(drawer.is_visible());
    toggler.click();
    assert!(drawer.is_hidden());
}

#[test]
fn test_dismiss_and_hide_on_one_trigger_binds_once() {
    let doc = Document::new();
    element(&doc, "aside", &[("id", "sidebar")]);
    element(&doc, "button", &[("data-drawer-target", "sidebar")]);
    let close = element(
        &doc,
        "button",
        &[("data-drawer-dismiss", "sidebar"), ("data-drawer-hide", "sidebar")],
    );

    let page = Page::new(doc);
    let report = page.init_drawers();

    assert_eq!(report.bound, 1);
    assert_eq!(close.listener_count(EventKind::Click), 1);
}

#[test]
fn test_drawer_rescan_keeps_existing_instance() {
    let doc = Document::new();
    element(&doc, "aside", &[("id", "sidebar")]);
    let toggle = element(
        &doc,
        "button",
        &[("data-drawer-target", "sidebar"), ("data-drawer-toggle", "sidebar")],
    );

    let page = Page::new(doc.clone());
    page.init_drawers();
    let first = page.registry().drawer("sidebar");
    let again = page.init_drawers();

    assert_eq!(again.created, 0);
    assert_eq!(again.bound, 0);
    assert_eq!(page.registry().drawer("sidebar"), first);
    assert_eq!(toggle.listener_count(EventKind::Click), 1);
    assert_eq!(doc.listener_count(EventKind::KeyDown), 1);
}

#[test]
fn test_triggers_work_after_remove_instance() {
    let doc = Document::new();
    element(&doc, "nav", &[("id", "nav")]);
    let toggle = element(
        &doc,
        "button",
        &[("data-drawer-target", "nav"), ("data-drawer-toggle", "nav")],
    );

    let page = Page::new(doc.clone());
    page.init_all();
    toggle.click();

    page.registry().drawer("nav").unwrap().remove_instance();
    assert!(page.registry().drawer("nav").is_none());

    doc.dispatch_key(Key::Escape);
    assert!(doc.query_all_by_attribute(BACKDROP_ATTRIBUTE).is_empty());
    assert!(!doc.body().has_class("overflow-hidden"));

    toggle.click();
    assert_eq!(doc.query_all_by_attribute(BACKDROP_ATTRIBUTE).len(), 1);
    toggle.click();
    assert!(doc.query_all_by_attribute(BACKDROP_ATTRIBUTE).is_empty());
}

#[test]
fn test_drawer_errors_do_not_abort_scan() {
    let doc = Document::new();
    element(&doc, "aside", &[("id", "sidebar")]);
    element(&doc, "aside", &[("id", "orphan")]);
    element(&doc, "button", &[("data-drawer-target", "missing")]);
    element(&doc, "button", &[("data-drawer-target", "sidebar")]);
    element(&doc, "button", &[("data-drawer-toggle", "orphan")]);
    element(&doc, "button", &[("data-drawer-show", "nowhere")]);
    let ok = element(&doc, "button", &[("data-drawer-show", "sidebar")]);

    let page = Page::new(doc);
    let report = page.init_drawers();

    assert_eq!(report.created, 1);
    assert_eq!(report.bound, 1);
    assert_eq!(
        report.errors,
        vec![
            DiscoveryError::DrawerNotFound {
                attribute: "data-drawer-target",
                id: "missing".to_string(),
            },
            DiscoveryError::NotInitialized {
                kind: WidgetKind::Drawer,
                id: "orphan".to_string(),
            },
            DiscoveryError::DrawerNotFound {
                attribute: "data-drawer-show",
                id: "nowhere".to_string(),
            },
        ]
    );

    ok.click();
    assert!(page.registry().drawer("sidebar").unwrap().is_visible());
}

#[test]
fn test_error_messages() {
    let err = DiscoveryError::TargetNotFound {
        attribute: "data-collapse-toggle",
        id: "menu".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "The target element with id \"menu\" does not exist. Please check the data-collapse-toggle attribute."
    );

    let err = DiscoveryError::DrawerNotFound {
        attribute: "data-drawer-show",
        id: "nav".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Drawer with id nav not found. Are you sure that the data-drawer-target attribute points to the correct drawer id?"
    );

    let err = DiscoveryError::NotInitialized {
        kind: WidgetKind::Drawer,
        id: "nav".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Drawer with id nav has not been initialized. Please initialize it using the data-drawer-target attribute."
    );
}

// ============================================================================
// Full Page
// ============================================================================

#[test]
fn test_init_all_merges_reports() {
    let doc = Document::new();
    element(&doc, "button", &[("data-collapse-toggle", "faq")]);
    element(&doc, "div", &[("id", "faq")]);
    element(&doc, "nav", &[("id", "nav")]);
    element(
        &doc,
        "button",
        &[("data-drawer-target", "nav"), ("data-drawer-toggle", "nav")],
    );
    element(&doc, "button", &[("data-collapse-toggle", "gone")]);

    let page = Page::new(doc);
    let report = page.init_all();

    assert_eq!(report.created, 2);
    assert_eq!(report.bound, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(page.registry().len(), 2);
}
