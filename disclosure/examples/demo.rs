use std::fs::File;

use disclosure::prelude::*;
use pagedom::{Document, Element, Key};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let doc = Document::new();
    let (faq_toggle, nav_open, nav_close) = markup(&doc);

    let page = Page::new(doc.clone());
    let report = page.init_all();
    println!(
        "discovery: {} created, {} bound, {} errors",
        report.created,
        report.bound,
        report.errors.len()
    );
    for err in &report.errors {
        println!("  {err}");
    }

    let faq = page.registry().collapse("faq").expect("faq collapse");
    let nav = page.registry().drawer("nav").expect("nav drawer");

    faq_toggle.click();
    println!("faq visible after click: {}", faq.is_visible());

    nav_open.click();
    println!(
        "nav visible: {}, backdrop: {}, body classes: {:?}",
        nav.is_visible(),
        nav.backdrop().is_some(),
        doc.body().classes()
    );

    doc.dispatch_key(Key::Escape);
    println!("nav visible after Escape: {}", nav.is_visible());

    nav_open.click();
    if let Some(backdrop) = nav.backdrop() {
        backdrop.click();
    }
    println!("nav visible after backdrop click: {}", nav.is_visible());

    nav_close.click();
    println!("target classes: {:?}", nav.target().classes());

    Ok(())
}

fn markup(doc: &Document) -> (Element, Element, Element) {
    let body = doc.body();

    let faq_toggle = doc.create_element("button");
    faq_toggle.set_attribute("data-collapse-toggle", "faq");
    faq_toggle.set_attribute("aria-expanded", "false");
    let faq = doc.create_element("div").with_id("faq");
    faq.add_class("hidden");

    let nav = doc.create_element("nav").with_id("nav");
    let nav_open = doc.create_element("button");
    nav_open.set_attribute("data-drawer-target", "nav");
    nav_open.set_attribute("data-drawer-show", "nav");
    nav_open.set_attribute("data-drawer-placement", "right");
    let nav_close = doc.create_element("button");
    nav_close.set_attribute("data-drawer-hide", "nav");
    nav.append_child(&nav_close);

    // A trigger pointing nowhere, to show error reporting.
    let stray = doc.create_element("button");
    stray.set_attribute("data-drawer-toggle", "missing");

    for el in [&faq_toggle, &faq, &nav_open, &nav, &stray] {
        body.append_child(el);
    }

    (faq_toggle, nav_open, nav_close)
}
