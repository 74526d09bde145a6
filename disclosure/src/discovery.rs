//! Attribute-driven discovery: wires up widgets from `data-*` markup.
//!
//! | attribute                                  | effect                              |
//! |--------------------------------------------|-------------------------------------|
//! | `data-collapse-toggle="<id>"`              | collapse of `<id>` toggled by this  |
//! | `data-drawer-target="<id>"`                | creates the drawer for `<id>`       |
//! | `data-drawer-toggle="<id>"`                | click toggles the drawer            |
//! | `data-drawer-dismiss` / `data-drawer-hide` | click hides the drawer              |
//! | `data-drawer-show="<id>"`                  | click shows the drawer              |
//!
//! Drawer options come from the `data-drawer-target` element:
//! `data-drawer-placement`, `data-drawer-body-scrolling`,
//! `data-drawer-backdrop`, `data-drawer-edge`, `data-drawer-edge-offset`.
//! Flags read `"true"` as true and any other non-empty value as false;
//! missing or empty attributes keep the default.
//!
//! A trigger that cannot be resolved is logged and skipped; the scan always
//! finishes.

use log::error;
use pagedom::{Element, EventKind, listener};

use crate::collapse::{Collapse, CollapseOptions};
use crate::drawer::{Drawer, DrawerSettings};
use crate::error::DiscoveryError;
use crate::page::{Page, TriggerAction};
use crate::placement::Placement;
use crate::registry::WidgetKind;
use crate::widget::Disclosure;

pub const COLLAPSE_TOGGLE: &str = "data-collapse-toggle";
pub const DRAWER_TARGET: &str = "data-drawer-target";
pub const DRAWER_TOGGLE: &str = "data-drawer-toggle";
pub const DRAWER_DISMISS: &str = "data-drawer-dismiss";
pub const DRAWER_HIDE: &str = "data-drawer-hide";
pub const DRAWER_SHOW: &str = "data-drawer-show";

/// Outcome of a discovery pass.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Widgets constructed during the pass.
    pub created: usize,
    /// Trigger listeners attached during the pass.
    pub bound: usize,
    /// Triggers that were skipped, in document order.
    pub errors: Vec<DiscoveryError>,
}

impl DiscoveryReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: DiscoveryReport) {
        self.created += other.created;
        self.bound += other.bound;
        self.errors.extend(other.errors);
    }

    fn fail(&mut self, err: DiscoveryError) {
        error!("{err}");
        self.errors.push(err);
    }
}

impl Page {
    /// Run every discovery pass.
    pub fn init_all(&self) -> DiscoveryReport {
        let mut report = self.init_collapses();
        report.merge(self.init_drawers());
        report
    }

    /// Wire up every `data-collapse-toggle` trigger. The first trigger for a
    /// target creates its collapse; further triggers toggle that same
    /// collapse.
    pub fn init_collapses(&self) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for trigger in self.document().query_all_by_attribute(COLLAPSE_TOGGLE) {
            let target_id = trigger.get_attribute(COLLAPSE_TOGGLE).unwrap_or_default();
            let Some(target) = self.document().get_element_by_id(&target_id) else {
                report.fail(DiscoveryError::TargetNotFound {
                    attribute: COLLAPSE_TOGGLE,
                    id: target_id,
                });
                continue;
            };

            if !self.mark_bound(trigger.node_id(), WidgetKind::Collapse, TriggerAction::Toggle) {
                continue;
            }

            match self.registry().collapse(&target_id) {
                // Built elsewhere around this very trigger: already bound.
                Some(collapse) if collapse.trigger() == Some(&trigger) => {}
                Some(collapse) => {
                    let on_click = listener(move |_| collapse.toggle());
                    trigger.add_event_listener(EventKind::Click, &on_click);
                    report.bound += 1;
                }
                None => {
                    Collapse::new(
                        self.registry(),
                        target,
                        Some(trigger),
                        CollapseOptions::default(),
                    );
                    report.created += 1;
                }
            }
        }

        report
    }

    /// Create drawers from `data-drawer-target` markup, then bind the
    /// toggle, hide and show triggers to them.
    pub fn init_drawers(&self) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        for trigger in self.document().query_all_by_attribute(DRAWER_TARGET) {
            let drawer_id = trigger.get_attribute(DRAWER_TARGET).unwrap_or_default();
            let Some(target) = self.document().get_element_by_id(&drawer_id) else {
                report.fail(DiscoveryError::DrawerNotFound {
                    attribute: DRAWER_TARGET,
                    id: drawer_id,
                });
                continue;
            };

            if self.registry().exists(WidgetKind::Drawer, &drawer_id) {
                continue;
            }
            Drawer::new(self.registry(), target, drawer_settings(&trigger).into());
            report.created += 1;
        }

        for trigger in self.document().query_all_by_attribute(DRAWER_TOGGLE) {
            self.bind_drawer_trigger(&trigger, DRAWER_TOGGLE, TriggerAction::Toggle, &mut report);
        }

        for trigger in self.document().query_all_by_attribute(DRAWER_DISMISS) {
            self.bind_drawer_trigger(&trigger, DRAWER_DISMISS, TriggerAction::Hide, &mut report);
        }
        for trigger in self.document().query_all_by_attribute(DRAWER_HIDE) {
            // Carrying both attributes binds once, under dismiss.
            if trigger.has_attribute(DRAWER_DISMISS) {
                continue;
            }
            self.bind_drawer_trigger(&trigger, DRAWER_HIDE, TriggerAction::Hide, &mut report);
        }

        for trigger in self.document().query_all_by_attribute(DRAWER_SHOW) {
            self.bind_drawer_trigger(&trigger, DRAWER_SHOW, TriggerAction::Show, &mut report);
        }

        report
    }

    fn bind_drawer_trigger(
        &self,
        trigger: &Element,
        attribute: &'static str,
        action: TriggerAction,
        report: &mut DiscoveryReport,
    ) {
        let drawer_id = trigger.get_attribute(attribute).unwrap_or_default();
        if self.document().get_element_by_id(&drawer_id).is_none() {
            report.fail(DiscoveryError::DrawerNotFound {
                attribute,
                id: drawer_id,
            });
            return;
        }
        let Some(drawer) = self.registry().drawer(&drawer_id) else {
            report.fail(DiscoveryError::NotInitialized {
                kind: WidgetKind::Drawer,
                id: drawer_id,
            });
            return;
        };

        if !self.mark_bound(trigger.node_id(), WidgetKind::Drawer, action) {
            return;
        }

        let on_click = listener(move |_| match action {
            TriggerAction::Toggle => drawer.toggle(),
            TriggerAction::Show => drawer.show(),
            TriggerAction::Hide => drawer.hide(),
        });
        trigger.add_event_listener(EventKind::Click, &on_click);
        report.bound += 1;
    }
}

/// Typed drawer settings from the `data-drawer-*` attributes of `trigger`.
fn drawer_settings(trigger: &Element) -> DrawerSettings {
    let defaults = DrawerSettings::default();
    let text = |name: &str| trigger.get_attribute(name).filter(|v| !v.is_empty());
    let flag = |name: &str, default: bool| text(name).map_or(default, |v| v == "true");

    DrawerSettings {
        placement: text("data-drawer-placement")
            .map_or(defaults.placement, |v| Placement::parse(&v)),
        body_scrolling: flag("data-drawer-body-scrolling", defaults.body_scrolling),
        backdrop: flag("data-drawer-backdrop", defaults.backdrop),
        edge: flag("data-drawer-edge", defaults.edge),
        edge_offset: text("data-drawer-edge-offset").unwrap_or(defaults.edge_offset),
        backdrop_classes: defaults.backdrop_classes,
    }
}
