#![allow(dead_code)]
// Recording doubles for the collaborator seams, shared by the test files.

use folio_core::{
    default_rules, InteractionEngine, LabelClass, LabelHost, Navigator, ANCHOR_GITHUB,
    DEFAULT_LINKS, INITIAL_ACTIVE_ANCHORS,
};
use folio_core::TickInput;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

#[derive(Default)]
pub struct RecordingLabels {
    pub created: Vec<String>,
    pub active: BTreeSet<String>,
    pub hover: BTreeSet<String>,
    pub positions: HashMap<String, (f32, f32)>,
    pub hint_visible: bool,
    pub hint_pulsing: bool,
}

impl LabelHost for RecordingLabels {
    fn create_label(&mut self, name: &str) {
        self.created.push(name.to_string());
    }
    fn set_label_position(&mut self, name: &str, x: f32, y: f32) {
        self.positions.insert(name.to_string(), (x, y));
    }
    fn set_label_class(&mut self, name: &str, class: LabelClass, on: bool) {
        let set = match class {
            LabelClass::Active => &mut self.active,
            LabelClass::Hover => &mut self.hover,
        };
        if on {
            set.insert(name.to_string());
        } else {
            set.remove(name);
        }
    }
    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_visible = visible;
    }
    fn set_hint_pulsing(&mut self, pulsing: bool) {
        self.hint_pulsing = pulsing;
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

/// Engine with the default rule/link tables, the orbit held still so the
/// camera stays at (0, 0, 2.5), and one GitHub anchor at the origin.
pub fn fixed_engine() -> (InteractionEngine, RecordingLabels) {
    let mut engine = InteractionEngine::new(
        default_rules(),
        &DEFAULT_LINKS,
        INITIAL_ACTIVE_ANCHORS,
        0.0,
    );
    engine.orbit.auto_rotate_speed = 0.0;
    let mut labels = RecordingLabels::default();
    engine
        .register_anchor(&mut labels, ANCHOR_GITHUB, Vec3::ZERO)
        .unwrap();
    (engine, labels)
}

/// One frame's input at `now_ms` with an 800x600 viewport.
pub fn tick_at(now_ms: f64, ndc_x: f32, ndc_y: f32) -> TickInput {
    TickInput {
        now_ms,
        dt_sec: 0.016,
        pointer_ndc: Vec2::new(ndc_x, ndc_y),
        viewport_px: Vec2::new(800.0, 600.0),
    }
}
