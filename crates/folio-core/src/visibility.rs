//! Camera-quadrant label visibility: an ordered, declarative rule table that
//! approximates "only show labels facing the viewer" without frustum culling.

use crate::constants::{ANCHOR_CV, ANCHOR_GITHUB, ANCHOR_LINKEDIN, ANCHOR_TELEGRAM};
use crate::labels::{LabelClass, LabelHost};
use glam::Vec3;

/// Sign quadrant of the camera's (x, z) ground-plane position. Derived fresh
/// from the live camera every frame, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    PosXPosZ,
    PosXNegZ,
    NegXPosZ,
    NegXNegZ,
}

impl Quadrant {
    pub fn from_camera(pos: Vec3) -> Self {
        match (pos.x >= 0.0, pos.z >= 0.0) {
            (true, true) => Self::PosXPosZ,
            (true, false) => Self::PosXNegZ,
            (false, true) => Self::NegXPosZ,
            (false, false) => Self::NegXNegZ,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleAction {
    Activate,
    Deactivate,
}

/// Open window on camera x/z. Absent bounds are unbounded; all present bounds
/// must hold for the rule to fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleWindow {
    pub x_above: Option<f32>,
    pub x_below: Option<f32>,
    pub z_above: Option<f32>,
    pub z_below: Option<f32>,
}

impl RuleWindow {
    pub fn x_above(v: f32) -> Self {
        Self {
            x_above: Some(v),
            ..Self::default()
        }
    }
    pub fn x_below(v: f32) -> Self {
        Self {
            x_below: Some(v),
            ..Self::default()
        }
    }
    pub fn x_band(lo: f32, hi: f32) -> Self {
        Self {
            x_above: Some(lo),
            x_below: Some(hi),
            ..Self::default()
        }
    }
    pub fn and_z_above(mut self, v: f32) -> Self {
        self.z_above = Some(v);
        self
    }

    pub fn matches(&self, x: f32, z: f32) -> bool {
        if let Some(lo) = self.x_above {
            if x <= lo {
                return false;
            }
        }
        if let Some(hi) = self.x_below {
            if x >= hi {
                return false;
            }
        }
        if let Some(lo) = self.z_above {
            if z <= lo {
                return false;
            }
        }
        if let Some(hi) = self.z_below {
            if z >= hi {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Debug)]
pub struct QuadrantRule {
    pub quadrant: Quadrant,
    pub window: RuleWindow,
    pub anchor: &'static str,
    pub action: RuleAction,
}

impl QuadrantRule {
    fn new(quadrant: Quadrant, window: RuleWindow, anchor: &'static str, action: RuleAction) -> Self {
        Self {
            quadrant,
            window,
            anchor,
            action,
        }
    }
}

/// Evaluate the table in order against the current camera position. Rules all
/// mutate the same active-class set, so a later rule targeting the same
/// anchor wins within a frame. Deterministic for a fixed camera position.
pub fn apply_rules(rules: &[QuadrantRule], camera_pos: Vec3, labels: &mut dyn LabelHost) {
    let quadrant = Quadrant::from_camera(camera_pos);
    for rule in rules {
        if rule.quadrant != quadrant {
            continue;
        }
        if !rule.window.matches(camera_pos.x, camera_pos.z) {
            continue;
        }
        let on = rule.action == RuleAction::Activate;
        labels.set_label_class(rule.anchor, LabelClass::Active, on);
    }
}

/// The landing page's rule table, tuned for a camera orbiting at radius 2.5.
/// The windows are deliberately asymmetric; each quadrant favors the labels
/// physically facing the viewer from that side.
pub fn default_rules() -> Vec<QuadrantRule> {
    use Quadrant::*;
    use RuleAction::*;
    vec![
        QuadrantRule::new(PosXPosZ, RuleWindow::x_above(2.4), ANCHOR_GITHUB, Activate),
        QuadrantRule::new(
            PosXPosZ,
            RuleWindow::x_band(1.4, 1.5).and_z_above(2.0),
            ANCHOR_LINKEDIN,
            Activate,
        ),
        QuadrantRule::new(PosXPosZ, RuleWindow::x_below(1.6), ANCHOR_TELEGRAM, Deactivate),
        QuadrantRule::new(PosXPosZ, RuleWindow::x_below(0.4), ANCHOR_CV, Deactivate),
        QuadrantRule::new(PosXNegZ, RuleWindow::x_above(2.3), ANCHOR_LINKEDIN, Deactivate),
        QuadrantRule::new(PosXNegZ, RuleWindow::x_above(1.8), ANCHOR_TELEGRAM, Activate),
        QuadrantRule::new(PosXNegZ, RuleWindow::x_band(0.9, 1.1), ANCHOR_CV, Activate),
        QuadrantRule::new(PosXNegZ, RuleWindow::x_below(0.5), ANCHOR_GITHUB, Deactivate),
        QuadrantRule::new(NegXPosZ, RuleWindow::x_below(-2.2), ANCHOR_CV, Activate),
        QuadrantRule::new(
            NegXPosZ,
            RuleWindow::x_above(-1.2).and_z_above(1.8),
            ANCHOR_LINKEDIN,
            Activate,
        ),
        QuadrantRule::new(NegXPosZ, RuleWindow::x_above(-0.8), ANCHOR_TELEGRAM, Deactivate),
        QuadrantRule::new(NegXPosZ, RuleWindow::x_above(-0.3), ANCHOR_GITHUB, Activate),
        QuadrantRule::new(NegXNegZ, RuleWindow::x_below(-2.4), ANCHOR_GITHUB, Deactivate),
        QuadrantRule::new(
            NegXNegZ,
            RuleWindow::x_band(-1.6, -1.4),
            ANCHOR_TELEGRAM,
            Activate,
        ),
        QuadrantRule::new(NegXNegZ, RuleWindow::x_above(-1.0), ANCHOR_CV, Deactivate),
        QuadrantRule::new(NegXNegZ, RuleWindow::x_above(-0.5), ANCHOR_LINKEDIN, Activate),
    ]
}
