// Quadrant classification and the ordered visibility rule table.

mod common;

use common::RecordingLabels;
use folio_core::{
    apply_rules, default_rules, Quadrant, QuadrantRule, RuleAction, RuleWindow, ANCHOR_CV,
    ANCHOR_GITHUB, ANCHOR_LINKEDIN, ANCHOR_TELEGRAM,
};
use glam::Vec3;

#[test]
fn quadrant_classification_by_sign() {
    assert_eq!(
        Quadrant::from_camera(Vec3::new(1.0, 0.0, 1.0)),
        Quadrant::PosXPosZ
    );
    assert_eq!(
        Quadrant::from_camera(Vec3::new(1.0, 0.0, -1.0)),
        Quadrant::PosXNegZ
    );
    assert_eq!(
        Quadrant::from_camera(Vec3::new(-1.0, 0.0, 1.0)),
        Quadrant::NegXPosZ
    );
    assert_eq!(
        Quadrant::from_camera(Vec3::new(-1.0, 0.0, -1.0)),
        Quadrant::NegXNegZ
    );
    // zero counts as positive on both axes
    assert_eq!(Quadrant::from_camera(Vec3::ZERO), Quadrant::PosXPosZ);
}

#[test]
fn github_activates_at_the_far_positive_x_edge() {
    let rules = default_rules();
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(2.45, 0.0, 0.3), &mut labels);
    assert!(labels.active.contains(ANCHOR_GITHUB));
}

#[test]
fn linkedin_band_requires_both_bounds() {
    let rules = default_rules();

    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(1.45, 0.0, 2.1), &mut labels);
    assert!(labels.active.contains(ANCHOR_LINKEDIN));

    // outside the x band
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(1.6, 0.0, 2.1), &mut labels);
    assert!(!labels.active.contains(ANCHOR_LINKEDIN));

    // inside the x band but z too small
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(1.45, 0.0, 1.0), &mut labels);
    assert!(!labels.active.contains(ANCHOR_LINKEDIN));
}

#[test]
fn deactivation_rules_remove_labels() {
    let rules = default_rules();
    let mut labels = RecordingLabels::default();
    labels.active.insert(ANCHOR_TELEGRAM.to_string());
    labels.active.insert(ANCHOR_CV.to_string());

    // x = 0.3 in the (+x, +z) quadrant: both "x below" deactivations fire
    apply_rules(&rules, Vec3::new(0.3, 0.0, 2.4), &mut labels);
    assert!(!labels.active.contains(ANCHOR_TELEGRAM));
    assert!(!labels.active.contains(ANCHOR_CV));
}

#[test]
fn later_rules_override_earlier_ones_in_the_same_frame() {
    let rules = vec![
        QuadrantRule {
            quadrant: Quadrant::PosXPosZ,
            window: RuleWindow::x_above(0.0),
            anchor: ANCHOR_GITHUB,
            action: RuleAction::Activate,
        },
        QuadrantRule {
            quadrant: Quadrant::PosXPosZ,
            window: RuleWindow::x_above(1.0),
            anchor: ANCHOR_GITHUB,
            action: RuleAction::Deactivate,
        },
    ];

    // both rules match: the later deactivation wins
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(2.0, 0.0, 0.5), &mut labels);
    assert!(!labels.active.contains(ANCHOR_GITHUB));

    // only the first matches
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(0.5, 0.0, 0.5), &mut labels);
    assert!(labels.active.contains(ANCHOR_GITHUB));
}

#[test]
fn evaluation_is_deterministic_for_a_fixed_camera() {
    let rules = default_rules();
    let camera_pos = Vec3::new(1.9, 0.0, -1.2);

    let mut first = RecordingLabels::default();
    apply_rules(&rules, camera_pos, &mut first);
    let mut second = RecordingLabels::default();
    apply_rules(&rules, camera_pos, &mut second);
    assert_eq!(first.active, second.active);

    // re-applying onto the produced state is also stable
    apply_rules(&rules, camera_pos, &mut first);
    assert_eq!(first.active, second.active);
}

#[test]
fn rules_only_fire_in_their_own_quadrant() {
    let rules = vec![QuadrantRule {
        quadrant: Quadrant::NegXNegZ,
        window: RuleWindow::default(),
        anchor: ANCHOR_TELEGRAM,
        action: RuleAction::Activate,
    }];
    let mut labels = RecordingLabels::default();
    apply_rules(&rules, Vec3::new(1.0, 0.0, 1.0), &mut labels);
    assert!(labels.active.is_empty());

    apply_rules(&rules, Vec3::new(-1.0, 0.0, -1.0), &mut labels);
    assert!(labels.active.contains(ANCHOR_TELEGRAM));
}
