//! Per-frame hover resolution: cast the pointer ray into the scene, dim every
//! tagged marker it passes through, and flag the matching labels.

use crate::anchors::AnchorRegistry;
use crate::camera::{ndc_to_world_ray, Camera};
use crate::constants::{HOVER_DECAY_MS, HOVER_OPACITY};
use crate::labels::{LabelClass, LabelHost};
use crate::scene::SceneContents;
use crate::timers::{TimerKey, TimerQueue};
use glam::{Vec2, Vec3};

/// Resolve hover for one tick.
///
/// Materials are reset wholesale before the new hit set is evaluated, so the
/// only lasting effect of pointing at empty space is the reset itself. Hits on
/// untagged geometry are silently ignored. Each tagged hit dims its marker,
/// adds the label's hover class, and (re)schedules the 500 ms decay that will
/// clear it; re-hovering supersedes a pending decay.
pub fn resolve_hover(
    scene: &mut SceneContents,
    anchors: &AnchorRegistry,
    camera: &Camera,
    pointer_ndc: Vec2,
    scene_offset: Vec3,
    now_ms: f64,
    timers: &mut TimerQueue,
    labels: &mut dyn LabelHost,
) {
    scene.reset_materials();
    let (ro, rd) = ndc_to_world_ray(camera, pointer_ndc);
    let hits = scene.intersect_all(ro, rd, scene_offset);
    for hit in &hits {
        let tag = match &scene.objects[hit.object].tag {
            Some(tag) => tag.clone(),
            None => continue,
        };
        if !anchors.contains(&tag) {
            continue;
        }
        let material = &mut scene.objects[hit.object].material;
        material.transparent = true;
        material.opacity = HOVER_OPACITY;
        labels.set_label_class(&tag, LabelClass::Hover, true);
        timers.schedule(TimerKey::hover_decay(&tag), now_ms + HOVER_DECAY_MS);
    }
}
