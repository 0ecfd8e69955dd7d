//! Pickable scene contents: marker cones, starfield decoration, and a proxy
//! for the loaded model. The renderer owns the real meshes; this mirror holds
//! only what picking and the hover response need.

use crate::constants::{STAR_PICK_RADIUS, STAR_SPREAD};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

/// Per-object material flags mutated by the hover response and reset every
/// frame before the new hit set is evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialState {
    pub transparent: bool,
    pub opacity: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        Self {
            transparent: false,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    /// Hit-test tag; equals the owning anchor's name for marker objects and
    /// `None` for decorative or structural geometry.
    pub tag: Option<String>,
    pub center: Vec3,
    pub pick_radius: f32,
    pub color_rgb: [f32; 3],
    pub material: MaterialState,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub object: usize,
    pub distance: f32,
}

#[derive(Default)]
pub struct SceneContents {
    pub objects: Vec<SceneObject>,
}

impl SceneContents {
    /// Add a tagged marker object; rays hitting it resolve back to `tag`.
    pub fn add_marker(&mut self, tag: &str, center: Vec3, pick_radius: f32) -> usize {
        self.push(Some(tag.to_string()), center, pick_radius, [1.0, 1.0, 1.0])
    }

    /// Add untagged geometry that participates in picking but never triggers
    /// a hover or click response.
    pub fn add_decor(&mut self, center: Vec3, pick_radius: f32, color_rgb: [f32; 3]) -> usize {
        self.push(None, center, pick_radius, color_rgb)
    }

    fn push(
        &mut self,
        tag: Option<String>,
        center: Vec3,
        pick_radius: f32,
        color_rgb: [f32; 3],
    ) -> usize {
        self.objects.push(SceneObject {
            tag,
            center,
            pick_radius,
            color_rgb,
            material: MaterialState::default(),
        });
        self.objects.len() - 1
    }

    /// Scatter `count` decorative stars uniformly in a cube, deterministic
    /// under `seed`.
    pub fn scatter_stars(&mut self, count: usize, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = STAR_SPREAD * 0.5;
        for _ in 0..count {
            let center = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            let color = star_gradient(&mut rng);
            self.add_decor(center, STAR_PICK_RADIUS, color);
        }
    }

    /// Clear transient hover visuals on every object. Running this before each
    /// frame's hit evaluation guarantees nothing stays dimmed, even if an
    /// object left the scene mid-hover.
    pub fn reset_materials(&mut self) {
        for obj in &mut self.objects {
            obj.material = MaterialState::default();
        }
    }

    /// Intersect a world-space ray against every object, nearest hit first.
    /// `scene_offset` is the pointer-parallax shift applied to the whole scene.
    pub fn intersect_all(&self, ro: Vec3, rd: Vec3, scene_offset: Vec3) -> SmallVec<[RayHit; 8]> {
        let mut hits: SmallVec<[RayHit; 8]> = SmallVec::new();
        for (i, obj) in self.objects.iter().enumerate() {
            if let Some(t) = ray_sphere(ro, rd, obj.center + scene_offset, obj.pick_radius) {
                hits.push(RayHit {
                    object: i,
                    distance: t,
                });
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

// Warm star palette: full red channel, green clear of the extremes, free blue.
fn star_gradient(rng: &mut StdRng) -> [f32; 3] {
    let green = rng.gen_range(0x10..=0xef) as f32 / 255.0;
    let blue = rng.gen_range(0x00..=0xff) as f32 / 255.0;
    [1.0, green, blue]
}
