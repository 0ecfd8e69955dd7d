//! The interaction engine: owns the anchor registry, the pickable scene
//! mirror, the timer queue, and the state machines, and runs the per-tick
//! pipeline in a fixed order. Clicks are a separate discrete entry point.

use crate::anchors::{AnchorError, AnchorRegistry};
use crate::camera::{ndc_to_world_ray, project_to_screen, Camera};
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_RADIUS, PARALLAX_DIVISOR, ROTATE_DECAY_MS,
    ROTATE_SPEED_FAST,
};
use crate::hover::resolve_hover;
use crate::idle::{HintState, IdleHint};
use crate::labels::{LabelClass, LabelHost, Navigator};
use crate::orbit::OrbitRig;
use crate::scene::SceneContents;
use crate::timers::{TimerKey, TimerPurpose, TimerQueue};
use crate::visibility::{apply_rules, QuadrantRule};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};

/// Everything one tick needs from the outside world, captured once per frame.
#[derive(Clone, Copy, Debug)]
pub struct TickInput {
    pub now_ms: f64,
    pub dt_sec: f32,
    /// Pointer position in normalized device coordinates, latest write wins.
    pub pointer_ndc: Vec2,
    /// Drawable size in pixels, re-read from the window every frame.
    pub viewport_px: Vec2,
}

pub struct InteractionEngine {
    pub scene: SceneContents,
    pub anchors: AnchorRegistry,
    pub orbit: OrbitRig,
    pub camera: Camera,
    rules: Vec<QuadrantRule>,
    links: FnvHashMap<String, String>,
    timers: TimerQueue,
    idle: IdleHint,
    hint: HintState,
    scene_offset: Vec3,
    initial_active: Vec<String>,
    model_loaded: bool,
}

impl InteractionEngine {
    pub fn new(
        rules: Vec<QuadrantRule>,
        links: &[(&str, &str)],
        initial_active: &[&str],
        now_ms: f64,
    ) -> Self {
        let links = links
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect::<FnvHashMap<_, _>>();
        let orbit = OrbitRig::default();
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, CAMERA_RADIUS),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        Self {
            scene: SceneContents::default(),
            anchors: AnchorRegistry::default(),
            orbit,
            camera,
            rules,
            links,
            timers: TimerQueue::default(),
            idle: IdleHint::new(now_ms),
            hint: HintState::default(),
            scene_offset: Vec3::ZERO,
            initial_active: initial_active.iter().map(|s| s.to_string()).collect(),
            model_loaded: false,
        }
    }

    pub fn register_anchor(
        &mut self,
        labels: &mut dyn LabelHost,
        name: &str,
        position: Vec3,
    ) -> Result<(), AnchorError> {
        self.anchors
            .register(&mut self.scene, labels, name, position)?;
        Ok(())
    }

    /// Latest pointer position mapped to the parallax shift of the whole
    /// scene. `ndc` here is y-down, matching the raw client coordinates.
    pub fn set_parallax(&mut self, ndc: Vec2) {
        self.scene_offset = Vec3::new(ndc.x / PARALLAX_DIVISOR, ndc.y / PARALLAX_DIVISOR, 0.0);
    }

    pub fn scene_offset(&self) -> Vec3 {
        self.scene_offset
    }

    /// A qualifying input (wheel scroll or arrow key): reset the idle clock,
    /// spike the auto-rotation, and schedule its return to normal speed.
    pub fn note_input(&mut self, now_ms: f64) {
        self.idle.note_input(now_ms);
        self.orbit.spike(ROTATE_SPEED_FAST);
        self.timers
            .schedule(TimerKey::rotate_decay(), now_ms + ROTATE_DECAY_MS);
    }

    /// Model asset finished loading: force the configured label subset active.
    /// They transition normally under the quadrant rules afterwards.
    pub fn on_model_loaded(&mut self, labels: &mut dyn LabelHost) {
        self.model_loaded = true;
        for name in &self.initial_active {
            if self.anchors.contains(name) {
                labels.set_label_class(name, LabelClass::Active, true);
            } else {
                log::warn!("initial-active anchor '{}' is not registered", name);
            }
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model_loaded
    }

    pub fn hint(&self) -> HintState {
        self.hint
    }

    /// Run one frame of the pipeline: fire due one-shots, advance the orbit,
    /// then hover resolver -> visibility rules -> idle hint -> label
    /// projection.
    pub fn tick(&mut self, input: &TickInput, labels: &mut dyn LabelHost) {
        for key in self.timers.fire_due(input.now_ms) {
            match key.purpose {
                TimerPurpose::HoverDecay => {
                    labels.set_label_class(&key.owner, LabelClass::Hover, false)
                }
                TimerPurpose::RotateDecay => self.orbit.settle(),
            }
        }

        self.orbit.advance(input.dt_sec);
        self.camera.eye = self.orbit.eye();
        self.camera.aspect = input.viewport_px.x / input.viewport_px.y.max(1.0);

        resolve_hover(
            &mut self.scene,
            &self.anchors,
            &self.camera,
            input.pointer_ndc,
            self.scene_offset,
            input.now_ms,
            &mut self.timers,
            labels,
        );

        apply_rules(&self.rules, self.camera.eye, labels);

        self.hint = self.idle.evaluate(input.now_ms);
        labels.set_hint_visible(self.hint.shown);
        labels.set_hint_pulsing(self.hint.pulsing);

        let offset = self.scene_offset;
        let viewport = input.viewport_px;
        for anchor in self.anchors.iter_mut() {
            let px = project_to_screen(anchor.label_world() + offset, &self.camera, viewport);
            anchor.screen_px = px;
            labels.set_label_position(&anchor.name, px.x, px.y);
        }
    }

    /// Discrete click: only the nearest hit counts, and an empty hit list is
    /// safely a no-op.
    pub fn click(&self, pointer_ndc: Vec2, navigator: &dyn Navigator) {
        let (ro, rd) = ndc_to_world_ray(&self.camera, pointer_ndc);
        let hits = self.scene.intersect_all(ro, rd, self.scene_offset);
        let nearest = match hits.first() {
            Some(hit) => *hit,
            None => return,
        };
        let tag = match &self.scene.objects[nearest.object].tag {
            Some(tag) => tag,
            None => return,
        };
        if !self.anchors.contains(tag) {
            return;
        }
        match self.links.get(tag) {
            Some(url) => navigator.open_url(url),
            None => log::debug!("no link mapped for anchor '{}'", tag),
        }
    }
}
