use glam::Vec3;

// Shared interaction tuning constants used by the web frontend and tests.

// Camera rig
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 3000.0;
pub const CAMERA_RADIUS: f32 = 2.5;

// Auto-rotation; a qualifying input spikes the speed and it settles back
// after a short one-shot delay.
pub const ROTATE_SPEED_NORMAL: f32 = 0.5;
pub const ROTATE_SPEED_FAST: f32 = 10.0;
pub const ROTATE_DECAY_MS: f64 = 100.0;

// Hover response
pub const HOVER_OPACITY: f32 = 0.5;
pub const HOVER_DECAY_MS: f64 = 500.0;

// Idle hint thresholds (since last wheel/arrow-key input)
pub const HINT_SHOW_AFTER_MS: f64 = 5000.0;
pub const HINT_PULSE_AFTER_MS: f64 = 8000.0;

// Markers and labels
pub const MARKER_PICK_RADIUS: f32 = 0.1;
pub const LABEL_WORLD_OFFSET: [f32; 3] = [0.0, 0.2, 0.0]; // label proxy sits above the cone

// Loaded-model proxy so rays can hit the model body
pub const MODEL_PICK_RADIUS: f32 = 0.8;
pub const MODEL_PROXY_COLOR: [f32; 3] = [0.42, 0.44, 0.43];

// Starfield decoration
pub const STAR_COUNT: usize = 400;
pub const STAR_SPREAD: f32 = 90.0;
pub const STAR_PICK_RADIUS: f32 = 0.1;

// Pointer parallax: the whole scene shifts by pointer NDC / PARALLAX_DIVISOR
pub const PARALLAX_DIVISOR: f32 = 4.0;

// Default hotspot set for the landing page
pub const ANCHOR_GITHUB: &str = "GitHub";
pub const ANCHOR_LINKEDIN: &str = "LinkedIn";
pub const ANCHOR_TELEGRAM: &str = "Telegram";
pub const ANCHOR_CV: &str = "CV";

pub const DEFAULT_ANCHOR_POSITIONS: [(&str, [f32; 3]); 4] = [
    (ANCHOR_GITHUB, [0.0, 1.0, 0.0]),
    (ANCHOR_LINKEDIN, [0.0, -1.0, 0.0]),
    (ANCHOR_TELEGRAM, [1.0, 0.0, 0.0]),
    (ANCHOR_CV, [-1.0, 0.0, 0.0]),
];

pub const DEFAULT_LINKS: [(&str, &str); 4] = [
    (ANCHOR_GITHUB, "https://github.com/su8ject"),
    (ANCHOR_LINKEDIN, "https://www.linkedin.com/in/su8ject/"),
    (ANCHOR_TELEGRAM, "https://t.me/su8ject"),
    (ANCHOR_CV, "./cv.pdf"),
];

// Labels forced active as soon as the model asset finishes loading,
// regardless of where the camera happens to be.
pub const INITIAL_ACTIVE_ANCHORS: &[&str] = &[ANCHOR_GITHUB, ANCHOR_CV];

#[inline]
pub fn label_world_offset() -> Vec3 {
    Vec3::from(LABEL_WORLD_OFFSET)
}
