// Page wiring constants for the web frontend.

pub const CANVAS_ID: &str = "scene-canvas";
pub const HINT_ID: &str = "hint";
pub const MODEL_URL: &str = "./model/scene.gltf";

// Star scatter is deterministic so reloads look identical.
pub const STARFIELD_SEED: u64 = 42;
