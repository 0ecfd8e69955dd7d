pub mod anchors;
pub mod camera;
pub mod constants;
pub mod engine;
pub mod hover;
pub mod idle;
pub mod labels;
pub mod orbit;
pub mod scene;
pub mod timers;
pub mod visibility;

pub use anchors::*;
pub use camera::*;
pub use constants::*;
pub use engine::*;
pub use hover::*;
pub use idle::*;
pub use labels::*;
pub use orbit::*;
pub use scene::*;
pub use timers::*;
pub use visibility::*;
