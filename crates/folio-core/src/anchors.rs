//! Named hotspot anchors: a marker object in the scene plus an on-screen
//! label element addressed by the same name. Anchor names double as the
//! marker hit-test tags, so a ray hit resolves back to exactly one anchor.

use crate::constants::{label_world_offset, MARKER_PICK_RADIUS};
use crate::labels::LabelHost;
use crate::scene::SceneContents;
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("anchor name already registered: {0}")]
    DuplicateName(String),
}

#[derive(Clone, Debug)]
pub struct Anchor {
    pub name: String,
    pub position: Vec3,
    /// Index of the marker object inside the scene contents.
    pub object_index: usize,
    /// World-space offset from the marker to the label proxy point.
    pub label_offset: Vec3,
    /// Last projected screen position, in pixels.
    pub screen_px: Vec2,
}

impl Anchor {
    /// World-space point the label is projected from.
    pub fn label_world(&self) -> Vec3 {
        self.position + self.label_offset
    }
}

/// The fixed set of hotspots, created at scene-build time. Iteration
/// preserves registration order.
#[derive(Default)]
pub struct AnchorRegistry {
    anchors: Vec<Anchor>,
    by_name: FnvHashMap<String, usize>,
}

impl AnchorRegistry {
    /// Create the marker + label pair for a new hotspot.
    pub fn register(
        &mut self,
        scene: &mut SceneContents,
        labels: &mut dyn LabelHost,
        name: &str,
        position: Vec3,
    ) -> Result<usize, AnchorError> {
        if self.by_name.contains_key(name) {
            return Err(AnchorError::DuplicateName(name.to_string()));
        }
        let object_index = scene.add_marker(name, position, MARKER_PICK_RADIUS);
        labels.create_label(name);
        let index = self.anchors.len();
        self.anchors.push(Anchor {
            name: name.to_string(),
            position,
            object_index,
            label_offset: label_world_offset(),
            screen_px: Vec2::ZERO,
        });
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Anchor> {
        self.anchors.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
