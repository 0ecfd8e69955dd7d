//! Auto-rotating orbit rig: the slice of an orbit controller the interaction
//! engine needs, the eye position each frame and a rotate-speed scalar the
//! input path can spike.

use crate::constants::{CAMERA_RADIUS, ROTATE_SPEED_NORMAL};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct OrbitRig {
    pub angle_rad: f32,
    pub radius: f32,
    pub height: f32,
    /// Matches the page controller's `autoRotateSpeed` scale: one speed unit
    /// is one full revolution per 60 seconds.
    pub auto_rotate_speed: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            angle_rad: 0.0,
            radius: CAMERA_RADIUS,
            height: 0.0,
            auto_rotate_speed: ROTATE_SPEED_NORMAL,
        }
    }
}

impl OrbitRig {
    pub fn advance(&mut self, dt_sec: f32) {
        self.angle_rad += self.auto_rotate_speed * TAU / 60.0 * dt_sec;
        // keep the angle bounded over long sessions
        if self.angle_rad >= TAU {
            self.angle_rad -= TAU;
        } else if self.angle_rad < 0.0 {
            self.angle_rad += TAU;
        }
    }

    /// Camera eye for the current angle; the rig orbits the origin about +Y.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle_rad.sin(),
            self.height,
            self.radius * self.angle_rad.cos(),
        )
    }

    pub fn spike(&mut self, fast_speed: f32) {
        self.auto_rotate_speed = fast_speed;
    }

    pub fn settle(&mut self) {
        self.auto_rotate_speed = ROTATE_SPEED_NORMAL;
    }
}
