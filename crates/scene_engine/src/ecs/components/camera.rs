//! Camera component
//!
//! Pure data plus derived matrices. The render driver looks the scene's
//! camera up with `first_active_component_of_type`, so "the" camera is
//! simply the first active one in storage order.

use crate::ecs::Component;
use crate::foundation::math::{Mat4, Point3, Vec3};
use nalgebra::Perspective3;

/// Perspective camera attached to an entity
#[derive(Debug, Clone, PartialEq)]
pub struct CameraComponent {
    /// Eye position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 8.0),
            target: Vec3::zeros(),
            fov_y: std::f32::consts::FRAC_PI_3,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraComponent {
    /// Create a camera at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    /// Right-handed view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &Vec3::y(),
        )
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }

    /// Recompute the aspect ratio after a display resize
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Component for CameraComponent {}
