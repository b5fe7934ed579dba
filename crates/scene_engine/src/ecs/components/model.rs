//! Model and material components

use crate::assets::{CubeMapHandle, MeshHandle};
use crate::ecs::Component;
use crate::foundation::math::{Mat4, Vec3};

/// Renderable model referencing externally loaded mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComponent {
    /// Handle to the mesh data held by the asset collaborator
    pub mesh: MeshHandle,
    /// Per-mesh model matrices, one per sub-mesh
    pub mesh_matrices: Vec<Mat4>,
    /// Selected animation clip, if the model is animated
    pub animation_clip: Option<u32>,
}

impl ModelComponent {
    /// Create a static model with a single sub-mesh
    pub fn new(mesh: MeshHandle) -> Self {
        Self {
            mesh,
            mesh_matrices: vec![Mat4::identity()],
            animation_clip: None,
        }
    }

    /// Create an animated model playing the given clip
    pub fn animated(mesh: MeshHandle, clip: u32, sub_meshes: usize) -> Self {
        Self {
            mesh,
            mesh_matrices: vec![Mat4::identity(); sub_meshes.max(1)],
            animation_clip: Some(clip),
        }
    }

    /// Whether the model carries an animation clip
    pub fn is_animated(&self) -> bool {
        self.animation_clip.is_some()
    }

    /// Number of sub-meshes
    pub fn mesh_count(&self) -> usize {
        self.mesh_matrices.len()
    }

    /// Set the model matrix for one sub-mesh; out-of-range indices are ignored
    pub fn set_mesh_matrix(&mut self, index: usize, matrix: Mat4) {
        if let Some(slot) = self.mesh_matrices.get_mut(index) {
            *slot = matrix;
        }
    }
}

impl Component for ModelComponent {}

/// Surface material parameters staged into lit shaders
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialComponent {
    /// Diffuse reflectance
    pub diffuse: Vec3,
    /// Specular reflectance
    pub specular: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Default for MaterialComponent {
    fn default() -> Self {
        Self {
            diffuse: Vec3::new(0.8, 0.8, 0.8),
            specular: Vec3::new(1.0, 1.0, 1.0),
            shininess: 32.0,
        }
    }
}

impl Component for MaterialComponent {}

/// Sky box rendered behind everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyBoxComponent {
    /// Cube map supplying the six faces
    pub cube_map: CubeMapHandle,
}

impl Component for SkyBoxComponent {}
