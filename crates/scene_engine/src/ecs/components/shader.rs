//! Shader components
//!
//! Shader programs live with the graphics collaborator; the components here
//! carry the program handle plus the uniform state the render driver stages
//! each frame. Lit and unlit programs are distinct component kinds so the
//! render driver can multiplex on them with plain typed lookups.

use super::lighting::{DirectionalLight, PointLight};
use super::model::MaterialComponent;
use crate::assets::ShaderHandle;
use crate::ecs::Component;
use crate::foundation::math::{Mat4, Vec3};

/// Per-frame uniform state shared by every shader kind
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBlock {
    /// View matrix of the current camera
    pub view: Mat4,
    /// Projection matrix of the current camera
    pub projection: Mat4,
    /// Camera position for specular terms
    pub view_position: Vec3,
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            view: Mat4::identity(),
            projection: Mat4::identity(),
            view_position: Vec3::zeros(),
        }
    }
}

/// Shader program participating in lighting
#[derive(Debug, Clone, PartialEq)]
pub struct LitShader {
    /// Compiled program handle
    pub program: ShaderHandle,
    /// Camera uniforms staged for the current frame
    pub uniforms: UniformBlock,
    /// Material bound at scene initialization
    pub material: Option<MaterialComponent>,
    /// Directional light staged for the current frame
    pub directional: Option<DirectionalLight>,
    /// Point lights staged for the current frame, capped by settings
    pub point_lights: Vec<PointLight>,
}

impl LitShader {
    /// Create a lit shader with empty staged state
    pub fn new(program: ShaderHandle) -> Self {
        Self {
            program,
            uniforms: UniformBlock::default(),
            material: None,
            directional: None,
            point_lights: Vec::new(),
        }
    }

    /// Bind a material; later bindings overwrite earlier ones
    pub fn set_material(&mut self, material: MaterialComponent) {
        self.material = Some(material);
    }

    /// Replace the staged light set for this frame
    pub fn stage_lights(&mut self, directional: Option<DirectionalLight>, points: Vec<PointLight>) {
        self.directional = directional;
        self.point_lights = points;
    }
}

impl Component for LitShader {}

/// Role of an unlit shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    /// Plain unlit geometry, including the sky box
    Default,
    /// Screen-space GUI overlays, drawn last
    Gui,
    /// Particle billboards
    Particle,
}

/// Shader program outside the lighting path
#[derive(Debug, Clone, PartialEq)]
pub struct UnlitShader {
    /// Compiled program handle
    pub program: ShaderHandle,
    /// What the program is used for; gates which render phase draws it
    pub kind: ShaderKind,
    /// Camera uniforms staged for the current frame
    pub uniforms: UniformBlock,
}

impl UnlitShader {
    /// Create an unlit shader of the given kind
    pub fn new(program: ShaderHandle, kind: ShaderKind) -> Self {
        Self {
            program,
            kind,
            uniforms: UniformBlock::default(),
        }
    }
}

impl Component for UnlitShader {}
