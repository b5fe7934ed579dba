//! Screen-space overlay component

use crate::assets::FontHandle;
use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Text overlay drawn during the GUI phase of the normal render pass
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTextComponent {
    /// Font atlas to draw with
    pub font: FontHandle,
    /// Text content; gameplay code rewrites this freely between frames
    pub text: String,
    /// Screen position in normalized coordinates
    pub position: Vec2,
    /// Glyph scale
    pub scale: f32,
}

impl OverlayTextComponent {
    /// Create an overlay at the top-left corner
    pub fn new(font: FontHandle, text: impl Into<String>) -> Self {
        Self {
            font,
            text: text.into(),
            position: Vec2::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl Component for OverlayTextComponent {}
