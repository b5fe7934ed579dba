//! Long-lived asset registry
//!
//! Asset parsing is an external collaborator; the engine only tracks opaque
//! handles keyed by name. The catalog lives across scene reloads and is
//! handed to entity blueprints through
//! [`EntityVitals`](crate::lifecycle::EntityVitals). A missing name at spawn
//! time is a construction failure for that entity, never for the scene.

use std::collections::HashMap;

macro_rules! asset_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);
    };
}

asset_handle!(
    /// Opaque handle to a loaded 2D texture
    TextureHandle
);
asset_handle!(
    /// Opaque handle to a loaded cube map
    CubeMapHandle
);
asset_handle!(
    /// Opaque handle to a loaded mesh or model
    MeshHandle
);
asset_handle!(
    /// Opaque handle to a compiled shader program
    ShaderHandle
);
asset_handle!(
    /// Opaque handle to a loaded font atlas
    FontHandle
);

/// Name-to-handle maps for every asset class the runtime references
#[derive(Debug, Default)]
pub struct AssetCatalog {
    textures: HashMap<String, TextureHandle>,
    cube_maps: HashMap<String, CubeMapHandle>,
    meshes: HashMap<String, MeshHandle>,
    shaders: HashMap<String, ShaderHandle>,
    fonts: HashMap<String, FontHandle>,
    next_id: u32,
}

impl AssetCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a texture by name, returning the existing handle if present
    pub fn register_texture(&mut self, name: &str) -> TextureHandle {
        if let Some(&handle) = self.textures.get(name) {
            return handle;
        }
        let handle = TextureHandle(self.next_id());
        self.textures.insert(name.to_owned(), handle);
        handle
    }

    /// Register a cube map by name
    pub fn register_cube_map(&mut self, name: &str) -> CubeMapHandle {
        if let Some(&handle) = self.cube_maps.get(name) {
            return handle;
        }
        let handle = CubeMapHandle(self.next_id());
        self.cube_maps.insert(name.to_owned(), handle);
        handle
    }

    /// Register a mesh by name
    pub fn register_mesh(&mut self, name: &str) -> MeshHandle {
        if let Some(&handle) = self.meshes.get(name) {
            return handle;
        }
        let handle = MeshHandle(self.next_id());
        self.meshes.insert(name.to_owned(), handle);
        handle
    }

    /// Register a shader program by name
    pub fn register_shader(&mut self, name: &str) -> ShaderHandle {
        if let Some(&handle) = self.shaders.get(name) {
            return handle;
        }
        let handle = ShaderHandle(self.next_id());
        self.shaders.insert(name.to_owned(), handle);
        handle
    }

    /// Register a font by name
    pub fn register_font(&mut self, name: &str) -> FontHandle {
        if let Some(&handle) = self.fonts.get(name) {
            return handle;
        }
        let handle = FontHandle(self.next_id());
        self.fonts.insert(name.to_owned(), handle);
        handle
    }

    /// Look up a texture handle
    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).copied()
    }

    /// Look up a cube map handle
    pub fn cube_map(&self, name: &str) -> Option<CubeMapHandle> {
        self.cube_maps.get(name).copied()
    }

    /// Look up a mesh handle
    pub fn mesh(&self, name: &str) -> Option<MeshHandle> {
        self.meshes.get(name).copied()
    }

    /// Look up a shader handle
    pub fn shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders.get(name).copied()
    }

    /// Look up a font handle
    pub fn font(&self, name: &str) -> Option<FontHandle> {
        self.fonts.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut catalog = AssetCatalog::new();
        let first = catalog.register_mesh("models/crate.3dm");
        let second = catalog.register_mesh("models/crate.3dm");
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = AssetCatalog::new();
        assert!(catalog.texture("missing.png").is_none());
    }

    #[test]
    fn test_handles_are_distinct_across_classes() {
        let mut catalog = AssetCatalog::new();
        let mesh = catalog.register_mesh("a");
        let texture = catalog.register_texture("a");
        assert_ne!(mesh.0, texture.0);
    }
}
