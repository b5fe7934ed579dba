//! Component trait
//!
//! Component kinds are independent Rust types; there is no common base
//! class. Kind dispatch happens statically at the call site via the type
//! parameter of the scene's accessors, never through the stored value.

/// Marker trait for components
pub trait Component: 'static + Send + Sync {}

// The shared transform type doubles as a component kind.
impl Component for crate::foundation::math::Transform {}
