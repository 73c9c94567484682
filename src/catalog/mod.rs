//! Item and pattern definitions consumed by the solver

/// Item definitions and pattern descriptors
pub mod item;
/// Indexed catalog and TOML loading
pub mod registry;

pub use item::{ItemDefinition, ItemKind, PatternDescriptor, PatternRequirement};
pub use registry::Catalog;
