pub mod base;
pub mod overlay;
pub mod registry;
