pub mod render;

pub use render::{display_blend_result, display_catalog};
