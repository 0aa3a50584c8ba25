//! Rendering of segmentation results for display and downstream tools.

mod json;
mod text;

pub use json::{json_string, to_json, JsonFormat};
pub use text::to_text;
