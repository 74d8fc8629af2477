//! Shared helpers for rendering.

mod text;

pub use text::{mask, truncate_start_with_ellipsis};
