//! Infrastructure layer.

pub mod render;

pub use self::render::Renderer;
#[cfg(feature = "html")]
pub use self::render::{html, Html};
