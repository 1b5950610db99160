//! Canvas rendering module
//!
//! State is first flattened into a [`Frame`] of draw commands, then replayed
//! onto a [`Surface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::{DrawCommand, Frame, Rect, TextAlign, build_frame};
pub use surface::{NullSurface, Surface, present};
