//! Render projection
//!
//! Turns a `Snapshot` into a triangle list and text labels. No physics and no
//! GPU state here; a host uploads `Frame::vertex_bytes` and draws the labels.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, Label, build_frame};
pub use vertex::Vertex;
