//! Rendering module
//!
//! `scene` turns game state into colored triangles; `pipeline` draws them
//! with WebGPU (WebGL fallback).

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Scene, build_scene};
pub use vertex::Vertex;
