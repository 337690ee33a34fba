//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements, sRGB-encoded (hex / 255)
pub mod colors {
    /// Road bands, alternating from the bottom (#0f172a / #0b1220)
    pub const LANE_EVEN: [f32; 4] = [0.059, 0.090, 0.165, 1.0];
    pub const LANE_ODD: [f32; 4] = [0.043, 0.071, 0.125, 1.0];
    pub const LANE_DIVIDER: [f32; 4] = [1.0, 1.0, 1.0, 0.15];
    /// Leading-edge mark on cars
    pub const CAR_ACCENT: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
    pub const CAR_SATURATION: f32 = 0.8;
    pub const CAR_LIGHTNESS: f32 = 0.6;
    /// Player disc (#fde68a) and direction wedge (#f97316)
    pub const PLAYER: [f32; 4] = [0.992, 0.902, 0.541, 1.0];
    pub const PLAYER_WEDGE: [f32; 4] = [0.976, 0.451, 0.086, 1.0];
    /// Damage flash, alpha filled in per frame (rgb 239,68,68)
    pub const FLASH: [f32; 3] = [0.937, 0.267, 0.267];
    /// Full-screen dim behind overlay text
    pub const DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.4];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
