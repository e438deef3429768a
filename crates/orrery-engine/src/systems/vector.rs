//! Lyon-based stroked-path tessellation.
//!
//! Orbit guides and rings are thin stroked loops in screen space. Lyon
//! turns them into a flat triangle-list vertex buffer that the host
//! renderer draws in one pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

/// Per-vertex data for path rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PathVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PathVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for path drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PathColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for PathColor {
    fn default() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

struct StrokeCtor {
    color: PathColor,
}

impl StrokeVertexConstructor<PathVertex> for StrokeCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> PathVertex {
        PathVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Tessellation state for stroked paths.
///
/// Holds the lyon tessellator and the output vertex buffer. Cleared each
/// frame and repopulated by the drawing commands.
pub struct PathState {
    tess: StrokeTessellator,
    geometry: VertexBuffers<PathVertex, u32>,
    buffer: Vec<f32>,
}

impl PathState {
    pub fn new() -> Self {
        Self {
            tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(8192 * PathVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / PathVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for shared-buffer copies).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: PathColor) {
        if points.len() < 2 {
            return;
        }
        self.stroke_points(points, false, width, color);
    }

    /// Tessellate a stroked closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: PathColor) {
        if points.len() < 3 {
            return;
        }
        self.stroke_points(points, true, width, color);
    }

    fn stroke_points(&mut self, points: &[Vec2], closed: bool, width: f32, color: PathColor) {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        if closed {
            builder.close();
        } else {
            builder.end(false);
        }
        self.stroke_path(&builder.build(), width, color);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: PathColor) {
        let result = self.tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self::new()
    }
}
