/// Shared buffer layout.
/// Must stay in sync with the TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 12 floats]
/// [Paths: max_path_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init. TypeScript reads
/// them from the header to compute offsets dynamically.

use crate::api::sim::SimConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_PATH_VERTICES: usize = 4;
pub const HEADER_PATH_VERTEX_COUNT: usize = 5;
pub const HEADER_VIEW_WIDTH: usize = 6;
pub const HEADER_VIEW_HEIGHT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_PAUSED: usize = 10;
pub const HEADER_SPEED_MULTIPLIER: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format — never changes).
pub const BODY_FLOATS: usize = 12;

/// Floats per path vertex: x, y, r, g, b, a (wire format — never changes).
pub const PATH_VERTEX_FLOATS: usize = 6;

/// Floats per UI event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
/// Lights ride outside the main layout, read via their own pointer.
pub const LIGHT_FLOATS: usize = 8;

/// Default light capacity.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Maximum path vertices.
    pub max_path_vertices: usize,
    /// Maximum UI events per frame.
    pub max_events: usize,

    /// Size of the body section in floats.
    pub body_data_floats: usize,
    /// Size of the path section in floats.
    pub path_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where path data begins.
    pub path_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute the layout from raw capacity values.
    pub fn new(max_bodies: usize, max_path_vertices: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let path_data_floats = max_path_vertices * PATH_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let path_data_offset = body_data_offset + body_data_floats;
        let event_data_offset = path_data_offset + path_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_path_vertices,
            max_events,
            body_data_floats,
            path_data_floats,
            event_data_floats,
            body_data_offset,
            path_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute the layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.max_bodies,
            config.max_path_vertices,
            config.max_events,
        )
    }
}
