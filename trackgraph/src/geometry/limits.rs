// Centralized ingestion limits to harden against untrusted input (JSON/descriptors)

// Graph size caps
pub const MAX_VERTICES: usize = 100_000;
pub const MAX_EDGES: usize = 300_000;

// Segments
pub const MAX_SEGMENTS_PER_EDGE: usize = 4_096;
pub const MAX_SEGMENTS_TOTAL: usize = 1_000_000;
pub const MAX_LABEL_LEN: usize = 1_024;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const WIDTH_MAX: f64 = 10_000.0;
pub const WEIGHT_MAX: f64 = 1.0e12;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_width_bounds(w: f64) -> bool { w.is_finite() && w > 0.0 && w <= WIDTH_MAX }

#[inline]
pub fn in_weight_bounds(w: f64) -> bool { w.is_finite() && w > 0.0 && w <= WEIGHT_MAX }
