mod params;
mod segment;
mod tessellate_curve;

pub use params::{TessellationParams, DEFAULT_RESOLUTION, DEFAULT_STEP};
pub use segment::{Segment, SegmentTuple};
pub use tessellate_curve::{tessellate, Segments, TessellateCurve, MAX_ADVANCE, MIN_ADVANCE};
