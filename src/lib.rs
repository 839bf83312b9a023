//! Adaptive tessellation of parametric 2D curves.
//!
//! A caller supplies a curve `C: [0, 1] -> R²` and [`TessellationParams`]; the
//! tessellator walks the parameter with a step chosen from the local derivative so
//! that samples land roughly `resolution` scene units apart, and emits one
//! [`Segment`] per consecutive pair of samples.

pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{ConfigError, Result, RibbonError, TessellationError};
pub use geometry::ParametricCurve;
pub use tessellation::{tessellate, Segment, Segments, TessellateCurve, TessellationParams};
