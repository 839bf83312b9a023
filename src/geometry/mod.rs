pub mod curve;

pub use curve::ParametricCurve;
