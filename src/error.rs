use thiserror::Error;

/// Top-level error type for curve ribbon tessellation.
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while validating tessellation parameters.
///
/// These are always reported before the curve is evaluated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {parameter} = {value} must be finite and positive")]
    InvalidConfiguration { parameter: &'static str, value: f64 },
}

/// Errors raised while sampling a curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TessellationError {
    #[error("curve returned a non-finite point at t = {t}")]
    NonFiniteCurveOutput { t: f64 },

    #[error("degenerate derivative at t = {t}: tangent length is {length}")]
    DegenerateDerivative { t: f64, length: f64 },

    #[error("sample limit of {limit} exceeded at t = {t}")]
    SampleLimitExceeded { limit: usize, t: f64 },
}

/// Convenience type alias for results using [`RibbonError`].
pub type Result<T> = std::result::Result<T, RibbonError>;
