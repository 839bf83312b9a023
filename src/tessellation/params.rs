use crate::error::{ConfigError, Result};

/// Default target spacing between samples, in scene units.
pub const DEFAULT_RESOLUTION: f64 = 4.0;

/// Default probe delta for finite differencing.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Parameters controlling curve tessellation.
///
/// Every field has an explicit default; a zero `resolution` or `step` is rejected
/// by [`validate`](Self::validate) rather than replaced by the default.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TessellationParams {
    /// Opaque material tag copied into every emitted segment.
    pub material: u32,
    /// Target distance between consecutive samples, in scene units.
    pub resolution: f64,
    /// Parameter delta used to estimate the tangent.
    pub step: f64,
    /// Upper bound on the number of samples visited, if any.
    pub max_samples: Option<usize>,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            material: 0,
            resolution: DEFAULT_RESOLUTION,
            step: DEFAULT_STEP,
            max_samples: None,
        }
    }
}

impl TessellationParams {
    /// Sets the material tag.
    #[must_use]
    pub fn with_material(mut self, material: u32) -> Self {
        self.material = material;
        self
    }

    /// Sets the target sample spacing.
    #[must_use]
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the finite-difference probe delta.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Caps the number of samples a single call may visit.
    #[must_use]
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = Some(max_samples);
        self
    }

    /// Checks that the parameters describe a valid tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `resolution` or `step` is
    /// not finite and strictly positive, or if `max_samples` is `Some(0)`.
    pub fn validate(&self) -> Result<()> {
        check_positive("resolution", self.resolution)?;
        check_positive("step", self.step)?;
        if self.max_samples == Some(0) {
            return Err(ConfigError::InvalidConfiguration {
                parameter: "max_samples",
                value: 0.0,
            }
            .into());
        }
        Ok(())
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfiguration { parameter, value }.into())
    }
}
