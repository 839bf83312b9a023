use std::iter::FusedIterator;

use crate::error::{Result, RibbonError, TessellationError};
use crate::geometry::ParametricCurve;
use crate::math::{is_finite_point, perpendicular, Point2, Vector2};

use super::{Segment, TessellationParams};

/// Smallest parameter advance per sample.
pub const MIN_ADVANCE: f64 = 1e-6;

/// Largest parameter advance per sample.
pub const MAX_ADVANCE: f64 = 0.1;

/// Tessellates a parametric curve on `[0, 1]` into ribbon segments.
///
/// Starting at `t = 0`, each sample estimates the tangent by a forward
/// difference and advances `t` by `resolution / |tangent|`, clamped to
/// [`MIN_ADVANCE`]..=[`MAX_ADVANCE`], so samples land roughly `resolution`
/// scene units apart. Sampling stops once `t` exceeds `1.0`; the curve is
/// never sampled past that point. Each consecutive pair of samples becomes
/// one [`Segment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TessellateCurve {
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Returns the parameters this operation runs with.
    #[must_use]
    pub fn params(&self) -> &TessellationParams {
        &self.params
    }

    /// Executes the tessellation, returning every segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the curve produces a
    /// non-finite point, the tangent degenerates at some sample, or the sample
    /// limit is exceeded. No partial result is returned.
    pub fn execute<C>(&self, curve: &C) -> Result<Vec<Segment>>
    where
        C: ParametricCurve + ?Sized,
    {
        self.segments(curve)?.collect()
    }

    /// Returns a lazy iterator over the segments.
    ///
    /// The curve is evaluated only as segments are pulled. After yielding an
    /// error the iterator is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid. The curve is not
    /// evaluated in that case.
    pub fn segments<'a, C>(&self, curve: &'a C) -> Result<Segments<'a, C>>
    where
        C: ParametricCurve + ?Sized,
    {
        self.params.validate()?;
        Ok(Segments {
            curve,
            params: self.params,
            t: 0.0,
            previous: None,
            samples: 0,
            emitted: 0,
            finished: false,
        })
    }
}

/// Tessellates `curve` with `params`.
///
/// Shorthand for `TessellateCurve::new(*params).execute(curve)`.
///
/// # Errors
///
/// See [`TessellateCurve::execute`].
pub fn tessellate<C>(curve: &C, params: &TessellationParams) -> Result<Vec<Segment>>
where
    C: ParametricCurve + ?Sized,
{
    TessellateCurve::new(*params).execute(curve)
}

/// Position and unit normal of the curve at one parameter value.
#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point2,
    normal: Vector2,
    /// Length of the estimated tangent, in scene units per unit parameter.
    speed: f64,
}

impl Sample {
    /// Samples `curve` at `t`, differentiating with a forward probe at `t + step`.
    fn take<C>(curve: &C, t: f64, step: f64) -> Result<Self>
    where
        C: ParametricCurve + ?Sized,
    {
        let position = curve.evaluate(t);
        if !is_finite_point(&position) {
            return Err(TessellationError::NonFiniteCurveOutput { t }.into());
        }

        let probe_t = t + step;
        let probe = curve.evaluate(probe_t);
        if !is_finite_point(&probe) {
            return Err(TessellationError::NonFiniteCurveOutput { t: probe_t }.into());
        }

        let tangent = (probe - position) / step;
        let speed = tangent.norm();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TessellationError::DegenerateDerivative { t, length: speed }.into());
        }

        Ok(Self {
            position,
            normal: perpendicular(&tangent) / speed,
            speed,
        })
    }

    /// Builds the segment running from `self` to `next`.
    fn segment_to(&self, next: &Self, material: u32) -> Segment {
        Segment {
            material,
            origin: self.position,
            delta: next.position - self.position,
            normal: self.normal,
            normal_delta: next.normal - self.normal,
        }
    }
}

/// Parameter advance that moves a curve of the given speed by about
/// `resolution` scene units.
fn advance(resolution: f64, speed: f64) -> f64 {
    (resolution / speed).clamp(MIN_ADVANCE, MAX_ADVANCE)
}

/// Lazy segment producer returned by [`TessellateCurve::segments`].
#[derive(Debug)]
pub struct Segments<'a, C: ?Sized> {
    curve: &'a C,
    params: TessellationParams,
    t: f64,
    previous: Option<Sample>,
    samples: usize,
    emitted: usize,
    finished: bool,
}

impl<C: ParametricCurve + ?Sized> Segments<'_, C> {
    /// Parameter value of the next sample to be taken.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.t
    }

    /// Number of samples taken so far.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    fn fail(&mut self, err: RibbonError) -> Option<Result<Segment>> {
        tracing::debug!(t = self.t, samples = self.samples, "curve tessellation stopped: {err}");
        self.finished = true;
        Some(Err(err))
    }
}

impl<C: ParametricCurve + ?Sized> Iterator for Segments<'_, C> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if let Some(limit) = self.params.max_samples {
                if self.samples >= limit {
                    let err = TessellationError::SampleLimitExceeded { limit, t: self.t };
                    return self.fail(err.into());
                }
            }

            let sample = match Sample::take(self.curve, self.t, self.params.step) {
                Ok(sample) => sample,
                Err(err) => return self.fail(err),
            };
            self.samples += 1;

            let adv = advance(self.params.resolution, sample.speed);
            tracing::trace!(t = self.t, speed = sample.speed, adv, "curve sample");

            let segment = self
                .previous
                .replace(sample)
                .map(|prev| prev.segment_to(&sample, self.params.material));

            self.t += adv;
            if self.t > 1.0 {
                self.finished = true;
                tracing::debug!(
                    samples = self.samples,
                    segments = self.emitted + usize::from(segment.is_some()),
                    "curve tessellated"
                );
            }

            if let Some(segment) = segment {
                self.emitted += 1;
                return Some(Ok(segment));
            }
        }
        None
    }
}

impl<C: ParametricCurve + ?Sized> FusedIterator for Segments<'_, C> {}
