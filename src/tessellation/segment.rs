use crate::math::{Point2, Vector2};

/// The flat record handed to the renderer:
/// `(material, x, y, dx, dy, nx, ny, dnx, dny)`.
pub type SegmentTuple = (u32, f64, f64, f64, f64, f64, f64, f64, f64);

/// A straight piece of a tessellated curve, annotated with normals.
///
/// The segment starts at the earlier of two consecutive samples. `normal` is
/// the unit normal there and `normal_delta` is how much the normal changes by
/// the time the segment reaches the later sample, which lets a renderer
/// interpolate normals along the segment.
///
/// With the `serde` feature a segment serializes as the 9-element array
/// described by [`SegmentTuple`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "SegmentTuple", from = "SegmentTuple")
)]
pub struct Segment {
    /// Material tag, passed through from the tessellation parameters.
    pub material: u32,
    /// Position of the earlier sample.
    pub origin: Point2,
    /// Displacement from the earlier sample to the later one.
    pub delta: Vector2,
    /// Unit normal at the earlier sample.
    pub normal: Vector2,
    /// Normal at the later sample minus `normal`.
    pub normal_delta: Vector2,
}

impl Segment {
    /// Position of the later sample.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.origin + self.delta
    }

    /// Normal at the later sample.
    #[must_use]
    pub fn end_normal(&self) -> Vector2 {
        self.normal + self.normal_delta
    }

    /// Straight-line length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta.norm()
    }

    /// Flattens the segment into the renderer's record layout.
    #[must_use]
    pub fn to_tuple(&self) -> SegmentTuple {
        (
            self.material,
            self.origin.x,
            self.origin.y,
            self.delta.x,
            self.delta.y,
            self.normal.x,
            self.normal.y,
            self.normal_delta.x,
            self.normal_delta.y,
        )
    }
}

impl From<SegmentTuple> for Segment {
    fn from((material, x, y, dx, dy, nx, ny, dnx, dny): SegmentTuple) -> Self {
        Self {
            material,
            origin: Point2::new(x, y),
            delta: Vector2::new(dx, dy),
            normal: Vector2::new(nx, ny),
            normal_delta: Vector2::new(dnx, dny),
        }
    }
}

impl From<Segment> for SegmentTuple {
    fn from(segment: Segment) -> Self {
        segment.to_tuple()
    }
}
