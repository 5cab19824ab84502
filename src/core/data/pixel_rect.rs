use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must not be negative: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// A half-open pixel rectangle: `min` is inside, `max` is one past the last
/// column and row. A rect with `min == max` on either axis is empty.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    min: Point,
    max: Point,
}

impl PixelRect {
    pub fn new(min: Point, max: Point) -> Result<Self, PixelRectError> {
        let width = (max.x as i64) - (min.x as i64);
        let height = (max.y as i64) - (min.y as i64);

        if width < 0 || height < 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Builds a rect anchored at the origin, as window bounds are.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(
                width.min(i32::MAX as u32) as i32,
                height.min(i32::MAX as u32) as i32,
            ),
        }
    }

    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        ((self.max.x as i64) - (self.min.x as i64)) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        ((self.max.y as i64) - (self.min.y as i64)) as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x < self.max.x
            && point.y < self.max.y
    }

    /// Returns the overlap of two rects, or an empty rect when they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &PixelRect) -> PixelRect {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));

        if min.x >= max.x || min.y >= max.y {
            return PixelRect { min, max: min };
        }

        PixelRect { min, max }
    }
}
