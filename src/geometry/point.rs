use std::fmt;

use crate::error::{DonutError, Result};

/// Optional coordinates used to build an [`EuclideanPoint`].
///
/// Either `x` and `y` or `r` and `angle` must both be present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointCoords {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub r: Option<f64>,
    pub angle: Option<f64>,
}

/// A 2D point stored in both Cartesian and polar form.
///
/// `angle` is in radians and, for points built from `x`/`y`, lies in the
/// `atan2` range. Angles supplied through [`EuclideanPoint::from_polar`] are
/// kept as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuclideanPoint {
    x: f64,
    y: f64,
    r: f64,
    angle: f64,
}

impl EuclideanPoint {
    /// Build a point from whichever complete coordinate pair is present.
    /// A Cartesian pair takes priority over a polar one.
    pub fn new(coords: PointCoords) -> Result<Self> {
        match coords {
            PointCoords {
                x: Some(x),
                y: Some(y),
                ..
            } => Ok(Self::from_cartesian(x, y)),
            PointCoords {
                r: Some(r),
                angle: Some(angle),
                ..
            } => Ok(Self::from_polar(r, angle)),
            _ => Err(DonutError::InvalidArgument(
                "must provide either x,y or r,angle".to_string(),
            )),
        }
    }

    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            r: x.hypot(y),
            angle: y.atan2(x),
        }
    }

    pub fn from_polar(r: f64, angle: f64) -> Self {
        Self {
            x: r * angle.cos(),
            y: r * angle.sin(),
            r,
            angle,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Move this point in place. The polar form is recomputed from the new
    /// Cartesian position.
    pub fn shift(&mut self, dx: f64, dy: f64) -> &mut Self {
        *self = Self::from_cartesian(self.x + dx, self.y + dy);
        self
    }

    /// Return a new point offset from this one.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_cartesian(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for EuclideanPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
