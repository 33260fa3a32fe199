use std::marker::PhantomData;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Marker trait for the coordinate spaces a point can live in.
///
/// The tags are zero-sized and exist only at the type level, so mixing spaces
/// (e.g. feeding a display point into a pixel→machine transform) is a compile
/// error instead of a latent transform-order bug.
pub trait Space: Copy + Clone + std::fmt::Debug + PartialEq + 'static {}

/// Source-image space: origin top-left, Y increasing downward, units px.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel;

/// Calibrated machine space: origin at the origin marker, Y up, units mm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Machine;

/// On-screen viewport space after aspect-ratio-preserving fit, units px.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Display;

impl Space for Pixel {}
impl Space for Machine {}
impl Space for Display {}

/// An immutable 2D point tagged with the coordinate space it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct SpacePoint<S: Space> {
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    _space: PhantomData<S>,
}

pub type PixelPoint = SpacePoint<Pixel>;
pub type MachinePoint = SpacePoint<Machine>;
pub type DisplayPoint = SpacePoint<Display>;

impl<S: Space> SpacePoint<S> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Vector from `other` to `self`.
    #[inline]
    pub fn delta(self, other: Self) -> Vector2<f64> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// This point translated by `v`, staying in the same space.
    #[inline]
    pub fn translate(self, v: Vector2<f64>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width/height extent of an image or viewport, in the units of its space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Usable as a scaling denominator: both extents finite and positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
