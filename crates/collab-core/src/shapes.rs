//! Shapes with segregated contracts.
//!
//! Drawing and resizing are unrelated operations, so they are two traits.
//! A shape implements only what it supports; nothing is stubbed out.

use serde::Serialize;

use crate::capability::Capability;
use crate::error::CapabilityResult;

/// What a shape produces when drawn: a variant marker plus its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Drawing {
    pub marker: &'static str,
    pub size: u32,
}

impl std::fmt::Display for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.marker, self.size)
    }
}

pub trait Draw {
    fn draw(&self) -> Drawing;
}

pub trait Resize {
    /// A copy of this shape scaled by `factor`.
    fn resize(&self, factor: u32) -> Self
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub radius: u32,
}

impl Circle {
    pub const MARKER: &'static str = "circle";

    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl Draw for Circle {
    fn draw(&self) -> Drawing {
        Drawing {
            marker: Self::MARKER,
            size: self.radius,
        }
    }
}

impl Resize for Circle {
    fn resize(&self, factor: u32) -> Self {
        Self::new(self.radius.saturating_mul(factor))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub side: u32,
}

impl Square {
    pub const MARKER: &'static str = "square";

    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Draw for Square {
    fn draw(&self) -> Drawing {
        Drawing {
            marker: Self::MARKER,
            size: self.side,
        }
    }
}

impl Resize for Square {
    fn resize(&self, factor: u32) -> Self {
        Self::new(self.side.saturating_mul(factor))
    }
}

/// Lets any [`Draw`] shape take a role in a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable<S>(pub S);

impl<S: Draw> Drawable<S> {
    pub fn new(shape: S) -> Self {
        Self(shape)
    }
}

impl<S: Draw> Capability for Drawable<S> {
    type Output = Drawing;

    fn perform(&self) -> CapabilityResult<Drawing> {
        Ok(self.0.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shape_draws_its_marker() {
        assert_eq!(Circle::new(3).draw().marker, "circle");
        assert_eq!(Square::new(4).draw().marker, "square");
    }

    #[test]
    fn test_drawing_display() {
        assert_eq!(Circle::new(3).draw().to_string(), "circle(3)");
        assert_eq!(Square::new(4).draw().to_string(), "square(4)");
    }

    #[test]
    fn test_resize_scales_without_touching_original() {
        let circle = Circle::new(2);
        let bigger = circle.resize(3);
        assert_eq!(bigger.radius, 6);
        assert_eq!(circle.radius, 2);
        assert_eq!(Square::new(5).resize(2), Square::new(10));
    }

    #[test]
    fn test_drawable_never_fails() {
        let circle = Drawable::new(Circle::new(1));
        let square = Drawable::new(Square::new(1));
        assert!(circle.perform().is_ok());
        assert!(square.perform().is_ok());
    }
}
