use std::fmt;
use std::str::FromStr;

use crate::{Error, ParseReason, Result};

/// An axis-aligned, half-open pixel region `[left, right) x [top, bottom)`.
///
/// Any combination of sides is representable. A rectangle with no area (or an
/// inverted one) is simply not [valid](Rectangle::is_valid); operations never
/// normalize it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Rectangle {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The pixel whose top-left corner is at `(x, y)`.
    pub const fn from_point(x: i32, y: i32) -> Self {
        Self {
            left: x,
            right: x.saturating_add(1),
            top: y,
            bottom: y.saturating_add(1),
        }
    }

    /// The extent of a `width` x `height` buffer anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            right: i32::try_from(width).unwrap_or(i32::MAX),
            top: 0,
            bottom: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Positive width and height.
    pub const fn is_valid(self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    pub fn width(self) -> u32 {
        extent(self.left, self.right)
    }

    pub fn height(self) -> u32 {
        extent(self.top, self.bottom)
    }

    pub fn area(self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// The biggest rectangle that fits into both.
    ///
    /// Rectangles that don't overlap produce a rectangle that fails
    /// [`is_valid`](Rectangle::is_valid). Which invalid rectangle comes out
    /// depends on the inputs.
    pub fn intersection(self, other: Rectangle) -> Rectangle {
        Rectangle {
            left: self.left.max(other.left),
            right: self.right.min(other.right),
            top: self.top.max(other.top),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// The smallest rectangle containing both.
    pub fn bounding(self, other: Rectangle) -> Rectangle {
        Rectangle {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn equals(self, other: Rectangle) -> bool {
        self == other
    }

    /// Whether the pixel with its top-left corner at `(x, y)` lies inside.
    pub const fn contains_point(self, x: i32, y: i32) -> bool {
        // Right and bottom sides are exclusive so that neighbouring tiles
        // never share a pixel.
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    /// Clip to a `width` x `height` buffer, `None` if nothing is left.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<Rectangle> {
        let clamped = self.intersection(Rectangle::from_size(width, height));
        clamped.is_valid().then_some(clamped)
    }

    pub fn validated(self) -> Result<Rectangle> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidRectangle { rect: self })
        }
    }

    /// Formats as `prefix: l -> r; t -> b`.
    pub fn labeled(self, prefix: &str) -> Labeled<'_> {
        Labeled { prefix, rect: self }
    }

    pub fn log_debug(self, prefix: &str) {
        log::debug!("{}", self.labeled(prefix));
    }
}

fn extent(low: i32, high: i32) -> u32 {
    let span = i64::from(high) - i64::from(low);
    u32::try_from(span.max(0)).unwrap_or(u32::MAX)
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}; {} -> {}",
            self.left, self.right, self.top, self.bottom
        )
    }
}

/// A rectangle paired with a diagnostic prefix, see [`Rectangle::labeled`].
#[derive(Debug, Copy, Clone)]
pub struct Labeled<'a> {
    prefix: &'a str,
    rect: Rectangle,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prefix, self.rect)
    }
}

impl FromStr for Rectangle {
    type Err = Error;

    /// Parses the `Display` form, `l -> r; t -> b`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: ParseReason| Error::Parse {
            input: s.to_owned(),
            reason,
        };

        let (horizontal, vertical) = s
            .split_once(';')
            .ok_or_else(|| parse_error(ParseReason::MissingAxisSeparator))?;
        let (left, right) = parse_span(horizontal).map_err(parse_error)?;
        let (top, bottom) = parse_span(vertical).map_err(parse_error)?;
        Ok(Rectangle::new(left, right, top, bottom))
    }
}

fn parse_span(span: &str) -> Result<(i32, i32), ParseReason> {
    let (low, high) = span
        .split_once("->")
        .ok_or(ParseReason::MissingArrow)?;
    let low = low.trim().parse().map_err(ParseReason::InvalidInteger)?;
    let high = high.trim().parse().map_err(ParseReason::InvalidInteger)?;
    Ok((low, high))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_rect() -> impl Strategy<Value = Rectangle> {
        (-1000i32..1000, -1000i32..1000, -1000i32..1000, -1000i32..1000)
            .prop_map(|(l, r, t, b)| Rectangle::new(l, r, t, b))
    }

    fn valid_rect() -> impl Strategy<Value = Rectangle> {
        (-1000i32..1000, 1i32..500, -1000i32..1000, 1i32..500)
            .prop_map(|(l, w, t, h)| Rectangle::new(l, l + w, t, t + h))
    }

    /// A valid rectangle and a second one grown around one of its pixels.
    fn overlapping_pair() -> impl Strategy<Value = (Rectangle, Rectangle)> {
        (
            valid_rect(),
            (0u32..1000, 0u32..1000),
            (0i32..500, 0i32..500, 0i32..500, 0i32..500),
        )
            .prop_map(|(a, (ox, oy), (before_x, after_x, before_y, after_y))| {
                let x = a.left + (ox % a.width()) as i32;
                let y = a.top + (oy % a.height()) as i32;
                let b = Rectangle::new(x - before_x, x + 1 + after_x, y - before_y, y + 1 + after_y);
                (a, b)
            })
    }

    proptest! {
        #[test]
        fn equals_is_reflexive(a in any_rect()) {
            prop_assert!(a.equals(a));
        }

        #[test]
        fn operations_commute(a in any_rect(), b in any_rect()) {
            prop_assert_eq!(a.intersection(b), b.intersection(a));
            prop_assert_eq!(a.bounding(b), b.bounding(a));
        }

        #[test]
        fn operations_idempotent_on_valid(a in valid_rect()) {
            prop_assert_eq!(a.intersection(a), a);
            prop_assert_eq!(a.bounding(a), a);
        }

        #[test]
        fn bounding_valid_if_either_valid(a in valid_rect(), b in any_rect()) {
            prop_assert!(a.bounding(b).is_valid());
            prop_assert!(b.bounding(a).is_valid());
        }

        /// Every pixel of a valid intersection belongs to both inputs.
        #[test]
        fn intersection_points_in_both(
            (a, b) in overlapping_pair(),
            dx in 0u32..10_000,
            dy in 0u32..10_000,
        ) {
            let i = a.intersection(b);
            prop_assert!(i.is_valid(), "{} and {} share a pixel", a, b);
            let x = i.left + (dx % i.width()) as i32;
            let y = i.top + (dy % i.height()) as i32;
            prop_assert!(i.contains_point(x, y));
            prop_assert!(a.contains_point(x, y), "{} not in {}", i, a);
            prop_assert!(b.contains_point(x, y), "{} not in {}", i, b);
        }

        #[test]
        fn containment_matches_intersection(a in any_rect(), b in any_rect(), x in -1000i32..1000, y in -1000i32..1000) {
            prop_assert_eq!(
                a.intersection(b).contains_point(x, y),
                a.contains_point(x, y) && b.contains_point(x, y)
            );
        }

        #[test]
        fn display_parses_back(a in any_rect()) {
            prop_assert_eq!(a.to_string().parse::<Rectangle>().unwrap(), a);
        }
    }
}
