//! Aspect-preserving placement of content inside measured bounds.
//!
//! Once a square view has measured, the host still has to place the image
//! inside it. These routines compute that placement: scale to fit,
//! optionally refuse to upscale, center the remainder. Pure geometry — the
//! host applies the result to whatever pixel machinery it owns.
//!
//! The binding axis is chosen by integer cross-multiplication, so two
//! candidates with the same aspect ratio always pick the same branch
//! regardless of magnitude.
//!
//! # Example
//!
//! ```
//! use zensquare::{Size, fit_center};
//!
//! // A 4:3 image centered in the 300x300 square the view measured.
//! let placed = fit_center(Size::new(400, 300), Size::new(300, 300));
//! assert_eq!(placed.size, Size::new(300, 225));
//! assert_eq!(placed.offset, (0, 37));
//! ```

use num_traits::Float;

use crate::measure::Size;

/// A scaled content size and its top-left offset within the bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentPlacement {
    /// Content dimensions after scaling.
    pub size: Size,
    /// Top-left corner of the content, in the bounds' coordinate space.
    pub offset: (u32, u32),
}

/// Scale `content` to the largest size that fits inside `bounds` while
/// preserving aspect ratio.
///
/// Upscales as well as downscales. A zero dimension on either side yields
/// `0x0` rather than a division by zero. The derived axis rounds to
/// nearest and never collapses below 1 while the binding axis is nonzero.
pub fn fit_inside(content: Size, bounds: Size) -> Size {
    if content.width == 0 || content.height == 0 || bounds.width == 0 || bounds.height == 0 {
        return Size::new(0, 0);
    }
    let cross_w = content.width as u64 * bounds.height as u64;
    let cross_h = content.height as u64 * bounds.width as u64;
    if cross_w >= cross_h {
        // Width is the binding axis (ties degenerate: both branches agree).
        Size::new(
            bounds.width,
            derived_axis(content.height, bounds.width, content.width),
        )
    } else {
        Size::new(
            derived_axis(content.width, bounds.height, content.height),
            bounds.height,
        )
    }
}

/// Like [`fit_inside`], but never upscales: content already within the
/// bounds is returned unchanged.
pub fn fit_within(content: Size, bounds: Size) -> Size {
    if content.width <= bounds.width && content.height <= bounds.height {
        content
    } else {
        fit_inside(content, bounds)
    }
}

/// Offset that centers an inner extent within an outer one.
///
/// Odd leftovers round toward the leading edge; an inner extent larger
/// than the outer pins to 0 rather than going negative.
pub const fn center_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Scale `content` with [`fit_inside`] and center it within `bounds`.
pub fn fit_center(content: Size, bounds: Size) -> ContentPlacement {
    let size = fit_inside(content, bounds);
    ContentPlacement {
        size,
        offset: (
            center_offset(bounds.width, size.width),
            center_offset(bounds.height, size.height),
        ),
    }
}

/// Derived axis: `value` scaled by `basis / denom`, rounded to nearest,
/// clamped to at least 1.
fn derived_axis(value: u32, basis: u32, denom: u32) -> u32 {
    let scaled = Float::round(value as f64 * basis as f64 / denom as f64);
    Float::max(scaled, 1.0) as u32
}
