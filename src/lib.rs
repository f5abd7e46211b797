//! Square-aspect measurement for image views: measure specs, basis modes, and content fit.
//!
//! Pure geometry — no pixel operations, no view tree, `no_std` compatible.
//!
//! # Modules
//!
//! - `attrs` — Host attribute resolution into view configuration (`attrs` feature)
//! - [`fit`] — Aspect-preserving placement of content inside measured bounds
//! - [`measure`] — Measure specs (Exactly, AtMost, Unspecified) and resolved sizes
//! - [`square`] — Square basis modes and proposal resolution
//! - [`view`] — The measurable seam, the square decorator, and a reference host

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "attrs")]
pub mod attrs;
pub mod fit;
pub mod measure;
pub mod square;
pub mod view;

// Re-exports: core types from the measurement modules
pub use fit::{ContentPlacement, center_offset, fit_center, fit_inside, fit_within};
pub use measure::{MeasureSpec, Size};
pub use square::SquareBasis;
pub use view::{ImageContent, Measure, SquareConfig, SquareImageView, SquareView};
