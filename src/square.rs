//! Square basis modes and the symmetric constraint resolution.
//!
//! A square element measures both axes with one resolved proposal. The
//! basis selects which host proposal drives it: the width proposal, the
//! height proposal, or the smaller of the two.
//!
//! # Example
//!
//! ```
//! use zensquare::{MeasureSpec, SquareBasis};
//!
//! let resolved = SquareBasis::Min.resolve(
//!     MeasureSpec::Exactly(300),
//!     MeasureSpec::Exactly(500),
//! );
//! assert_eq!(resolved, MeasureSpec::Exactly(300));
//! ```

use crate::measure::MeasureSpec;

/// Which host proposal drives the square dimension.
///
/// Configured once from an integer attribute (`0`, `1`, or `2`) at
/// construction and immutable for the life of the element. Any other
/// attribute value behaves as `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SquareBasis {
    /// The width proposal drives both axes. Attribute value `0` (default).
    #[default]
    Width,
    /// The height proposal drives both axes. Attribute value `1`.
    Height,
    /// The smaller proposal drives both axes. Attribute value `2`.
    Min,
}

impl SquareBasis {
    /// Map a raw attribute value to a basis.
    ///
    /// `0`, `1`, `2` select the variants in declaration order. Any other
    /// value substitutes the default rather than signaling an error.
    pub const fn from_attr_value(value: i32) -> Self {
        match value {
            1 => Self::Height,
            2 => Self::Min,
            _ => Self::Width,
        }
    }

    /// The raw attribute value this basis corresponds to.
    pub const fn attr_value(self) -> i32 {
        match self {
            Self::Width => 0,
            Self::Height => 1,
            Self::Min => 2,
        }
    }

    /// Resolve the single proposal applied to both axes.
    ///
    /// `Width` and `Height` hand the matching proposal back unchanged.
    /// `Min` orders raw sizes (see [`MeasureSpec::min_size`]): the smaller
    /// bounded proposal wins and the width proposal wins ties.
    pub const fn resolve(self, width: MeasureSpec, height: MeasureSpec) -> MeasureSpec {
        match self {
            Self::Width => width,
            Self::Height => height,
            Self::Min => width.min_size(height),
        }
    }
}
