//! Measure specs and resolution arithmetic for a single layout pass.
//!
//! A measure spec is one axis of a host layout proposal: a proposed size
//! and a mode (exact, at-most, unconstrained). The host owns the layout
//! pass — this crate reads each proposal once and hands a result back.
//! Pure values, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zensquare::MeasureSpec;
//!
//! // Bounded proposals win; unconstrained falls back to the element.
//! assert_eq!(MeasureSpec::Exactly(300).resolve(120), 300);
//! assert_eq!(MeasureSpec::AtMost(300).resolve(120), 300);
//! assert_eq!(MeasureSpec::Unspecified.resolve(120), 120);
//! ```

/// One axis of a host layout proposal.
///
/// The host supplies one spec per axis on every measurement pass. The
/// payload is the proposed size in integer layout units. An unconstrained
/// proposal carries no size — it is the absence of a bound, not zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    /// The element must be exactly this size on the axis.
    Exactly(u32),
    /// The element may be any size up to this bound.
    AtMost(u32),
    /// No bound — the element sizes itself.
    Unspecified,
}

impl MeasureSpec {
    /// Proposed size, if this spec carries one.
    pub const fn size(self) -> Option<u32> {
        match self {
            Self::Exactly(n) | Self::AtMost(n) => Some(n),
            Self::Unspecified => None,
        }
    }

    /// Whether this spec bounds its axis.
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    /// Resolve this proposal against the element's own preference.
    ///
    /// `Exactly` and `AtMost` both resolve to the proposed size — the base
    /// behavior of a host visual element, which lets the container drive
    /// the final dimensions. `Unspecified` falls back to `preferred`.
    pub const fn resolve(self, preferred: u32) -> u32 {
        match self {
            Self::Exactly(n) | Self::AtMost(n) => n,
            Self::Unspecified => preferred,
        }
    }

    /// The smaller of two proposals, ordered by raw size.
    ///
    /// Defined explicitly over the size payloads rather than over any
    /// packed encoding the host may use internally: the smaller bounded
    /// size wins, `self` wins a size tie, a bounded proposal beats an
    /// unconstrained one, and `self` wins when both are unconstrained.
    pub const fn min_size(self, other: Self) -> Self {
        match (self.size(), other.size()) {
            (Some(a), Some(b)) => {
                if b < a { other } else { self }
            }
            (Some(_), None) => self,
            (None, Some(_)) => other,
            (None, None) => self,
        }
    }
}

/// Width × height dimensions in integer layout units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in layout units.
    pub width: u32,
    /// Height in layout units.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are equal.
    pub const fn is_square(self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve ────────────────────────────────────────────────────────

    #[test]
    fn exactly_resolves_to_proposal() {
        assert_eq!(MeasureSpec::Exactly(300).resolve(0), 300);
        assert_eq!(MeasureSpec::Exactly(0).resolve(120), 0);
    }

    #[test]
    fn at_most_resolves_to_proposal() {
        // Container-driven: the bound itself is the result, even when the
        // element would prefer less.
        assert_eq!(MeasureSpec::AtMost(300).resolve(120), 300);
        assert_eq!(MeasureSpec::AtMost(300).resolve(500), 300);
    }

    #[test]
    fn unspecified_falls_back() {
        assert_eq!(MeasureSpec::Unspecified.resolve(120), 120);
        assert_eq!(MeasureSpec::Unspecified.resolve(0), 0);
    }

    // ── size / is_bounded ──────────────────────────────────────────────

    #[test]
    fn size_payloads() {
        assert_eq!(MeasureSpec::Exactly(7).size(), Some(7));
        assert_eq!(MeasureSpec::AtMost(7).size(), Some(7));
        assert_eq!(MeasureSpec::Unspecified.size(), None);
    }

    #[test]
    fn bounded_flags() {
        assert!(MeasureSpec::Exactly(0).is_bounded());
        assert!(MeasureSpec::AtMost(0).is_bounded());
        assert!(!MeasureSpec::Unspecified.is_bounded());
    }

    // ── min_size ───────────────────────────────────────────────────────

    #[test]
    fn min_smaller_size_wins() {
        let a = MeasureSpec::Exactly(300);
        let b = MeasureSpec::Exactly(500);
        assert_eq!(a.min_size(b), a);
        assert_eq!(b.min_size(a), a);
    }

    #[test]
    fn min_compares_across_modes_by_size() {
        // 300 at-most beats 500 exactly; the mode tag never orders.
        let a = MeasureSpec::AtMost(300);
        let b = MeasureSpec::Exactly(500);
        assert_eq!(a.min_size(b), a);
        assert_eq!(b.min_size(a), a);
    }

    #[test]
    fn min_tie_keeps_self() {
        let a = MeasureSpec::Exactly(300);
        let b = MeasureSpec::AtMost(300);
        assert_eq!(a.min_size(b), a);
        assert_eq!(b.min_size(a), b);
    }

    #[test]
    fn min_bounded_beats_unconstrained() {
        // Unspecified is an absent bound, not zero.
        let bounded = MeasureSpec::AtMost(500);
        assert_eq!(bounded.min_size(MeasureSpec::Unspecified), bounded);
        assert_eq!(MeasureSpec::Unspecified.min_size(bounded), bounded);
    }

    #[test]
    fn min_both_unconstrained() {
        assert_eq!(
            MeasureSpec::Unspecified.min_size(MeasureSpec::Unspecified),
            MeasureSpec::Unspecified
        );
    }

    // ── Size ───────────────────────────────────────────────────────────

    #[test]
    fn square_detection() {
        assert!(Size::new(300, 300).is_square());
        assert!(Size::new(0, 0).is_square());
        assert!(!Size::new(300, 500).is_square());
    }
}
