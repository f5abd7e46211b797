//! The measurable seam, the square decorator, and a reference host.
//!
//! A host UI framework owns the layout pass; an element participates
//! through a single measurement entry point. [`Measure`] is that
//! capability as a seam, [`SquareView`] decorates any measurable so it
//! measures square, and [`ImageContent`] is a minimal host for tests and
//! for embedding without a framework.
//!
//! # Example
//!
//! ```
//! use zensquare::{ImageContent, Measure, MeasureSpec, SquareBasis, SquareConfig, SquareView};
//!
//! let content = ImageContent::new(400, 300);
//! let mut view = SquareView::with_config(content, SquareConfig::new(SquareBasis::Min));
//!
//! let size = view.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(500));
//! assert_eq!((size.width, size.height), (300, 300));
//! ```

use crate::measure::{MeasureSpec, Size};
use crate::square::SquareBasis;

/// The measurement capability of a host visual element.
///
/// One call per layout pass: the host proposes one spec per axis and the
/// element answers with its measured size. Implementations must be
/// deterministic — identical proposals yield identical sizes, so a pass
/// can be repeated without accumulating state.
pub trait Measure {
    /// Measure against the given axis proposals.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;
}

/// Construction-time configuration for a square view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareConfig {
    /// Which proposal drives the square dimension.
    pub basis: SquareBasis,
}

impl SquareConfig {
    /// Configuration with an explicit basis.
    pub const fn new(basis: SquareBasis) -> Self {
        Self { basis }
    }

    /// Configuration from a raw attribute value.
    ///
    /// Out-of-range values substitute the default basis, matching the
    /// numeric attribute contract.
    pub const fn from_attr_value(value: i32) -> Self {
        Self::new(SquareBasis::from_attr_value(value))
    }
}

/// Decorator that makes any measurable element measure square.
///
/// Intercepts the measurement entry point, resolves one proposal via the
/// configured [`SquareBasis`], and delegates to the inner element exactly
/// once per pass with that proposal on both axes. Every other capability
/// of the inner element stays untouched and reachable through
/// [`inner`](Self::inner).
#[derive(Clone, Debug)]
pub struct SquareView<M> {
    inner: M,
    basis: SquareBasis,
}

impl<M: Measure> SquareView<M> {
    /// Wrap with the default configuration (width basis).
    pub fn new(inner: M) -> Self {
        Self::with_config(inner, SquareConfig::default())
    }

    /// Wrap with an explicit configuration.
    ///
    /// Every construction path funnels here, so behavior does not depend
    /// on which one the host uses.
    pub fn with_config(inner: M, config: SquareConfig) -> Self {
        Self {
            inner,
            basis: config.basis,
        }
    }

    /// The configured basis. Fixed at construction.
    pub const fn basis(&self) -> SquareBasis {
        self.basis
    }

    /// Shared access to the wrapped element.
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Mutable access to the wrapped element.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Unwrap the element, discarding the decorator.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

#[cfg(feature = "attrs")]
impl<M: Measure> SquareView<M> {
    /// Wrap with configuration resolved from a host attribute bag.
    ///
    /// The bag is leased for the duration of resolution and released
    /// before this returns, on every path. Non-fatal resolution warnings
    /// are dropped here; use [`crate::attrs::resolve`] directly to
    /// inspect them.
    pub fn from_attrs(inner: M, bag: &crate::attrs::AttrBag<'_>) -> Self {
        Self::with_config(inner, crate::attrs::resolve(bag).config)
    }

    /// Like [`from_attrs`](Self::from_attrs), with a style layer
    /// underneath: element attributes win, then the style, then defaults.
    pub fn from_attrs_styled(
        inner: M,
        bag: &crate::attrs::AttrBag<'_>,
        style: &crate::attrs::AttrBag<'_>,
    ) -> Self {
        Self::with_config(inner, crate::attrs::resolve_styled(bag, style).config)
    }
}

impl<M: Measure> Measure for SquareView<M> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let resolved = self.basis.resolve(width, height);
        self.inner.measure(resolved, resolved)
    }
}

/// Minimal host element: content with intrinsic dimensions.
///
/// Resolves each axis with [`MeasureSpec::resolve`]: bounded proposals
/// win, unconstrained axes fall back to the intrinsic dimension. Under a
/// square decorator this yields equal final axes for any pair of bounded
/// proposals; a pass with both axes unconstrained measures to the
/// intrinsic dimensions themselves, so the element is square only if the
/// content is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageContent {
    /// Intrinsic content dimensions, e.g. the decoded image size the host
    /// reports for the element.
    pub intrinsic: Size,
}

impl ImageContent {
    /// Content with the given intrinsic dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
        }
    }
}

impl Measure for ImageContent {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            width.resolve(self.intrinsic.width),
            height.resolve(self.intrinsic.height),
        )
    }
}

/// A square view over intrinsic image content — the assembled widget.
pub type SquareImageView = SquareView<ImageContent>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Inner element that records the proposals it receives.
    struct Recorder {
        calls: u32,
        last: Option<(MeasureSpec, MeasureSpec)>,
        content: ImageContent,
    }

    impl Recorder {
        fn new(w: u32, h: u32) -> Self {
            Self {
                calls: 0,
                last: None,
                content: ImageContent::new(w, h),
            }
        }
    }

    impl Measure for Recorder {
        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            self.calls += 1;
            self.last = Some((width, height));
            self.content.measure(width, height)
        }
    }

    // ── delegation ─────────────────────────────────────────────────────

    #[test]
    fn delegates_once_with_symmetric_proposals() {
        let mut view = SquareView::new(Recorder::new(400, 300));
        view.measure(MeasureSpec::Exactly(250), MeasureSpec::Exactly(900));

        assert_eq!(view.inner().calls, 1);
        assert_eq!(
            view.inner().last,
            Some((MeasureSpec::Exactly(250), MeasureSpec::Exactly(250)))
        );
    }

    #[test]
    fn second_pass_delegates_again() {
        let mut view = SquareView::new(Recorder::new(400, 300));
        view.measure(MeasureSpec::Exactly(250), MeasureSpec::Exactly(900));
        view.measure(MeasureSpec::Exactly(250), MeasureSpec::Exactly(900));
        assert_eq!(view.inner().calls, 2);
    }

    // ── measured sizes ─────────────────────────────────────────────────

    #[test]
    fn bounded_passes_measure_square() {
        let mut view = SquareView::with_config(
            ImageContent::new(400, 300),
            SquareConfig::new(SquareBasis::Height),
        );
        let size = view.measure(MeasureSpec::AtMost(300), MeasureSpec::AtMost(500));
        assert_eq!(size, Size::new(500, 500));
        assert!(size.is_square());
    }

    #[test]
    fn unconstrained_pass_falls_back_to_content() {
        // Both axes unconstrained: the host answers with intrinsic
        // dimensions, square only if the content is.
        let mut view = SquareView::new(ImageContent::new(400, 300));
        let size = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(400, 300));
    }

    #[test]
    fn unconstrained_square_content_stays_square() {
        let mut view = SquareView::new(ImageContent::new(256, 256));
        let size = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(256, 256));
    }

    // ── construction funnel ────────────────────────────────────────────

    #[test]
    fn new_uses_default_basis() {
        let view = SquareView::new(ImageContent::new(1, 1));
        assert_eq!(view.basis(), SquareBasis::Width);
    }

    #[test]
    fn config_from_attr_value_matches_basis_mapping() {
        assert_eq!(
            SquareConfig::from_attr_value(2),
            SquareConfig::new(SquareBasis::Min)
        );
        assert_eq!(SquareConfig::from_attr_value(99), SquareConfig::default());
    }

    #[test]
    fn inner_access_and_unwrap() {
        let mut view = SquareView::new(ImageContent::new(10, 20));
        assert_eq!(view.inner().intrinsic, Size::new(10, 20));
        view.inner_mut().intrinsic = Size::new(30, 40);
        assert_eq!(view.into_inner().intrinsic, Size::new(30, 40));
    }
}
