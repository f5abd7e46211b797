//! Host attribute resolution: bags, scoped leases, and square configuration.
//!
//! A host framework inflates an element from a set of string attributes.
//! This module models that handoff: an [`AttrBag`] is the element's
//! attribute set, a lease ([`AttrBag::obtain`]) is the scoped window in
//! which it may be read, and [`resolve`] turns one bag (or an element bag
//! over a style layer, via [`resolve_styled`]) into a [`SquareConfig`]
//! plus preserved host keys and non-fatal warnings.
//!
//! Resolution never fails: unreadable values substitute defaults and
//! report a [`ParseWarning`] instead.
//!
//! # Example
//!
//! ```
//! use zensquare::SquareBasis;
//! use zensquare::attrs::{AttrBag, resolve};
//!
//! let bag = AttrBag::new(&[("mode", "2"), ("src", "@drawable/photo")]);
//! let resolved = resolve(&bag);
//!
//! assert_eq!(resolved.config.basis, SquareBasis::Min);
//! assert_eq!(resolved.extras["src"], "@drawable/photo");
//! assert!(resolved.warnings.is_empty());
//! assert_eq!(bag.outstanding_leases(), 0);
//! ```

mod parse;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::view::SquareConfig;

/// A host element's attribute set: key/value string pairs in document
/// order.
///
/// Reading goes through a scoped lease ([`obtain`](Self::obtain)) that is
/// released on drop, mirroring hosts that hand out a typed attribute
/// array and require it returned.
/// [`outstanding_leases`](Self::outstanding_leases) exposes the balance
/// so embedders can assert the contract held.
#[derive(Debug)]
pub struct AttrBag<'a> {
    pairs: &'a [(&'a str, &'a str)],
    outstanding: Cell<u32>,
}

impl<'a> AttrBag<'a> {
    /// A bag over the given pairs. On duplicate keys the later pair wins.
    pub const fn new(pairs: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            pairs,
            outstanding: Cell::new(0),
        }
    }

    /// Lease the bag for reading. The lease releases itself on drop.
    pub fn obtain(&self) -> AttrLease<'_, 'a> {
        self.outstanding.set(self.outstanding.get() + 1);
        AttrLease { bag: self }
    }

    /// Leases obtained and not yet released.
    pub fn outstanding_leases(&self) -> u32 {
        self.outstanding.get()
    }
}

/// A scoped read lease on an [`AttrBag`].
#[derive(Debug)]
pub struct AttrLease<'b, 'a> {
    bag: &'b AttrBag<'a>,
}

impl<'a> AttrLease<'_, 'a> {
    /// The leased pairs, in document order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.bag.pairs.iter().copied()
    }
}

impl Drop for AttrLease<'_, '_> {
    fn drop(&mut self) {
        let n = self.bag.outstanding.get();
        self.bag.outstanding.set(n.saturating_sub(1));
    }
}

/// Non-fatal warning from attribute resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once in one bag (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized as a square or known host attribute.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be read.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Result of resolving an attribute bag.
#[derive(Debug, Clone)]
pub struct ResolvedAttrs {
    /// Square view configuration, defaults filled in.
    pub config: SquareConfig,
    /// Known host keys preserved for the embedder.
    pub extras: BTreeMap<String, String>,
    /// Non-fatal resolution warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Resolve a single attribute bag.
///
/// The bag is leased for the duration of resolution and released before
/// this returns, on every path.
pub fn resolve(bag: &AttrBag<'_>) -> ResolvedAttrs {
    resolve_styled(bag, &AttrBag::new(&[]))
}

/// Resolve an element bag over a style layer.
///
/// The element wins wherever both set a value, the style fills gaps, and
/// defaults fill the rest. Preserved host keys merge the same way. Each
/// bag is leased only while its own pairs are read, and both leases are
/// released before this returns.
pub fn resolve_styled(element: &AttrBag<'_>, style: &AttrBag<'_>) -> ResolvedAttrs {
    let (style_layer, style_warnings) = {
        let lease = style.obtain();
        parse::parse_layer(lease.pairs())
    };
    let (element_layer, element_warnings) = {
        let lease = element.obtain();
        parse::parse_layer(lease.pairs())
    };

    let basis = element_layer.basis.or(style_layer.basis).unwrap_or_default();

    let mut extras = style_layer.extras;
    extras.extend(element_layer.extras);

    let mut warnings = style_warnings;
    warnings.extend(element_warnings);

    ResolvedAttrs {
        config: SquareConfig::new(basis),
        extras,
        warnings,
    }
}
