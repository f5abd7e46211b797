//! Attribute key dispatch and value parsers.
//!
//! Key normalization, the square attribute, and preservation of known
//! host keys without external dependencies.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use crate::square::SquareBasis;

/// Known host keys that should be preserved in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_HOST: &[&str] = &[
    "background",
    "content_description",
    "id",
    "layout_height",
    "layout_width",
    "max_height",
    "max_width",
    "min_height",
    "min_width",
    "padding",
    "scale_type",
    "src",
    "tint",
];

/// One resolved attribute layer, before style merging.
pub(crate) struct Layer {
    pub(crate) basis: Option<SquareBasis>,
    pub(crate) extras: BTreeMap<String, String>,
}

/// Parse the pairs of one bag into a layer plus warnings.
pub(crate) fn parse_layer<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> (Layer, Vec<ParseWarning>) {
    let mut layer = Layer {
        basis: None,
        extras: BTreeMap::new(),
    };
    let mut warnings = Vec::new();

    for (raw_key, value) in pairs {
        let key = raw_key.trim().to_ascii_lowercase();
        dispatch_key(&key, value, &mut layer, &mut warnings);
    }

    (layer, warnings)
}

fn dispatch_key(key: &str, value: &str, layer: &mut Layer, warnings: &mut Vec<ParseWarning>) {
    match key {
        "mode" => {
            if let Some(b) = parse_basis(value) {
                set_or_warn(&mut layer.basis, Some(b), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "mode",
                    value: String::from(value),
                    reason: "expected 0|1|2 or width|height|min",
                });
            }
        }

        // Known host keys → extras, no warning
        _ => {
            if KNOWN_HOST.binary_search(&key).is_ok() {
                layer.extras.insert(String::from(key), String::from(value));
            } else {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

/// Parse a basis value: a raw attribute integer or a named basis.
///
/// Any integer is accepted; out-of-range values substitute the default
/// basis silently, per the numeric attribute contract. Only non-numeric
/// text that matches no name is rejected.
fn parse_basis(s: &str) -> Option<SquareBasis> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i32>() {
        return Some(SquareBasis::from_attr_value(v));
    }
    match s.to_ascii_lowercase().as_str() {
        "width" => Some(SquareBasis::Width),
        "height" => Some(SquareBasis::Height),
        "min" | "minimum" => Some(SquareBasis::Min),
        _ => None,
    }
}
