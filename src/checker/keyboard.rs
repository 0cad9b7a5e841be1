//! Vowel-variant generation for script-entry front ends.
//!
//! Ethiopic encodes each consonant's seven vowel orders at consecutive code
//! points, so the variants of a base character are `base + 0..7`. The
//! on-screen keyboard shows these as alternate letter-forms.

use crate::checker::tokenizer::is_ethiopic;

/// Number of vowel orders per base consonant.
pub const VOWEL_ORDERS: u32 = 7;

/// Generate the vowel variants of a base character by code-point offset.
///
/// Offsets that land outside valid scalar values (the surrogate range or
/// above U+10FFFF) are silently skipped. A non-Ethiopic base has no
/// variants and is returned as-is.
pub fn vowel_variants(base: char) -> Vec<char> {
    if !is_ethiopic(base) {
        return vec![base];
    }

    let base_code = base as u32;
    let variants: Vec<char> = (0..VOWEL_ORDERS)
        .filter_map(|offset| char::from_u32(base_code + offset))
        .collect();

    if variants.is_empty() {
        vec![base]
    } else {
        variants
    }
}
