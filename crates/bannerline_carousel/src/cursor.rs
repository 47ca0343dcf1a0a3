// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circular index arithmetic over a slide deck.

/// Index of the slide after `index` in a deck of `len` slides, wrapping
/// from the last slide back to the first.
///
/// Only defined for `len >= 1`.
pub fn next(index: usize, len: usize) -> usize {
    debug_assert!(len >= 1, "cursor arithmetic requires a non-empty deck");
    (index + 1) % len
}

/// Index of the slide before `index` in a deck of `len` slides, wrapping
/// from the first slide to the last.
///
/// Only defined for `len >= 1`.
pub fn prev(index: usize, len: usize) -> usize {
    debug_assert!(len >= 1, "cursor arithmetic requires a non-empty deck");
    (index + len - 1) % len
}
