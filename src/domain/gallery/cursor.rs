// SPDX-License-Identifier: MPL-2.0
//! Circular cursor over a fixed, non-empty list of gallery images.

use std::num::NonZeroUsize;

/// Index of the currently displayed image in a list of `len` images.
///
/// The cursor only exists for non-empty lists and its index is always in
/// `[0, len)`. Out-of-range targets re-enter from the opposite end:
/// anything below zero selects the last image, anything at or past the
/// end selects the first one.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::gallery::Cursor;
///
/// let mut cursor = Cursor::new(3).unwrap();
/// assert_eq!(cursor.select(-1), 2);
/// assert_eq!(cursor.select(3), 0);
/// assert_eq!(cursor.position_label(), "1 / 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: NonZeroUsize,
}

impl Cursor {
    /// Creates a cursor at index 0, or `None` for an empty list.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    /// Returns the current index.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the number of images the cursor ranges over.
    #[must_use]
    pub fn len(self) -> usize {
        self.len.get()
    }

    /// Always false: a cursor never ranges over an empty list.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Normalizes `target` into `[0, len)` without moving the cursor.
    #[must_use]
    pub fn wrap(self, target: isize) -> usize {
        match usize::try_from(target) {
            Err(_) => self.len.get() - 1,
            Ok(index) if index >= self.len.get() => 0,
            Ok(index) => index,
        }
    }

    /// Moves the cursor to the normalized `target` and returns the new index.
    pub fn select(&mut self, target: isize) -> usize {
        self.index = self.wrap(target);
        self.index
    }

    /// Target that moves one image forward.
    #[must_use]
    pub fn next_target(self) -> isize {
        self.signed_index().saturating_add(1)
    }

    /// Target that moves one image backward.
    #[must_use]
    pub fn previous_target(self) -> isize {
        self.signed_index() - 1
    }

    /// Human-readable 1-based position, e.g. `"3 / 5"`.
    #[must_use]
    pub fn position_label(self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    fn signed_index(self) -> isize {
        isize::try_from(self.index).unwrap_or(isize::MAX)
    }
}
