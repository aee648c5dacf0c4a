//! Compatibility decomposition mappings (`<tag>` entries of UnicodeData.txt, Unicode 15.1).
//!
//! Stored as a two-level block table: `COMPAT_INDEX[cp >> 6]` selects a 64-entry block in
//! `COMPAT_BLOCKS`, whose value is a 1-based index into `COMPAT_ENTRIES` (0 means no mapping).

use crate::ucd::DecompositionTag;

pub(crate) const COMPAT_BLOCK_SHIFT: u32 = 6;
pub(crate) const COMPAT_BLOCK_MASK: u32 = 0x3f;

#[rustfmt::skip]
pub(crate) static COMPAT_INDEX: [u8; 2032] = [
    0, 0, 1, 0, 2, 3, 0, 4, 0, 0, 5, 6, 0, 7, 8, 9, 0, 0, 0, 0, 0, 0, 10, 0,
    0, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 12, 0, 13, 14, 15, 16, 0, 0, 0, 0, 0, 17, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 18, 19, 20, 0,
    0, 0, 21, 0, 0, 0, 22, 23, 24, 25, 26, 0, 27, 28, 29, 0, 30, 0, 0, 0, 0, 0, 0, 0,
    0, 31, 32, 33, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    34, 35, 0, 0, 0, 0, 0, 0, 0, 36, 0, 0, 0, 37, 0, 0, 0, 0, 38, 39, 40, 41, 42, 43,
    44, 0, 45, 46, 47, 48, 49, 0, 50, 51, 52, 53, 54, 55, 56, 57, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 58, 0, 0, 59, 0, 60,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 61, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 62, 63, 64, 65,
    66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 82, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    99, 100, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 101, 102, 103, 0, 0, 0, 0, 0, 0, 0, 0, 0, 104, 105, 106, 0,
    107, 108, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 109,
];

#[rustfmt::skip]
pub(crate) static COMPAT_BLOCKS: [u16; 7040] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 3, 0, 0, 0, 0, 4,
    0, 0, 5, 6, 7, 8, 0, 0, 9, 10, 11, 0, 12, 13, 14, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 15, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17,
    18, 0, 0, 0, 0, 0, 0, 0, 0, 19, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 20,
    0, 0, 0, 0, 21, 22, 23, 24, 25, 26, 27, 28, 29, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 30, 31, 32, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    33, 34, 35, 36, 37, 38, 39, 40, 41, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 42, 43, 44, 45, 46, 47, 0, 0,
    48, 49, 50, 51, 52, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 53, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 54, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    55, 56, 57, 0, 0, 58, 59, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    60, 61, 62, 0, 63, 64, 0, 0, 0, 65, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 66, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 67, 68, 69, 70, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 71, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 72, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 73, 74, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 75, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 76, 0, 77, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 78, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 79, 80, 81, 0,
    82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 0, 93, 94, 95, 96,
    97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 0, 111,
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 139, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 140, 141, 142, 143, 144,
    145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, 160,
    161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 177, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 178, 0, 179,
    180, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 181, 0,
    0, 0, 182, 183, 184, 185, 186, 187, 188, 189, 190, 0, 0, 0, 0, 0,
    0, 191, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 193, 194, 195, 0, 0, 0, 0, 0, 0, 0, 0, 196,
    0, 0, 0, 197, 198, 0, 199, 200, 0, 0, 0, 0, 201, 0, 202, 0,
    0, 0, 0, 0, 0, 0, 0, 203, 204, 205, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 206, 0, 0, 0, 0, 0, 0, 0, 207,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    208, 209, 0, 0, 210, 211, 212, 213, 214, 215, 216, 217, 218, 219, 220, 221,
    222, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 0,
    237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 250, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    251, 252, 253, 254, 0, 255, 256, 257, 0, 258, 259, 260, 261, 262, 263, 264,
    265, 266, 267, 268, 0, 269, 270, 0, 0, 271, 272, 273, 274, 275, 0, 0,
    276, 277, 278, 0, 279, 0, 0, 0, 280, 0, 0, 0, 281, 282, 0, 283,
    284, 285, 0, 286, 287, 288, 289, 290, 291, 292, 0, 293, 294, 295, 296, 297,
    298, 0, 0, 0, 0, 299, 300, 301, 302, 303, 0, 0, 0, 0, 0, 0,
    304, 305, 306, 307, 308, 309, 310, 311, 312, 313, 314, 315, 316, 317, 318, 319,
    320, 321, 322, 323, 324, 325, 326, 327, 328, 329, 330, 331, 332, 333, 334, 335,
    336, 337, 338, 339, 340, 341, 342, 343, 344, 345, 346, 347, 348, 349, 350, 351,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 352, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 353, 354, 0, 355,
    356, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    357, 358, 359, 360, 361, 362, 363, 364, 365, 366, 367, 368, 369, 370, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 380, 381, 382, 383, 384, 385, 386, 387, 388,
    389, 390, 391, 392, 393, 394, 395, 396, 397, 398, 399, 400, 401, 402, 403, 404,
    405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417, 418, 419, 420,
    421, 422, 423, 424, 425, 426, 427, 428, 429, 430, 431, 432, 433, 434, 435, 436,
    437, 438, 439, 440, 441, 442, 443, 444, 445, 446, 447, 448, 449, 450, 451, 452,
    453, 454, 455, 456, 457, 458, 459, 460, 461, 462, 463, 464, 465, 466, 467, 468,
    469, 470, 471, 472, 473, 474, 475, 476, 477, 478, 479, 480, 481, 482, 483, 484,
    485, 486, 487, 488, 489, 490, 491, 492, 493, 494, 495, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 496, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 497, 498, 499, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 500, 501, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 502,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 503,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 504, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    505, 506, 507, 508, 509, 510, 511, 512, 513, 514, 515, 516, 517, 518, 519, 520,
    521, 522, 523, 524, 525, 526, 527, 528, 529, 530, 531, 532, 533, 534, 535, 536,
    537, 538, 539, 540, 541, 542, 543, 544, 545, 546, 547, 548, 549, 550, 551, 552,
    553, 554, 555, 556, 557, 558, 559, 560, 561, 562, 563, 564, 565, 566, 567, 568,
    569, 570, 571, 572, 573, 574, 575, 576, 577, 578, 579, 580, 581, 582, 583, 584,
    585, 586, 587, 588, 589, 590, 591, 592, 593, 594, 595, 596, 597, 598, 599, 600,
    601, 602, 603, 604, 605, 606, 607, 608, 609, 610, 611, 612, 613, 614, 615, 616,
    617, 618, 619, 620, 621, 622, 623, 624, 625, 626, 627, 628, 629, 630, 631, 632,
    633, 634, 635, 636, 637, 638, 639, 640, 641, 642, 643, 644, 645, 646, 647, 648,
    649, 650, 651, 652, 653, 654, 655, 656, 657, 658, 659, 660, 661, 662, 663, 664,
    665, 666, 667, 668, 669, 670, 671, 672, 673, 674, 675, 676, 677, 678, 679, 680,
    681, 682, 683, 684, 685, 686, 687, 688, 689, 690, 691, 692, 693, 694, 695, 696,
    697, 698, 699, 700, 701, 702, 703, 704, 705, 706, 707, 708, 709, 710, 711, 712,
    713, 714, 715, 716, 717, 718, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    719, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 720, 0, 721, 722, 723, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 724, 725, 0, 0, 726,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 727,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 728, 729, 730, 731, 732, 733, 734, 735, 736, 737, 738, 739, 740, 741, 742,
    743, 744, 745, 746, 747, 748, 749, 750, 751, 752, 753, 754, 755, 756, 757, 758,
    759, 760, 761, 762, 763, 764, 765, 766, 767, 768, 769, 770, 771, 772, 773, 774,
    775, 776, 777, 778, 779, 780, 781, 782, 783, 784, 785, 786, 787, 788, 789, 790,
    791, 792, 793, 794, 795, 796, 797, 798, 799, 800, 801, 802, 803, 804, 805, 806,
    807, 808, 809, 810, 811, 812, 813, 814, 815, 816, 817, 818, 819, 820, 821, 0,
    0, 0, 822, 823, 824, 825, 826, 827, 828, 829, 830, 831, 832, 833, 834, 835,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    836, 837, 838, 839, 840, 841, 842, 843, 844, 845, 846, 847, 848, 849, 850, 851,
    852, 853, 854, 855, 856, 857, 858, 859, 860, 861, 862, 863, 864, 865, 866, 0,
    867, 868, 869, 870, 871, 872, 873, 874, 875, 876, 877, 878, 879, 880, 881, 882,
    883, 884, 885, 886, 887, 888, 889, 890, 891, 892, 893, 894, 895, 896, 897, 898,
    899, 900, 901, 902, 903, 904, 905, 906, 0, 0, 0, 0, 0, 0, 0, 0,
    907, 908, 909, 910, 911, 912, 913, 914, 915, 916, 917, 918, 919, 920, 921, 922,
    923, 924, 925, 926, 927, 928, 929, 930, 931, 932, 933, 934, 935, 936, 937, 938,
    939, 940, 941, 942, 943, 944, 945, 946, 947, 948, 949, 950, 951, 952, 953, 0,
    954, 955, 956, 957, 958, 959, 960, 961, 962, 963, 964, 965, 966, 967, 968, 969,
    970, 971, 972, 973, 974, 975, 976, 977, 978, 979, 980, 981, 982, 983, 984, 985,
    986, 987, 988, 989, 990, 991, 992, 993, 994, 995, 996, 997, 998, 999, 1000, 1001,
    1002, 1003, 1004, 1005, 1006, 1007, 1008, 1009, 1010, 1011, 1012, 1013, 1014, 1015, 1016, 1017,
    1018, 1019, 1020, 1021, 1022, 1023, 1024, 1025, 1026, 1027, 1028, 1029, 1030, 1031, 1032, 1033,
    1034, 1035, 1036, 1037, 1038, 1039, 1040, 1041, 1042, 1043, 1044, 1045, 1046, 1047, 1048, 1049,
    1050, 1051, 1052, 1053, 1054, 1055, 1056, 1057, 1058, 1059, 1060, 1061, 1062, 1063, 1064, 1065,
    1066, 1067, 1068, 1069, 1070, 1071, 1072, 1073, 1074, 1075, 1076, 1077, 1078, 1079, 1080, 1081,
    1082, 1083, 1084, 1085, 1086, 1087, 1088, 1089, 1090, 1091, 1092, 1093, 1094, 1095, 1096, 1097,
    1098, 1099, 1100, 1101, 1102, 1103, 1104, 1105, 1106, 1107, 1108, 1109, 1110, 1111, 1112, 1113,
    1114, 1115, 1116, 1117, 1118, 1119, 1120, 1121, 1122, 1123, 1124, 1125, 1126, 1127, 1128, 1129,
    1130, 1131, 1132, 1133, 1134, 1135, 1136, 1137, 1138, 1139, 1140, 1141, 1142, 1143, 1144, 1145,
    1146, 1147, 1148, 1149, 1150, 1151, 1152, 1153, 1154, 1155, 1156, 1157, 1158, 1159, 1160, 1161,
    1162, 1163, 1164, 1165, 1166, 1167, 1168, 1169, 1170, 1171, 1172, 1173, 1174, 1175, 1176, 1177,
    1178, 1179, 1180, 1181, 1182, 1183, 1184, 1185, 1186, 1187, 1188, 1189, 1190, 1191, 1192, 1193,
    1194, 1195, 1196, 1197, 1198, 1199, 1200, 1201, 1202, 1203, 1204, 1205, 1206, 1207, 1208, 1209,
    1210, 1211, 1212, 1213, 1214, 1215, 1216, 1217, 1218, 1219, 1220, 1221, 1222, 1223, 1224, 1225,
    1226, 1227, 1228, 1229, 1230, 1231, 1232, 1233, 1234, 1235, 1236, 1237, 1238, 1239, 1240, 1241,
    1242, 1243, 1244, 1245, 1246, 1247, 1248, 1249, 1250, 1251, 1252, 1253, 1254, 1255, 1256, 1257,
    1258, 1259, 1260, 1261, 1262, 1263, 1264, 1265, 1266, 1267, 1268, 1269, 1270, 1271, 1272, 1273,
    1274, 1275, 1276, 1277, 1278, 1279, 1280, 1281, 1282, 1283, 1284, 1285, 1286, 1287, 1288, 1289,
    1290, 1291, 1292, 1293, 1294, 1295, 1296, 1297, 1298, 1299, 1300, 1301, 1302, 1303, 1304, 1305,
    1306, 1307, 1308, 1309, 1310, 1311, 1312, 1313, 1314, 1315, 1316, 1317, 1318, 1319, 1320, 1321,
    1322, 1323, 1324, 1325, 1326, 1327, 1328, 1329, 1330, 1331, 1332, 1333, 1334, 1335, 1336, 1337,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1338, 1339, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1340, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1341, 1342, 1343, 0, 0, 0, 1344, 1345, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1346, 1347, 1348, 1349,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1350, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1351, 1352, 1353, 1354, 1355, 1356, 1357, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1358, 1359, 1360, 1361, 1362, 0, 0, 0, 0, 0, 0, 0, 0,
    1363, 1364, 1365, 1366, 1367, 1368, 1369, 1370, 1371, 1372, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1373,
    1374, 1375, 1376, 1377, 1378, 1379, 1380, 1381, 1382, 1383, 1384, 1385, 1386, 1387, 1388, 1389,
    1390, 1391, 1392, 1393, 1394, 1395, 1396, 1397, 1398, 1399, 1400, 1401, 1402, 1403, 1404, 1405,
    1406, 1407, 1408, 1409, 1410, 1411, 1412, 1413, 1414, 1415, 1416, 1417, 1418, 1419, 1420, 1421,
    1422, 1423, 1424, 1425, 1426, 1427, 1428, 1429, 1430, 1431, 1432, 1433, 1434, 1435, 1436, 1437,
    1438, 1439, 1440, 1441, 1442, 1443, 1444, 1445, 1446, 1447, 1448, 1449, 1450, 1451, 1452, 1453,
    1454, 1455, 1456, 1457, 1458, 1459, 1460, 1461, 1462, 1463, 1464, 1465, 1466, 1467, 1468, 1469,
    1470, 1471, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1472, 1473, 1474, 1475, 1476, 1477, 1478, 1479, 1480, 1481, 1482, 1483, 1484,
    1485, 1486, 1487, 1488, 1489, 1490, 1491, 1492, 1493, 1494, 1495, 1496, 1497, 1498, 1499, 1500,
    1501, 1502, 1503, 1504, 1505, 1506, 1507, 1508, 1509, 1510, 1511, 1512, 1513, 1514, 1515, 1516,
    1517, 1518, 1519, 1520, 1521, 1522, 1523, 1524, 1525, 1526, 1527, 1528, 1529, 1530, 1531, 1532,
    1533, 1534, 1535, 1536, 1537, 1538, 1539, 1540, 1541, 1542, 1543, 1544, 1545, 1546, 1547, 1548,
    1549, 1550, 1551, 1552, 1553, 1554, 1555, 1556, 1557, 1558, 1559, 1560, 1561, 1562, 1563, 1564,
    1565, 1566, 1567, 1568, 1569, 1570, 1571, 1572, 1573, 1574, 1575, 1576, 1577, 1578, 1579, 1580,
    1581, 1582, 1583, 1584, 1585, 1586, 1587, 1588, 1589, 1590, 1591, 1592, 1593, 1594, 1595, 1596,
    1597, 1598, 1599, 1600, 1601, 1602, 1603, 1604, 1605, 1606, 1607, 1608, 1609, 1610, 1611, 1612,
    1613, 1614, 1615, 1616, 1617, 1618, 1619, 1620, 1621, 1622, 1623, 1624, 1625, 1626, 1627, 1628,
    1629, 1630, 1631, 1632, 1633, 1634, 1635, 1636, 1637, 1638, 1639, 1640, 1641, 1642, 1643, 1644,
    1645, 1646, 1647, 1648, 1649, 1650, 1651, 1652, 1653, 1654, 1655, 1656, 1657, 1658, 1659, 1660,
    1661, 1662, 1663, 1664, 1665, 1666, 1667, 1668, 1669, 1670, 1671, 1672, 1673, 1674, 1675, 1676,
    1677, 1678, 1679, 1680, 1681, 1682, 1683, 1684, 1685, 1686, 1687, 1688, 1689, 1690, 1691, 1692,
    1693, 1694, 1695, 1696, 1697, 1698, 1699, 1700, 1701, 1702, 1703, 1704, 1705, 1706, 1707, 1708,
    1709, 1710, 1711, 1712, 1713, 1714, 1715, 1716, 1717, 1718, 1719, 1720, 1721, 1722, 1723, 1724,
    1725, 1726, 1727, 1728, 1729, 1730, 1731, 1732, 1733, 1734, 1735, 1736, 1737, 1738, 1739, 1740,
    1741, 1742, 1743, 1744, 1745, 1746, 1747, 1748, 1749, 1750, 1751, 1752, 1753, 1754, 1755, 1756,
    1757, 1758, 1759, 1760, 1761, 1762, 1763, 1764, 1765, 1766, 1767, 1768, 1769, 1770, 1771, 1772,
    1773, 1774, 1775, 1776, 1777, 1778, 1779, 1780, 1781, 1782, 1783, 1784, 1785, 1786, 1787, 1788,
    1789, 1790, 1791, 1792, 1793, 1794, 1795, 1796, 1797, 1798, 1799, 1800, 1801, 1802, 1803, 1804,
    1805, 1806, 1807, 1808, 1809, 1810, 1811, 1812, 1813, 1814, 1815, 1816, 1817, 1818, 1819, 1820,
    1821, 1822, 1823, 1824, 1825, 1826, 1827, 1828, 1829, 1830, 1831, 1832, 1833, 1834, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1835, 1836, 1837, 1838, 1839, 1840, 1841, 1842, 1843, 1844, 1845, 1846, 1847, 1848, 1849, 1850,
    1851, 1852, 1853, 1854, 1855, 1856, 1857, 1858, 1859, 1860, 1861, 1862, 1863, 1864, 1865, 1866,
    1867, 1868, 1869, 1870, 1871, 1872, 1873, 1874, 1875, 1876, 1877, 1878, 1879, 1880, 1881, 1882,
    1883, 1884, 1885, 1886, 1887, 1888, 1889, 1890, 1891, 1892, 1893, 1894, 1895, 1896, 1897, 1898,
    0, 0, 1899, 1900, 1901, 1902, 1903, 1904, 1905, 1906, 1907, 1908, 1909, 1910, 1911, 1912,
    1913, 1914, 1915, 1916, 1917, 1918, 1919, 1920, 1921, 1922, 1923, 1924, 1925, 1926, 1927, 1928,
    1929, 1930, 1931, 1932, 1933, 1934, 1935, 1936, 1937, 1938, 1939, 1940, 1941, 1942, 1943, 1944,
    1945, 1946, 1947, 1948, 1949, 1950, 1951, 1952, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1953, 1954, 1955, 1956, 1957, 1958, 1959, 1960, 1961, 1962, 1963, 1964, 1965, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1966, 1967, 1968, 1969, 1970, 1971, 1972, 1973, 1974, 1975, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1976, 1977, 1978, 1979, 1980, 1981, 1982, 1983, 1984, 1985, 1986, 1987, 1988, 1989, 1990, 1991,
    1992, 1993, 1994, 1995, 1996, 0, 0, 1997, 1998, 1999, 2000, 2001, 2002, 2003, 2004, 2005,
    2006, 2007, 2008, 0, 2009, 2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020,
    2021, 2022, 2023, 2024, 2025, 2026, 2027, 0, 2028, 2029, 2030, 2031, 0, 0, 0, 0,
    2032, 2033, 2034, 0, 2035, 0, 2036, 2037, 2038, 2039, 2040, 2041, 2042, 2043, 2044, 2045,
    2046, 2047, 2048, 2049, 2050, 2051, 2052, 2053, 2054, 2055, 2056, 2057, 2058, 2059, 2060, 2061,
    2062, 2063, 2064, 2065, 2066, 2067, 2068, 2069, 2070, 2071, 2072, 2073, 2074, 2075, 2076, 2077,
    2078, 2079, 2080, 2081, 2082, 2083, 2084, 2085, 2086, 2087, 2088, 2089, 2090, 2091, 2092, 2093,
    2094, 2095, 2096, 2097, 2098, 2099, 2100, 2101, 2102, 2103, 2104, 2105, 2106, 2107, 2108, 2109,
    2110, 2111, 2112, 2113, 2114, 2115, 2116, 2117, 2118, 2119, 2120, 2121, 2122, 2123, 2124, 2125,
    2126, 2127, 2128, 2129, 2130, 2131, 2132, 2133, 2134, 2135, 2136, 2137, 2138, 2139, 2140, 2141,
    2142, 2143, 2144, 2145, 2146, 2147, 2148, 2149, 2150, 2151, 2152, 2153, 2154, 2155, 2156, 2157,
    2158, 2159, 2160, 2161, 2162, 2163, 2164, 2165, 2166, 2167, 2168, 2169, 2170, 0, 0, 0,
    0, 2171, 2172, 2173, 2174, 2175, 2176, 2177, 2178, 2179, 2180, 2181, 2182, 2183, 2184, 2185,
    2186, 2187, 2188, 2189, 2190, 2191, 2192, 2193, 2194, 2195, 2196, 2197, 2198, 2199, 2200, 2201,
    2202, 2203, 2204, 2205, 2206, 2207, 2208, 2209, 2210, 2211, 2212, 2213, 2214, 2215, 2216, 2217,
    2218, 2219, 2220, 2221, 2222, 2223, 2224, 2225, 2226, 2227, 2228, 2229, 2230, 2231, 2232, 2233,
    2234, 2235, 2236, 2237, 2238, 2239, 2240, 2241, 2242, 2243, 2244, 2245, 2246, 2247, 2248, 2249,
    2250, 2251, 2252, 2253, 2254, 2255, 2256, 2257, 2258, 2259, 2260, 2261, 2262, 2263, 2264, 2265,
    2266, 2267, 2268, 2269, 2270, 2271, 2272, 2273, 2274, 2275, 2276, 2277, 2278, 2279, 2280, 2281,
    2282, 2283, 2284, 2285, 2286, 2287, 2288, 2289, 2290, 2291, 2292, 2293, 2294, 2295, 2296, 2297,
    2298, 2299, 2300, 2301, 2302, 2303, 2304, 2305, 2306, 2307, 2308, 2309, 2310, 2311, 2312, 2313,
    2314, 2315, 2316, 2317, 2318, 2319, 2320, 2321, 2322, 2323, 2324, 2325, 2326, 2327, 2328, 2329,
    2330, 2331, 2332, 2333, 2334, 2335, 2336, 2337, 2338, 2339, 2340, 2341, 2342, 2343, 2344, 2345,
    2346, 2347, 2348, 2349, 2350, 2351, 2352, 2353, 2354, 2355, 2356, 2357, 2358, 2359, 2360, 0,
    0, 0, 2361, 2362, 2363, 2364, 2365, 2366, 0, 0, 2367, 2368, 2369, 2370, 2371, 2372,
    0, 0, 2373, 2374, 2375, 2376, 2377, 2378, 0, 0, 2379, 2380, 2381, 0, 0, 0,
    2382, 2383, 2384, 2385, 2386, 2387, 2388, 0, 2389, 2390, 2391, 2392, 2393, 2394, 2395, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 2396, 2397, 2398, 2399, 2400, 0, 2401, 2402, 2403, 2404, 2405, 2406, 2407, 2408, 2409,
    2410, 2411, 2412, 2413, 2414, 2415, 2416, 2417, 2418, 2419, 2420, 2421, 2422, 2423, 2424, 2425,
    2426, 2427, 2428, 2429, 2430, 2431, 2432, 2433, 2434, 2435, 2436, 2437, 2438, 2439, 2440, 2441,
    2442, 0, 2443, 2444, 2445, 2446, 2447, 2448, 2449, 2450, 2451, 0, 0, 0, 0, 0,
    2452, 2453, 2454, 2455, 2456, 2457, 2458, 2459, 2460, 2461, 2462, 2463, 2464, 2465, 2466, 2467,
    2468, 2469, 2470, 2471, 2472, 2473, 2474, 2475, 2476, 2477, 2478, 2479, 2480, 2481, 2482, 2483,
    2484, 2485, 2486, 2487, 2488, 2489, 2490, 2491, 2492, 2493, 2494, 2495, 2496, 2497, 2498, 2499,
    2500, 2501, 2502, 2503, 2504, 2505, 2506, 2507, 2508, 2509, 2510, 2511, 2512, 2513, 2514, 2515,
    2516, 2517, 2518, 2519, 2520, 2521, 2522, 2523, 2524, 2525, 2526, 2527, 2528, 2529, 2530, 2531,
    2532, 2533, 2534, 2535, 2536, 0, 2537, 2538, 2539, 2540, 2541, 2542, 2543, 2544, 2545, 2546,
    2547, 2548, 2549, 2550, 2551, 2552, 2553, 2554, 2555, 2556, 2557, 2558, 2559, 2560, 2561, 2562,
    2563, 2564, 2565, 2566, 2567, 2568, 2569, 2570, 2571, 2572, 2573, 2574, 2575, 2576, 2577, 2578,
    2579, 2580, 2581, 2582, 2583, 2584, 2585, 2586, 2587, 2588, 2589, 2590, 2591, 2592, 2593, 2594,
    2595, 2596, 2597, 2598, 2599, 2600, 2601, 2602, 2603, 2604, 2605, 2606, 2607, 0, 2608, 2609,
    0, 0, 2610, 0, 0, 2611, 2612, 0, 0, 2613, 2614, 2615, 2616, 0, 2617, 2618,
    2619, 2620, 2621, 2622, 2623, 2624, 2625, 2626, 2627, 2628, 0, 2629, 0, 2630, 2631, 2632,
    2633, 2634, 2635, 2636, 0, 2637, 2638, 2639, 2640, 2641, 2642, 2643, 2644, 2645, 2646, 2647,
    2648, 2649, 2650, 2651, 2652, 2653, 2654, 2655, 2656, 2657, 2658, 2659, 2660, 2661, 2662, 2663,
    2664, 2665, 2666, 2667, 2668, 2669, 2670, 2671, 2672, 2673, 2674, 2675, 2676, 2677, 2678, 2679,
    2680, 2681, 2682, 2683, 2684, 2685, 2686, 2687, 2688, 2689, 2690, 2691, 2692, 2693, 2694, 2695,
    2696, 2697, 2698, 2699, 2700, 2701, 0, 2702, 2703, 2704, 2705, 0, 0, 2706, 2707, 2708,
    2709, 2710, 2711, 2712, 2713, 0, 2714, 2715, 2716, 2717, 2718, 2719, 2720, 0, 2721, 2722,
    2723, 2724, 2725, 2726, 2727, 2728, 2729, 2730, 2731, 2732, 2733, 2734, 2735, 2736, 2737, 2738,
    2739, 2740, 2741, 2742, 2743, 2744, 2745, 2746, 2747, 2748, 0, 2749, 2750, 2751, 2752, 0,
    2753, 2754, 2755, 2756, 2757, 0, 2758, 0, 0, 0, 2759, 2760, 2761, 2762, 2763, 2764,
    2765, 0, 2766, 2767, 2768, 2769, 2770, 2771, 2772, 2773, 2774, 2775, 2776, 2777, 2778, 2779,
    2780, 2781, 2782, 2783, 2784, 2785, 2786, 2787, 2788, 2789, 2790, 2791, 2792, 2793, 2794, 2795,
    2796, 2797, 2798, 2799, 2800, 2801, 2802, 2803, 2804, 2805, 2806, 2807, 2808, 2809, 2810, 2811,
    2812, 2813, 2814, 2815, 2816, 2817, 2818, 2819, 2820, 2821, 2822, 2823, 2824, 2825, 2826, 2827,
    2828, 2829, 2830, 2831, 2832, 2833, 2834, 2835, 2836, 2837, 2838, 2839, 2840, 2841, 2842, 2843,
    2844, 2845, 2846, 2847, 2848, 2849, 2850, 2851, 2852, 2853, 2854, 2855, 2856, 2857, 2858, 2859,
    2860, 2861, 2862, 2863, 2864, 2865, 2866, 2867, 2868, 2869, 2870, 2871, 2872, 2873, 2874, 2875,
    2876, 2877, 2878, 2879, 2880, 2881, 2882, 2883, 2884, 2885, 2886, 2887, 2888, 2889, 2890, 2891,
    2892, 2893, 2894, 2895, 2896, 2897, 2898, 2899, 2900, 2901, 2902, 2903, 2904, 2905, 2906, 2907,
    2908, 2909, 2910, 2911, 2912, 2913, 2914, 2915, 2916, 2917, 2918, 2919, 2920, 2921, 2922, 2923,
    2924, 2925, 2926, 2927, 2928, 2929, 2930, 2931, 2932, 2933, 2934, 2935, 2936, 2937, 2938, 2939,
    2940, 2941, 2942, 2943, 2944, 2945, 2946, 2947, 2948, 2949, 2950, 2951, 2952, 2953, 2954, 2955,
    2956, 2957, 2958, 2959, 2960, 2961, 2962, 2963, 2964, 2965, 2966, 2967, 2968, 2969, 2970, 2971,
    2972, 2973, 2974, 2975, 2976, 2977, 2978, 2979, 2980, 2981, 2982, 2983, 2984, 2985, 2986, 2987,
    2988, 2989, 2990, 2991, 2992, 2993, 2994, 2995, 2996, 2997, 2998, 2999, 3000, 3001, 3002, 3003,
    3004, 3005, 3006, 3007, 3008, 3009, 3010, 3011, 3012, 3013, 3014, 3015, 3016, 3017, 3018, 3019,
    3020, 3021, 3022, 3023, 3024, 3025, 3026, 3027, 3028, 3029, 3030, 3031, 3032, 3033, 3034, 3035,
    3036, 3037, 3038, 3039, 3040, 3041, 3042, 3043, 3044, 3045, 3046, 3047, 3048, 3049, 3050, 3051,
    3052, 3053, 3054, 3055, 3056, 3057, 3058, 3059, 3060, 3061, 3062, 3063, 3064, 3065, 3066, 3067,
    3068, 3069, 3070, 3071, 3072, 3073, 3074, 3075, 3076, 3077, 3078, 3079, 3080, 3081, 3082, 3083,
    3084, 3085, 3086, 3087, 3088, 3089, 3090, 3091, 3092, 3093, 3094, 3095, 3096, 3097, 3098, 3099,
    3100, 3101, 3102, 3103, 3104, 3105, 0, 0, 3106, 3107, 3108, 3109, 3110, 3111, 3112, 3113,
    3114, 3115, 3116, 3117, 3118, 3119, 3120, 3121, 3122, 3123, 3124, 3125, 3126, 3127, 3128, 3129,
    3130, 3131, 3132, 3133, 3134, 3135, 3136, 3137, 3138, 3139, 3140, 3141, 3142, 3143, 3144, 3145,
    3146, 3147, 3148, 3149, 3150, 3151, 3152, 3153, 3154, 3155, 3156, 3157, 3158, 3159, 3160, 3161,
    3162, 3163, 3164, 3165, 3166, 3167, 3168, 3169, 3170, 3171, 3172, 3173, 3174, 3175, 3176, 3177,
    3178, 3179, 3180, 3181, 3182, 3183, 3184, 3185, 3186, 3187, 3188, 3189, 3190, 3191, 3192, 3193,
    3194, 3195, 3196, 3197, 3198, 3199, 3200, 3201, 3202, 3203, 3204, 3205, 3206, 3207, 3208, 3209,
    3210, 3211, 3212, 3213, 3214, 3215, 3216, 3217, 3218, 3219, 3220, 3221, 3222, 3223, 3224, 3225,
    3226, 3227, 3228, 3229, 3230, 3231, 3232, 3233, 3234, 3235, 3236, 3237, 3238, 3239, 3240, 3241,
    3242, 3243, 3244, 3245, 3246, 3247, 3248, 3249, 3250, 3251, 3252, 3253, 3254, 3255, 3256, 3257,
    3258, 3259, 3260, 3261, 3262, 3263, 3264, 3265, 3266, 3267, 3268, 3269, 3270, 3271, 3272, 3273,
    3274, 3275, 3276, 3277, 3278, 3279, 3280, 3281, 3282, 3283, 3284, 3285, 3286, 3287, 3288, 3289,
    3290, 3291, 3292, 3293, 3294, 3295, 3296, 3297, 3298, 3299, 3300, 3301, 3302, 3303, 3304, 3305,
    3306, 3307, 3308, 3309, 3310, 3311, 3312, 3313, 3314, 3315, 3316, 3317, 3318, 3319, 3320, 3321,
    3322, 3323, 3324, 3325, 3326, 3327, 3328, 3329, 3330, 3331, 3332, 3333, 3334, 3335, 3336, 3337,
    3338, 3339, 3340, 3341, 3342, 3343, 3344, 3345, 3346, 3347, 3348, 3349, 3350, 3351, 3352, 3353,
    3354, 3355, 3356, 3357, 3358, 3359, 3360, 3361, 3362, 3363, 3364, 3365, 3366, 3367, 3368, 3369,
    3370, 3371, 3372, 3373, 3374, 3375, 3376, 3377, 3378, 3379, 3380, 3381, 3382, 3383, 3384, 3385,
    3386, 3387, 3388, 3389, 3390, 3391, 3392, 3393, 3394, 3395, 3396, 3397, 0, 0, 3398, 3399,
    3400, 3401, 3402, 3403, 3404, 3405, 3406, 3407, 3408, 3409, 3410, 3411, 3412, 3413, 3414, 3415,
    3416, 3417, 3418, 3419, 3420, 3421, 3422, 3423, 3424, 3425, 3426, 3427, 3428, 3429, 3430, 3431,
    3432, 3433, 3434, 3435, 3436, 3437, 3438, 3439, 3440, 3441, 3442, 3443, 3444, 3445, 3446, 3447,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3448, 3449, 3450, 3451, 3452, 3453, 3454, 3455, 3456, 3457, 3458, 3459, 3460, 3461, 3462, 3463,
    3464, 3465, 3466, 3467, 3468, 3469, 3470, 3471, 3472, 3473, 3474, 3475, 3476, 3477, 3478, 3479,
    3480, 3481, 3482, 3483, 3484, 3485, 3486, 3487, 3488, 3489, 3490, 3491, 3492, 3493, 3494, 3495,
    3496, 3497, 3498, 3499, 3500, 3501, 3502, 3503, 3504, 3505, 3506, 3507, 3508, 3509, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3510, 3511, 3512, 3513, 0, 3514, 3515, 3516, 3517, 3518, 3519, 3520, 3521, 3522, 3523, 3524,
    3525, 3526, 3527, 3528, 3529, 3530, 3531, 3532, 3533, 3534, 3535, 3536, 3537, 3538, 3539, 3540,
    0, 3541, 3542, 0, 3543, 0, 0, 3544, 0, 3545, 3546, 3547, 3548, 3549, 3550, 3551,
    3552, 3553, 3554, 0, 3555, 3556, 3557, 3558, 0, 3559, 0, 3560, 0, 0, 0, 0,
    0, 0, 3561, 0, 0, 0, 0, 3562, 0, 3563, 0, 3564, 0, 3565, 3566, 3567,
    0, 3568, 3569, 0, 3570, 0, 0, 3571, 0, 3572, 0, 3573, 0, 3574, 0, 3575,
    0, 3576, 3577, 0, 3578, 0, 0, 3579, 3580, 3581, 3582, 0, 3583, 3584, 3585, 3586,
    3587, 3588, 3589, 0, 3590, 3591, 3592, 3593, 0, 3594, 3595, 3596, 3597, 0, 3598, 0,
    3599, 3600, 3601, 3602, 3603, 3604, 3605, 3606, 3607, 3608, 0, 3609, 3610, 3611, 3612, 3613,
    3614, 3615, 3616, 3617, 3618, 3619, 3620, 3621, 3622, 3623, 3624, 3625, 0, 0, 0, 0,
    0, 3626, 3627, 3628, 0, 3629, 3630, 3631, 3632, 3633, 0, 3634, 3635, 3636, 3637, 3638,
    3639, 3640, 3641, 3642, 3643, 3644, 3645, 3646, 3647, 3648, 3649, 3650, 0, 0, 0, 0,
    3651, 3652, 3653, 3654, 3655, 3656, 3657, 3658, 3659, 3660, 3661, 0, 0, 0, 0, 0,
    3662, 3663, 3664, 3665, 3666, 3667, 3668, 3669, 3670, 3671, 3672, 3673, 3674, 3675, 3676, 3677,
    3678, 3679, 3680, 3681, 3682, 3683, 3684, 3685, 3686, 3687, 3688, 3689, 3690, 3691, 3692, 0,
    3693, 3694, 3695, 3696, 3697, 3698, 3699, 3700, 3701, 3702, 3703, 3704, 3705, 3706, 3707, 3708,
    3709, 3710, 3711, 3712, 3713, 3714, 3715, 3716, 3717, 3718, 3719, 3720, 3721, 3722, 3723, 3724,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3725, 3726, 3727, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3728, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3729, 3730, 3731, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3732, 3733, 3734, 3735, 3736, 3737, 3738, 3739, 3740, 3741, 3742, 3743, 3744, 3745, 3746, 3747,
    3748, 3749, 3750, 3751, 3752, 3753, 3754, 3755, 3756, 3757, 3758, 3759, 3760, 3761, 3762, 3763,
    3764, 3765, 3766, 3767, 3768, 3769, 3770, 3771, 3772, 3773, 3774, 3775, 0, 0, 0, 0,
    3776, 3777, 3778, 3779, 3780, 3781, 3782, 3783, 3784, 0, 0, 0, 0, 0, 0, 0,
    3785, 3786, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3787, 3788, 3789, 3790, 3791, 3792, 3793, 3794, 3795, 3796, 0, 0, 0, 0, 0, 0,
];

/// `(tag, offset into COMPAT_DATA, length)`
#[rustfmt::skip]
pub(crate) static COMPAT_ENTRIES: [(DecompositionTag, u16, u8); 3796] = [
    (DecompositionTag::NoBreak, 0, 1), (DecompositionTag::Compat, 1, 2), (DecompositionTag::Super, 3, 1), (DecompositionTag::Compat, 4, 2),
    (DecompositionTag::Super, 6, 1), (DecompositionTag::Super, 7, 1), (DecompositionTag::Compat, 8, 2), (DecompositionTag::Compat, 10, 1),
    (DecompositionTag::Compat, 11, 2), (DecompositionTag::Super, 13, 1), (DecompositionTag::Super, 14, 1), (DecompositionTag::Fraction, 15, 3),
    (DecompositionTag::Fraction, 18, 3), (DecompositionTag::Fraction, 21, 3), (DecompositionTag::Compat, 24, 2), (DecompositionTag::Compat, 26, 2),
    (DecompositionTag::Compat, 28, 2), (DecompositionTag::Compat, 30, 2), (DecompositionTag::Compat, 32, 2), (DecompositionTag::Compat, 34, 1),
    (DecompositionTag::Compat, 35, 2), (DecompositionTag::Compat, 37, 2), (DecompositionTag::Compat, 39, 2), (DecompositionTag::Compat, 41, 2),
    (DecompositionTag::Compat, 43, 2), (DecompositionTag::Compat, 45, 2), (DecompositionTag::Compat, 47, 2), (DecompositionTag::Compat, 49, 2),
    (DecompositionTag::Compat, 51, 2), (DecompositionTag::Compat, 53, 2), (DecompositionTag::Compat, 55, 2), (DecompositionTag::Compat, 57, 2),
    (DecompositionTag::Super, 59, 1), (DecompositionTag::Super, 60, 1), (DecompositionTag::Super, 61, 1), (DecompositionTag::Super, 62, 1),
    (DecompositionTag::Super, 63, 1), (DecompositionTag::Super, 64, 1), (DecompositionTag::Super, 65, 1), (DecompositionTag::Super, 66, 1),
    (DecompositionTag::Super, 67, 1), (DecompositionTag::Compat, 68, 2), (DecompositionTag::Compat, 70, 2), (DecompositionTag::Compat, 72, 2),
    (DecompositionTag::Compat, 74, 2), (DecompositionTag::Compat, 76, 2), (DecompositionTag::Compat, 78, 2), (DecompositionTag::Super, 80, 1),
    (DecompositionTag::Super, 81, 1), (DecompositionTag::Super, 82, 1), (DecompositionTag::Super, 83, 1), (DecompositionTag::Super, 84, 1),
    (DecompositionTag::Compat, 85, 2), (DecompositionTag::Compat, 87, 2), (DecompositionTag::Compat, 89, 1), (DecompositionTag::Compat, 90, 1),
    (DecompositionTag::Compat, 91, 1), (DecompositionTag::Compat, 92, 1), (DecompositionTag::Compat, 93, 1), (DecompositionTag::Compat, 94, 1),
    (DecompositionTag::Compat, 95, 1), (DecompositionTag::Compat, 96, 1), (DecompositionTag::Compat, 97, 1), (DecompositionTag::Compat, 98, 1),
    (DecompositionTag::Compat, 99, 1), (DecompositionTag::Compat, 100, 2), (DecompositionTag::Compat, 102, 2), (DecompositionTag::Compat, 104, 2),
    (DecompositionTag::Compat, 106, 2), (DecompositionTag::Compat, 108, 2), (DecompositionTag::Compat, 110, 2), (DecompositionTag::Compat, 112, 2),
    (DecompositionTag::Compat, 114, 2), (DecompositionTag::Compat, 116, 2), (DecompositionTag::NoBreak, 118, 1), (DecompositionTag::Compat, 119, 2),
    (DecompositionTag::Compat, 121, 2), (DecompositionTag::Super, 123, 1), (DecompositionTag::Super, 124, 1), (DecompositionTag::Super, 125, 1),
    (DecompositionTag::Super, 126, 1), (DecompositionTag::Super, 127, 1), (DecompositionTag::Super, 128, 1), (DecompositionTag::Super, 129, 1),
    (DecompositionTag::Super, 130, 1), (DecompositionTag::Super, 131, 1), (DecompositionTag::Super, 132, 1), (DecompositionTag::Super, 133, 1),
    (DecompositionTag::Super, 134, 1), (DecompositionTag::Super, 135, 1), (DecompositionTag::Super, 136, 1), (DecompositionTag::Super, 137, 1),
    (DecompositionTag::Super, 138, 1), (DecompositionTag::Super, 139, 1), (DecompositionTag::Super, 140, 1), (DecompositionTag::Super, 141, 1),
    (DecompositionTag::Super, 142, 1), (DecompositionTag::Super, 143, 1), (DecompositionTag::Super, 144, 1), (DecompositionTag::Super, 145, 1),
    (DecompositionTag::Super, 146, 1), (DecompositionTag::Super, 147, 1), (DecompositionTag::Super, 148, 1), (DecompositionTag::Super, 149, 1),
    (DecompositionTag::Super, 150, 1), (DecompositionTag::Super, 151, 1), (DecompositionTag::Super, 152, 1), (DecompositionTag::Super, 153, 1),
    (DecompositionTag::Super, 154, 1), (DecompositionTag::Super, 155, 1), (DecompositionTag::Super, 156, 1), (DecompositionTag::Super, 157, 1),
    (DecompositionTag::Super, 158, 1), (DecompositionTag::Super, 159, 1), (DecompositionTag::Super, 160, 1), (DecompositionTag::Super, 161, 1),
    (DecompositionTag::Super, 162, 1), (DecompositionTag::Super, 163, 1), (DecompositionTag::Super, 164, 1), (DecompositionTag::Super, 165, 1),
    (DecompositionTag::Super, 166, 1), (DecompositionTag::Super, 167, 1), (DecompositionTag::Super, 168, 1), (DecompositionTag::Super, 169, 1),
    (DecompositionTag::Super, 170, 1), (DecompositionTag::Super, 171, 1), (DecompositionTag::Super, 172, 1), (DecompositionTag::Super, 173, 1),
    (DecompositionTag::Super, 174, 1), (DecompositionTag::Sub, 175, 1), (DecompositionTag::Sub, 176, 1), (DecompositionTag::Sub, 177, 1),
    (DecompositionTag::Sub, 178, 1), (DecompositionTag::Sub, 179, 1), (DecompositionTag::Sub, 180, 1), (DecompositionTag::Sub, 181, 1),
    (DecompositionTag::Sub, 182, 1), (DecompositionTag::Sub, 183, 1), (DecompositionTag::Super, 184, 1), (DecompositionTag::Super, 185, 1),
    (DecompositionTag::Super, 186, 1), (DecompositionTag::Super, 187, 1), (DecompositionTag::Super, 188, 1), (DecompositionTag::Super, 189, 1),
    (DecompositionTag::Super, 190, 1), (DecompositionTag::Super, 191, 1), (DecompositionTag::Super, 192, 1), (DecompositionTag::Super, 193, 1),
    (DecompositionTag::Super, 194, 1), (DecompositionTag::Super, 195, 1), (DecompositionTag::Super, 196, 1), (DecompositionTag::Super, 197, 1),
    (DecompositionTag::Super, 198, 1), (DecompositionTag::Super, 199, 1), (DecompositionTag::Super, 200, 1), (DecompositionTag::Super, 201, 1),
    (DecompositionTag::Super, 202, 1), (DecompositionTag::Super, 203, 1), (DecompositionTag::Super, 204, 1), (DecompositionTag::Super, 205, 1),
    (DecompositionTag::Super, 206, 1), (DecompositionTag::Super, 207, 1), (DecompositionTag::Super, 208, 1), (DecompositionTag::Super, 209, 1),
    (DecompositionTag::Super, 210, 1), (DecompositionTag::Super, 211, 1), (DecompositionTag::Super, 212, 1), (DecompositionTag::Super, 213, 1),
    (DecompositionTag::Super, 214, 1), (DecompositionTag::Super, 215, 1), (DecompositionTag::Super, 216, 1), (DecompositionTag::Super, 217, 1),
    (DecompositionTag::Super, 218, 1), (DecompositionTag::Super, 219, 1), (DecompositionTag::Super, 220, 1), (DecompositionTag::Super, 221, 1),
    (DecompositionTag::Compat, 222, 2), (DecompositionTag::Compat, 224, 2), (DecompositionTag::Compat, 226, 2), (DecompositionTag::Compat, 228, 2),
    (DecompositionTag::Compat, 230, 2), (DecompositionTag::Compat, 232, 1), (DecompositionTag::Compat, 233, 1), (DecompositionTag::Compat, 234, 1),
    (DecompositionTag::Compat, 235, 1), (DecompositionTag::Compat, 236, 1), (DecompositionTag::NoBreak, 237, 1), (DecompositionTag::Compat, 238, 1),
    (DecompositionTag::Compat, 239, 1), (DecompositionTag::Compat, 240, 1), (DecompositionTag::NoBreak, 241, 1), (DecompositionTag::Compat, 242, 2),
    (DecompositionTag::Compat, 244, 1), (DecompositionTag::Compat, 245, 2), (DecompositionTag::Compat, 247, 3), (DecompositionTag::NoBreak, 250, 1),
    (DecompositionTag::Compat, 251, 2), (DecompositionTag::Compat, 253, 3), (DecompositionTag::Compat, 256, 2), (DecompositionTag::Compat, 258, 3),
    (DecompositionTag::Compat, 261, 2), (DecompositionTag::Compat, 263, 2), (DecompositionTag::Compat, 265, 2), (DecompositionTag::Compat, 267, 2),
    (DecompositionTag::Compat, 269, 2), (DecompositionTag::Compat, 271, 4), (DecompositionTag::Compat, 275, 1), (DecompositionTag::Super, 276, 1),
    (DecompositionTag::Super, 277, 1), (DecompositionTag::Super, 278, 1), (DecompositionTag::Super, 279, 1), (DecompositionTag::Super, 280, 1),
    (DecompositionTag::Super, 281, 1), (DecompositionTag::Super, 282, 1), (DecompositionTag::Super, 283, 1), (DecompositionTag::Super, 284, 1),
    (DecompositionTag::Super, 285, 1), (DecompositionTag::Super, 286, 1), (DecompositionTag::Super, 287, 1), (DecompositionTag::Super, 288, 1),
    (DecompositionTag::Super, 289, 1), (DecompositionTag::Sub, 290, 1), (DecompositionTag::Sub, 291, 1), (DecompositionTag::Sub, 292, 1),
    (DecompositionTag::Sub, 293, 1), (DecompositionTag::Sub, 294, 1), (DecompositionTag::Sub, 295, 1), (DecompositionTag::Sub, 296, 1),
    (DecompositionTag::Sub, 297, 1), (DecompositionTag::Sub, 298, 1), (DecompositionTag::Sub, 299, 1), (DecompositionTag::Sub, 300, 1),
    (DecompositionTag::Sub, 301, 1), (DecompositionTag::Sub, 302, 1), (DecompositionTag::Sub, 303, 1), (DecompositionTag::Sub, 304, 1),
    (DecompositionTag::Sub, 305, 1), (DecompositionTag::Sub, 306, 1), (DecompositionTag::Sub, 307, 1), (DecompositionTag::Sub, 308, 1),
    (DecompositionTag::Sub, 309, 1), (DecompositionTag::Sub, 310, 1), (DecompositionTag::Sub, 311, 1), (DecompositionTag::Sub, 312, 1),
    (DecompositionTag::Sub, 313, 1), (DecompositionTag::Sub, 314, 1), (DecompositionTag::Sub, 315, 1), (DecompositionTag::Sub, 316, 1),
    (DecompositionTag::Sub, 317, 1), (DecompositionTag::Compat, 318, 2), (DecompositionTag::Compat, 320, 3), (DecompositionTag::Compat, 323, 3),
    (DecompositionTag::Font, 326, 1), (DecompositionTag::Compat, 327, 2), (DecompositionTag::Compat, 329, 3), (DecompositionTag::Compat, 332, 3),
    (DecompositionTag::Compat, 335, 1), (DecompositionTag::Compat, 336, 2), (DecompositionTag::Font, 338, 1), (DecompositionTag::Font, 339, 1),
    (DecompositionTag::Font, 340, 1), (DecompositionTag::Font, 341, 1), (DecompositionTag::Font, 342, 1), (DecompositionTag::Font, 343, 1),
    (DecompositionTag::Font, 344, 1), (DecompositionTag::Font, 345, 1), (DecompositionTag::Font, 346, 1), (DecompositionTag::Font, 347, 1),
    (DecompositionTag::Font, 348, 1), (DecompositionTag::Compat, 349, 2), (DecompositionTag::Font, 351, 1), (DecompositionTag::Font, 352, 1),
    (DecompositionTag::Font, 353, 1), (DecompositionTag::Font, 354, 1), (DecompositionTag::Font, 355, 1), (DecompositionTag::Super, 356, 2),
    (DecompositionTag::Compat, 358, 3), (DecompositionTag::Super, 361, 2), (DecompositionTag::Font, 363, 1), (DecompositionTag::Font, 364, 1),
    (DecompositionTag::Font, 365, 1), (DecompositionTag::Font, 366, 1), (DecompositionTag::Font, 367, 1), (DecompositionTag::Font, 368, 1),
    (DecompositionTag::Font, 369, 1), (DecompositionTag::Font, 370, 1), (DecompositionTag::Font, 371, 1), (DecompositionTag::Compat, 372, 1),
    (DecompositionTag::Compat, 373, 1), (DecompositionTag::Compat, 374, 1), (DecompositionTag::Compat, 375, 1), (DecompositionTag::Font, 376, 1),
    (DecompositionTag::Compat, 377, 3), (DecompositionTag::Font, 380, 1), (DecompositionTag::Font, 381, 1), (DecompositionTag::Font, 382, 1),
    (DecompositionTag::Font, 383, 1), (DecompositionTag::Font, 384, 1), (DecompositionTag::Font, 385, 1), (DecompositionTag::Font, 386, 1),
    (DecompositionTag::Font, 387, 1), (DecompositionTag::Font, 388, 1), (DecompositionTag::Font, 389, 1), (DecompositionTag::Fraction, 390, 3),
    (DecompositionTag::Fraction, 393, 3), (DecompositionTag::Fraction, 396, 4), (DecompositionTag::Fraction, 400, 3), (DecompositionTag::Fraction, 403, 3),
    (DecompositionTag::Fraction, 406, 3), (DecompositionTag::Fraction, 409, 3), (DecompositionTag::Fraction, 412, 3), (DecompositionTag::Fraction, 415, 3),
    (DecompositionTag::Fraction, 418, 3), (DecompositionTag::Fraction, 421, 3), (DecompositionTag::Fraction, 424, 3), (DecompositionTag::Fraction, 427, 3),
    (DecompositionTag::Fraction, 430, 3), (DecompositionTag::Fraction, 433, 3), (DecompositionTag::Fraction, 436, 2), (DecompositionTag::Compat, 438, 1),
    (DecompositionTag::Compat, 439, 2), (DecompositionTag::Compat, 441, 3), (DecompositionTag::Compat, 444, 2), (DecompositionTag::Compat, 446, 1),
    (DecompositionTag::Compat, 447, 2), (DecompositionTag::Compat, 449, 3), (DecompositionTag::Compat, 452, 4), (DecompositionTag::Compat, 456, 2),
    (DecompositionTag::Compat, 458, 1), (DecompositionTag::Compat, 459, 2), (DecompositionTag::Compat, 461, 3), (DecompositionTag::Compat, 464, 1),
    (DecompositionTag::Compat, 465, 1), (DecompositionTag::Compat, 466, 1), (DecompositionTag::Compat, 467, 1), (DecompositionTag::Compat, 468, 1),
    (DecompositionTag::Compat, 469, 2), (DecompositionTag::Compat, 471, 3), (DecompositionTag::Compat, 474, 2), (DecompositionTag::Compat, 476, 1),
    (DecompositionTag::Compat, 477, 2), (DecompositionTag::Compat, 479, 3), (DecompositionTag::Compat, 482, 4), (DecompositionTag::Compat, 486, 2),
    (DecompositionTag::Compat, 488, 1), (DecompositionTag::Compat, 489, 2), (DecompositionTag::Compat, 491, 3), (DecompositionTag::Compat, 494, 1),
    (DecompositionTag::Compat, 495, 1), (DecompositionTag::Compat, 496, 1), (DecompositionTag::Compat, 497, 1), (DecompositionTag::Fraction, 498, 3),
    (DecompositionTag::Compat, 501, 2), (DecompositionTag::Compat, 503, 3), (DecompositionTag::Compat, 506, 2), (DecompositionTag::Compat, 508, 3),
    (DecompositionTag::Circle, 511, 1), (DecompositionTag::Circle, 512, 1), (DecompositionTag::Circle, 513, 1), (DecompositionTag::Circle, 514, 1),
    (DecompositionTag::Circle, 515, 1), (DecompositionTag::Circle, 516, 1), (DecompositionTag::Circle, 517, 1), (DecompositionTag::Circle, 518, 1),
    (DecompositionTag::Circle, 519, 1), (DecompositionTag::Circle, 520, 2), (DecompositionTag::Circle, 522, 2), (DecompositionTag::Circle, 524, 2),
    (DecompositionTag::Circle, 526, 2), (DecompositionTag::Circle, 528, 2), (DecompositionTag::Circle, 530, 2), (DecompositionTag::Circle, 532, 2),
    (DecompositionTag::Circle, 534, 2), (DecompositionTag::Circle, 536, 2), (DecompositionTag::Circle, 538, 2), (DecompositionTag::Circle, 540, 2),
    (DecompositionTag::Compat, 542, 3), (DecompositionTag::Compat, 545, 3), (DecompositionTag::Compat, 548, 3), (DecompositionTag::Compat, 551, 3),
    (DecompositionTag::Compat, 554, 3), (DecompositionTag::Compat, 557, 3), (DecompositionTag::Compat, 560, 3), (DecompositionTag::Compat, 563, 3),
    (DecompositionTag::Compat, 566, 3), (DecompositionTag::Compat, 569, 4), (DecompositionTag::Compat, 573, 4), (DecompositionTag::Compat, 577, 4),
    (DecompositionTag::Compat, 581, 4), (DecompositionTag::Compat, 585, 4), (DecompositionTag::Compat, 589, 4), (DecompositionTag::Compat, 593, 4),
    (DecompositionTag::Compat, 597, 4), (DecompositionTag::Compat, 601, 4), (DecompositionTag::Compat, 605, 4), (DecompositionTag::Compat, 609, 4),
    (DecompositionTag::Compat, 613, 2), (DecompositionTag::Compat, 615, 2), (DecompositionTag::Compat, 617, 2), (DecompositionTag::Compat, 619, 2),
    (DecompositionTag::Compat, 621, 2), (DecompositionTag::Compat, 623, 2), (DecompositionTag::Compat, 625, 2), (DecompositionTag::Compat, 627, 2),
    (DecompositionTag::Compat, 629, 2), (DecompositionTag::Compat, 631, 3), (DecompositionTag::Compat, 634, 3), (DecompositionTag::Compat, 637, 3),
    (DecompositionTag::Compat, 640, 3), (DecompositionTag::Compat, 643, 3), (DecompositionTag::Compat, 646, 3), (DecompositionTag::Compat, 649, 3),
    (DecompositionTag::Compat, 652, 3), (DecompositionTag::Compat, 655, 3), (DecompositionTag::Compat, 658, 3), (DecompositionTag::Compat, 661, 3),
    (DecompositionTag::Compat, 664, 3), (DecompositionTag::Compat, 667, 3), (DecompositionTag::Compat, 670, 3), (DecompositionTag::Compat, 673, 3),
    (DecompositionTag::Compat, 676, 3), (DecompositionTag::Compat, 679, 3), (DecompositionTag::Compat, 682, 3), (DecompositionTag::Compat, 685, 3),
    (DecompositionTag::Compat, 688, 3), (DecompositionTag::Compat, 691, 3), (DecompositionTag::Compat, 694, 3), (DecompositionTag::Compat, 697, 3),
    (DecompositionTag::Compat, 700, 3), (DecompositionTag::Compat, 703, 3), (DecompositionTag::Compat, 706, 3), (DecompositionTag::Compat, 709, 3),
    (DecompositionTag::Compat, 712, 3), (DecompositionTag::Compat, 715, 3), (DecompositionTag::Compat, 718, 3), (DecompositionTag::Compat, 721, 3),
    (DecompositionTag::Compat, 724, 3), (DecompositionTag::Compat, 727, 3), (DecompositionTag::Compat, 730, 3), (DecompositionTag::Compat, 733, 3),
    (DecompositionTag::Compat, 736, 3), (DecompositionTag::Compat, 739, 3), (DecompositionTag::Circle, 742, 1), (DecompositionTag::Circle, 743, 1),
    (DecompositionTag::Circle, 744, 1), (DecompositionTag::Circle, 745, 1), (DecompositionTag::Circle, 746, 1), (DecompositionTag::Circle, 747, 1),
    (DecompositionTag::Circle, 748, 1), (DecompositionTag::Circle, 749, 1), (DecompositionTag::Circle, 750, 1), (DecompositionTag::Circle, 751, 1),
    (DecompositionTag::Circle, 752, 1), (DecompositionTag::Circle, 753, 1), (DecompositionTag::Circle, 754, 1), (DecompositionTag::Circle, 755, 1),
    (DecompositionTag::Circle, 756, 1), (DecompositionTag::Circle, 757, 1), (DecompositionTag::Circle, 758, 1), (DecompositionTag::Circle, 759, 1),
    (DecompositionTag::Circle, 760, 1), (DecompositionTag::Circle, 761, 1), (DecompositionTag::Circle, 762, 1), (DecompositionTag::Circle, 763, 1),
    (DecompositionTag::Circle, 764, 1), (DecompositionTag::Circle, 765, 1), (DecompositionTag::Circle, 766, 1), (DecompositionTag::Circle, 767, 1),
    (DecompositionTag::Circle, 768, 1), (DecompositionTag::Circle, 769, 1), (DecompositionTag::Circle, 770, 1), (DecompositionTag::Circle, 771, 1),
    (DecompositionTag::Circle, 772, 1), (DecompositionTag::Circle, 773, 1), (DecompositionTag::Circle, 774, 1), (DecompositionTag::Circle, 775, 1),
    (DecompositionTag::Circle, 776, 1), (DecompositionTag::Circle, 777, 1), (DecompositionTag::Circle, 778, 1), (DecompositionTag::Circle, 779, 1),
    (DecompositionTag::Circle, 780, 1), (DecompositionTag::Circle, 781, 1), (DecompositionTag::Circle, 782, 1), (DecompositionTag::Circle, 783, 1),
    (DecompositionTag::Circle, 784, 1), (DecompositionTag::Circle, 785, 1), (DecompositionTag::Circle, 786, 1), (DecompositionTag::Circle, 787, 1),
    (DecompositionTag::Circle, 788, 1), (DecompositionTag::Circle, 789, 1), (DecompositionTag::Circle, 790, 1), (DecompositionTag::Circle, 791, 1),
    (DecompositionTag::Circle, 792, 1), (DecompositionTag::Circle, 793, 1), (DecompositionTag::Circle, 794, 1), (DecompositionTag::Compat, 795, 4),
    (DecompositionTag::Compat, 799, 3), (DecompositionTag::Compat, 802, 2), (DecompositionTag::Compat, 804, 3), (DecompositionTag::Sub, 807, 1),
    (DecompositionTag::Super, 808, 1), (DecompositionTag::Super, 809, 1), (DecompositionTag::Compat, 810, 1), (DecompositionTag::Compat, 811, 1),
    (DecompositionTag::Compat, 812, 1), (DecompositionTag::Compat, 813, 1), (DecompositionTag::Compat, 814, 1), (DecompositionTag::Compat, 815, 1),
    (DecompositionTag::Compat, 816, 1), (DecompositionTag::Compat, 817, 1), (DecompositionTag::Compat, 818, 1), (DecompositionTag::Compat, 819, 1),
    (DecompositionTag::Compat, 820, 1), (DecompositionTag::Compat, 821, 1), (DecompositionTag::Compat, 822, 1), (DecompositionTag::Compat, 823, 1),
    (DecompositionTag::Compat, 824, 1), (DecompositionTag::Compat, 825, 1), (DecompositionTag::Compat, 826, 1), (DecompositionTag::Compat, 827, 1),
    (DecompositionTag::Compat, 828, 1), (DecompositionTag::Compat, 829, 1), (DecompositionTag::Compat, 830, 1), (DecompositionTag::Compat, 831, 1),
    (DecompositionTag::Compat, 832, 1), (DecompositionTag::Compat, 833, 1), (DecompositionTag::Compat, 834, 1), (DecompositionTag::Compat, 835, 1),
    (DecompositionTag::Compat, 836, 1), (DecompositionTag::Compat, 837, 1), (DecompositionTag::Compat, 838, 1), (DecompositionTag::Compat, 839, 1),
    (DecompositionTag::Compat, 840, 1), (DecompositionTag::Compat, 841, 1), (DecompositionTag::Compat, 842, 1), (DecompositionTag::Compat, 843, 1),
    (DecompositionTag::Compat, 844, 1), (DecompositionTag::Compat, 845, 1), (DecompositionTag::Compat, 846, 1), (DecompositionTag::Compat, 847, 1),
    (DecompositionTag::Compat, 848, 1), (DecompositionTag::Compat, 849, 1), (DecompositionTag::Compat, 850, 1), (DecompositionTag::Compat, 851, 1),
    (DecompositionTag::Compat, 852, 1), (DecompositionTag::Compat, 853, 1), (DecompositionTag::Compat, 854, 1), (DecompositionTag::Compat, 855, 1),
    (DecompositionTag::Compat, 856, 1), (DecompositionTag::Compat, 857, 1), (DecompositionTag::Compat, 858, 1), (DecompositionTag::Compat, 859, 1),
    (DecompositionTag::Compat, 860, 1), (DecompositionTag::Compat, 861, 1), (DecompositionTag::Compat, 862, 1), (DecompositionTag::Compat, 863, 1),
    (DecompositionTag::Compat, 864, 1), (DecompositionTag::Compat, 865, 1), (DecompositionTag::Compat, 866, 1), (DecompositionTag::Compat, 867, 1),
    (DecompositionTag::Compat, 868, 1), (DecompositionTag::Compat, 869, 1), (DecompositionTag::Compat, 870, 1), (DecompositionTag::Compat, 871, 1),
    (DecompositionTag::Compat, 872, 1), (DecompositionTag::Compat, 873, 1), (DecompositionTag::Compat, 874, 1), (DecompositionTag::Compat, 875, 1),
    (DecompositionTag::Compat, 876, 1), (DecompositionTag::Compat, 877, 1), (DecompositionTag::Compat, 878, 1), (DecompositionTag::Compat, 879, 1),
    (DecompositionTag::Compat, 880, 1), (DecompositionTag::Compat, 881, 1), (DecompositionTag::Compat, 882, 1), (DecompositionTag::Compat, 883, 1),
    (DecompositionTag::Compat, 884, 1), (DecompositionTag::Compat, 885, 1), (DecompositionTag::Compat, 886, 1), (DecompositionTag::Compat, 887, 1),
    (DecompositionTag::Compat, 888, 1), (DecompositionTag::Compat, 889, 1), (DecompositionTag::Compat, 890, 1), (DecompositionTag::Compat, 891, 1),
    (DecompositionTag::Compat, 892, 1), (DecompositionTag::Compat, 893, 1), (DecompositionTag::Compat, 894, 1), (DecompositionTag::Compat, 895, 1),
    (DecompositionTag::Compat, 896, 1), (DecompositionTag::Compat, 897, 1), (DecompositionTag::Compat, 898, 1), (DecompositionTag::Compat, 899, 1),
    (DecompositionTag::Compat, 900, 1), (DecompositionTag::Compat, 901, 1), (DecompositionTag::Compat, 902, 1), (DecompositionTag::Compat, 903, 1),
    (DecompositionTag::Compat, 904, 1), (DecompositionTag::Compat, 905, 1), (DecompositionTag::Compat, 906, 1), (DecompositionTag::Compat, 907, 1),
    (DecompositionTag::Compat, 908, 1), (DecompositionTag::Compat, 909, 1), (DecompositionTag::Compat, 910, 1), (DecompositionTag::Compat, 911, 1),
    (DecompositionTag::Compat, 912, 1), (DecompositionTag::Compat, 913, 1), (DecompositionTag::Compat, 914, 1), (DecompositionTag::Compat, 915, 1),
    (DecompositionTag::Compat, 916, 1), (DecompositionTag::Compat, 917, 1), (DecompositionTag::Compat, 918, 1), (DecompositionTag::Compat, 919, 1),
    (DecompositionTag::Compat, 920, 1), (DecompositionTag::Compat, 921, 1), (DecompositionTag::Compat, 922, 1), (DecompositionTag::Compat, 923, 1),
    (DecompositionTag::Compat, 924, 1), (DecompositionTag::Compat, 925, 1), (DecompositionTag::Compat, 926, 1), (DecompositionTag::Compat, 927, 1),
    (DecompositionTag::Compat, 928, 1), (DecompositionTag::Compat, 929, 1), (DecompositionTag::Compat, 930, 1), (DecompositionTag::Compat, 931, 1),
    (DecompositionTag::Compat, 932, 1), (DecompositionTag::Compat, 933, 1), (DecompositionTag::Compat, 934, 1), (DecompositionTag::Compat, 935, 1),
    (DecompositionTag::Compat, 936, 1), (DecompositionTag::Compat, 937, 1), (DecompositionTag::Compat, 938, 1), (DecompositionTag::Compat, 939, 1),
    (DecompositionTag::Compat, 940, 1), (DecompositionTag::Compat, 941, 1), (DecompositionTag::Compat, 942, 1), (DecompositionTag::Compat, 943, 1),
    (DecompositionTag::Compat, 944, 1), (DecompositionTag::Compat, 945, 1), (DecompositionTag::Compat, 946, 1), (DecompositionTag::Compat, 947, 1),
    (DecompositionTag::Compat, 948, 1), (DecompositionTag::Compat, 949, 1), (DecompositionTag::Compat, 950, 1), (DecompositionTag::Compat, 951, 1),
    (DecompositionTag::Compat, 952, 1), (DecompositionTag::Compat, 953, 1), (DecompositionTag::Compat, 954, 1), (DecompositionTag::Compat, 955, 1),
    (DecompositionTag::Compat, 956, 1), (DecompositionTag::Compat, 957, 1), (DecompositionTag::Compat, 958, 1), (DecompositionTag::Compat, 959, 1),
    (DecompositionTag::Compat, 960, 1), (DecompositionTag::Compat, 961, 1), (DecompositionTag::Compat, 962, 1), (DecompositionTag::Compat, 963, 1),
    (DecompositionTag::Compat, 964, 1), (DecompositionTag::Compat, 965, 1), (DecompositionTag::Compat, 966, 1), (DecompositionTag::Compat, 967, 1),
    (DecompositionTag::Compat, 968, 1), (DecompositionTag::Compat, 969, 1), (DecompositionTag::Compat, 970, 1), (DecompositionTag::Compat, 971, 1),
    (DecompositionTag::Compat, 972, 1), (DecompositionTag::Compat, 973, 1), (DecompositionTag::Compat, 974, 1), (DecompositionTag::Compat, 975, 1),
    (DecompositionTag::Compat, 976, 1), (DecompositionTag::Compat, 977, 1), (DecompositionTag::Compat, 978, 1), (DecompositionTag::Compat, 979, 1),
    (DecompositionTag::Compat, 980, 1), (DecompositionTag::Compat, 981, 1), (DecompositionTag::Compat, 982, 1), (DecompositionTag::Compat, 983, 1),
    (DecompositionTag::Compat, 984, 1), (DecompositionTag::Compat, 985, 1), (DecompositionTag::Compat, 986, 1), (DecompositionTag::Compat, 987, 1),
    (DecompositionTag::Compat, 988, 1), (DecompositionTag::Compat, 989, 1), (DecompositionTag::Compat, 990, 1), (DecompositionTag::Compat, 991, 1),
    (DecompositionTag::Compat, 992, 1), (DecompositionTag::Compat, 993, 1), (DecompositionTag::Compat, 994, 1), (DecompositionTag::Compat, 995, 1),
    (DecompositionTag::Compat, 996, 1), (DecompositionTag::Compat, 997, 1), (DecompositionTag::Compat, 998, 1), (DecompositionTag::Compat, 999, 1),
    (DecompositionTag::Compat, 1000, 1), (DecompositionTag::Compat, 1001, 1), (DecompositionTag::Compat, 1002, 1), (DecompositionTag::Compat, 1003, 1),
    (DecompositionTag::Compat, 1004, 1), (DecompositionTag::Compat, 1005, 1), (DecompositionTag::Compat, 1006, 1), (DecompositionTag::Compat, 1007, 1),
    (DecompositionTag::Compat, 1008, 1), (DecompositionTag::Compat, 1009, 1), (DecompositionTag::Compat, 1010, 1), (DecompositionTag::Compat, 1011, 1),
    (DecompositionTag::Compat, 1012, 1), (DecompositionTag::Compat, 1013, 1), (DecompositionTag::Compat, 1014, 1), (DecompositionTag::Compat, 1015, 1),
    (DecompositionTag::Compat, 1016, 1), (DecompositionTag::Compat, 1017, 1), (DecompositionTag::Compat, 1018, 1), (DecompositionTag::Compat, 1019, 1),
    (DecompositionTag::Compat, 1020, 1), (DecompositionTag::Compat, 1021, 1), (DecompositionTag::Compat, 1022, 1), (DecompositionTag::Compat, 1023, 1),
    (DecompositionTag::Compat, 1024, 1), (DecompositionTag::Compat, 1025, 1), (DecompositionTag::Wide, 1026, 1), (DecompositionTag::Compat, 1027, 1),
    (DecompositionTag::Compat, 1028, 1), (DecompositionTag::Compat, 1029, 1), (DecompositionTag::Compat, 1030, 1), (DecompositionTag::Compat, 1031, 2),
    (DecompositionTag::Compat, 1033, 2), (DecompositionTag::Vertical, 1035, 2), (DecompositionTag::Vertical, 1037, 2), (DecompositionTag::Compat, 1039, 1),
    (DecompositionTag::Compat, 1040, 1), (DecompositionTag::Compat, 1041, 1), (DecompositionTag::Compat, 1042, 1), (DecompositionTag::Compat, 1043, 1),
    (DecompositionTag::Compat, 1044, 1), (DecompositionTag::Compat, 1045, 1), (DecompositionTag::Compat, 1046, 1), (DecompositionTag::Compat, 1047, 1),
    (DecompositionTag::Compat, 1048, 1), (DecompositionTag::Compat, 1049, 1), (DecompositionTag::Compat, 1050, 1), (DecompositionTag::Compat, 1051, 1),
    (DecompositionTag::Compat, 1052, 1), (DecompositionTag::Compat, 1053, 1), (DecompositionTag::Compat, 1054, 1), (DecompositionTag::Compat, 1055, 1),
    (DecompositionTag::Compat, 1056, 1), (DecompositionTag::Compat, 1057, 1), (DecompositionTag::Compat, 1058, 1), (DecompositionTag::Compat, 1059, 1),
    (DecompositionTag::Compat, 1060, 1), (DecompositionTag::Compat, 1061, 1), (DecompositionTag::Compat, 1062, 1), (DecompositionTag::Compat, 1063, 1),
    (DecompositionTag::Compat, 1064, 1), (DecompositionTag::Compat, 1065, 1), (DecompositionTag::Compat, 1066, 1), (DecompositionTag::Compat, 1067, 1),
    (DecompositionTag::Compat, 1068, 1), (DecompositionTag::Compat, 1069, 1), (DecompositionTag::Compat, 1070, 1), (DecompositionTag::Compat, 1071, 1),
    (DecompositionTag::Compat, 1072, 1), (DecompositionTag::Compat, 1073, 1), (DecompositionTag::Compat, 1074, 1), (DecompositionTag::Compat, 1075, 1),
    (DecompositionTag::Compat, 1076, 1), (DecompositionTag::Compat, 1077, 1), (DecompositionTag::Compat, 1078, 1), (DecompositionTag::Compat, 1079, 1),
    (DecompositionTag::Compat, 1080, 1), (DecompositionTag::Compat, 1081, 1), (DecompositionTag::Compat, 1082, 1), (DecompositionTag::Compat, 1083, 1),
    (DecompositionTag::Compat, 1084, 1), (DecompositionTag::Compat, 1085, 1), (DecompositionTag::Compat, 1086, 1), (DecompositionTag::Compat, 1087, 1),
    (DecompositionTag::Compat, 1088, 1), (DecompositionTag::Compat, 1089, 1), (DecompositionTag::Compat, 1090, 1), (DecompositionTag::Compat, 1091, 1),
    (DecompositionTag::Compat, 1092, 1), (DecompositionTag::Compat, 1093, 1), (DecompositionTag::Compat, 1094, 1), (DecompositionTag::Compat, 1095, 1),
    (DecompositionTag::Compat, 1096, 1), (DecompositionTag::Compat, 1097, 1), (DecompositionTag::Compat, 1098, 1), (DecompositionTag::Compat, 1099, 1),
    (DecompositionTag::Compat, 1100, 1), (DecompositionTag::Compat, 1101, 1), (DecompositionTag::Compat, 1102, 1), (DecompositionTag::Compat, 1103, 1),
    (DecompositionTag::Compat, 1104, 1), (DecompositionTag::Compat, 1105, 1), (DecompositionTag::Compat, 1106, 1), (DecompositionTag::Compat, 1107, 1),
    (DecompositionTag::Compat, 1108, 1), (DecompositionTag::Compat, 1109, 1), (DecompositionTag::Compat, 1110, 1), (DecompositionTag::Compat, 1111, 1),
    (DecompositionTag::Compat, 1112, 1), (DecompositionTag::Compat, 1113, 1), (DecompositionTag::Compat, 1114, 1), (DecompositionTag::Compat, 1115, 1),
    (DecompositionTag::Compat, 1116, 1), (DecompositionTag::Compat, 1117, 1), (DecompositionTag::Compat, 1118, 1), (DecompositionTag::Compat, 1119, 1),
    (DecompositionTag::Compat, 1120, 1), (DecompositionTag::Compat, 1121, 1), (DecompositionTag::Compat, 1122, 1), (DecompositionTag::Compat, 1123, 1),
    (DecompositionTag::Compat, 1124, 1), (DecompositionTag::Compat, 1125, 1), (DecompositionTag::Compat, 1126, 1), (DecompositionTag::Compat, 1127, 1),
    (DecompositionTag::Compat, 1128, 1), (DecompositionTag::Compat, 1129, 1), (DecompositionTag::Compat, 1130, 1), (DecompositionTag::Compat, 1131, 1),
    (DecompositionTag::Compat, 1132, 1), (DecompositionTag::Super, 1133, 1), (DecompositionTag::Super, 1134, 1), (DecompositionTag::Super, 1135, 1),
    (DecompositionTag::Super, 1136, 1), (DecompositionTag::Super, 1137, 1), (DecompositionTag::Super, 1138, 1), (DecompositionTag::Super, 1139, 1),
    (DecompositionTag::Super, 1140, 1), (DecompositionTag::Super, 1141, 1), (DecompositionTag::Super, 1142, 1), (DecompositionTag::Super, 1143, 1),
    (DecompositionTag::Super, 1144, 1), (DecompositionTag::Super, 1145, 1), (DecompositionTag::Super, 1146, 1), (DecompositionTag::Compat, 1147, 3),
    (DecompositionTag::Compat, 1150, 3), (DecompositionTag::Compat, 1153, 3), (DecompositionTag::Compat, 1156, 3), (DecompositionTag::Compat, 1159, 3),
    (DecompositionTag::Compat, 1162, 3), (DecompositionTag::Compat, 1165, 3), (DecompositionTag::Compat, 1168, 3), (DecompositionTag::Compat, 1171, 3),
    (DecompositionTag::Compat, 1174, 3), (DecompositionTag::Compat, 1177, 3), (DecompositionTag::Compat, 1180, 3), (DecompositionTag::Compat, 1183, 3),
    (DecompositionTag::Compat, 1186, 3), (DecompositionTag::Compat, 1189, 4), (DecompositionTag::Compat, 1193, 4), (DecompositionTag::Compat, 1197, 4),
    (DecompositionTag::Compat, 1201, 4), (DecompositionTag::Compat, 1205, 4), (DecompositionTag::Compat, 1209, 4), (DecompositionTag::Compat, 1213, 4),
    (DecompositionTag::Compat, 1217, 4), (DecompositionTag::Compat, 1221, 4), (DecompositionTag::Compat, 1225, 4), (DecompositionTag::Compat, 1229, 4),
    (DecompositionTag::Compat, 1233, 4), (DecompositionTag::Compat, 1237, 4), (DecompositionTag::Compat, 1241, 4), (DecompositionTag::Compat, 1245, 4),
    (DecompositionTag::Compat, 1249, 7), (DecompositionTag::Compat, 1256, 6), (DecompositionTag::Compat, 1262, 3), (DecompositionTag::Compat, 1265, 3),
    (DecompositionTag::Compat, 1268, 3), (DecompositionTag::Compat, 1271, 3), (DecompositionTag::Compat, 1274, 3), (DecompositionTag::Compat, 1277, 3),
    (DecompositionTag::Compat, 1280, 3), (DecompositionTag::Compat, 1283, 3), (DecompositionTag::Compat, 1286, 3), (DecompositionTag::Compat, 1289, 3),
    (DecompositionTag::Compat, 1292, 3), (DecompositionTag::Compat, 1295, 3), (DecompositionTag::Compat, 1298, 3), (DecompositionTag::Compat, 1301, 3),
    (DecompositionTag::Compat, 1304, 3), (DecompositionTag::Compat, 1307, 3), (DecompositionTag::Compat, 1310, 3), (DecompositionTag::Compat, 1313, 3),
    (DecompositionTag::Compat, 1316, 3), (DecompositionTag::Compat, 1319, 3), (DecompositionTag::Compat, 1322, 3), (DecompositionTag::Compat, 1325, 3),
    (DecompositionTag::Compat, 1328, 3), (DecompositionTag::Compat, 1331, 3), (DecompositionTag::Compat, 1334, 3), (DecompositionTag::Compat, 1337, 3),
    (DecompositionTag::Compat, 1340, 3), (DecompositionTag::Compat, 1343, 3), (DecompositionTag::Compat, 1346, 3), (DecompositionTag::Compat, 1349, 3),
    (DecompositionTag::Compat, 1352, 3), (DecompositionTag::Compat, 1355, 3), (DecompositionTag::Compat, 1358, 3), (DecompositionTag::Compat, 1361, 3),
    (DecompositionTag::Compat, 1364, 3), (DecompositionTag::Compat, 1367, 3), (DecompositionTag::Circle, 1370, 1), (DecompositionTag::Circle, 1371, 1),
    (DecompositionTag::Circle, 1372, 1), (DecompositionTag::Circle, 1373, 1), (DecompositionTag::Square, 1374, 3), (DecompositionTag::Circle, 1377, 2),
    (DecompositionTag::Circle, 1379, 2), (DecompositionTag::Circle, 1381, 2), (DecompositionTag::Circle, 1383, 2), (DecompositionTag::Circle, 1385, 2),
    (DecompositionTag::Circle, 1387, 2), (DecompositionTag::Circle, 1389, 2), (DecompositionTag::Circle, 1391, 2), (DecompositionTag::Circle, 1393, 2),
    (DecompositionTag::Circle, 1395, 2), (DecompositionTag::Circle, 1397, 2), (DecompositionTag::Circle, 1399, 2), (DecompositionTag::Circle, 1401, 2),
    (DecompositionTag::Circle, 1403, 2), (DecompositionTag::Circle, 1405, 2), (DecompositionTag::Circle, 1407, 1), (DecompositionTag::Circle, 1408, 1),
    (DecompositionTag::Circle, 1409, 1), (DecompositionTag::Circle, 1410, 1), (DecompositionTag::Circle, 1411, 1), (DecompositionTag::Circle, 1412, 1),
    (DecompositionTag::Circle, 1413, 1), (DecompositionTag::Circle, 1414, 1), (DecompositionTag::Circle, 1415, 1), (DecompositionTag::Circle, 1416, 1),
    (DecompositionTag::Circle, 1417, 1), (DecompositionTag::Circle, 1418, 1), (DecompositionTag::Circle, 1419, 1), (DecompositionTag::Circle, 1420, 1),
    (DecompositionTag::Circle, 1421, 2), (DecompositionTag::Circle, 1423, 2), (DecompositionTag::Circle, 1425, 2), (DecompositionTag::Circle, 1427, 2),
    (DecompositionTag::Circle, 1429, 2), (DecompositionTag::Circle, 1431, 2), (DecompositionTag::Circle, 1433, 2), (DecompositionTag::Circle, 1435, 2),
    (DecompositionTag::Circle, 1437, 2), (DecompositionTag::Circle, 1439, 2), (DecompositionTag::Circle, 1441, 2), (DecompositionTag::Circle, 1443, 2),
    (DecompositionTag::Circle, 1445, 2), (DecompositionTag::Circle, 1447, 2), (DecompositionTag::Circle, 1449, 5), (DecompositionTag::Circle, 1454, 4),
    (DecompositionTag::Circle, 1458, 2), (DecompositionTag::Circle, 1460, 1), (DecompositionTag::Circle, 1461, 1), (DecompositionTag::Circle, 1462, 1),
    (DecompositionTag::Circle, 1463, 1), (DecompositionTag::Circle, 1464, 1), (DecompositionTag::Circle, 1465, 1), (DecompositionTag::Circle, 1466, 1),
    (DecompositionTag::Circle, 1467, 1), (DecompositionTag::Circle, 1468, 1), (DecompositionTag::Circle, 1469, 1), (DecompositionTag::Circle, 1470, 1),
    (DecompositionTag::Circle, 1471, 1), (DecompositionTag::Circle, 1472, 1), (DecompositionTag::Circle, 1473, 1), (DecompositionTag::Circle, 1474, 1),
    (DecompositionTag::Circle, 1475, 1), (DecompositionTag::Circle, 1476, 1), (DecompositionTag::Circle, 1477, 1), (DecompositionTag::Circle, 1478, 1),
    (DecompositionTag::Circle, 1479, 1), (DecompositionTag::Circle, 1480, 1), (DecompositionTag::Circle, 1481, 1), (DecompositionTag::Circle, 1482, 1),
    (DecompositionTag::Circle, 1483, 1), (DecompositionTag::Circle, 1484, 1), (DecompositionTag::Circle, 1485, 1), (DecompositionTag::Circle, 1486, 1),
    (DecompositionTag::Circle, 1487, 1), (DecompositionTag::Circle, 1488, 1), (DecompositionTag::Circle, 1489, 1), (DecompositionTag::Circle, 1490, 1),
    (DecompositionTag::Circle, 1491, 1), (DecompositionTag::Circle, 1492, 1), (DecompositionTag::Circle, 1493, 1), (DecompositionTag::Circle, 1494, 1),
    (DecompositionTag::Circle, 1495, 1), (DecompositionTag::Circle, 1496, 1), (DecompositionTag::Circle, 1497, 1), (DecompositionTag::Circle, 1498, 1),
    (DecompositionTag::Circle, 1499, 1), (DecompositionTag::Circle, 1500, 1), (DecompositionTag::Circle, 1501, 1), (DecompositionTag::Circle, 1502, 1),
    (DecompositionTag::Circle, 1503, 1), (DecompositionTag::Circle, 1504, 1), (DecompositionTag::Circle, 1505, 1), (DecompositionTag::Circle, 1506, 1),
    (DecompositionTag::Circle, 1507, 1), (DecompositionTag::Circle, 1508, 1), (DecompositionTag::Circle, 1509, 2), (DecompositionTag::Circle, 1511, 2),
    (DecompositionTag::Circle, 1513, 2), (DecompositionTag::Circle, 1515, 2), (DecompositionTag::Circle, 1517, 2), (DecompositionTag::Circle, 1519, 2),
    (DecompositionTag::Circle, 1521, 2), (DecompositionTag::Circle, 1523, 2), (DecompositionTag::Circle, 1525, 2), (DecompositionTag::Circle, 1527, 2),
    (DecompositionTag::Circle, 1529, 2), (DecompositionTag::Circle, 1531, 2), (DecompositionTag::Circle, 1533, 2), (DecompositionTag::Circle, 1535, 2),
    (DecompositionTag::Circle, 1537, 2), (DecompositionTag::Compat, 1539, 2), (DecompositionTag::Compat, 1541, 2), (DecompositionTag::Compat, 1543, 2),
    (DecompositionTag::Compat, 1545, 2), (DecompositionTag::Compat, 1547, 2), (DecompositionTag::Compat, 1549, 2), (DecompositionTag::Compat, 1551, 2),
    (DecompositionTag::Compat, 1553, 2), (DecompositionTag::Compat, 1555, 2), (DecompositionTag::Compat, 1557, 3), (DecompositionTag::Compat, 1560, 3),
    (DecompositionTag::Compat, 1563, 3), (DecompositionTag::Square, 1566, 2), (DecompositionTag::Square, 1568, 3), (DecompositionTag::Square, 1571, 2),
    (DecompositionTag::Square, 1573, 3), (DecompositionTag::Circle, 1576, 1), (DecompositionTag::Circle, 1577, 1), (DecompositionTag::Circle, 1578, 1),
    (DecompositionTag::Circle, 1579, 1), (DecompositionTag::Circle, 1580, 1), (DecompositionTag::Circle, 1581, 1), (DecompositionTag::Circle, 1582, 1),
    (DecompositionTag::Circle, 1583, 1), (DecompositionTag::Circle, 1584, 1), (DecompositionTag::Circle, 1585, 1), (DecompositionTag::Circle, 1586, 1),
    (DecompositionTag::Circle, 1587, 1), (DecompositionTag::Circle, 1588, 1), (DecompositionTag::Circle, 1589, 1), (DecompositionTag::Circle, 1590, 1),
    (DecompositionTag::Circle, 1591, 1), (DecompositionTag::Circle, 1592, 1), (DecompositionTag::Circle, 1593, 1), (DecompositionTag::Circle, 1594, 1),
    (DecompositionTag::Circle, 1595, 1), (DecompositionTag::Circle, 1596, 1), (DecompositionTag::Circle, 1597, 1), (DecompositionTag::Circle, 1598, 1),
    (DecompositionTag::Circle, 1599, 1), (DecompositionTag::Circle, 1600, 1), (DecompositionTag::Circle, 1601, 1), (DecompositionTag::Circle, 1602, 1),
    (DecompositionTag::Circle, 1603, 1), (DecompositionTag::Circle, 1604, 1), (DecompositionTag::Circle, 1605, 1), (DecompositionTag::Circle, 1606, 1),
    (DecompositionTag::Circle, 1607, 1), (DecompositionTag::Circle, 1608, 1), (DecompositionTag::Circle, 1609, 1), (DecompositionTag::Circle, 1610, 1),
    (DecompositionTag::Circle, 1611, 1), (DecompositionTag::Circle, 1612, 1), (DecompositionTag::Circle, 1613, 1), (DecompositionTag::Circle, 1614, 1),
    (DecompositionTag::Circle, 1615, 1), (DecompositionTag::Circle, 1616, 1), (DecompositionTag::Circle, 1617, 1), (DecompositionTag::Circle, 1618, 1),
    (DecompositionTag::Circle, 1619, 1), (DecompositionTag::Circle, 1620, 1), (DecompositionTag::Circle, 1621, 1), (DecompositionTag::Circle, 1622, 1),
    (DecompositionTag::Square, 1623, 2), (DecompositionTag::Square, 1625, 4), (DecompositionTag::Square, 1629, 4), (DecompositionTag::Square, 1633, 4),
    (DecompositionTag::Square, 1637, 3), (DecompositionTag::Square, 1640, 4), (DecompositionTag::Square, 1644, 3), (DecompositionTag::Square, 1647, 3),
    (DecompositionTag::Square, 1650, 5), (DecompositionTag::Square, 1655, 4), (DecompositionTag::Square, 1659, 3), (DecompositionTag::Square, 1662, 3),
    (DecompositionTag::Square, 1665, 3), (DecompositionTag::Square, 1668, 4), (DecompositionTag::Square, 1672, 4), (DecompositionTag::Square, 1676, 3),
    (DecompositionTag::Square, 1679, 3), (DecompositionTag::Square, 1682, 2), (DecompositionTag::Square, 1684, 3), (DecompositionTag::Square, 1687, 4),
    (DecompositionTag::Square, 1691, 4), (DecompositionTag::Square, 1695, 2), (DecompositionTag::Square, 1697, 5), (DecompositionTag::Square, 1702, 6),
    (DecompositionTag::Square, 1708, 5), (DecompositionTag::Square, 1713, 3), (DecompositionTag::Square, 1716, 5), (DecompositionTag::Square, 1721, 5),
    (DecompositionTag::Square, 1726, 4), (DecompositionTag::Square, 1730, 3), (DecompositionTag::Square, 1733, 3), (DecompositionTag::Square, 1736, 3),
    (DecompositionTag::Square, 1739, 4), (DecompositionTag::Square, 1743, 5), (DecompositionTag::Square, 1748, 4), (DecompositionTag::Square, 1752, 3),
    (DecompositionTag::Square, 1755, 3), (DecompositionTag::Square, 1758, 3), (DecompositionTag::Square, 1761, 2), (DecompositionTag::Square, 1763, 2),
    (DecompositionTag::Square, 1765, 2), (DecompositionTag::Square, 1767, 2), (DecompositionTag::Square, 1769, 3), (DecompositionTag::Square, 1772, 3),
    (DecompositionTag::Square, 1775, 5), (DecompositionTag::Square, 1780, 3), (DecompositionTag::Square, 1783, 4), (DecompositionTag::Square, 1787, 5),
    (DecompositionTag::Square, 1792, 3), (DecompositionTag::Square, 1795, 2), (DecompositionTag::Square, 1797, 2), (DecompositionTag::Square, 1799, 5),
    (DecompositionTag::Square, 1804, 4), (DecompositionTag::Square, 1808, 5), (DecompositionTag::Square, 1813, 3), (DecompositionTag::Square, 1816, 5),
    (DecompositionTag::Square, 1821, 2), (DecompositionTag::Square, 1823, 3), (DecompositionTag::Square, 1826, 3), (DecompositionTag::Square, 1829, 3),
    (DecompositionTag::Square, 1832, 3), (DecompositionTag::Square, 1835, 3), (DecompositionTag::Square, 1838, 4), (DecompositionTag::Square, 1842, 3),
    (DecompositionTag::Square, 1845, 2), (DecompositionTag::Square, 1847, 3), (DecompositionTag::Square, 1850, 3), (DecompositionTag::Square, 1853, 3),
    (DecompositionTag::Square, 1856, 4), (DecompositionTag::Square, 1860, 3), (DecompositionTag::Square, 1863, 3), (DecompositionTag::Square, 1866, 3),
    (DecompositionTag::Square, 1869, 5), (DecompositionTag::Square, 1874, 4), (DecompositionTag::Square, 1878, 2), (DecompositionTag::Square, 1880, 5),
    (DecompositionTag::Square, 1885, 2), (DecompositionTag::Square, 1887, 4), (DecompositionTag::Square, 1891, 4), (DecompositionTag::Square, 1895, 3),
    (DecompositionTag::Square, 1898, 3), (DecompositionTag::Square, 1901, 3), (DecompositionTag::Square, 1904, 4), (DecompositionTag::Square, 1908, 2),
    (DecompositionTag::Square, 1910, 3), (DecompositionTag::Square, 1913, 4), (DecompositionTag::Square, 1917, 2), (DecompositionTag::Square, 1919, 5),
    (DecompositionTag::Square, 1924, 3), (DecompositionTag::Compat, 1927, 2), (DecompositionTag::Compat, 1929, 2), (DecompositionTag::Compat, 1931, 2),
    (DecompositionTag::Compat, 1933, 2), (DecompositionTag::Compat, 1935, 2), (DecompositionTag::Compat, 1937, 2), (DecompositionTag::Compat, 1939, 2),
    (DecompositionTag::Compat, 1941, 2), (DecompositionTag::Compat, 1943, 2), (DecompositionTag::Compat, 1945, 2), (DecompositionTag::Compat, 1947, 3),
    (DecompositionTag::Compat, 1950, 3), (DecompositionTag::Compat, 1953, 3), (DecompositionTag::Compat, 1956, 3), (DecompositionTag::Compat, 1959, 3),
    (DecompositionTag::Compat, 1962, 3), (DecompositionTag::Compat, 1965, 3), (DecompositionTag::Compat, 1968, 3), (DecompositionTag::Compat, 1971, 3),
    (DecompositionTag::Compat, 1974, 3), (DecompositionTag::Compat, 1977, 3), (DecompositionTag::Compat, 1980, 3), (DecompositionTag::Compat, 1983, 3),
    (DecompositionTag::Compat, 1986, 3), (DecompositionTag::Compat, 1989, 3), (DecompositionTag::Square, 1992, 3), (DecompositionTag::Square, 1995, 2),
    (DecompositionTag::Square, 1997, 2), (DecompositionTag::Square, 1999, 3), (DecompositionTag::Square, 2002, 2), (DecompositionTag::Square, 2004, 2),
    (DecompositionTag::Square, 2006, 2), (DecompositionTag::Square, 2008, 3), (DecompositionTag::Square, 2011, 3), (DecompositionTag::Square, 2014, 2),
    (DecompositionTag::Square, 2016, 2), (DecompositionTag::Square, 2018, 2), (DecompositionTag::Square, 2020, 2), (DecompositionTag::Square, 2022, 2),
    (DecompositionTag::Square, 2024, 4), (DecompositionTag::Square, 2028, 2), (DecompositionTag::Square, 2030, 2), (DecompositionTag::Square, 2032, 2),
    (DecompositionTag::Square, 2034, 2), (DecompositionTag::Square, 2036, 2), (DecompositionTag::Square, 2038, 2), (DecompositionTag::Square, 2040, 2),
    (DecompositionTag::Square, 2042, 2), (DecompositionTag::Square, 2044, 3), (DecompositionTag::Square, 2047, 4), (DecompositionTag::Square, 2051, 2),
    (DecompositionTag::Square, 2053, 2), (DecompositionTag::Square, 2055, 2), (DecompositionTag::Square, 2057, 2), (DecompositionTag::Square, 2059, 2),
    (DecompositionTag::Square, 2061, 2), (DecompositionTag::Square, 2063, 2), (DecompositionTag::Square, 2065, 3), (DecompositionTag::Square, 2068, 3),
    (DecompositionTag::Square, 2071, 3), (DecompositionTag::Square, 2074, 3), (DecompositionTag::Square, 2077, 2), (DecompositionTag::Square, 2079, 2),
    (DecompositionTag::Square, 2081, 2), (DecompositionTag::Square, 2083, 2), (DecompositionTag::Square, 2085, 2), (DecompositionTag::Square, 2087, 2),
    (DecompositionTag::Square, 2089, 2), (DecompositionTag::Square, 2091, 2), (DecompositionTag::Square, 2093, 2), (DecompositionTag::Square, 2095, 2),
    (DecompositionTag::Square, 2097, 3), (DecompositionTag::Square, 2100, 3), (DecompositionTag::Square, 2103, 2), (DecompositionTag::Square, 2105, 3),
    (DecompositionTag::Square, 2108, 3), (DecompositionTag::Square, 2111, 3), (DecompositionTag::Square, 2114, 2), (DecompositionTag::Square, 2116, 3),
    (DecompositionTag::Square, 2119, 3), (DecompositionTag::Square, 2122, 4), (DecompositionTag::Square, 2126, 2), (DecompositionTag::Square, 2128, 3),
    (DecompositionTag::Square, 2131, 3), (DecompositionTag::Square, 2134, 3), (DecompositionTag::Square, 2137, 3), (DecompositionTag::Square, 2140, 5),
    (DecompositionTag::Square, 2145, 6), (DecompositionTag::Square, 2151, 2), (DecompositionTag::Square, 2153, 2), (DecompositionTag::Square, 2155, 2),
    (DecompositionTag::Square, 2157, 2), (DecompositionTag::Square, 2159, 2), (DecompositionTag::Square, 2161, 2), (DecompositionTag::Square, 2163, 2),
    (DecompositionTag::Square, 2165, 2), (DecompositionTag::Square, 2167, 2), (DecompositionTag::Square, 2169, 2), (DecompositionTag::Square, 2171, 2),
    (DecompositionTag::Square, 2173, 2), (DecompositionTag::Square, 2175, 2), (DecompositionTag::Square, 2177, 2), (DecompositionTag::Square, 2179, 2),
    (DecompositionTag::Square, 2181, 2), (DecompositionTag::Square, 2183, 2), (DecompositionTag::Square, 2185, 2), (DecompositionTag::Square, 2187, 4),
    (DecompositionTag::Square, 2191, 2), (DecompositionTag::Square, 2193, 2), (DecompositionTag::Square, 2195, 2), (DecompositionTag::Square, 2197, 4),
    (DecompositionTag::Square, 2201, 3), (DecompositionTag::Square, 2204, 2), (DecompositionTag::Square, 2206, 2), (DecompositionTag::Square, 2208, 2),
    (DecompositionTag::Square, 2210, 2), (DecompositionTag::Square, 2212, 2), (DecompositionTag::Square, 2214, 2), (DecompositionTag::Square, 2216, 2),
    (DecompositionTag::Square, 2218, 2), (DecompositionTag::Square, 2220, 2), (DecompositionTag::Square, 2222, 2), (DecompositionTag::Square, 2224, 3),
    (DecompositionTag::Square, 2227, 2), (DecompositionTag::Square, 2229, 2), (DecompositionTag::Square, 2231, 3), (DecompositionTag::Square, 2234, 3),
    (DecompositionTag::Square, 2237, 2), (DecompositionTag::Square, 2239, 4), (DecompositionTag::Square, 2243, 3), (DecompositionTag::Square, 2246, 2),
    (DecompositionTag::Square, 2248, 2), (DecompositionTag::Square, 2250, 2), (DecompositionTag::Square, 2252, 2), (DecompositionTag::Square, 2254, 3),
    (DecompositionTag::Square, 2257, 3), (DecompositionTag::Compat, 2260, 2), (DecompositionTag::Compat, 2262, 2), (DecompositionTag::Compat, 2264, 2),
    (DecompositionTag::Compat, 2266, 2), (DecompositionTag::Compat, 2268, 2), (DecompositionTag::Compat, 2270, 2), (DecompositionTag::Compat, 2272, 2),
    (DecompositionTag::Compat, 2274, 2), (DecompositionTag::Compat, 2276, 2), (DecompositionTag::Compat, 2278, 3), (DecompositionTag::Compat, 2281, 3),
    (DecompositionTag::Compat, 2284, 3), (DecompositionTag::Compat, 2287, 3), (DecompositionTag::Compat, 2290, 3), (DecompositionTag::Compat, 2293, 3),
    (DecompositionTag::Compat, 2296, 3), (DecompositionTag::Compat, 2299, 3), (DecompositionTag::Compat, 2302, 3), (DecompositionTag::Compat, 2305, 3),
    (DecompositionTag::Compat, 2308, 3), (DecompositionTag::Compat, 2311, 3), (DecompositionTag::Compat, 2314, 3), (DecompositionTag::Compat, 2317, 3),
    (DecompositionTag::Compat, 2320, 3), (DecompositionTag::Compat, 2323, 3), (DecompositionTag::Compat, 2326, 3), (DecompositionTag::Compat, 2329, 3),
    (DecompositionTag::Compat, 2332, 3), (DecompositionTag::Compat, 2335, 3), (DecompositionTag::Compat, 2338, 3), (DecompositionTag::Compat, 2341, 3),
    (DecompositionTag::Square, 2344, 3), (DecompositionTag::Super, 2347, 1), (DecompositionTag::Super, 2348, 1), (DecompositionTag::Super, 2349, 1),
    (DecompositionTag::Super, 2350, 1), (DecompositionTag::Super, 2351, 1), (DecompositionTag::Super, 2352, 1), (DecompositionTag::Super, 2353, 1),
    (DecompositionTag::Super, 2354, 1), (DecompositionTag::Super, 2355, 1), (DecompositionTag::Super, 2356, 1), (DecompositionTag::Super, 2357, 1),
    (DecompositionTag::Super, 2358, 1), (DecompositionTag::Super, 2359, 1), (DecompositionTag::Compat, 2360, 2), (DecompositionTag::Compat, 2362, 2),
    (DecompositionTag::Compat, 2364, 2), (DecompositionTag::Compat, 2366, 3), (DecompositionTag::Compat, 2369, 3), (DecompositionTag::Compat, 2372, 2),
    (DecompositionTag::Compat, 2374, 2), (DecompositionTag::Compat, 2376, 2), (DecompositionTag::Compat, 2378, 2), (DecompositionTag::Compat, 2380, 2),
    (DecompositionTag::Compat, 2382, 2), (DecompositionTag::Compat, 2384, 2), (DecompositionTag::Font, 2386, 1), (DecompositionTag::Font, 2387, 1),
    (DecompositionTag::Font, 2388, 1), (DecompositionTag::Font, 2389, 1), (DecompositionTag::Font, 2390, 1), (DecompositionTag::Font, 2391, 1),
    (DecompositionTag::Font, 2392, 1), (DecompositionTag::Font, 2393, 1), (DecompositionTag::Font, 2394, 1), (DecompositionTag::Font, 2395, 1),
    (DecompositionTag::Compat, 2396, 2), (DecompositionTag::Isolated, 2398, 1), (DecompositionTag::Final, 2399, 1), (DecompositionTag::Isolated, 2400, 1),
    (DecompositionTag::Final, 2401, 1), (DecompositionTag::Initial, 2402, 1), (DecompositionTag::Medial, 2403, 1), (DecompositionTag::Isolated, 2404, 1),
    (DecompositionTag::Final, 2405, 1), (DecompositionTag::Initial, 2406, 1), (DecompositionTag::Medial, 2407, 1), (DecompositionTag::Isolated, 2408, 1),
    (DecompositionTag::Final, 2409, 1), (DecompositionTag::Initial, 2410, 1), (DecompositionTag::Medial, 2411, 1), (DecompositionTag::Isolated, 2412, 1),
    (DecompositionTag::Final, 2413, 1), (DecompositionTag::Initial, 2414, 1), (DecompositionTag::Medial, 2415, 1), (DecompositionTag::Isolated, 2416, 1),
    (DecompositionTag::Final, 2417, 1), (DecompositionTag::Initial, 2418, 1), (DecompositionTag::Medial, 2419, 1), (DecompositionTag::Isolated, 2420, 1),
    (DecompositionTag::Final, 2421, 1), (DecompositionTag::Initial, 2422, 1), (DecompositionTag::Medial, 2423, 1), (DecompositionTag::Isolated, 2424, 1),
    (DecompositionTag::Final, 2425, 1), (DecompositionTag::Initial, 2426, 1), (DecompositionTag::Medial, 2427, 1), (DecompositionTag::Isolated, 2428, 1),
    (DecompositionTag::Final, 2429, 1), (DecompositionTag::Initial, 2430, 1), (DecompositionTag::Medial, 2431, 1), (DecompositionTag::Isolated, 2432, 1),
    (DecompositionTag::Final, 2433, 1), (DecompositionTag::Initial, 2434, 1), (DecompositionTag::Medial, 2435, 1), (DecompositionTag::Isolated, 2436, 1),
    (DecompositionTag::Final, 2437, 1), (DecompositionTag::Initial, 2438, 1), (DecompositionTag::Medial, 2439, 1), (DecompositionTag::Isolated, 2440, 1),
    (DecompositionTag::Final, 2441, 1), (DecompositionTag::Initial, 2442, 1), (DecompositionTag::Medial, 2443, 1), (DecompositionTag::Isolated, 2444, 1),
    (DecompositionTag::Final, 2445, 1), (DecompositionTag::Initial, 2446, 1), (DecompositionTag::Medial, 2447, 1), (DecompositionTag::Isolated, 2448, 1),
    (DecompositionTag::Final, 2449, 1), (DecompositionTag::Isolated, 2450, 1), (DecompositionTag::Final, 2451, 1), (DecompositionTag::Isolated, 2452, 1),
    (DecompositionTag::Final, 2453, 1), (DecompositionTag::Isolated, 2454, 1), (DecompositionTag::Final, 2455, 1), (DecompositionTag::Isolated, 2456, 1),
    (DecompositionTag::Final, 2457, 1), (DecompositionTag::Isolated, 2458, 1), (DecompositionTag::Final, 2459, 1), (DecompositionTag::Isolated, 2460, 1),
    (DecompositionTag::Final, 2461, 1), (DecompositionTag::Initial, 2462, 1), (DecompositionTag::Medial, 2463, 1), (DecompositionTag::Isolated, 2464, 1),
    (DecompositionTag::Final, 2465, 1), (DecompositionTag::Initial, 2466, 1), (DecompositionTag::Medial, 2467, 1), (DecompositionTag::Isolated, 2468, 1),
    (DecompositionTag::Final, 2469, 1), (DecompositionTag::Initial, 2470, 1), (DecompositionTag::Medial, 2471, 1), (DecompositionTag::Isolated, 2472, 1),
    (DecompositionTag::Final, 2473, 1), (DecompositionTag::Initial, 2474, 1), (DecompositionTag::Medial, 2475, 1), (DecompositionTag::Isolated, 2476, 1),
    (DecompositionTag::Final, 2477, 1), (DecompositionTag::Isolated, 2478, 1), (DecompositionTag::Final, 2479, 1), (DecompositionTag::Initial, 2480, 1),
    (DecompositionTag::Medial, 2481, 1), (DecompositionTag::Isolated, 2482, 1), (DecompositionTag::Final, 2483, 1), (DecompositionTag::Isolated, 2484, 1),
    (DecompositionTag::Final, 2485, 1), (DecompositionTag::Initial, 2486, 1), (DecompositionTag::Medial, 2487, 1), (DecompositionTag::Isolated, 2488, 1),
    (DecompositionTag::Final, 2489, 1), (DecompositionTag::Initial, 2490, 1), (DecompositionTag::Medial, 2491, 1), (DecompositionTag::Isolated, 2492, 1),
    (DecompositionTag::Final, 2493, 1), (DecompositionTag::Isolated, 2494, 1), (DecompositionTag::Final, 2495, 1), (DecompositionTag::Isolated, 2496, 1),
    (DecompositionTag::Final, 2497, 1), (DecompositionTag::Initial, 2498, 1), (DecompositionTag::Medial, 2499, 1), (DecompositionTag::Isolated, 2500, 1),
    (DecompositionTag::Final, 2501, 1), (DecompositionTag::Isolated, 2502, 1), (DecompositionTag::Final, 2503, 1), (DecompositionTag::Isolated, 2504, 1),
    (DecompositionTag::Final, 2505, 1), (DecompositionTag::Isolated, 2506, 1), (DecompositionTag::Isolated, 2507, 1), (DecompositionTag::Final, 2508, 1),
    (DecompositionTag::Isolated, 2509, 1), (DecompositionTag::Final, 2510, 1), (DecompositionTag::Isolated, 2511, 1), (DecompositionTag::Final, 2512, 1),
    (DecompositionTag::Isolated, 2513, 1), (DecompositionTag::Final, 2514, 1), (DecompositionTag::Initial, 2515, 1), (DecompositionTag::Medial, 2516, 1),
    (DecompositionTag::Initial, 2517, 1), (DecompositionTag::Medial, 2518, 1), (DecompositionTag::Isolated, 2519, 2), (DecompositionTag::Final, 2521, 2),
    (DecompositionTag::Isolated, 2523, 2), (DecompositionTag::Final, 2525, 2), (DecompositionTag::Isolated, 2527, 2), (DecompositionTag::Final, 2529, 2),
    (DecompositionTag::Isolated, 2531, 2), (DecompositionTag::Final, 2533, 2), (DecompositionTag::Isolated, 2535, 2), (DecompositionTag::Final, 2537, 2),
    (DecompositionTag::Isolated, 2539, 2), (DecompositionTag::Final, 2541, 2), (DecompositionTag::Isolated, 2543, 2), (DecompositionTag::Final, 2545, 2),
    (DecompositionTag::Initial, 2547, 2), (DecompositionTag::Isolated, 2549, 2), (DecompositionTag::Final, 2551, 2), (DecompositionTag::Initial, 2553, 2),
    (DecompositionTag::Isolated, 2555, 1), (DecompositionTag::Final, 2556, 1), (DecompositionTag::Initial, 2557, 1), (DecompositionTag::Medial, 2558, 1),
    (DecompositionTag::Isolated, 2559, 2), (DecompositionTag::Isolated, 2561, 2), (DecompositionTag::Isolated, 2563, 2), (DecompositionTag::Isolated, 2565, 2),
    (DecompositionTag::Isolated, 2567, 2), (DecompositionTag::Isolated, 2569, 2), (DecompositionTag::Isolated, 2571, 2), (DecompositionTag::Isolated, 2573, 2),
    (DecompositionTag::Isolated, 2575, 2), (DecompositionTag::Isolated, 2577, 2), (DecompositionTag::Isolated, 2579, 2), (DecompositionTag::Isolated, 2581, 2),
    (DecompositionTag::Isolated, 2583, 2), (DecompositionTag::Isolated, 2585, 2), (DecompositionTag::Isolated, 2587, 2), (DecompositionTag::Isolated, 2589, 2),
    (DecompositionTag::Isolated, 2591, 2), (DecompositionTag::Isolated, 2593, 2), (DecompositionTag::Isolated, 2595, 2), (DecompositionTag::Isolated, 2597, 2),
    (DecompositionTag::Isolated, 2599, 2), (DecompositionTag::Isolated, 2601, 2), (DecompositionTag::Isolated, 2603, 2), (DecompositionTag::Isolated, 2605, 2),
    (DecompositionTag::Isolated, 2607, 2), (DecompositionTag::Isolated, 2609, 2), (DecompositionTag::Isolated, 2611, 2), (DecompositionTag::Isolated, 2613, 2),
    (DecompositionTag::Isolated, 2615, 2), (DecompositionTag::Isolated, 2617, 2), (DecompositionTag::Isolated, 2619, 2), (DecompositionTag::Isolated, 2621, 2),
    (DecompositionTag::Isolated, 2623, 2), (DecompositionTag::Isolated, 2625, 2), (DecompositionTag::Isolated, 2627, 2), (DecompositionTag::Isolated, 2629, 2),
    (DecompositionTag::Isolated, 2631, 2), (DecompositionTag::Isolated, 2633, 2), (DecompositionTag::Isolated, 2635, 2), (DecompositionTag::Isolated, 2637, 2),
    (DecompositionTag::Isolated, 2639, 2), (DecompositionTag::Isolated, 2641, 2), (DecompositionTag::Isolated, 2643, 2), (DecompositionTag::Isolated, 2645, 2),
    (DecompositionTag::Isolated, 2647, 2), (DecompositionTag::Isolated, 2649, 2), (DecompositionTag::Isolated, 2651, 2), (DecompositionTag::Isolated, 2653, 2),
    (DecompositionTag::Isolated, 2655, 2), (DecompositionTag::Isolated, 2657, 2), (DecompositionTag::Isolated, 2659, 2), (DecompositionTag::Isolated, 2661, 2),
    (DecompositionTag::Isolated, 2663, 2), (DecompositionTag::Isolated, 2665, 2), (DecompositionTag::Isolated, 2667, 2), (DecompositionTag::Isolated, 2669, 2),
    (DecompositionTag::Isolated, 2671, 2), (DecompositionTag::Isolated, 2673, 2), (DecompositionTag::Isolated, 2675, 2), (DecompositionTag::Isolated, 2677, 2),
    (DecompositionTag::Isolated, 2679, 2), (DecompositionTag::Isolated, 2681, 2), (DecompositionTag::Isolated, 2683, 2), (DecompositionTag::Isolated, 2685, 2),
    (DecompositionTag::Isolated, 2687, 2), (DecompositionTag::Isolated, 2689, 2), (DecompositionTag::Isolated, 2691, 2), (DecompositionTag::Isolated, 2693, 2),
    (DecompositionTag::Isolated, 2695, 2), (DecompositionTag::Isolated, 2697, 2), (DecompositionTag::Isolated, 2699, 2), (DecompositionTag::Isolated, 2701, 2),
    (DecompositionTag::Isolated, 2703, 2), (DecompositionTag::Isolated, 2705, 2), (DecompositionTag::Isolated, 2707, 2), (DecompositionTag::Isolated, 2709, 2),
    (DecompositionTag::Isolated, 2711, 2), (DecompositionTag::Isolated, 2713, 2), (DecompositionTag::Isolated, 2715, 2), (DecompositionTag::Isolated, 2717, 2),
    (DecompositionTag::Isolated, 2719, 2), (DecompositionTag::Isolated, 2721, 2), (DecompositionTag::Isolated, 2723, 2), (DecompositionTag::Isolated, 2725, 2),
    (DecompositionTag::Isolated, 2727, 2), (DecompositionTag::Isolated, 2729, 2), (DecompositionTag::Isolated, 2731, 2), (DecompositionTag::Isolated, 2733, 2),
    (DecompositionTag::Isolated, 2735, 2), (DecompositionTag::Isolated, 2737, 2), (DecompositionTag::Isolated, 2739, 2), (DecompositionTag::Isolated, 2741, 2),
    (DecompositionTag::Isolated, 2743, 2), (DecompositionTag::Isolated, 2745, 2), (DecompositionTag::Isolated, 2747, 3), (DecompositionTag::Isolated, 2750, 3),
    (DecompositionTag::Isolated, 2753, 3), (DecompositionTag::Isolated, 2756, 3), (DecompositionTag::Isolated, 2759, 3), (DecompositionTag::Isolated, 2762, 3),
    (DecompositionTag::Final, 2765, 2), (DecompositionTag::Final, 2767, 2), (DecompositionTag::Final, 2769, 2), (DecompositionTag::Final, 2771, 2),
    (DecompositionTag::Final, 2773, 2), (DecompositionTag::Final, 2775, 2), (DecompositionTag::Final, 2777, 2), (DecompositionTag::Final, 2779, 2),
    (DecompositionTag::Final, 2781, 2), (DecompositionTag::Final, 2783, 2), (DecompositionTag::Final, 2785, 2), (DecompositionTag::Final, 2787, 2),
    (DecompositionTag::Final, 2789, 2), (DecompositionTag::Final, 2791, 2), (DecompositionTag::Final, 2793, 2), (DecompositionTag::Final, 2795, 2),
    (DecompositionTag::Final, 2797, 2), (DecompositionTag::Final, 2799, 2), (DecompositionTag::Final, 2801, 2), (DecompositionTag::Final, 2803, 2),
    (DecompositionTag::Final, 2805, 2), (DecompositionTag::Final, 2807, 2), (DecompositionTag::Final, 2809, 2), (DecompositionTag::Final, 2811, 2),
    (DecompositionTag::Final, 2813, 2), (DecompositionTag::Final, 2815, 2), (DecompositionTag::Final, 2817, 2), (DecompositionTag::Final, 2819, 2),
    (DecompositionTag::Final, 2821, 2), (DecompositionTag::Final, 2823, 2), (DecompositionTag::Final, 2825, 2), (DecompositionTag::Final, 2827, 2),
    (DecompositionTag::Final, 2829, 2), (DecompositionTag::Final, 2831, 2), (DecompositionTag::Final, 2833, 2), (DecompositionTag::Final, 2835, 2),
    (DecompositionTag::Final, 2837, 2), (DecompositionTag::Final, 2839, 2), (DecompositionTag::Final, 2841, 2), (DecompositionTag::Final, 2843, 2),
    (DecompositionTag::Final, 2845, 2), (DecompositionTag::Final, 2847, 2), (DecompositionTag::Final, 2849, 2), (DecompositionTag::Final, 2851, 2),
    (DecompositionTag::Final, 2853, 2), (DecompositionTag::Final, 2855, 2), (DecompositionTag::Final, 2857, 2), (DecompositionTag::Final, 2859, 2),
    (DecompositionTag::Final, 2861, 2), (DecompositionTag::Final, 2863, 2), (DecompositionTag::Final, 2865, 2), (DecompositionTag::Initial, 2867, 2),
    (DecompositionTag::Initial, 2869, 2), (DecompositionTag::Initial, 2871, 2), (DecompositionTag::Initial, 2873, 2), (DecompositionTag::Initial, 2875, 2),
    (DecompositionTag::Initial, 2877, 2), (DecompositionTag::Initial, 2879, 2), (DecompositionTag::Initial, 2881, 2), (DecompositionTag::Initial, 2883, 2),
    (DecompositionTag::Initial, 2885, 2), (DecompositionTag::Initial, 2887, 2), (DecompositionTag::Initial, 2889, 2), (DecompositionTag::Initial, 2891, 2),
    (DecompositionTag::Initial, 2893, 2), (DecompositionTag::Initial, 2895, 2), (DecompositionTag::Initial, 2897, 2), (DecompositionTag::Initial, 2899, 2),
    (DecompositionTag::Initial, 2901, 2), (DecompositionTag::Initial, 2903, 2), (DecompositionTag::Initial, 2905, 2), (DecompositionTag::Initial, 2907, 2),
    (DecompositionTag::Initial, 2909, 2), (DecompositionTag::Initial, 2911, 2), (DecompositionTag::Initial, 2913, 2), (DecompositionTag::Initial, 2915, 2),
    (DecompositionTag::Initial, 2917, 2), (DecompositionTag::Initial, 2919, 2), (DecompositionTag::Initial, 2921, 2), (DecompositionTag::Initial, 2923, 2),
    (DecompositionTag::Initial, 2925, 2), (DecompositionTag::Initial, 2927, 2), (DecompositionTag::Initial, 2929, 2), (DecompositionTag::Initial, 2931, 2),
    (DecompositionTag::Initial, 2933, 2), (DecompositionTag::Initial, 2935, 2), (DecompositionTag::Initial, 2937, 2), (DecompositionTag::Initial, 2939, 2),
    (DecompositionTag::Initial, 2941, 2), (DecompositionTag::Initial, 2943, 2), (DecompositionTag::Initial, 2945, 2), (DecompositionTag::Initial, 2947, 2),
    (DecompositionTag::Initial, 2949, 2), (DecompositionTag::Initial, 2951, 2), (DecompositionTag::Initial, 2953, 2), (DecompositionTag::Initial, 2955, 2),
    (DecompositionTag::Initial, 2957, 2), (DecompositionTag::Initial, 2959, 2), (DecompositionTag::Initial, 2961, 2), (DecompositionTag::Initial, 2963, 2),
    (DecompositionTag::Initial, 2965, 2), (DecompositionTag::Initial, 2967, 2), (DecompositionTag::Initial, 2969, 2), (DecompositionTag::Initial, 2971, 2),
    (DecompositionTag::Initial, 2973, 2), (DecompositionTag::Initial, 2975, 2), (DecompositionTag::Initial, 2977, 2), (DecompositionTag::Initial, 2979, 2),
    (DecompositionTag::Initial, 2981, 2), (DecompositionTag::Initial, 2983, 2), (DecompositionTag::Initial, 2985, 2), (DecompositionTag::Initial, 2987, 2),
    (DecompositionTag::Initial, 2989, 2), (DecompositionTag::Initial, 2991, 2), (DecompositionTag::Initial, 2993, 2), (DecompositionTag::Initial, 2995, 2),
    (DecompositionTag::Initial, 2997, 2), (DecompositionTag::Initial, 2999, 2), (DecompositionTag::Initial, 3001, 2), (DecompositionTag::Initial, 3003, 2),
    (DecompositionTag::Initial, 3005, 2), (DecompositionTag::Initial, 3007, 2), (DecompositionTag::Initial, 3009, 2), (DecompositionTag::Medial, 3011, 2),
    (DecompositionTag::Medial, 3013, 2), (DecompositionTag::Medial, 3015, 2), (DecompositionTag::Medial, 3017, 2), (DecompositionTag::Medial, 3019, 2),
    (DecompositionTag::Medial, 3021, 2), (DecompositionTag::Medial, 3023, 2), (DecompositionTag::Medial, 3025, 2), (DecompositionTag::Medial, 3027, 2),
    (DecompositionTag::Medial, 3029, 2), (DecompositionTag::Medial, 3031, 2), (DecompositionTag::Medial, 3033, 2), (DecompositionTag::Medial, 3035, 2),
    (DecompositionTag::Medial, 3037, 2), (DecompositionTag::Medial, 3039, 2), (DecompositionTag::Medial, 3041, 2), (DecompositionTag::Medial, 3043, 2),
    (DecompositionTag::Medial, 3045, 2), (DecompositionTag::Medial, 3047, 2), (DecompositionTag::Medial, 3049, 3), (DecompositionTag::Medial, 3052, 3),
    (DecompositionTag::Medial, 3055, 3), (DecompositionTag::Isolated, 3058, 2), (DecompositionTag::Isolated, 3060, 2), (DecompositionTag::Isolated, 3062, 2),
    (DecompositionTag::Isolated, 3064, 2), (DecompositionTag::Isolated, 3066, 2), (DecompositionTag::Isolated, 3068, 2), (DecompositionTag::Isolated, 3070, 2),
    (DecompositionTag::Isolated, 3072, 2), (DecompositionTag::Isolated, 3074, 2), (DecompositionTag::Isolated, 3076, 2), (DecompositionTag::Isolated, 3078, 2),
    (DecompositionTag::Isolated, 3080, 2), (DecompositionTag::Isolated, 3082, 2), (DecompositionTag::Isolated, 3084, 2), (DecompositionTag::Isolated, 3086, 2),
    (DecompositionTag::Isolated, 3088, 2), (DecompositionTag::Isolated, 3090, 2), (DecompositionTag::Isolated, 3092, 2), (DecompositionTag::Isolated, 3094, 2),
    (DecompositionTag::Isolated, 3096, 2), (DecompositionTag::Isolated, 3098, 2), (DecompositionTag::Isolated, 3100, 2), (DecompositionTag::Isolated, 3102, 2),
    (DecompositionTag::Isolated, 3104, 2), (DecompositionTag::Isolated, 3106, 2), (DecompositionTag::Isolated, 3108, 2), (DecompositionTag::Isolated, 3110, 2),
    (DecompositionTag::Isolated, 3112, 2), (DecompositionTag::Final, 3114, 2), (DecompositionTag::Final, 3116, 2), (DecompositionTag::Final, 3118, 2),
    (DecompositionTag::Final, 3120, 2), (DecompositionTag::Final, 3122, 2), (DecompositionTag::Final, 3124, 2), (DecompositionTag::Final, 3126, 2),
    (DecompositionTag::Final, 3128, 2), (DecompositionTag::Final, 3130, 2), (DecompositionTag::Final, 3132, 2), (DecompositionTag::Final, 3134, 2),
    (DecompositionTag::Final, 3136, 2), (DecompositionTag::Final, 3138, 2), (DecompositionTag::Final, 3140, 2), (DecompositionTag::Final, 3142, 2),
    (DecompositionTag::Final, 3144, 2), (DecompositionTag::Final, 3146, 2), (DecompositionTag::Final, 3148, 2), (DecompositionTag::Final, 3150, 2),
    (DecompositionTag::Final, 3152, 2), (DecompositionTag::Final, 3154, 2), (DecompositionTag::Final, 3156, 2), (DecompositionTag::Final, 3158, 2),
    (DecompositionTag::Final, 3160, 2), (DecompositionTag::Final, 3162, 2), (DecompositionTag::Final, 3164, 2), (DecompositionTag::Final, 3166, 2),
    (DecompositionTag::Final, 3168, 2), (DecompositionTag::Initial, 3170, 2), (DecompositionTag::Initial, 3172, 2), (DecompositionTag::Initial, 3174, 2),
    (DecompositionTag::Initial, 3176, 2), (DecompositionTag::Initial, 3178, 2), (DecompositionTag::Initial, 3180, 2), (DecompositionTag::Initial, 3182, 2),
    (DecompositionTag::Medial, 3184, 2), (DecompositionTag::Medial, 3186, 2), (DecompositionTag::Medial, 3188, 2), (DecompositionTag::Medial, 3190, 2),
    (DecompositionTag::Medial, 3192, 2), (DecompositionTag::Medial, 3194, 2), (DecompositionTag::Medial, 3196, 2), (DecompositionTag::Medial, 3198, 2),
    (DecompositionTag::Final, 3200, 2), (DecompositionTag::Isolated, 3202, 2), (DecompositionTag::Initial, 3204, 3), (DecompositionTag::Final, 3207, 3),
    (DecompositionTag::Initial, 3210, 3), (DecompositionTag::Initial, 3213, 3), (DecompositionTag::Initial, 3216, 3), (DecompositionTag::Initial, 3219, 3),
    (DecompositionTag::Initial, 3222, 3), (DecompositionTag::Initial, 3225, 3), (DecompositionTag::Final, 3228, 3), (DecompositionTag::Initial, 3231, 3),
    (DecompositionTag::Final, 3234, 3), (DecompositionTag::Final, 3237, 3), (DecompositionTag::Initial, 3240, 3), (DecompositionTag::Initial, 3243, 3),
    (DecompositionTag::Final, 3246, 3), (DecompositionTag::Final, 3249, 3), (DecompositionTag::Initial, 3252, 3), (DecompositionTag::Initial, 3255, 3),
    (DecompositionTag::Final, 3258, 3), (DecompositionTag::Initial, 3261, 3), (DecompositionTag::Final, 3264, 3), (DecompositionTag::Initial, 3267, 3),
    (DecompositionTag::Final, 3270, 3), (DecompositionTag::Final, 3273, 3), (DecompositionTag::Initial, 3276, 3), (DecompositionTag::Final, 3279, 3),
    (DecompositionTag::Final, 3282, 3), (DecompositionTag::Initial, 3285, 3), (DecompositionTag::Final, 3288, 3), (DecompositionTag::Initial, 3291, 3),
    (DecompositionTag::Final, 3294, 3), (DecompositionTag::Final, 3297, 3), (DecompositionTag::Initial, 3300, 3), (DecompositionTag::Final, 3303, 3),
    (DecompositionTag::Initial, 3306, 3), (DecompositionTag::Initial, 3309, 3), (DecompositionTag::Final, 3312, 3), (DecompositionTag::Final, 3315, 3),
    (DecompositionTag::Final, 3318, 3), (DecompositionTag::Initial, 3321, 3), (DecompositionTag::Final, 3324, 3), (DecompositionTag::Final, 3327, 3),
    (DecompositionTag::Final, 3330, 3), (DecompositionTag::Final, 3333, 3), (DecompositionTag::Final, 3336, 3), (DecompositionTag::Initial, 3339, 3),
    (DecompositionTag::Final, 3342, 3), (DecompositionTag::Final, 3345, 3), (DecompositionTag::Final, 3348, 3), (DecompositionTag::Final, 3351, 3),
    (DecompositionTag::Final, 3354, 3), (DecompositionTag::Initial, 3357, 3), (DecompositionTag::Final, 3360, 3), (DecompositionTag::Final, 3363, 3),
    (DecompositionTag::Initial, 3366, 3), (DecompositionTag::Final, 3369, 3), (DecompositionTag::Initial, 3372, 3), (DecompositionTag::Initial, 3375, 3),
    (DecompositionTag::Initial, 3378, 3), (DecompositionTag::Final, 3381, 3), (DecompositionTag::Initial, 3384, 3), (DecompositionTag::Initial, 3387, 3),
    (DecompositionTag::Initial, 3390, 3), (DecompositionTag::Initial, 3393, 3), (DecompositionTag::Initial, 3396, 3), (DecompositionTag::Initial, 3399, 3),
    (DecompositionTag::Initial, 3402, 3), (DecompositionTag::Initial, 3405, 3), (DecompositionTag::Final, 3408, 3), (DecompositionTag::Final, 3411, 3),
    (DecompositionTag::Initial, 3414, 3), (DecompositionTag::Final, 3417, 3), (DecompositionTag::Final, 3420, 3), (DecompositionTag::Final, 3423, 3),
    (DecompositionTag::Final, 3426, 3), (DecompositionTag::Initial, 3429, 3), (DecompositionTag::Final, 3432, 3), (DecompositionTag::Final, 3435, 3),
    (DecompositionTag::Final, 3438, 3), (DecompositionTag::Final, 3441, 3), (DecompositionTag::Final, 3444, 3), (DecompositionTag::Final, 3447, 3),
    (DecompositionTag::Final, 3450, 3), (DecompositionTag::Final, 3453, 3), (DecompositionTag::Final, 3456, 3), (DecompositionTag::Final, 3459, 3),
    (DecompositionTag::Final, 3462, 3), (DecompositionTag::Final, 3465, 3), (DecompositionTag::Final, 3468, 3), (DecompositionTag::Final, 3471, 3),
    (DecompositionTag::Final, 3474, 3), (DecompositionTag::Final, 3477, 3), (DecompositionTag::Final, 3480, 3), (DecompositionTag::Final, 3483, 3),
    (DecompositionTag::Final, 3486, 3), (DecompositionTag::Final, 3489, 3), (DecompositionTag::Final, 3492, 3), (DecompositionTag::Final, 3495, 3),
    (DecompositionTag::Initial, 3498, 3), (DecompositionTag::Initial, 3501, 3), (DecompositionTag::Final, 3504, 3), (DecompositionTag::Final, 3507, 3),
    (DecompositionTag::Initial, 3510, 3), (DecompositionTag::Final, 3513, 3), (DecompositionTag::Initial, 3516, 3), (DecompositionTag::Final, 3519, 3),
    (DecompositionTag::Final, 3522, 3), (DecompositionTag::Final, 3525, 3), (DecompositionTag::Final, 3528, 3), (DecompositionTag::Final, 3531, 3),
    (DecompositionTag::Final, 3534, 3), (DecompositionTag::Final, 3537, 3), (DecompositionTag::Final, 3540, 3), (DecompositionTag::Initial, 3543, 3),
    (DecompositionTag::Initial, 3546, 3), (DecompositionTag::Initial, 3549, 3), (DecompositionTag::Final, 3552, 3), (DecompositionTag::Final, 3555, 3),
    (DecompositionTag::Isolated, 3558, 3), (DecompositionTag::Isolated, 3561, 3), (DecompositionTag::Isolated, 3564, 4), (DecompositionTag::Isolated, 3568, 4),
    (DecompositionTag::Isolated, 3572, 4), (DecompositionTag::Isolated, 3576, 4), (DecompositionTag::Isolated, 3580, 4), (DecompositionTag::Isolated, 3584, 4),
    (DecompositionTag::Isolated, 3588, 4), (DecompositionTag::Isolated, 3592, 3), (DecompositionTag::Isolated, 3595, 18), (DecompositionTag::Isolated, 3613, 8),
    (DecompositionTag::Isolated, 3621, 4), (DecompositionTag::Vertical, 3625, 1), (DecompositionTag::Vertical, 3626, 1), (DecompositionTag::Vertical, 3627, 1),
    (DecompositionTag::Vertical, 3628, 1), (DecompositionTag::Vertical, 3629, 1), (DecompositionTag::Vertical, 3630, 1), (DecompositionTag::Vertical, 3631, 1),
    (DecompositionTag::Vertical, 3632, 1), (DecompositionTag::Vertical, 3633, 1), (DecompositionTag::Vertical, 3634, 1), (DecompositionTag::Vertical, 3635, 1),
    (DecompositionTag::Vertical, 3636, 1), (DecompositionTag::Vertical, 3637, 1), (DecompositionTag::Vertical, 3638, 1), (DecompositionTag::Vertical, 3639, 1),
    (DecompositionTag::Vertical, 3640, 1), (DecompositionTag::Vertical, 3641, 1), (DecompositionTag::Vertical, 3642, 1), (DecompositionTag::Vertical, 3643, 1),
    (DecompositionTag::Vertical, 3644, 1), (DecompositionTag::Vertical, 3645, 1), (DecompositionTag::Vertical, 3646, 1), (DecompositionTag::Vertical, 3647, 1),
    (DecompositionTag::Vertical, 3648, 1), (DecompositionTag::Vertical, 3649, 1), (DecompositionTag::Vertical, 3650, 1), (DecompositionTag::Vertical, 3651, 1),
    (DecompositionTag::Vertical, 3652, 1), (DecompositionTag::Vertical, 3653, 1), (DecompositionTag::Vertical, 3654, 1), (DecompositionTag::Vertical, 3655, 1),
    (DecompositionTag::Vertical, 3656, 1), (DecompositionTag::Vertical, 3657, 1), (DecompositionTag::Compat, 3658, 1), (DecompositionTag::Compat, 3659, 1),
    (DecompositionTag::Compat, 3660, 1), (DecompositionTag::Compat, 3661, 1), (DecompositionTag::Compat, 3662, 1), (DecompositionTag::Compat, 3663, 1),
    (DecompositionTag::Compat, 3664, 1), (DecompositionTag::Small, 3665, 1), (DecompositionTag::Small, 3666, 1), (DecompositionTag::Small, 3667, 1),
    (DecompositionTag::Small, 3668, 1), (DecompositionTag::Small, 3669, 1), (DecompositionTag::Small, 3670, 1), (DecompositionTag::Small, 3671, 1),
    (DecompositionTag::Small, 3672, 1), (DecompositionTag::Small, 3673, 1), (DecompositionTag::Small, 3674, 1), (DecompositionTag::Small, 3675, 1),
    (DecompositionTag::Small, 3676, 1), (DecompositionTag::Small, 3677, 1), (DecompositionTag::Small, 3678, 1), (DecompositionTag::Small, 3679, 1),
    (DecompositionTag::Small, 3680, 1), (DecompositionTag::Small, 3681, 1), (DecompositionTag::Small, 3682, 1), (DecompositionTag::Small, 3683, 1),
    (DecompositionTag::Small, 3684, 1), (DecompositionTag::Small, 3685, 1), (DecompositionTag::Small, 3686, 1), (DecompositionTag::Small, 3687, 1),
    (DecompositionTag::Small, 3688, 1), (DecompositionTag::Small, 3689, 1), (DecompositionTag::Small, 3690, 1), (DecompositionTag::Isolated, 3691, 2),
    (DecompositionTag::Medial, 3693, 2), (DecompositionTag::Isolated, 3695, 2), (DecompositionTag::Isolated, 3697, 2), (DecompositionTag::Isolated, 3699, 2),
    (DecompositionTag::Medial, 3701, 2), (DecompositionTag::Isolated, 3703, 2), (DecompositionTag::Medial, 3705, 2), (DecompositionTag::Isolated, 3707, 2),
    (DecompositionTag::Medial, 3709, 2), (DecompositionTag::Isolated, 3711, 2), (DecompositionTag::Medial, 3713, 2), (DecompositionTag::Isolated, 3715, 2),
    (DecompositionTag::Medial, 3717, 2), (DecompositionTag::Isolated, 3719, 1), (DecompositionTag::Isolated, 3720, 1), (DecompositionTag::Final, 3721, 1),
    (DecompositionTag::Isolated, 3722, 1), (DecompositionTag::Final, 3723, 1), (DecompositionTag::Isolated, 3724, 1), (DecompositionTag::Final, 3725, 1),
    (DecompositionTag::Isolated, 3726, 1), (DecompositionTag::Final, 3727, 1), (DecompositionTag::Isolated, 3728, 1), (DecompositionTag::Final, 3729, 1),
    (DecompositionTag::Initial, 3730, 1), (DecompositionTag::Medial, 3731, 1), (DecompositionTag::Isolated, 3732, 1), (DecompositionTag::Final, 3733, 1),
    (DecompositionTag::Isolated, 3734, 1), (DecompositionTag::Final, 3735, 1), (DecompositionTag::Initial, 3736, 1), (DecompositionTag::Medial, 3737, 1),
    (DecompositionTag::Isolated, 3738, 1), (DecompositionTag::Final, 3739, 1), (DecompositionTag::Isolated, 3740, 1), (DecompositionTag::Final, 3741, 1),
    (DecompositionTag::Initial, 3742, 1), (DecompositionTag::Medial, 3743, 1), (DecompositionTag::Isolated, 3744, 1), (DecompositionTag::Final, 3745, 1),
    (DecompositionTag::Initial, 3746, 1), (DecompositionTag::Medial, 3747, 1), (DecompositionTag::Isolated, 3748, 1), (DecompositionTag::Final, 3749, 1),
    (DecompositionTag::Initial, 3750, 1), (DecompositionTag::Medial, 3751, 1), (DecompositionTag::Isolated, 3752, 1), (DecompositionTag::Final, 3753, 1),
    (DecompositionTag::Initial, 3754, 1), (DecompositionTag::Medial, 3755, 1), (DecompositionTag::Isolated, 3756, 1), (DecompositionTag::Final, 3757, 1),
    (DecompositionTag::Initial, 3758, 1), (DecompositionTag::Medial, 3759, 1), (DecompositionTag::Isolated, 3760, 1), (DecompositionTag::Final, 3761, 1),
    (DecompositionTag::Isolated, 3762, 1), (DecompositionTag::Final, 3763, 1), (DecompositionTag::Isolated, 3764, 1), (DecompositionTag::Final, 3765, 1),
    (DecompositionTag::Isolated, 3766, 1), (DecompositionTag::Final, 3767, 1), (DecompositionTag::Isolated, 3768, 1), (DecompositionTag::Final, 3769, 1),
    (DecompositionTag::Initial, 3770, 1), (DecompositionTag::Medial, 3771, 1), (DecompositionTag::Isolated, 3772, 1), (DecompositionTag::Final, 3773, 1),
    (DecompositionTag::Initial, 3774, 1), (DecompositionTag::Medial, 3775, 1), (DecompositionTag::Isolated, 3776, 1), (DecompositionTag::Final, 3777, 1),
    (DecompositionTag::Initial, 3778, 1), (DecompositionTag::Medial, 3779, 1), (DecompositionTag::Isolated, 3780, 1), (DecompositionTag::Final, 3781, 1),
    (DecompositionTag::Initial, 3782, 1), (DecompositionTag::Medial, 3783, 1), (DecompositionTag::Isolated, 3784, 1), (DecompositionTag::Final, 3785, 1),
    (DecompositionTag::Initial, 3786, 1), (DecompositionTag::Medial, 3787, 1), (DecompositionTag::Isolated, 3788, 1), (DecompositionTag::Final, 3789, 1),
    (DecompositionTag::Initial, 3790, 1), (DecompositionTag::Medial, 3791, 1), (DecompositionTag::Isolated, 3792, 1), (DecompositionTag::Final, 3793, 1),
    (DecompositionTag::Initial, 3794, 1), (DecompositionTag::Medial, 3795, 1), (DecompositionTag::Isolated, 3796, 1), (DecompositionTag::Final, 3797, 1),
    (DecompositionTag::Initial, 3798, 1), (DecompositionTag::Medial, 3799, 1), (DecompositionTag::Isolated, 3800, 1), (DecompositionTag::Final, 3801, 1),
    (DecompositionTag::Initial, 3802, 1), (DecompositionTag::Medial, 3803, 1), (DecompositionTag::Isolated, 3804, 1), (DecompositionTag::Final, 3805, 1),
    (DecompositionTag::Initial, 3806, 1), (DecompositionTag::Medial, 3807, 1), (DecompositionTag::Isolated, 3808, 1), (DecompositionTag::Final, 3809, 1),
    (DecompositionTag::Initial, 3810, 1), (DecompositionTag::Medial, 3811, 1), (DecompositionTag::Isolated, 3812, 1), (DecompositionTag::Final, 3813, 1),
    (DecompositionTag::Initial, 3814, 1), (DecompositionTag::Medial, 3815, 1), (DecompositionTag::Isolated, 3816, 1), (DecompositionTag::Final, 3817, 1),
    (DecompositionTag::Initial, 3818, 1), (DecompositionTag::Medial, 3819, 1), (DecompositionTag::Isolated, 3820, 1), (DecompositionTag::Final, 3821, 1),
    (DecompositionTag::Initial, 3822, 1), (DecompositionTag::Medial, 3823, 1), (DecompositionTag::Isolated, 3824, 1), (DecompositionTag::Final, 3825, 1),
    (DecompositionTag::Initial, 3826, 1), (DecompositionTag::Medial, 3827, 1), (DecompositionTag::Isolated, 3828, 1), (DecompositionTag::Final, 3829, 1),
    (DecompositionTag::Isolated, 3830, 1), (DecompositionTag::Final, 3831, 1), (DecompositionTag::Isolated, 3832, 1), (DecompositionTag::Final, 3833, 1),
    (DecompositionTag::Initial, 3834, 1), (DecompositionTag::Medial, 3835, 1), (DecompositionTag::Isolated, 3836, 2), (DecompositionTag::Final, 3838, 2),
    (DecompositionTag::Isolated, 3840, 2), (DecompositionTag::Final, 3842, 2), (DecompositionTag::Isolated, 3844, 2), (DecompositionTag::Final, 3846, 2),
    (DecompositionTag::Isolated, 3848, 2), (DecompositionTag::Final, 3850, 2), (DecompositionTag::Wide, 3852, 1), (DecompositionTag::Wide, 3853, 1),
    (DecompositionTag::Wide, 3854, 1), (DecompositionTag::Wide, 3855, 1), (DecompositionTag::Wide, 3856, 1), (DecompositionTag::Wide, 3857, 1),
    (DecompositionTag::Wide, 3858, 1), (DecompositionTag::Wide, 3859, 1), (DecompositionTag::Wide, 3860, 1), (DecompositionTag::Wide, 3861, 1),
    (DecompositionTag::Wide, 3862, 1), (DecompositionTag::Wide, 3863, 1), (DecompositionTag::Wide, 3864, 1), (DecompositionTag::Wide, 3865, 1),
    (DecompositionTag::Wide, 3866, 1), (DecompositionTag::Wide, 3867, 1), (DecompositionTag::Wide, 3868, 1), (DecompositionTag::Wide, 3869, 1),
    (DecompositionTag::Wide, 3870, 1), (DecompositionTag::Wide, 3871, 1), (DecompositionTag::Wide, 3872, 1), (DecompositionTag::Wide, 3873, 1),
    (DecompositionTag::Wide, 3874, 1), (DecompositionTag::Wide, 3875, 1), (DecompositionTag::Wide, 3876, 1), (DecompositionTag::Wide, 3877, 1),
    (DecompositionTag::Wide, 3878, 1), (DecompositionTag::Wide, 3879, 1), (DecompositionTag::Wide, 3880, 1), (DecompositionTag::Wide, 3881, 1),
    (DecompositionTag::Wide, 3882, 1), (DecompositionTag::Wide, 3883, 1), (DecompositionTag::Wide, 3884, 1), (DecompositionTag::Wide, 3885, 1),
    (DecompositionTag::Wide, 3886, 1), (DecompositionTag::Wide, 3887, 1), (DecompositionTag::Wide, 3888, 1), (DecompositionTag::Wide, 3889, 1),
    (DecompositionTag::Wide, 3890, 1), (DecompositionTag::Wide, 3891, 1), (DecompositionTag::Wide, 3892, 1), (DecompositionTag::Wide, 3893, 1),
    (DecompositionTag::Wide, 3894, 1), (DecompositionTag::Wide, 3895, 1), (DecompositionTag::Wide, 3896, 1), (DecompositionTag::Wide, 3897, 1),
    (DecompositionTag::Wide, 3898, 1), (DecompositionTag::Wide, 3899, 1), (DecompositionTag::Wide, 3900, 1), (DecompositionTag::Wide, 3901, 1),
    (DecompositionTag::Wide, 3902, 1), (DecompositionTag::Wide, 3903, 1), (DecompositionTag::Wide, 3904, 1), (DecompositionTag::Wide, 3905, 1),
    (DecompositionTag::Wide, 3906, 1), (DecompositionTag::Wide, 3907, 1), (DecompositionTag::Wide, 3908, 1), (DecompositionTag::Wide, 3909, 1),
    (DecompositionTag::Wide, 3910, 1), (DecompositionTag::Wide, 3911, 1), (DecompositionTag::Wide, 3912, 1), (DecompositionTag::Wide, 3913, 1),
    (DecompositionTag::Wide, 3914, 1), (DecompositionTag::Wide, 3915, 1), (DecompositionTag::Wide, 3916, 1), (DecompositionTag::Wide, 3917, 1),
    (DecompositionTag::Wide, 3918, 1), (DecompositionTag::Wide, 3919, 1), (DecompositionTag::Wide, 3920, 1), (DecompositionTag::Wide, 3921, 1),
    (DecompositionTag::Wide, 3922, 1), (DecompositionTag::Wide, 3923, 1), (DecompositionTag::Wide, 3924, 1), (DecompositionTag::Wide, 3925, 1),
    (DecompositionTag::Wide, 3926, 1), (DecompositionTag::Wide, 3927, 1), (DecompositionTag::Wide, 3928, 1), (DecompositionTag::Wide, 3929, 1),
    (DecompositionTag::Wide, 3930, 1), (DecompositionTag::Wide, 3931, 1), (DecompositionTag::Wide, 3932, 1), (DecompositionTag::Wide, 3933, 1),
    (DecompositionTag::Wide, 3934, 1), (DecompositionTag::Wide, 3935, 1), (DecompositionTag::Wide, 3936, 1), (DecompositionTag::Wide, 3937, 1),
    (DecompositionTag::Wide, 3938, 1), (DecompositionTag::Wide, 3939, 1), (DecompositionTag::Wide, 3940, 1), (DecompositionTag::Wide, 3941, 1),
    (DecompositionTag::Wide, 3942, 1), (DecompositionTag::Wide, 3943, 1), (DecompositionTag::Wide, 3944, 1), (DecompositionTag::Wide, 3945, 1),
    (DecompositionTag::Wide, 3946, 1), (DecompositionTag::Wide, 3947, 1), (DecompositionTag::Narrow, 3948, 1), (DecompositionTag::Narrow, 3949, 1),
    (DecompositionTag::Narrow, 3950, 1), (DecompositionTag::Narrow, 3951, 1), (DecompositionTag::Narrow, 3952, 1), (DecompositionTag::Narrow, 3953, 1),
    (DecompositionTag::Narrow, 3954, 1), (DecompositionTag::Narrow, 3955, 1), (DecompositionTag::Narrow, 3956, 1), (DecompositionTag::Narrow, 3957, 1),
    (DecompositionTag::Narrow, 3958, 1), (DecompositionTag::Narrow, 3959, 1), (DecompositionTag::Narrow, 3960, 1), (DecompositionTag::Narrow, 3961, 1),
    (DecompositionTag::Narrow, 3962, 1), (DecompositionTag::Narrow, 3963, 1), (DecompositionTag::Narrow, 3964, 1), (DecompositionTag::Narrow, 3965, 1),
    (DecompositionTag::Narrow, 3966, 1), (DecompositionTag::Narrow, 3967, 1), (DecompositionTag::Narrow, 3968, 1), (DecompositionTag::Narrow, 3969, 1),
    (DecompositionTag::Narrow, 3970, 1), (DecompositionTag::Narrow, 3971, 1), (DecompositionTag::Narrow, 3972, 1), (DecompositionTag::Narrow, 3973, 1),
    (DecompositionTag::Narrow, 3974, 1), (DecompositionTag::Narrow, 3975, 1), (DecompositionTag::Narrow, 3976, 1), (DecompositionTag::Narrow, 3977, 1),
    (DecompositionTag::Narrow, 3978, 1), (DecompositionTag::Narrow, 3979, 1), (DecompositionTag::Narrow, 3980, 1), (DecompositionTag::Narrow, 3981, 1),
    (DecompositionTag::Narrow, 3982, 1), (DecompositionTag::Narrow, 3983, 1), (DecompositionTag::Narrow, 3984, 1), (DecompositionTag::Narrow, 3985, 1),
    (DecompositionTag::Narrow, 3986, 1), (DecompositionTag::Narrow, 3987, 1), (DecompositionTag::Narrow, 3988, 1), (DecompositionTag::Narrow, 3989, 1),
    (DecompositionTag::Narrow, 3990, 1), (DecompositionTag::Narrow, 3991, 1), (DecompositionTag::Narrow, 3992, 1), (DecompositionTag::Narrow, 3993, 1),
    (DecompositionTag::Narrow, 3994, 1), (DecompositionTag::Narrow, 3995, 1), (DecompositionTag::Narrow, 3996, 1), (DecompositionTag::Narrow, 3997, 1),
    (DecompositionTag::Narrow, 3998, 1), (DecompositionTag::Narrow, 3999, 1), (DecompositionTag::Narrow, 4000, 1), (DecompositionTag::Narrow, 4001, 1),
    (DecompositionTag::Narrow, 4002, 1), (DecompositionTag::Narrow, 4003, 1), (DecompositionTag::Narrow, 4004, 1), (DecompositionTag::Narrow, 4005, 1),
    (DecompositionTag::Narrow, 4006, 1), (DecompositionTag::Narrow, 4007, 1), (DecompositionTag::Narrow, 4008, 1), (DecompositionTag::Narrow, 4009, 1),
    (DecompositionTag::Narrow, 4010, 1), (DecompositionTag::Narrow, 4011, 1), (DecompositionTag::Narrow, 4012, 1), (DecompositionTag::Narrow, 4013, 1),
    (DecompositionTag::Narrow, 4014, 1), (DecompositionTag::Narrow, 4015, 1), (DecompositionTag::Narrow, 4016, 1), (DecompositionTag::Narrow, 4017, 1),
    (DecompositionTag::Narrow, 4018, 1), (DecompositionTag::Narrow, 4019, 1), (DecompositionTag::Narrow, 4020, 1), (DecompositionTag::Narrow, 4021, 1),
    (DecompositionTag::Narrow, 4022, 1), (DecompositionTag::Narrow, 4023, 1), (DecompositionTag::Narrow, 4024, 1), (DecompositionTag::Narrow, 4025, 1),
    (DecompositionTag::Narrow, 4026, 1), (DecompositionTag::Narrow, 4027, 1), (DecompositionTag::Narrow, 4028, 1), (DecompositionTag::Narrow, 4029, 1),
    (DecompositionTag::Narrow, 4030, 1), (DecompositionTag::Narrow, 4031, 1), (DecompositionTag::Narrow, 4032, 1), (DecompositionTag::Narrow, 4033, 1),
    (DecompositionTag::Narrow, 4034, 1), (DecompositionTag::Narrow, 4035, 1), (DecompositionTag::Narrow, 4036, 1), (DecompositionTag::Narrow, 4037, 1),
    (DecompositionTag::Narrow, 4038, 1), (DecompositionTag::Narrow, 4039, 1), (DecompositionTag::Narrow, 4040, 1), (DecompositionTag::Narrow, 4041, 1),
    (DecompositionTag::Narrow, 4042, 1), (DecompositionTag::Narrow, 4043, 1), (DecompositionTag::Narrow, 4044, 1), (DecompositionTag::Narrow, 4045, 1),
    (DecompositionTag::Narrow, 4046, 1), (DecompositionTag::Narrow, 4047, 1), (DecompositionTag::Narrow, 4048, 1), (DecompositionTag::Narrow, 4049, 1),
    (DecompositionTag::Narrow, 4050, 1), (DecompositionTag::Narrow, 4051, 1), (DecompositionTag::Narrow, 4052, 1), (DecompositionTag::Narrow, 4053, 1),
    (DecompositionTag::Narrow, 4054, 1), (DecompositionTag::Narrow, 4055, 1), (DecompositionTag::Narrow, 4056, 1), (DecompositionTag::Narrow, 4057, 1),
    (DecompositionTag::Narrow, 4058, 1), (DecompositionTag::Narrow, 4059, 1), (DecompositionTag::Narrow, 4060, 1), (DecompositionTag::Narrow, 4061, 1),
    (DecompositionTag::Narrow, 4062, 1), (DecompositionTag::Wide, 4063, 1), (DecompositionTag::Wide, 4064, 1), (DecompositionTag::Wide, 4065, 1),
    (DecompositionTag::Wide, 4066, 1), (DecompositionTag::Wide, 4067, 1), (DecompositionTag::Wide, 4068, 1), (DecompositionTag::Wide, 4069, 1),
    (DecompositionTag::Narrow, 4070, 1), (DecompositionTag::Narrow, 4071, 1), (DecompositionTag::Narrow, 4072, 1), (DecompositionTag::Narrow, 4073, 1),
    (DecompositionTag::Narrow, 4074, 1), (DecompositionTag::Narrow, 4075, 1), (DecompositionTag::Narrow, 4076, 1), (DecompositionTag::Super, 4077, 1),
    (DecompositionTag::Super, 4078, 1), (DecompositionTag::Super, 4079, 1), (DecompositionTag::Super, 4080, 1), (DecompositionTag::Super, 4081, 1),
    (DecompositionTag::Super, 4082, 1), (DecompositionTag::Super, 4083, 1), (DecompositionTag::Super, 4084, 1), (DecompositionTag::Super, 4085, 1),
    (DecompositionTag::Super, 4086, 1), (DecompositionTag::Super, 4087, 1), (DecompositionTag::Super, 4088, 1), (DecompositionTag::Super, 4089, 1),
    (DecompositionTag::Super, 4090, 1), (DecompositionTag::Super, 4091, 1), (DecompositionTag::Super, 4092, 1), (DecompositionTag::Super, 4093, 1),
    (DecompositionTag::Super, 4094, 1), (DecompositionTag::Super, 4095, 1), (DecompositionTag::Super, 4096, 1), (DecompositionTag::Super, 4097, 1),
    (DecompositionTag::Super, 4098, 1), (DecompositionTag::Super, 4099, 1), (DecompositionTag::Super, 4100, 1), (DecompositionTag::Super, 4101, 1),
    (DecompositionTag::Super, 4102, 1), (DecompositionTag::Super, 4103, 1), (DecompositionTag::Super, 4104, 1), (DecompositionTag::Super, 4105, 1),
    (DecompositionTag::Super, 4106, 1), (DecompositionTag::Super, 4107, 1), (DecompositionTag::Super, 4108, 1), (DecompositionTag::Super, 4109, 1),
    (DecompositionTag::Super, 4110, 1), (DecompositionTag::Super, 4111, 1), (DecompositionTag::Super, 4112, 1), (DecompositionTag::Super, 4113, 1),
    (DecompositionTag::Super, 4114, 1), (DecompositionTag::Super, 4115, 1), (DecompositionTag::Super, 4116, 1), (DecompositionTag::Super, 4117, 1),
    (DecompositionTag::Super, 4118, 1), (DecompositionTag::Super, 4119, 1), (DecompositionTag::Super, 4120, 1), (DecompositionTag::Super, 4121, 1),
    (DecompositionTag::Super, 4122, 1), (DecompositionTag::Super, 4123, 1), (DecompositionTag::Super, 4124, 1), (DecompositionTag::Super, 4125, 1),
    (DecompositionTag::Super, 4126, 1), (DecompositionTag::Super, 4127, 1), (DecompositionTag::Super, 4128, 1), (DecompositionTag::Super, 4129, 1),
    (DecompositionTag::Super, 4130, 1), (DecompositionTag::Super, 4131, 1), (DecompositionTag::Super, 4132, 1), (DecompositionTag::Font, 4133, 1),
    (DecompositionTag::Font, 4134, 1), (DecompositionTag::Font, 4135, 1), (DecompositionTag::Font, 4136, 1), (DecompositionTag::Font, 4137, 1),
    (DecompositionTag::Font, 4138, 1), (DecompositionTag::Font, 4139, 1), (DecompositionTag::Font, 4140, 1), (DecompositionTag::Font, 4141, 1),
    (DecompositionTag::Font, 4142, 1), (DecompositionTag::Font, 4143, 1), (DecompositionTag::Font, 4144, 1), (DecompositionTag::Font, 4145, 1),
    (DecompositionTag::Font, 4146, 1), (DecompositionTag::Font, 4147, 1), (DecompositionTag::Font, 4148, 1), (DecompositionTag::Font, 4149, 1),
    (DecompositionTag::Font, 4150, 1), (DecompositionTag::Font, 4151, 1), (DecompositionTag::Font, 4152, 1), (DecompositionTag::Font, 4153, 1),
    (DecompositionTag::Font, 4154, 1), (DecompositionTag::Font, 4155, 1), (DecompositionTag::Font, 4156, 1), (DecompositionTag::Font, 4157, 1),
    (DecompositionTag::Font, 4158, 1), (DecompositionTag::Font, 4159, 1), (DecompositionTag::Font, 4160, 1), (DecompositionTag::Font, 4161, 1),
    (DecompositionTag::Font, 4162, 1), (DecompositionTag::Font, 4163, 1), (DecompositionTag::Font, 4164, 1), (DecompositionTag::Font, 4165, 1),
    (DecompositionTag::Font, 4166, 1), (DecompositionTag::Font, 4167, 1), (DecompositionTag::Font, 4168, 1), (DecompositionTag::Font, 4169, 1),
    (DecompositionTag::Font, 4170, 1), (DecompositionTag::Font, 4171, 1), (DecompositionTag::Font, 4172, 1), (DecompositionTag::Font, 4173, 1),
    (DecompositionTag::Font, 4174, 1), (DecompositionTag::Font, 4175, 1), (DecompositionTag::Font, 4176, 1), (DecompositionTag::Font, 4177, 1),
    (DecompositionTag::Font, 4178, 1), (DecompositionTag::Font, 4179, 1), (DecompositionTag::Font, 4180, 1), (DecompositionTag::Font, 4181, 1),
    (DecompositionTag::Font, 4182, 1), (DecompositionTag::Font, 4183, 1), (DecompositionTag::Font, 4184, 1), (DecompositionTag::Font, 4185, 1),
    (DecompositionTag::Font, 4186, 1), (DecompositionTag::Font, 4187, 1), (DecompositionTag::Font, 4188, 1), (DecompositionTag::Font, 4189, 1),
    (DecompositionTag::Font, 4190, 1), (DecompositionTag::Font, 4191, 1), (DecompositionTag::Font, 4192, 1), (DecompositionTag::Font, 4193, 1),
    (DecompositionTag::Font, 4194, 1), (DecompositionTag::Font, 4195, 1), (DecompositionTag::Font, 4196, 1), (DecompositionTag::Font, 4197, 1),
    (DecompositionTag::Font, 4198, 1), (DecompositionTag::Font, 4199, 1), (DecompositionTag::Font, 4200, 1), (DecompositionTag::Font, 4201, 1),
    (DecompositionTag::Font, 4202, 1), (DecompositionTag::Font, 4203, 1), (DecompositionTag::Font, 4204, 1), (DecompositionTag::Font, 4205, 1),
    (DecompositionTag::Font, 4206, 1), (DecompositionTag::Font, 4207, 1), (DecompositionTag::Font, 4208, 1), (DecompositionTag::Font, 4209, 1),
    (DecompositionTag::Font, 4210, 1), (DecompositionTag::Font, 4211, 1), (DecompositionTag::Font, 4212, 1), (DecompositionTag::Font, 4213, 1),
    (DecompositionTag::Font, 4214, 1), (DecompositionTag::Font, 4215, 1), (DecompositionTag::Font, 4216, 1), (DecompositionTag::Font, 4217, 1),
    (DecompositionTag::Font, 4218, 1), (DecompositionTag::Font, 4219, 1), (DecompositionTag::Font, 4220, 1), (DecompositionTag::Font, 4221, 1),
    (DecompositionTag::Font, 4222, 1), (DecompositionTag::Font, 4223, 1), (DecompositionTag::Font, 4224, 1), (DecompositionTag::Font, 4225, 1),
    (DecompositionTag::Font, 4226, 1), (DecompositionTag::Font, 4227, 1), (DecompositionTag::Font, 4228, 1), (DecompositionTag::Font, 4229, 1),
    (DecompositionTag::Font, 4230, 1), (DecompositionTag::Font, 4231, 1), (DecompositionTag::Font, 4232, 1), (DecompositionTag::Font, 4233, 1),
    (DecompositionTag::Font, 4234, 1), (DecompositionTag::Font, 4235, 1), (DecompositionTag::Font, 4236, 1), (DecompositionTag::Font, 4237, 1),
    (DecompositionTag::Font, 4238, 1), (DecompositionTag::Font, 4239, 1), (DecompositionTag::Font, 4240, 1), (DecompositionTag::Font, 4241, 1),
    (DecompositionTag::Font, 4242, 1), (DecompositionTag::Font, 4243, 1), (DecompositionTag::Font, 4244, 1), (DecompositionTag::Font, 4245, 1),
    (DecompositionTag::Font, 4246, 1), (DecompositionTag::Font, 4247, 1), (DecompositionTag::Font, 4248, 1), (DecompositionTag::Font, 4249, 1),
    (DecompositionTag::Font, 4250, 1), (DecompositionTag::Font, 4251, 1), (DecompositionTag::Font, 4252, 1), (DecompositionTag::Font, 4253, 1),
    (DecompositionTag::Font, 4254, 1), (DecompositionTag::Font, 4255, 1), (DecompositionTag::Font, 4256, 1), (DecompositionTag::Font, 4257, 1),
    (DecompositionTag::Font, 4258, 1), (DecompositionTag::Font, 4259, 1), (DecompositionTag::Font, 4260, 1), (DecompositionTag::Font, 4261, 1),
    (DecompositionTag::Font, 4262, 1), (DecompositionTag::Font, 4263, 1), (DecompositionTag::Font, 4264, 1), (DecompositionTag::Font, 4265, 1),
    (DecompositionTag::Font, 4266, 1), (DecompositionTag::Font, 4267, 1), (DecompositionTag::Font, 4268, 1), (DecompositionTag::Font, 4269, 1),
    (DecompositionTag::Font, 4270, 1), (DecompositionTag::Font, 4271, 1), (DecompositionTag::Font, 4272, 1), (DecompositionTag::Font, 4273, 1),
    (DecompositionTag::Font, 4274, 1), (DecompositionTag::Font, 4275, 1), (DecompositionTag::Font, 4276, 1), (DecompositionTag::Font, 4277, 1),
    (DecompositionTag::Font, 4278, 1), (DecompositionTag::Font, 4279, 1), (DecompositionTag::Font, 4280, 1), (DecompositionTag::Font, 4281, 1),
    (DecompositionTag::Font, 4282, 1), (DecompositionTag::Font, 4283, 1), (DecompositionTag::Font, 4284, 1), (DecompositionTag::Font, 4285, 1),
    (DecompositionTag::Font, 4286, 1), (DecompositionTag::Font, 4287, 1), (DecompositionTag::Font, 4288, 1), (DecompositionTag::Font, 4289, 1),
    (DecompositionTag::Font, 4290, 1), (DecompositionTag::Font, 4291, 1), (DecompositionTag::Font, 4292, 1), (DecompositionTag::Font, 4293, 1),
    (DecompositionTag::Font, 4294, 1), (DecompositionTag::Font, 4295, 1), (DecompositionTag::Font, 4296, 1), (DecompositionTag::Font, 4297, 1),
    (DecompositionTag::Font, 4298, 1), (DecompositionTag::Font, 4299, 1), (DecompositionTag::Font, 4300, 1), (DecompositionTag::Font, 4301, 1),
    (DecompositionTag::Font, 4302, 1), (DecompositionTag::Font, 4303, 1), (DecompositionTag::Font, 4304, 1), (DecompositionTag::Font, 4305, 1),
    (DecompositionTag::Font, 4306, 1), (DecompositionTag::Font, 4307, 1), (DecompositionTag::Font, 4308, 1), (DecompositionTag::Font, 4309, 1),
    (DecompositionTag::Font, 4310, 1), (DecompositionTag::Font, 4311, 1), (DecompositionTag::Font, 4312, 1), (DecompositionTag::Font, 4313, 1),
    (DecompositionTag::Font, 4314, 1), (DecompositionTag::Font, 4315, 1), (DecompositionTag::Font, 4316, 1), (DecompositionTag::Font, 4317, 1),
    (DecompositionTag::Font, 4318, 1), (DecompositionTag::Font, 4319, 1), (DecompositionTag::Font, 4320, 1), (DecompositionTag::Font, 4321, 1),
    (DecompositionTag::Font, 4322, 1), (DecompositionTag::Font, 4323, 1), (DecompositionTag::Font, 4324, 1), (DecompositionTag::Font, 4325, 1),
    (DecompositionTag::Font, 4326, 1), (DecompositionTag::Font, 4327, 1), (DecompositionTag::Font, 4328, 1), (DecompositionTag::Font, 4329, 1),
    (DecompositionTag::Font, 4330, 1), (DecompositionTag::Font, 4331, 1), (DecompositionTag::Font, 4332, 1), (DecompositionTag::Font, 4333, 1),
    (DecompositionTag::Font, 4334, 1), (DecompositionTag::Font, 4335, 1), (DecompositionTag::Font, 4336, 1), (DecompositionTag::Font, 4337, 1),
    (DecompositionTag::Font, 4338, 1), (DecompositionTag::Font, 4339, 1), (DecompositionTag::Font, 4340, 1), (DecompositionTag::Font, 4341, 1),
    (DecompositionTag::Font, 4342, 1), (DecompositionTag::Font, 4343, 1), (DecompositionTag::Font, 4344, 1), (DecompositionTag::Font, 4345, 1),
    (DecompositionTag::Font, 4346, 1), (DecompositionTag::Font, 4347, 1), (DecompositionTag::Font, 4348, 1), (DecompositionTag::Font, 4349, 1),
    (DecompositionTag::Font, 4350, 1), (DecompositionTag::Font, 4351, 1), (DecompositionTag::Font, 4352, 1), (DecompositionTag::Font, 4353, 1),
    (DecompositionTag::Font, 4354, 1), (DecompositionTag::Font, 4355, 1), (DecompositionTag::Font, 4356, 1), (DecompositionTag::Font, 4357, 1),
    (DecompositionTag::Font, 4358, 1), (DecompositionTag::Font, 4359, 1), (DecompositionTag::Font, 4360, 1), (DecompositionTag::Font, 4361, 1),
    (DecompositionTag::Font, 4362, 1), (DecompositionTag::Font, 4363, 1), (DecompositionTag::Font, 4364, 1), (DecompositionTag::Font, 4365, 1),
    (DecompositionTag::Font, 4366, 1), (DecompositionTag::Font, 4367, 1), (DecompositionTag::Font, 4368, 1), (DecompositionTag::Font, 4369, 1),
    (DecompositionTag::Font, 4370, 1), (DecompositionTag::Font, 4371, 1), (DecompositionTag::Font, 4372, 1), (DecompositionTag::Font, 4373, 1),
    (DecompositionTag::Font, 4374, 1), (DecompositionTag::Font, 4375, 1), (DecompositionTag::Font, 4376, 1), (DecompositionTag::Font, 4377, 1),
    (DecompositionTag::Font, 4378, 1), (DecompositionTag::Font, 4379, 1), (DecompositionTag::Font, 4380, 1), (DecompositionTag::Font, 4381, 1),
    (DecompositionTag::Font, 4382, 1), (DecompositionTag::Font, 4383, 1), (DecompositionTag::Font, 4384, 1), (DecompositionTag::Font, 4385, 1),
    (DecompositionTag::Font, 4386, 1), (DecompositionTag::Font, 4387, 1), (DecompositionTag::Font, 4388, 1), (DecompositionTag::Font, 4389, 1),
    (DecompositionTag::Font, 4390, 1), (DecompositionTag::Font, 4391, 1), (DecompositionTag::Font, 4392, 1), (DecompositionTag::Font, 4393, 1),
    (DecompositionTag::Font, 4394, 1), (DecompositionTag::Font, 4395, 1), (DecompositionTag::Font, 4396, 1), (DecompositionTag::Font, 4397, 1),
    (DecompositionTag::Font, 4398, 1), (DecompositionTag::Font, 4399, 1), (DecompositionTag::Font, 4400, 1), (DecompositionTag::Font, 4401, 1),
    (DecompositionTag::Font, 4402, 1), (DecompositionTag::Font, 4403, 1), (DecompositionTag::Font, 4404, 1), (DecompositionTag::Font, 4405, 1),
    (DecompositionTag::Font, 4406, 1), (DecompositionTag::Font, 4407, 1), (DecompositionTag::Font, 4408, 1), (DecompositionTag::Font, 4409, 1),
    (DecompositionTag::Font, 4410, 1), (DecompositionTag::Font, 4411, 1), (DecompositionTag::Font, 4412, 1), (DecompositionTag::Font, 4413, 1),
    (DecompositionTag::Font, 4414, 1), (DecompositionTag::Font, 4415, 1), (DecompositionTag::Font, 4416, 1), (DecompositionTag::Font, 4417, 1),
    (DecompositionTag::Font, 4418, 1), (DecompositionTag::Font, 4419, 1), (DecompositionTag::Font, 4420, 1), (DecompositionTag::Font, 4421, 1),
    (DecompositionTag::Font, 4422, 1), (DecompositionTag::Font, 4423, 1), (DecompositionTag::Font, 4424, 1), (DecompositionTag::Font, 4425, 1),
    (DecompositionTag::Font, 4426, 1), (DecompositionTag::Font, 4427, 1), (DecompositionTag::Font, 4428, 1), (DecompositionTag::Font, 4429, 1),
    (DecompositionTag::Font, 4430, 1), (DecompositionTag::Font, 4431, 1), (DecompositionTag::Font, 4432, 1), (DecompositionTag::Font, 4433, 1),
    (DecompositionTag::Font, 4434, 1), (DecompositionTag::Font, 4435, 1), (DecompositionTag::Font, 4436, 1), (DecompositionTag::Font, 4437, 1),
    (DecompositionTag::Font, 4438, 1), (DecompositionTag::Font, 4439, 1), (DecompositionTag::Font, 4440, 1), (DecompositionTag::Font, 4441, 1),
    (DecompositionTag::Font, 4442, 1), (DecompositionTag::Font, 4443, 1), (DecompositionTag::Font, 4444, 1), (DecompositionTag::Font, 4445, 1),
    (DecompositionTag::Font, 4446, 1), (DecompositionTag::Font, 4447, 1), (DecompositionTag::Font, 4448, 1), (DecompositionTag::Font, 4449, 1),
    (DecompositionTag::Font, 4450, 1), (DecompositionTag::Font, 4451, 1), (DecompositionTag::Font, 4452, 1), (DecompositionTag::Font, 4453, 1),
    (DecompositionTag::Font, 4454, 1), (DecompositionTag::Font, 4455, 1), (DecompositionTag::Font, 4456, 1), (DecompositionTag::Font, 4457, 1),
    (DecompositionTag::Font, 4458, 1), (DecompositionTag::Font, 4459, 1), (DecompositionTag::Font, 4460, 1), (DecompositionTag::Font, 4461, 1),
    (DecompositionTag::Font, 4462, 1), (DecompositionTag::Font, 4463, 1), (DecompositionTag::Font, 4464, 1), (DecompositionTag::Font, 4465, 1),
    (DecompositionTag::Font, 4466, 1), (DecompositionTag::Font, 4467, 1), (DecompositionTag::Font, 4468, 1), (DecompositionTag::Font, 4469, 1),
    (DecompositionTag::Font, 4470, 1), (DecompositionTag::Font, 4471, 1), (DecompositionTag::Font, 4472, 1), (DecompositionTag::Font, 4473, 1),
    (DecompositionTag::Font, 4474, 1), (DecompositionTag::Font, 4475, 1), (DecompositionTag::Font, 4476, 1), (DecompositionTag::Font, 4477, 1),
    (DecompositionTag::Font, 4478, 1), (DecompositionTag::Font, 4479, 1), (DecompositionTag::Font, 4480, 1), (DecompositionTag::Font, 4481, 1),
    (DecompositionTag::Font, 4482, 1), (DecompositionTag::Font, 4483, 1), (DecompositionTag::Font, 4484, 1), (DecompositionTag::Font, 4485, 1),
    (DecompositionTag::Font, 4486, 1), (DecompositionTag::Font, 4487, 1), (DecompositionTag::Font, 4488, 1), (DecompositionTag::Font, 4489, 1),
    (DecompositionTag::Font, 4490, 1), (DecompositionTag::Font, 4491, 1), (DecompositionTag::Font, 4492, 1), (DecompositionTag::Font, 4493, 1),
    (DecompositionTag::Font, 4494, 1), (DecompositionTag::Font, 4495, 1), (DecompositionTag::Font, 4496, 1), (DecompositionTag::Font, 4497, 1),
    (DecompositionTag::Font, 4498, 1), (DecompositionTag::Font, 4499, 1), (DecompositionTag::Font, 4500, 1), (DecompositionTag::Font, 4501, 1),
    (DecompositionTag::Font, 4502, 1), (DecompositionTag::Font, 4503, 1), (DecompositionTag::Font, 4504, 1), (DecompositionTag::Font, 4505, 1),
    (DecompositionTag::Font, 4506, 1), (DecompositionTag::Font, 4507, 1), (DecompositionTag::Font, 4508, 1), (DecompositionTag::Font, 4509, 1),
    (DecompositionTag::Font, 4510, 1), (DecompositionTag::Font, 4511, 1), (DecompositionTag::Font, 4512, 1), (DecompositionTag::Font, 4513, 1),
    (DecompositionTag::Font, 4514, 1), (DecompositionTag::Font, 4515, 1), (DecompositionTag::Font, 4516, 1), (DecompositionTag::Font, 4517, 1),
    (DecompositionTag::Font, 4518, 1), (DecompositionTag::Font, 4519, 1), (DecompositionTag::Font, 4520, 1), (DecompositionTag::Font, 4521, 1),
    (DecompositionTag::Font, 4522, 1), (DecompositionTag::Font, 4523, 1), (DecompositionTag::Font, 4524, 1), (DecompositionTag::Font, 4525, 1),
    (DecompositionTag::Font, 4526, 1), (DecompositionTag::Font, 4527, 1), (DecompositionTag::Font, 4528, 1), (DecompositionTag::Font, 4529, 1),
    (DecompositionTag::Font, 4530, 1), (DecompositionTag::Font, 4531, 1), (DecompositionTag::Font, 4532, 1), (DecompositionTag::Font, 4533, 1),
    (DecompositionTag::Font, 4534, 1), (DecompositionTag::Font, 4535, 1), (DecompositionTag::Font, 4536, 1), (DecompositionTag::Font, 4537, 1),
    (DecompositionTag::Font, 4538, 1), (DecompositionTag::Font, 4539, 1), (DecompositionTag::Font, 4540, 1), (DecompositionTag::Font, 4541, 1),
    (DecompositionTag::Font, 4542, 1), (DecompositionTag::Font, 4543, 1), (DecompositionTag::Font, 4544, 1), (DecompositionTag::Font, 4545, 1),
    (DecompositionTag::Font, 4546, 1), (DecompositionTag::Font, 4547, 1), (DecompositionTag::Font, 4548, 1), (DecompositionTag::Font, 4549, 1),
    (DecompositionTag::Font, 4550, 1), (DecompositionTag::Font, 4551, 1), (DecompositionTag::Font, 4552, 1), (DecompositionTag::Font, 4553, 1),
    (DecompositionTag::Font, 4554, 1), (DecompositionTag::Font, 4555, 1), (DecompositionTag::Font, 4556, 1), (DecompositionTag::Font, 4557, 1),
    (DecompositionTag::Font, 4558, 1), (DecompositionTag::Font, 4559, 1), (DecompositionTag::Font, 4560, 1), (DecompositionTag::Font, 4561, 1),
    (DecompositionTag::Font, 4562, 1), (DecompositionTag::Font, 4563, 1), (DecompositionTag::Font, 4564, 1), (DecompositionTag::Font, 4565, 1),
    (DecompositionTag::Font, 4566, 1), (DecompositionTag::Font, 4567, 1), (DecompositionTag::Font, 4568, 1), (DecompositionTag::Font, 4569, 1),
    (DecompositionTag::Font, 4570, 1), (DecompositionTag::Font, 4571, 1), (DecompositionTag::Font, 4572, 1), (DecompositionTag::Font, 4573, 1),
    (DecompositionTag::Font, 4574, 1), (DecompositionTag::Font, 4575, 1), (DecompositionTag::Font, 4576, 1), (DecompositionTag::Font, 4577, 1),
    (DecompositionTag::Font, 4578, 1), (DecompositionTag::Font, 4579, 1), (DecompositionTag::Font, 4580, 1), (DecompositionTag::Font, 4581, 1),
    (DecompositionTag::Font, 4582, 1), (DecompositionTag::Font, 4583, 1), (DecompositionTag::Font, 4584, 1), (DecompositionTag::Font, 4585, 1),
    (DecompositionTag::Font, 4586, 1), (DecompositionTag::Font, 4587, 1), (DecompositionTag::Font, 4588, 1), (DecompositionTag::Font, 4589, 1),
    (DecompositionTag::Font, 4590, 1), (DecompositionTag::Font, 4591, 1), (DecompositionTag::Font, 4592, 1), (DecompositionTag::Font, 4593, 1),
    (DecompositionTag::Font, 4594, 1), (DecompositionTag::Font, 4595, 1), (DecompositionTag::Font, 4596, 1), (DecompositionTag::Font, 4597, 1),
    (DecompositionTag::Font, 4598, 1), (DecompositionTag::Font, 4599, 1), (DecompositionTag::Font, 4600, 1), (DecompositionTag::Font, 4601, 1),
    (DecompositionTag::Font, 4602, 1), (DecompositionTag::Font, 4603, 1), (DecompositionTag::Font, 4604, 1), (DecompositionTag::Font, 4605, 1),
    (DecompositionTag::Font, 4606, 1), (DecompositionTag::Font, 4607, 1), (DecompositionTag::Font, 4608, 1), (DecompositionTag::Font, 4609, 1),
    (DecompositionTag::Font, 4610, 1), (DecompositionTag::Font, 4611, 1), (DecompositionTag::Font, 4612, 1), (DecompositionTag::Font, 4613, 1),
    (DecompositionTag::Font, 4614, 1), (DecompositionTag::Font, 4615, 1), (DecompositionTag::Font, 4616, 1), (DecompositionTag::Font, 4617, 1),
    (DecompositionTag::Font, 4618, 1), (DecompositionTag::Font, 4619, 1), (DecompositionTag::Font, 4620, 1), (DecompositionTag::Font, 4621, 1),
    (DecompositionTag::Font, 4622, 1), (DecompositionTag::Font, 4623, 1), (DecompositionTag::Font, 4624, 1), (DecompositionTag::Font, 4625, 1),
    (DecompositionTag::Font, 4626, 1), (DecompositionTag::Font, 4627, 1), (DecompositionTag::Font, 4628, 1), (DecompositionTag::Font, 4629, 1),
    (DecompositionTag::Font, 4630, 1), (DecompositionTag::Font, 4631, 1), (DecompositionTag::Font, 4632, 1), (DecompositionTag::Font, 4633, 1),
    (DecompositionTag::Font, 4634, 1), (DecompositionTag::Font, 4635, 1), (DecompositionTag::Font, 4636, 1), (DecompositionTag::Font, 4637, 1),
    (DecompositionTag::Font, 4638, 1), (DecompositionTag::Font, 4639, 1), (DecompositionTag::Font, 4640, 1), (DecompositionTag::Font, 4641, 1),
    (DecompositionTag::Font, 4642, 1), (DecompositionTag::Font, 4643, 1), (DecompositionTag::Font, 4644, 1), (DecompositionTag::Font, 4645, 1),
    (DecompositionTag::Font, 4646, 1), (DecompositionTag::Font, 4647, 1), (DecompositionTag::Font, 4648, 1), (DecompositionTag::Font, 4649, 1),
    (DecompositionTag::Font, 4650, 1), (DecompositionTag::Font, 4651, 1), (DecompositionTag::Font, 4652, 1), (DecompositionTag::Font, 4653, 1),
    (DecompositionTag::Font, 4654, 1), (DecompositionTag::Font, 4655, 1), (DecompositionTag::Font, 4656, 1), (DecompositionTag::Font, 4657, 1),
    (DecompositionTag::Font, 4658, 1), (DecompositionTag::Font, 4659, 1), (DecompositionTag::Font, 4660, 1), (DecompositionTag::Font, 4661, 1),
    (DecompositionTag::Font, 4662, 1), (DecompositionTag::Font, 4663, 1), (DecompositionTag::Font, 4664, 1), (DecompositionTag::Font, 4665, 1),
    (DecompositionTag::Font, 4666, 1), (DecompositionTag::Font, 4667, 1), (DecompositionTag::Font, 4668, 1), (DecompositionTag::Font, 4669, 1),
    (DecompositionTag::Font, 4670, 1), (DecompositionTag::Font, 4671, 1), (DecompositionTag::Font, 4672, 1), (DecompositionTag::Font, 4673, 1),
    (DecompositionTag::Font, 4674, 1), (DecompositionTag::Font, 4675, 1), (DecompositionTag::Font, 4676, 1), (DecompositionTag::Font, 4677, 1),
    (DecompositionTag::Font, 4678, 1), (DecompositionTag::Font, 4679, 1), (DecompositionTag::Font, 4680, 1), (DecompositionTag::Font, 4681, 1),
    (DecompositionTag::Font, 4682, 1), (DecompositionTag::Font, 4683, 1), (DecompositionTag::Font, 4684, 1), (DecompositionTag::Font, 4685, 1),
    (DecompositionTag::Font, 4686, 1), (DecompositionTag::Font, 4687, 1), (DecompositionTag::Font, 4688, 1), (DecompositionTag::Font, 4689, 1),
    (DecompositionTag::Font, 4690, 1), (DecompositionTag::Font, 4691, 1), (DecompositionTag::Font, 4692, 1), (DecompositionTag::Font, 4693, 1),
    (DecompositionTag::Font, 4694, 1), (DecompositionTag::Font, 4695, 1), (DecompositionTag::Font, 4696, 1), (DecompositionTag::Font, 4697, 1),
    (DecompositionTag::Font, 4698, 1), (DecompositionTag::Font, 4699, 1), (DecompositionTag::Font, 4700, 1), (DecompositionTag::Font, 4701, 1),
    (DecompositionTag::Font, 4702, 1), (DecompositionTag::Font, 4703, 1), (DecompositionTag::Font, 4704, 1), (DecompositionTag::Font, 4705, 1),
    (DecompositionTag::Font, 4706, 1), (DecompositionTag::Font, 4707, 1), (DecompositionTag::Font, 4708, 1), (DecompositionTag::Font, 4709, 1),
    (DecompositionTag::Font, 4710, 1), (DecompositionTag::Font, 4711, 1), (DecompositionTag::Font, 4712, 1), (DecompositionTag::Font, 4713, 1),
    (DecompositionTag::Font, 4714, 1), (DecompositionTag::Font, 4715, 1), (DecompositionTag::Font, 4716, 1), (DecompositionTag::Font, 4717, 1),
    (DecompositionTag::Font, 4718, 1), (DecompositionTag::Font, 4719, 1), (DecompositionTag::Font, 4720, 1), (DecompositionTag::Font, 4721, 1),
    (DecompositionTag::Font, 4722, 1), (DecompositionTag::Font, 4723, 1), (DecompositionTag::Font, 4724, 1), (DecompositionTag::Font, 4725, 1),
    (DecompositionTag::Font, 4726, 1), (DecompositionTag::Font, 4727, 1), (DecompositionTag::Font, 4728, 1), (DecompositionTag::Font, 4729, 1),
    (DecompositionTag::Font, 4730, 1), (DecompositionTag::Font, 4731, 1), (DecompositionTag::Font, 4732, 1), (DecompositionTag::Font, 4733, 1),
    (DecompositionTag::Font, 4734, 1), (DecompositionTag::Font, 4735, 1), (DecompositionTag::Font, 4736, 1), (DecompositionTag::Font, 4737, 1),
    (DecompositionTag::Font, 4738, 1), (DecompositionTag::Font, 4739, 1), (DecompositionTag::Font, 4740, 1), (DecompositionTag::Font, 4741, 1),
    (DecompositionTag::Font, 4742, 1), (DecompositionTag::Font, 4743, 1), (DecompositionTag::Font, 4744, 1), (DecompositionTag::Font, 4745, 1),
    (DecompositionTag::Font, 4746, 1), (DecompositionTag::Font, 4747, 1), (DecompositionTag::Font, 4748, 1), (DecompositionTag::Font, 4749, 1),
    (DecompositionTag::Font, 4750, 1), (DecompositionTag::Font, 4751, 1), (DecompositionTag::Font, 4752, 1), (DecompositionTag::Font, 4753, 1),
    (DecompositionTag::Font, 4754, 1), (DecompositionTag::Font, 4755, 1), (DecompositionTag::Font, 4756, 1), (DecompositionTag::Font, 4757, 1),
    (DecompositionTag::Font, 4758, 1), (DecompositionTag::Font, 4759, 1), (DecompositionTag::Font, 4760, 1), (DecompositionTag::Font, 4761, 1),
    (DecompositionTag::Font, 4762, 1), (DecompositionTag::Font, 4763, 1), (DecompositionTag::Font, 4764, 1), (DecompositionTag::Font, 4765, 1),
    (DecompositionTag::Font, 4766, 1), (DecompositionTag::Font, 4767, 1), (DecompositionTag::Font, 4768, 1), (DecompositionTag::Font, 4769, 1),
    (DecompositionTag::Font, 4770, 1), (DecompositionTag::Font, 4771, 1), (DecompositionTag::Font, 4772, 1), (DecompositionTag::Font, 4773, 1),
    (DecompositionTag::Font, 4774, 1), (DecompositionTag::Font, 4775, 1), (DecompositionTag::Font, 4776, 1), (DecompositionTag::Font, 4777, 1),
    (DecompositionTag::Font, 4778, 1), (DecompositionTag::Font, 4779, 1), (DecompositionTag::Font, 4780, 1), (DecompositionTag::Font, 4781, 1),
    (DecompositionTag::Font, 4782, 1), (DecompositionTag::Font, 4783, 1), (DecompositionTag::Font, 4784, 1), (DecompositionTag::Font, 4785, 1),
    (DecompositionTag::Font, 4786, 1), (DecompositionTag::Font, 4787, 1), (DecompositionTag::Font, 4788, 1), (DecompositionTag::Font, 4789, 1),
    (DecompositionTag::Font, 4790, 1), (DecompositionTag::Font, 4791, 1), (DecompositionTag::Font, 4792, 1), (DecompositionTag::Font, 4793, 1),
    (DecompositionTag::Font, 4794, 1), (DecompositionTag::Font, 4795, 1), (DecompositionTag::Font, 4796, 1), (DecompositionTag::Font, 4797, 1),
    (DecompositionTag::Font, 4798, 1), (DecompositionTag::Font, 4799, 1), (DecompositionTag::Font, 4800, 1), (DecompositionTag::Font, 4801, 1),
    (DecompositionTag::Font, 4802, 1), (DecompositionTag::Font, 4803, 1), (DecompositionTag::Font, 4804, 1), (DecompositionTag::Font, 4805, 1),
    (DecompositionTag::Font, 4806, 1), (DecompositionTag::Font, 4807, 1), (DecompositionTag::Font, 4808, 1), (DecompositionTag::Font, 4809, 1),
    (DecompositionTag::Font, 4810, 1), (DecompositionTag::Font, 4811, 1), (DecompositionTag::Font, 4812, 1), (DecompositionTag::Font, 4813, 1),
    (DecompositionTag::Font, 4814, 1), (DecompositionTag::Font, 4815, 1), (DecompositionTag::Font, 4816, 1), (DecompositionTag::Font, 4817, 1),
    (DecompositionTag::Font, 4818, 1), (DecompositionTag::Font, 4819, 1), (DecompositionTag::Font, 4820, 1), (DecompositionTag::Font, 4821, 1),
    (DecompositionTag::Font, 4822, 1), (DecompositionTag::Font, 4823, 1), (DecompositionTag::Font, 4824, 1), (DecompositionTag::Font, 4825, 1),
    (DecompositionTag::Font, 4826, 1), (DecompositionTag::Font, 4827, 1), (DecompositionTag::Font, 4828, 1), (DecompositionTag::Font, 4829, 1),
    (DecompositionTag::Font, 4830, 1), (DecompositionTag::Font, 4831, 1), (DecompositionTag::Font, 4832, 1), (DecompositionTag::Font, 4833, 1),
    (DecompositionTag::Font, 4834, 1), (DecompositionTag::Font, 4835, 1), (DecompositionTag::Font, 4836, 1), (DecompositionTag::Font, 4837, 1),
    (DecompositionTag::Font, 4838, 1), (DecompositionTag::Font, 4839, 1), (DecompositionTag::Font, 4840, 1), (DecompositionTag::Font, 4841, 1),
    (DecompositionTag::Font, 4842, 1), (DecompositionTag::Font, 4843, 1), (DecompositionTag::Font, 4844, 1), (DecompositionTag::Font, 4845, 1),
    (DecompositionTag::Font, 4846, 1), (DecompositionTag::Font, 4847, 1), (DecompositionTag::Font, 4848, 1), (DecompositionTag::Font, 4849, 1),
    (DecompositionTag::Font, 4850, 1), (DecompositionTag::Font, 4851, 1), (DecompositionTag::Font, 4852, 1), (DecompositionTag::Font, 4853, 1),
    (DecompositionTag::Font, 4854, 1), (DecompositionTag::Font, 4855, 1), (DecompositionTag::Font, 4856, 1), (DecompositionTag::Font, 4857, 1),
    (DecompositionTag::Font, 4858, 1), (DecompositionTag::Font, 4859, 1), (DecompositionTag::Font, 4860, 1), (DecompositionTag::Font, 4861, 1),
    (DecompositionTag::Font, 4862, 1), (DecompositionTag::Font, 4863, 1), (DecompositionTag::Font, 4864, 1), (DecompositionTag::Font, 4865, 1),
    (DecompositionTag::Font, 4866, 1), (DecompositionTag::Font, 4867, 1), (DecompositionTag::Font, 4868, 1), (DecompositionTag::Font, 4869, 1),
    (DecompositionTag::Font, 4870, 1), (DecompositionTag::Font, 4871, 1), (DecompositionTag::Font, 4872, 1), (DecompositionTag::Font, 4873, 1),
    (DecompositionTag::Font, 4874, 1), (DecompositionTag::Font, 4875, 1), (DecompositionTag::Font, 4876, 1), (DecompositionTag::Font, 4877, 1),
    (DecompositionTag::Font, 4878, 1), (DecompositionTag::Font, 4879, 1), (DecompositionTag::Font, 4880, 1), (DecompositionTag::Font, 4881, 1),
    (DecompositionTag::Font, 4882, 1), (DecompositionTag::Font, 4883, 1), (DecompositionTag::Font, 4884, 1), (DecompositionTag::Font, 4885, 1),
    (DecompositionTag::Font, 4886, 1), (DecompositionTag::Font, 4887, 1), (DecompositionTag::Font, 4888, 1), (DecompositionTag::Font, 4889, 1),
    (DecompositionTag::Font, 4890, 1), (DecompositionTag::Font, 4891, 1), (DecompositionTag::Font, 4892, 1), (DecompositionTag::Font, 4893, 1),
    (DecompositionTag::Font, 4894, 1), (DecompositionTag::Font, 4895, 1), (DecompositionTag::Font, 4896, 1), (DecompositionTag::Font, 4897, 1),
    (DecompositionTag::Font, 4898, 1), (DecompositionTag::Font, 4899, 1), (DecompositionTag::Font, 4900, 1), (DecompositionTag::Font, 4901, 1),
    (DecompositionTag::Font, 4902, 1), (DecompositionTag::Font, 4903, 1), (DecompositionTag::Font, 4904, 1), (DecompositionTag::Font, 4905, 1),
    (DecompositionTag::Font, 4906, 1), (DecompositionTag::Font, 4907, 1), (DecompositionTag::Font, 4908, 1), (DecompositionTag::Font, 4909, 1),
    (DecompositionTag::Font, 4910, 1), (DecompositionTag::Font, 4911, 1), (DecompositionTag::Font, 4912, 1), (DecompositionTag::Font, 4913, 1),
    (DecompositionTag::Font, 4914, 1), (DecompositionTag::Font, 4915, 1), (DecompositionTag::Font, 4916, 1), (DecompositionTag::Font, 4917, 1),
    (DecompositionTag::Font, 4918, 1), (DecompositionTag::Font, 4919, 1), (DecompositionTag::Font, 4920, 1), (DecompositionTag::Font, 4921, 1),
    (DecompositionTag::Font, 4922, 1), (DecompositionTag::Font, 4923, 1), (DecompositionTag::Font, 4924, 1), (DecompositionTag::Font, 4925, 1),
    (DecompositionTag::Font, 4926, 1), (DecompositionTag::Font, 4927, 1), (DecompositionTag::Font, 4928, 1), (DecompositionTag::Font, 4929, 1),
    (DecompositionTag::Font, 4930, 1), (DecompositionTag::Font, 4931, 1), (DecompositionTag::Font, 4932, 1), (DecompositionTag::Font, 4933, 1),
    (DecompositionTag::Font, 4934, 1), (DecompositionTag::Font, 4935, 1), (DecompositionTag::Font, 4936, 1), (DecompositionTag::Font, 4937, 1),
    (DecompositionTag::Font, 4938, 1), (DecompositionTag::Font, 4939, 1), (DecompositionTag::Font, 4940, 1), (DecompositionTag::Font, 4941, 1),
    (DecompositionTag::Font, 4942, 1), (DecompositionTag::Font, 4943, 1), (DecompositionTag::Font, 4944, 1), (DecompositionTag::Font, 4945, 1),
    (DecompositionTag::Font, 4946, 1), (DecompositionTag::Font, 4947, 1), (DecompositionTag::Font, 4948, 1), (DecompositionTag::Font, 4949, 1),
    (DecompositionTag::Font, 4950, 1), (DecompositionTag::Font, 4951, 1), (DecompositionTag::Font, 4952, 1), (DecompositionTag::Font, 4953, 1),
    (DecompositionTag::Font, 4954, 1), (DecompositionTag::Font, 4955, 1), (DecompositionTag::Font, 4956, 1), (DecompositionTag::Font, 4957, 1),
    (DecompositionTag::Font, 4958, 1), (DecompositionTag::Font, 4959, 1), (DecompositionTag::Font, 4960, 1), (DecompositionTag::Font, 4961, 1),
    (DecompositionTag::Font, 4962, 1), (DecompositionTag::Font, 4963, 1), (DecompositionTag::Font, 4964, 1), (DecompositionTag::Font, 4965, 1),
    (DecompositionTag::Font, 4966, 1), (DecompositionTag::Font, 4967, 1), (DecompositionTag::Font, 4968, 1), (DecompositionTag::Font, 4969, 1),
    (DecompositionTag::Font, 4970, 1), (DecompositionTag::Font, 4971, 1), (DecompositionTag::Font, 4972, 1), (DecompositionTag::Font, 4973, 1),
    (DecompositionTag::Font, 4974, 1), (DecompositionTag::Font, 4975, 1), (DecompositionTag::Font, 4976, 1), (DecompositionTag::Font, 4977, 1),
    (DecompositionTag::Font, 4978, 1), (DecompositionTag::Font, 4979, 1), (DecompositionTag::Font, 4980, 1), (DecompositionTag::Font, 4981, 1),
    (DecompositionTag::Font, 4982, 1), (DecompositionTag::Font, 4983, 1), (DecompositionTag::Font, 4984, 1), (DecompositionTag::Font, 4985, 1),
    (DecompositionTag::Font, 4986, 1), (DecompositionTag::Font, 4987, 1), (DecompositionTag::Font, 4988, 1), (DecompositionTag::Font, 4989, 1),
    (DecompositionTag::Font, 4990, 1), (DecompositionTag::Font, 4991, 1), (DecompositionTag::Font, 4992, 1), (DecompositionTag::Font, 4993, 1),
    (DecompositionTag::Font, 4994, 1), (DecompositionTag::Font, 4995, 1), (DecompositionTag::Font, 4996, 1), (DecompositionTag::Font, 4997, 1),
    (DecompositionTag::Font, 4998, 1), (DecompositionTag::Font, 4999, 1), (DecompositionTag::Font, 5000, 1), (DecompositionTag::Font, 5001, 1),
    (DecompositionTag::Font, 5002, 1), (DecompositionTag::Font, 5003, 1), (DecompositionTag::Font, 5004, 1), (DecompositionTag::Font, 5005, 1),
    (DecompositionTag::Font, 5006, 1), (DecompositionTag::Font, 5007, 1), (DecompositionTag::Font, 5008, 1), (DecompositionTag::Font, 5009, 1),
    (DecompositionTag::Font, 5010, 1), (DecompositionTag::Font, 5011, 1), (DecompositionTag::Font, 5012, 1), (DecompositionTag::Font, 5013, 1),
    (DecompositionTag::Font, 5014, 1), (DecompositionTag::Font, 5015, 1), (DecompositionTag::Font, 5016, 1), (DecompositionTag::Font, 5017, 1),
    (DecompositionTag::Font, 5018, 1), (DecompositionTag::Font, 5019, 1), (DecompositionTag::Font, 5020, 1), (DecompositionTag::Font, 5021, 1),
    (DecompositionTag::Font, 5022, 1), (DecompositionTag::Font, 5023, 1), (DecompositionTag::Font, 5024, 1), (DecompositionTag::Font, 5025, 1),
    (DecompositionTag::Font, 5026, 1), (DecompositionTag::Font, 5027, 1), (DecompositionTag::Font, 5028, 1), (DecompositionTag::Font, 5029, 1),
    (DecompositionTag::Font, 5030, 1), (DecompositionTag::Font, 5031, 1), (DecompositionTag::Font, 5032, 1), (DecompositionTag::Font, 5033, 1),
    (DecompositionTag::Font, 5034, 1), (DecompositionTag::Font, 5035, 1), (DecompositionTag::Font, 5036, 1), (DecompositionTag::Font, 5037, 1),
    (DecompositionTag::Font, 5038, 1), (DecompositionTag::Font, 5039, 1), (DecompositionTag::Font, 5040, 1), (DecompositionTag::Font, 5041, 1),
    (DecompositionTag::Font, 5042, 1), (DecompositionTag::Font, 5043, 1), (DecompositionTag::Font, 5044, 1), (DecompositionTag::Font, 5045, 1),
    (DecompositionTag::Font, 5046, 1), (DecompositionTag::Font, 5047, 1), (DecompositionTag::Font, 5048, 1), (DecompositionTag::Font, 5049, 1),
    (DecompositionTag::Font, 5050, 1), (DecompositionTag::Font, 5051, 1), (DecompositionTag::Font, 5052, 1), (DecompositionTag::Font, 5053, 1),
    (DecompositionTag::Font, 5054, 1), (DecompositionTag::Font, 5055, 1), (DecompositionTag::Font, 5056, 1), (DecompositionTag::Font, 5057, 1),
    (DecompositionTag::Font, 5058, 1), (DecompositionTag::Font, 5059, 1), (DecompositionTag::Font, 5060, 1), (DecompositionTag::Font, 5061, 1),
    (DecompositionTag::Font, 5062, 1), (DecompositionTag::Font, 5063, 1), (DecompositionTag::Font, 5064, 1), (DecompositionTag::Font, 5065, 1),
    (DecompositionTag::Font, 5066, 1), (DecompositionTag::Font, 5067, 1), (DecompositionTag::Font, 5068, 1), (DecompositionTag::Font, 5069, 1),
    (DecompositionTag::Font, 5070, 1), (DecompositionTag::Font, 5071, 1), (DecompositionTag::Font, 5072, 1), (DecompositionTag::Font, 5073, 1),
    (DecompositionTag::Font, 5074, 1), (DecompositionTag::Font, 5075, 1), (DecompositionTag::Font, 5076, 1), (DecompositionTag::Font, 5077, 1),
    (DecompositionTag::Font, 5078, 1), (DecompositionTag::Font, 5079, 1), (DecompositionTag::Font, 5080, 1), (DecompositionTag::Font, 5081, 1),
    (DecompositionTag::Font, 5082, 1), (DecompositionTag::Font, 5083, 1), (DecompositionTag::Font, 5084, 1), (DecompositionTag::Font, 5085, 1),
    (DecompositionTag::Font, 5086, 1), (DecompositionTag::Font, 5087, 1), (DecompositionTag::Font, 5088, 1), (DecompositionTag::Font, 5089, 1),
    (DecompositionTag::Font, 5090, 1), (DecompositionTag::Font, 5091, 1), (DecompositionTag::Font, 5092, 1), (DecompositionTag::Font, 5093, 1),
    (DecompositionTag::Font, 5094, 1), (DecompositionTag::Font, 5095, 1), (DecompositionTag::Font, 5096, 1), (DecompositionTag::Font, 5097, 1),
    (DecompositionTag::Font, 5098, 1), (DecompositionTag::Font, 5099, 1), (DecompositionTag::Font, 5100, 1), (DecompositionTag::Font, 5101, 1),
    (DecompositionTag::Font, 5102, 1), (DecompositionTag::Font, 5103, 1), (DecompositionTag::Font, 5104, 1), (DecompositionTag::Font, 5105, 1),
    (DecompositionTag::Font, 5106, 1), (DecompositionTag::Font, 5107, 1), (DecompositionTag::Font, 5108, 1), (DecompositionTag::Font, 5109, 1),
    (DecompositionTag::Font, 5110, 1), (DecompositionTag::Font, 5111, 1), (DecompositionTag::Font, 5112, 1), (DecompositionTag::Font, 5113, 1),
    (DecompositionTag::Font, 5114, 1), (DecompositionTag::Font, 5115, 1), (DecompositionTag::Font, 5116, 1), (DecompositionTag::Font, 5117, 1),
    (DecompositionTag::Font, 5118, 1), (DecompositionTag::Font, 5119, 1), (DecompositionTag::Font, 5120, 1), (DecompositionTag::Font, 5121, 1),
    (DecompositionTag::Font, 5122, 1), (DecompositionTag::Font, 5123, 1), (DecompositionTag::Font, 5124, 1), (DecompositionTag::Font, 5125, 1),
    (DecompositionTag::Font, 5126, 1), (DecompositionTag::Font, 5127, 1), (DecompositionTag::Font, 5128, 1), (DecompositionTag::Super, 5129, 1),
    (DecompositionTag::Super, 5130, 1), (DecompositionTag::Super, 5131, 1), (DecompositionTag::Super, 5132, 1), (DecompositionTag::Super, 5133, 1),
    (DecompositionTag::Super, 5134, 1), (DecompositionTag::Super, 5135, 1), (DecompositionTag::Super, 5136, 1), (DecompositionTag::Super, 5137, 1),
    (DecompositionTag::Super, 5138, 1), (DecompositionTag::Super, 5139, 1), (DecompositionTag::Super, 5140, 1), (DecompositionTag::Super, 5141, 1),
    (DecompositionTag::Super, 5142, 1), (DecompositionTag::Super, 5143, 1), (DecompositionTag::Super, 5144, 1), (DecompositionTag::Super, 5145, 1),
    (DecompositionTag::Super, 5146, 1), (DecompositionTag::Super, 5147, 1), (DecompositionTag::Super, 5148, 1), (DecompositionTag::Super, 5149, 1),
    (DecompositionTag::Super, 5150, 1), (DecompositionTag::Super, 5151, 1), (DecompositionTag::Super, 5152, 1), (DecompositionTag::Super, 5153, 1),
    (DecompositionTag::Super, 5154, 1), (DecompositionTag::Super, 5155, 1), (DecompositionTag::Super, 5156, 1), (DecompositionTag::Super, 5157, 1),
    (DecompositionTag::Super, 5158, 1), (DecompositionTag::Super, 5159, 1), (DecompositionTag::Super, 5160, 1), (DecompositionTag::Super, 5161, 1),
    (DecompositionTag::Sub, 5162, 1), (DecompositionTag::Sub, 5163, 1), (DecompositionTag::Sub, 5164, 1), (DecompositionTag::Sub, 5165, 1),
    (DecompositionTag::Sub, 5166, 1), (DecompositionTag::Sub, 5167, 1), (DecompositionTag::Sub, 5168, 1), (DecompositionTag::Sub, 5169, 1),
    (DecompositionTag::Sub, 5170, 1), (DecompositionTag::Sub, 5171, 1), (DecompositionTag::Sub, 5172, 1), (DecompositionTag::Sub, 5173, 1),
    (DecompositionTag::Sub, 5174, 1), (DecompositionTag::Sub, 5175, 1), (DecompositionTag::Sub, 5176, 1), (DecompositionTag::Sub, 5177, 1),
    (DecompositionTag::Sub, 5178, 1), (DecompositionTag::Sub, 5179, 1), (DecompositionTag::Sub, 5180, 1), (DecompositionTag::Sub, 5181, 1),
    (DecompositionTag::Sub, 5182, 1), (DecompositionTag::Sub, 5183, 1), (DecompositionTag::Sub, 5184, 1), (DecompositionTag::Sub, 5185, 1),
    (DecompositionTag::Sub, 5186, 1), (DecompositionTag::Sub, 5187, 1), (DecompositionTag::Super, 5188, 1), (DecompositionTag::Super, 5189, 1),
    (DecompositionTag::Super, 5190, 1), (DecompositionTag::Font, 5191, 1), (DecompositionTag::Font, 5192, 1), (DecompositionTag::Font, 5193, 1),
    (DecompositionTag::Font, 5194, 1), (DecompositionTag::Font, 5195, 1), (DecompositionTag::Font, 5196, 1), (DecompositionTag::Font, 5197, 1),
    (DecompositionTag::Font, 5198, 1), (DecompositionTag::Font, 5199, 1), (DecompositionTag::Font, 5200, 1), (DecompositionTag::Font, 5201, 1),
    (DecompositionTag::Font, 5202, 1), (DecompositionTag::Font, 5203, 1), (DecompositionTag::Font, 5204, 1), (DecompositionTag::Font, 5205, 1),
    (DecompositionTag::Font, 5206, 1), (DecompositionTag::Font, 5207, 1), (DecompositionTag::Font, 5208, 1), (DecompositionTag::Font, 5209, 1),
    (DecompositionTag::Font, 5210, 1), (DecompositionTag::Font, 5211, 1), (DecompositionTag::Font, 5212, 1), (DecompositionTag::Font, 5213, 1),
    (DecompositionTag::Font, 5214, 1), (DecompositionTag::Font, 5215, 1), (DecompositionTag::Font, 5216, 1), (DecompositionTag::Font, 5217, 1),
    (DecompositionTag::Font, 5218, 1), (DecompositionTag::Font, 5219, 1), (DecompositionTag::Font, 5220, 1), (DecompositionTag::Font, 5221, 1),
    (DecompositionTag::Font, 5222, 1), (DecompositionTag::Font, 5223, 1), (DecompositionTag::Font, 5224, 1), (DecompositionTag::Font, 5225, 1),
    (DecompositionTag::Font, 5226, 1), (DecompositionTag::Font, 5227, 1), (DecompositionTag::Font, 5228, 1), (DecompositionTag::Font, 5229, 1),
    (DecompositionTag::Font, 5230, 1), (DecompositionTag::Font, 5231, 1), (DecompositionTag::Font, 5232, 1), (DecompositionTag::Font, 5233, 1),
    (DecompositionTag::Font, 5234, 1), (DecompositionTag::Font, 5235, 1), (DecompositionTag::Font, 5236, 1), (DecompositionTag::Font, 5237, 1),
    (DecompositionTag::Font, 5238, 1), (DecompositionTag::Font, 5239, 1), (DecompositionTag::Font, 5240, 1), (DecompositionTag::Font, 5241, 1),
    (DecompositionTag::Font, 5242, 1), (DecompositionTag::Font, 5243, 1), (DecompositionTag::Font, 5244, 1), (DecompositionTag::Font, 5245, 1),
    (DecompositionTag::Font, 5246, 1), (DecompositionTag::Font, 5247, 1), (DecompositionTag::Font, 5248, 1), (DecompositionTag::Font, 5249, 1),
    (DecompositionTag::Font, 5250, 1), (DecompositionTag::Font, 5251, 1), (DecompositionTag::Font, 5252, 1), (DecompositionTag::Font, 5253, 1),
    (DecompositionTag::Font, 5254, 1), (DecompositionTag::Font, 5255, 1), (DecompositionTag::Font, 5256, 1), (DecompositionTag::Font, 5257, 1),
    (DecompositionTag::Font, 5258, 1), (DecompositionTag::Font, 5259, 1), (DecompositionTag::Font, 5260, 1), (DecompositionTag::Font, 5261, 1),
    (DecompositionTag::Font, 5262, 1), (DecompositionTag::Font, 5263, 1), (DecompositionTag::Font, 5264, 1), (DecompositionTag::Font, 5265, 1),
    (DecompositionTag::Font, 5266, 1), (DecompositionTag::Font, 5267, 1), (DecompositionTag::Font, 5268, 1), (DecompositionTag::Font, 5269, 1),
    (DecompositionTag::Font, 5270, 1), (DecompositionTag::Font, 5271, 1), (DecompositionTag::Font, 5272, 1), (DecompositionTag::Font, 5273, 1),
    (DecompositionTag::Font, 5274, 1), (DecompositionTag::Font, 5275, 1), (DecompositionTag::Font, 5276, 1), (DecompositionTag::Font, 5277, 1),
    (DecompositionTag::Font, 5278, 1), (DecompositionTag::Font, 5279, 1), (DecompositionTag::Font, 5280, 1), (DecompositionTag::Font, 5281, 1),
    (DecompositionTag::Font, 5282, 1), (DecompositionTag::Font, 5283, 1), (DecompositionTag::Font, 5284, 1), (DecompositionTag::Font, 5285, 1),
    (DecompositionTag::Font, 5286, 1), (DecompositionTag::Font, 5287, 1), (DecompositionTag::Font, 5288, 1), (DecompositionTag::Font, 5289, 1),
    (DecompositionTag::Font, 5290, 1), (DecompositionTag::Font, 5291, 1), (DecompositionTag::Font, 5292, 1), (DecompositionTag::Font, 5293, 1),
    (DecompositionTag::Font, 5294, 1), (DecompositionTag::Font, 5295, 1), (DecompositionTag::Font, 5296, 1), (DecompositionTag::Font, 5297, 1),
    (DecompositionTag::Font, 5298, 1), (DecompositionTag::Font, 5299, 1), (DecompositionTag::Font, 5300, 1), (DecompositionTag::Font, 5301, 1),
    (DecompositionTag::Font, 5302, 1), (DecompositionTag::Font, 5303, 1), (DecompositionTag::Font, 5304, 1), (DecompositionTag::Font, 5305, 1),
    (DecompositionTag::Font, 5306, 1), (DecompositionTag::Font, 5307, 1), (DecompositionTag::Font, 5308, 1), (DecompositionTag::Font, 5309, 1),
    (DecompositionTag::Font, 5310, 1), (DecompositionTag::Font, 5311, 1), (DecompositionTag::Font, 5312, 1), (DecompositionTag::Font, 5313, 1),
    (DecompositionTag::Font, 5314, 1), (DecompositionTag::Font, 5315, 1), (DecompositionTag::Font, 5316, 1), (DecompositionTag::Font, 5317, 1),
    (DecompositionTag::Font, 5318, 1), (DecompositionTag::Font, 5319, 1), (DecompositionTag::Font, 5320, 1), (DecompositionTag::Font, 5321, 1),
    (DecompositionTag::Font, 5322, 1), (DecompositionTag::Font, 5323, 1), (DecompositionTag::Font, 5324, 1), (DecompositionTag::Font, 5325, 1),
    (DecompositionTag::Font, 5326, 1), (DecompositionTag::Font, 5327, 1), (DecompositionTag::Font, 5328, 1), (DecompositionTag::Font, 5329, 1),
    (DecompositionTag::Font, 5330, 1), (DecompositionTag::Font, 5331, 1), (DecompositionTag::Compat, 5332, 2), (DecompositionTag::Compat, 5334, 2),
    (DecompositionTag::Compat, 5336, 2), (DecompositionTag::Compat, 5338, 2), (DecompositionTag::Compat, 5340, 2), (DecompositionTag::Compat, 5342, 2),
    (DecompositionTag::Compat, 5344, 2), (DecompositionTag::Compat, 5346, 2), (DecompositionTag::Compat, 5348, 2), (DecompositionTag::Compat, 5350, 2),
    (DecompositionTag::Compat, 5352, 2), (DecompositionTag::Compat, 5354, 3), (DecompositionTag::Compat, 5357, 3), (DecompositionTag::Compat, 5360, 3),
    (DecompositionTag::Compat, 5363, 3), (DecompositionTag::Compat, 5366, 3), (DecompositionTag::Compat, 5369, 3), (DecompositionTag::Compat, 5372, 3),
    (DecompositionTag::Compat, 5375, 3), (DecompositionTag::Compat, 5378, 3), (DecompositionTag::Compat, 5381, 3), (DecompositionTag::Compat, 5384, 3),
    (DecompositionTag::Compat, 5387, 3), (DecompositionTag::Compat, 5390, 3), (DecompositionTag::Compat, 5393, 3), (DecompositionTag::Compat, 5396, 3),
    (DecompositionTag::Compat, 5399, 3), (DecompositionTag::Compat, 5402, 3), (DecompositionTag::Compat, 5405, 3), (DecompositionTag::Compat, 5408, 3),
    (DecompositionTag::Compat, 5411, 3), (DecompositionTag::Compat, 5414, 3), (DecompositionTag::Compat, 5417, 3), (DecompositionTag::Compat, 5420, 3),
    (DecompositionTag::Compat, 5423, 3), (DecompositionTag::Compat, 5426, 3), (DecompositionTag::Compat, 5429, 3), (DecompositionTag::Compat, 5432, 3),
    (DecompositionTag::Circle, 5435, 1), (DecompositionTag::Circle, 5436, 1), (DecompositionTag::Circle, 5437, 2), (DecompositionTag::Circle, 5439, 2),
    (DecompositionTag::Square, 5441, 1), (DecompositionTag::Square, 5442, 1), (DecompositionTag::Square, 5443, 1), (DecompositionTag::Square, 5444, 1),
    (DecompositionTag::Square, 5445, 1), (DecompositionTag::Square, 5446, 1), (DecompositionTag::Square, 5447, 1), (DecompositionTag::Square, 5448, 1),
    (DecompositionTag::Square, 5449, 1), (DecompositionTag::Square, 5450, 1), (DecompositionTag::Square, 5451, 1), (DecompositionTag::Square, 5452, 1),
    (DecompositionTag::Square, 5453, 1), (DecompositionTag::Square, 5454, 1), (DecompositionTag::Square, 5455, 1), (DecompositionTag::Square, 5456, 1),
    (DecompositionTag::Square, 5457, 1), (DecompositionTag::Square, 5458, 1), (DecompositionTag::Square, 5459, 1), (DecompositionTag::Square, 5460, 1),
    (DecompositionTag::Square, 5461, 1), (DecompositionTag::Square, 5462, 1), (DecompositionTag::Square, 5463, 1), (DecompositionTag::Square, 5464, 1),
    (DecompositionTag::Square, 5465, 1), (DecompositionTag::Square, 5466, 1), (DecompositionTag::Square, 5467, 2), (DecompositionTag::Square, 5469, 2),
    (DecompositionTag::Square, 5471, 2), (DecompositionTag::Square, 5473, 2), (DecompositionTag::Square, 5475, 3), (DecompositionTag::Square, 5478, 2),
    (DecompositionTag::Super, 5480, 2), (DecompositionTag::Super, 5482, 2), (DecompositionTag::Super, 5484, 2), (DecompositionTag::Square, 5486, 2),
    (DecompositionTag::Square, 5488, 2), (DecompositionTag::Square, 5490, 2), (DecompositionTag::Square, 5492, 1), (DecompositionTag::Square, 5493, 1),
    (DecompositionTag::Square, 5494, 1), (DecompositionTag::Square, 5495, 1), (DecompositionTag::Square, 5496, 1), (DecompositionTag::Square, 5497, 1),
    (DecompositionTag::Square, 5498, 1), (DecompositionTag::Square, 5499, 1), (DecompositionTag::Square, 5500, 1), (DecompositionTag::Square, 5501, 1),
    (DecompositionTag::Square, 5502, 1), (DecompositionTag::Square, 5503, 1), (DecompositionTag::Square, 5504, 1), (DecompositionTag::Square, 5505, 1),
    (DecompositionTag::Square, 5506, 1), (DecompositionTag::Square, 5507, 1), (DecompositionTag::Square, 5508, 1), (DecompositionTag::Square, 5509, 1),
    (DecompositionTag::Square, 5510, 1), (DecompositionTag::Square, 5511, 1), (DecompositionTag::Square, 5512, 1), (DecompositionTag::Square, 5513, 1),
    (DecompositionTag::Square, 5514, 1), (DecompositionTag::Square, 5515, 1), (DecompositionTag::Square, 5516, 1), (DecompositionTag::Square, 5517, 1),
    (DecompositionTag::Square, 5518, 1), (DecompositionTag::Square, 5519, 1), (DecompositionTag::Square, 5520, 1), (DecompositionTag::Square, 5521, 1),
    (DecompositionTag::Square, 5522, 1), (DecompositionTag::Square, 5523, 1), (DecompositionTag::Square, 5524, 1), (DecompositionTag::Square, 5525, 1),
    (DecompositionTag::Square, 5526, 1), (DecompositionTag::Square, 5527, 1), (DecompositionTag::Square, 5528, 1), (DecompositionTag::Square, 5529, 1),
    (DecompositionTag::Square, 5530, 1), (DecompositionTag::Square, 5531, 1), (DecompositionTag::Square, 5532, 1), (DecompositionTag::Square, 5533, 1),
    (DecompositionTag::Square, 5534, 1), (DecompositionTag::Square, 5535, 1), (DecompositionTag::Square, 5536, 1), (DecompositionTag::Compat, 5537, 3),
    (DecompositionTag::Compat, 5540, 3), (DecompositionTag::Compat, 5543, 3), (DecompositionTag::Compat, 5546, 3), (DecompositionTag::Compat, 5549, 3),
    (DecompositionTag::Compat, 5552, 3), (DecompositionTag::Compat, 5555, 3), (DecompositionTag::Compat, 5558, 3), (DecompositionTag::Compat, 5561, 3),
    (DecompositionTag::Circle, 5564, 1), (DecompositionTag::Circle, 5565, 1), (DecompositionTag::Font, 5566, 1), (DecompositionTag::Font, 5567, 1),
    (DecompositionTag::Font, 5568, 1), (DecompositionTag::Font, 5569, 1), (DecompositionTag::Font, 5570, 1), (DecompositionTag::Font, 5571, 1),
    (DecompositionTag::Font, 5572, 1), (DecompositionTag::Font, 5573, 1), (DecompositionTag::Font, 5574, 1), (DecompositionTag::Font, 5575, 1),
];

#[rustfmt::skip]
pub(crate) static COMPAT_DATA: [u32; 5576] = [
    0x0020, 0x0020, 0x0308, 0x0061, 0x0020, 0x0304, 0x0032, 0x0033, 0x0020, 0x0301,
    0x03BC, 0x0020, 0x0327, 0x0031, 0x006F, 0x0031, 0x2044, 0x0034, 0x0031, 0x2044,
    0x0032, 0x0033, 0x2044, 0x0034, 0x0049, 0x004A, 0x0069, 0x006A, 0x004C, 0x00B7,
    0x006C, 0x00B7, 0x02BC, 0x006E, 0x0073, 0x0044, 0x017D, 0x0044, 0x017E, 0x0064,
    0x017E, 0x004C, 0x004A, 0x004C, 0x006A, 0x006C, 0x006A, 0x004E, 0x004A, 0x004E,
    0x006A, 0x006E, 0x006A, 0x0044, 0x005A, 0x0044, 0x007A, 0x0064, 0x007A, 0x0068,
    0x0266, 0x006A, 0x0072, 0x0279, 0x027B, 0x0281, 0x0077, 0x0079, 0x0020, 0x0306,
    0x0020, 0x0307, 0x0020, 0x030A, 0x0020, 0x0328, 0x0020, 0x0303, 0x0020, 0x030B,
    0x0263, 0x006C, 0x0073, 0x0078, 0x0295, 0x0020, 0x0345, 0x0020, 0x0301, 0x03B2,
    0x03B8, 0x03A5, 0x03C6, 0x03C0, 0x03BA, 0x03C1, 0x03C2, 0x0398, 0x03B5, 0x03A3,
    0x0565, 0x0582, 0x0627, 0x0674, 0x0648, 0x0674, 0x06C7, 0x0674, 0x064A, 0x0674,
    0x0E4D, 0x0E32, 0x0ECD, 0x0EB2, 0x0EAB, 0x0E99, 0x0EAB, 0x0EA1, 0x0F0B, 0x0FB2,
    0x0F81, 0x0FB3, 0x0F81, 0x10DC, 0x0041, 0x00C6, 0x0042, 0x0044, 0x0045, 0x018E,
    0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0222,
    0x0050, 0x0052, 0x0054, 0x0055, 0x0057, 0x0061, 0x0250, 0x0251, 0x1D02, 0x0062,
    0x0064, 0x0065, 0x0259, 0x025B, 0x025C, 0x0067, 0x006B, 0x006D, 0x014B, 0x006F,
    0x0254, 0x1D16, 0x1D17, 0x0070, 0x0074, 0x0075, 0x1D1D, 0x026F, 0x0076, 0x1D25,
    0x03B2, 0x03B3, 0x03B4, 0x03C6, 0x03C7, 0x0069, 0x0072, 0x0075, 0x0076, 0x03B2,
    0x03B3, 0x03C1, 0x03C6, 0x03C7, 0x043D, 0x0252, 0x0063, 0x0255, 0x00F0, 0x025C,
    0x0066, 0x025F, 0x0261, 0x0265, 0x0268, 0x0269, 0x026A, 0x1D7B, 0x029D, 0x026D,
    0x1D85, 0x029F, 0x0271, 0x0270, 0x0272, 0x0273, 0x0274, 0x0275, 0x0278, 0x0282,
    0x0283, 0x01AB, 0x0289, 0x028A, 0x1D1C, 0x028B, 0x028C, 0x007A, 0x0290, 0x0291,
    0x0292, 0x03B8, 0x0061, 0x02BE, 0x0020, 0x0313, 0x0020, 0x0313, 0x0020, 0x0342,
    0x0020, 0x0314, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020, 0x0020,
    0x0020, 0x2010, 0x0020, 0x0333, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E, 0x002E,
    0x0020, 0x2032, 0x2032, 0x2032, 0x2032, 0x2032, 0x2035, 0x2035, 0x2035, 0x2035,
    0x2035, 0x0021, 0x0021, 0x0020, 0x0305, 0x003F, 0x003F, 0x003F, 0x0021, 0x0021,
    0x003F, 0x2032, 0x2032, 0x2032, 0x2032, 0x0020, 0x0030, 0x0069, 0x0034, 0x0035,
    0x0036, 0x0037, 0x0038, 0x0039, 0x002B, 0x2212, 0x003D, 0x0028, 0x0029, 0x006E,
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039,
    0x002B, 0x2212, 0x003D, 0x0028, 0x0029, 0x0061, 0x0065, 0x006F, 0x0078, 0x0259,
    0x0068, 0x006B, 0x006C, 0x006D, 0x006E, 0x0070, 0x0073, 0x0074, 0x0052, 0x0073,
    0x0061, 0x002F, 0x0063, 0x0061, 0x002F, 0x0073, 0x0043, 0x00B0, 0x0043, 0x0063,
    0x002F, 0x006F, 0x0063, 0x002F, 0x0075, 0x0190, 0x00B0, 0x0046, 0x0067, 0x0048,
    0x0048, 0x0048, 0x0068, 0x0127, 0x0049, 0x0049, 0x004C, 0x006C, 0x004E, 0x004E,
    0x006F, 0x0050, 0x0051, 0x0052, 0x0052, 0x0052, 0x0053, 0x004D, 0x0054, 0x0045,
    0x004C, 0x0054, 0x004D, 0x005A, 0x005A, 0x0042, 0x0043, 0x0065, 0x0045, 0x0046,
    0x004D, 0x006F, 0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x0069, 0x0046, 0x0041, 0x0058,
    0x03C0, 0x03B3, 0x0393, 0x03A0, 0x2211, 0x0044, 0x0064, 0x0065, 0x0069, 0x006A,
    0x0031, 0x2044, 0x0037, 0x0031, 0x2044, 0x0039, 0x0031, 0x2044, 0x0031, 0x0030,
    0x0031, 0x2044, 0x0033, 0x0032, 0x2044, 0x0033, 0x0031, 0x2044, 0x0035, 0x0032,
    0x2044, 0x0035, 0x0033, 0x2044, 0x0035, 0x0034, 0x2044, 0x0035, 0x0031, 0x2044,
    0x0036, 0x0035, 0x2044, 0x0036, 0x0031, 0x2044, 0x0038, 0x0033, 0x2044, 0x0038,
    0x0035, 0x2044, 0x0038, 0x0037, 0x2044, 0x0038, 0x0031, 0x2044, 0x0049, 0x0049,
    0x0049, 0x0049, 0x0049, 0x0049, 0x0049, 0x0056, 0x0056, 0x0056, 0x0049, 0x0056,
    0x0049, 0x0049, 0x0056, 0x0049, 0x0049, 0x0049, 0x0049, 0x0058, 0x0058, 0x0058,
    0x0049, 0x0058, 0x0049, 0x0049, 0x004C, 0x0043, 0x0044, 0x004D, 0x0069, 0x0069,
    0x0069, 0x0069, 0x0069, 0x0069, 0x0069, 0x0076, 0x0076, 0x0076, 0x0069, 0x0076,
    0x0069, 0x0069, 0x0076, 0x0069, 0x0069, 0x0069, 0x0069, 0x0078, 0x0078, 0x0078,
    0x0069, 0x0078, 0x0069, 0x0069, 0x006C, 0x0063, 0x0064, 0x006D, 0x0030, 0x2044,
    0x0033, 0x222B, 0x222B, 0x222B, 0x222B, 0x222B, 0x222E, 0x222E, 0x222E, 0x222E,
    0x222E, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039,
    0x0031, 0x0030, 0x0031, 0x0031, 0x0031, 0x0032, 0x0031, 0x0033, 0x0031, 0x0034,
    0x0031, 0x0035, 0x0031, 0x0036, 0x0031, 0x0037, 0x0031, 0x0038, 0x0031, 0x0039,
    0x0032, 0x0030, 0x0028, 0x0031, 0x0029, 0x0028, 0x0032, 0x0029, 0x0028, 0x0033,
    0x0029, 0x0028, 0x0034, 0x0029, 0x0028, 0x0035, 0x0029, 0x0028, 0x0036, 0x0029,
    0x0028, 0x0037, 0x0029, 0x0028, 0x0038, 0x0029, 0x0028, 0x0039, 0x0029, 0x0028,
    0x0031, 0x0030, 0x0029, 0x0028, 0x0031, 0x0031, 0x0029, 0x0028, 0x0031, 0x0032,
    0x0029, 0x0028, 0x0031, 0x0033, 0x0029, 0x0028, 0x0031, 0x0034, 0x0029, 0x0028,
    0x0031, 0x0035, 0x0029, 0x0028, 0x0031, 0x0036, 0x0029, 0x0028, 0x0031, 0x0037,
    0x0029, 0x0028, 0x0031, 0x0038, 0x0029, 0x0028, 0x0031, 0x0039, 0x0029, 0x0028,
    0x0032, 0x0030, 0x0029, 0x0031, 0x002E, 0x0032, 0x002E, 0x0033, 0x002E, 0x0034,
    0x002E, 0x0035, 0x002E, 0x0036, 0x002E, 0x0037, 0x002E, 0x0038, 0x002E, 0x0039,
    0x002E, 0x0031, 0x0030, 0x002E, 0x0031, 0x0031, 0x002E, 0x0031, 0x0032, 0x002E,
    0x0031, 0x0033, 0x002E, 0x0031, 0x0034, 0x002E, 0x0031, 0x0035, 0x002E, 0x0031,
    0x0036, 0x002E, 0x0031, 0x0037, 0x002E, 0x0031, 0x0038, 0x002E, 0x0031, 0x0039,
    0x002E, 0x0032, 0x0030, 0x002E, 0x0028, 0x0061, 0x0029, 0x0028, 0x0062, 0x0029,
    0x0028, 0x0063, 0x0029, 0x0028, 0x0064, 0x0029, 0x0028, 0x0065, 0x0029, 0x0028,
    0x0066, 0x0029, 0x0028, 0x0067, 0x0029, 0x0028, 0x0068, 0x0029, 0x0028, 0x0069,
    0x0029, 0x0028, 0x006A, 0x0029, 0x0028, 0x006B, 0x0029, 0x0028, 0x006C, 0x0029,
    0x0028, 0x006D, 0x0029, 0x0028, 0x006E, 0x0029, 0x0028, 0x006F, 0x0029, 0x0028,
    0x0070, 0x0029, 0x0028, 0x0071, 0x0029, 0x0028, 0x0072, 0x0029, 0x0028, 0x0073,
    0x0029, 0x0028, 0x0074, 0x0029, 0x0028, 0x0075, 0x0029, 0x0028, 0x0076, 0x0029,
    0x0028, 0x0077, 0x0029, 0x0028, 0x0078, 0x0029, 0x0028, 0x0079, 0x0029, 0x0028,
    0x007A, 0x0029, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048,
    0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052,
    0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062,
    0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C,
    0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076,
    0x0077, 0x0078, 0x0079, 0x007A, 0x0030, 0x222B, 0x222B, 0x222B, 0x222B, 0x003A,
    0x003A, 0x003D, 0x003D, 0x003D, 0x003D, 0x003D, 0x003D, 0x006A, 0x0056, 0x2D61,
    0x6BCD, 0x9F9F, 0x4E00, 0x4E28, 0x4E36, 0x4E3F, 0x4E59, 0x4E85, 0x4E8C, 0x4EA0,
    0x4EBA, 0x513F, 0x5165, 0x516B, 0x5182, 0x5196, 0x51AB, 0x51E0, 0x51F5, 0x5200,
    0x529B, 0x52F9, 0x5315, 0x531A, 0x5338, 0x5341, 0x535C, 0x5369, 0x5382, 0x53B6,
    0x53C8, 0x53E3, 0x56D7, 0x571F, 0x58EB, 0x5902, 0x590A, 0x5915, 0x5927, 0x5973,
    0x5B50, 0x5B80, 0x5BF8, 0x5C0F, 0x5C22, 0x5C38, 0x5C6E, 0x5C71, 0x5DDB, 0x5DE5,
    0x5DF1, 0x5DFE, 0x5E72, 0x5E7A, 0x5E7F, 0x5EF4, 0x5EFE, 0x5F0B, 0x5F13, 0x5F50,
    0x5F61, 0x5F73, 0x5FC3, 0x6208, 0x6236, 0x624B, 0x652F, 0x6534, 0x6587, 0x6597,
    0x65A4, 0x65B9, 0x65E0, 0x65E5, 0x66F0, 0x6708, 0x6728, 0x6B20, 0x6B62, 0x6B79,
    0x6BB3, 0x6BCB, 0x6BD4, 0x6BDB, 0x6C0F, 0x6C14, 0x6C34, 0x706B, 0x722A, 0x7236,
    0x723B, 0x723F, 0x7247, 0x7259, 0x725B, 0x72AC, 0x7384, 0x7389, 0x74DC, 0x74E6,
    0x7518, 0x751F, 0x7528, 0x7530, 0x758B, 0x7592, 0x7676, 0x767D, 0x76AE, 0x76BF,
    0x76EE, 0x77DB, 0x77E2, 0x77F3, 0x793A, 0x79B8, 0x79BE, 0x7A74, 0x7ACB, 0x7AF9,
    0x7C73, 0x7CF8, 0x7F36, 0x7F51, 0x7F8A, 0x7FBD, 0x8001, 0x800C, 0x8012, 0x8033,
    0x807F, 0x8089, 0x81E3, 0x81EA, 0x81F3, 0x81FC, 0x820C, 0x821B, 0x821F, 0x826E,
    0x8272, 0x8278, 0x864D, 0x866B, 0x8840, 0x884C, 0x8863, 0x897E, 0x898B, 0x89D2,
    0x8A00, 0x8C37, 0x8C46, 0x8C55, 0x8C78, 0x8C9D, 0x8D64, 0x8D70, 0x8DB3, 0x8EAB,
    0x8ECA, 0x8F9B, 0x8FB0, 0x8FB5, 0x9091, 0x9149, 0x91C6, 0x91CC, 0x91D1, 0x9577,
    0x9580, 0x961C, 0x96B6, 0x96B9, 0x96E8, 0x9751, 0x975E, 0x9762, 0x9769, 0x97CB,
    0x97ED, 0x97F3, 0x9801, 0x98A8, 0x98DB, 0x98DF, 0x9996, 0x9999, 0x99AC, 0x9AA8,
    0x9AD8, 0x9ADF, 0x9B25, 0x9B2F, 0x9B32, 0x9B3C, 0x9B5A, 0x9CE5, 0x9E75, 0x9E7F,
    0x9EA5, 0x9EBB, 0x9EC3, 0x9ECD, 0x9ED1, 0x9EF9, 0x9EFD, 0x9F0E, 0x9F13, 0x9F20,
    0x9F3B, 0x9F4A, 0x9F52, 0x9F8D, 0x9F9C, 0x9FA0, 0x0020, 0x3012, 0x5341, 0x5344,
    0x5345, 0x0020, 0x3099, 0x0020, 0x309A, 0x3088, 0x308A, 0x30B3, 0x30C8, 0x1100,
    0x1101, 0x11AA, 0x1102, 0x11AC, 0x11AD, 0x1103, 0x1104, 0x1105, 0x11B0, 0x11B1,
    0x11B2, 0x11B3, 0x11B4, 0x11B5, 0x111A, 0x1106, 0x1107, 0x1108, 0x1121, 0x1109,
    0x110A, 0x110B, 0x110C, 0x110D, 0x110E, 0x110F, 0x1110, 0x1111, 0x1112, 0x1161,
    0x1162, 0x1163, 0x1164, 0x1165, 0x1166, 0x1167, 0x1168, 0x1169, 0x116A, 0x116B,
    0x116C, 0x116D, 0x116E, 0x116F, 0x1170, 0x1171, 0x1172, 0x1173, 0x1174, 0x1175,
    0x1160, 0x1114, 0x1115, 0x11C7, 0x11C8, 0x11CC, 0x11CE, 0x11D3, 0x11D7, 0x11D9,
    0x111C, 0x11DD, 0x11DF, 0x111D, 0x111E, 0x1120, 0x1122, 0x1123, 0x1127, 0x1129,
    0x112B, 0x112C, 0x112D, 0x112E, 0x112F, 0x1132, 0x1136, 0x1140, 0x1147, 0x114C,
    0x11F1, 0x11F2, 0x1157, 0x1158, 0x1159, 0x1184, 0x1185, 0x1188, 0x1191, 0x1192,
    0x1194, 0x119E, 0x11A1, 0x4E00, 0x4E8C, 0x4E09, 0x56DB, 0x4E0A, 0x4E2D, 0x4E0B,
    0x7532, 0x4E59, 0x4E19, 0x4E01, 0x5929, 0x5730, 0x4EBA, 0x0028, 0x1100, 0x0029,
    0x0028, 0x1102, 0x0029, 0x0028, 0x1103, 0x0029, 0x0028, 0x1105, 0x0029, 0x0028,
    0x1106, 0x0029, 0x0028, 0x1107, 0x0029, 0x0028, 0x1109, 0x0029, 0x0028, 0x110B,
    0x0029, 0x0028, 0x110C, 0x0029, 0x0028, 0x110E, 0x0029, 0x0028, 0x110F, 0x0029,
    0x0028, 0x1110, 0x0029, 0x0028, 0x1111, 0x0029, 0x0028, 0x1112, 0x0029, 0x0028,
    0x1100, 0x1161, 0x0029, 0x0028, 0x1102, 0x1161, 0x0029, 0x0028, 0x1103, 0x1161,
    0x0029, 0x0028, 0x1105, 0x1161, 0x0029, 0x0028, 0x1106, 0x1161, 0x0029, 0x0028,
    0x1107, 0x1161, 0x0029, 0x0028, 0x1109, 0x1161, 0x0029, 0x0028, 0x110B, 0x1161,
    0x0029, 0x0028, 0x110C, 0x1161, 0x0029, 0x0028, 0x110E, 0x1161, 0x0029, 0x0028,
    0x110F, 0x1161, 0x0029, 0x0028, 0x1110, 0x1161, 0x0029, 0x0028, 0x1111, 0x1161,
    0x0029, 0x0028, 0x1112, 0x1161, 0x0029, 0x0028, 0x110C, 0x116E, 0x0029, 0x0028,
    0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x0029, 0x0028, 0x110B, 0x1169, 0x1112,
    0x116E, 0x0029, 0x0028, 0x4E00, 0x0029, 0x0028, 0x4E8C, 0x0029, 0x0028, 0x4E09,
    0x0029, 0x0028, 0x56DB, 0x0029, 0x0028, 0x4E94, 0x0029, 0x0028, 0x516D, 0x0029,
    0x0028, 0x4E03, 0x0029, 0x0028, 0x516B, 0x0029, 0x0028, 0x4E5D, 0x0029, 0x0028,
    0x5341, 0x0029, 0x0028, 0x6708, 0x0029, 0x0028, 0x706B, 0x0029, 0x0028, 0x6C34,
    0x0029, 0x0028, 0x6728, 0x0029, 0x0028, 0x91D1, 0x0029, 0x0028, 0x571F, 0x0029,
    0x0028, 0x65E5, 0x0029, 0x0028, 0x682A, 0x0029, 0x0028, 0x6709, 0x0029, 0x0028,
    0x793E, 0x0029, 0x0028, 0x540D, 0x0029, 0x0028, 0x7279, 0x0029, 0x0028, 0x8CA1,
    0x0029, 0x0028, 0x795D, 0x0029, 0x0028, 0x52B4, 0x0029, 0x0028, 0x4EE3, 0x0029,
    0x0028, 0x547C, 0x0029, 0x0028, 0x5B66, 0x0029, 0x0028, 0x76E3, 0x0029, 0x0028,
    0x4F01, 0x0029, 0x0028, 0x8CC7, 0x0029, 0x0028, 0x5354, 0x0029, 0x0028, 0x796D,
    0x0029, 0x0028, 0x4F11, 0x0029, 0x0028, 0x81EA, 0x0029, 0x0028, 0x81F3, 0x0029,
    0x554F, 0x5E7C, 0x6587, 0x7B8F, 0x0050, 0x0054, 0x0045, 0x0032, 0x0031, 0x0032,
    0x0032, 0x0032, 0x0033, 0x0032, 0x0034, 0x0032, 0x0035, 0x0032, 0x0036, 0x0032,
    0x0037, 0x0032, 0x0038, 0x0032, 0x0039, 0x0033, 0x0030, 0x0033, 0x0031, 0x0033,
    0x0032, 0x0033, 0x0033, 0x0033, 0x0034, 0x0033, 0x0035, 0x1100, 0x1102, 0x1103,
    0x1105, 0x1106, 0x1107, 0x1109, 0x110B, 0x110C, 0x110E, 0x110F, 0x1110, 0x1111,
    0x1112, 0x1100, 0x1161, 0x1102, 0x1161, 0x1103, 0x1161, 0x1105, 0x1161, 0x1106,
    0x1161, 0x1107, 0x1161, 0x1109, 0x1161, 0x110B, 0x1161, 0x110C, 0x1161, 0x110E,
    0x1161, 0x110F, 0x1161, 0x1110, 0x1161, 0x1111, 0x1161, 0x1112, 0x1161, 0x110E,
    0x1161, 0x11B7, 0x1100, 0x1169, 0x110C, 0x116E, 0x110B, 0x1174, 0x110B, 0x116E,
    0x4E00, 0x4E8C, 0x4E09, 0x56DB, 0x4E94, 0x516D, 0x4E03, 0x516B, 0x4E5D, 0x5341,
    0x6708, 0x706B, 0x6C34, 0x6728, 0x91D1, 0x571F, 0x65E5, 0x682A, 0x6709, 0x793E,
    0x540D, 0x7279, 0x8CA1, 0x795D, 0x52B4, 0x79D8, 0x7537, 0x5973, 0x9069, 0x512A,
    0x5370, 0x6CE8, 0x9805, 0x4F11, 0x5199, 0x6B63, 0x4E0A, 0x4E2D, 0x4E0B, 0x5DE6,
    0x53F3, 0x533B, 0x5B97, 0x5B66, 0x76E3, 0x4F01, 0x8CC7, 0x5354, 0x591C, 0x0033,
    0x0036, 0x0033, 0x0037, 0x0033, 0x0038, 0x0033, 0x0039, 0x0034, 0x0030, 0x0034,
    0x0031, 0x0034, 0x0032, 0x0034, 0x0033, 0x0034, 0x0034, 0x0034, 0x0035, 0x0034,
    0x0036, 0x0034, 0x0037, 0x0034, 0x0038, 0x0034, 0x0039, 0x0035, 0x0030, 0x0031,
    0x6708, 0x0032, 0x6708, 0x0033, 0x6708, 0x0034, 0x6708, 0x0035, 0x6708, 0x0036,
    0x6708, 0x0037, 0x6708, 0x0038, 0x6708, 0x0039, 0x6708, 0x0031, 0x0030, 0x6708,
    0x0031, 0x0031, 0x6708, 0x0031, 0x0032, 0x6708, 0x0048, 0x0067, 0x0065, 0x0072,
    0x0067, 0x0065, 0x0056, 0x004C, 0x0054, 0x0044, 0x30A2, 0x30A4, 0x30A6, 0x30A8,
    0x30AA, 0x30AB, 0x30AD, 0x30AF, 0x30B1, 0x30B3, 0x30B5, 0x30B7, 0x30B9, 0x30BB,
    0x30BD, 0x30BF, 0x30C1, 0x30C4, 0x30C6, 0x30C8, 0x30CA, 0x30CB, 0x30CC, 0x30CD,
    0x30CE, 0x30CF, 0x30D2, 0x30D5, 0x30D8, 0x30DB, 0x30DE, 0x30DF, 0x30E0, 0x30E1,
    0x30E2, 0x30E4, 0x30E6, 0x30E8, 0x30E9, 0x30EA, 0x30EB, 0x30EC, 0x30ED, 0x30EF,
    0x30F0, 0x30F1, 0x30F2, 0x4EE4, 0x548C, 0x30A2, 0x30D1, 0x30FC, 0x30C8, 0x30A2,
    0x30EB, 0x30D5, 0x30A1, 0x30A2, 0x30F3, 0x30DA, 0x30A2, 0x30A2, 0x30FC, 0x30EB,
    0x30A4, 0x30CB, 0x30F3, 0x30B0, 0x30A4, 0x30F3, 0x30C1, 0x30A6, 0x30A9, 0x30F3,
    0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C9, 0x30A8, 0x30FC, 0x30AB, 0x30FC, 0x30AA,
    0x30F3, 0x30B9, 0x30AA, 0x30FC, 0x30E0, 0x30AB, 0x30A4, 0x30EA, 0x30AB, 0x30E9,
    0x30C3, 0x30C8, 0x30AB, 0x30ED, 0x30EA, 0x30FC, 0x30AC, 0x30ED, 0x30F3, 0x30AC,
    0x30F3, 0x30DE, 0x30AE, 0x30AC, 0x30AE, 0x30CB, 0x30FC, 0x30AD, 0x30E5, 0x30EA,
    0x30FC, 0x30AE, 0x30EB, 0x30C0, 0x30FC, 0x30AD, 0x30ED, 0x30AD, 0x30ED, 0x30B0,
    0x30E9, 0x30E0, 0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB, 0x30AD, 0x30ED,
    0x30EF, 0x30C3, 0x30C8, 0x30B0, 0x30E9, 0x30E0, 0x30B0, 0x30E9, 0x30E0, 0x30C8,
    0x30F3, 0x30AF, 0x30EB, 0x30BC, 0x30A4, 0x30ED, 0x30AF, 0x30ED, 0x30FC, 0x30CD,
    0x30B1, 0x30FC, 0x30B9, 0x30B3, 0x30EB, 0x30CA, 0x30B3, 0x30FC, 0x30DD, 0x30B5,
    0x30A4, 0x30AF, 0x30EB, 0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0, 0x30B7, 0x30EA,
    0x30F3, 0x30B0, 0x30BB, 0x30F3, 0x30C1, 0x30BB, 0x30F3, 0x30C8, 0x30C0, 0x30FC,
    0x30B9, 0x30C7, 0x30B7, 0x30C9, 0x30EB, 0x30C8, 0x30F3, 0x30CA, 0x30CE, 0x30CE,
    0x30C3, 0x30C8, 0x30CF, 0x30A4, 0x30C4, 0x30D1, 0x30FC, 0x30BB, 0x30F3, 0x30C8,
    0x30D1, 0x30FC, 0x30C4, 0x30D0, 0x30FC, 0x30EC, 0x30EB, 0x30D4, 0x30A2, 0x30B9,
    0x30C8, 0x30EB, 0x30D4, 0x30AF, 0x30EB, 0x30D4, 0x30B3, 0x30D3, 0x30EB, 0x30D5,
    0x30A1, 0x30E9, 0x30C3, 0x30C9, 0x30D5, 0x30A3, 0x30FC, 0x30C8, 0x30D6, 0x30C3,
    0x30B7, 0x30A7, 0x30EB, 0x30D5, 0x30E9, 0x30F3, 0x30D8, 0x30AF, 0x30BF, 0x30FC,
    0x30EB, 0x30DA, 0x30BD, 0x30DA, 0x30CB, 0x30D2, 0x30D8, 0x30EB, 0x30C4, 0x30DA,
    0x30F3, 0x30B9, 0x30DA, 0x30FC, 0x30B8, 0x30D9, 0x30FC, 0x30BF, 0x30DD, 0x30A4,
    0x30F3, 0x30C8, 0x30DC, 0x30EB, 0x30C8, 0x30DB, 0x30F3, 0x30DD, 0x30F3, 0x30C9,
    0x30DB, 0x30FC, 0x30EB, 0x30DB, 0x30FC, 0x30F3, 0x30DE, 0x30A4, 0x30AF, 0x30ED,
    0x30DE, 0x30A4, 0x30EB, 0x30DE, 0x30C3, 0x30CF, 0x30DE, 0x30EB, 0x30AF, 0x30DE,
    0x30F3, 0x30B7, 0x30E7, 0x30F3, 0x30DF, 0x30AF, 0x30ED, 0x30F3, 0x30DF, 0x30EA,
    0x30DF, 0x30EA, 0x30D0, 0x30FC, 0x30EB, 0x30E1, 0x30AC, 0x30E1, 0x30AC, 0x30C8,
    0x30F3, 0x30E1, 0x30FC, 0x30C8, 0x30EB, 0x30E4, 0x30FC, 0x30C9, 0x30E4, 0x30FC,
    0x30EB, 0x30E6, 0x30A2, 0x30F3, 0x30EA, 0x30C3, 0x30C8, 0x30EB, 0x30EA, 0x30E9,
    0x30EB, 0x30D4, 0x30FC, 0x30EB, 0x30FC, 0x30D6, 0x30EB, 0x30EC, 0x30E0, 0x30EC,
    0x30F3, 0x30C8, 0x30B2, 0x30F3, 0x30EF, 0x30C3, 0x30C8, 0x0030, 0x70B9, 0x0031,
    0x70B9, 0x0032, 0x70B9, 0x0033, 0x70B9, 0x0034, 0x70B9, 0x0035, 0x70B9, 0x0036,
    0x70B9, 0x0037, 0x70B9, 0x0038, 0x70B9, 0x0039, 0x70B9, 0x0031, 0x0030, 0x70B9,
    0x0031, 0x0031, 0x70B9, 0x0031, 0x0032, 0x70B9, 0x0031, 0x0033, 0x70B9, 0x0031,
    0x0034, 0x70B9, 0x0031, 0x0035, 0x70B9, 0x0031, 0x0036, 0x70B9, 0x0031, 0x0037,
    0x70B9, 0x0031, 0x0038, 0x70B9, 0x0031, 0x0039, 0x70B9, 0x0032, 0x0030, 0x70B9,
    0x0032, 0x0031, 0x70B9, 0x0032, 0x0032, 0x70B9, 0x0032, 0x0033, 0x70B9, 0x0032,
    0x0034, 0x70B9, 0x0068, 0x0050, 0x0061, 0x0064, 0x0061, 0x0041, 0x0055, 0x0062,
    0x0061, 0x0072, 0x006F, 0x0056, 0x0070, 0x0063, 0x0064, 0x006D, 0x0064, 0x006D,
    0x00B2, 0x0064, 0x006D, 0x00B3, 0x0049, 0x0055, 0x5E73, 0x6210, 0x662D, 0x548C,
    0x5927, 0x6B63, 0x660E, 0x6CBB, 0x682A, 0x5F0F, 0x4F1A, 0x793E, 0x0070, 0x0041,
    0x006E, 0x0041, 0x03BC, 0x0041, 0x006D, 0x0041, 0x006B, 0x0041, 0x004B, 0x0042,
    0x004D, 0x0042, 0x0047, 0x0042, 0x0063, 0x0061, 0x006C, 0x006B, 0x0063, 0x0061,
    0x006C, 0x0070, 0x0046, 0x006E, 0x0046, 0x03BC, 0x0046, 0x03BC, 0x0067, 0x006D,
    0x0067, 0x006B, 0x0067, 0x0048, 0x007A, 0x006B, 0x0048, 0x007A, 0x004D, 0x0048,
    0x007A, 0x0047, 0x0048, 0x007A, 0x0054, 0x0048, 0x007A, 0x03BC, 0x2113, 0x006D,
    0x2113, 0x0064, 0x2113, 0x006B, 0x2113, 0x0066, 0x006D, 0x006E, 0x006D, 0x03BC,
    0x006D, 0x006D, 0x006D, 0x0063, 0x006D, 0x006B, 0x006D, 0x006D, 0x006D, 0x00B2,
    0x0063, 0x006D, 0x00B2, 0x006D, 0x00B2, 0x006B, 0x006D, 0x00B2, 0x006D, 0x006D,
    0x00B3, 0x0063, 0x006D, 0x00B3, 0x006D, 0x00B3, 0x006B, 0x006D, 0x00B3, 0x006D,
    0x2215, 0x0073, 0x006D, 0x2215, 0x0073, 0x00B2, 0x0050, 0x0061, 0x006B, 0x0050,
    0x0061, 0x004D, 0x0050, 0x0061, 0x0047, 0x0050, 0x0061, 0x0072, 0x0061, 0x0064,
    0x0072, 0x0061, 0x0064, 0x2215, 0x0073, 0x0072, 0x0061, 0x0064, 0x2215, 0x0073,
    0x00B2, 0x0070, 0x0073, 0x006E, 0x0073, 0x03BC, 0x0073, 0x006D, 0x0073, 0x0070,
    0x0056, 0x006E, 0x0056, 0x03BC, 0x0056, 0x006D, 0x0056, 0x006B, 0x0056, 0x004D,
    0x0056, 0x0070, 0x0057, 0x006E, 0x0057, 0x03BC, 0x0057, 0x006D, 0x0057, 0x006B,
    0x0057, 0x004D, 0x0057, 0x006B, 0x03A9, 0x004D, 0x03A9, 0x0061, 0x002E, 0x006D,
    0x002E, 0x0042, 0x0071, 0x0063, 0x0063, 0x0063, 0x0064, 0x0043, 0x2215, 0x006B,
    0x0067, 0x0043, 0x006F, 0x002E, 0x0064, 0x0042, 0x0047, 0x0079, 0x0068, 0x0061,
    0x0048, 0x0050, 0x0069, 0x006E, 0x004B, 0x004B, 0x004B, 0x004D, 0x006B, 0x0074,
    0x006C, 0x006D, 0x006C, 0x006E, 0x006C, 0x006F, 0x0067, 0x006C, 0x0078, 0x006D,
    0x0062, 0x006D, 0x0069, 0x006C, 0x006D, 0x006F, 0x006C, 0x0050, 0x0048, 0x0070,
    0x002E, 0x006D, 0x002E, 0x0050, 0x0050, 0x004D, 0x0050, 0x0052, 0x0073, 0x0072,
    0x0053, 0x0076, 0x0057, 0x0062, 0x0056, 0x2215, 0x006D, 0x0041, 0x2215, 0x006D,
    0x0031, 0x65E5, 0x0032, 0x65E5, 0x0033, 0x65E5, 0x0034, 0x65E5, 0x0035, 0x65E5,
    0x0036, 0x65E5, 0x0037, 0x65E5, 0x0038, 0x65E5, 0x0039, 0x65E5, 0x0031, 0x0030,
    0x65E5, 0x0031, 0x0031, 0x65E5, 0x0031, 0x0032, 0x65E5, 0x0031, 0x0033, 0x65E5,
    0x0031, 0x0034, 0x65E5, 0x0031, 0x0035, 0x65E5, 0x0031, 0x0036, 0x65E5, 0x0031,
    0x0037, 0x65E5, 0x0031, 0x0038, 0x65E5, 0x0031, 0x0039, 0x65E5, 0x0032, 0x0030,
    0x65E5, 0x0032, 0x0031, 0x65E5, 0x0032, 0x0032, 0x65E5, 0x0032, 0x0033, 0x65E5,
    0x0032, 0x0034, 0x65E5, 0x0032, 0x0035, 0x65E5, 0x0032, 0x0036, 0x65E5, 0x0032,
    0x0037, 0x65E5, 0x0032, 0x0038, 0x65E5, 0x0032, 0x0039, 0x65E5, 0x0033, 0x0030,
    0x65E5, 0x0033, 0x0031, 0x65E5, 0x0067, 0x0061, 0x006C, 0x044A, 0x044C, 0xA76F,
    0x0043, 0x0046, 0x0051, 0x0126, 0x0153, 0xA727, 0xAB37, 0x026B, 0xAB52, 0x028D,
    0x0066, 0x0066, 0x0066, 0x0069, 0x0066, 0x006C, 0x0066, 0x0066, 0x0069, 0x0066,
    0x0066, 0x006C, 0x017F, 0x0074, 0x0073, 0x0074, 0x0574, 0x0576, 0x0574, 0x0565,
    0x0574, 0x056B, 0x057E, 0x0576, 0x0574, 0x056D, 0x05E2, 0x05D0, 0x05D3, 0x05D4,
    0x05DB, 0x05DC, 0x05DD, 0x05E8, 0x05EA, 0x002B, 0x05D0, 0x05DC, 0x0671, 0x0671,
    0x067B, 0x067B, 0x067B, 0x067B, 0x067E, 0x067E, 0x067E, 0x067E, 0x0680, 0x0680,
    0x0680, 0x0680, 0x067A, 0x067A, 0x067A, 0x067A, 0x067F, 0x067F, 0x067F, 0x067F,
    0x0679, 0x0679, 0x0679, 0x0679, 0x06A4, 0x06A4, 0x06A4, 0x06A4, 0x06A6, 0x06A6,
    0x06A6, 0x06A6, 0x0684, 0x0684, 0x0684, 0x0684, 0x0683, 0x0683, 0x0683, 0x0683,
    0x0686, 0x0686, 0x0686, 0x0686, 0x0687, 0x0687, 0x0687, 0x0687, 0x068D, 0x068D,
    0x068C, 0x068C, 0x068E, 0x068E, 0x0688, 0x0688, 0x0698, 0x0698, 0x0691, 0x0691,
    0x06A9, 0x06A9, 0x06A9, 0x06A9, 0x06AF, 0x06AF, 0x06AF, 0x06AF, 0x06B3, 0x06B3,
    0x06B3, 0x06B3, 0x06B1, 0x06B1, 0x06B1, 0x06B1, 0x06BA, 0x06BA, 0x06BB, 0x06BB,
    0x06BB, 0x06BB, 0x06C0, 0x06C0, 0x06C1, 0x06C1, 0x06C1, 0x06C1, 0x06BE, 0x06BE,
    0x06BE, 0x06BE, 0x06D2, 0x06D2, 0x06D3, 0x06D3, 0x06AD, 0x06AD, 0x06AD, 0x06AD,
    0x06C7, 0x06C7, 0x06C6, 0x06C6, 0x06C8, 0x06C8, 0x0677, 0x06CB, 0x06CB, 0x06C5,
    0x06C5, 0x06C9, 0x06C9, 0x06D0, 0x06D0, 0x06D0, 0x06D0, 0x0649, 0x0649, 0x0626,
    0x0627, 0x0626, 0x0627, 0x0626, 0x06D5, 0x0626, 0x06D5, 0x0626, 0x0648, 0x0626,
    0x0648, 0x0626, 0x06C7, 0x0626, 0x06C7, 0x0626, 0x06C6, 0x0626, 0x06C6, 0x0626,
    0x06C8, 0x0626, 0x06C8, 0x0626, 0x06D0, 0x0626, 0x06D0, 0x0626, 0x06D0, 0x0626,
    0x0649, 0x0626, 0x0649, 0x0626, 0x0649, 0x06CC, 0x06CC, 0x06CC, 0x06CC, 0x0626,
    0x062C, 0x0626, 0x062D, 0x0626, 0x0645, 0x0626, 0x0649, 0x0626, 0x064A, 0x0628,
    0x062C, 0x0628, 0x062D, 0x0628, 0x062E, 0x0628, 0x0645, 0x0628, 0x0649, 0x0628,
    0x064A, 0x062A, 0x062C, 0x062A, 0x062D, 0x062A, 0x062E, 0x062A, 0x0645, 0x062A,
    0x0649, 0x062A, 0x064A, 0x062B, 0x062C, 0x062B, 0x0645, 0x062B, 0x0649, 0x062B,
    0x064A, 0x062C, 0x062D, 0x062C, 0x0645, 0x062D, 0x062C, 0x062D, 0x0645, 0x062E,
    0x062C, 0x062E, 0x062D, 0x062E, 0x0645, 0x0633, 0x062C, 0x0633, 0x062D, 0x0633,
    0x062E, 0x0633, 0x0645, 0x0635, 0x062D, 0x0635, 0x0645, 0x0636, 0x062C, 0x0636,
    0x062D, 0x0636, 0x062E, 0x0636, 0x0645, 0x0637, 0x062D, 0x0637, 0x0645, 0x0638,
    0x0645, 0x0639, 0x062C, 0x0639, 0x0645, 0x063A, 0x062C, 0x063A, 0x0645, 0x0641,
    0x062C, 0x0641, 0x062D, 0x0641, 0x062E, 0x0641, 0x0645, 0x0641, 0x0649, 0x0641,
    0x064A, 0x0642, 0x062D, 0x0642, 0x0645, 0x0642, 0x0649, 0x0642, 0x064A, 0x0643,
    0x0627, 0x0643, 0x062C, 0x0643, 0x062D, 0x0643, 0x062E, 0x0643, 0x0644, 0x0643,
    0x0645, 0x0643, 0x0649, 0x0643, 0x064A, 0x0644, 0x062C, 0x0644, 0x062D, 0x0644,
    0x062E, 0x0644, 0x0645, 0x0644, 0x0649, 0x0644, 0x064A, 0x0645, 0x062C, 0x0645,
    0x062D, 0x0645, 0x062E, 0x0645, 0x0645, 0x0645, 0x0649, 0x0645, 0x064A, 0x0646,
    0x062C, 0x0646, 0x062D, 0x0646, 0x062E, 0x0646, 0x0645, 0x0646, 0x0649, 0x0646,
    0x064A, 0x0647, 0x062C, 0x0647, 0x0645, 0x0647, 0x0649, 0x0647, 0x064A, 0x064A,
    0x062C, 0x064A, 0x062D, 0x064A, 0x062E, 0x064A, 0x0645, 0x064A, 0x0649, 0x064A,
    0x064A, 0x0630, 0x0670, 0x0631, 0x0670, 0x0649, 0x0670, 0x0020, 0x064C, 0x0651,
    0x0020, 0x064D, 0x0651, 0x0020, 0x064E, 0x0651, 0x0020, 0x064F, 0x0651, 0x0020,
    0x0650, 0x0651, 0x0020, 0x0651, 0x0670, 0x0626, 0x0631, 0x0626, 0x0632, 0x0626,
    0x0645, 0x0626, 0x0646, 0x0626, 0x0649, 0x0626, 0x064A, 0x0628, 0x0631, 0x0628,
    0x0632, 0x0628, 0x0645, 0x0628, 0x0646, 0x0628, 0x0649, 0x0628, 0x064A, 0x062A,
    0x0631, 0x062A, 0x0632, 0x062A, 0x0645, 0x062A, 0x0646, 0x062A, 0x0649, 0x062A,
    0x064A, 0x062B, 0x0631, 0x062B, 0x0632, 0x062B, 0x0645, 0x062B, 0x0646, 0x062B,
    0x0649, 0x062B, 0x064A, 0x0641, 0x0649, 0x0641, 0x064A, 0x0642, 0x0649, 0x0642,
    0x064A, 0x0643, 0x0627, 0x0643, 0x0644, 0x0643, 0x0645, 0x0643, 0x0649, 0x0643,
    0x064A, 0x0644, 0x0645, 0x0644, 0x0649, 0x0644, 0x064A, 0x0645, 0x0627, 0x0645,
    0x0645, 0x0646, 0x0631, 0x0646, 0x0632, 0x0646, 0x0645, 0x0646, 0x0646, 0x0646,
    0x0649, 0x0646, 0x064A, 0x0649, 0x0670, 0x064A, 0x0631, 0x064A, 0x0632, 0x064A,
    0x0645, 0x064A, 0x0646, 0x064A, 0x0649, 0x064A, 0x064A, 0x0626, 0x062C, 0x0626,
    0x062D, 0x0626, 0x062E, 0x0626, 0x0645, 0x0626, 0x0647, 0x0628, 0x062C, 0x0628,
    0x062D, 0x0628, 0x062E, 0x0628, 0x0645, 0x0628, 0x0647, 0x062A, 0x062C, 0x062A,
    0x062D, 0x062A, 0x062E, 0x062A, 0x0645, 0x062A, 0x0647, 0x062B, 0x0645, 0x062C,
    0x062D, 0x062C, 0x0645, 0x062D, 0x062C, 0x062D, 0x0645, 0x062E, 0x062C, 0x062E,
    0x0645, 0x0633, 0x062C, 0x0633, 0x062D, 0x0633, 0x062E, 0x0633, 0x0645, 0x0635,
    0x062D, 0x0635, 0x062E, 0x0635, 0x0645, 0x0636, 0x062C, 0x0636, 0x062D, 0x0636,
    0x062E, 0x0636, 0x0645, 0x0637, 0x062D, 0x0638, 0x0645, 0x0639, 0x062C, 0x0639,
    0x0645, 0x063A, 0x062C, 0x063A, 0x0645, 0x0641, 0x062C, 0x0641, 0x062D, 0x0641,
    0x062E, 0x0641, 0x0645, 0x0642, 0x062D, 0x0642, 0x0645, 0x0643, 0x062C, 0x0643,
    0x062D, 0x0643, 0x062E, 0x0643, 0x0644, 0x0643, 0x0645, 0x0644, 0x062C, 0x0644,
    0x062D, 0x0644, 0x062E, 0x0644, 0x0645, 0x0644, 0x0647, 0x0645, 0x062C, 0x0645,
    0x062D, 0x0645, 0x062E, 0x0645, 0x0645, 0x0646, 0x062C, 0x0646, 0x062D, 0x0646,
    0x062E, 0x0646, 0x0645, 0x0646, 0x0647, 0x0647, 0x062C, 0x0647, 0x0645, 0x0647,
    0x0670, 0x064A, 0x062C, 0x064A, 0x062D, 0x064A, 0x062E, 0x064A, 0x0645, 0x064A,
    0x0647, 0x0626, 0x0645, 0x0626, 0x0647, 0x0628, 0x0645, 0x0628, 0x0647, 0x062A,
    0x0645, 0x062A, 0x0647, 0x062B, 0x0645, 0x062B, 0x0647, 0x0633, 0x0645, 0x0633,
    0x0647, 0x0634, 0x0645, 0x0634, 0x0647, 0x0643, 0x0644, 0x0643, 0x0645, 0x0644,
    0x0645, 0x0646, 0x0645, 0x0646, 0x0647, 0x064A, 0x0645, 0x064A, 0x0647, 0x0640,
    0x064E, 0x0651, 0x0640, 0x064F, 0x0651, 0x0640, 0x0650, 0x0651, 0x0637, 0x0649,
    0x0637, 0x064A, 0x0639, 0x0649, 0x0639, 0x064A, 0x063A, 0x0649, 0x063A, 0x064A,
    0x0633, 0x0649, 0x0633, 0x064A, 0x0634, 0x0649, 0x0634, 0x064A, 0x062D, 0x0649,
    0x062D, 0x064A, 0x062C, 0x0649, 0x062C, 0x064A, 0x062E, 0x0649, 0x062E, 0x064A,
    0x0635, 0x0649, 0x0635, 0x064A, 0x0636, 0x0649, 0x0636, 0x064A, 0x0634, 0x062C,
    0x0634, 0x062D, 0x0634, 0x062E, 0x0634, 0x0645, 0x0634, 0x0631, 0x0633, 0x0631,
    0x0635, 0x0631, 0x0636, 0x0631, 0x0637, 0x0649, 0x0637, 0x064A, 0x0639, 0x0649,
    0x0639, 0x064A, 0x063A, 0x0649, 0x063A, 0x064A, 0x0633, 0x0649, 0x0633, 0x064A,
    0x0634, 0x0649, 0x0634, 0x064A, 0x062D, 0x0649, 0x062D, 0x064A, 0x062C, 0x0649,
    0x062C, 0x064A, 0x062E, 0x0649, 0x062E, 0x064A, 0x0635, 0x0649, 0x0635, 0x064A,
    0x0636, 0x0649, 0x0636, 0x064A, 0x0634, 0x062C, 0x0634, 0x062D, 0x0634, 0x062E,
    0x0634, 0x0645, 0x0634, 0x0631, 0x0633, 0x0631, 0x0635, 0x0631, 0x0636, 0x0631,
    0x0634, 0x062C, 0x0634, 0x062D, 0x0634, 0x062E, 0x0634, 0x0645, 0x0633, 0x0647,
    0x0634, 0x0647, 0x0637, 0x0645, 0x0633, 0x062C, 0x0633, 0x062D, 0x0633, 0x062E,
    0x0634, 0x062C, 0x0634, 0x062D, 0x0634, 0x062E, 0x0637, 0x0645, 0x0638, 0x0645,
    0x0627, 0x064B, 0x0627, 0x064B, 0x062A, 0x062C, 0x0645, 0x062A, 0x062D, 0x062C,
    0x062A, 0x062D, 0x062C, 0x062A, 0x062D, 0x0645, 0x062A, 0x062E, 0x0645, 0x062A,
    0x0645, 0x062C, 0x062A, 0x0645, 0x062D, 0x062A, 0x0645, 0x062E, 0x062C, 0x0645,
    0x062D, 0x062C, 0x0645, 0x062D, 0x062D, 0x0645, 0x064A, 0x062D, 0x0645, 0x0649,
    0x0633, 0x062D, 0x062C, 0x0633, 0x062C, 0x062D, 0x0633, 0x062C, 0x0649, 0x0633,
    0x0645, 0x062D, 0x0633, 0x0645, 0x062D, 0x0633, 0x0645, 0x062C, 0x0633, 0x0645,
    0x0645, 0x0633, 0x0645, 0x0645, 0x0635, 0x062D, 0x062D, 0x0635, 0x062D, 0x062D,
    0x0635, 0x0645, 0x0645, 0x0634, 0x062D, 0x0645, 0x0634, 0x062D, 0x0645, 0x0634,
    0x062C, 0x064A, 0x0634, 0x0645, 0x062E, 0x0634, 0x0645, 0x062E, 0x0634, 0x0645,
    0x0645, 0x0634, 0x0645, 0x0645, 0x0636, 0x062D, 0x0649, 0x0636, 0x062E, 0x0645,
    0x0636, 0x062E, 0x0645, 0x0637, 0x0645, 0x062D, 0x0637, 0x0645, 0x062D, 0x0637,
    0x0645, 0x0645, 0x0637, 0x0645, 0x064A, 0x0639, 0x062C, 0x0645, 0x0639, 0x0645,
    0x0645, 0x0639, 0x0645, 0x0645, 0x0639, 0x0645, 0x0649, 0x063A, 0x0645, 0x0645,
    0x063A, 0x0645, 0x064A, 0x063A, 0x0645, 0x0649, 0x0641, 0x062E, 0x0645, 0x0641,
    0x062E, 0x0645, 0x0642, 0x0645, 0x062D, 0x0642, 0x0645, 0x0645, 0x0644, 0x062D,
    0x0645, 0x0644, 0x062D, 0x064A, 0x0644, 0x062D, 0x0649, 0x0644, 0x062C, 0x062C,
    0x0644, 0x062C, 0x062C, 0x0644, 0x062E, 0x0645, 0x0644, 0x062E, 0x0645, 0x0644,
    0x0645, 0x062D, 0x0644, 0x0645, 0x062D, 0x0645, 0x062D, 0x062C, 0x0645, 0x062D,
    0x0645, 0x0645, 0x062D, 0x064A, 0x0645, 0x062C, 0x062D, 0x0645, 0x062C, 0x0645,
    0x0645, 0x062E, 0x062C, 0x0645, 0x062E, 0x0645, 0x0645, 0x062C, 0x062E, 0x0647,
    0x0645, 0x062C, 0x0647, 0x0645, 0x0645, 0x0646, 0x062D, 0x0645, 0x0646, 0x062D,
    0x0649, 0x0646, 0x062C, 0x0645, 0x0646, 0x062C, 0x0645, 0x0646, 0x062C, 0x0649,
    0x0646, 0x0645, 0x064A, 0x0646, 0x0645, 0x0649, 0x064A, 0x0645, 0x0645, 0x064A,
    0x0645, 0x0645, 0x0628, 0x062E, 0x064A, 0x062A, 0x062C, 0x064A, 0x062A, 0x062C,
    0x0649, 0x062A, 0x062E, 0x064A, 0x062A, 0x062E, 0x0649, 0x062A, 0x0645, 0x064A,
    0x062A, 0x0645, 0x0649, 0x062C, 0x0645, 0x064A, 0x062C, 0x062D, 0x0649, 0x062C,
    0x0645, 0x0649, 0x0633, 0x062E, 0x0649, 0x0635, 0x062D, 0x064A, 0x0634, 0x062D,
    0x064A, 0x0636, 0x062D, 0x064A, 0x0644, 0x062C, 0x064A, 0x0644, 0x0645, 0x064A,
    0x064A, 0x062D, 0x064A, 0x064A, 0x062C, 0x064A, 0x064A, 0x0645, 0x064A, 0x0645,
    0x0645, 0x064A, 0x0642, 0x0645, 0x064A, 0x0646, 0x062D, 0x064A, 0x0642, 0x0645,
    0x062D, 0x0644, 0x062D, 0x0645, 0x0639, 0x0645, 0x064A, 0x0643, 0x0645, 0x064A,
    0x0646, 0x062C, 0x062D, 0x0645, 0x062E, 0x064A, 0x0644, 0x062C, 0x0645, 0x0643,
    0x0645, 0x0645, 0x0644, 0x062C, 0x0645, 0x0646, 0x062C, 0x062D, 0x062C, 0x062D,
    0x064A, 0x062D, 0x062C, 0x064A, 0x0645, 0x062C, 0x064A, 0x0641, 0x0645, 0x064A,
    0x0628, 0x062D, 0x064A, 0x0643, 0x0645, 0x0645, 0x0639, 0x062C, 0x0645, 0x0635,
    0x0645, 0x0645, 0x0633, 0x062E, 0x064A, 0x0646, 0x062C, 0x064A, 0x0635, 0x0644,
    0x06D2, 0x0642, 0x0644, 0x06D2, 0x0627, 0x0644, 0x0644, 0x0647, 0x0627, 0x0643,
    0x0628, 0x0631, 0x0645, 0x062D, 0x0645, 0x062F, 0x0635, 0x0644, 0x0639, 0x0645,
    0x0631, 0x0633, 0x0648, 0x0644, 0x0639, 0x0644, 0x064A, 0x0647, 0x0648, 0x0633,
    0x0644, 0x0645, 0x0635, 0x0644, 0x0649, 0x0635, 0x0644, 0x0649, 0x0020, 0x0627,
    0x0644, 0x0644, 0x0647, 0x0020, 0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648,
    0x0633, 0x0644, 0x0645, 0x062C, 0x0644, 0x0020, 0x062C, 0x0644, 0x0627, 0x0644,
    0x0647, 0x0631, 0x06CC, 0x0627, 0x0644, 0x002C, 0x3001, 0x3002, 0x003A, 0x003B,
    0x0021, 0x003F, 0x3016, 0x3017, 0x2026, 0x2025, 0x2014, 0x2013, 0x005F, 0x005F,
    0x0028, 0x0029, 0x007B, 0x007D, 0x3014, 0x3015, 0x3010, 0x3011, 0x300A, 0x300B,
    0x3008, 0x3009, 0x300C, 0x300D, 0x300E, 0x300F, 0x005B, 0x005D, 0x203E, 0x203E,
    0x203E, 0x203E, 0x005F, 0x005F, 0x005F, 0x002C, 0x3001, 0x002E, 0x003B, 0x003A,
    0x003F, 0x0021, 0x2014, 0x0028, 0x0029, 0x007B, 0x007D, 0x3014, 0x3015, 0x0023,
    0x0026, 0x002A, 0x002B, 0x002D, 0x003C, 0x003E, 0x003D, 0x005C, 0x0024, 0x0025,
    0x0040, 0x0020, 0x064B, 0x0640, 0x064B, 0x0020, 0x064C, 0x0020, 0x064D, 0x0020,
    0x064E, 0x0640, 0x064E, 0x0020, 0x064F, 0x0640, 0x064F, 0x0020, 0x0650, 0x0640,
    0x0650, 0x0020, 0x0651, 0x0640, 0x0651, 0x0020, 0x0652, 0x0640, 0x0652, 0x0621,
    0x0622, 0x0622, 0x0623, 0x0623, 0x0624, 0x0624, 0x0625, 0x0625, 0x0626, 0x0626,
    0x0626, 0x0626, 0x0627, 0x0627, 0x0628, 0x0628, 0x0628, 0x0628, 0x0629, 0x0629,
    0x062A, 0x062A, 0x062A, 0x062A, 0x062B, 0x062B, 0x062B, 0x062B, 0x062C, 0x062C,
    0x062C, 0x062C, 0x062D, 0x062D, 0x062D, 0x062D, 0x062E, 0x062E, 0x062E, 0x062E,
    0x062F, 0x062F, 0x0630, 0x0630, 0x0631, 0x0631, 0x0632, 0x0632, 0x0633, 0x0633,
    0x0633, 0x0633, 0x0634, 0x0634, 0x0634, 0x0634, 0x0635, 0x0635, 0x0635, 0x0635,
    0x0636, 0x0636, 0x0636, 0x0636, 0x0637, 0x0637, 0x0637, 0x0637, 0x0638, 0x0638,
    0x0638, 0x0638, 0x0639, 0x0639, 0x0639, 0x0639, 0x063A, 0x063A, 0x063A, 0x063A,
    0x0641, 0x0641, 0x0641, 0x0641, 0x0642, 0x0642, 0x0642, 0x0642, 0x0643, 0x0643,
    0x0643, 0x0643, 0x0644, 0x0644, 0x0644, 0x0644, 0x0645, 0x0645, 0x0645, 0x0645,
    0x0646, 0x0646, 0x0646, 0x0646, 0x0647, 0x0647, 0x0647, 0x0647, 0x0648, 0x0648,
    0x0649, 0x0649, 0x064A, 0x064A, 0x064A, 0x064A, 0x0644, 0x0622, 0x0644, 0x0622,
    0x0644, 0x0623, 0x0644, 0x0623, 0x0644, 0x0625, 0x0644, 0x0625, 0x0644, 0x0627,
    0x0644, 0x0627, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028,
    0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F, 0x0030, 0x0031, 0x0032,
    0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x003A, 0x003B, 0x003C,
    0x003D, 0x003E, 0x003F, 0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046,
    0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050,
    0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A,
    0x005B, 0x005C, 0x005D, 0x005E, 0x005F, 0x0060, 0x0061, 0x0062, 0x0063, 0x0064,
    0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E,
    0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078,
    0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x2985, 0x2986, 0x3002, 0x300C,
    0x300D, 0x3001, 0x30FB, 0x30F2, 0x30A1, 0x30A3, 0x30A5, 0x30A7, 0x30A9, 0x30E3,
    0x30E5, 0x30E7, 0x30C3, 0x30FC, 0x30A2, 0x30A4, 0x30A6, 0x30A8, 0x30AA, 0x30AB,
    0x30AD, 0x30AF, 0x30B1, 0x30B3, 0x30B5, 0x30B7, 0x30B9, 0x30BB, 0x30BD, 0x30BF,
    0x30C1, 0x30C4, 0x30C6, 0x30C8, 0x30CA, 0x30CB, 0x30CC, 0x30CD, 0x30CE, 0x30CF,
    0x30D2, 0x30D5, 0x30D8, 0x30DB, 0x30DE, 0x30DF, 0x30E0, 0x30E1, 0x30E2, 0x30E4,
    0x30E6, 0x30E8, 0x30E9, 0x30EA, 0x30EB, 0x30EC, 0x30ED, 0x30EF, 0x30F3, 0x3099,
    0x309A, 0x3164, 0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, 0x3138,
    0x3139, 0x313A, 0x313B, 0x313C, 0x313D, 0x313E, 0x313F, 0x3140, 0x3141, 0x3142,
    0x3143, 0x3144, 0x3145, 0x3146, 0x3147, 0x3148, 0x3149, 0x314A, 0x314B, 0x314C,
    0x314D, 0x314E, 0x314F, 0x3150, 0x3151, 0x3152, 0x3153, 0x3154, 0x3155, 0x3156,
    0x3157, 0x3158, 0x3159, 0x315A, 0x315B, 0x315C, 0x315D, 0x315E, 0x315F, 0x3160,
    0x3161, 0x3162, 0x3163, 0x00A2, 0x00A3, 0x00AC, 0x00AF, 0x00A6, 0x00A5, 0x20A9,
    0x2502, 0x2190, 0x2191, 0x2192, 0x2193, 0x25A0, 0x25CB, 0x02D0, 0x02D1, 0x00E6,
    0x0299, 0x0253, 0x02A3, 0xAB66, 0x02A5, 0x02A4, 0x0256, 0x0257, 0x1D91, 0x0258,
    0x025E, 0x02A9, 0x0264, 0x0262, 0x0260, 0x029B, 0x0127, 0x029C, 0x0267, 0x0284,
    0x02AA, 0x02AB, 0x026C, 0x1DF04, 0xA78E, 0x026E, 0x1DF05, 0x028E, 0x1DF06, 0x00F8,
    0x0276, 0x0277, 0x0071, 0x027A, 0x1DF08, 0x027D, 0x027E, 0x0280, 0x02A8, 0x02A6,
    0xAB67, 0x02A7, 0x0288, 0x2C71, 0x028F, 0x02A1, 0x02A2, 0x0298, 0x01C0, 0x01C1,
    0x01C2, 0x1DF0A, 0x1DF1E, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051,
    0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061,
    0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075,
    0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045,
    0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F,
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059,
    0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0069, 0x006A,
    0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074,
    0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043, 0x0044,
    0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E,
    0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058,
    0x0059, 0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068,
    0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072,
    0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0043,
    0x0044, 0x0047, 0x004A, 0x004B, 0x004E, 0x004F, 0x0050, 0x0051, 0x0053, 0x0054,
    0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063, 0x0064,
    0x0066, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x0070, 0x0071,
    0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041,
    0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B,
    0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055,
    0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065,
    0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079,
    0x007A, 0x0041, 0x0042, 0x0044, 0x0045, 0x0046, 0x0047, 0x004A, 0x004B, 0x004C,
    0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057,
    0x0058, 0x0059, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068,
    0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072,
    0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0042,
    0x0044, 0x0045, 0x0046, 0x0047, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004F,
    0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x0061, 0x0062, 0x0063,
    0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D,
    0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
    0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051,
    0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061,
    0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075,
    0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045,
    0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F,
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059,
    0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069,
    0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073,
    0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043,
    0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D,
    0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057,
    0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071,
    0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0041,
    0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B,
    0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055,
    0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065,
    0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079,
    0x007A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049,
    0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053,
    0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063,
    0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D,
    0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
    0x0078, 0x0079, 0x007A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051,
    0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061,
    0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075,
    0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x0131, 0x0237, 0x0391, 0x0392, 0x0393,
    0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D,
    0x039E, 0x039F, 0x03A0, 0x03A1, 0x03F4, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7,
    0x03A8, 0x03A9, 0x2207, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7,
    0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1,
    0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9, 0x2202, 0x03F5,
    0x03D1, 0x03F0, 0x03D5, 0x03F1, 0x03D6, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395,
    0x0396, 0x0397, 0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F,
    0x03A0, 0x03A1, 0x03F4, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9,
    0x2207, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9,
    0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C2, 0x03C3,
    0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9, 0x2202, 0x03F5, 0x03D1, 0x03F0,
    0x03D5, 0x03F1, 0x03D6, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397,
    0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F, 0x03A0, 0x03A1,
    0x03F4, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9, 0x2207, 0x03B1,
    0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA, 0x03BB,
    0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5,
    0x03C6, 0x03C7, 0x03C8, 0x03C9, 0x2202, 0x03F5, 0x03D1, 0x03F0, 0x03D5, 0x03F1,
    0x03D6, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399,
    0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F, 0x03A0, 0x03A1, 0x03F4, 0x03A3,
    0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9, 0x2207, 0x03B1, 0x03B2, 0x03B3,
    0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD,
    0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7,
    0x03C8, 0x03C9, 0x2202, 0x03F5, 0x03D1, 0x03F0, 0x03D5, 0x03F1, 0x03D6, 0x0391,
    0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A, 0x039B,
    0x039C, 0x039D, 0x039E, 0x039F, 0x03A0, 0x03A1, 0x03F4, 0x03A3, 0x03A4, 0x03A5,
    0x03A6, 0x03A7, 0x03A8, 0x03A9, 0x2207, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5,
    0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF,
    0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9,
    0x2202, 0x03F5, 0x03D1, 0x03F0, 0x03D5, 0x03F1, 0x03D6, 0x03DC, 0x03DD, 0x0030,
    0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x0030,
    0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x0030,
    0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x0030,
    0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x0030,
    0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x0430,
    0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437, 0x0438, 0x043A, 0x043B,
    0x043C, 0x043E, 0x043F, 0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446,
    0x0447, 0x0448, 0x044B, 0x044D, 0x044E, 0xA689, 0x04D9, 0x0456, 0x0458, 0x04E9,
    0x04AF, 0x04CF, 0x0430, 0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437,
    0x0438, 0x043A, 0x043B, 0x043E, 0x043F, 0x0441, 0x0443, 0x0444, 0x0445, 0x0446,
    0x0447, 0x0448, 0x044A, 0x044B, 0x0491, 0x0456, 0x0455, 0x045F, 0x04AB, 0xA651,
    0x04B1, 0x0627, 0x0628, 0x062C, 0x062F, 0x0648, 0x0632, 0x062D, 0x0637, 0x064A,
    0x0643, 0x0644, 0x0645, 0x0646, 0x0633, 0x0639, 0x0641, 0x0635, 0x0642, 0x0631,
    0x0634, 0x062A, 0x062B, 0x062E, 0x0630, 0x0636, 0x0638, 0x063A, 0x066E, 0x06BA,
    0x06A1, 0x066F, 0x0628, 0x062C, 0x0647, 0x062D, 0x064A, 0x0643, 0x0644, 0x0645,
    0x0646, 0x0633, 0x0639, 0x0641, 0x0635, 0x0642, 0x0634, 0x062A, 0x062B, 0x062E,
    0x0636, 0x063A, 0x062C, 0x062D, 0x064A, 0x0644, 0x0646, 0x0633, 0x0639, 0x0635,
    0x0642, 0x0634, 0x062E, 0x0636, 0x063A, 0x06BA, 0x066F, 0x0628, 0x062C, 0x0647,
    0x062D, 0x0637, 0x064A, 0x0643, 0x0645, 0x0646, 0x0633, 0x0639, 0x0641, 0x0635,
    0x0642, 0x0634, 0x062A, 0x062B, 0x062E, 0x0636, 0x0638, 0x063A, 0x066E, 0x06A1,
    0x0627, 0x0628, 0x062C, 0x062F, 0x0647, 0x0648, 0x0632, 0x062D, 0x0637, 0x064A,
    0x0644, 0x0645, 0x0646, 0x0633, 0x0639, 0x0641, 0x0635, 0x0642, 0x0631, 0x0634,
    0x062A, 0x062B, 0x062E, 0x0630, 0x0636, 0x0638, 0x063A, 0x0628, 0x062C, 0x062F,
    0x0648, 0x0632, 0x062D, 0x0637, 0x064A, 0x0644, 0x0645, 0x0646, 0x0633, 0x0639,
    0x0641, 0x0635, 0x0642, 0x0631, 0x0634, 0x062A, 0x062B, 0x062E, 0x0630, 0x0636,
    0x0638, 0x063A, 0x0030, 0x002E, 0x0030, 0x002C, 0x0031, 0x002C, 0x0032, 0x002C,
    0x0033, 0x002C, 0x0034, 0x002C, 0x0035, 0x002C, 0x0036, 0x002C, 0x0037, 0x002C,
    0x0038, 0x002C, 0x0039, 0x002C, 0x0028, 0x0041, 0x0029, 0x0028, 0x0042, 0x0029,
    0x0028, 0x0043, 0x0029, 0x0028, 0x0044, 0x0029, 0x0028, 0x0045, 0x0029, 0x0028,
    0x0046, 0x0029, 0x0028, 0x0047, 0x0029, 0x0028, 0x0048, 0x0029, 0x0028, 0x0049,
    0x0029, 0x0028, 0x004A, 0x0029, 0x0028, 0x004B, 0x0029, 0x0028, 0x004C, 0x0029,
    0x0028, 0x004D, 0x0029, 0x0028, 0x004E, 0x0029, 0x0028, 0x004F, 0x0029, 0x0028,
    0x0050, 0x0029, 0x0028, 0x0051, 0x0029, 0x0028, 0x0052, 0x0029, 0x0028, 0x0053,
    0x0029, 0x0028, 0x0054, 0x0029, 0x0028, 0x0055, 0x0029, 0x0028, 0x0056, 0x0029,
    0x0028, 0x0057, 0x0029, 0x0028, 0x0058, 0x0029, 0x0028, 0x0059, 0x0029, 0x0028,
    0x005A, 0x0029, 0x3014, 0x0053, 0x3015, 0x0043, 0x0052, 0x0043, 0x0044, 0x0057,
    0x005A, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049,
    0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053,
    0x0054, 0x0055, 0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0048, 0x0056, 0x004D,
    0x0056, 0x0053, 0x0044, 0x0053, 0x0053, 0x0050, 0x0050, 0x0056, 0x0057, 0x0043,
    0x004D, 0x0043, 0x004D, 0x0044, 0x004D, 0x0052, 0x0044, 0x004A, 0x307B, 0x304B,
    0x30B3, 0x30B3, 0x30B5, 0x624B, 0x5B57, 0x53CC, 0x30C7, 0x4E8C, 0x591A, 0x89E3,
    0x5929, 0x4EA4, 0x6620, 0x7121, 0x6599, 0x524D, 0x5F8C, 0x518D, 0x65B0, 0x521D,
    0x7D42, 0x751F, 0x8CA9, 0x58F0, 0x5439, 0x6F14, 0x6295, 0x6355, 0x4E00, 0x4E09,
    0x904A, 0x5DE6, 0x4E2D, 0x53F3, 0x6307, 0x8D70, 0x6253, 0x7981, 0x7A7A, 0x5408,
    0x6E80, 0x6709, 0x6708, 0x7533, 0x5272, 0x55B6, 0x914D, 0x3014, 0x672C, 0x3015,
    0x3014, 0x4E09, 0x3015, 0x3014, 0x4E8C, 0x3015, 0x3014, 0x5B89, 0x3015, 0x3014,
    0x70B9, 0x3015, 0x3014, 0x6253, 0x3015, 0x3014, 0x76D7, 0x3015, 0x3014, 0x52DD,
    0x3015, 0x3014, 0x6557, 0x3015, 0x5F97, 0x53EF, 0x0030, 0x0031, 0x0032, 0x0033,
    0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039,
];
