//! Process-wide interning table for multi-code-point graphemes
//!
//! The table is an append-only flat array of code point slots. An entry of
//! `N` code points takes `N` slots: the first packs the length in its high
//! 11 bits and the starter in its low 21 bits, the remaining `N - 1` slots
//! hold the other code points. Entries are never removed.
//!
//! Inserts are serialized by a mutex. Readers never lock: every slot is
//! written before its start index is returned (release), and a reader only
//! ever reaches a slot through such an index (acquire).

use crate::ucd::REPLACEMENT_CHARACTER;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, OnceLock};

/// Number of slots; `0x110000 + CAPACITY` must still fit a 21-bit index.
pub(crate) const CAPACITY: usize = 0x20_0000 - 0x11_0000;

const LENGTH_SHIFT: u32 = 21;
const CODE_POINT_MASK: u32 = (1 << LENGTH_SHIFT) - 1;

pub(crate) struct LongGraphemeTable {
    slots: Box<[AtomicU32]>,
    inner: Mutex<Inner>,
}

struct Inner {
    len: usize,
    indices: HashMap<Vec<char>, u32>,
}

impl LongGraphemeTable {
    fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| AtomicU32::new(0)).collect(),
            inner: Mutex::new(Inner { len: 0, indices: HashMap::new() }),
        }
    }

    /// The process-wide table, allocated on first use.
    pub(crate) fn global() -> &'static Self {
        static TABLE: OnceLock<LongGraphemeTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::new(CAPACITY))
    }

    /// Intern an NFC sequence of 2 to 30 code points.
    ///
    /// Returns the start index, or `None` when the table is full.
    pub(crate) fn add(&self, code_points: &[char]) -> Option<u32> {
        debug_assert!(code_points.len() >= 2 && code_points.len() <= 30);

        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&start) = inner.indices.get(code_points) {
            return Some(start);
        }

        let start = inner.len;
        if start + code_points.len() > self.slots.len() {
            return None;
        }

        let (&starter, rest) = code_points.split_first()?;
        for (slot, &c) in self.slots[start + 1..].iter().zip(rest) {
            slot.store(u32::from(c), Ordering::Release);
        }
        let header = ((code_points.len() as u32) << LENGTH_SHIFT) | u32::from(starter);
        self.slots[start].store(header, Ordering::Release);

        let start = start as u32;
        inner.len += code_points.len();
        inner.indices.insert(code_points.to_vec(), start);
        Some(start)
    }

    fn header(&self, start: u32) -> u32 {
        self.slots
            .get(start as usize)
            .map(|slot| slot.load(Ordering::Acquire))
            .unwrap_or(0)
    }

    pub(crate) fn size(&self, start: u32) -> usize {
        (self.header(start) >> LENGTH_SHIFT) as usize
    }

    pub(crate) fn starter(&self, start: u32) -> char {
        char::from_u32(self.header(start) & CODE_POINT_MASK).unwrap_or(REPLACEMENT_CHARACTER)
    }

    /// Code point `i` of the entry starting at `start`.
    pub(crate) fn get(&self, start: u32, i: usize) -> char {
        if i == 0 {
            return self.starter(start);
        }
        self.slots
            .get(start as usize + i)
            .and_then(|slot| char::from_u32(slot.load(Ordering::Acquire)))
            .unwrap_or(REPLACEMENT_CHARACTER)
    }

    #[cfg(test)]
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let table = LongGraphemeTable::with_capacity(16);
        let a = table.add(&['e', '\u{0323}', '\u{0302}']).unwrap();
        let b = table.add(&['x', '\u{0308}']).unwrap();
        assert_eq!(a, 0);
        assert_eq!(b, 3);
        assert_eq!(table.add(&['e', '\u{0323}', '\u{0302}']), Some(a));

        assert_eq!(table.size(a), 3);
        assert_eq!(table.starter(a), 'e');
        assert_eq!(table.get(a, 2), '\u{0302}');
        assert_eq!(table.size(b), 2);
        assert_eq!(table.get(b, 1), '\u{0308}');
    }

    #[test]
    fn full_table() {
        let table = LongGraphemeTable::with_capacity(5);
        assert!(table.add(&['a', '\u{0308}', '\u{0301}']).is_some());
        assert!(table.add(&['b', '\u{0308}', '\u{0301}']).is_none());
        assert!(table.add(&['c', '\u{0308}']).is_some());
        assert!(table.add(&['d', '\u{0308}']).is_none());
    }

    #[test]
    fn concurrent_adds() {
        let table = LongGraphemeTable::with_capacity(1024);
        std::thread::scope(|s| {
            for t in 0..4 {
                let table = &table;
                s.spawn(move || {
                    for i in 0..16u32 {
                        let starter = char::from_u32(0x61 + (i + t) % 16).unwrap();
                        let start = table.add(&[starter, '\u{0308}']).unwrap();
                        assert_eq!(table.starter(start), starter);
                        assert_eq!(table.get(start, 1), '\u{0308}');
                    }
                });
            }
        });
        assert_eq!(table.inner.lock().unwrap().indices.len(), 16);
    }
}
