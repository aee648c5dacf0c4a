use serde::{Deserialize, Serialize};

/// Whether a boundary may be placed before a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakOpportunity {
    No,
    Yes,
    Mandatory,
    #[default]
    Unassigned,
}

impl BreakOpportunity {
    /// `yes` or `mandatory`.
    pub fn is_break(self) -> bool {
        matches!(self, Self::Yes | Self::Mandatory)
    }
}

/// One entry per position *between* characters, `len() == text.len() + 1`.
///
/// Entry `i` describes the boundary before character `i`; the last entry is
/// the end of text.
pub type BreakVector = Vec<BreakOpportunity>;

/// Split the text described by `opportunities` into ranges ending at every
/// position accepted by `is_boundary`, and at the end of text.
pub(crate) fn split_ranges(
    opportunities: &[BreakOpportunity],
    is_boundary: impl Fn(BreakOpportunity) -> bool,
) -> Vec<std::ops::Range<usize>> {
    let mut r = Vec::new();
    let mut start = 0;
    for (i, &opportunity) in opportunities.iter().enumerate().skip(1) {
        if is_boundary(opportunity) || i + 1 == opportunities.len() {
            if i > start {
                r.push(start..i);
            }
            start = i;
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakOpportunity::*;

    #[test]
    fn ranges() {
        assert_eq!(split_ranges(&[Yes, No, Yes, No, Yes], BreakOpportunity::is_break), vec![0..2, 2..4]);
        assert_eq!(split_ranges(&[Yes, Yes, Mandatory], |o| o == Mandatory), vec![0..2]);
        assert!(split_ranges(&[Yes], BreakOpportunity::is_break).is_empty());
    }
}
