//! Transfer counting over line sequences.

/// Collapse runs of the same line, e.g. `[Red, Red, Green]` → `[Red, Green]`.
///
/// Staying on a line through several stops is not a transfer, so the
/// collapsed length is the number of lines ridden.
pub fn collapse_repeats<L: PartialEq + Clone>(lines: &[L]) -> Vec<L> {
    let mut collapsed: Vec<L> = Vec::with_capacity(lines.len());
    for line in lines {
        if collapsed.last() != Some(line) {
            collapsed.push(line.clone());
        }
    }
    collapsed
}

/// Number of changes between lines along a collapsed sequence.
pub fn transfer_count<L>(collapsed: &[L]) -> usize {
    collapsed.len().saturating_sub(1)
}

/// Pick the candidate with the fewest lines after collapsing.
///
/// Ties go to the earliest candidate. Returns `None` if there are none.
pub fn select_fewest_transfers<L: PartialEq + Clone>(candidates: &[Vec<L>]) -> Option<Vec<L>> {
    let mut best: Option<Vec<L>> = None;
    for candidate in candidates {
        let collapsed = collapse_repeats(candidate);
        if best.as_ref().is_none_or(|b| collapsed.len() < b.len()) {
            best = Some(collapsed);
        }
    }
    best
}
