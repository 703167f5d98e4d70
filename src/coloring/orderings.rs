use std::cmp::Ordering;

use crate::model::{Match, MatchId};

/// A total order over a match collection, stored as a sequence of handles
/// plus the inverse table (handle index -> position) for constant-time
/// neighbour lookup.
pub struct MatchOrder {
    handles: Vec<MatchId>,
    positions: Vec<usize>,
}

impl MatchOrder {
    /// Sort the handles of `matches` with `compare`. The sort is stable, so
    /// ties keep input order.
    pub fn sorted_by(matches: &[Match], compare: impl Fn(&Match, &Match) -> Ordering) -> Self {
        let mut handles: Vec<MatchId> = (0..matches.len()).map(MatchId::new).collect();
        handles.sort_by(|a, b| compare(&matches[a.index()], &matches[b.index()]));

        let mut positions = vec![0; handles.len()];
        for (pos, id) in handles.iter().enumerate() {
            positions[id.index()] = pos;
        }
        Self { handles, positions }
    }

    pub fn handles(&self) -> &[MatchId] {
        &self.handles
    }

    pub fn position(&self, id: MatchId) -> usize {
        self.positions[id.index()]
    }

    /// Immediate predecessor and successor of `id`; either is absent at the
    /// boundaries.
    pub fn neighbors(&self, id: MatchId) -> impl Iterator<Item = MatchId> + '_ {
        let pos = self.position(id);
        let before = pos.checked_sub(1).map(|p| self.handles[p]);
        let after = self.handles.get(pos + 1).copied();
        before.into_iter().chain(after)
    }
}

/// The three views a match is rendered in: its span in the first file, its
/// span in the second file, and its rank by size.
pub struct Orderings {
    pub by_first: MatchOrder,
    pub by_second: MatchOrder,
    pub by_size: MatchOrder,
}

impl Orderings {
    pub fn build(matches: &[Match]) -> Self {
        Self {
            by_first: MatchOrder::sorted_by(matches, |a, b| {
                a.first_file
                    .cmp(&b.first_file)
                    .then(a.start_in_first.cmp(&b.start_in_first))
            }),
            by_second: MatchOrder::sorted_by(matches, |a, b| {
                a.second_file
                    .cmp(&b.second_file)
                    .then(a.start_in_second.cmp(&b.start_in_second))
            }),
            by_size: MatchOrder::sorted_by(matches, |a, b| a.tokens.cmp(&b.tokens)),
        }
    }

    /// Every neighbour of `id` across the three orders. A match adjacent in
    /// more than one order appears once per order.
    pub fn neighbors(&self, id: MatchId) -> impl Iterator<Item = MatchId> + '_ {
        self.by_first
            .neighbors(id)
            .chain(self.by_second.neighbors(id))
            .chain(self.by_size.neighbors(id))
    }
}

#[cfg(test)]
#[path = "orderings_test.rs"]
mod tests;
