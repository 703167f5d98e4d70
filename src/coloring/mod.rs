//! Greedy palette assignment for matched regions.
//!
//! Matches are shown as highlighted spans inside both compared files and
//! once more in a list ranked by size. Two matches that sit next to each
//! other in any of those three views must not share a color, or their
//! highlights blend together. The adjacency graph is never built: each
//! match is checked against its already-colored neighbours in the three
//! orders directly.
//!
//! The assignment is a heuristic. Matches are visited in input order and
//! given the first admissible color starting from a rotating cursor; when
//! no color fits, the whole call fails instead of backtracking. Every match
//! has at most six neighbours, so a palette of seven or more colors always
//! succeeds.

mod orderings;

use tracing::debug;

use crate::error::ColoringError;
use crate::model::{ColoredMatch, Match, MatchId};
use orderings::Orderings;

/// Color index per match handle.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    fn color_of(&self, id: MatchId) -> usize {
        self.colors[id.index()]
    }
}

/// Whether no neighbour of `id` in any order already holds `color`.
/// Uncolored neighbours never block.
fn is_admissible(orders: &Orderings, colors: &[Option<usize>], id: MatchId, color: usize) -> bool {
    orders
        .neighbors(id)
        .all(|neighbor| colors[neighbor.index()] != Some(color))
}

/// Assign a palette index to every match, keyed by its handle. The input
/// is left untouched.
fn assign(
    matches: &[Match],
    orders: &Orderings,
    palette_size: usize,
) -> Result<Coloring, ColoringError> {
    if palette_size == 0 {
        return Err(ColoringError::EmptyPalette);
    }

    let mut colors: Vec<Option<usize>> = vec![None; matches.len()];
    let mut cursor = 0;

    for index in 0..matches.len() {
        let id = MatchId::new(index);
        let start = cursor;
        while !is_admissible(orders, &colors, id, cursor) {
            cursor = (cursor + 1) % palette_size;
            if cursor == start {
                debug!(match_id = %id, palette_size, "every color blocked by a neighbour");
                return Err(ColoringError::Infeasible {
                    match_id: id,
                    palette_size,
                });
            }
        }
        colors[index] = Some(cursor);
        cursor = (cursor + 1) % palette_size;
    }

    let colors: Vec<usize> = colors.into_iter().flatten().collect();
    debug_assert_eq!(colors.len(), matches.len(), "every match must be colored");
    Ok(Coloring { colors })
}

/// Color `matches` and return them ordered by ascending token count.
///
/// Fails with [`ColoringError::Infeasible`] when some match has every color
/// of the palette taken by its neighbours; no partial result is produced.
pub fn color_matches(
    matches: &[Match],
    palette_size: usize,
) -> Result<Vec<ColoredMatch>, ColoringError> {
    let orders = Orderings::build(matches);
    let coloring = assign(matches, &orders, palette_size)?;
    debug!(matches = matches.len(), palette_size, "colored all matches");

    Ok(orders
        .by_size
        .handles()
        .iter()
        .map(|&id| ColoredMatch {
            region: matches[id.index()].clone(),
            color_index: coloring.color_of(id),
        })
        .collect())
}

/// Number of matches per palette index, up to the highest index in use.
pub fn palette_usage(matches: &[ColoredMatch]) -> Vec<usize> {
    let used = matches.iter().map(|m| m.color_index + 1).max().unwrap_or(0);
    let mut usage = vec![0; used];
    for m in matches {
        usage[m.color_index] += 1;
    }
    usage
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
