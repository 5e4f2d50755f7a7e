//! Reference cycle detection for lookup cells.
//!
//! When a lookup is entered, we must verify it doesn't create a cycle
//! (e.g., A1 looks up B1, B1 looks up C1, C1 looks up A1). Each lookup has
//! exactly one target, so the references from any cell form a single chain
//! and the check is a linear walk rather than a full graph search.

use std::collections::HashSet;

use super::{CellRef, Grid};

/// Check whether making `at` look up `target` would close a cycle.
///
/// Returns `Some(path)` starting and ending at `at` if it would, `None`
/// otherwise. `grid` is the state before the write; whatever `at` currently
/// holds is irrelevant since it is about to be replaced.
///
/// A chain that loops without passing through `at` is a pre-existing cycle
/// the new write is not part of; the walk stops there and reports no cycle.
pub fn detect_cycle(at: &CellRef, target: &CellRef, grid: &Grid) -> Option<Vec<CellRef>> {
    if at == target {
        tracing::warn!("Self-reference cycle detected in cell: {}", at);
        return Some(vec![at.clone(), at.clone()]);
    }

    let mut path = vec![at.clone()];
    let mut visited: HashSet<&CellRef> = HashSet::new();
    visited.insert(at);
    let mut current = target;

    loop {
        tracing::trace!("Checking path node: {} (target: {})", current, at);
        if current == at {
            path.push(at.clone());
            tracing::warn!("Cycle detected in reference path of {}", at);
            return Some(path);
        }

        let Some(next) = grid.get(current).and_then(|cell| cell.lookup_target()) else {
            tracing::trace!("Path ended at {} (not a lookup cell or doesn't exist)", current);
            return None;
        };

        if !visited.insert(current) {
            tracing::trace!("Already visited {} in this path (different cycle)", current);
            return None;
        }
        path.push(current.clone());
        current = next;
    }
}
