//! Propagation of changed values to dependent lookup cells.
//!
//! After a cell is committed, every lookup cell that (transitively) refers
//! to it gets its cached value refreshed. The walk is iterative with one
//! visited set per call, so deep chains cannot overflow the stack and a
//! loop among other cells is visited at most once.

use std::collections::{HashMap, HashSet};

use super::{CellRef, Grid};

/// Reverse dependency map: cell -> lookup cells that refer to it.
///
/// Each list is sorted so propagation order is stable.
pub fn dependents_index(grid: &Grid) -> HashMap<CellRef, Vec<CellRef>> {
    let mut dependents: HashMap<CellRef, Vec<CellRef>> = HashMap::new();
    for cell in grid.values() {
        if let Some(target) = cell.lookup_target() {
            dependents
                .entry(target.clone())
                .or_default()
                .push(cell.at.clone());
        }
    }
    for list in dependents.values_mut() {
        list.sort();
    }
    dependents
}

/// Refresh every lookup cell that depends on `changed`.
///
/// Returns the coordinates of the refreshed cells in update order. `changed`
/// itself is never rewritten, even if a stray cycle leads back to it.
pub fn propagate(grid: &mut Grid, changed: &CellRef) -> Vec<CellRef> {
    let dependents = dependents_index(grid);
    let mut updated = Vec::new();
    let mut to_process = vec![changed.clone()];
    let mut visited = HashSet::new();
    visited.insert(changed.clone());

    while let Some(cell_ref) = to_process.pop() {
        let Some(value) = grid.get(&cell_ref).map(|cell| cell.value().clone()) else {
            continue;
        };
        let Some(deps) = dependents.get(&cell_ref) else {
            continue;
        };

        for dep in deps {
            if !visited.insert(dep.clone()) {
                tracing::trace!("Cell {} already visited, not updating again", dep);
                continue;
            }
            if let Some(cell) = grid.get_mut(dep) {
                cell.refresh(value.clone());
                tracing::debug!("Updated dependent cell {} from {}", dep, cell_ref);
                updated.push(dep.clone());
                to_process.push(dep.clone());
            }
        }
    }

    updated
}
