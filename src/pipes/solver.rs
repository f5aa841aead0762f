//! Breadth-first reachability from the start node to the end node.
//!
//! ## Graph
//!
//! Nodes are every grid cell plus two virtual sentinels:
//! - `Start` sits left of column 0 on the start row and links to that cell
//!   when it is open on the left.
//! - `End` sits right of the last column on the end row and is linked from
//!   that cell when it is open on the right.
//!
//! Two adjacent cells are linked when both are open across their shared
//! edge. No other boundary cell reaches a sentinel, whatever its flags say.
//!
//! ## Traversal
//!
//! FIFO queue seeded with `Start`. Neighbors are examined in
//! [`Direction::SEARCH_ORDER`] and marked visited when first discovered,
//! so each cell is queued at most once. The search stops as soon as `End`
//! is discovered.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::grid::PipeGrid;
use crate::core::{Direction, GridPos};

/// A vertex of the search graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    Start,
    Cell(GridPos),
    End,
}

/// Does an open path run from the start node to the end node?
#[must_use]
pub fn is_reachable(grid: &PipeGrid) -> bool {
    search(grid, false).is_some()
}

/// Cells of a shortest open path from entry to exit, in order.
///
/// `None` when the puzzle is not solved.
#[must_use]
pub fn flow_path(grid: &PipeGrid) -> Option<Vec<GridPos>> {
    let parents = search(grid, true)?;

    let mut path = Vec::new();
    let mut node = Node::End;
    while let Some(&parent) = parents.get(&node) {
        if let Node::Cell(pos) = parent {
            path.push(pos);
        }
        node = parent;
    }
    path.reverse();
    Some(path)
}

/// Run the BFS. Returns the parent links (empty unless `track_parents`)
/// when `End` was discovered, `None` otherwise.
fn search(grid: &PipeGrid, track_parents: bool) -> Option<FxHashMap<Node, Node>> {
    let mut visited = FxHashSet::default();
    let mut parents = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.insert(Node::Start);
    queue.push_back(Node::Start);

    while let Some(current) = queue.pop_front() {
        for next in linked_nodes(grid, current) {
            if !visited.insert(next) {
                continue;
            }
            if track_parents {
                parents.insert(next, current);
            }
            if next == Node::End {
                trace!("end reached from {:?}", current);
                return Some(parents);
            }
            queue.push_back(next);
        }
    }

    trace!("end unreachable after visiting {} nodes", visited.len());
    None
}

/// Nodes linked to `node` by open, matching pipe ends.
fn linked_nodes(grid: &PipeGrid, node: Node) -> SmallVec<[Node; 4]> {
    let mut linked = SmallVec::new();
    match node {
        Node::Start => {
            let entry = grid.entry();
            if grid.cell(entry).is_some_and(|cell| cell.connections().left) {
                linked.push(Node::Cell(entry));
            }
        }
        Node::End => {}
        Node::Cell(pos) => {
            let Some(cell) = grid.cell(pos) else {
                return linked;
            };
            let dims = grid.dimensions();
            for direction in Direction::SEARCH_ORDER {
                match dims.step(pos, direction) {
                    Some(next) => {
                        if grid.cell(next).is_some_and(|other| cell.is_connected_to(other, direction)) {
                            linked.push(Node::Cell(next));
                        }
                    }
                    None => {
                        if direction == Direction::Right && pos == grid.exit() && cell.connections().right {
                            linked.push(Node::End);
                        }
                    }
                }
            }
        }
    }
    linked
}
