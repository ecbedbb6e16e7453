//! A* best-first search over the implicit board graph
//!
//! Vertices are [`Board`] values, edges are unit-cost legal moves. The
//! frontier is ordered by f = g + h with FIFO tie-breaking, and a stale-entry
//! check on pop stands in for an explicit closed set: with a consistent
//! heuristic the first authoritative pop of a board carries its optimal g.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
    time::{Duration, Instant},
};

use crate::board::Board;

/// Outcome of one [`astar`] invocation.
///
/// Owned by the caller; `solution_depth` is the optimal move count when
/// `solved` and −1 otherwise, `path` runs from the start board through the
/// goal when present.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub solved: bool,
    pub solution_depth: i32,
    pub nodes_expanded: usize,
    pub runtime: Duration,
    pub path: Option<Vec<Board>>,
}

/// Frontier entry ranked by (f, insertion sequence). The board rides along
/// as payload and never enters the comparison.
struct FrontierEntry {
    f: u32,
    g: u32,
    seq: u64,
    board: Board,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse to pop the smallest f, oldest
        // insertion first among equals.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* from `start` under the given heuristic.
///
/// The heuristic must never overestimate the true remaining move count for
/// the returned depth to be optimal. The search is total over validly
/// constructed boards: an unsolvable start exhausts its half of the finite
/// state space and comes back as `solved: false` rather than an error.
pub fn astar<H>(start: &Board, heuristic: H) -> SearchResult
where
    H: Fn(&Board) -> u32,
{
    let started = Instant::now();

    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<Board, u32> = HashMap::new();
    let mut parent: HashMap<Board, Board> = HashMap::new();
    let mut nodes_expanded = 0;
    let mut seq: u64 = 0;

    best_g.insert(start.clone(), 0);
    frontier.push(FrontierEntry {
        f: heuristic(start),
        g: 0,
        seq,
        board: start.clone(),
    });

    while let Some(FrontierEntry { g, board, .. }) = frontier.pop() {
        // A cheaper path to this board was found after this entry was
        // queued; drop the stale copy instead of re-expanding.
        if best_g.get(&board).is_some_and(|&best| best < g) {
            continue;
        }

        nodes_expanded += 1;

        if board.is_goal() {
            return SearchResult {
                solved: true,
                solution_depth: g as i32,
                nodes_expanded,
                runtime: started.elapsed(),
                path: Some(reconstruct_path(&parent, board)),
            };
        }

        let candidate_g = g + 1;
        for neighbor in board.neighbors() {
            let improved = best_g
                .get(&neighbor)
                .is_none_or(|&best| candidate_g < best);
            if improved {
                best_g.insert(neighbor.clone(), candidate_g);
                parent.insert(neighbor.clone(), board.clone());
                seq += 1;
                frontier.push(FrontierEntry {
                    f: candidate_g + heuristic(&neighbor),
                    g: candidate_g,
                    seq,
                    board: neighbor,
                });
            }
        }
    }

    SearchResult {
        solved: false,
        solution_depth: -1,
        nodes_expanded,
        runtime: started.elapsed(),
        path: None,
    }
}

/// Follow parent pointers from the goal back to the start, then reverse.
fn reconstruct_path(parent: &HashMap<Board, Board>, goal: Board) -> Vec<Board> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(previous) = parent.get(&current) {
        path.push(previous.clone());
        current = previous.clone();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics;

    #[test]
    fn test_goal_start_expands_once() {
        let goal = Board::goal(3).unwrap();
        let result = astar(&goal, heuristics::manhattan);
        assert!(result.solved);
        assert_eq!(result.solution_depth, 0);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(result.path.map(|path| path.len()), Some(1));
    }

    #[test]
    fn test_two_moves_from_goal() {
        let start = Board::goal(3)
            .unwrap()
            .slide(crate::board::Direction::Up)
            .unwrap()
            .slide(crate::board::Direction::Left)
            .unwrap();
        let result = astar(&start, heuristics::manhattan);
        assert!(result.solved);
        assert_eq!(result.solution_depth, 2);

        let path = result.path.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], start);
        assert!(path[2].is_goal());
    }

    #[test]
    fn test_zero_heuristic_still_optimal() {
        // degenerates to uniform-cost search, depth must not change
        let start = Board::goal(3).unwrap().randomize(10, 5);
        let guided = astar(&start, heuristics::manhattan);
        let blind = astar(&start, |_| 0);
        assert_eq!(guided.solution_depth, blind.solution_depth);
        assert!(blind.nodes_expanded >= guided.nodes_expanded);
    }

    #[test]
    fn test_search_is_deterministic() {
        let start = Board::goal(3).unwrap().randomize(14, 99);
        let a = astar(&start, heuristics::linear_conflict);
        let b = astar(&start, heuristics::linear_conflict);
        assert_eq!(a.nodes_expanded, b.nodes_expanded);
        assert_eq!(a.path, b.path);
    }
}
