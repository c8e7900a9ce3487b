//! Hysteresis propagation: grow the final edge mask from the seeds.
//!
//! Multi-source breadth-first expansion over the 8-neighborhood, restricted
//! to pixels set in the candidate mask. A pixel is marked when it is
//! enqueued and never unmarked, so each pixel enters the queue at most once
//! and the walk terminates on any finite grid. The result is the
//! reachability closure of the seed set inside the candidate mask; it does
//! not depend on traversal order.
use super::nms::Candidates;
use crate::image::MaskU8;
use std::collections::VecDeque;

/// Offsets of the 8-connected neighborhood.
#[rustfmt::skip]
const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Expand the seed set through the candidate mask into the final edge mask.
///
/// Seeds are marked unconditionally; every other pixel needs a marked
/// 8-neighbor and a set candidate bit.
pub fn propagate_seeds(candidates: &Candidates) -> MaskU8 {
    let w = candidates.maxima.w;
    let h = candidates.maxima.h;
    let mut edges = MaskU8::new(w, h);
    let mut queue: VecDeque<(u32, u32)> = VecDeque::with_capacity(candidates.seeds.len());

    for &(x, y) in &candidates.seeds {
        if !edges.is_marked(x as usize, y as usize) {
            edges.mark(x as usize, y as usize);
            queue.push_back((x, y));
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in NEIGHBORS_8 {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if !edges.is_marked(nx, ny) && candidates.maxima.is_marked(nx, ny) {
                edges.mark(nx, ny);
                queue.push_back((nx as u32, ny as u32));
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(w: usize, h: usize, set: &[(usize, usize)], seeds: &[(u32, u32)]) -> Candidates {
        let mut maxima = MaskU8::new(w, h);
        for &(x, y) in set {
            maxima.mark(x, y);
        }
        Candidates {
            maxima,
            seeds: seeds.to_vec(),
        }
    }

    #[test]
    fn no_seeds_means_no_edges() {
        let c = candidates(4, 4, &[(1, 1), (2, 2)], &[]);
        let edges = propagate_seeds(&c);
        assert_eq!(edges.count_marked(), 0);
    }

    #[test]
    fn only_the_seeded_component_is_kept() {
        // two horizontal runs separated by an empty row
        let c = candidates(
            5,
            5,
            &[(0, 0), (1, 0), (2, 0), (1, 3), (2, 3), (3, 3)],
            &[(1, 0)],
        );
        let edges = propagate_seeds(&c);
        assert!(edges.is_marked(0, 0));
        assert!(edges.is_marked(1, 0));
        assert!(edges.is_marked(2, 0));
        assert!(!edges.is_marked(1, 3));
        assert!(!edges.is_marked(2, 3));
        assert!(!edges.is_marked(3, 3));
        assert_eq!(edges.count_marked(), 3);
    }

    #[test]
    fn diagonal_chains_are_connected() {
        let chain: Vec<(usize, usize)> = (0..4).map(|i| (i, i)).collect();
        let c = candidates(4, 4, &chain, &[(0, 0)]);
        let edges = propagate_seeds(&c);
        for (x, y) in chain {
            assert!(edges.is_marked(x, y), "chain broken at ({x},{y})");
        }
        assert_eq!(edges.count_marked(), 4);
    }

    #[test]
    fn seeds_are_marked_even_without_candidate_support() {
        let c = candidates(3, 3, &[], &[(1, 1)]);
        let edges = propagate_seeds(&c);
        assert!(edges.is_marked(1, 1));
        assert_eq!(edges.count_marked(), 1);
    }

    #[test]
    fn duplicate_seeds_are_expanded_once() {
        let c = candidates(3, 3, &[(0, 1), (1, 1), (2, 1)], &[(1, 1), (1, 1)]);
        let edges = propagate_seeds(&c);
        assert_eq!(edges.count_marked(), 3);
    }
}
