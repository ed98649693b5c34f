use georoute_core::LocationId;

use crate::Router;
use crate::router::NO_PARENT;
use crate::traits::Pather;

impl Router {
    /// Iterative-deepening depth-first search from `from` to `to`.
    ///
    /// Runs one depth-limited DFS pass per bound 0, 1, 2, … up to the
    /// location count. Within a pass a node is re-expanded only when
    /// reached at a strictly smaller depth than before; this prunes cycles
    /// while still guaranteeing that the first bound at which the goal is
    /// reachable yields a minimum-edge-count path, like BFS but with DFS's
    /// memory profile.
    ///
    /// A pass that never touches its depth bound proves that deeper bounds
    /// cannot reach anything new, so exhaustion is detected without
    /// running every bound.
    pub fn iddfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: LocationId,
        to: LocationId,
    ) -> Option<Vec<LocationId>> {
        let start = from.index();
        let goal = to.index();

        if start == goal {
            return Some(vec![from]);
        }

        let max_bound = self.len() as u32;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut stack: Vec<(usize, usize, u32)> = Vec::new();
        let mut expanded_total = 0;

        for bound in 0..=max_bound {
            let cur_gen = self.begin();
            self.expanded = expanded_total;

            let mut touched_bound = false;
            stack.clear();
            stack.push((start, NO_PARENT, 0));

            while let Some((ci, pi, depth)) = stack.pop() {
                let node = &mut self.nodes[ci];
                if node.generation == cur_gen && node.depth <= depth {
                    continue;
                }
                node.generation = cur_gen;
                node.depth = depth;
                node.parent = pi;

                if ci == goal {
                    self.nbuf = nbuf;
                    return Some(self.reconstruct(goal));
                }
                self.expanded += 1;

                if depth == bound {
                    touched_bound = true;
                    continue;
                }

                nbuf.clear();
                pather.neighbors(LocationId(ci as u32), &mut nbuf);

                for &np in nbuf.iter() {
                    let ni = np.index();
                    let n = &self.nodes[ni];
                    if n.generation != cur_gen || n.depth > depth + 1 {
                        stack.push((ni, ci, depth + 1));
                    }
                }
            }

            expanded_total = self.expanded;
            if !touched_bound {
                break;
            }
        }

        self.nbuf = nbuf;
        None
    }
}
