use std::collections::BinaryHeap;

use georoute_core::LocationId;

use crate::Router;
use crate::router::{NO_PARENT, NodeRef};
use crate::traits::AstarPather;

impl Router {
    /// Compute the shortest route from `from` to `to` using A*.
    ///
    /// The frontier is ordered by accumulated distance plus the heuristic
    /// estimate of the remainder. Because the straight-line estimate never
    /// overestimates distance along edges, the returned route has the
    /// minimum total distance of any route between the endpoints.
    ///
    /// A node rediscovered with a smaller accumulated distance while still
    /// on the frontier is updated in place (by pushing a fresh entry;
    /// stale ones are skipped when popped).
    ///
    /// Returns the full route including both endpoints, or `None` if no
    /// route exists.
    pub fn astar_path<P: AstarPather>(
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

        let cur_gen = self.begin();

        // Initialise the start node.
        {
            let node = &mut self.nodes[start];
            node.g = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_id = LocationId(ci as u32);

            nbuf.clear();
            pather.neighbors(current_id, &mut nbuf);

            for &np in nbuf.iter() {
                let ni = np.index();
                let tentative_g = current_g + pather.cost(current_id, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered this search.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + pather.estimate(np, to),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal))
    }
}
