use std::collections::BinaryHeap;

use georoute_core::LocationId;

use crate::Router;
use crate::router::{NO_PARENT, NodeRef};
use crate::traits::AstarPather;

impl Router {
    /// Greedy best-first search from `from` to `to`.
    ///
    /// The frontier is ordered by the heuristic estimate of remaining
    /// distance alone; accumulated path cost is ignored, so the returned
    /// route carries no optimality guarantee. Nodes are marked visited at
    /// discovery and enter the frontier at most once, which keeps the
    /// search terminating on cyclic graphs.
    pub fn greedy_path<P: AstarPather>(
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
        self.nodes[start].generation = cur_gen;
        self.nodes[start].parent = NO_PARENT;

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        while let Some(current) = open.pop() {
            let ci = current.idx;
            if ci == goal {
                found = true;
                break;
            }
            self.expanded += 1;

            nbuf.clear();
            pather.neighbors(LocationId(ci as u32), &mut nbuf);

            for &np in nbuf.iter() {
                let ni = np.index();
                if self.nodes[ni].generation == cur_gen {
                    continue;
                }
                self.nodes[ni].generation = cur_gen;
                self.nodes[ni].parent = ci;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: pather.estimate(np, to),
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal))
    }
}
