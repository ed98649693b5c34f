use georoute_core::LocationId;

use crate::Router;
use crate::router::NO_PARENT;
use crate::traits::Pather;

impl Router {
    /// Depth-first search from `from` to `to`.
    ///
    /// Expands deepest-first through a LIFO stack. Neighbors are pushed in
    /// adjacency order, so expansion takes them in reverse order. Nodes are
    /// marked visited when popped; stale stack entries for already-visited
    /// nodes are skipped, which both terminates cycles and keeps the path
    /// free of repeats.
    ///
    /// The returned path carries no optimality guarantee of any kind.
    pub fn dfs_path<P: Pather>(
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

        // (node, parent) pairs; parent is recorded only when the node is
        // actually expanded, so the parent chain is always a real path.
        let mut stack: Vec<(usize, usize)> = vec![(start, NO_PARENT)];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        while let Some((ci, pi)) = stack.pop() {
            if self.nodes[ci].generation == cur_gen {
                continue;
            }
            self.nodes[ci].generation = cur_gen;
            self.nodes[ci].parent = pi;

            if ci == goal {
                found = true;
                break;
            }
            self.expanded += 1;

            nbuf.clear();
            pather.neighbors(LocationId(ci as u32), &mut nbuf);

            for &np in nbuf.iter() {
                let ni = np.index();
                if self.nodes[ni].generation != cur_gen {
                    stack.push((ni, ci));
                }
            }
        }

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal))
    }
}
