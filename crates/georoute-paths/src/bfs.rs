use std::collections::VecDeque;

use georoute_core::LocationId;

use crate::Router;
use crate::router::NO_PARENT;
use crate::traits::Pather;

impl Router {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Expands shallowest-first through a FIFO frontier; nodes are marked
    /// visited at discovery, so each enters the queue at most once. The
    /// returned path has the minimum number of edges of any path between
    /// the endpoints (not the minimum distance).
    ///
    /// Returns the full path including both endpoints, or `None` when the
    /// reachable component is exhausted without finding `to`.
    pub fn bfs_path<P: Pather>(
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

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
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
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal))
    }
}

#[cfg(test)]
mod tests {
    use crate::Router;
    use crate::fixtures::{diamond_map, line_map};

    #[test]
    fn finds_path_through_middle() {
        let m = line_map();
        let mut r = Router::new(m.table.len());
        let path = r.bfs_path(&m, m.id("A"), m.id("C")).unwrap();
        assert_eq!(m.names(&path), vec!["A", "B", "C"]);
    }

    #[test]
    fn start_equals_goal() {
        let m = line_map();
        let mut r = Router::new(m.table.len());
        let path = r.bfs_path(&m, m.id("A"), m.id("A")).unwrap();
        assert_eq!(m.names(&path), vec!["A"]);
        assert_eq!(r.expanded(), 0);
    }

    #[test]
    fn disconnected_goal_returns_none() {
        let m = line_map();
        let mut r = Router::new(m.table.len());
        assert!(r.bfs_path(&m, m.id("A"), m.id("D")).is_none());
        // Reachable component has three nodes; expansion is bounded by it.
        assert!(r.expanded() <= 3);
    }

    #[test]
    fn prefers_fewest_edges() {
        let m = diamond_map();
        let mut r = Router::new(m.table.len());
        let path = r.bfs_path(&m, m.id("A"), m.id("D")).unwrap();
        assert_eq!(m.names(&path), vec!["A", "D"]);
    }

    #[test]
    fn repeat_queries_are_identical() {
        let m = diamond_map();
        let mut r = Router::new(m.table.len());
        let first = r.bfs_path(&m, m.id("B"), m.id("D")).unwrap();
        let second = r.bfs_path(&m, m.id("B"), m.id("D")).unwrap();
        assert_eq!(first, second);
    }
}
