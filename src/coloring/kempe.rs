use crate::graph::{Graph, VertexId};

/// A two-colored set of vertices whose colors can be exchanged without creating a conflict,
/// freeing `col1` at the vertex the search was run for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KempeChain {
    pub col1: usize,
    pub col2: usize,
    pub members: Vec<VertexId>,
}

/// Reusable state for the interchange search.
///
/// `visited` is indexed by vertex id and is all `false` between searches; only the entries of
/// the current chain are ever set, so clearing costs the chain length.
#[derive(Debug, Default)]
pub struct ChainSearch {
    visited: Vec<bool>,
    chain: Vec<VertexId>,
}

impl ChainSearch {
    pub fn new(nvertices: usize) -> Self {
        Self {
            visited: vec![false; nvertices],
            chain: Vec::new(),
        }
    }

    /// Find the first pair `col1 < col2 <= k`, scanning `col1` then `col2` upwards, whose chain
    /// can be swapped to free `col1` at the uncolored vertex `v`. `k` is the largest color in
    /// use.
    ///
    /// Never mutates the graph.
    pub fn find<K>(&mut self, graph: &Graph<K>, v: VertexId, k: usize) -> Option<KempeChain> {
        if self.visited.len() < graph.vertex_count() {
            self.visited.resize(graph.vertex_count(), false);
        }
        for col1 in 0..k {
            for col2 in col1 + 1..=k {
                let safe = self.grow(graph, v, col1, col2);
                let found = safe.then(|| KempeChain {
                    col1,
                    col2,
                    members: self.chain.clone(),
                });
                self.clear();
                if found.is_some() {
                    return found;
                }
            }
        }
        None
    }

    /// Build the chain seeded from the `col1` neighbors of `v` and report whether none of the
    /// `col2` neighbors of `v` ended up in it.
    ///
    /// The chain is the union of the `{col1, col2}` components holding a `col1` neighbor, so
    /// the answer is the same with the two colors exchanged.
    fn grow<K>(&mut self, graph: &Graph<K>, v: VertexId, col1: usize, col2: usize) -> bool {
        for q in graph.bucket_neighbors(v, col1) {
            self.visit(q);
        }
        let mut i = 0;
        while i < self.chain.len() {
            let m = self.chain[i];
            i += 1;
            let opposite = if graph.color(m) == Some(col1) { col2 } else { col1 };
            for q in graph.bucket_neighbors(m, opposite) {
                self.visit(q);
            }
        }
        !graph
            .bucket_neighbors(v, col2)
            .any(|q| self.visited[q.index()])
    }

    fn visit(&mut self, q: VertexId) {
        if !self.visited[q.index()] {
            self.visited[q.index()] = true;
            self.chain.push(q);
        }
    }

    fn clear(&mut self) {
        for q in self.chain.drain(..) {
            self.visited[q.index()] = false;
        }
    }
}
