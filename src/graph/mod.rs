use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub mod bucket;
pub mod builder;
pub mod check;
pub mod convert;

pub use bucket::Bucket;
pub use builder::GraphBuilder;

/// Index of a [`Vertex`] in the vertex arena of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of an [`EdgeEndpoint`] in the endpoint arena of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(pub(crate) usize);

impl EndpointId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex record.
///
/// Owns the head of its adjacency list (its own side of every incident edge) and one
/// color-bucket head per color index. Bucket `c` lists the endpoints of this vertex whose
/// neighbor currently holds color `c`; slots past the end of `buckets` are empty buckets.
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    pub(crate) key: K,
    pub(crate) color: Option<usize>,
    pub(crate) first: Option<EndpointId>,
    pub(crate) degree: usize,
    pub(crate) buckets: Vec<Option<EndpointId>>,
}

impl<K> Vertex<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn color(&self) -> Option<usize> {
        self.color
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
}

/// One vertex's view of one edge.
///
/// Each endpoint is a member of two lists at once: the permanent adjacency list of its owner
/// (`next`) and the color bucket of its owner matching the neighbor's color
/// (`prev_in_bucket`/`next_in_bucket`). `mate` is the reciprocal endpoint stored at the
/// neighbor.
#[derive(Debug, Clone)]
pub struct EdgeEndpoint {
    pub(crate) owner: VertexId,
    pub(crate) neighbor: VertexId,
    pub(crate) next: Option<EndpointId>,
    pub(crate) mate: EndpointId,
    pub(crate) prev_in_bucket: Option<EndpointId>,
    pub(crate) next_in_bucket: Option<EndpointId>,
}

impl EdgeEndpoint {
    pub fn owner(&self) -> VertexId {
        self.owner
    }
    pub fn neighbor(&self) -> VertexId {
        self.neighbor
    }
    pub fn mate(&self) -> EndpointId {
        self.mate
    }
}

/// A simple undirected graph stored as two arenas of linked records.
///
/// Records are created once by [`GraphBuilder`] and never removed or reordered; a coloring run
/// only mutates vertex colors and color-bucket links.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    pub(crate) vertices: Vec<Vertex<K>>,
    pub(crate) endpoints: Vec<EdgeEndpoint>,
    pub(crate) index: HashMap<K, VertexId>,
}

impl<K> Graph<K> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len() / 2
    }

    pub fn vertex(&self, v: VertexId) -> &Vertex<K> {
        &self.vertices[v.0]
    }

    pub fn endpoint(&self, e: EndpointId) -> &EdgeEndpoint {
        &self.endpoints[e.0]
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn key(&self, v: VertexId) -> &K {
        &self.vertices[v.0].key
    }

    pub fn color(&self, v: VertexId) -> Option<usize> {
        self.vertices[v.0].color
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.vertices[v.0].degree
    }

    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(|v| v.degree).max().unwrap_or(0)
    }

    /// Iterate over the endpoints in the adjacency list of `v`, in edge insertion order.
    pub fn adjacency(&self, v: VertexId) -> Adjacency<'_, K> {
        Adjacency {
            graph: self,
            cur: self.vertices[v.0].first,
        }
    }

    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency(v).map(|e| self.endpoints[e.0].neighbor)
    }

    /// Current colors indexed by vertex id.
    pub fn colors(&self) -> Vec<Option<usize>> {
        self.vertices.iter().map(|v| v.color).collect()
    }

    /// Forget every color and empty every color bucket, leaving the adjacency lists intact.
    pub fn reset_colors(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.color = None;
            vertex.buckets.clear();
        }
        for endpoint in self.endpoints.iter_mut() {
            endpoint.prev_in_bucket = None;
            endpoint.next_in_bucket = None;
        }
    }
}

impl<K: Hash + Eq> Graph<K> {
    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    pub fn color_of(&self, key: &K) -> Option<usize> {
        self.vertex_id(key).and_then(|v| self.color(v))
    }
}

impl<K: Hash + Eq + Clone + Debug> Graph<K> {
    /// Build a graph from a vertex set and an edge list.
    ///
    /// Fails if a vertex is repeated, an edge references an unknown vertex, or the edges contain
    /// a self-loop or a parallel edge.
    pub fn from_edges<'a, I, E>(vertices: I, edges: E) -> Result<Self, crate::KempeError>
    where
        I: IntoIterator<Item = K>,
        E: IntoIterator<Item = &'a (K, K)>,
        K: 'a,
    {
        let mut builder = GraphBuilder::new();
        for key in vertices {
            builder.add_vertex(key)?;
        }
        for (a, b) in edges {
            builder.add_edge(a, b)?;
        }
        Ok(builder.build())
    }
}

/// Iterator over the adjacency list of a vertex.
pub struct Adjacency<'a, K> {
    graph: &'a Graph<K>,
    cur: Option<EndpointId>,
}

impl<K> Iterator for Adjacency<'_, K> {
    type Item = EndpointId;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.cur?;
        self.cur = self.graph.endpoints[e.0].next;
        Some(e)
    }
}

#[cfg(test)]
mod tests {
    use super::{Graph, VertexId};

    #[test]
    fn from_edges_links_both_endpoints() {
        let graph = Graph::from_edges(["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let b = graph.vertex_id(&"b").unwrap();
        let neighbors = graph
            .neighbors(b)
            .map(|v| *graph.key(v))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec!["a", "c"]);
        for e in graph.adjacency(b) {
            let endpoint = graph.endpoint(e);
            let mate = graph.endpoint(endpoint.mate());
            assert_eq!(mate.owner(), endpoint.neighbor());
            assert_eq!(mate.neighbor(), b);
            assert_eq!(mate.mate(), e);
        }
        assert_eq!(graph.max_degree(), 2);
        assert!(graph.colors().iter().all(|c| c.is_none()));
    }

    #[test]
    fn vertex_ids_follow_insertion_order() {
        let graph = Graph::from_edges([10, 20, 30], &[]).unwrap();
        let keys = graph
            .vertex_ids()
            .map(|v| *graph.key(v))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![10, 20, 30]);
        assert_eq!(graph.vertex_id(&30), Some(VertexId::new(2)));
        assert_eq!(graph.vertex_id(&40), None);
        assert_eq!(graph.color_of(&10), None);
    }
}
