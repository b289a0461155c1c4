use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{graph_error, KempeError};

use super::{EdgeEndpoint, EndpointId, Graph, Vertex, VertexId};

/// Builder for [`Graph`]s. Add vertices and edges, then call [`GraphBuilder::build`].
///
/// Every edge is validated as it is added, so a built graph is always simple: no self-loops,
/// no parallel edges and no edge referencing a vertex that was not added first.
///
/// # Example
///
/// ```rust
/// use kempe::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_vertex("a").unwrap();
/// builder.add_vertex("b").unwrap();
/// builder.add_edge(&"a", &"b").unwrap();
/// assert!(builder.add_edge(&"b", &"a").is_err());
/// let graph = builder.build();
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct GraphBuilder<K> {
    vertices: Vec<Vertex<K>>,
    endpoints: Vec<EdgeEndpoint>,
    index: HashMap<K, VertexId>,
    last: Vec<Option<EndpointId>>,
    edges: HashSet<(VertexId, VertexId)>,
}

impl<K: Hash + Eq + Clone + Debug> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone + Debug> GraphBuilder<K> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nvertices: usize, nedges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(nvertices),
            endpoints: Vec::with_capacity(2 * nedges),
            index: HashMap::with_capacity(nvertices),
            last: Vec::with_capacity(nvertices),
            edges: HashSet::with_capacity(nedges),
        }
    }

    pub fn add_vertex(&mut self, key: K) -> Result<VertexId, KempeError> {
        if self.index.contains_key(&key) {
            return Err(graph_error!(DuplicateVertex, format!("{:?}", key)));
        }
        let id = VertexId(self.vertices.len());
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex {
            key,
            color: None,
            first: None,
            degree: 0,
            buckets: Vec::new(),
        });
        self.last.push(None);
        Ok(id)
    }

    fn lookup(&self, key: &K) -> Result<VertexId, KempeError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| graph_error!(UnknownVertex, format!("{:?}", key)))
    }

    /// Add the undirected edge {a, b}, creating one endpoint at each side.
    pub fn add_edge(&mut self, a: &K, b: &K) -> Result<(), KempeError> {
        let u = self.lookup(a)?;
        let w = self.lookup(b)?;
        if u == w {
            return Err(graph_error!(SelfLoop, format!("{:?}", a)));
        }
        if !self.edges.insert((u.min(w), u.max(w))) {
            return Err(graph_error!(
                ParallelEdge,
                format!("{:?}", a),
                format!("{:?}", b)
            ));
        }
        let at_u = EndpointId(self.endpoints.len());
        let at_w = EndpointId(self.endpoints.len() + 1);
        self.endpoints.push(EdgeEndpoint {
            owner: u,
            neighbor: w,
            next: None,
            mate: at_w,
            prev_in_bucket: None,
            next_in_bucket: None,
        });
        self.endpoints.push(EdgeEndpoint {
            owner: w,
            neighbor: u,
            next: None,
            mate: at_u,
            prev_in_bucket: None,
            next_in_bucket: None,
        });
        self.append(u, at_u);
        self.append(w, at_w);
        Ok(())
    }

    fn append(&mut self, v: VertexId, e: EndpointId) {
        match self.last[v.0] {
            Some(tail) => self.endpoints[tail.0].next = Some(e),
            None => self.vertices[v.0].first = Some(e),
        }
        self.last[v.0] = Some(e);
        self.vertices[v.0].degree += 1;
    }

    pub fn build(self) -> Graph<K> {
        Graph {
            vertices: self.vertices,
            endpoints: self.endpoints,
            index: self.index,
        }
    }
}
