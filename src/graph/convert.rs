use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::KempeError;

use super::{Graph, GraphBuilder};

impl Graph<NodeIndex> {
    /// Convert an undirected petgraph graph, keyed by its node indices.
    ///
    /// Node and edge weights are ignored. Self-loops and parallel edges are rejected.
    pub fn from_petgraph<N, E>(graph: &UnGraph<N, E>) -> Result<Self, KempeError> {
        let mut builder = GraphBuilder::with_capacity(graph.node_count(), graph.edge_count());
        for node in graph.node_indices() {
            builder.add_vertex(node)?;
        }
        for edge in graph.edge_references() {
            builder.add_edge(&edge.source(), &edge.target())?;
        }
        Ok(builder.build())
    }
}
