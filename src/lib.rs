//! # Kempe
//!
//! Greedy vertex coloring of simple undirected graphs with Kempe-chain color interchange.
//!
//! Vertices are colored one at a time in a caller-supplied order. Each vertex takes the
//! smallest color not used by its neighbors (first fit). When that would open a new color,
//! the colors of a two-colored connected subgraph (a Kempe chain) around the vertex are
//! exchanged instead, if doing so frees an existing color without creating a conflict.
//!
//! To make the chain search cheap, every vertex keeps one list per color of the incident edges
//! whose other end currently holds that color. These lists are maintained incrementally as
//! vertices are colored and chains are swapped, see [`graph::Graph`].
//!
//! ```rust
//! use kempe::{ColoringConfig, Graph};
//!
//! // path a1 - b2 - a3 - b1 - a2
//! let edges = [("a1", "b2"), ("b2", "a3"), ("a3", "b1"), ("b1", "a2")];
//! let order = ["a1", "b1", "a2", "b2", "a3"];
//! let mut graph = Graph::from_edges(order, &edges).unwrap();
//!
//! let plain = graph.color_with_config(&order, &ColoringConfig::first_fit()).unwrap();
//! assert_eq!(plain.ncolors, 3);
//!
//! let coloring = graph.color_in_order(&order).unwrap();
//! assert_eq!(coloring.ncolors, 2);
//! assert_eq!(coloring.interchanges, 1);
//! ```
//!
//! The [`jacobian`] module applies the same coloring to the columns of a sparsity pattern, for
//! compressed evaluation of sparse Jacobians.

pub mod coloring;
pub mod error;
pub mod graph;
pub mod jacobian;

pub use coloring::{greedy::first_fit, Coloring, ColoringConfig, ColoringRun, KempeChain, Step};
pub use error::{ColoringError, GraphError, InvariantError, KempeError};
pub use graph::{EdgeEndpoint, EndpointId, Graph, GraphBuilder, Vertex, VertexId};
pub use jacobian::ColumnColoring;
