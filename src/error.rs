use thiserror::Error;

/// Custom error type for Kempe
///
/// This error type is used to wrap all possible errors that can occur when building or coloring a graph
#[derive(Error, Debug)]
pub enum KempeError {
    #[error("Graph error: {0}")]
    GraphError(#[from] GraphError),
    #[error("Coloring error: {0}")]
    ColoringError(#[from] ColoringError),
    #[error("Invariant error: {0}")]
    InvariantError(#[from] InvariantError),
}

/// Possible errors that can occur when building a graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {0} added more than once")]
    DuplicateVertex(String),
    #[error("Edge references unknown vertex {0}")]
    UnknownVertex(String),
    #[error("Self-loop on vertex {0}")]
    SelfLoop(String),
    #[error("Parallel edge between {0} and {1}")]
    ParallelEdge(String, String),
    #[error("Non-zero in column {0} but the matrix only has {1} columns")]
    ColumnOutOfRange(usize, usize),
}

/// Possible errors that can occur during a coloring run
#[derive(Error, Debug)]
pub enum ColoringError {
    #[error("Vertex order references unknown vertex {0}")]
    OrderUnknownVertex(String),
    #[error("Vertex {0} appears more than once in the vertex order")]
    OrderDuplicateVertex(String),
    #[error("Vertex order has {0} entries but the graph has {1} vertices")]
    OrderIncomplete(usize, usize),
    #[error("Vertex {0} is already colored")]
    AlreadyColored(String),
    #[error("Vertex {0} is not colored")]
    Uncolored(String),
    #[error("Compressed matrix has {0} columns but the coloring uses {1} colors")]
    CompressedShapeMismatch(usize, usize),
    #[error("Compressed matrix has {0} rows but the pattern has non-zeros in row {1}")]
    CompressedTooFewRows(usize, usize),
}

/// Violations of the coloring and color-bucket invariants, reported by the graph checkers
#[derive(Error, Debug)]
pub enum InvariantError {
    #[error("Adjacent vertices {0} and {1} share color {2}")]
    AdjacentSameColor(String, String, usize),
    #[error("Color bucket {1} of vertex {0} does not match the neighbor colors")]
    BucketMismatch(String, usize),
    #[error("Color bucket {1} of vertex {0} has inconsistent links")]
    BrokenBucketLink(String, usize),
    #[error("Edge endpoint at vertex {0} has an inconsistent mate")]
    MateMismatch(String),
}

#[macro_export]
macro_rules! graph_error {
    ($variant:ident) => {
        $crate::error::KempeError::from($crate::error::GraphError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        $crate::error::KempeError::from($crate::error::GraphError::$variant($($arg)*))
    };
}

#[macro_export]
macro_rules! coloring_error {
    ($variant:ident) => {
        $crate::error::KempeError::from($crate::error::ColoringError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        $crate::error::KempeError::from($crate::error::ColoringError::$variant($($arg)*))
    };
}

#[macro_export]
macro_rules! invariant_error {
    ($variant:ident) => {
        $crate::error::KempeError::from($crate::error::InvariantError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        $crate::error::KempeError::from($crate::error::InvariantError::$variant($($arg)*))
    };
}
