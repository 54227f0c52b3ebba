// Knowledge graph: store seam, in-memory backend, projection and matching.
// Writers go through `projector`; readers go through the `GraphStore` queries.

pub mod handlers;
pub mod memory;
pub mod projector;
pub mod store;

pub use memory::InMemoryGraph;
pub use store::{CandidateSummary, EdgeKind, GraphError, GraphStore, NodeKey, NodeLabel};
