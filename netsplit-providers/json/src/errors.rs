use netsplit_core::EdgeId;
use thiserror::Error;

/// Failures while turning a JSON document into an adjacency mapping.
#[derive(Debug, Error)]
pub enum JsonNetworkError {
    #[error("failed to parse JSON input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("network document must be a JSON object but found {found}")]
    NotAnObject { found: &'static str },
    #[error("key `{raw}` is not a valid edge id")]
    InvalidEdgeId { raw: String },
    #[error("neighbours of edge {edge} must be a JSON array but found {found}")]
    InvalidNeighbours { edge: EdgeId, found: &'static str },
    #[error("neighbour `{raw}` of edge {edge} is not a valid edge id")]
    InvalidNeighbour { edge: EdgeId, raw: String },
}
