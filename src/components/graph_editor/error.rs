use super::types::{EdgeId, NodeId};

/// Rejected graph edits. The store is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
	#[error("no vertex with id {0}")]
	UnknownNode(NodeId),

	#[error("no edge with id {0}")]
	UnknownEdge(EdgeId),

	#[error("label \"{0}\" is already used by another vertex")]
	DuplicateLabel(String),

	#[error("label must not be empty")]
	EmptyLabel,

	#[error("weight \"{0}\" is not a finite number")]
	InvalidWeight(String),
}

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Network(String),

	#[error("service responded with HTTP {0}")]
	Status(u16),

	#[error("malformed response: {0}")]
	Decode(String),

	#[error("{0}")]
	Service(String),

	#[error("could not encode request: {0}")]
	Encode(String),
}
