//! Error types shared by the data loaders and the graph generator.

use thiserror::Error;

/// Failures the app can report instead of hanging or panicking.
#[derive(Error, Debug)]
pub enum VizError {
	/// More edges were requested than distinct vertex pairs exist.
	#[error("cannot place {requested} edges on {vertices} vertices: only {available} distinct pairs")]
	InfeasibleEdgeCount {
		/// Edges asked for.
		requested: usize,
		/// Vertex count of the graph.
		vertices: usize,
		/// `vertices * (vertices - 1) / 2`.
		available: usize,
	},

	/// An element the app reads from was not found in the document.
	#[error("missing element #{0}")]
	MissingElement(String),

	/// Embedded JSON did not match the expected shape.
	#[error("failed to parse data: {0}")]
	Parse(#[from] serde_json::Error),

	/// A browser API call failed.
	#[error("browser error: {0}")]
	Js(String),
}

/// Result alias for fallible app operations.
pub type Result<T> = std::result::Result<T, VizError>;
