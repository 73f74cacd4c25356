//! Metadata configuration errors.

/// Errors surfaced by the metadata layer.
///
/// Resolution itself never fails; the only failure mode is a configuration
/// defect detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
	/// A router pattern has no entry in the route metadata table.
	#[error("no metadata entry covers route pattern `{pattern}`")]
	UncoveredRoute { pattern: String },
}
