//! Content service errors.

/// Errors from the content service collaborator.
///
/// A missing document is not an error — queries return `Ok(None)` or an
/// empty vec for that. These variants cover transport and decoding
/// failures, which screens surface as a "failed to load" state.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
	/// The HTTP request itself failed (connect, timeout, TLS).
	#[error("content service request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The service answered with a non-success status.
	#[error("content service returned status {status}")]
	Status { status: u16 },

	/// The response body did not match the expected shape.
	#[error("failed to decode content service response: {0}")]
	Decode(#[from] serde_json::Error),
}
