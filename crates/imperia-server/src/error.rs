//! Server error taxonomy.

use crate::template::TemplateError;

/// Fatal server-side errors.
///
/// These surface at startup (configuration, template contract) or at the
/// transport layer. Render-local failures never reach this type — the
/// orchestrator absorbs them into a placeholder response.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// The HTML template violates its marker contract.
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// A router pattern has no metadata entry (or vice versa).
	#[error(transparent)]
	Meta(#[from] imperia_meta::MetaError),

	/// The static route table failed to compile.
	#[error(transparent)]
	Router(#[from] imperia_pages::RouterError),

	/// An environment setting could not be parsed.
	#[error("invalid setting {name}: {reason}")]
	Settings { name: &'static str, reason: String },

	/// Reading the template file failed.
	#[error("failed to read template {path}: {source}")]
	TemplateIo {
		path: String,
		#[source]
		source: std::io::Error,
	},

	/// Binding or accepting on the listen socket failed.
	#[error("server io error: {0}")]
	Io(#[from] std::io::Error),
}
