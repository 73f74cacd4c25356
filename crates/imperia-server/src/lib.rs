//! SSR orchestration and the HTTP surface.
//!
//! Per request the server resolves route metadata, renders the route tree,
//! serializes the head fragment and merges all three into the static HTML
//! template:
//!
//! ```text
//! START -> RESOLVE_METADATA -> RENDER_BODY -> RENDER_HEAD -> MERGE -> RESPOND
//!                                   |
//!                                 ERROR -> FALLBACK_MERGE -> RESPOND
//! ```
//!
//! Render failures are absorbed (placeholder body, logged) — every request
//! path produces a complete HTML document with status 200. The template's
//! markers are validated once at startup; a malformed template is a fatal
//! misconfiguration, never tolerated per request.

mod error;
mod http;
mod settings;
mod ssr;
mod template;

pub use error::ServerError;
pub use http::{Handler, HttpServer, Request, Response, SiteHandler};
pub use settings::Settings;
pub use ssr::{RenderResult, SsrEngine};
pub use template::{BODY_OUTLET, Template, TemplateError};
