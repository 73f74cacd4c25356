//! # Imperia Web
//!
//! Server-rendered marketing site for Imperia Consulting.
//!
//! This facade crate re-exports the workspace members:
//!
//! - [`meta`] — route metadata resolution and head-tag rendering
//! - [`content`] — headless CMS query client and rich-text model
//! - [`pages`] — view tree, router, screens and client hydration
//! - [`server`] — HTML template contract, SSR orchestrator and HTTP server

pub use imperia_content as content;
pub use imperia_meta as meta;
pub use imperia_pages as pages;
pub use imperia_server as server;
