//! Route metadata resolution and head-tag rendering.
//!
//! This crate owns the site's metadata contract end to end:
//!
//! - [`MetadataRecord`] — the canonical description of a page (title,
//!   description, Open Graph / Twitter fields, JSON-LD inputs).
//! - [`MetaResolver`] — maps a request path to a record using the static
//!   route table; never fails, never touches the DOM.
//! - [`head_tags`] — the single `MetadataRecord -> Vec<HeadTag>` definition
//!   of the head contract, consumed by two thin backends:
//!   [`render_head`] (server-side string serialization) and
//!   [`apply_head`] (client-side element-by-element upsert via [`HeadSink`]).
//!
//! Records are constructed fresh per request or navigation and never shared;
//! any path that changes a record must re-derive its head fragment from it.

mod error;
mod record;
mod render;
mod resolver;
pub mod site;
mod tags;
mod upsert;

pub use error::MetaError;
pub use record::{MetadataPatch, MetadataRecord, OgType};
pub use render::{html_escape, render_head, render_tags};
pub use resolver::{BlogPostMeta, MetaResolver, PageMeta, RouteMeta, RoutePattern};
pub use site::Site;
pub use tags::{HeadTag, TagKey, head_tags};
pub use upsert::{HeadSink, MemoryHead, apply_head};
