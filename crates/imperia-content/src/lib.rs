//! Headless CMS collaborator for the Imperia Consulting site.
//!
//! The blog is backed by a Sanity-style content service. This crate owns
//! the read-only query surface and the content data model:
//!
//! - [`ContentQuery`] — the async query trait the screens consume.
//! - [`SanityClient`] — the HTTP implementation over the content service's
//!   query API.
//! - [`MemoryContent`] — an in-memory implementation for tests and offline
//!   development.
//! - [`Block`] — the closed portable-text block model; unknown kinds
//!   degrade to plain text instead of failing.
//! - [`ImageUrlBuilder`] — resolves image asset references to CDN URLs
//!   with width/height parameters.
//!
//! A missing document is a normal outcome (`Ok(None)` / empty vec), never
//! an error; [`ContentError`] is reserved for transport and decoding
//! failures.

mod blocks;
mod client;
mod error;
mod image;
mod memory;
mod query;
mod types;

pub use blocks::{Block, BlockKind, MarkDef, Span, TextBlock, plain_text, reading_time_minutes};
pub use client::{ContentConfig, SanityClient};
pub use error::ContentError;
pub use image::{ImageUrl, ImageUrlBuilder};
pub use memory::MemoryContent;
pub use query::ContentQuery;
pub use types::{Author, Category, ImageRef, Post, PostSummary, Slug};
