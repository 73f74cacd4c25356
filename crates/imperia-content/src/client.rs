//! HTTP implementation of [`ContentQuery`] over the Sanity query API.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ContentError;
use crate::image::ImageUrlBuilder;
use crate::query::ContentQuery;
use crate::types::{Post, PostSummary};

/// Connection settings for the content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
	pub project_id: String,
	pub dataset: String,
	pub api_version: String,
	/// Use the CDN-cached endpoint instead of the live API.
	pub use_cdn: bool,
}

impl Default for ContentConfig {
	fn default() -> Self {
		Self {
			project_id: "r2dwso19".to_string(),
			dataset: "production".to_string(),
			api_version: "2023-05-03".to_string(),
			use_cdn: true,
		}
	}
}

/// The projection shared by list, search and related-post queries.
const SUMMARY_FIELDS: &str = "_id, title, slug, author->{name, image}, mainImage, \
	categories[]->{_id, title}, publishedAt, excerpt, \
	\"estimatedReadingTime\": round(length(pt::text(body)) / 5 / 180)";

/// Query client for the content service.
///
/// Stateless: every call is an independent HTTP query; the service's
/// own caching and availability policies apply.
pub struct SanityClient {
	http: reqwest::Client,
	config: ContentConfig,
	images: ImageUrlBuilder,
}

impl SanityClient {
	/// Creates a client with the given configuration.
	pub fn new(config: ContentConfig) -> Self {
		let images = ImageUrlBuilder::new(config.project_id.clone(), config.dataset.clone());
		Self {
			http: reqwest::Client::new(),
			config,
			images,
		}
	}

	/// Returns the image URL builder matching this client's project.
	pub fn images(&self) -> &ImageUrlBuilder {
		&self.images
	}

	fn endpoint(&self) -> String {
		let host = if self.config.use_cdn {
			"apicdn.sanity.io"
		} else {
			"api.sanity.io"
		};
		format!(
			"https://{}.{}/v{}/data/query/{}",
			self.config.project_id, host, self.config.api_version, self.config.dataset
		)
	}

	/// Runs a GROQ query with bound parameters and decodes the result.
	async fn fetch<T: DeserializeOwned>(
		&self,
		query: &str,
		params: &[(&str, &str)],
	) -> Result<T, ContentError> {
		let mut url = format!(
			"{}?query={}",
			self.endpoint(),
			urlencoding::encode(query)
		);
		for (name, value) in params {
			// Bound parameters are JSON-encoded strings per the query API.
			let json = format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""));
			url.push_str(&format!("&${}={}", name, urlencoding::encode(&json)));
		}

		debug!(query, "content query");
		let response = self.http.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ContentError::Status {
				status: status.as_u16(),
			});
		}

		let bytes = response.bytes().await?;
		let envelope: QueryEnvelope<T> = serde_json::from_slice(&bytes)?;
		Ok(envelope.result)
	}
}

/// The `{ "result": ... }` envelope the query API wraps results in.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
	result: T,
}

#[async_trait]
impl ContentQuery for SanityClient {
	async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
		let query = "*[_type == \"post\" && slug.current == $slug][0] {\
			_id, title, slug, author->{name, image, bio}, mainImage, \
			categories[]->{_id, title}, publishedAt, body, excerpt, tags, \
			\"estimatedReadingTime\": round(length(pt::text(body)) / 5 / 180)}";
		self.fetch(query, &[("slug", slug)]).await
	}

	async fn related_posts(
		&self,
		category_ids: &[String],
		exclude_id: &str,
		limit: usize,
	) -> Result<Vec<PostSummary>, ContentError> {
		if category_ids.is_empty() {
			return Ok(Vec::new());
		}
		let ids = category_ids
			.iter()
			.map(|id| format!("\"{}\"", id))
			.collect::<Vec<_>>()
			.join(", ");
		let query = format!(
			"*[_type == \"post\" && _id != $currentPostId && \
			count((categories[]._ref)[@ in [{}]]) > 0] | order(publishedAt desc) [0...{}] {{{}}}",
			ids, limit, SUMMARY_FIELDS
		);
		self.fetch(&query, &[("currentPostId", exclude_id)]).await
	}

	async fn posts_page(
		&self,
		limit: usize,
		offset: usize,
	) -> Result<Vec<PostSummary>, ContentError> {
		let query = format!(
			"*[_type == \"post\"] | order(publishedAt desc) [{}...{}] {{{}}}",
			offset,
			offset + limit,
			SUMMARY_FIELDS
		);
		self.fetch(&query, &[]).await
	}

	async fn search_posts(&self, term: &str) -> Result<Vec<PostSummary>, ContentError> {
		let query = format!(
			"*[_type == \"post\" && (title match $searchTerm || pt::text(body) match \
			$searchTerm)] | order(publishedAt desc) {{{}}}",
			SUMMARY_FIELDS
		);
		let wildcard = format!("*{}*", term);
		self.fetch(&query, &[("searchTerm", &wildcard)]).await
	}
}
