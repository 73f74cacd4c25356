//! Image URL resolution.
//!
//! The content service stores images as asset references like
//! `image-<assetId>-<width>x<height>-<format>`; the CDN serves them at
//! `https://cdn.sanity.io/images/<project>/<dataset>/<assetId>-<dims>.<format>`
//! with resizing controlled by query parameters. [`ImageUrlBuilder`]
//! resolves references and [`ImageUrl`] appends the sizing parameters.

use crate::types::ImageRef;

/// Default CDN host of the content service.
const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Resolves image references for one project/dataset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
	project_id: String,
	dataset: String,
}

impl ImageUrlBuilder {
	/// Creates a builder for the given project and dataset.
	pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
		Self {
			project_id: project_id.into(),
			dataset: dataset.into(),
		}
	}

	/// Starts building a URL for an image reference.
	pub fn image(&self, image: &ImageRef) -> ImageUrl {
		ImageUrl {
			base: self.base_url(&image.asset.reference),
			width: None,
			height: None,
		}
	}

	/// Resolves a raw asset reference to its base CDN URL.
	///
	/// `image-abc123-1200x630-jpg` becomes
	/// `<cdn>/<project>/<dataset>/abc123-1200x630.jpg`. References that do
	/// not follow the convention are passed through as a path component so
	/// a malformed document cannot panic the renderer.
	fn base_url(&self, reference: &str) -> String {
		let file = match parse_asset_ref(reference) {
			Some((asset_id, dims, format)) => format!("{}-{}.{}", asset_id, dims, format),
			None => reference.to_string(),
		};
		format!(
			"{}/{}/{}/{}",
			IMAGE_CDN, self.project_id, self.dataset, file
		)
	}
}

/// Splits `image-<assetId>-<WxH>-<format>` into its parts.
fn parse_asset_ref(reference: &str) -> Option<(&str, &str, &str)> {
	let rest = reference.strip_prefix("image-")?;
	let (rest, format) = rest.rsplit_once('-')?;
	let (asset_id, dims) = rest.rsplit_once('-')?;
	if asset_id.is_empty() || !dims.contains('x') {
		return None;
	}
	Some((asset_id, dims, format))
}

/// A CDN image URL under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
	base: String,
	width: Option<u32>,
	height: Option<u32>,
}

impl ImageUrl {
	/// Requests a target width in pixels.
	pub fn width(mut self, width: u32) -> Self {
		self.width = Some(width);
		self
	}

	/// Requests a target height in pixels.
	pub fn height(mut self, height: u32) -> Self {
		self.height = Some(height);
		self
	}

	/// Renders the final URL.
	///
	/// When both dimensions are present the crop-fit parameter is added so
	/// the CDN returns exactly the requested aspect ratio.
	pub fn url(&self) -> String {
		let mut params = Vec::new();
		if let Some(width) = self.width {
			params.push(format!("w={}", width));
		}
		if let Some(height) = self.height {
			params.push(format!("h={}", height));
		}
		if self.width.is_some() && self.height.is_some() {
			params.push("fit=crop".to_string());
		}
		if params.is_empty() {
			self.base.clone()
		} else {
			format!("{}?{}", self.base, params.join("&"))
		}
	}
}
