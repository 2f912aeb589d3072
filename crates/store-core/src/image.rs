//! CDN Image URLs
//!
//! Turns content-store asset references such as
//! `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg` into absolute CDN URLs:
//!
//! ```text
//! image-<asset id>-<w>x<h>-<format>
//!   ──▶ <base>/images/<project>/<dataset>/<asset id>-<w>x<h>.<format>
//! ```
//!
//! References are parsed and validated before any URL is built; anything
//! that does not match the shape above is rejected.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ImageUrlError;

/// Default Sanity image CDN
pub const SANITY_CDN_URL: &str = "https://cdn.sanity.io";

const IMAGE_PREFIX: &str = "image-";

/// Asset reference as stored in a product document (`{ "_ref": "..." }`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    reference: String,
}

/// Components of a validated image asset reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedAsset<'a> {
    pub asset_id: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}

impl ParsedAsset<'_> {
    /// File name on the CDN: `<asset id>-<w>x<h>.<format>`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}x{}.{}",
            self.asset_id, self.width, self.height, self.format
        )
    }
}

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.reference
    }

    /// Split the reference into id, dimensions and format
    pub fn parse(&self) -> Result<ParsedAsset<'_>, ImageUrlError> {
        let malformed = || ImageUrlError::MalformedAssetRef(self.reference.clone());

        let rest = self
            .reference
            .strip_prefix(IMAGE_PREFIX)
            .ok_or_else(malformed)?;

        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next().ok_or_else(malformed)?;
        let dims = parts.next().ok_or_else(malformed)?;
        let asset_id = parts.next().ok_or_else(malformed)?;

        let is_token = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric());
        if !is_token(asset_id) || !is_token(format) {
            return Err(malformed());
        }

        let (width, height) = dims.split_once('x').ok_or_else(malformed)?;
        let width = width.parse::<u32>().map_err(|_| malformed())?;
        let height = height.parse::<u32>().map_err(|_| malformed())?;

        Ok(ParsedAsset {
            asset_id,
            width,
            height,
            format,
        })
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reference)
    }
}

/// Builds absolute CDN URLs for image asset references
#[derive(Clone, Debug)]
pub struct ImageUrlBuilder {
    base: Url,
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    /// Create a builder for an explicit CDN base
    pub fn new(
        base: &str,
        project_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Result<Self, ImageUrlError> {
        let base = Url::parse(base).map_err(|e| ImageUrlError::InvalidBase(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ImageUrlError::InvalidBase(base.to_string()));
        }

        let project_id = project_id.into();
        let dataset = dataset.into();
        for segment in [&project_id, &dataset] {
            if segment.is_empty() || segment.contains('/') {
                return Err(ImageUrlError::InvalidSegment(segment.clone()));
            }
        }

        Ok(Self {
            base,
            project_id,
            dataset,
        })
    }

    /// Builder for the public Sanity CDN
    pub fn sanity(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Result<Self, ImageUrlError> {
        Self::new(SANITY_CDN_URL, project_id, dataset)
    }

    /// Absolute URL of the referenced image
    pub fn url_for(&self, asset: &AssetRef) -> Result<Url, ImageUrlError> {
        let parsed = asset.parse()?;
        let file_name = parsed.file_name();

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ImageUrlError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend([
                "images",
                self.project_id.as_str(),
                self.dataset.as_str(),
                file_name.as_str(),
            ]);

        Ok(url)
    }
}
