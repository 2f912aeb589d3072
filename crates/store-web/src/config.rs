//! Build-time front end settings
//!
//! Image CDN coordinates are public and baked in when the WASM bundle is
//! compiled (`SANITY_PROJECT_ID`, `SANITY_DATASET`).

use store_core::ImageUrlBuilder;

const PROJECT_ID: Option<&str> = option_env!("SANITY_PROJECT_ID");
const DATASET: Option<&str> = option_env!("SANITY_DATASET");

/// Image URL builder for product pictures
pub fn image_urls() -> Option<ImageUrlBuilder> {
    ImageUrlBuilder::sanity(
        PROJECT_ID.unwrap_or("demo"),
        DATASET.unwrap_or("production"),
    )
    .ok()
}

/// CDN URL for an asset reference, empty when it cannot be built
pub fn image_src(asset: Option<&store_core::AssetRef>) -> String {
    asset
        .zip(image_urls())
        .and_then(|(asset, urls)| urls.url_for(asset).ok())
        .map(String::from)
        .unwrap_or_default()
}
