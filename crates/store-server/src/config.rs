//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded by `main`).

use store_core::{ImageUrlBuilder, SANITY_CDN_URL};

/// Process-level settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the compiled front end
    pub static_dir: String,

    /// Image CDN base URL
    pub cdn_base_url: String,

    /// Content store project the image assets belong to
    pub image_project_id: Option<String>,

    /// Content store dataset the image assets belong to
    pub image_dataset: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            cdn_base_url: SANITY_CDN_URL.into(),
            image_project_id: None,
            image_dataset: "production".into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| std::env::var(name).unwrap_or(default);

        Self {
            bind_addr: var("BIND_ADDR", defaults.bind_addr),
            static_dir: var("STATIC_DIR", defaults.static_dir),
            cdn_base_url: var("SANITY_CDN_URL", defaults.cdn_base_url),
            image_project_id: std::env::var("SANITY_PROJECT_ID").ok(),
            image_dataset: var("SANITY_DATASET", defaults.image_dataset),
        }
    }

    /// Image URL builder for the configured project
    ///
    /// Without a project id the seeded development catalog's placeholder
    /// project is used.
    pub fn image_urls(&self) -> anyhow::Result<ImageUrlBuilder> {
        let project = self.image_project_id.as_deref().unwrap_or("demo");
        Ok(ImageUrlBuilder::new(
            &self.cdn_base_url,
            project,
            self.image_dataset.as_str(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_urls() {
        let config = ServerConfig::default();
        let images = config.image_urls().unwrap();
        let url = images
            .url_for(&store_core::AssetRef::new("image-abc-10x10-png"))
            .unwrap();
        assert_eq!(url.as_str(), "https://cdn.sanity.io/images/demo/production/abc-10x10.png");
    }

    #[test]
    fn test_bad_cdn_base() {
        let config = ServerConfig {
            cdn_base_url: "::::".into(),
            ..ServerConfig::default()
        };
        assert!(config.image_urls().is_err());
    }
}
