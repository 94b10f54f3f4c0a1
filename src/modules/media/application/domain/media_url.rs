use url::Url;

use super::AssetRef;

/// Where stored assets are published, e.g. `/media/` or `https://cdn.example.com/media/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    prefix: String,
}

impl MediaConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let raw = prefix.into();
        let trimmed = raw.trim();

        let mut prefix = if is_absolute_url(trimmed) || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        if !prefix.ends_with('/') {
            prefix.push('/');
        }

        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self::new("/media/")
    }
}

/// Turns asset references into URLs.
///
/// With a base URL (the scheme and host of the current request) the result is
/// absolute; without one it is the relative media path. A missing asset
/// resolves to `None`, never to an error.
#[derive(Debug, Clone)]
pub struct MediaUrlResolver {
    base_url: Option<Url>,
    media_prefix: String,
}

impl MediaUrlResolver {
    pub fn new(base_url: Option<Url>, config: &MediaConfig) -> Self {
        Self {
            base_url,
            media_prefix: config.prefix().to_string(),
        }
    }

    /// Resolver without request context, producing relative paths.
    pub fn relative(config: &MediaConfig) -> Self {
        Self::new(None, config)
    }

    pub fn resolve(&self, asset: Option<&AssetRef>) -> Option<String> {
        asset.map(|a| self.url_for_path(&a.file_path))
    }

    pub fn url_for_path(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }

        let published = format!("{}{}", self.media_prefix, path.trim_start_matches('/'));
        if is_absolute_url(&published) {
            return published;
        }

        match &self.base_url {
            Some(base) => base
                .join(&published)
                .map(|url| url.to_string())
                .unwrap_or(published),
            None => published,
        }
    }
}

fn is_absolute_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::AssetKind;
    use uuid::Uuid;

    fn asset(path: &str) -> AssetRef {
        AssetRef {
            id: Uuid::new_v4(),
            file_path: path.to_string(),
            original_name: "file.png".to_string(),
            kind: AssetKind::Image,
        }
    }

    fn base(url: &str) -> Option<Url> {
        Some(Url::parse(url).unwrap())
    }

    #[test]
    fn config_normalizes_slashes() {
        assert_eq!(MediaConfig::new("media").prefix(), "/media/");
        assert_eq!(MediaConfig::new("/uploads").prefix(), "/uploads/");
        assert_eq!(MediaConfig::new("/media/").prefix(), "/media/");
        assert_eq!(
            MediaConfig::new("https://cdn.example.com/m").prefix(),
            "https://cdn.example.com/m/"
        );
    }

    #[test]
    fn missing_asset_resolves_to_none() {
        let resolver = MediaUrlResolver::new(base("http://api.test/"), &MediaConfig::default());
        assert_eq!(resolver.resolve(None), None);
    }

    #[test]
    fn relative_without_request_context() {
        let resolver = MediaUrlResolver::relative(&MediaConfig::default());
        let url = resolver.resolve(Some(&asset("images/profile.png")));
        assert_eq!(url.as_deref(), Some("/media/images/profile.png"));
    }

    #[test]
    fn absolute_with_request_context() {
        let resolver =
            MediaUrlResolver::new(base("https://portfolio.test:8443/"), &MediaConfig::default());
        let url = resolver.resolve(Some(&asset("/images/profile.png")));
        assert_eq!(
            url.as_deref(),
            Some("https://portfolio.test:8443/media/images/profile.png")
        );
    }

    #[test]
    fn absolute_asset_paths_pass_through() {
        let resolver = MediaUrlResolver::new(base("http://api.test/"), &MediaConfig::default());
        let url = resolver.resolve(Some(&asset("https://bucket.example.com/a.png")));
        assert_eq!(url.as_deref(), Some("https://bucket.example.com/a.png"));
    }

    #[test]
    fn cdn_prefix_ignores_request_host() {
        let config = MediaConfig::new("https://cdn.example.com/media/");
        let resolver = MediaUrlResolver::new(base("http://api.test/"), &config);
        let url = resolver.resolve(Some(&asset("logo.svg")));
        assert_eq!(url.as_deref(), Some("https://cdn.example.com/media/logo.svg"));
    }
}
