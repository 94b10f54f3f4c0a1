use actix_web::HttpRequest;
use url::Url;

use crate::modules::media::application::domain::{MediaConfig, MediaUrlResolver};

/// Builds a resolver producing absolute URLs on the scheme and host the
/// client used (honouring `Forwarded` / `X-Forwarded-*`). Falls back to
/// relative paths when the host header cannot form a valid URL.
pub fn url_resolver_for(req: &HttpRequest, config: &MediaConfig) -> MediaUrlResolver {
    let info = req.connection_info();
    let base = Url::parse(&format!("{}://{}/", info.scheme(), info.host())).ok();

    MediaUrlResolver::new(base, config)
}
