//! Cross-origin policy

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{config::CorsConfig, error::ServerError, error::ServerResult};

/// Build the CORS layer described by the config.
///
/// A wildcard origin with credentials mirrors the caller's origin, method
/// and headers, since browsers refuse `*` on credentialed requests.
pub fn cors_layer(config: &CorsConfig) -> ServerResult<CorsLayer> {
    let layer = match (config.allows_any_origin(), config.allow_credentials) {
        (true, true) => CorsLayer::very_permissive(),
        (true, false) => CorsLayer::permissive(),
        (false, credentials) => {
            let origins = config
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin {
                        origin: origin.clone(),
                    })
                })
                .collect::<ServerResult<Vec<_>>>()?;

            let layer = CorsLayer::new().allow_origin(AllowOrigin::list(origins));
            if credentials {
                layer
                    .allow_credentials(true)
                    .allow_methods(tower_http::cors::AllowMethods::mirror_request())
                    .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
            } else {
                layer.allow_methods(Any).allow_headers(Any)
            }
        }
    };

    Ok(match config.max_age {
        Some(secs) => layer.max_age(Duration::from_secs(secs)),
        None => layer,
    })
}
