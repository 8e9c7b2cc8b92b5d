// 🌍 Cross-Origin Policy
// Any origin, any method, any header, credentials allowed.
//
// Credentialed requests may not use the literal `*`, so origin, method and
// headers are mirrored back from the request instead.

use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// How long browsers may cache a preflight answer
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// Creates the CORS layer applied to every route.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
