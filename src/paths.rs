/// Host of the live (non-CDN) query API. The CDN host would serve cached
/// documents; page renders must always see the current dataset state.
pub const API_HOST: &str = "api.sanity.io";

/// Default API version date used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
