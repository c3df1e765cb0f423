pub const INVALID_INPUT: &str = "invalid_input";
pub const CATALOG_UNAVAILABLE: &str = "catalog_unavailable";
pub const RECOMMENDATION_UNAVAILABLE: &str = "recommendation_unavailable";
