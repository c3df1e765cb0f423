use serde_json::json;

pub const TOOL_GET_ASSET: &str = "brand.get_asset";
pub const TOOL_LIST_ASSETS: &str = "brand.list_assets";
pub const TOOL_GUIDELINES: &str = "brand.guidelines";

pub const RESOURCE_INVENTORY_URI: &str = "brand://inventory";

pub const DEFAULT_INVENTORY_URL: &str =
    "https://raw.githubusercontent.com/b-ciq/brand-assets/main/metadata/asset-inventory.json";

pub const CATALOG_FETCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_ASSET_SIZE: &str = "medium";
pub const MAX_LISTED_PER_CATEGORY: usize = 3;

pub fn get_asset_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "request": {
                "type": "string",
                "description": "What logo do you need? e.g. \"CIQ logo for a slide footer\" or \"Fuzzball symbol\""
            },
            "background": { "type": "string", "enum": ["light", "dark"] },
            "element_role": { "type": "string", "enum": ["main", "supporting"] },
            "design_context": {
                "type": "string",
                "description": "Free-text description of the surrounding design"
            }
        },
        "required": ["request"],
        "additionalProperties": false
    })
}

pub fn list_assets_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

pub fn guidelines_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}
