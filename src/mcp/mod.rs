use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_GET_ASSET,
            "description": "Recommend the right brand logo variant for a described use and return its download link.",
            "inputSchema": contracts::get_asset_schema()
        }),
        json!({
            "name": contracts::TOOL_LIST_ASSETS,
            "description": "List all available brand assets with descriptions and download links.",
            "inputSchema": contracts::list_assets_schema()
        }),
        json!({
            "name": contracts::TOOL_GUIDELINES,
            "description": "Get the brand guidelines and logo usage rules.",
            "inputSchema": contracts::guidelines_schema()
        }),
    ]
}

pub fn resource_definitions() -> Vec<serde_json::Value> {
    vec![json!({
        "uri": contracts::RESOURCE_INVENTORY_URI,
        "name": "asset-inventory",
        "description": "The raw asset inventory document as fetched.",
        "mimeType": "application/json"
    })]
}
