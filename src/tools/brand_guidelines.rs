use crate::catalog::CatalogStore;
use crate::format;
use crate::mcp::errors;
use crate::tools::error_result;
use serde_json::{Value, json};

pub fn call(store: &CatalogStore, _args: &Value) -> Value {
    let catalog = match store.get() {
        Ok(catalog) => catalog,
        Err(_) => {
            return error_result(
                errors::CATALOG_UNAVAILABLE,
                format::CATALOG_UNAVAILABLE_MESSAGE,
                None,
            );
        }
    };

    let rules = catalog.guidelines();
    json!({
        "content": [{"type": "text", "text": format::guidelines(&catalog)}],
        "structuredContent": {
            "clear_space": rules.clear_space,
            "minimum_size": rules.minimum_size,
            "primary_green": rules.primary_green,
            "brands": format::available_brands(&catalog),
        },
        "isError": false
    })
}
