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

    let mut categories = vec![json!({
        "id": "ciq",
        "brand": format::COMPANY_NAME,
        "count": catalog.company_assets().len(),
    })];
    for (product_id, assets) in catalog.products() {
        categories.push(json!({
            "id": product_id,
            "brand": format::display_name(product_id),
            "count": assets.len(),
        }));
    }

    json!({
        "content": [{"type": "text", "text": format::listing(&catalog)}],
        "structuredContent": {
            "categories": categories,
            "total": catalog.total_assets(),
        },
        "isError": false
    })
}
