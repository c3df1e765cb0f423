mod common;

use common::{StdioServer, inventory_json};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn failed_load_is_reported_and_retried() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let inventory = dir.path().join("inventory.json");
    // spawn against a path that does not exist yet
    let mut server = StdioServer::spawn(&inventory);

    let result = server.call_tool(
        1,
        "brand.get_asset",
        json!({"request": "CIQ logo", "background": "light", "element_role": "main"}),
    );
    assert_eq!(result.get("isError"), Some(&json!(true)));
    assert_eq!(
        result["structuredContent"]["error"]["kind"],
        json!("catalog_unavailable")
    );
    let text = result["content"][0]["text"].as_str().expect("text");
    assert!(text.contains("try again"));

    // the failure is not fatal: the server keeps answering
    let response = server.call(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    }));
    assert!(response.get("result").is_some());

    // and the next call retries the load
    std::fs::write(&inventory, inventory_json())?;
    let result = server.call_tool(
        3,
        "brand.get_asset",
        json!({"request": "CIQ logo", "background": "light", "element_role": "main"}),
    );
    assert_eq!(result.get("isError"), Some(&json!(false)));
    assert_eq!(
        result["structuredContent"]["asset_key"],
        json!("2color-light")
    );

    Ok(())
}
