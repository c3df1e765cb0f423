use serde_json::json;

pub mod brand_guidelines;
pub mod get_brand_asset;
pub mod list_all_assets;

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// A clarifying question is a successful result, not an error: the caller
/// is expected to answer and call again with the attributes filled in.
pub fn clarification_result(
    question: impl Into<String>,
    mut structured: serde_json::Value,
) -> serde_json::Value {
    let question = question.into();
    if let Some(obj) = structured.as_object_mut() {
        obj.insert("status".to_string(), json!("needs_clarification"));
    }
    json!({
        "content": [{"type": "text", "text": question}],
        "structuredContent": structured,
        "isError": false
    })
}
