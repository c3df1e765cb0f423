use crate::attributes::{self, Background, BrandQuery, ElementRole};
use crate::catalog::{Catalog, CatalogStore};
use crate::engine::{self, RecommendError};
use crate::format;
use crate::gate::{self, CompanyGate, ProductGate};
use crate::mcp::errors;
use crate::tools::{clarification_result, error_result};
use serde_json::{Value, json};
use tracing::debug;

pub fn call(store: &CatalogStore, args: &Value) -> Value {
    let Some(obj) = args.as_object() else {
        return error_result(errors::INVALID_INPUT, "arguments must be an object", None);
    };
    let Some(request) = obj.get("request").and_then(Value::as_str) else {
        return error_result(errors::INVALID_INPUT, "request must be a string", None);
    };

    let catalog = match store.get() {
        Ok(catalog) => catalog,
        Err(err) => return render_error(RecommendError::from(err)),
    };

    let design_context = obj
        .get("design_context")
        .and_then(Value::as_str)
        .unwrap_or("");
    // Explicitly supplied fields win; free-text cues in the request fill the
    // gaps. Out-of-enum values count as absent, so the gate re-prompts.
    let background =
        Background::from_value(obj.get("background")).or_else(|| attributes::background_cue(request));
    let element_role =
        ElementRole::from_value(obj.get("element_role")).or_else(|| attributes::role_cue(request));

    let brand = attributes::detect_brand(request);
    debug!(?brand, ?background, ?element_role, "resolved request attributes");

    match brand {
        BrandQuery::Unclear => clarification_result(
            format::unclear_question(&catalog),
            json!({
                "missing": ["brand"],
                "known": known(background, element_role, design_context),
                "options": format::available_brands(&catalog),
            }),
        ),
        BrandQuery::Company => {
            recommend_company(&catalog, background, element_role, design_context)
        }
        BrandQuery::Product(product_id) => recommend_product(
            &catalog,
            &product_id,
            background,
            request,
            design_context,
        ),
    }
}

fn recommend_company(
    catalog: &Catalog,
    background: Option<Background>,
    element_role: Option<ElementRole>,
    design_context: &str,
) -> Value {
    match gate::resolve_company(background, element_role) {
        CompanyGate::Clarify {
            background,
            element_role,
        } => {
            let mut missing = Vec::new();
            if background.is_none() {
                missing.push("background");
            }
            if element_role.is_none() {
                missing.push("element_role");
            }
            clarification_result(
                format::company_question(background, element_role),
                json!({
                    "missing": missing,
                    "known": known(background, element_role, design_context),
                }),
            )
        }
        CompanyGate::Resolved {
            background,
            element_role,
        } => {
            let (scheme, _) = engine::company_scheme(element_role, design_context);
            match engine::recommend_company(catalog, background, element_role, design_context) {
                Ok((recommendation, asset)) => {
                    let text = format::recommendation(
                        format::COMPANY_NAME,
                        &format!("{} logo", scheme.label()),
                        asset,
                        &recommendation.reasoning,
                        catalog.guidelines(),
                    );
                    recommended_result(
                        text,
                        format::COMPANY_NAME,
                        &recommendation,
                        asset,
                        background,
                    )
                }
                Err(err) => render_error(err),
            }
        }
    }
}

fn recommend_product(
    catalog: &Catalog,
    product_id: &str,
    background: Option<Background>,
    request: &str,
    design_context: &str,
) -> Value {
    let display = format::display_name(product_id);
    if catalog.product_assets(product_id).is_none() {
        return error_result(
            errors::RECOMMENDATION_UNAVAILABLE,
            format!("Sorry, I don't have {display} logos available yet."),
            Some(product_id),
        );
    }

    match gate::resolve_product(background) {
        ProductGate::Clarify => clarification_result(
            format::product_question(product_id),
            json!({
                "missing": ["background"],
                "known": known(None, None, design_context),
                "brand": display,
            }),
        ),
        ProductGate::Resolved { background } => {
            let (layout, _) = engine::product_layout(request, design_context);
            match engine::recommend_product(
                catalog,
                product_id,
                &display,
                background,
                request,
                design_context,
            ) {
                Ok((recommendation, asset)) => {
                    let text = format::recommendation(
                        &display,
                        layout.label(),
                        asset,
                        &recommendation.reasoning,
                        catalog.guidelines(),
                    );
                    recommended_result(text, &display, &recommendation, asset, background)
                }
                Err(err) => render_error(err),
            }
        }
    }
}

fn recommended_result(
    text: String,
    brand: &str,
    recommendation: &engine::Recommendation,
    asset: &crate::catalog::AssetVariant,
    background: Background,
) -> Value {
    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": {
            "status": "recommended",
            "brand": brand,
            "asset_key": recommendation.asset_key,
            "filename": asset.filename,
            "url": asset.url,
            "background": background.as_str(),
            "reasoning": recommendation.reasoning,
            "guidance": asset.guidance,
        },
        "isError": false
    })
}

fn known(
    background: Option<Background>,
    element_role: Option<ElementRole>,
    design_context: &str,
) -> Value {
    json!({
        "background": background.map(Background::as_str),
        "element_role": element_role.map(ElementRole::as_str),
        "design_context": if design_context.is_empty() { Value::Null } else { json!(design_context) },
    })
}

fn render_error(err: RecommendError) -> Value {
    match err {
        RecommendError::CatalogUnavailable(_) => error_result(
            errors::CATALOG_UNAVAILABLE,
            format::CATALOG_UNAVAILABLE_MESSAGE,
            None,
        ),
        RecommendError::UnknownAsset { brand, asset_key } => error_result(
            errors::RECOMMENDATION_UNAVAILABLE,
            format::recommendation_unavailable_message(&brand, &asset_key),
            Some(&asset_key),
        ),
    }
}
