use crate::attributes::{Background, ElementRole};
use crate::catalog::{AssetVariant, BrandGuidelines, Catalog};
use crate::mcp::contracts::MAX_LISTED_PER_CATEGORY;

pub const COMPANY_NAME: &str = "CIQ";

/// Display names for the known product ids; anything the inventory grows
/// later falls back to title-casing the id.
pub fn display_name(product_id: &str) -> String {
    match product_id {
        "fuzzball" => "Fuzzball".to_string(),
        "apptainer" => "Apptainer".to_string(),
        "warewulf-pro" => "Warewulf Pro".to_string(),
        "ascender-pro" => "Ascender Pro".to_string(),
        "bridge" => "Bridge".to_string(),
        "rlcx" => "RLC(X)".to_string(),
        "ciq-support" => "CIQ Support".to_string(),
        other => title_case(other),
    }
}

fn title_case(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn product_blurb(product_id: &str) -> Option<&'static str> {
    match product_id {
        "fuzzball" => Some("HPC/AI workload management platform"),
        "apptainer" => Some("Container platform for HPC/scientific workflows"),
        "warewulf-pro" => Some("HPC cluster provisioning tool"),
        "ascender-pro" => Some("Infrastructure automation platform"),
        "bridge" => Some("CentOS 7 migration solution"),
        "rlcx" => Some("Rocky Linux Commercial (AI, Hardened variants)"),
        "ciq-support" => Some("CIQ support and services"),
        _ => None,
    }
}

/// Caller-facing rendering of a resolved recommendation.
pub fn recommendation(
    brand_label: &str,
    variant_label: &str,
    asset: &AssetVariant,
    reasoning: &str,
    guidelines: &BrandGuidelines,
) -> String {
    let mut out = format!("Here's your {brand_label} {variant_label}:\n\n");
    if !asset.description.is_empty() {
        out.push_str(&format!("{}\n\n", asset.description));
    }
    out.push_str(&format!("**Download:** {}\n\n", asset.url));
    out.push_str(&format!("{reasoning}\n"));
    if !asset.guidance.is_empty() {
        out.push_str(&format!("\n{}\n", asset.guidance));
    }
    out.push_str(&format!(
        "\nKeep clear space {} and never go below {}.",
        lowercase_first(&guidelines.clear_space),
        guidelines.minimum_size
    ));
    out
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

const BACKGROUND_OPTIONS: &str =
    "What **background**:\n• **Light background** (dark logo)\n• **Dark background** (light logo)";
const ROLE_OPTIONS: &str = "Is the logo the **main element** or a **supporting element**:\n• **Main** - the focal point of the design\n• **Supporting** - a secondary mark alongside other content";

/// Clarifying question for the company brand. One combined question when
/// both attributes are missing, background listed first.
pub fn company_question(
    background: Option<Background>,
    element_role: Option<ElementRole>,
) -> String {
    match (background, element_role) {
        (None, Some(role)) => format!(
            "{COMPANY_NAME} logo as a {} element - got it!\n\n{BACKGROUND_OPTIONS}",
            role.as_str()
        ),
        (Some(background), None) => format!(
            "{COMPANY_NAME} logo for a {} background - got it!\n\n{ROLE_OPTIONS}",
            background.as_str()
        ),
        _ => {
            format!("{COMPANY_NAME} logo - got it!\n\n{BACKGROUND_OPTIONS}\n\nAnd: {ROLE_OPTIONS}")
        }
    }
}

pub fn product_question(product_id: &str) -> String {
    format!(
        "{} logo - got it!\n\nWhat **background**:\n• **Light background** (black logo)\n• **Dark background** (white logo)",
        display_name(product_id)
    )
}

/// Question for requests that name no recognizable brand, listing the
/// company plus every product the catalog actually carries.
pub fn unclear_question(catalog: &Catalog) -> String {
    let mut out = String::from("Which logo do you need?\n\n**Company Brand:**\n");
    out.push_str(&format!("• **{COMPANY_NAME}** - Main company logo\n"));

    let products: Vec<&str> = catalog.product_ids().collect();
    if !products.is_empty() {
        out.push_str("\n**Product Brands:**\n");
        for product_id in &products {
            match product_blurb(product_id) {
                Some(blurb) => out.push_str(&format!(
                    "• **{}** - {blurb}\n",
                    display_name(product_id)
                )),
                None => out.push_str(&format!("• **{}**\n", display_name(product_id))),
            }
        }
    }

    out.push_str(&format!(
        "\nExample: \"{COMPANY_NAME} logo\", \"Fuzzball logo\", \"Warewulf symbol\""
    ));
    out
}

/// The full library listing, capped per category with an overflow line.
pub fn listing(catalog: &Catalog) -> String {
    let mut out = format!("# {COMPANY_NAME} Brand Assets Library\n\n");

    let mut sections: Vec<(String, &std::collections::BTreeMap<String, AssetVariant>)> =
        vec![(format!("{COMPANY_NAME} Logos"), catalog.company_assets())];
    for (product_id, assets) in catalog.products() {
        sections.push((format!("{} Logos", display_name(product_id)), assets));
    }

    for (heading, assets) in sections {
        if assets.is_empty() {
            continue;
        }
        out.push_str(&format!("## {heading}\n\n"));
        for (_, asset) in assets.iter().take(MAX_LISTED_PER_CATEGORY) {
            if asset.description.is_empty() {
                out.push_str(&format!("• **{}**\n  {}\n\n", asset.filename, asset.url));
            } else {
                out.push_str(&format!(
                    "• **{}** - {}\n  {}\n\n",
                    asset.filename, asset.description, asset.url
                ));
            }
        }
        if assets.len() > MAX_LISTED_PER_CATEGORY {
            out.push_str(&format!(
                "• *...and {} more variants*\n\n",
                assets.len() - MAX_LISTED_PER_CATEGORY
            ));
        }
    }

    let brands = available_brands(catalog).join(", ");
    out.push_str(&format!(
        "## Quick Reference\n\n\
         **Available Brands:** {brands}\n\n\
         **For {COMPANY_NAME}:**\n\
         - **1-color** - Standard version\n\
         - **2-color** - Hero version for primary branding\n\n\
         **For All Other Products:**\n\
         - **Symbol only** - Just the icon (tight spaces)\n\
         - **Horizontal/vertical lockup** - Symbol + text (primary branding)\n\n\
         **All brands available for:**\n\
         - **Light background** (dark logo)\n\
         - **Dark background** (light logo)\n\n\
         Just tell me what you need: \"Apptainer logo\", \"Warewulf symbol for dark background\", etc."
    ));
    out
}

/// Brand guidelines document.
pub fn guidelines(catalog: &Catalog) -> String {
    let rules = catalog.guidelines();
    let brands = available_brands(catalog);
    format!(
        "# {COMPANY_NAME} Brand Guidelines\n\n\
         ## Available Brands\n\n\
         **{count} Available:** {brand_list}\n\n\
         ## Logo Usage Rules\n\n\
         **Clear Space:**\n\
         • Maintain clear space equal to **{clear_space}**\n\
         • Never place text, images, or other elements within this protected area\n\n\
         **Minimum Size:**\n\
         • **Digital:** {minimum_size}\n\
         • Always maintain aspect ratio - never stretch or compress\n\n\
         ## Brand Colors\n\n\
         **Primary Green:** `{primary_green}` (PMS 347)\n\n\
         ## Logo Selection Guide\n\n\
         **{COMPANY_NAME} Logos:**\n\
         • **1-color** - Standard version for most applications\n\
         • **2-color** - Hero version when the logo is the primary visual element\n\n\
         **Product Logos:**\n\
         • **Symbol only** - When space is limited or you need just the recognizable icon\n\
         • **Horizontal lockup** - The default full logo for most placements\n\
         • **Vertical lockup** - For square surfaces and social profiles\n\n\
         **Background Selection (All Brands):**\n\
         • Light background = dark logo, Dark background = light logo\n\n\
         ## What NOT to Do\n\
         • Don't alter logo colors, fonts, or proportions\n\
         • Don't place logos on busy backgrounds without proper contrast\n\
         • Don't ignore minimum size requirements\n\
         • Don't use outdated logo versions\n\n\
         Need help choosing? Just describe what you need: \"Apptainer logo\", \"Warewulf symbol\", etc.",
        count = brands.len(),
        brand_list = brands.join(", "),
        clear_space = rules.clear_space,
        minimum_size = rules.minimum_size,
        primary_green = rules.primary_green,
    )
}

pub fn available_brands(catalog: &Catalog) -> Vec<String> {
    let mut brands = Vec::new();
    if !catalog.company_assets().is_empty() {
        brands.push(COMPANY_NAME.to_string());
    }
    brands.extend(catalog.product_ids().map(display_name));
    brands
}

pub const CATALOG_UNAVAILABLE_MESSAGE: &str =
    "Sorry, I couldn't load the brand assets data. Please try again later.";

pub fn recommendation_unavailable_message(brand: &str, asset_key: &str) -> String {
    format!("Sorry, I couldn't find a matching {brand} asset (looked for '{asset_key}').")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    fn catalog() -> Catalog {
        let doc = json!({
            "logos": {
                "1color-light": {
                    "filename": "CIQ-1c-light.png",
                    "url": "https://a/1l.png",
                    "description": "One color logo for light backgrounds"
                },
                "1color-dark": {"filename": "b.png", "url": "https://a/b.png"},
                "2color-light": {"filename": "c.png", "url": "https://a/c.png"},
                "2color-dark": {"filename": "d.png", "url": "https://a/d.png"},
                "green-light": {"filename": "e.png", "url": "https://a/e.png"}
            },
            "fuzzball_logos": {
                "horizontal-blk-medium": {"filename": "f.png", "url": "https://a/f.png"}
            }
        })
        .to_string();
        Catalog::from_json(&doc).expect("catalog")
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name("fuzzball"), "Fuzzball");
        assert_eq!(display_name("warewulf-pro"), "Warewulf Pro");
        assert_eq!(display_name("rlcx"), "RLC(X)");
        assert_eq!(display_name("some_new-product"), "Some New Product");
    }

    #[test]
    fn combined_question_lists_background_first() {
        let question = company_question(None, None);
        let background_at = question.find("background").expect("background mentioned");
        let role_at = question.find("main element").expect("role mentioned");
        assert!(background_at < role_at);
    }

    #[test]
    fn question_never_reasks_supplied_attributes() {
        let question = company_question(Some(Background::Dark), None);
        assert!(question.contains("dark background - got it!"));
        assert!(!question.contains("**Light background**"));

        let question = company_question(None, Some(ElementRole::Supporting));
        assert!(question.contains("supporting element - got it!"));
        assert!(!question.contains("focal point"));
    }

    #[test]
    fn unclear_question_lists_catalog_products() {
        let question = unclear_question(&catalog());
        assert!(question.contains("**CIQ** - Main company logo"));
        assert!(question.contains("**Fuzzball** - HPC/AI workload management platform"));
    }

    #[test]
    fn listing_caps_each_category() {
        let text = listing(&catalog());
        assert!(text.contains("## CIQ Logos"));
        assert!(text.contains("## Fuzzball Logos"));
        // 5 company assets, cap is 3
        assert!(text.contains("...and 2 more variants"));
        assert!(text.contains("One color logo for light backgrounds"));
    }

    #[test]
    fn guidelines_render_brand_rules() {
        let text = guidelines(&catalog());
        assert!(text.contains("Equal to 1/4 the height of the 'Q' in the logo"));
        assert!(text.contains("70px height for digital applications"));
        assert!(text.contains("`#229529`"));
        assert!(text.contains("CIQ, Fuzzball"));
    }

    #[test]
    fn recommendation_includes_link_reasoning_and_rules() {
        let catalog = catalog();
        let asset = catalog.company_asset("1color-light").expect("asset");
        let text = recommendation(
            "CIQ",
            "1-color logo",
            asset,
            "Clean and professional.",
            catalog.guidelines(),
        );
        assert!(text.starts_with("Here's your CIQ 1-color logo:"));
        assert!(text.contains("**Download:** https://a/1l.png"));
        assert!(text.contains("Clean and professional."));
        assert!(text.contains("Keep clear space equal to 1/4 the height of the 'Q'"));
    }
}
