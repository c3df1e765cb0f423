use crate::attributes::{
    ADVERTISING_TERMS, Background, COLORFUL_TERMS, ElementRole, MINIMAL_TERMS, contains_any,
};
use crate::catalog::{AssetVariant, Catalog, CatalogError};
use crate::mcp::contracts::DEFAULT_ASSET_SIZE;
use thiserror::Error;

/// Output of the decision tables: a catalog key plus the rule that fired.
///
/// Pure value; identical inputs against an unchanged catalog produce equal
/// recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub asset_key: String,
    pub reasoning: String,
}

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("asset inventory unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
    #[error("no {brand} asset under key '{asset_key}'")]
    UnknownAsset { brand: String, asset_key: String },
}

/// Company color-scheme axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    OneColor,
    TwoColor,
    Green,
}

impl ColorScheme {
    pub fn key_segment(self) -> &'static str {
        match self {
            ColorScheme::OneColor => "1color",
            ColorScheme::TwoColor => "2color",
            ColorScheme::Green => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::OneColor => "1-color",
            ColorScheme::TwoColor => "2-color",
            ColorScheme::Green => "green accent",
        }
    }
}

const REASON_MAIN: &str =
    "Maximum brand recognition - the 2-color version carries full brand color when the logo is the primary element.";
const REASON_COLORFUL: &str =
    "Clean and professional - the neutral 1-color mark won't compete with a colorful or busy design.";
const REASON_MINIMAL_AD: &str =
    "In a minimal composition the green accent helps the logo stand out instead of blending in.";
const REASON_DEFAULT: &str =
    "Clean and professional - the 1-color version is the safe default for supporting placements.";

/// Company decision table: role axis first, then the context axis for
/// supporting placements. Total over the input domain; every combination of
/// role and context lands in exactly one arm.
pub fn company_scheme(
    element_role: ElementRole,
    design_context: &str,
) -> (ColorScheme, &'static str) {
    match element_role {
        ElementRole::Main => (ColorScheme::TwoColor, REASON_MAIN),
        ElementRole::Supporting => {
            if contains_any(design_context, COLORFUL_TERMS) {
                (ColorScheme::OneColor, REASON_COLORFUL)
            } else if contains_any(design_context, MINIMAL_TERMS)
                && contains_any(design_context, ADVERTISING_TERMS)
            {
                // Both cues are required; minimal alone falls through.
                (ColorScheme::Green, REASON_MINIMAL_AD)
            } else {
                (ColorScheme::OneColor, REASON_DEFAULT)
            }
        }
    }
}

pub fn recommend_company<'a>(
    catalog: &'a Catalog,
    background: Background,
    element_role: ElementRole,
    design_context: &str,
) -> Result<(Recommendation, &'a AssetVariant), RecommendError> {
    let (scheme, reasoning) = company_scheme(element_role, design_context);
    let asset_key = format!("{}-{}", scheme.key_segment(), background.as_str());
    let asset = catalog
        .company_asset(&asset_key)
        .ok_or_else(|| RecommendError::UnknownAsset {
            brand: "CIQ".to_string(),
            asset_key: asset_key.clone(),
        })?;
    Ok((
        Recommendation {
            asset_key,
            reasoning: reasoning.to_string(),
        },
        asset,
    ))
}

/// Product layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Icon,
    Horizontal,
    Vertical,
}

impl Layout {
    pub fn key_segment(self) -> &'static str {
        match self {
            Layout::Icon => "icon",
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layout::Icon => "symbol",
            Layout::Horizontal => "horizontal lockup",
            Layout::Vertical => "vertical lockup",
        }
    }
}

const REASON_ICON: &str =
    "Symbol only, as requested - just the recognizable icon with no text lockup.";
const REASON_VERTICAL_EXPLICIT: &str = "Vertical lockup, as requested - symbol stacked over text.";
const REASON_HORIZONTAL_EXPLICIT: &str =
    "Horizontal lockup, as requested - symbol and text side by side.";
const REASON_SQUARE: &str =
    "The vertical lockup fits square and social-profile surfaces better than the wide lockup.";
const REASON_HORIZONTAL_DEFAULT: &str =
    "The horizontal lockup is the default full logo - symbol and text side by side for most placements.";

/// Product decision table. The icon layout is never selected without an
/// explicit symbol/icon cue; the horizontal lockup is the default.
pub fn product_layout(request: &str, design_context: &str) -> (Layout, &'static str) {
    let explicit = |terms: &[&str]| {
        contains_any(request, terms) || contains_any(design_context, terms)
    };
    if explicit(&["symbol", "icon"]) {
        (Layout::Icon, REASON_ICON)
    } else if explicit(&["vertical", "stacked"]) {
        (Layout::Vertical, REASON_VERTICAL_EXPLICIT)
    } else if explicit(&["horizontal", "lockup", "logotype"]) {
        (Layout::Horizontal, REASON_HORIZONTAL_EXPLICIT)
    } else if explicit(&["square", "social", "profile"]) {
        (Layout::Vertical, REASON_SQUARE)
    } else {
        (Layout::Horizontal, REASON_HORIZONTAL_DEFAULT)
    }
}

pub fn recommend_product<'a>(
    catalog: &'a Catalog,
    product_id: &str,
    display_name: &str,
    background: Background,
    request: &str,
    design_context: &str,
) -> Result<(Recommendation, &'a AssetVariant), RecommendError> {
    let (layout, reasoning) = product_layout(request, design_context);
    let ink = match background {
        Background::Light => "blk",
        Background::Dark => "wht",
    };
    let asset_key = format!("{}-{}-{}", layout.key_segment(), ink, DEFAULT_ASSET_SIZE);
    let asset = catalog
        .product_asset(product_id, &asset_key)
        .ok_or_else(|| RecommendError::UnknownAsset {
            brand: display_name.to_string(),
            asset_key: asset_key.clone(),
        })?;
    Ok((
        Recommendation {
            asset_key,
            reasoning: reasoning.to_string(),
        },
        asset,
    ))
}
