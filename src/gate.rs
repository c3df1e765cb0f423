use crate::attributes::{Background, ElementRole};

/// Outcome of the company-brand attribute ladder.
///
/// The gate resolves the moment both required attributes are present,
/// whatever order they arrived in; nothing already supplied is re-asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyGate {
    Resolved {
        background: Background,
        element_role: ElementRole,
    },
    Clarify {
        background: Option<Background>,
        element_role: Option<ElementRole>,
    },
}

pub fn resolve_company(
    background: Option<Background>,
    element_role: Option<ElementRole>,
) -> CompanyGate {
    match (background, element_role) {
        (Some(background), Some(element_role)) => CompanyGate::Resolved {
            background,
            element_role,
        },
        (background, element_role) => CompanyGate::Clarify {
            background,
            element_role,
        },
    }
}

/// Product mode swaps the role axis for the layout axis, which defaults, so
/// only the background needs to be pinned down before recommending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductGate {
    Resolved { background: Background },
    Clarify,
}

pub fn resolve_product(background: Option<Background>) -> ProductGate {
    match background {
        Some(background) => ProductGate::Resolved { background },
        None => ProductGate::Clarify,
    }
}
