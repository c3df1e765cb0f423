use crate::mcp::contracts::CATALOG_FETCH_TIMEOUT_MS;
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// One pre-rendered logo file as described by the inventory document.
///
/// Only `filename` and `url` are mandatory; the generator scripts have
/// produced several vintages of the document, so everything else defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetVariant {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub guidance: String,
    #[serde(default)]
    pub use_cases: BTreeSet<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandGuidelines {
    #[serde(default = "default_clear_space")]
    pub clear_space: String,
    #[serde(default = "default_minimum_size")]
    pub minimum_size: String,
    #[serde(default = "default_primary_green")]
    pub primary_green: String,
}

fn default_clear_space() -> String {
    "Equal to 1/4 the height of the 'Q' in the logo".to_string()
}

fn default_minimum_size() -> String {
    "70px height for digital applications".to_string()
}

fn default_primary_green() -> String {
    "#229529".to_string()
}

impl Default for BrandGuidelines {
    fn default() -> Self {
        Self {
            clear_space: default_clear_space(),
            minimum_size: default_minimum_size(),
            primary_green: default_primary_green(),
        }
    }
}

#[derive(Deserialize)]
struct InventoryDoc {
    #[serde(default)]
    brand_guidelines: BrandGuidelines,
    #[serde(flatten)]
    categories: BTreeMap<String, Value>,
}

/// In-memory snapshot of the inventory document.
///
/// The company brand lives under the document's `logos` key; every other
/// key ending in `_logos` is a product category whose id is the key with
/// the suffix stripped. Remaining top-level keys are advisory and ignored.
#[derive(Debug)]
pub struct Catalog {
    guidelines: BrandGuidelines,
    company: BTreeMap<String, AssetVariant>,
    products: BTreeMap<String, BTreeMap<String, AssetVariant>>,
    raw_json: String,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let doc: InventoryDoc = serde_json::from_str(text)?;

        let mut company = BTreeMap::new();
        let mut products = BTreeMap::new();
        for (key, value) in doc.categories {
            if key == "logos" {
                company = parse_category(&key, value);
            } else if let Some(product_id) = key.strip_suffix("_logos") {
                products.insert(product_id.to_string(), parse_category(&key, value));
            }
        }

        Ok(Self {
            guidelines: doc.brand_guidelines,
            company,
            products,
            raw_json: text.to_string(),
        })
    }

    pub fn guidelines(&self) -> &BrandGuidelines {
        &self.guidelines
    }

    pub fn company_assets(&self) -> &BTreeMap<String, AssetVariant> {
        &self.company
    }

    pub fn company_asset(&self, key: &str) -> Option<&AssetVariant> {
        self.company.get(key)
    }

    pub fn product_assets(&self, product_id: &str) -> Option<&BTreeMap<String, AssetVariant>> {
        self.products.get(product_id)
    }

    pub fn product_asset(&self, product_id: &str, key: &str) -> Option<&AssetVariant> {
        self.products.get(product_id).and_then(|assets| assets.get(key))
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    pub fn products(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, AssetVariant>)> {
        self.products
            .iter()
            .map(|(id, assets)| (id.as_str(), assets))
    }

    pub fn category_count(&self) -> usize {
        self.products.len() + usize::from(!self.company.is_empty())
    }

    pub fn total_assets(&self) -> usize {
        self.company.len() + self.products.values().map(BTreeMap::len).sum::<usize>()
    }

    pub fn raw_json(&self) -> &str {
        &self.raw_json
    }
}

fn parse_category(name: &str, value: Value) -> BTreeMap<String, AssetVariant> {
    let Value::Object(entries) = value else {
        warn!(category = name, "inventory category is not an object, skipping");
        return BTreeMap::new();
    };

    let mut assets = BTreeMap::new();
    for (key, entry) in entries {
        match serde_json::from_value::<AssetVariant>(entry) {
            Ok(asset) => {
                assets.insert(key, asset);
            }
            Err(err) => {
                warn!(category = name, asset_key = %key, error = %err, "skipping malformed inventory entry");
            }
        }
    }
    assets
}

#[derive(Debug, Clone)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Url(url) => write!(f, "url:{url}"),
            CatalogSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("inventory fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("inventory fetch returned HTTP {status}")]
    Http { status: u16 },
    #[error("inventory file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("inventory document malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lazily loaded, process-wide catalog cache.
///
/// A successful load is shared for the rest of the process; a failed load
/// leaves the cache empty so the next call tries again.
pub struct CatalogStore {
    source: CatalogSource,
    cached: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Result<Arc<Catalog>, CatalogError> {
        let mut cached = self.cached.lock();
        if let Some(catalog) = cached.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        match self.load() {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                *cached = Some(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(err) => {
                error!(source = %self.source, error = %err, "failed to load asset inventory");
                Err(err)
            }
        }
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let text = match &self.source {
            CatalogSource::Url(url) => fetch_inventory(url)?,
            CatalogSource::File(path) => fs::read_to_string(path)?,
        };
        let catalog = Catalog::from_json(&text)?;
        info!(
            source = %self.source,
            categories = catalog.category_count(),
            assets = catalog.total_assets(),
            "loaded asset inventory"
        );
        Ok(catalog)
    }
}

fn fetch_inventory(url: &str) -> Result<String, CatalogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(CATALOG_FETCH_TIMEOUT_MS))
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Http {
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}
