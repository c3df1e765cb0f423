use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

mod attributes;
mod catalog;
mod engine;
mod format;
mod gate;
mod mcp;
mod tools;

use catalog::{CatalogSource, CatalogStore};

#[derive(Parser)]
#[command(name = "mcp-brand-assets")]
#[command(
    version,
    about = "Brand asset recommendations over MCP and the command line"
)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct CatalogArgs {
    /// URL of the asset inventory document
    #[arg(
        long,
        global = true,
        env = "BRAND_ASSETS_INVENTORY_URL",
        conflicts_with = "catalog_file"
    )]
    catalog_url: Option<String>,
    /// Path to a local asset inventory document
    #[arg(long, global = true, env = "BRAND_ASSETS_INVENTORY_FILE")]
    catalog_file: Option<PathBuf>,
}

impl CatalogArgs {
    fn source(&self) -> CatalogSource {
        if let Some(path) = &self.catalog_file {
            CatalogSource::File(path.clone())
        } else if let Some(url) = &self.catalog_url {
            CatalogSource::Url(url.clone())
        } else {
            CatalogSource::Url(mcp::contracts::DEFAULT_INVENTORY_URL.to_string())
        }
    }
}

#[derive(Args, Clone)]
struct RecommendArgs {
    /// What logo do you need? e.g. "CIQ logo for a slide footer"
    request: String,
    /// Background the logo sits on: light or dark
    #[arg(long)]
    background: Option<String>,
    /// Role of the logo in the design: main or supporting
    #[arg(long)]
    element_role: Option<String>,
    /// Free-text description of the surrounding design
    #[arg(long)]
    design_context: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Recommend a brand asset for a described use
    Recommend(RecommendArgs),
    /// List all available brand assets
    ListAssets {
        /// Output JSON structuredContent
        #[arg(long)]
        json: bool,
    },
    /// Print the brand guidelines
    Guidelines {
        /// Output JSON structuredContent
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the NDJSON protocol stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let store = CatalogStore::new(cli.catalog.source());

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&store)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::Recommend(args) => run_recommend(&store, args),
        Commands::ListAssets { json } => {
            print_tool_result(tools::list_all_assets::call(&store, &json!({})), json)
        }
        Commands::Guidelines { json } => {
            print_tool_result(tools::brand_guidelines::call(&store, &json!({})), json)
        }
    }
}

fn run_recommend(store: &CatalogStore, args: RecommendArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("request".to_string(), json!(args.request));
    if let Some(background) = &args.background {
        map.insert("background".to_string(), json!(background));
    }
    if let Some(element_role) = &args.element_role {
        map.insert("element_role".to_string(), json!(element_role));
    }
    if let Some(design_context) = &args.design_context {
        map.insert("design_context".to_string(), json!(design_context));
    }
    let result = tools::get_brand_asset::call(store, &Value::Object(map));
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

const SERVER_INSTRUCTIONS: &str = "Brand asset lookup for CIQ and its products \
(Fuzzball, Apptainer, Warewulf Pro, Ascender Pro, Bridge, RLC(X), CIQ Support). \
Describe what you need, e.g. \"CIQ logo for an email signature\" or \"Fuzzball \
symbol for dark background\", and you'll get the right variant with its download \
link and usage guidance.";

fn run_stdio_server(store: &CatalogStore) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2025-11-25",
                    "capabilities": {
                        "tools": {},
                        "resources": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "instructions": SERVER_INSTRUCTIONS
                }
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions()
                }
            })),
            (Some("tools/call"), Some(id)) => {
                let result = handle_tool_call(store, &request);
                Some(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": result
                }))
            }
            (Some("resources/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "resources": mcp::resource_definitions()
                }
            })),
            (Some("resources/read"), Some(id)) => Some(handle_resource_read(store, &request, id)),
            _ => None,
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    Ok(())
}

fn handle_tool_call(store: &CatalogStore, request: &serde_json::Value) -> serde_json::Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    match name {
        mcp::contracts::TOOL_GET_ASSET => tools::get_brand_asset::call(store, &args),
        mcp::contracts::TOOL_LIST_ASSETS => tools::list_all_assets::call(store, &args),
        mcp::contracts::TOOL_GUIDELINES => tools::brand_guidelines::call(store, &args),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    }
}

fn handle_resource_read(
    store: &CatalogStore,
    request: &serde_json::Value,
    id: serde_json::Value,
) -> serde_json::Value {
    let uri = request
        .get("params")
        .and_then(|params| params.get("uri"))
        .and_then(|value| value.as_str());

    match uri {
        Some(mcp::contracts::RESOURCE_INVENTORY_URI) => match store.get() {
            Ok(catalog) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "contents": [{
                        "uri": mcp::contracts::RESOURCE_INVENTORY_URI,
                        "mimeType": "application/json",
                        "text": catalog.raw_json()
                    }]
                }
            }),
            Err(err) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": -32002,
                    "message": format!("catalog unavailable: {err}")
                }
            }),
        },
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {
                "code": -32002,
                "message": "unknown resource"
            }
        }),
    }
}
