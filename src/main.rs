use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

mod composer;
mod input;
mod mcp;
mod profiles;
mod suggest;
mod tools;

use profiles::ProfileStore;

#[derive(Parser)]
#[command(name = "mcp-microscopy")]
#[command(
    version,
    about = "Microscopy aesthetic prompt enhancement over CLI and MCP"
)]
struct Cli {
    /// Load the knowledge base from a JSON profile document instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    profiles: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MagnificationArg {
    Low,
    Medium,
    High,
}

impl MagnificationArg {
    fn as_str(self) -> &'static str {
        match self {
            MagnificationArg::Low => "low",
            MagnificationArg::Medium => "medium",
            MagnificationArg::High => "high",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PaletteArg {
    Scientific,
    Artistic,
    Monochrome,
}

impl PaletteArg {
    fn as_str(self) -> &'static str {
        match self {
            PaletteArg::Scientific => "scientific",
            PaletteArg::Artistic => "artistic",
            PaletteArg::Monochrome => "monochrome",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrengthArg {
    Subtle,
    Balanced,
    Strong,
}

impl StrengthArg {
    fn as_str(self) -> &'static str {
        match self {
            StrengthArg::Subtle => "subtle",
            StrengthArg::Balanced => "balanced",
            StrengthArg::Strong => "strong",
        }
    }
}

#[derive(Args, Clone)]
struct EnhanceArgs {
    /// Image description to enhance
    #[arg(long)]
    prompt: String,
    /// Microscopy type, e.g. fluorescence or "phase contrast"
    #[arg(long = "type")]
    microscopy_type: String,
    /// Scale level
    #[arg(long, value_enum)]
    magnification: Option<MagnificationArg>,
    /// Color palette mode
    #[arg(long, value_enum)]
    palette: Option<PaletteArg>,
    /// Vocabulary density
    #[arg(long, value_enum)]
    strength: Option<StrengthArg>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct ProfileArgs {
    /// Microscopy type to inspect
    #[arg(long = "type")]
    microscopy_type: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct SuggestArgs {
    /// Natural language description of the desired look
    #[arg(long)]
    description: String,
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
    /// Enhance a prompt with microscopy vocabulary
    Enhance(EnhanceArgs),
    /// List available microscopy types
    ListTypes {
        /// Output JSON structuredContent
        #[arg(long)]
        json: bool,
    },
    /// Show the full vocabulary profile of one type
    Profile(ProfileArgs),
    /// Suggest microscopy types for a description
    Suggest(SuggestArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let custom;
    let store = match &cli.profiles {
        Some(path) => {
            custom = ProfileStore::from_path(path)
                .with_context(|| format!("failed to load profiles from {}", path.display()))?;
            log::info!(
                "loaded {} microscopy profiles from {}",
                custom.len(),
                path.display()
            );
            &custom
        }
        None => ProfileStore::builtin(),
    };

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(store)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::Enhance(args) => run_enhance(store, args),
        Commands::ListTypes { json } => {
            let result = tools::list_types::call(store, &json!({}));
            print_tool_result(result, json)
        }
        Commands::Profile(args) => {
            let result = tools::get_profile::call(
                store,
                &json!({ "microscopy_type": args.microscopy_type }),
            );
            print_tool_result(result, args.json)
        }
        Commands::Suggest(args) => {
            let result =
                tools::suggest_type::call(store, &json!({ "description": args.description }));
            print_tool_result(result, args.json)
        }
    }
}

fn run_enhance(store: &ProfileStore, args: EnhanceArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("base_prompt".to_string(), json!(args.prompt));
    map.insert("microscopy_type".to_string(), json!(args.microscopy_type));
    if let Some(magnification) = args.magnification {
        map.insert("magnification".to_string(), json!(magnification.as_str()));
    }
    if let Some(palette) = args.palette {
        map.insert("color_palette".to_string(), json!(palette.as_str()));
    }
    if let Some(strength) = args.strength {
        map.insert("aesthetic_strength".to_string(), json!(strength.as_str()));
    }
    let result = tools::enhance_prompt::call(store, &Value::Object(map));
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

fn run_stdio_server(store: &ProfileStore) -> Result<()> {
    log::info!(
        "serving {} microscopy types over stdio",
        store.list_ids().count()
    );

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
            Err(err) => {
                log::warn!("dropping malformed request line: {err}");
                continue;
            }
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        log::debug!("received {}", method.unwrap_or("<no method>"));

        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }
            })),
            (Some("ping"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {}
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions(store)
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

fn handle_tool_call(store: &ProfileStore, request: &serde_json::Value) -> serde_json::Value {
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
        mcp::contracts::TOOL_ENHANCE_PROMPT => tools::enhance_prompt::call(store, &args),
        mcp::contracts::TOOL_LIST_TYPES => tools::list_types::call(store, &args),
        mcp::contracts::TOOL_GET_PROFILE => tools::get_profile::call(store, &args),
        mcp::contracts::TOOL_SUGGEST_TYPE => tools::suggest_type::call(store, &args),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    }
}
