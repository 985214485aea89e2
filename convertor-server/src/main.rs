//! Convertor Server
//!
//! Newline-delimited JSON-RPC 2.0 over stdio.
//!
//! Methods:
//! - initialize / ping
//! - tools/list: describe the available tools
//! - tools/call: run `convert`, `check_units` or `list_units`
//!
//! Run with three arguments (`convertor-server 100 Metres Feet`) to
//! convert once and exit instead.

mod config;
mod tools;

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use convertor_core::ConvertorError;
use convertor_units::convert_text;

use crate::config::Settings;

const SERVER_NAME: &str = "convertor";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2025-11-25";

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct RpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl From<ConvertorError> for RpcError {
    fn from(err: ConvertorError) -> Self {
        RpcError {
            code: INVALID_PARAMS,
            message: err.message.clone(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

impl RpcResponse {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, RpcError>) -> Self {
        match result {
            Ok(r) => RpcResponse { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => RpcResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }
}

fn main() -> ExitCode {
    let settings = Settings::from_env();

    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(settings.log_level)
        .init();

    for warning in &settings.warnings {
        warn!("{}", warning);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => serve(&settings),
        [value, from, to] => match convert_once(value, from, to, settings.decimals) {
            Ok(line) => {
                println!("{}", line);
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("{}", message);
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("usage: convertor-server [<value> <from-unit> <to-unit>]");
            ExitCode::from(2)
        }
    }
}

/// One-shot conversion. `Ok` is printed to stdout, `Err` to stderr with a
/// failing exit status.
fn convert_once(value: &str, from: &str, to: &str, decimals: usize) -> Result<String, String> {
    convert_text(value, from, to)
        .map(|conversion| conversion.display(decimals))
        .map_err(|e| {
            debug!(error = %e, "conversion failed");
            e.user_message(from, to)
        })
}

fn serve(settings: &Settings) -> ExitCode {
    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "convertor server started");
    debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        decimals = settings.decimals,
        "stdio"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let Some(response) = handle_line(line, settings) else {
                    continue;
                };

                if let Err(e) = write_response(&response) {
                    error!(error = %e, "error writing response");
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                return ExitCode::FAILURE;
            }
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}

fn write_response(response: &RpcResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

/// Handle one protocol line. Returns `None` for notifications.
fn handle_line(line: &str, settings: &Settings) -> Option<RpcResponse> {
    debug!(bytes = line.len(), "received");

    let request: RpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "error parsing request");
            return Some(RpcResponse::new(None, Err(RpcError {
                code: PARSE_ERROR,
                message: format!("Parse error: {}", e),
                data: None,
            })));
        }
    };

    let response = handle_request(&request, settings);

    // Notifications (no id) get no response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }

    Some(response)
}

fn handle_request(request: &RpcRequest, settings: &Settings) -> RpcResponse {
    debug!(method = %request.method, "processing");

    let result = match request.method.as_str() {
        "initialize" => Ok(initialize_result(&request.params)),
        "initialized" | "notifications/initialized" | "ping" => Ok(json!({})),
        "tools/list" => Ok(tools::list_tools()),
        "tools/call" => handle_tool_call(&request.params, settings),
        _ => Err(RpcError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    RpcResponse::new(request.id.clone(), result)
}

fn initialize_result(params: &Option<JsonValue>) -> JsonValue {
    let client = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client, protocol, "client connected");

    json!({
        "protocolVersion": protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Distance, weight and temperature unit conversion"
        },
        "capabilities": {
            "tools": { "listChanged": false }
        }
    })
}

fn handle_tool_call(params: &Option<JsonValue>, settings: &Settings) -> Result<JsonValue, RpcError> {
    let params = params.as_ref()
        .ok_or_else(|| ConvertorError::invalid_params("tools/call requires params"))?;

    let name = params.get("name")
        .and_then(|n| n.as_str())
        .ok_or_else(|| ConvertorError::invalid_params("missing tool name"))?;

    let empty = json!({});
    let args = params.get("arguments").unwrap_or(&empty);

    Ok(tools::call_tool(name, args, settings.decimals)?)
}
