//! Tools exposed over `tools/list` and `tools/call`

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};
use convertor_core::ConvertorError;
use convertor_units::{
    are_compatible, convert_text, Category, MeasurementOutcome, Role, UnitRegistry,
    DESTINATION_UNITS, SOURCE_UNITS,
};

/// Shown alongside every successful conversion
pub const SUCCESS_NOTICE: &str = "Conversion successful!";

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: true }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgMeta],
}

impl ToolMeta {
    /// JSON schema for the tool's arguments
    pub fn input_schema(&self) -> JsonValue {
        let mut properties = serde_json::Map::new();
        for arg in self.args {
            properties.insert(
                arg.name.to_string(),
                json!({ "type": arg.typ, "description": arg.description }),
            );
        }
        let required: Vec<&str> = self.args.iter()
            .filter(|a| !a.optional)
            .map(|a| a.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

static CONVERT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "string", "Value to convert, as entered (e.g. \"100\")"),
    ArgMeta::required("from", "string", "Source unit (e.g. \"Metres\")"),
    ArgMeta::required("to", "string", "Destination unit (e.g. \"Feet\")"),
];

static CHECK_UNITS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("from", "string", "Source unit"),
    ArgMeta::required("to", "string", "Destination unit"),
];

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("role", "string", "\"source\" or \"destination\"; both when omitted"),
];

pub static TOOLS: [ToolMeta; 3] = [
    ToolMeta {
        name: "convert",
        description: "Convert a distance, weight or temperature from one unit to another",
        args: &CONVERT_ARGS,
    },
    ToolMeta {
        name: "check_units",
        description: "Check whether a source unit can be converted to a destination unit",
        args: &CHECK_UNITS_ARGS,
    },
    ToolMeta {
        name: "list_units",
        description: "List the units offered as sources and destinations, grouped by category",
        args: &LIST_UNITS_ARGS,
    },
];

/// Result of a tool call, before it is wrapped into a JSON-RPC response
pub type ToolResult = Result<JsonValue, ConvertorError>;

pub fn list_tools() -> JsonValue {
    let tools: Vec<JsonValue> = TOOLS.iter()
        .map(|t| json!({
            "name": t.name,
            "description": t.description,
            "inputSchema": t.input_schema(),
        }))
        .collect();
    json!({ "tools": tools })
}

/// Dispatch a tool by name. `Err` means the call itself was malformed;
/// a failed conversion is a successful call with `isError: true`.
pub fn call_tool(name: &str, args: &JsonValue, decimals: usize) -> ToolResult {
    debug!(tool = name, "calling tool");
    match name {
        "convert" => convert_tool(args, decimals),
        "check_units" => check_units_tool(args),
        "list_units" => list_units_tool(args),
        _ => Err(ConvertorError::invalid_params(format!("unknown tool '{}'", name))),
    }
}

fn text_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, ConvertorError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ConvertorError::invalid_params(format!("missing string argument '{}'", name)))
}

/// Value as entered; numbers are accepted and missing values count as empty
fn value_arg(args: &JsonValue) -> Result<String, ConvertorError> {
    match args.get("value") {
        None | Some(JsonValue::Null) => Ok(String::new()),
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(ConvertorError::invalid_params(format!(
            "'value' must be a string or number, got {}", other
        ))),
    }
}

fn text_content(text: impl Into<String>, is_error: bool, structured: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "isError": is_error,
        "structuredContent": structured,
    })
}

fn convert_tool(args: &JsonValue, decimals: usize) -> ToolResult {
    let raw = value_arg(args)?;
    let from = text_arg(args, "from")?;
    let to = text_arg(args, "to")?;

    match convert_text(&raw, from, to) {
        Ok(conversion) => {
            info!(from, to, value = conversion.value, result = conversion.result, "converted");
            let text = conversion.display(decimals);
            let outcome = MeasurementOutcome::success(conversion.result);
            Ok(text_content(text, false, json!({
                "conversion": conversion,
                "outcome": outcome,
                "notice": SUCCESS_NOTICE,
            })))
        }
        Err(e) => {
            info!(from, to, error = %e, "conversion refused");
            let report = e.report(from, to);
            let mut structured = json!({ "error": report });
            if let Ok(outcome) = MeasurementOutcome::try_from(&e) {
                structured["outcome"] = json!(outcome);
            }
            Ok(text_content(report.message.clone(), true, structured))
        }
    }
}

fn check_units_tool(args: &JsonValue) -> ToolResult {
    let from = text_arg(args, "from")?;
    let to = text_arg(args, "to")?;
    let compatible = are_compatible(from, to);

    Ok(text_content(
        if compatible { "compatible" } else { "not compatible" },
        false,
        json!({ "compatible": compatible }),
    ))
}

fn list_units_tool(args: &JsonValue) -> ToolResult {
    let roles: Vec<Role> = match args.get("role").and_then(|r| r.as_str()) {
        None => vec![Role::Source, Role::Destination],
        Some("source") => vec![Role::Source],
        Some("destination") => vec![Role::Destination],
        Some(other) => {
            return Err(ConvertorError::invalid_params(format!(
                "role must be \"source\" or \"destination\", got \"{}\"", other
            )))
        }
    };

    let mut structured = serde_json::Map::new();
    let mut lines = Vec::new();
    for role in roles {
        let registry: &UnitRegistry = match role {
            Role::Source => &SOURCE_UNITS,
            Role::Destination => &DESTINATION_UNITS,
        };
        let groups = group_by_category(registry);
        lines.push(format!("{}: {}", role, registry.names().join(", ")));
        structured.insert(role.to_string(), groups);
    }

    Ok(text_content(lines.join("\n"), false, JsonValue::Object(structured)))
}

fn group_by_category(registry: &UnitRegistry) -> JsonValue {
    let groups: Vec<JsonValue> = Category::ALL.iter()
        .map(|&category| {
            let names: Vec<&str> = registry.by_category(category).iter().map(|u| u.name).collect();
            json!({ "category": category, "units": names })
        })
        .collect();
    JsonValue::Array(groups)
}
