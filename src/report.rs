//! Renders a parsed invocation for the terminal or as JSON.
use std::collections::HashSet;

use serde_json::{json, Map, Value as JsonValue};

use cmd_args::{CmdArgs, OptionValue};

pub fn render_text(args: &CmdArgs) -> String {
    let mut out = String::new();
    out.push_str(&format!("executable: {}\n", args.executable().unwrap_or("-")));
    out.push_str(&format!("script: {}\n", args.script().unwrap_or("-")));
    out.push_str(&format!("command: {}\n", args.command().unwrap_or("-")));
    out.push_str(&format!("commands: {}\n", args.commands().join(" ")));
    let flags: Vec<String> = args.flags().iter().map(|f| f.to_string()).collect();
    out.push_str(&format!("flags: {}\n", flags.join(" ")));
    out.push_str(&format!("ordinals: {}\n", args.ordinals().join(" ")));
    // One line per distinct name, showing its final value.
    let mut seen = HashSet::new();
    for (name, value) in args.named_values() {
        if seen.insert(name) {
            out.push_str(&format!("--{name} = {value}\n"));
        }
    }
    out
}

/// Undefined has no JSON form and becomes `null`, like an unset value.
pub fn value_to_json(value: &OptionValue) -> JsonValue {
    match value {
        OptionValue::Str(s) => JsonValue::String(s.clone()),
        OptionValue::Bool(b) => JsonValue::Bool(*b),
        OptionValue::Null | OptionValue::Undefined => JsonValue::Null,
        OptionValue::Composite(c) => JsonValue::Array(
            c.iter()
                .map(|pair| json!({ "name": pair.name, "value": pair.value }))
                .collect(),
        ),
    }
}

pub fn to_json(args: &CmdArgs) -> JsonValue {
    let mut arguments = Map::new();
    for (name, value) in args.arguments() {
        arguments.insert(name.clone(), value_to_json(value));
    }
    let flags: Vec<String> = args.flags().iter().map(|f| f.to_string()).collect();
    json!({
        "_executable": args.executable(),
        "_script": args.script(),
        "command": args.command(),
        "commands": args.commands(),
        "flags": flags,
        "arguments": arguments,
        "ordinals": args.ordinals(),
    })
}
