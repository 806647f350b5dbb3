// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative command tables.
//!
//! A [`ToolSpec`] describes one generator command: a fixed subcommand prefix
//! plus a list of [`ParamSpec`]s saying how each caller parameter is checked
//! and where it lands in the argument vector. Specs are `'static` data; the
//! JSON Schema and the argument vector are both derived from them, so the
//! two can never drift apart.

use serde_json::{Map, Value, json};
use sparkle_security::{
    ValidationError, is_valid_argument, is_valid_interface, is_valid_path, is_valid_url,
    port_from_value,
};

/// How a parameter value is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A filesystem path, checked with `is_valid_path`.
    Path,
    /// An `http`/`https` URL.
    Url,
    /// A TCP port in `1..=65535`.
    Port,
    /// A bind interface or hostname.
    Interface,
    /// Free text, checked with the argument allow-list.
    Text,
    /// A boolean switch.
    Flag,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            ParamKind::Path | ParamKind::Url | ParamKind::Interface | ParamKind::Text => "string",
            ParamKind::Port => "number",
            ParamKind::Flag => "boolean",
        }
    }
}

/// Where a validated parameter ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Used as the working directory of the process.
    Cwd,
    /// Appended as a bare argument.
    Positional,
    /// Appended as `flag value`.
    Option(&'static str),
    /// Appended as `flag` when the value is `true`.
    Switch(&'static str),
}

/// One caller-facing parameter of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub placement: Placement,
    pub required: bool,
    /// Human name used in the rejection message, e.g. `output directory`.
    pub label: &'static str,
}

impl ParamSpec {
    /// `path`: the site root, used as the working directory.
    pub const fn site_root() -> Self {
        Self::cwd("path", "Path to site root")
    }

    /// A path parameter used as the working directory.
    pub const fn cwd(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::Path,
            placement: Placement::Cwd,
            required: false,
            label: "path",
        }
    }

    /// A bare positional argument.
    pub const fn positional(
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            placement: Placement::Positional,
            required: false,
            label,
        }
    }

    /// A `flag value` pair.
    pub const fn option(
        name: &'static str,
        kind: ParamKind,
        flag: &'static str,
        description: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            placement: Placement::Option(flag),
            required: false,
            label,
        }
    }

    /// A boolean switch emitted as `flag` when true.
    pub const fn switch(name: &'static str, flag: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamKind::Flag,
            placement: Placement::Switch(flag),
            required: false,
            label: name,
        }
    }

    /// `port`: a `--port <n>` option.
    pub const fn port(flag: &'static str) -> Self {
        Self::option("port", ParamKind::Port, flag, "Port number", "port number")
    }

    /// `interface`: a `--interface <host>` style option.
    pub const fn interface(flag: &'static str) -> Self {
        Self::option(
            "interface",
            ParamKind::Interface,
            flag,
            "Interface to bind to",
            "interface",
        )
    }

    /// `drafts`: the common `--drafts` switch.
    pub const fn drafts() -> Self {
        Self::switch("drafts", "--drafts", "Include drafts")
    }

    /// Marks the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One generator command exposed as a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Fixed leading arguments, e.g. `["build"]`.
    pub command: &'static [&'static str],
    pub params: &'static [ParamSpec],
}

/// A validated argument vector and working directory, ready for the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<String>,
    pub cwd: Option<String>,
}

impl ToolSpec {
    /// Renders the JSON Schema for this tool's parameters.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": param.kind.json_type(), "description": param.description }),
            );
        }

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }

        Value::Object(schema)
    }

    /// Validates caller parameters and builds the argument vector.
    ///
    /// Parameters are checked in declaration order and the first failure is
    /// returned. Unset optional parameters (absent, `null`, `false`, `""`, `0`)
    /// are skipped. Unknown parameters are ignored.
    pub fn build(&self, params: &Value) -> Result<Invocation, ValidationError> {
        let mut args: Vec<String> = self.command.iter().map(|s| s.to_string()).collect();
        let mut cwd = None;

        for param in self.params {
            let value = params.get(param.name);
            if is_unset(value) {
                if param.required {
                    return Err(ValidationError::MissingParameter(param.name.to_string()));
                }
                continue;
            }
            let Some(value) = value else { continue };

            let invalid = || ValidationError::Parameter {
                label: param.label.to_string(),
            };

            if param.kind == ParamKind::Flag {
                if !value.is_boolean() {
                    return Err(invalid());
                }
                // Unset (false) switches were skipped above.
                match param.placement {
                    Placement::Switch(flag) | Placement::Option(flag) => args.push(flag.to_string()),
                    Placement::Positional | Placement::Cwd => {}
                }
                continue;
            }

            let rendered = render_value(param.kind, value).ok_or_else(invalid)?;
            match param.placement {
                Placement::Cwd => cwd = Some(rendered),
                Placement::Positional => args.push(rendered),
                Placement::Option(flag) => {
                    args.push(flag.to_string());
                    args.push(rendered);
                }
                Placement::Switch(flag) => args.push(flag.to_string()),
            }
        }

        Ok(Invocation { args, cwd })
    }
}

/// Validates `value` for `kind` and renders it as a single argument.
fn render_value(kind: ParamKind, value: &Value) -> Option<String> {
    match kind {
        ParamKind::Port => port_from_value(value).map(|p| p.to_string()),
        ParamKind::Flag => None,
        ParamKind::Path | ParamKind::Url | ParamKind::Interface | ParamKind::Text => {
            let s = value.as_str()?;
            let ok = match kind {
                ParamKind::Path => is_valid_path(s),
                ParamKind::Url => is_valid_url(s),
                ParamKind::Interface => is_valid_interface(s),
                _ => is_valid_argument(s),
            };
            ok.then(|| s.to_string())
        }
    }
}

/// Absent or falsy values are treated as "not given".
fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}
