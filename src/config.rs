use crate::context::Context;
use crate::engine::sample_context;
use crate::errors::{ConfigError, Result};

/// Context-building options collected from the command line.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    /// Start from an empty context rather than the sample bindings.
    pub empty: bool,
    /// JSON object of booleans, applied before `sets`.
    pub vars: Option<String>,
    /// `NAME=BOOL` pairs, applied last and in order.
    pub sets: Vec<String>,
}

impl Bindings {
    pub fn build(&self) -> Result<Context> {
        let mut ctx = if self.empty { Context::new() } else { sample_context() };

        if let Some(json) = self.vars.as_deref() {
            let loaded: Context = serde_json::from_str(json)?;
            ctx.extend(loaded);
        }

        for raw in &self.sets {
            let (name, value) = parse_binding(raw)?;
            ctx.set_variable(name, value);
        }

        Ok(ctx)
    }
}

/// Parse `NAME=BOOL`. The name is kept verbatim (it may be empty or padded,
/// matching keys loaded through `--vars`); only the first `=` splits.
pub fn parse_binding(raw: &str) -> Result<(String, bool)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidBinding(raw.to_string()))?;
    let value = parse_bool(value.trim()).ok_or_else(|| ConfigError::InvalidBool {
        name: name.to_string(),
        value: value.trim().to_string(),
    })?;
    Ok((name.to_string(), value))
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
