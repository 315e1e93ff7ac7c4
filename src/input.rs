use crate::composer::Strength;
use crate::mcp::errors;
use crate::profiles::{Magnification, PaletteMode};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct InputError {
    pub kind: &'static str,
    pub message: String,
}

impl InputError {
    fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: errors::INVALID_INPUT,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InputError {}

/// Parameters of `microscopy.enhance_prompt` after defaults are applied.
#[derive(Debug, Clone)]
pub struct EnhanceArgs {
    pub base_prompt: String,
    pub microscopy_type: String,
    pub magnification: Magnification,
    pub color_palette: PaletteMode,
    pub aesthetic_strength: Strength,
}

pub fn arguments(args: &Value) -> Result<&Map<String, Value>, InputError> {
    args.as_object()
        .ok_or_else(|| InputError::invalid_input("arguments must be an object"))
}

pub fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str, InputError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(InputError::invalid_input(format!("{key} is required"))),
        Some(value) => value
            .as_str()
            .ok_or_else(|| InputError::invalid_input(format!("{key} must be a string"))),
    }
}

pub fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, InputError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| InputError::invalid_input(format!("{key} must be a string"))),
    }
}

/// Option values outside their known sets are not errors; they fall back
/// to the documented defaults.
pub fn load_enhance_args(args: &Value) -> Result<EnhanceArgs, InputError> {
    let obj = arguments(args)?;

    let base_prompt = required_str(obj, "base_prompt")?.to_string();
    let microscopy_type = required_str(obj, "microscopy_type")?.to_string();
    let magnification = optional_str(obj, "magnification")?
        .map(Magnification::parse_lenient)
        .unwrap_or_default();
    let color_palette = optional_str(obj, "color_palette")?
        .map(PaletteMode::parse_lenient)
        .unwrap_or_default();
    let aesthetic_strength = optional_str(obj, "aesthetic_strength")?
        .map(Strength::parse_lenient)
        .unwrap_or_default();

    Ok(EnhanceArgs {
        base_prompt,
        microscopy_type,
        magnification,
        color_palette,
        aesthetic_strength,
    })
}
