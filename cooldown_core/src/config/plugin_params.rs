//! Reading cooldown settings from engine plugin parameters
//!
//! The host engine stores plugin parameters as JSON where every nested
//! struct or list is itself a JSON-encoded string and every number is a
//! string, e.g.
//!
//! ```json
//! {
//!   "skillCooldownSettings": "[\"{\\\"Trigger SKill Id\\\":\\\"10\\\",\\\"Target Skills\\\":\\\"[...]\\\"}\"]",
//!   "decreaseBenchwarmersCooldown": "false"
//! }
//! ```
//!
//! Blank or missing fields fall back to their defaults. Values that are
//! present but not numeric are logged and replaced by the default as well.

use super::setup::{CooldownSetup, CooldownSetupEntry, DEFAULT_COOLDOWN_TURN_COUNT};
use super::{ConfigError, CooldownSettings};
use crate::display::CooldownDisplay;
use crate::types::SkillId;
use serde_json::{Map, Value};

const TRIGGER_SKILL_ID: &str = "Trigger SKill Id";
const TARGET_SKILLS: &str = "Target Skills";
const TARGET_SKILL_ID: &str = "Target Skill Id";
const COOLDOWN_TURN_COUNT: &str = "Cooldown Turn Count";

const SKILL_COOLDOWN_SETTINGS: &str = "skillCooldownSettings";
const DECREASE_BENCHWARMERS_COOLDOWN: &str = "decreaseBenchwarmersCooldown";
const DISPLAY_COOLDOWN_TURN: &str = "displayCooldownTurn";
const COOLDOWN_FORMAT: &str = "cooldownFormat";
const COOLDOWN_TEXT_COLOR: &str = "cooldownTextColor";

/// Parse the full plugin parameter object
pub fn parse_plugin_parameters(json: &str) -> Result<CooldownSettings, ConfigError> {
    let root: Value = serde_json::from_str(json)?;
    let params = root.as_object().ok_or_else(|| {
        ConfigError::ValidationError("plugin parameters must be a JSON object".to_string())
    })?;

    let skill_cooldowns = match params.get(SKILL_COOLDOWN_SETTINGS) {
        Some(value) => setup_records(&decode_nested(value)?)?,
        None => Vec::new(),
    };

    let defaults = CooldownDisplay::default();
    let display = CooldownDisplay {
        enabled: bool_field(params, DISPLAY_COOLDOWN_TURN, defaults.enabled),
        format: params
            .get(COOLDOWN_FORMAT)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.format),
        text_color: text_color_field(params, defaults.text_color),
    };

    Ok(CooldownSettings {
        decrease_benchwarmers_cooldown: bool_field(params, DECREASE_BENCHWARMERS_COOLDOWN, false),
        display,
        skill_cooldowns,
    })
}

/// Parse the list of cooldown setup records on its own
pub fn parse_setup_records(json: &str) -> Result<Vec<CooldownSetup>, ConfigError> {
    let root: Value = serde_json::from_str(json)?;
    setup_records(&root)
}

fn setup_records(list: &Value) -> Result<Vec<CooldownSetup>, ConfigError> {
    match list {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(setup_record).collect(),
        other => Err(ConfigError::ValidationError(format!(
            "expected a list of cooldown settings, got {}",
            other
        ))),
    }
}

fn setup_record(value: &Value) -> Result<CooldownSetup, ConfigError> {
    let decoded = decode_nested(value)?;
    let record = expect_object(&decoded, "cooldown setting")?;

    let targets = match record.get(TARGET_SKILLS) {
        Some(targets) => match decode_nested(targets)? {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .iter()
                .map(target_record)
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "expected a list of target skills, got {}",
                    other
                )))
            }
        },
        None => Vec::new(),
    };

    Ok(CooldownSetup::new(
        SkillId(number_field(record, TRIGGER_SKILL_ID, 0)),
        targets,
    ))
}

fn target_record(value: &Value) -> Result<CooldownSetupEntry, ConfigError> {
    let decoded = decode_nested(value)?;
    let record = expect_object(&decoded, "target skill")?;

    Ok(CooldownSetupEntry::new(
        SkillId(number_field(record, TARGET_SKILL_ID, 0)),
        number_field(record, COOLDOWN_TURN_COUNT, DEFAULT_COOLDOWN_TURN_COUNT),
    ))
}

/// Unwrap a value that may be a JSON document stored inside a string
fn decode_nested(value: &Value) -> Result<Value, ConfigError> {
    match value {
        Value::String(s) if s.trim().is_empty() => Ok(Value::Null),
        Value::String(s) => Ok(serde_json::from_str(s)?),
        other => Ok(other.clone()),
    }
}

fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::ValidationError(format!("{} must be an object, got {}", what, value)))
}

fn number_field(record: &Map<String, Value>, key: &str, default: u32) -> u32 {
    let parsed = match record.get(key) {
        None | Some(Value::Null) => return default,
        Some(Value::String(s)) if s.trim().is_empty() => return default,
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(_) => None,
    };

    parsed.unwrap_or_else(|| {
        log::warn!(
            "Invalid value for '{}': {:?}, using {}",
            key,
            record.get(key),
            default
        );
        default
    })
}

fn text_color_field(record: &Map<String, Value>, default: u8) -> u8 {
    let color = number_field(record, COOLDOWN_TEXT_COLOR, u32::from(default));
    u8::try_from(color).unwrap_or_else(|_| {
        log::warn!(
            "Invalid value for '{}': {} is not a color index, using {}",
            COOLDOWN_TEXT_COLOR,
            color,
            default
        );
        default
    })
}

fn bool_field(record: &Map<String, Value>, key: &str, default: bool) -> bool {
    match record.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.trim() {
            "true" => true,
            "false" => false,
            "" => default,
            other => {
                log::warn!("Invalid value for '{}': {:?}, using {}", key, other, default);
                default
            }
        },
        _ => default,
    }
}
