//! Client-facing settings schema
//!
//! These types are produced by the exporter and never stored by the registry.
//! Field names serialize in camelCase, enums serialize externally tagged, so a
//! page looks like:
//!
//! ```json
//! {
//!   "pageName": "Bot",
//!   "hidden": false,
//!   "namespace": "bot",
//!   "entries": [
//!     {"single": {"key": "amount", "uiName": "Amount", "cliFlags": ["-a"], "description": "",
//!                 "type": {"int": {"def": 1, "min": 1, "max": 100, "step": 1}}}}
//!   ]
//! }
//! ```

use crate::property::ComboOption;
use serde::{Deserialize, Serialize};

/// A named, optionally hidden group of settings shown together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPage {
    pub page_name: String,
    pub hidden: bool,
    pub namespace: String,
    pub entries: Vec<SettingEntry>,
}

/// One exported settings unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingEntry {
    Single(SingleEntry),
    MinMaxPair(MinMaxEntry),
}

impl SettingEntry {
    /// Keys carried by this entry (two for a min/max pair)
    pub fn keys(&self) -> Vec<&str> {
        match self {
            SettingEntry::Single(single) => vec![single.key.as_str()],
            SettingEntry::MinMaxPair(pair) => vec![pair.min.key.as_str(), pair.max.key.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleEntry {
    pub key: String,
    pub ui_name: String,
    pub cli_flags: Vec<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxEntry {
    pub min: MinMaxBoundEntry,
    pub max: MinMaxBoundEntry,
}

/// One end of a min/max pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxBoundEntry {
    pub key: String,
    pub ui_name: String,
    pub cli_flags: Vec<String>,
    pub description: String,
    pub int_setting: IntSetting,
}

/// Type payload of a single entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingType {
    Bool(BoolSetting),
    Int(IntSetting),
    Double(DoubleSetting),
    String(StringSetting),
    Combo(ComboSetting),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolSetting {
    pub def: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntSetting {
    pub def: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleSetting {
    pub def: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSetting {
    pub def: String,
    pub secret: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboSetting {
    pub def: String,
    pub options: Vec<ComboOption>,
}
