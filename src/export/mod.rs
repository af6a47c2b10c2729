//! Metadata exporter
//!
//! Converts registered property declarations into the client-facing schema in
//! [`wire`]. Every variant of [`Property`] has exactly one conversion rule; the
//! match below is exhaustive, so a new variant cannot be added without one.

mod wire;

pub use wire::{
    BoolSetting, ComboSetting, DoubleSetting, IntSetting, MinMaxBoundEntry, MinMaxEntry,
    SettingEntry, SettingType, SettingsPage, SingleEntry, StringSetting,
};

use crate::property::{DoubleProperty, IntProperty, Property, PropertyInfo};
use crate::registry::NamespaceRegistry;
#[cfg(feature = "json")]
use crate::error::Result;

/// Convert one declaration into its wire entry
///
/// A [`MinMaxPropertyLink`](crate::MinMaxPropertyLink) becomes a single
/// [`SettingEntry::MinMaxPair`], not two entries.
pub fn property_entry(property: &Property) -> SettingEntry {
    match property {
        Property::Boolean(p) => single(
            &p.info,
            SettingType::Bool(BoolSetting {
                def: p.default_value,
            }),
        ),
        Property::Int(p) => single(&p.info, SettingType::Int(int_setting(p))),
        Property::Double(p) => single(&p.info, SettingType::Double(double_setting(p))),
        Property::String(p) => single(
            &p.info,
            SettingType::String(StringSetting {
                def: p.default_value.clone(),
                secret: p.secret,
            }),
        ),
        Property::Combo(p) => single(
            &p.info,
            SettingType::Combo(ComboSetting {
                def: p.default_value.clone(),
                options: p.options.clone(),
            }),
        ),
        Property::MinMax(link) => SettingEntry::MinMaxPair(MinMaxEntry {
            min: bound(&link.min),
            max: bound(&link.max),
        }),
    }
}

/// Build the page for one namespace, entries in registration order
pub(crate) fn namespace_page(namespace: &str, registry: &NamespaceRegistry) -> SettingsPage {
    SettingsPage {
        page_name: registry.page_name.clone(),
        hidden: registry.hidden,
        namespace: namespace.to_string(),
        entries: registry.properties.iter().map(property_entry).collect(),
    }
}

/// Serialize exported pages as compact JSON
#[cfg(feature = "json")]
pub fn to_json(pages: &[SettingsPage]) -> Result<String> {
    Ok(serde_json::to_string(pages)?)
}

/// Serialize exported pages as pretty-printed JSON
#[cfg(feature = "json")]
pub fn to_json_pretty(pages: &[SettingsPage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pages)?)
}

fn single(info: &PropertyInfo, setting_type: SettingType) -> SettingEntry {
    SettingEntry::Single(SingleEntry {
        key: info.key.clone(),
        ui_name: info.ui_name.clone(),
        cli_flags: info.cli_flags.clone(),
        description: info.description.clone(),
        setting_type,
    })
}

fn bound(property: &IntProperty) -> MinMaxBoundEntry {
    MinMaxBoundEntry {
        key: property.info.key.clone(),
        ui_name: property.info.ui_name.clone(),
        cli_flags: property.info.cli_flags.clone(),
        description: property.info.description.clone(),
        int_setting: int_setting(property),
    }
}

fn int_setting(property: &IntProperty) -> IntSetting {
    IntSetting {
        def: property.default_value,
        min: property.min_value,
        max: property.max_value,
        step: property.step_value,
        format: property.format.clone(),
    }
}

fn double_setting(property: &DoubleProperty) -> DoubleSetting {
    DoubleSetting {
        def: property.default_value,
        min: property.min_value,
        max: property.max_value,
        step: property.step_value,
        format: property.format.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
