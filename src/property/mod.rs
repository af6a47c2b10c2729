//! Property declaration model
//!
//! # Overview
//!
//! A [`Property`] is the declaration of one setting (or one linked pair of
//! settings). Feature modules expose their declarations through
//! [`SettingsObject`], and the registry groups them by namespace.
//!
//! The set of variants is closed:
//!
//! - [`BooleanProperty`] - toggle
//! - [`IntProperty`] / [`DoubleProperty`] - bounded numbers with a step
//! - [`StringProperty`] - text, optionally secret
//! - [`ComboProperty`] - choice between ordered options
//! - [`MinMaxPropertyLink`] - two int properties edited as one range
//!
//! ```
//! use settings_registry::{BooleanProperty, ComboProperty, IntProperty, Property, option};
//!
//! let properties: Vec<Property> = vec![
//!     BooleanProperty::new("bot", "auto-reconnect", true)
//!         .ui_name("Auto Reconnect")
//!         .into(),
//!     IntProperty::new("bot", "amount", 1)
//!         .ui_name("Amount")
//!         .min(1)
//!         .max(100_000)
//!         .into(),
//!     ComboProperty::new("bot", "mode", "a", vec![option("a", "Alpha"), option("b", "Beta")])
//!         .ui_name("Mode")
//!         .into(),
//! ];
//!
//! assert!(properties.iter().all(|p| p.validate().is_ok()));
//! ```
//!
//! # Declarations as data
//!
//! Properties serialize with an internal `type` tag, so a declaration set can
//! also be shipped as JSON and read back with [`Property::from_json_value`].

mod types;
mod validate;

pub use types::{
    BooleanProperty, ComboOption, ComboProperty, DoubleProperty, IntProperty, MinMaxPropertyLink,
    PropertyInfo, StringProperty, option,
};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tags used for the `type` field of serialized properties
pub const PROPERTY_KINDS: &[&str] = &["boolean", "int", "double", "string", "combo", "minMax"];

/// A single setting declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Property {
    Boolean(BooleanProperty),
    Int(IntProperty),
    Double(DoubleProperty),
    String(StringProperty),
    Combo(ComboProperty),
    MinMax(MinMaxPropertyLink),
}

impl Property {
    /// Namespace this declaration is grouped under
    pub fn namespace(&self) -> &str {
        match self {
            Property::Boolean(p) => p.namespace(),
            Property::Int(p) => p.namespace(),
            Property::Double(p) => p.namespace(),
            Property::String(p) => p.namespace(),
            Property::Combo(p) => p.namespace(),
            Property::MinMax(link) => link.namespace(),
        }
    }

    /// Keys occupied in the namespace (two for a min/max link)
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Property::Boolean(p) => vec![p.key()],
            Property::Int(p) => vec![p.key()],
            Property::Double(p) => vec![p.key()],
            Property::String(p) => vec![p.key()],
            Property::Combo(p) => vec![p.key()],
            Property::MinMax(link) => vec![link.min.key(), link.max.key()],
        }
    }

    /// Serialized `type` tag of this variant
    pub fn kind(&self) -> &'static str {
        match self {
            Property::Boolean(_) => "boolean",
            Property::Int(_) => "int",
            Property::Double(_) => "double",
            Property::String(_) => "string",
            Property::Combo(_) => "combo",
            Property::MinMax(_) => "minMax",
        }
    }

    /// Check that the declaration is well formed
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDeclaration`] naming the first violated rule.
    pub fn validate(&self) -> Result<()> {
        match self {
            Property::Boolean(p) => p.info.validate(),
            Property::Int(p) => p.validate(),
            Property::Double(p) => p.validate(),
            Property::String(p) => p.validate(),
            Property::Combo(p) => p.validate(),
            Property::MinMax(link) => link.validate(),
        }
    }

    /// Read one declaration from its serialized form
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPropertyVariant`] if the `type` tag names no known variant
    /// - [`Error::InvalidDeclaration`] if the tag is missing or the body does not parse
    pub fn from_json_value(value: Value) -> Result<Self> {
        let coordinate = |field: &str| {
            value
                .get(field)
                .or_else(|| value.get("min").and_then(|min| min.get(field)))
                .and_then(Value::as_str)
                .unwrap_or("<unknown>")
                .to_string()
        };
        let namespace = coordinate("namespace");
        let key = coordinate("key");

        let tag = value.get("type").and_then(Value::as_str).map(str::to_owned);

        match tag.as_deref() {
            None => Err(Error::invalid(namespace, key, "missing 'type' tag")),
            Some(tag) if !PROPERTY_KINDS.contains(&tag) => {
                Err(Error::UnsupportedPropertyVariant(tag.to_string()))
            }
            Some(_) => serde_json::from_value(value)
                .map_err(|e| Error::invalid(namespace, key, e.to_string())),
        }
    }

    /// Read a JSON array of declarations
    ///
    /// # Errors
    ///
    /// Fails on the first entry rejected by [`Property::from_json_value`], or
    /// with [`Error::Serialization`] if the document is not a JSON array.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        values.into_iter().map(Self::from_json_value).collect()
    }
}

macro_rules! property_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Property {
                fn from(property: $ty) -> Self {
                    Property::$variant(property)
                }
            }
        )*
    };
}

property_from!(
    Boolean(BooleanProperty),
    Int(IntProperty),
    Double(DoubleProperty),
    String(StringProperty),
    Combo(ComboProperty),
    MinMax(MinMaxPropertyLink),
);

// =============================================================================
// Settings Object Trait
// =============================================================================

/// A module's fixed, ordered set of property declarations
///
/// Implement by hand or with `#[derive(SettingsObject)]` (requires the
/// `derive` feature).
///
/// ```
/// use settings_registry::{IntProperty, MinMaxPropertyLink, Property, SettingsObject};
///
/// struct JoinSettings;
///
/// impl SettingsObject for JoinSettings {
///     fn properties() -> Vec<Property> {
///         vec![MinMaxPropertyLink::new(
///             IntProperty::new("bot", "join-min-delay", 1000).ui_name("Min Join Delay (ms)").min(0).max(5000),
///             IntProperty::new("bot", "join-max-delay", 3000).ui_name("Max Join Delay (ms)").min(0).max(5000),
///         )
///         .into()]
///     }
/// }
///
/// assert_eq!(JoinSettings::properties()[0].keys(), ["join-min-delay", "join-max-delay"]);
/// ```
pub trait SettingsObject {
    /// Declarations in the order they should appear on the page
    fn properties() -> Vec<Property>;
}
