//! Property variant structs and their builder-style constructors

use serde::{Deserialize, Serialize};

// =============================================================================
// Shared Fields
// =============================================================================

/// Descriptive fields shared by every leaf property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    /// Grouping key, one namespace becomes one settings page
    pub namespace: String,
    /// Key, unique within the namespace
    pub key: String,
    /// Display label
    #[serde(default)]
    pub ui_name: String,
    /// Display help text
    #[serde(default)]
    pub description: String,
    /// Command-line flag names, in declaration order
    #[serde(default)]
    pub cli_flags: Vec<String>,
}

impl PropertyInfo {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            ui_name: String::new(),
            description: String::new(),
            cli_flags: Vec::new(),
        }
    }
}

/// Implements the shared descriptive setters for each leaf property type
macro_rules! leaf_property {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Set the display label
                #[must_use]
                pub fn ui_name(mut self, ui_name: impl Into<String>) -> Self {
                    self.info.ui_name = ui_name.into();
                    self
                }

                /// Set the display help text
                #[must_use]
                pub fn description(mut self, description: impl Into<String>) -> Self {
                    self.info.description = description.into();
                    self
                }

                /// Replace the command-line flag names
                #[must_use]
                pub fn cli_flags<I, S>(mut self, flags: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.info.cli_flags = flags.into_iter().map(Into::into).collect();
                    self
                }

                /// Append a single command-line flag name
                #[must_use]
                pub fn cli_flag(mut self, flag: impl Into<String>) -> Self {
                    self.info.cli_flags.push(flag.into());
                    self
                }

                pub fn namespace(&self) -> &str {
                    &self.info.namespace
                }

                pub fn key(&self) -> &str {
                    &self.info.key
                }
            }
        )*
    };
}

leaf_property!(
    BooleanProperty,
    IntProperty,
    DoubleProperty,
    StringProperty,
    ComboProperty,
);

// =============================================================================
// Boolean
// =============================================================================

/// On/off toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanProperty {
    #[serde(flatten)]
    pub info: PropertyInfo,
    pub default_value: bool,
}

impl BooleanProperty {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>, default: bool) -> Self {
        Self {
            info: PropertyInfo::new(namespace, key),
            default_value: default,
        }
    }
}

// =============================================================================
// Numbers
// =============================================================================

/// Bounded integer setting
///
/// Unless narrowed, the range covers all of `i32` with a step of 1.
///
/// ```
/// use settings_registry::IntProperty;
///
/// let amount = IntProperty::new("bot", "amount", 1)
///     .ui_name("Amount")
///     .cli_flags(["-a", "--amount"])
///     .min(1)
///     .max(100_000);
///
/// assert!(amount.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntProperty {
    #[serde(flatten)]
    pub info: PropertyInfo,
    pub default_value: i32,
    pub min_value: i32,
    pub max_value: i32,
    pub step_value: i32,
    /// Display format hint for clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl IntProperty {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>, default: i32) -> Self {
        Self {
            info: PropertyInfo::new(namespace, key),
            default_value: default,
            min_value: i32::MIN,
            max_value: i32::MAX,
            step_value: 1,
            format: None,
        }
    }

    #[must_use]
    pub fn min(mut self, min: i32) -> Self {
        self.min_value = min;
        self
    }

    #[must_use]
    pub fn max(mut self, max: i32) -> Self {
        self.max_value = max;
        self
    }

    #[must_use]
    pub fn step(mut self, step: i32) -> Self {
        self.step_value = step;
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Bounded floating-point setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleProperty {
    #[serde(flatten)]
    pub info: PropertyInfo,
    pub default_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub step_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl DoubleProperty {
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        default: impl Into<f64>,
    ) -> Self {
        Self {
            info: PropertyInfo::new(namespace, key),
            default_value: default.into(),
            min_value: f64::MIN,
            max_value: f64::MAX,
            step_value: 1.0,
            format: None,
        }
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min_value = min.into();
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max_value = max.into();
        self
    }

    #[must_use]
    pub fn step(mut self, step: impl Into<f64>) -> Self {
        self.step_value = step.into();
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

// =============================================================================
// Text
// =============================================================================

/// Free-form text setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringProperty {
    #[serde(flatten)]
    pub info: PropertyInfo,
    pub default_value: String,
    /// Value must be masked wherever it is displayed
    #[serde(default)]
    pub secret: bool,
}

impl StringProperty {
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            info: PropertyInfo::new(namespace, key),
            default_value: default.into(),
            secret: false,
        }
    }

    /// Mark the value as secret
    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

// =============================================================================
// Combo
// =============================================================================

/// One selectable entry of a [`ComboProperty`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOption {
    pub id: String,
    pub display_name: String,
}

impl ComboOption {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Shorthand for creating a [`ComboOption`]
///
/// ```
/// use settings_registry::option;
/// let options = vec![option("a", "Alpha"), option("b", "Beta")];
/// assert_eq!(options[1].display_name, "Beta");
/// ```
pub fn option(id: impl Into<String>, display_name: impl Into<String>) -> ComboOption {
    ComboOption::new(id, display_name)
}

/// Choice between a fixed, ordered list of options
///
/// **Options are required** at construction, the default must be one of their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboProperty {
    #[serde(flatten)]
    pub info: PropertyInfo,
    pub default_value: String,
    pub options: Vec<ComboOption>,
}

impl ComboProperty {
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        default: impl Into<String>,
        options: Vec<ComboOption>,
    ) -> Self {
        Self {
            info: PropertyInfo::new(namespace, key),
            default_value: default.into(),
            options,
        }
    }
}

// =============================================================================
// Min/Max Link
// =============================================================================

/// Two integer settings forming the ends of one user-controlled range
///
/// The pair is exported as a single entry. Both sides live in the same
/// namespace and `min.default_value <= max.default_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxPropertyLink {
    pub min: IntProperty,
    pub max: IntProperty,
}

impl MinMaxPropertyLink {
    pub fn new(min: IntProperty, max: IntProperty) -> Self {
        Self { min, max }
    }

    pub fn namespace(&self) -> &str {
        self.min.namespace()
    }
}
