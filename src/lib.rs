//! # settings-registry
//!
//! A typed settings registry that collects property declarations from many
//! independent modules, groups them into pages by namespace, and exports a
//! client-facing schema describing every setting.
//!
//! ## Features
//!
//! - **Closed Property Model**: booleans, bounded ints and doubles, strings
//!   (optionally secret), combos, and linked min/max pairs
//! - **Ordered Pages**: namespaces and properties keep their registration order
//! - **Build Then Freeze**: a mutable [`RegistryBuilder`] during startup, an
//!   immutable [`SettingsRegistry`] afterwards
//! - **Atomic Registration**: a malformed batch is rejected as a whole
//! - **Docs Generation**: markdown reference rendered from the exported schema
//! - **Derive Macro**: `#[derive(SettingsObject)]` (requires the `derive` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use settings_registry::{
//!     BooleanProperty, IntProperty, MinMaxPropertyLink, Property, SettingEntry,
//!     SettingsObject, SettingsRegistry,
//! };
//!
//! struct BotSettings;
//!
//! impl SettingsObject for BotSettings {
//!     fn properties() -> Vec<Property> {
//!         vec![
//!             IntProperty::new("bot", "amount", 1)
//!                 .ui_name("Amount")
//!                 .description("Number of bots to connect")
//!                 .cli_flags(["-a", "--amount"])
//!                 .min(1)
//!                 .max(100_000)
//!                 .into(),
//!             MinMaxPropertyLink::new(
//!                 IntProperty::new("bot", "join-min-delay", 1000).ui_name("Min Join Delay").min(0).max(60_000),
//!                 IntProperty::new("bot", "join-max-delay", 3000).ui_name("Max Join Delay").min(0).max(60_000),
//!             )
//!             .into(),
//!         ]
//!     }
//! }
//!
//! struct DevSettings;
//!
//! impl SettingsObject for DevSettings {
//!     fn properties() -> Vec<Property> {
//!         vec![BooleanProperty::new("dev", "core-debug", false).ui_name("Core Debug").into()]
//!     }
//! }
//!
//! let mut builder = SettingsRegistry::builder();
//! builder.add::<BotSettings>("Bot")?.add_hidden::<DevSettings>("Developer")?;
//! let registry = builder.build();
//!
//! let pages = registry.export_metadata();
//! assert_eq!(pages.len(), 2);
//! assert!(pages[1].hidden);
//! assert!(matches!(pages[0].entries[1], SettingEntry::MinMaxPair(_)));
//! # Ok::<(), settings_registry::Error>(())
//! ```
//!
//! ## Duplicate Keys
//!
//! By default a key registered twice in one namespace fails the batch with
//! [`Error::DuplicateKeyInNamespace`]. Use
//! [`RegistryBuilder::duplicate_keys`] with [`DuplicateKeyPolicy::Shadow`] to
//! let the later declaration replace the earlier one instead.

// Core modules
mod docs;
mod error;
pub mod translation;

// Grouped modules
pub mod export;
pub mod property;
pub mod registry;

// Re-exports from core
pub use docs::{DocsConfig, generate_docs, generate_docs_from_pages};
pub use error::{Error, Result};

// Re-exports from property
pub use property::{
    BooleanProperty, ComboOption, ComboProperty, DoubleProperty, IntProperty, MinMaxPropertyLink,
    Property, PropertyInfo, SettingsObject, StringProperty, option,
};

// Re-exports from registry
pub use registry::{DuplicateKeyPolicy, NamespaceRegistry, RegistryBuilder, SettingsRegistry};

// Re-exports from export
pub use export::{
    BoolSetting, ComboSetting, DoubleSetting, IntSetting, MinMaxBoundEntry, MinMaxEntry,
    SettingEntry, SettingType, SettingsPage, SingleEntry, StringSetting, property_entry,
};

// Derive macro re-export (requires `derive` feature)
/// Derive macro for generating `SettingsObject` implementations.
///
/// # Example
///
/// ```rust,ignore
/// use settings_registry::DeriveSettingsObject;
///
/// #[derive(Default, DeriveSettingsObject)]
/// #[settings(namespace = "bot")]
/// struct BotSettings {
///     #[setting(ui_name = "Amount", cli = ["-a", "--amount"], min = 1, max = 100000)]
///     amount: i32,
/// }
/// ```
#[cfg(feature = "derive")]
pub use settings_registry_derive::SettingsObject as DeriveSettingsObject;
