//! Namespace registry
//!
//! Declarations are grouped by namespace. The first registration of a
//! namespace fixes its page name and hidden flag, and both namespaces and the
//! properties inside them keep their registration order.
//!
//! The registry has two phases:
//!
//! 1. [`RegistryBuilder`] - mutable, filled by modules during startup
//! 2. [`SettingsRegistry`] - frozen, read-only, safe to share between threads

mod builder;

pub use builder::{DuplicateKeyPolicy, RegistryBuilder};

use crate::export::{self, SettingsPage};
use crate::property::Property;
use indexmap::IndexMap;
use log::debug;
use std::sync::OnceLock;

#[cfg(feature = "json")]
use crate::error::Result;

/// Properties of one namespace plus the page metadata fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceRegistry {
    pub(crate) page_name: String,
    pub(crate) hidden: bool,
    pub(crate) properties: Vec<Property>,
}

impl NamespaceRegistry {
    pub(crate) fn new(page_name: &str, hidden: bool) -> Self {
        Self {
            page_name: page_name.to_string(),
            hidden,
            properties: Vec::new(),
        }
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Declarations in registration order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Check whether any declaration (or either side of a link) uses `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.iter().any(|p| p.keys().contains(&key))
    }
}

/// Frozen settings registry
///
/// Created by [`RegistryBuilder::build`]. Nothing can be registered anymore;
/// every method takes `&self`, so the registry can be shared freely (for
/// example behind an `Arc`) once startup is done.
///
/// # Example
///
/// ```rust
/// use settings_registry::{ComboProperty, SettingEntry, SettingsRegistry, option};
///
/// let mut builder = SettingsRegistry::builder();
/// builder.add_declarations(
///     vec![ComboProperty::new("proxy", "type", "http", vec![
///         option("http", "HTTP"),
///         option("socks5", "SOCKS5"),
///     ])
///     .ui_name("Proxy Type")
///     .into()],
///     "Proxy",
///     false,
/// )?;
/// let registry = builder.build();
///
/// let pages = registry.export_metadata();
/// assert_eq!(pages[0].page_name, "Proxy");
/// assert!(matches!(pages[0].entries[0], SettingEntry::Single(_)));
/// # Ok::<(), settings_registry::Error>(())
/// ```
#[derive(Debug)]
pub struct SettingsRegistry {
    namespaces: IndexMap<String, NamespaceRegistry>,

    /// Exported pages, computed on first export
    pages: OnceLock<Vec<SettingsPage>>,
}

impl SettingsRegistry {
    pub(crate) fn new(namespaces: IndexMap<String, NamespaceRegistry>) -> Self {
        Self {
            namespaces,
            pages: OnceLock::new(),
        }
    }

    /// Start collecting declarations
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Export the client-facing schema
    ///
    /// Pages come in namespace registration order, entries in property
    /// registration order. The result is computed once and every later call
    /// returns the same pages.
    pub fn export_metadata(&self) -> &[SettingsPage] {
        self.pages.get_or_init(|| {
            let pages: Vec<SettingsPage> = self
                .namespaces
                .iter()
                .map(|(namespace, registry)| export::namespace_page(namespace, registry))
                .collect();
            debug!("Exported {} settings pages", pages.len());
            pages
        })
    }

    /// Export the schema as compact JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if encoding fails.
    #[cfg(feature = "json")]
    pub fn export_json(&self) -> Result<String> {
        export::to_json(self.export_metadata())
    }

    /// Export the schema as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if encoding fails.
    #[cfg(feature = "json")]
    pub fn export_json_pretty(&self) -> Result<String> {
        export::to_json_pretty(self.export_metadata())
    }

    /// Look up one namespace
    pub fn namespace(&self, namespace: &str) -> Option<&NamespaceRegistry> {
        self.namespaces.get(namespace)
    }

    /// All namespaces in registration order
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &NamespaceRegistry)> {
        self.namespaces
            .iter()
            .map(|(namespace, registry)| (namespace.as_str(), registry))
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Number of registered declarations (a min/max link counts once)
    pub fn property_count(&self) -> usize {
        self.namespaces.values().map(|r| r.properties.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Registries are equal when they hold the same namespaces in the same order,
/// whether or not either has been exported yet.
impl PartialEq for SettingsRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.namespaces.iter().eq(other.namespaces.iter())
    }
}
