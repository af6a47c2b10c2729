//! Builder for SettingsRegistry
//!
//! This module contains [`RegistryBuilder`], the mutable half of the registry
//! lifecycle. Modules register their declarations here during startup, then
//! [`RegistryBuilder::build`] freezes everything into a
//! [`SettingsRegistry`](super::SettingsRegistry).

use super::{NamespaceRegistry, SettingsRegistry};
use crate::error::{Error, Result};
use crate::property::{Property, SettingsObject};
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// What to do when a key is registered twice in the same namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Fail the batch with [`Error::DuplicateKeyInNamespace`] (default)
    #[default]
    Reject,
    /// The later declaration replaces the earlier one, keeping its position
    Shadow,
}

/// Collects property declarations grouped by namespace.
///
/// # Example
///
/// ```rust
/// use settings_registry::{BooleanProperty, IntProperty, RegistryBuilder};
///
/// let mut builder = RegistryBuilder::new();
/// builder
///     .add_declarations(
///         vec![BooleanProperty::new("bot", "auto-reconnect", true).ui_name("Auto Reconnect").into()],
///         "Bot",
///         false,
///     )?
///     .add_declarations(
///         vec![IntProperty::new("dev", "trace-level", 0).ui_name("Trace Level").min(0).max(5).into()],
///         "Developer",
///         true,
///     )?;
///
/// let registry = builder.build();
/// assert_eq!(registry.export_metadata().len(), 2);
/// # Ok::<(), settings_registry::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    namespaces: IndexMap<String, NamespaceRegistry>,
    duplicate_keys: DuplicateKeyPolicy,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how repeated keys within a namespace are handled.
    #[must_use]
    pub fn duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Register every declaration of `T` on a visible page.
    ///
    /// # Errors
    ///
    /// See [`RegistryBuilder::add_declarations`].
    pub fn add<T: SettingsObject>(&mut self, page_name: impl Into<String>) -> Result<&mut Self> {
        self.add_declarations(T::properties(), page_name, false)
    }

    /// Register every declaration of `T` on a hidden page.
    ///
    /// # Errors
    ///
    /// See [`RegistryBuilder::add_declarations`].
    pub fn add_hidden<T: SettingsObject>(
        &mut self,
        page_name: impl Into<String>,
    ) -> Result<&mut Self> {
        self.add_declarations(T::properties(), page_name, true)
    }

    /// Register one module's declarations.
    ///
    /// A namespace seen for the first time takes `page_name` and `hidden` from
    /// this call. Later calls never change them.
    ///
    /// The batch is all-or-nothing: it is fully checked before anything is
    /// inserted, so a failure leaves the builder exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDeclaration`] if any declaration is malformed
    /// - [`Error::DuplicateKeyInNamespace`] if a key repeats under
    ///   [`DuplicateKeyPolicy::Reject`], or under [`DuplicateKeyPolicy::Shadow`]
    ///   if a declaration covers only part of an earlier one (one end of a
    ///   min/max link)
    pub fn add_declarations<I>(
        &mut self,
        properties: I,
        page_name: impl Into<String>,
        hidden: bool,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Property>,
    {
        let page_name = page_name.into();
        let properties: Vec<Property> = properties.into_iter().collect();

        for property in &properties {
            property.validate()?;
        }
        match self.duplicate_keys {
            DuplicateKeyPolicy::Reject => self.check_duplicates(&properties)?,
            DuplicateKeyPolicy::Shadow => self.check_shadowing(&properties)?,
        }

        let count = properties.len();
        for property in properties {
            self.register(property, &page_name, hidden);
        }

        debug!("Registered {count} properties for page '{page_name}'");
        Ok(self)
    }

    /// Freeze the collected declarations.
    #[must_use]
    pub fn build(self) -> SettingsRegistry {
        debug!(
            "Settings registry frozen with {} namespaces",
            self.namespaces.len()
        );
        SettingsRegistry::new(self.namespaces)
    }

    fn check_duplicates(&self, properties: &[Property]) -> Result<()> {
        let mut batch: HashSet<(&str, &str)> = HashSet::new();

        for property in properties {
            let namespace = property.namespace();
            let existing = self.namespaces.get(namespace);

            for key in property.keys() {
                let taken = existing.is_some_and(|registry| registry.contains_key(key));
                if taken || !batch.insert((namespace, key)) {
                    return Err(Error::DuplicateKeyInNamespace {
                        namespace: namespace.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// A shadowing declaration must cover every key of each entry it overlaps,
    /// otherwise the uncovered keys would be dropped along with it.
    fn check_shadowing(&self, properties: &[Property]) -> Result<()> {
        let mut entries: HashMap<&str, Vec<Vec<&str>>> = HashMap::new();

        for property in properties {
            let namespace = property.namespace();
            let keys = property.keys();
            let current = entries.entry(namespace).or_insert_with(|| {
                self.namespaces
                    .get(namespace)
                    .map(|registry| registry.properties.iter().map(Property::keys).collect())
                    .unwrap_or_default()
            });

            for entry in current.iter() {
                let Some(shadowed) = entry.iter().find(|key| keys.contains(key)) else {
                    continue;
                };
                if entry.iter().any(|key| !keys.contains(key)) {
                    return Err(Error::DuplicateKeyInNamespace {
                        namespace: namespace.to_string(),
                        key: shadowed.to_string(),
                    });
                }
            }

            current.retain(|entry| !entry.iter().any(|key| keys.contains(key)));
            current.push(keys);
        }

        Ok(())
    }

    fn register(&mut self, property: Property, page_name: &str, hidden: bool) {
        let registry = self
            .namespaces
            .entry(property.namespace().to_string())
            .or_insert_with_key(|namespace| {
                debug!("Created namespace '{namespace}' on page '{page_name}'");
                NamespaceRegistry::new(page_name, hidden)
            });

        let overlapping: Vec<usize> = registry
            .properties
            .iter()
            .enumerate()
            .filter(|(_, existing)| {
                existing
                    .keys()
                    .iter()
                    .any(|key| property.keys().contains(key))
            })
            .map(|(index, _)| index)
            .collect();

        let Some((&first, rest)) = overlapping.split_first() else {
            registry.properties.push(property);
            return;
        };

        warn!(
            "Property {:?} in namespace '{}' shadows an earlier declaration",
            property.keys(),
            property.namespace()
        );
        for &index in rest.iter().rev() {
            registry.properties.remove(index);
        }
        registry.properties[first] = property;
    }
}
