//! Common test utilities for settings-registry integration tests
//!
//! Provides shared settings modules and a registry fixture built from them.

#![allow(dead_code)]

use settings_registry::{
    BooleanProperty, ComboProperty, DoubleProperty, IntProperty, MinMaxPropertyLink, Property,
    RegistryBuilder, SettingsObject, SettingsRegistry, StringProperty, option,
};

// =============================================================================
// Test Settings Modules
// =============================================================================

/// Bot connection settings, one of every numeric shape
pub struct BotSettings;

impl SettingsObject for BotSettings {
    fn properties() -> Vec<Property> {
        vec![
            StringProperty::new("bot", "address", "127.0.0.1:25565")
                .ui_name("Address")
                .description("Address of the server to connect to")
                .cli_flags(["--address"])
                .into(),
            IntProperty::new("bot", "amount", 1)
                .ui_name("Amount")
                .description("Amount of bots to connect")
                .cli_flags(["-a", "--amount"])
                .min(1)
                .max(100_000)
                .into(),
            MinMaxPropertyLink::new(
                IntProperty::new("bot", "join-min-delay", 0)
                    .ui_name("Min Join Delay (ms)")
                    .description("Minimum delay between joins")
                    .cli_flags(["--join-min-delay"])
                    .min(0)
                    .max(10)
                    .format("%d ms"),
                IntProperty::new("bot", "join-max-delay", 10)
                    .ui_name("Max Join Delay (ms)")
                    .description("Maximum delay between joins")
                    .cli_flags(["--join-max-delay"])
                    .min(0)
                    .max(10)
                    .format("%d ms"),
            )
            .into(),
            DoubleProperty::new("bot", "reach", 4.5)
                .ui_name("Reach")
                .min(0.0)
                .max(6.0)
                .step(0.1)
                .format("%.1f blocks")
                .into(),
            BooleanProperty::new("bot", "auto-reconnect", true)
                .ui_name("Auto Reconnect")
                .cli_flags(["--auto-reconnect"])
                .into(),
        ]
    }
}

/// Proxy settings with a combo and a secret
pub struct ProxySettings;

impl SettingsObject for ProxySettings {
    fn properties() -> Vec<Property> {
        vec![
            ComboProperty::new(
                "proxy",
                "type",
                "a",
                vec![option("a", "Alpha"), option("b", "Beta")],
            )
            .ui_name("Proxy Type")
            .into(),
            StringProperty::new("proxy", "password", "hunter2")
                .ui_name("Password")
                .secret()
                .into(),
        ]
    }
}

/// Developer toggles, registered on a hidden page
pub struct DevSettings;

impl SettingsObject for DevSettings {
    fn properties() -> Vec<Property> {
        vec![
            BooleanProperty::new("dev", "core-debug", false)
                .ui_name("Core Debug")
                .into(),
        ]
    }
}

/// A module whose declarations span two namespaces
pub struct SplitSettings;

impl SettingsObject for SplitSettings {
    fn properties() -> Vec<Property> {
        vec![
            BooleanProperty::new("account", "shuffle", false)
                .ui_name("Shuffle Accounts")
                .into(),
            BooleanProperty::new("bot", "restore-on-reboot", false)
                .ui_name("Restore On Reboot")
                .into(),
        ]
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Builder with the bot, proxy and hidden dev pages registered
pub fn populated_builder() -> RegistryBuilder {
    let mut builder = RegistryBuilder::new();
    builder
        .add::<BotSettings>("Bot")
        .and_then(|b| b.add::<ProxySettings>("Proxy"))
        .and_then(|b| b.add_hidden::<DevSettings>("Developer"))
        .expect("fixture declarations are valid");
    builder
}

/// Frozen registry built from [`populated_builder`]
pub fn populated_registry() -> SettingsRegistry {
    populated_builder().build()
}

/// A declaration that fails validation (min above max)
pub fn malformed() -> Property {
    IntProperty::new("bot", "broken", 5)
        .ui_name("Broken")
        .min(10)
        .max(1)
        .into()
}
