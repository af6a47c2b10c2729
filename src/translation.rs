//! Configuration adapter for the protocol-version translation library
//!
//! The translation library reads its own configuration document. Most of its
//! options concern proxy deployments and server-side hit boxes, neither of
//! which exist in a pure client, so they are reported as unsupported and a few
//! behaviours are pinned to fixed values.

use log::warn;
use serde_json::{Map, Value};

/// Options the client does not support
pub const UNSUPPORTED_OPTIONS: &[&str] = &[
    "checkforupdates",
    "bungee-ping-interval",
    "bungee-ping-save",
    "bungee-servers",
    "velocity-ping-interval",
    "velocity-ping-save",
    "velocity-servers",
    "block-protocols",
    "block-disconnect-msg",
    "reload-disconnect-msg",
    "max-pps",
    "max-pps-kick-msg",
    "tracking-period",
    "tracking-warning-pps",
    "tracking-max-warnings",
    "tracking-max-kick-msg",
    "blockconnection-method",
    "quick-move-action-fix",
    "item-cache",
    "change-1_9-hitbox",
    "change-1_14-hitbox",
    "use-new-deathmessages",
    "nms-player-ticking",
];

/// Connection blocking strategy handed to the translation library
pub const BLOCK_CONNECTION_METHOD: &str = "packet";

/// Configuration surface the translation library queries
pub trait TranslationConfig {
    /// Option names to report as unsupported
    fn unsupported_options(&self) -> &[&'static str];

    /// Whether the library may check for its own updates
    fn check_for_updates(&self) -> bool;

    /// Strategy used to block connections
    fn block_connection_method(&self) -> &str;

    /// Legacy 1.12 quick-move action quirk
    fn quick_move_action_fix(&self) -> bool;
}

/// Constant configuration, nothing is computed from user input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTranslationConfig;

impl FixedTranslationConfig {
    /// Drop unsupported options from a loaded configuration document
    ///
    /// Returns the removed option names in document order.
    pub fn strip_unsupported(&self, config: &mut Map<String, Value>) -> Vec<String> {
        let removed: Vec<String> = config
            .keys()
            .filter(|key| UNSUPPORTED_OPTIONS.contains(&key.as_str()))
            .cloned()
            .collect();

        for key in &removed {
            config.remove(key);
            warn!("Ignoring unsupported translation option '{key}'");
        }

        removed
    }
}

impl TranslationConfig for FixedTranslationConfig {
    fn unsupported_options(&self) -> &[&'static str] {
        UNSUPPORTED_OPTIONS
    }

    fn check_for_updates(&self) -> bool {
        false
    }

    fn block_connection_method(&self) -> &str {
        BLOCK_CONNECTION_METHOD
    }

    fn quick_move_action_fix(&self) -> bool {
        false
    }
}
