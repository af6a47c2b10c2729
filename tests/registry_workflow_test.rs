//! Registry Workflow Integration Tests
//!
//! Tests for the complete registry lifecycle including:
//! - Registration order of namespaces and entries
//! - Page metadata fixed by the first registration
//! - Variant conversion into wire entries
//! - All-or-nothing batches
//! - Repeated and concurrent export from the frozen registry

mod common;

use common::{
    BotSettings, DevSettings, ProxySettings, SplitSettings, malformed, populated_builder,
    populated_registry,
};
use settings_registry::{
    BooleanProperty, DuplicateKeyPolicy, Error, IntProperty, MinMaxPropertyLink, Property,
    RegistryBuilder, SettingEntry, SettingType, SettingsObject, option,
};
use std::sync::Arc;
use std::thread;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn page_names(builder: RegistryBuilder) -> Vec<(String, String, bool)> {
    builder
        .build()
        .export_metadata()
        .iter()
        .map(|p| (p.namespace.clone(), p.page_name.clone(), p.hidden))
        .collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_pages_follow_namespace_registration_order() {
    init_logger();
    let registry = populated_registry();

    let namespaces: Vec<&str> = registry
        .export_metadata()
        .iter()
        .map(|p| p.namespace.as_str())
        .collect();
    assert_eq!(namespaces, ["bot", "proxy", "dev"]);
}

#[test]
fn test_entries_follow_property_registration_order() {
    let registry = populated_registry();
    let bot = &registry.export_metadata()[0];

    let keys: Vec<Vec<&str>> = bot.entries.iter().map(SettingEntry::keys).collect();
    assert_eq!(
        keys,
        vec![
            vec!["address"],
            vec!["amount"],
            vec!["join-min-delay", "join-max-delay"],
            vec!["reach"],
            vec!["auto-reconnect"],
        ]
    );
}

#[test]
fn test_reversed_registration_reverses_pages() {
    let mut builder = RegistryBuilder::new();
    builder
        .add::<ProxySettings>("Proxy")
        .and_then(|b| b.add::<BotSettings>("Bot"))
        .unwrap();

    let pages = page_names(builder);
    assert_eq!(pages[0].0, "proxy");
    assert_eq!(pages[1].0, "bot");
}

#[test]
fn test_later_batch_appends_to_existing_namespace() {
    let mut builder = populated_builder();
    builder.add::<SplitSettings>("Accounts").unwrap();
    let registry = builder.build();

    let pages = registry.export_metadata();
    let namespaces: Vec<&str> = pages.iter().map(|p| p.namespace.as_str()).collect();
    assert_eq!(namespaces, ["bot", "proxy", "dev", "account"]);

    let last_bot_entry = pages[0].entries.last().unwrap();
    assert_eq!(last_bot_entry.keys(), ["restore-on-reboot"]);
}

// =============================================================================
// Page Metadata
// =============================================================================

#[test]
fn test_first_registration_fixes_page_metadata() {
    let mut builder = RegistryBuilder::new();
    builder
        .add_declarations(
            vec![BooleanProperty::new("bot", "a", true).ui_name("A").into()],
            "Bot",
            false,
        )
        .unwrap()
        .add_declarations(
            vec![BooleanProperty::new("bot", "b", true).ui_name("B").into()],
            "Something Else",
            true,
        )
        .unwrap();

    let registry = builder.build();
    let pages = registry.export_metadata();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_name, "Bot");
    assert!(!pages[0].hidden);
    assert_eq!(pages[0].entries.len(), 2);
}

#[test]
fn test_new_namespace_takes_page_of_its_batch() {
    let mut builder = populated_builder();
    builder.add_hidden::<SplitSettings>("Accounts").unwrap();

    let pages = page_names(builder);
    assert_eq!(pages[0], ("bot".into(), "Bot".into(), false));
    assert_eq!(pages[2], ("dev".into(), "Developer".into(), true));
    assert_eq!(pages[3], ("account".into(), "Accounts".into(), true));
}

// =============================================================================
// Variant Fidelity
// =============================================================================

#[test]
fn test_every_variant_round_trips_its_fields() {
    let registry = populated_registry();
    let pages = registry.export_metadata();

    let SettingEntry::Single(address) = &pages[0].entries[0] else {
        panic!("expected single entry");
    };
    assert_eq!(address.ui_name, "Address");
    assert_eq!(address.description, "Address of the server to connect to");
    assert!(matches!(
        address.setting_type,
        SettingType::String(ref s) if s.def == "127.0.0.1:25565" && !s.secret
    ));

    let SettingEntry::Single(amount) = &pages[0].entries[1] else {
        panic!("expected single entry");
    };
    assert_eq!(amount.cli_flags, vec!["-a", "--amount"]);
    let SettingType::Int(int) = &amount.setting_type else {
        panic!("expected int setting");
    };
    assert_eq!((int.def, int.min, int.max, int.step), (1, 1, 100_000, 1));
    assert_eq!(int.format, None);

    let SettingEntry::Single(reach) = &pages[0].entries[3] else {
        panic!("expected single entry");
    };
    let SettingType::Double(double) = &reach.setting_type else {
        panic!("expected double setting");
    };
    assert_eq!((double.def, double.min, double.max, double.step), (4.5, 0.0, 6.0, 0.1));
    assert_eq!(double.format.as_deref(), Some("%.1f blocks"));

    let SettingEntry::Single(reconnect) = &pages[0].entries[4] else {
        panic!("expected single entry");
    };
    assert!(matches!(reconnect.setting_type, SettingType::Bool(ref b) if b.def));

    let SettingEntry::Single(password) = &pages[1].entries[1] else {
        panic!("expected single entry");
    };
    assert!(matches!(
        password.setting_type,
        SettingType::String(ref s) if s.def == "hunter2" && s.secret
    ));
}

#[test]
fn test_min_max_link_exports_one_pair() {
    let registry = populated_registry();
    let bot = &registry.export_metadata()[0];

    let pairs: Vec<_> = bot
        .entries
        .iter()
        .filter_map(|e| match e {
            SettingEntry::MinMaxPair(pair) => Some(pair),
            SettingEntry::Single(_) => None,
        })
        .collect();
    assert_eq!(pairs.len(), 1);

    let pair = pairs[0];
    assert_eq!(pair.min.key, "join-min-delay");
    assert_eq!(pair.max.key, "join-max-delay");
    assert_eq!(pair.min.ui_name, "Min Join Delay (ms)");
    assert_eq!(pair.max.ui_name, "Max Join Delay (ms)");
    assert_eq!(pair.min.cli_flags, vec!["--join-min-delay"]);
    assert_eq!(pair.max.cli_flags, vec!["--join-max-delay"]);
    assert_eq!(pair.min.int_setting.def, 0);
    assert_eq!(pair.max.int_setting.def, 10);
    assert_eq!(pair.min.int_setting.format.as_deref(), Some("%d ms"));
}

#[test]
fn test_combo_options_keep_declared_order() {
    let registry = populated_registry();
    let proxy = &registry.export_metadata()[1];

    let SettingEntry::Single(entry) = &proxy.entries[0] else {
        panic!("expected single entry");
    };
    let SettingType::Combo(combo) = &entry.setting_type else {
        panic!("expected combo setting");
    };
    assert_eq!(combo.def, "a");
    assert_eq!(combo.options, vec![option("a", "Alpha"), option("b", "Beta")]);
}

// =============================================================================
// Idempotence and Sharing
// =============================================================================

#[test]
fn test_export_is_idempotent() {
    let registry = populated_registry();

    let first = registry.export_metadata().to_vec();
    let second = registry.export_metadata().to_vec();
    assert_eq!(first, second);

    // A second registry from the same declarations exports the same schema
    assert_eq!(first, populated_registry().export_metadata());
}

#[test]
fn test_concurrent_readers_see_identical_pages() {
    let registry = Arc::new(populated_registry());
    let expected = populated_registry().export_metadata().to_vec();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.export_metadata().to_vec())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =============================================================================
// Malformed Declarations
// =============================================================================

#[test]
fn test_malformed_declaration_aborts_whole_batch() {
    init_logger();
    let mut builder = populated_builder();

    let batch = vec![
        BooleanProperty::new("account", "shuffle", false)
            .ui_name("Shuffle")
            .into(),
        malformed(),
    ];
    let err = builder.add_declarations(batch, "Accounts", false).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidDeclaration { ref key, .. } if key == "broken"
    ));
    assert!(err.is_declaration_error());

    let registry = builder.build();
    assert_eq!(registry, populated_registry());
    assert!(registry.namespace("account").is_none());
    assert_eq!(registry.export_metadata(), populated_registry().export_metadata());
}

#[test]
fn test_unlabelled_declaration_is_rejected() {
    let mut builder = RegistryBuilder::new();
    let unset = BooleanProperty::new("bot", "auto-reconnect", true);

    let err = builder
        .add_declarations(vec![unset.into()], "Bot", false)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDeclaration { .. }));
    assert!(builder.build().is_empty());
}

#[test]
fn test_inverted_min_max_link_is_rejected() {
    struct Inverted;

    impl SettingsObject for Inverted {
        fn properties() -> Vec<Property> {
            vec![
                MinMaxPropertyLink::new(
                    IntProperty::new("bot", "lo", 8).ui_name("Lo"),
                    IntProperty::new("bot", "hi", 2).ui_name("Hi"),
                )
                .into(),
            ]
        }
    }

    let mut builder = RegistryBuilder::new();
    assert!(builder.add::<Inverted>("Bot").is_err());
}

// =============================================================================
// Duplicate Keys
// =============================================================================

#[test]
fn test_duplicate_key_rejected_by_default() {
    let mut builder = populated_builder();

    let err = builder.add::<BotSettings>("Bot").unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateKeyInNamespace { ref namespace, ref key } if namespace == "bot" && key == "address"
    ));

    assert_eq!(builder.build(), populated_registry());
}

#[test]
fn test_duplicate_key_shadowing() {
    let mut builder = RegistryBuilder::new().duplicate_keys(DuplicateKeyPolicy::Shadow);
    builder
        .add::<DevSettings>("Developer")
        .unwrap()
        .add_declarations(
            vec![BooleanProperty::new("dev", "core-debug", true)
                .ui_name("Core Debug (override)")
                .into()],
            "Ignored",
            false,
        )
        .unwrap();

    let registry = builder.build();
    let page = &registry.export_metadata()[0];
    assert_eq!(page.page_name, "Developer");
    assert_eq!(page.entries.len(), 1);

    let SettingEntry::Single(entry) = &page.entries[0] else {
        panic!("expected single entry");
    };
    assert_eq!(entry.ui_name, "Core Debug (override)");
    assert!(matches!(entry.setting_type, SettingType::Bool(ref b) if b.def));
}

#[test]
fn test_shadowing_one_end_of_a_link_is_rejected() {
    init_logger();
    let mut builder = RegistryBuilder::new().duplicate_keys(DuplicateKeyPolicy::Shadow);
    builder.add::<BotSettings>("Bot").unwrap();

    let err = builder
        .add_declarations(
            vec![IntProperty::new("bot", "join-max-delay", 5)
                .ui_name("Max Join Delay (ms)")
                .into()],
            "Bot",
            false,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateKeyInNamespace { ref key, .. } if key == "join-max-delay"
    ));

    let registry = builder.build();
    let bot = registry.namespace("bot").unwrap();
    assert!(bot.contains_key("join-min-delay"));
    assert!(bot.contains_key("join-max-delay"));
    assert!(matches!(
        registry.export_metadata()[0].entries[2],
        SettingEntry::MinMaxPair(_)
    ));
}
