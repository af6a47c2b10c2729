// Schema export example for settings-registry
//
// Run with: cargo run --example export_schema --features derive

use settings_registry::{
    DeriveSettingsObject, DocsConfig, Property, SettingsObject, SettingsRegistry, StringProperty,
    generate_docs,
};

// =============================================================================
// Settings declared with the derive macro
// =============================================================================

/// Bot connection settings
#[derive(DeriveSettingsObject)]
#[settings(namespace = "bot")]
pub struct BotSettings {
    #[setting(description = "Address of the server to connect to", cli = ["--address"])]
    pub address: String,

    #[setting(
        description = "Amount of bots to connect",
        cli = ["-a", "--amount"],
        min = 1,
        max = 100000
    )]
    pub amount: i32,

    #[setting(description = "Server port", min = 1, max = 65535)]
    pub port: u16,

    #[setting(min = 0, max = 6, step = 0.1, format = "%.1f blocks")]
    pub reach: f64,

    #[setting(
        link_max = "join_max_delay",
        ui_name = "Min Join Delay (ms)",
        cli = ["--join-min-delay"],
        min = 0,
        max = 60000,
        format = "%d ms"
    )]
    pub join_min_delay: i32,

    #[setting(
        ui_name = "Max Join Delay (ms)",
        cli = ["--join-max-delay"],
        min = 0,
        max = 60000,
        format = "%d ms"
    )]
    pub join_max_delay: i32,

    #[setting(cli = ["--auto-reconnect"])]
    pub auto_reconnect: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:25565".to_string(),
            amount: 1,
            port: 25565,
            reach: 4.5,
            join_min_delay: 1000,
            join_max_delay: 3000,
            auto_reconnect: true,
        }
    }
}

/// Proxy settings
#[derive(DeriveSettingsObject)]
#[settings(namespace = "proxy")]
pub struct ProxySettings {
    #[setting(
        key = "type",
        ui_name = "Proxy Type",
        options = [("http", "HTTP"), ("socks4", "SOCKS4"), ("socks5", "SOCKS5")]
    )]
    pub proxy_type: String,

    #[setting(secret, description = "Password for authenticated proxies")]
    pub password: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            proxy_type: "http".to_string(),
            password: String::new(),
        }
    }
}

// =============================================================================
// Settings declared by hand
// =============================================================================

/// Account settings whose defaults are not known until runtime
struct AccountSettings;

impl SettingsObject for AccountSettings {
    fn properties() -> Vec<Property> {
        let user = std::env::var("USER").unwrap_or_else(|_| "bot".to_string());
        vec![
            StringProperty::new("account", "name-format", format!("{user}_%d"))
                .ui_name("Name Format")
                .description("Offline account names, %d is the bot index")
                .into(),
        ]
    }
}

#[derive(DeriveSettingsObject, Default)]
#[settings(namespace = "dev")]
struct DevSettings {
    #[setting(ui_name = "Core Debug", description = "Verbose core logging")]
    core_debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut builder = SettingsRegistry::builder();
    builder
        .add::<BotSettings>("Bot")?
        .add::<ProxySettings>("Proxy")?
        .add::<AccountSettings>("Accounts")?
        .add_hidden::<DevSettings>("Developer")?;
    let registry = builder.build();

    println!(
        "Registered {} properties in {} namespaces\n",
        registry.property_count(),
        registry.namespace_count()
    );

    println!("=== Schema ===\n{}\n", registry.export_json_pretty()?);

    let docs = generate_docs(
        &registry,
        DocsConfig::new()
            .with_title("Bot Settings")
            .with_description("Every setting a client can configure."),
    );
    println!("=== Docs ===\n{docs}");

    Ok(())
}
