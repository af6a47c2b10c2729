//! Documentation generator for exported settings pages
//!
//! Generates a markdown reference from [`SettingsPage`] values, one section per
//! page in export order.

use crate::export::{
    IntSetting, MinMaxBoundEntry, SettingEntry, SettingType, SettingsPage, SingleEntry,
};
use crate::registry::SettingsRegistry;
use std::fmt::Write;

const SECRET_MASK: &str = "********";

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// Whether to include hidden pages
    pub show_hidden: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn show_hidden(mut self) -> Self {
        self.show_hidden = true;
        self
    }
}

/// Generate markdown documentation for a frozen registry
#[must_use]
pub fn generate_docs(registry: &SettingsRegistry, config: DocsConfig) -> String {
    generate_docs_from_pages(registry.export_metadata(), config)
}

/// Generate docs from already exported pages
#[must_use]
pub fn generate_docs_from_pages(pages: &[SettingsPage], config: DocsConfig) -> String {
    let mut output = String::new();

    let title = config
        .title
        .unwrap_or_else(|| "Settings Reference".to_string());
    writeln!(output, "# {title}\n").unwrap();

    if let Some(desc) = config.description {
        writeln!(output, "{desc}\n").unwrap();
    }

    for page in pages.iter().filter(|p| config.show_hidden || !p.hidden) {
        format_page(&mut output, page);
    }

    output
}

fn format_page(out: &mut String, page: &SettingsPage) {
    write!(out, "## {}", page.page_name).unwrap();
    if page.hidden {
        out.push_str(" (Hidden)");
    }
    writeln!(out, "\n\nNamespace: `{}`\n", page.namespace).unwrap();

    for entry in &page.entries {
        match entry {
            SettingEntry::Single(single) => format_single(out, &page.namespace, single),
            SettingEntry::MinMaxPair(pair) => {
                writeln!(out, "### {} / {}\n", pair.min.ui_name, pair.max.ui_name).unwrap();
                out.push_str("Linked range, both ends are edited together.\n\n");
                format_bound(out, &page.namespace, "Minimum", &pair.min);
                format_bound(out, &page.namespace, "Maximum", &pair.max);
                out.push_str("---\n\n");
            }
        }
    }
}

fn format_single(out: &mut String, namespace: &str, entry: &SingleEntry) {
    writeln!(out, "### {}\n", entry.ui_name).unwrap();

    if matches!(entry.setting_type, SettingType::String(ref s) if s.secret) {
        out.push_str("Secret\n\n");
    }
    if !entry.description.is_empty() {
        writeln!(out, "{}\n", entry.description).unwrap();
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    writeln!(out, "| **Key** | `{namespace}.{}` |", entry.key).unwrap();
    format_flags(out, &entry.cli_flags);

    match &entry.setting_type {
        SettingType::Bool(setting) => {
            writeln!(out, "| **Type** | Boolean |").unwrap();
            writeln!(out, "| **Default** | `{}` |", setting.def).unwrap();
        }
        SettingType::Int(setting) => {
            writeln!(out, "| **Type** | Integer |").unwrap();
            format_int(out, setting);
        }
        SettingType::Double(setting) => {
            writeln!(out, "| **Type** | Decimal |").unwrap();
            writeln!(out, "| **Default** | `{}` |", setting.def).unwrap();
            writeln!(out, "| **Range** | {} - {} |", setting.min, setting.max).unwrap();
            writeln!(out, "| **Step** | {} |", setting.step).unwrap();
            if let Some(ref format) = setting.format {
                writeln!(out, "| **Format** | `{format}` |").unwrap();
            }
        }
        SettingType::String(setting) => {
            writeln!(out, "| **Type** | String |").unwrap();
            let def = if setting.secret {
                SECRET_MASK
            } else {
                setting.def.as_str()
            };
            writeln!(out, "| **Default** | `\"{def}\"` |").unwrap();
        }
        SettingType::Combo(setting) => {
            writeln!(out, "| **Type** | Select |").unwrap();
            writeln!(out, "| **Default** | `\"{}\"` |", setting.def).unwrap();
        }
    }

    out.push('\n');

    if let SettingType::Combo(ref combo) = entry.setting_type {
        out.push_str("**Options:**\n\n");
        for option in &combo.options {
            writeln!(out, "- `{}` - {}", option.id, option.display_name).unwrap();
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
}

fn format_bound(out: &mut String, namespace: &str, side: &str, bound: &MinMaxBoundEntry) {
    writeln!(out, "**{side}:** {}\n", bound.ui_name).unwrap();
    if !bound.description.is_empty() {
        writeln!(out, "{}\n", bound.description).unwrap();
    }
    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    writeln!(out, "| **Key** | `{namespace}.{}` |", bound.key).unwrap();
    format_flags(out, &bound.cli_flags);
    format_int(out, &bound.int_setting);
    out.push('\n');
}

fn format_int(out: &mut String, setting: &IntSetting) {
    writeln!(out, "| **Default** | `{}` |", setting.def).unwrap();
    writeln!(out, "| **Range** | {} - {} |", setting.min, setting.max).unwrap();
    writeln!(out, "| **Step** | {} |", setting.step).unwrap();
    if let Some(ref format) = setting.format {
        writeln!(out, "| **Format** | `{format}` |").unwrap();
    }
}

fn format_flags(out: &mut String, flags: &[String]) {
    if flags.is_empty() {
        return;
    }
    let flags: Vec<String> = flags.iter().map(|f| format!("`{f}`")).collect();
    writeln!(out, "| **CLI** | {} |", flags.join(", ")).unwrap();
}

// =============================================================================
// Tests
// =============================================================================
