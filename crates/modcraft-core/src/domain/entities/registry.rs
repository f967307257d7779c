//! Registry anchors and text-level patching.
//!
//! A registry is a generated file the tool keeps extending: the autoload map
//! in `composer.json`, the provider list in `bootstrap/app.php` and the
//! listener map in a module's `EventServiceProvider`. None of them are parsed.
//! Each is described by an anchor pattern plus the closing marker of the
//! block that follows it; new entries go right after the last anchor match in
//! the file.

use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;

use crate::domain::{entities::scaffold_target::Workspace, error::DomainError};

const INDENT_STEP: &str = "    ";

/// The three registries a module can be wired into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryKind {
    Autoload,
    BootstrapProviders,
    ListenerMap,
}

impl RegistryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Autoload => "autoload-map",
            Self::BootstrapProviders => "bootstrap-provider-list",
            Self::ListenerMap => "event-listener-map",
        }
    }

    pub const fn anchor(&self) -> RegistryAnchor {
        match self {
            // Only the psr-4 map of `autoload`; `autoload-dev` has one too.
            Self::Autoload => RegistryAnchor {
                registry: "composer.json",
                token: "\"autoload\": { \"psr-4\": {",
                locator: r#""autoload"\s*:\s*\{[^{}]*?"psr-4"\s*:\s*\{"#,
                closing: r"\}",
            },
            Self::BootstrapProviders => RegistryAnchor {
                registry: "bootstrap/app.php",
                token: "withProviders([",
                locator: r"withProviders\(\[",
                closing: r"\]\s*\)",
            },
            Self::ListenerMap => RegistryAnchor {
                registry: "app/Providers/EventServiceProvider.php",
                token: "protected $listen = [",
                locator: r"protected\s+\$listen\s*=\s*\[",
                closing: r"\]\s*;",
            },
        }
    }

    /// Location of the registry file on disk.
    ///
    /// The autoload map and the provider list belong to the host project, the
    /// listener map to a single module.
    pub fn path(&self, workspace: &Workspace, module: &str) -> PathBuf {
        let relative = self.anchor().registry;
        match self {
            Self::ListenerMap => workspace.module_root(module).join(relative),
            _ => workspace.resolve(relative),
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor of one registry's insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryAnchor {
    /// Registry file, relative to the project base or the module root.
    pub registry: &'static str,
    /// The anchor as shown to the operator.
    pub token: &'static str,
    /// Pattern matching the anchor; entries go right after its last match.
    pub locator: &'static str,
    /// Pattern of the marker closing the block opened by `token`.
    pub closing: &'static str,
}

/// Result of applying an entry to registry text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPatch {
    Inserted(String),
    AlreadyPresent,
}

impl RegistryAnchor {
    /// Insert `entry` after the rightmost anchor unless its dedupe key is
    /// already inside that anchor's block.
    ///
    /// Returns `AnchorNotFound` when the token is missing or when its block
    /// cannot be delimited; an unbounded block is never treated as empty.
    pub fn apply(&self, content: &str, entry: &RegistryEntry) -> Result<TextPatch, DomainError> {
        let not_found = || DomainError::AnchorNotFound {
            registry: self.registry,
            anchor: self.token,
        };

        let anchor = compile(self.registry, self.locator)?
            .find_iter(content)
            .last()
            .ok_or_else(not_found)?;
        let insert_at = anchor.end();
        let block = self.block_after(&content[insert_at..])?.ok_or_else(not_found)?;

        if block.contains(&entry.dedupe_key()) {
            return Ok(TextPatch::AlreadyPresent);
        }

        let indent = format!("{}{INDENT_STEP}", line_indent(content, insert_at));
        let rendered = entry.render(&indent, block.trim().is_empty());

        let mut patched = String::with_capacity(content.len() + rendered.len());
        patched.push_str(&content[..insert_at]);
        patched.push_str(&rendered);
        patched.push_str(&content[insert_at..]);
        Ok(TextPatch::Inserted(patched))
    }

    /// Text between the end of the anchor and the first closing marker.
    fn block_after<'a>(&self, after_anchor: &'a str) -> Result<Option<&'a str>, DomainError> {
        let re = compile(self.registry, &format!(r"(?s)\A(.*?){}", self.closing))?;

        Ok(re
            .captures(after_anchor)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()))
    }
}

fn compile(registry: &'static str, pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
        registry,
        message: e.to_string(),
    })
}

/// Leading whitespace of the line containing byte offset `at`.
fn line_indent(content: &str, at: usize) -> &str {
    let line_start = content[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &content[line_start..at];
    let width = line.len() - line.trim_start().len();
    &line[..width]
}

/// A new row for one of the registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEntry {
    /// `"Prefix\\": "path/"` in the psr-4 map.
    Autoload { prefix: String, path: String },
    /// `\Fully\Qualified\Provider::class,`
    Provider { class: String },
    /// `\Event::class => [ \Listener::class, ],`
    Listener {
        event: String,
        listeners: Vec<String>,
    },
}

impl RegistryEntry {
    pub const LISTENER_PLACEHOLDER: &'static str = "// Add listeners here";

    /// Text whose presence inside the block means the entry is registered.
    pub fn dedupe_key(&self) -> String {
        match self {
            Self::Autoload { prefix, .. } => json_string(prefix),
            Self::Provider { class } => format!("{}::class", class.trim_start_matches('\\')),
            Self::Listener { event, .. } => format!("{}::class", event.trim_start_matches('\\')),
        }
    }

    /// Entry text as inserted right after the anchor token.
    ///
    /// `block_empty` drops the trailing comma of autoload rows so the JSON
    /// stays valid.
    pub fn render(&self, indent: &str, block_empty: bool) -> String {
        match self {
            Self::Autoload { prefix, path } => {
                let comma = if block_empty { "" } else { "," };
                format!(
                    "\n{indent}{}: {}{comma}",
                    json_string(prefix),
                    json_string(path)
                )
            }
            Self::Provider { class } => {
                format!("\n{indent}\\{}::class,", class.trim_start_matches('\\'))
            }
            Self::Listener { event, listeners } => {
                let inner = format!("{indent}{INDENT_STEP}");
                let body = if listeners.is_empty() {
                    format!("{inner}{}\n", Self::LISTENER_PLACEHOLDER)
                } else {
                    listeners
                        .iter()
                        .map(|l| format!("{inner}\\{}::class,\n", l.trim_start_matches('\\')))
                        .collect()
                };
                format!(
                    "\n{indent}\\{}::class => [\n{body}{indent}],",
                    event.trim_start_matches('\\')
                )
            }
        }
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPOSER: &str = r#"{
    "name": "acme/shop",
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    }
}
"#;

    const EVENT_PROVIDER: &str = "<?php

class EventServiceProvider extends ServiceProvider
{
    protected $listen = [
    ];
}
";

    fn unwrap_inserted(patch: TextPatch) -> String {
        match patch {
            TextPatch::Inserted(text) => text,
            TextPatch::AlreadyPresent => panic!("expected an insertion"),
        }
    }

    #[test]
    fn autoload_entry_is_inserted_first_in_the_block() {
        let entry = RegistryEntry::Autoload {
            prefix: "Modules\\Billing\\App\\".into(),
            path: "modules/Billing/app/".into(),
        };
        let patched = unwrap_inserted(RegistryKind::Autoload.anchor().apply(COMPOSER, &entry).unwrap());

        assert!(patched.contains(
            "\"psr-4\": {\n            \"Modules\\\\Billing\\\\App\\\\\": \"modules/Billing/app/\",\n            \"App\\\\\": \"app/\""
        ));
        let parsed: serde_json::Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(
            parsed["autoload"]["psr-4"]["Modules\\Billing\\App\\"],
            "modules/Billing/app/"
        );
    }

    #[test]
    fn autoload_into_empty_block_has_no_trailing_comma() {
        let content = "{\"autoload\": {\"psr-4\": {}}}";
        let entry = RegistryEntry::Autoload {
            prefix: "Modules\\A\\App\\".into(),
            path: "modules/A/app/".into(),
        };
        let patched = unwrap_inserted(RegistryKind::Autoload.anchor().apply(content, &entry).unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(parsed["autoload"]["psr-4"]["Modules\\A\\App\\"], "modules/A/app/");
    }

    #[test]
    fn autoload_goes_to_autoload_not_autoload_dev() {
        let content = r#"{
    "autoload": {
        "files": ["app/helpers.php"],
        "psr-4": {
            "App\\": "app/"
        }
    },
    "autoload-dev": {
        "psr-4": {
            "Tests\\": "tests/"
        }
    }
}
"#;
        let entry = RegistryEntry::Autoload {
            prefix: "Modules\\Billing\\App\\".into(),
            path: "modules/Billing/app/".into(),
        };
        let anchor = RegistryKind::Autoload.anchor();
        let patched = unwrap_inserted(anchor.apply(content, &entry).unwrap());

        let parsed: serde_json::Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(
            parsed["autoload"]["psr-4"]["Modules\\Billing\\App\\"],
            "modules/Billing/app/"
        );
        assert!(parsed["autoload-dev"]["psr-4"].get("Modules\\Billing\\App\\").is_none());
        assert_eq!(anchor.apply(&patched, &entry).unwrap(), TextPatch::AlreadyPresent);
    }

    #[test]
    fn autoload_dev_alone_is_not_an_anchor() {
        let content = r#"{"autoload-dev": {"psr-4": {"Tests\\": "tests/"}}}"#;
        let entry = RegistryEntry::Autoload {
            prefix: "Modules\\A\\App\\".into(),
            path: "modules/A/app/".into(),
        };
        let err = RegistryKind::Autoload.anchor().apply(content, &entry).unwrap_err();
        assert!(matches!(err, DomainError::AnchorNotFound { .. }));
    }

    #[test]
    fn applying_twice_inserts_once() {
        let entry = RegistryEntry::Listener {
            event: "Modules\\Shop\\App\\Events\\OrderPlaced".into(),
            listeners: vec!["Modules\\Shop\\App\\Listeners\\SendReceipt".into()],
        };
        let anchor = RegistryKind::ListenerMap.anchor();
        let once = unwrap_inserted(anchor.apply(EVENT_PROVIDER, &entry).unwrap());
        assert_eq!(anchor.apply(&once, &entry).unwrap(), TextPatch::AlreadyPresent);
        assert_eq!(once.matches("OrderPlaced::class").count(), 1);
    }

    #[test]
    fn listener_entry_layout() {
        let entry = RegistryEntry::Listener {
            event: "Modules\\Shop\\App\\Events\\OrderPlaced".into(),
            listeners: vec!["Modules\\Shop\\App\\Listeners\\SendReceipt".into()],
        };
        let patched =
            unwrap_inserted(RegistryKind::ListenerMap.anchor().apply(EVENT_PROVIDER, &entry).unwrap());
        assert!(patched.contains(
            "    protected $listen = [\n        \\Modules\\Shop\\App\\Events\\OrderPlaced::class => [\n            \\Modules\\Shop\\App\\Listeners\\SendReceipt::class,\n        ],\n    ];"
        ));
    }

    #[test]
    fn listener_without_listeners_gets_placeholder() {
        let entry = RegistryEntry::Listener {
            event: "Modules\\Shop\\App\\Events\\OrderPlaced".into(),
            listeners: vec![],
        };
        let patched =
            unwrap_inserted(RegistryKind::ListenerMap.anchor().apply(EVENT_PROVIDER, &entry).unwrap());
        assert!(patched.contains(RegistryEntry::LISTENER_PLACEHOLDER));
    }

    #[test]
    fn rightmost_anchor_wins() {
        let content = "->withProviders([\n    First::class,\n])\n->withProviders([\n])\n";
        let entry = RegistryEntry::Provider {
            class: "\\Modules\\Billing\\App\\Providers\\BillingServiceProvider".into(),
        };
        let patched =
            unwrap_inserted(RegistryKind::BootstrapProviders.anchor().apply(content, &entry).unwrap());
        let second = patched.rfind("withProviders([").unwrap();
        let inserted = patched.find("BillingServiceProvider").unwrap();
        assert!(inserted > second);
        assert!(patched.contains("\\Modules\\Billing\\App\\Providers\\BillingServiceProvider::class,"));
    }

    #[test]
    fn dedupe_only_looks_inside_the_rightmost_block() {
        // Registered in the first block only: the rightmost block still gets it.
        let content = "withProviders([\n    \\X\\P::class,\n])\nwithProviders([\n])\n";
        let entry = RegistryEntry::Provider { class: "X\\P".into() };
        let patch = RegistryKind::BootstrapProviders.anchor().apply(content, &entry).unwrap();
        assert!(matches!(patch, TextPatch::Inserted(_)));
    }

    #[test]
    fn missing_anchor_is_reported() {
        let entry = RegistryEntry::Provider { class: "X\\P".into() };
        let err = RegistryKind::BootstrapProviders
            .anchor()
            .apply("return Application::configure();", &entry)
            .unwrap_err();
        assert!(matches!(err, DomainError::AnchorNotFound { .. }));
    }

    #[test]
    fn unterminated_block_is_anchor_not_found() {
        let entry = RegistryEntry::Listener {
            event: "E".into(),
            listeners: vec![],
        };
        let err = RegistryKind::ListenerMap
            .anchor()
            .apply("protected $listen = [\n  // never closed\n", &entry)
            .unwrap_err();
        assert!(matches!(err, DomainError::AnchorNotFound { .. }));
    }

    #[test]
    fn registry_paths() {
        let ws = Workspace::new("/srv/app");
        assert_eq!(
            RegistryKind::Autoload.path(&ws, "Billing"),
            PathBuf::from("/srv/app/composer.json")
        );
        assert_eq!(
            RegistryKind::ListenerMap.path(&ws, "Billing"),
            PathBuf::from("/srv/app/modules/Billing/app/Providers/EventServiceProvider.php")
        );
    }
}
