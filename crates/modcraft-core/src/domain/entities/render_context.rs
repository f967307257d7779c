//! Placeholder substitution.
//!
//! Stubs carry `{{ name }}` placeholders (inner whitespace optional). The
//! values for one artifact live in a [`RenderContext`]:
//!
//! | Placeholder | Example | Used by |
//! |-------------|---------|---------|
//! | `namespace` | `Modules\Billing\App\Models` | every class stub |
//! | `class` | `InvoiceController` | every class stub |
//! | `rootNamespace` | `App\` | controller |
//! | `key` | `billing` | module providers |
//! | `table` | `user_profiles` | migration |
//! | `event`, `eventPath` | `OrderPlaced` | listener |
//! | `factoryNamespace`, `namespacedModel`, `namespacedModelPath`, `factory` | | factory |

use std::collections::BTreeMap;

/// Values for one render pass.
///
/// Immutable after construction; builder methods consume and return `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the two placeholders every class stub uses.
    pub fn for_class(namespace: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new()
            .with_variable("namespace", namespace)
            .with_variable("class", class)
    }

    /// Add a variable, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every recognized `{{ key }}` in a single left-to-right scan.
    ///
    /// - `{{ unknown }}` is emitted verbatim.
    /// - Substituted values are never scanned again, so a value that happens
    ///   to contain `{{ class }}` stays literal.
    /// - An unterminated `{{` is emitted verbatim along with the rest of the
    ///   input.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];

            let Some(close) = after_open.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let key = after_open[..close].trim();
            match self.variables.get(key) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after_open[close + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
