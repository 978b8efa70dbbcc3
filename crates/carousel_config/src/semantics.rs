//! Semantics/accessibility rule engine.
//!
//! The carousel semantics choice drives the ARIA role: a decorative
//! carousel is exposed to assistive technology as a plain group, a content
//! carousel carries no explicit role. The admin form mirrors this rule
//! live on the client; this module applies it authoritatively at save
//! time so the persisted value reflects the derivation, not raw input.

use serde_json::Value;

use crate::content::Semantics;
use crate::options::OptionGroup;

/// Derive the ARIA role from the carousel semantics.
///
/// Decorative forces `role = "group"` regardless of prior value; content
/// clears the role (represented as an absent key, since compiled options
/// never carry empty values).
pub fn apply_semantics(semantics: Semantics, accessibility: &mut OptionGroup) {
    match semantics {
        Semantics::Decorative => {
            accessibility.insert("role".to_string(), Value::String("group".to_string()));
        }
        Semantics::Content => {
            accessibility.remove("role");
        }
    }
}

#[cfg(test)]
#[path = "semantics_tests.rs"]
mod tests;
