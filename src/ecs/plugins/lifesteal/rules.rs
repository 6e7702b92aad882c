use bevy::prelude::*;
use std::collections::HashMap;

/// Fraction healed by anything dagger-like when no explicit rule says otherwise.
pub const DEFAULT_DAGGER_LIFESTEAL: f32 = 0.12;

/// Compiled-in fallback fractions per item category. Matched case-insensitively
/// and never affected by `clear`.
const CATEGORY_DEFAULTS: &[(&str, f32)] = &[("Dagger", DEFAULT_DAGGER_LIFESTEAL)];

/// Runtime lifesteal rule table: item id -> fraction of damage healed.
///
/// Explicit per-id rules are registered at runtime (catalog scan or admin
/// command) and always win over category defaults. There is no per-entry
/// removal; the table is either cleared or rebuilt wholesale.
#[derive(Resource, Debug, Default, Clone)]
pub struct LifestealRules {
    explicit: HashMap<String, f32>,
}

impl LifestealRules {
    /// Register or overwrite the rule for an item id.
    ///
    /// An empty id is a silent no-op. Fractions are clamped into [0, 1];
    /// a non-finite fraction is dropped so it can never poison a heal.
    pub fn set_rule(&mut self, item_id: &str, fraction: f32) {
        if item_id.is_empty() {
            return;
        }
        if !fraction.is_finite() {
            warn!("dropping non-finite lifesteal fraction for {}", item_id);
            return;
        }
        let clamped = fraction.clamp(0.0, 1.0);
        if clamped != fraction {
            warn!(
                "lifesteal fraction {} for {} outside [0, 1], clamped to {}",
                fraction, item_id, clamped
            );
        }
        self.explicit.insert(item_id.to_owned(), clamped);
    }

    /// The explicit fraction for an item id, if one is registered.
    pub fn rule(&self, item_id: &str) -> Option<f32> {
        self.explicit.get(item_id).copied()
    }

    /// Drop every explicit rule. Category defaults are compiled in and remain.
    pub fn clear(&mut self) {
        self.explicit.clear();
    }

    pub fn len(&self) -> usize {
        self.explicit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty()
    }

    /// Fallback fraction for the first item category with a known default.
    pub fn category_default(&self, categories: &[String]) -> Option<f32> {
        categories.iter().find_map(|category| {
            CATEGORY_DEFAULTS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(category))
                .map(|(_, fraction)| *fraction)
        })
    }
}
