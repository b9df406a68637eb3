//! Variant selection and its immutable configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Chess,
    Leviathan,
    Lambda,
    Helmbreaker,
    Rite,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Chess,
        Variant::Leviathan,
        Variant::Lambda,
        Variant::Helmbreaker,
        Variant::Rite,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::Leviathan => "leviathan",
            Variant::Lambda => "lambda",
            Variant::Helmbreaker => "helmbreaker",
            Variant::Rite => "rite",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Variant::Chess => "Chess",
            Variant::Leviathan => "Leviathan",
            Variant::Lambda => "Lambda Protocol",
            Variant::Helmbreaker => "Helmbreaker",
            Variant::Rite => "Rite of Reduction",
        }
    }

    /// Whether `color` owns a royal piece it may not leave in check.
    ///
    /// Leviathan has no kings at all and Helmbreaker's invader has none.
    pub const fn has_check_for(self, color: Color) -> bool {
        match self {
            Variant::Leviathan => false,
            Variant::Helmbreaker => matches!(color, Color::Dark),
            Variant::Chess | Variant::Lambda | Variant::Rite => true,
        }
    }

    #[inline]
    pub const fn uses_planes(self) -> bool {
        matches!(self, Variant::Lambda)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}' (expected chess, leviathan, lambda, helmbreaker or rite)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Immutable per-game configuration, chosen once at game creation.
///
/// Tunables that do not apply to the selected variant are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    pub variant: Variant,
    /// Rite: plies between ring collapses.
    pub collapse_interval: u32,
    /// Rite: rings that may collapse before the board stops shrinking.
    pub max_collapsed_rings: u8,
    /// Lambda: resource pool ceiling.
    pub resource_cap: u8,
    pub initial_resources: u8,
    /// Lambda: resources credited at the start of each turn.
    pub resource_income: u8,
    /// Helmbreaker: full rounds the defender must survive.
    pub turn_limit: u16,
    pub fortification_health: u8,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Chess,
            collapse_interval: DEFAULT_COLLAPSE_INTERVAL,
            max_collapsed_rings: DEFAULT_MAX_COLLAPSED_RINGS,
            resource_cap: DEFAULT_RESOURCE_CAP,
            initial_resources: DEFAULT_INITIAL_RESOURCES,
            resource_income: DEFAULT_RESOURCE_INCOME,
            turn_limit: DEFAULT_TURN_LIMIT,
            fortification_health: DEFAULT_FORTIFICATION_HEALTH,
        }
    }
}

impl VariantConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse a JSON config. A document without a `variant` key plays
    /// `fallback`; every other missing key takes its default.
    pub fn from_json_or(json: &str, fallback: Variant) -> serde_json::Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(fields) = value.as_object_mut() {
            fields
                .entry("variant")
                .or_insert_with(|| serde_json::Value::from(fallback.name()));
        }
        serde_json::from_value(value)
    }
}

impl From<Variant> for VariantConfig {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}
