//! Configuration schema.
//!
//! A `DashboardConfig` is deserialized from TOML. Every table and key is
//! optional; omitted values take the defaults below. Unknown keys are
//! rejected so a typo does not silently fall back to a default.
//!
//! Example:
//! ```toml
//! [navigation]
//! selection_policy = "reset-on-leave"
//!
//! [alerts]
//! default_frequency = "weekly"
//! specialties = ["Oncology", "Cardiology"]
//!
//! [ui]
//! poll_ms = 200
//! ```

use serde::{Deserialize, Serialize};

use medresearch_contracts::{alert::Frequency, user::User};
use medresearch_core::{navigation::SelectionPolicy, state::Preferences};

/// Specialties offered by the create-alert form when none are configured.
pub const DEFAULT_SPECIALTIES: [&str; 5] = [
    "Oncology",
    "Cardiology",
    "Neurology",
    "Pulmonology",
    "Gastroenterology",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub navigation: NavigationConfig,
    pub alerts: AlertsConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

impl DashboardConfig {
    /// The reducer-facing subset of the configuration.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            selection_policy: self.navigation.selection_policy,
            default_frequency: self.alerts.default_frequency,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// `"reset-on-leave"` (default) or `"persist-per-section"`.
    pub selection_policy: SelectionPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertsConfig {
    pub default_frequency: Frequency,
    /// Picker options for the specialty field, in display order.
    pub specialties: Vec<String>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            default_frequency: Frequency::default(),
            specialties: DEFAULT_SPECIALTIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Fixed user the mocked login signs in as. The built-in demo user when
    /// omitted.
    pub demo_user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// How long the terminal shell waits for input before redrawing.
    pub poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { poll_ms: 200 }
    }
}
