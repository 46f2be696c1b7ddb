//! # medresearch-config
//!
//! TOML-driven configuration for the MedResearch dashboard.
//!
//! ## Overview
//!
//! A single `DashboardConfig` document controls:
//!
//! 1. **Navigation**: whether leaving a section forgets its drill-down.
//! 2. **Alerts**: the create form's default frequency and specialty list.
//! 3. **Session**: the fixed user the mocked login signs in as.
//! 4. **UI**: terminal poll interval.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medresearch_config::DashboardConfig;
//!
//! let config = DashboardConfig::load(Some(Path::new("config/dashboard.toml")))?;
//! let state = AppState::new(catalog, config.preferences());
//! ```

pub mod loader;
pub mod settings;

pub use settings::{DashboardConfig, DEFAULT_SPECIALTIES};

// ── Tests ─────────────────────────────────────────────────────────────────────
