pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod formatting;
pub mod storage;
pub mod theme;

// Export calculation core
pub use calculator::{compute, validate, AttendanceInput, AttendanceResult, RawInput, RiskLevel};
pub use error::ValidationError;

// Export display port and submission flow
pub use display::{DisplayFields, DisplayPort, PLACEHOLDER};
pub use form::AttendanceCalculator;

// Export theme support
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager, ThemePreference, THEME_KEY};

pub use config::LaunchConfig;
