//! Launch configuration for the GUI.
//!
//! Positional arguments prefill the form (`attended total required`); when all
//! three are given the form is submitted on the first frame. The platform's
//! dark-mode preference can be overridden with `ATTENDANCE_SYSTEM_THEME`.

use anyhow::{bail, Context, Result};

use crate::calculator::RawInput;
use crate::theme::ThemePreference;

/// Environment variable overriding the system dark-mode preference.
pub const SYSTEM_THEME_ENV: &str = "ATTENDANCE_SYSTEM_THEME";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Initial contents of the three form fields
    pub prefill: RawInput,
    /// True when all three fields were supplied on the command line
    pub submit_on_start: bool,
    /// Replaces the system preference reported by the platform
    pub system_theme_override: Option<ThemePreference>,
    pub show_help: bool,
}

impl LaunchConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(args, std::env::var(SYSTEM_THEME_ENV).ok())
    }

    /// Parses arguments (without the program name) and the override variable.
    pub fn parse<I>(args: I, system_theme: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = LaunchConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-h" | "-help" | "--help" => config.show_help = true,
                _ => positional.push(arg),
            }
        }

        if positional.len() > 3 {
            bail!(
                "expected at most 3 positional arguments (attended total required), got {}",
                positional.len()
            );
        }

        config.submit_on_start = positional.len() == 3;
        let mut fields = positional.into_iter();
        config.prefill = RawInput::new(
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
        );

        if let Some(value) = system_theme {
            let value = value.trim().to_ascii_lowercase();
            let preference = ThemePreference::parse(&value)
                .with_context(|| format!("{} must be \"light\" or \"dark\", got {:?}", SYSTEM_THEME_ENV, value))?;
            config.system_theme_override = Some(preference);
        }

        Ok(config)
    }

    /// Resolves the system dark-mode preference, honouring the override.
    pub fn system_prefers_dark(&self, reported: Option<bool>) -> bool {
        match self.system_theme_override {
            Some(preference) => preference.is_dark(),
            None => reported.unwrap_or(false),
        }
    }
}

pub fn help_text() -> &'static str {
    "Attendance Risk Predictor\n\
     \n\
     USAGE:\n    attendance-gui [ATTENDED [TOTAL [REQUIRED]]]\n\
     \n\
     Supplying all three values calculates immediately.\n\
     \n\
     ENVIRONMENT:\n    ATTENDANCE_SYSTEM_THEME   light | dark, overrides the system preference\n    \
     RUST_LOG                  log filter (e.g. debug)\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_prefill_submits() {
        let config = LaunchConfig::parse(args(&["40", "50", "75"]), None).unwrap();
        assert_eq!(config.prefill, RawInput::new("40", "50", "75"));
        assert!(config.submit_on_start);
        assert!(!config.show_help);
    }

    #[test]
    fn test_partial_prefill_waits() {
        let config = LaunchConfig::parse(args(&["12"]), None).unwrap();
        assert_eq!(config.prefill, RawInput::new("12", "", ""));
        assert!(!config.submit_on_start);
    }

    #[test]
    fn test_too_many_arguments() {
        assert!(LaunchConfig::parse(args(&["1", "2", "3", "4"]), None).is_err());
    }

    #[test]
    fn test_system_theme_override() {
        let config = LaunchConfig::parse(Vec::new(), Some(" Dark ".to_string())).unwrap();
        assert_eq!(config.system_theme_override, Some(ThemePreference::Dark));
        assert!(config.system_prefers_dark(Some(false)));

        let config = LaunchConfig::parse(Vec::new(), None).unwrap();
        assert!(config.system_prefers_dark(Some(true)));
        assert!(!config.system_prefers_dark(None));

        assert!(LaunchConfig::parse(Vec::new(), Some("blue".to_string())).is_err());
    }

    #[test]
    fn test_help_flag() {
        let config = LaunchConfig::parse(args(&["--help"]), None).unwrap();
        assert!(config.show_help);
    }
}
