//! Attendance validation and risk calculation.
//!
//! Turns the three raw form fields into a validated [`AttendanceInput`] and
//! derives an [`AttendanceResult`] from it. Nothing here touches the display;
//! see [`crate::form`] for the submission flow that writes results out.
//!
//! # Examples
//!
//! ```
//! use attendance_risk::calculator::{compute, validate, RawInput, RiskLevel};
//!
//! let input = validate(&RawInput::new("40", "50", "75")).unwrap();
//! let result = compute(&input);
//! assert_eq!(result.max_missable, 3);
//! assert_eq!(result.risk_level, RiskLevel::Safe);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound of missable classes that still counts as at risk.
const AT_RISK_THRESHOLD: i64 = 2;

/// The three form fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub attended: String,
    pub total: String,
    pub required: String,
}

impl RawInput {
    pub fn new(
        attended: impl Into<String>,
        total: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self {
            attended: attended.into(),
            total: total.into(),
            required: required.into(),
        }
    }

    fn fields(&self) -> [&str; 3] {
        [&self.attended, &self.total, &self.required]
    }
}

/// Validated numeric input.
///
/// Invariants: all values finite and non-negative, `attended <= total`,
/// `total > 0` and `1 <= required_percent <= 100`. Only [`validate`] builds one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceInput {
    attended: f64,
    total: f64,
    required_percent: f64,
}

impl AttendanceInput {
    pub fn attended(&self) -> f64 {
        self.attended
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn required_percent(&self) -> f64 {
        self.required_percent
    }
}

/// Coarse classification of how safe the current attendance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    AtRisk,
    Unsafe,
}

impl RiskLevel {
    /// Classifies an unclamped missable-class count.
    pub fn classify(max_missable: i64) -> Self {
        if max_missable < 0 {
            RiskLevel::Unsafe
        } else if max_missable <= AT_RISK_THRESHOLD {
            RiskLevel::AtRisk
        } else {
            RiskLevel::Safe
        }
    }

    /// Human-readable label shown in the risk status field.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::AtRisk => "At Risk",
            RiskLevel::Unsafe => "Unsafe",
        }
    }

    /// Style tag attached to the risk status field.
    pub fn tag(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::AtRisk => "at-risk",
            RiskLevel::Unsafe => "unsafe",
        }
    }
}

/// Metrics derived from a validated input. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceResult {
    pub current_percent: f64,
    /// Additional classes that can be skipped. Negative when already below
    /// the required ratio.
    pub max_missable: i64,
    pub risk_level: RiskLevel,
    /// Current percentage minus required percentage.
    pub margin: f64,
}

impl AttendanceResult {
    /// Missable count as displayed: negative values are shown as zero.
    pub fn displayed_missable(&self) -> i64 {
        self.max_missable.max(0)
    }
}

/// Validates raw form input. The first failing rule wins.
pub fn validate(raw: &RawInput) -> Result<AttendanceInput, ValidationError> {
    let fields = raw.fields();

    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::EmptyField);
    }

    let [attended, total, required] = [
        parse_number(fields[0])?,
        parse_number(fields[1])?,
        parse_number(fields[2])?,
    ];

    if attended < 0.0 || total < 0.0 || required < 0.0 {
        return Err(ValidationError::NegativeValue);
    }

    if attended > total {
        return Err(ValidationError::AttendedExceedsTotal);
    }

    if total == 0.0 {
        return Err(ValidationError::ZeroTotal);
    }

    if !(1.0..=100.0).contains(&required) {
        return Err(ValidationError::RequiredOutOfRange);
    }

    Ok(AttendanceInput {
        attended,
        total,
        required_percent: required,
    })
}

/// Computes percentage, missable classes, risk level and margin.
pub fn compute(input: &AttendanceInput) -> AttendanceResult {
    let current_percent = input.attended / input.total * 100.0;
    let max_missable = (input.attended * 100.0 / input.required_percent - input.total).floor() as i64;

    AttendanceResult {
        current_percent,
        max_missable,
        risk_level: RiskLevel::classify(max_missable),
        margin: current_percent - input.required_percent,
    }
}

fn parse_number(field: &str) -> Result<f64, ValidationError> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NonNumeric),
    }
}
