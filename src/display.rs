//! Display port for calculation results.
//!
//! The calculator never talks to a widget toolkit directly. It writes named
//! fields through [`DisplayPort`]. [`DisplayFields`] is the in-memory
//! implementation behind both the GUI's results panel and the tests.

/// Text shown in every result field before a successful calculation.
pub const PLACEHOLDER: &str = "--";

/// Named field setters for everything a submission can change on screen.
pub trait DisplayPort {
    fn set_current_percent(&mut self, text: &str);
    fn set_max_missable(&mut self, text: &str);
    /// Sets the risk label and its style tag. `None` clears the tag.
    fn set_risk_status(&mut self, label: &str, tag: Option<&str>);
    fn set_breakdown_attendance(&mut self, text: &str);
    fn set_breakdown_required(&mut self, text: &str);
    fn set_breakdown_margin(&mut self, text: &str);
    fn set_breakdown_visible(&mut self, visible: bool);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
}

/// Plain in-memory copy of every display field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub current_percent: String,
    pub max_missable: String,
    pub risk_label: String,
    pub risk_tag: Option<String>,
    pub breakdown_attendance: String,
    pub breakdown_required: String,
    pub breakdown_margin: String,
    pub breakdown_visible: bool,
    pub error_message: Option<String>,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayFields {
    /// Creates fields in their initial placeholder state.
    pub fn new() -> Self {
        Self {
            current_percent: PLACEHOLDER.to_string(),
            max_missable: PLACEHOLDER.to_string(),
            risk_label: PLACEHOLDER.to_string(),
            risk_tag: None,
            breakdown_attendance: String::new(),
            breakdown_required: String::new(),
            breakdown_margin: String::new(),
            breakdown_visible: false,
            error_message: None,
        }
    }

    /// Returns true when every headline field shows the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.current_percent == PLACEHOLDER
            && self.max_missable == PLACEHOLDER
            && self.risk_label == PLACEHOLDER
            && self.risk_tag.is_none()
    }
}

impl DisplayPort for DisplayFields {
    fn set_current_percent(&mut self, text: &str) {
        self.current_percent = text.to_string();
    }

    fn set_max_missable(&mut self, text: &str) {
        self.max_missable = text.to_string();
    }

    fn set_risk_status(&mut self, label: &str, tag: Option<&str>) {
        self.risk_label = label.to_string();
        self.risk_tag = tag.map(str::to_string);
    }

    fn set_breakdown_attendance(&mut self, text: &str) {
        self.breakdown_attendance = text.to_string();
    }

    fn set_breakdown_required(&mut self, text: &str) {
        self.breakdown_required = text.to_string();
    }

    fn set_breakdown_margin(&mut self, text: &str) {
        self.breakdown_margin = text.to_string();
    }

    fn set_breakdown_visible(&mut self, visible: bool) {
        self.breakdown_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error_message = None;
    }
}
