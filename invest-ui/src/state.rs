//! Application state for the calculator UI.
//!
//! Stored in Cursive's user data so every callback sees the same session.

use invest_core::CalculatorSession;

/// Application-wide state: the input session plus display preferences.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Both input records for this run of the program.
    pub session: CalculatorSession,

    /// Symbol shown in front of money fields.
    pub currency: String,
}

impl AppState {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            session: CalculatorSession::new(),
            currency: currency.into(),
        }
    }

    /// Clear all inputs for starting fresh.
    pub fn clear(&mut self) {
        self.session.clear();
    }
}
