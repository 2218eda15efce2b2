//! Per-session input state and on-demand metrics.
//!
//! A [`CalculatorSession`] owns one record of each kind. It is the only
//! write path into them, and every metrics read recomputes from the current
//! text, so results can never be stale.

use serde::{Deserialize, Serialize};

use crate::calculations::{
    ExistingStoreWorksheet, ExistingStoreWorksheetInput, NewStoreWorksheet,
    NewStoreWorksheetInput,
};
use crate::{
    ExistingStoreField, ExistingStoreInputs, ExistingStoreMetrics, FieldUnit, FieldUpdate,
    NewStoreField, NewStoreInputs, NewStoreMetrics,
};

/// A field in either record, tagged with the record it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    NewStore(NewStoreField),
    ExistingStore(ExistingStoreField),
}

impl InputField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::NewStore(field) => field.key(),
            Self::ExistingStore(field) => field.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewStore(field) => field.label(),
            Self::ExistingStore(field) => field.label(),
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            Self::NewStore(field) => field.unit(),
            Self::ExistingStore(field) => field.unit(),
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            Self::NewStore(field) => field.is_required(),
            Self::ExistingStore(field) => field.is_required(),
        }
    }
}

impl From<NewStoreField> for InputField {
    fn from(field: NewStoreField) -> Self {
        Self::NewStore(field)
    }
}

impl From<ExistingStoreField> for InputField {
    fn from(field: ExistingStoreField) -> Self {
        Self::ExistingStore(field)
    }
}

/// Input state for one calculator session.
///
/// # Example
///
/// ```
/// use invest_core::{CalculatorSession, ExistingStoreField, FieldUpdate};
/// use rust_decimal_macros::dec;
///
/// let mut session = CalculatorSession::new();
/// session.update_field(ExistingStoreField::DailyRevenue, "2000");
/// session.update_field(ExistingStoreField::GrossMarginPercent, "40");
///
/// let outcome = session.update_field(ExistingStoreField::DailyRent, "-300");
/// assert_eq!(outcome, FieldUpdate::Rejected);
///
/// let metrics = session.existing_store_metrics();
/// assert_eq!(metrics.gross_profit_per_day, dec!(800));
/// assert_eq!(metrics.net_profit_per_day, dec!(800));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorSession {
    new_store: NewStoreInputs,
    existing_store: ExistingStoreInputs,
}

impl CalculatorSession {
    /// Starts a session with both records empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_store(&self) -> &NewStoreInputs {
        &self.new_store
    }

    pub fn existing_store(&self) -> &ExistingStoreInputs {
        &self.existing_store
    }

    /// Current text of any field.
    pub fn value(
        &self,
        field: impl Into<InputField>,
    ) -> &str {
        match field.into() {
            InputField::NewStore(field) => self.new_store.value(field),
            InputField::ExistingStore(field) => self.existing_store.value(field),
        }
    }

    /// Writes `raw` into `field` when it is empty or a non-negative amount.
    ///
    /// Anything else leaves the field as it was and reports
    /// [`FieldUpdate::Rejected`].
    pub fn update_field(
        &mut self,
        field: impl Into<InputField>,
        raw: &str,
    ) -> FieldUpdate {
        match field.into() {
            InputField::NewStore(field) => self.new_store.update(field, raw),
            InputField::ExistingStore(field) => self.existing_store.update(field, raw),
        }
    }

    pub fn new_store_metrics(&self) -> NewStoreMetrics {
        NewStoreWorksheet::new().calculate(&NewStoreWorksheetInput::from(&self.new_store))
    }

    pub fn existing_store_metrics(&self) -> ExistingStoreMetrics {
        ExistingStoreWorksheet::new()
            .calculate(&ExistingStoreWorksheetInput::from(&self.existing_store))
    }

    /// Empties both records.
    pub fn clear(&mut self) {
        self.new_store = NewStoreInputs::new();
        self.existing_store = ExistingStoreInputs::new();
    }
}
