use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::is_acceptable_input;

/// What kind of quantity a field holds, used to pick its display prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUnit {
    /// A money amount, shown with the configured currency symbol.
    Currency,
    /// A percentage in the 0-100 range.
    Percent,
    /// A plain count (e.g. months of rent paid up front).
    Count,
}

impl FieldUnit {
    /// Prefix shown in front of the input, given the active currency symbol.
    pub fn prefix<'a>(
        &self,
        currency: &'a str,
    ) -> &'a str {
        match self {
            Self::Currency => currency,
            Self::Percent => "%",
            Self::Count => "",
        }
    }
}

/// Outcome of writing text into an input field.
///
/// Rejection is not an error: the field keeps its previous text and the
/// caller may restore whatever it displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Accepted,
    Rejected,
}

impl FieldUpdate {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Stores `raw` verbatim in `slot` when it is empty or a non-negative amount.
pub(crate) fn apply_update(
    key: &'static str,
    slot: &mut String,
    raw: &str,
) -> FieldUpdate {
    if !is_acceptable_input(raw) {
        return FieldUpdate::Rejected;
    }

    if slot.as_str() != raw {
        debug!(field = key, value = raw, "field updated");
        raw.clone_into(slot);
    }
    FieldUpdate::Accepted
}
