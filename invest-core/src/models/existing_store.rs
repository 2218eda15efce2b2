use serde::{Deserialize, Serialize};

use super::field::{FieldUnit, FieldUpdate, apply_update};

/// Input fields of the existing-store analysis. All figures are per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingStoreField {
    DailyRevenue,
    DailyRent,
    DailyLabor,
    DailyUtilities,
    GrossMarginPercent,
}

impl ExistingStoreField {
    pub const ALL: [Self; 5] = [
        Self::DailyRevenue,
        Self::DailyRent,
        Self::DailyLabor,
        Self::DailyUtilities,
        Self::GrossMarginPercent,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::DailyRevenue => "daily_revenue",
            Self::DailyRent => "daily_rent",
            Self::DailyLabor => "daily_labor",
            Self::DailyUtilities => "daily_utilities",
            Self::GrossMarginPercent => "gross_margin_percent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyRevenue => "Revenue / day",
            Self::DailyRent => "Rent / day",
            Self::DailyLabor => "Labor / day",
            Self::DailyUtilities => "Utilities / day",
            Self::GrossMarginPercent => "Actual gross margin",
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            Self::GrossMarginPercent => FieldUnit::Percent,
            _ => FieldUnit::Currency,
        }
    }

    pub fn is_required(&self) -> bool {
        true
    }
}

/// Raw text of every existing-store field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExistingStoreInputs {
    daily_revenue: String,
    daily_rent: String,
    daily_labor: String,
    daily_utilities: String,
    gross_margin_percent: String,
}

impl ExistingStoreInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(
        &self,
        field: ExistingStoreField,
    ) -> &str {
        match field {
            ExistingStoreField::DailyRevenue => &self.daily_revenue,
            ExistingStoreField::DailyRent => &self.daily_rent,
            ExistingStoreField::DailyLabor => &self.daily_labor,
            ExistingStoreField::DailyUtilities => &self.daily_utilities,
            ExistingStoreField::GrossMarginPercent => &self.gross_margin_percent,
        }
    }

    /// Writes `raw` into `field` if it is empty or a non-negative amount.
    pub fn update(
        &mut self,
        field: ExistingStoreField,
        raw: &str,
    ) -> FieldUpdate {
        let slot = match field {
            ExistingStoreField::DailyRevenue => &mut self.daily_revenue,
            ExistingStoreField::DailyRent => &mut self.daily_rent,
            ExistingStoreField::DailyLabor => &mut self.daily_labor,
            ExistingStoreField::DailyUtilities => &mut self.daily_utilities,
            ExistingStoreField::GrossMarginPercent => &mut self.gross_margin_percent,
        };
        apply_update(field.key(), slot, raw)
    }

    pub fn is_empty(&self) -> bool {
        ExistingStoreField::ALL
            .iter()
            .all(|f| self.value(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_keeps_in_progress_text() {
        let mut inputs = ExistingStoreInputs::new();

        let outcome = inputs.update(ExistingStoreField::DailyRevenue, "2000.");

        assert_eq!(outcome, FieldUpdate::Accepted);
        assert_eq!(inputs.value(ExistingStoreField::DailyRevenue), "2000.");
    }

    #[test]
    fn update_rejects_negative_margin() {
        let mut inputs = ExistingStoreInputs::new();
        inputs.update(ExistingStoreField::GrossMarginPercent, "40");

        let outcome = inputs.update(ExistingStoreField::GrossMarginPercent, "-40");

        assert_eq!(outcome, FieldUpdate::Rejected);
        assert_eq!(inputs.value(ExistingStoreField::GrossMarginPercent), "40");
    }

    #[test]
    fn clearing_a_field_makes_it_empty() {
        let mut inputs = ExistingStoreInputs::new();
        inputs.update(ExistingStoreField::DailyRent, "300");

        inputs.update(ExistingStoreField::DailyRent, "");

        assert!(inputs.is_empty());
    }

    #[test]
    fn only_margin_is_a_percentage() {
        let percent: Vec<_> = ExistingStoreField::ALL
            .into_iter()
            .filter(|f| f.unit() == FieldUnit::Percent)
            .collect();

        assert_eq!(percent, vec![ExistingStoreField::GrossMarginPercent]);
    }
}
