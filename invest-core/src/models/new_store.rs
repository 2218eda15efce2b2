use serde::{Deserialize, Serialize};

use super::field::{FieldUnit, FieldUpdate, apply_update};

/// Form section a new-store field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewStoreSection {
    /// One-time outlays that make up the setup cost.
    SetupCost,
    /// Recurring monthly costs and the expected margin.
    BreakEven,
}

/// Input fields of the new-store calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewStoreField {
    Rent,
    PaymentTermsMonths,
    Deposit,
    TransferFee,
    FranchiseFee,
    RenovationAndAds,
    Equipment,
    InitialMaterials,
    MonthlyLabor,
    MonthlyUtilities,
    GrossMarginPercent,
}

impl NewStoreField {
    /// Every field, in form order.
    pub const ALL: [Self; 11] = [
        Self::Rent,
        Self::PaymentTermsMonths,
        Self::Deposit,
        Self::TransferFee,
        Self::FranchiseFee,
        Self::RenovationAndAds,
        Self::Equipment,
        Self::InitialMaterials,
        Self::MonthlyLabor,
        Self::MonthlyUtilities,
        Self::GrossMarginPercent,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::PaymentTermsMonths => "payment_terms_months",
            Self::Deposit => "deposit",
            Self::TransferFee => "transfer_fee",
            Self::FranchiseFee => "franchise_fee",
            Self::RenovationAndAds => "renovation_and_ads",
            Self::Equipment => "equipment",
            Self::InitialMaterials => "initial_materials",
            Self::MonthlyLabor => "monthly_labor",
            Self::MonthlyUtilities => "monthly_utilities",
            Self::GrossMarginPercent => "gross_margin_percent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rent => "Rent (per month)",
            Self::PaymentTermsMonths => "Rent paid up front (months)",
            Self::Deposit => "Deposit",
            Self::TransferFee => "Transfer / agency fee",
            Self::FranchiseFee => "Franchise / training fee",
            Self::RenovationAndAds => "Renovation + advertising",
            Self::Equipment => "Equipment",
            Self::InitialMaterials => "Initial materials",
            Self::MonthlyLabor => "Labor (per month)",
            Self::MonthlyUtilities => "Utilities (per month)",
            Self::GrossMarginPercent => "Expected gross margin",
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            Self::PaymentTermsMonths => FieldUnit::Count,
            Self::GrossMarginPercent => FieldUnit::Percent,
            _ => FieldUnit::Currency,
        }
    }

    /// Presentation hint only; the store never enforces it.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Rent
                | Self::PaymentTermsMonths
                | Self::MonthlyLabor
                | Self::MonthlyUtilities
                | Self::GrossMarginPercent
        )
    }

    pub fn section(&self) -> NewStoreSection {
        match self {
            Self::MonthlyLabor | Self::MonthlyUtilities | Self::GrossMarginPercent => {
                NewStoreSection::BreakEven
            }
            _ => NewStoreSection::SetupCost,
        }
    }

    /// Fields of one section, in form order.
    pub fn in_section(section: NewStoreSection) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |f| f.section() == section)
    }
}

/// Raw text of every new-store field.
///
/// Fields start empty and change only through [`NewStoreInputs::update`],
/// so every non-empty value parses to an amount of at least zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewStoreInputs {
    rent: String,
    payment_terms_months: String,
    deposit: String,
    transfer_fee: String,
    franchise_fee: String,
    renovation_and_ads: String,
    equipment: String,
    initial_materials: String,
    monthly_labor: String,
    monthly_utilities: String,
    gross_margin_percent: String,
}

impl NewStoreInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `field`, exactly as the user typed it.
    pub fn value(
        &self,
        field: NewStoreField,
    ) -> &str {
        match field {
            NewStoreField::Rent => &self.rent,
            NewStoreField::PaymentTermsMonths => &self.payment_terms_months,
            NewStoreField::Deposit => &self.deposit,
            NewStoreField::TransferFee => &self.transfer_fee,
            NewStoreField::FranchiseFee => &self.franchise_fee,
            NewStoreField::RenovationAndAds => &self.renovation_and_ads,
            NewStoreField::Equipment => &self.equipment,
            NewStoreField::InitialMaterials => &self.initial_materials,
            NewStoreField::MonthlyLabor => &self.monthly_labor,
            NewStoreField::MonthlyUtilities => &self.monthly_utilities,
            NewStoreField::GrossMarginPercent => &self.gross_margin_percent,
        }
    }

    /// Writes `raw` into `field` if it is empty or a non-negative amount.
    pub fn update(
        &mut self,
        field: NewStoreField,
        raw: &str,
    ) -> FieldUpdate {
        apply_update(field.key(), self.slot_mut(field), raw)
    }

    /// Returns `true` when no field holds any text.
    pub fn is_empty(&self) -> bool {
        NewStoreField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    fn slot_mut(
        &mut self,
        field: NewStoreField,
    ) -> &mut String {
        match field {
            NewStoreField::Rent => &mut self.rent,
            NewStoreField::PaymentTermsMonths => &mut self.payment_terms_months,
            NewStoreField::Deposit => &mut self.deposit,
            NewStoreField::TransferFee => &mut self.transfer_fee,
            NewStoreField::FranchiseFee => &mut self.franchise_fee,
            NewStoreField::RenovationAndAds => &mut self.renovation_and_ads,
            NewStoreField::Equipment => &mut self.equipment,
            NewStoreField::InitialMaterials => &mut self.initial_materials,
            NewStoreField::MonthlyLabor => &mut self.monthly_labor,
            NewStoreField::MonthlyUtilities => &mut self.monthly_utilities,
            NewStoreField::GrossMarginPercent => &mut self.gross_margin_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_inputs_are_empty() {
        let inputs = NewStoreInputs::new();

        assert!(inputs.is_empty());
        for field in NewStoreField::ALL {
            assert_eq!(inputs.value(field), "");
        }
    }

    #[test]
    fn update_writes_only_the_named_field() {
        let mut inputs = NewStoreInputs::new();

        inputs.update(NewStoreField::Equipment, "30000");

        assert_eq!(inputs.value(NewStoreField::Equipment), "30000");
        for field in NewStoreField::ALL
            .into_iter()
            .filter(|f| *f != NewStoreField::Equipment)
        {
            assert_eq!(inputs.value(field), "");
        }
    }

    #[test]
    fn update_rejects_negative_rent() {
        let mut inputs = NewStoreInputs::new();
        inputs.update(NewStoreField::Rent, "500");

        let outcome = inputs.update(NewStoreField::Rent, "-1");

        assert_eq!(outcome, FieldUpdate::Rejected);
        assert_eq!(inputs.value(NewStoreField::Rent), "500");
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = NewStoreField::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), NewStoreField::ALL.len());
    }

    #[test]
    fn sections_split_setup_from_break_even() {
        let setup: Vec<_> = NewStoreField::in_section(NewStoreSection::SetupCost).collect();
        let break_even: Vec<_> = NewStoreField::in_section(NewStoreSection::BreakEven).collect();

        assert_eq!(setup.len(), 8);
        assert_eq!(
            break_even,
            vec![
                NewStoreField::MonthlyLabor,
                NewStoreField::MonthlyUtilities,
                NewStoreField::GrossMarginPercent,
            ]
        );
    }

    #[test]
    fn margin_and_terms_have_their_own_units() {
        assert_eq!(NewStoreField::Rent.unit(), FieldUnit::Currency);
        assert_eq!(NewStoreField::PaymentTermsMonths.unit(), FieldUnit::Count);
        assert_eq!(NewStoreField::GrossMarginPercent.unit(), FieldUnit::Percent);
    }

    #[test]
    fn one_off_fees_are_optional() {
        assert!(NewStoreField::Rent.is_required());
        assert!(!NewStoreField::Deposit.is_required());
        assert!(!NewStoreField::InitialMaterials.is_required());
    }
}
