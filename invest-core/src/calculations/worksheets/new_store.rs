//! New-store worksheet: setup cost, daily fixed cost and break-even revenue.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Prepaid rent: monthly rent × months paid up front |
//! | 2    | Setup cost: Line 1 + deposit + transfer fee + franchise fee + renovation/ads + equipment + initial materials |
//! | 3    | Monthly fixed cost: rent + labor + utilities |
//! | 4    | Daily fixed cost: Line 3 ÷ 30 |
//! | 5    | Margin ratio: gross margin % ÷ 100 |
//! | 6    | Daily break-even revenue: Line 4 ÷ Line 5 (0 if Line 5 ≤ 0) |
//!
//! Monthly rent appears twice on purpose. Line 1 is the cash handed over
//! before opening; Line 3 is the ongoing cost the store must earn back.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use invest_core::calculations::{NewStoreWorksheet, NewStoreWorksheetInput};
//!
//! let input = NewStoreWorksheetInput {
//!     rent: dec!(10000),
//!     payment_terms_months: dec!(2),
//!     deposit: dec!(20000),
//!     transfer_fee: dec!(0),
//!     franchise_fee: dec!(0),
//!     renovation_and_ads: dec!(50000),
//!     equipment: dec!(30000),
//!     initial_materials: dec!(5000),
//!     monthly_labor: dec!(15000),
//!     monthly_utilities: dec!(3000),
//!     gross_margin_percent: dec!(50),
//! };
//!
//! let metrics = NewStoreWorksheet::new().calculate(&input);
//!
//! assert_eq!(metrics.setup_cost, dec!(125000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{
    DAYS_PER_MONTH, break_even_revenue, margin_ratio, numeric, saturating_div,
};
use crate::{NewStoreField, NewStoreInputs, NewStoreMetrics};

/// Numeric values for the new-store worksheet.
///
/// Built from [`NewStoreInputs`] with empty or unparseable text read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStoreWorksheetInput {
    pub rent: Decimal,
    pub payment_terms_months: Decimal,
    pub deposit: Decimal,
    pub transfer_fee: Decimal,
    pub franchise_fee: Decimal,
    pub renovation_and_ads: Decimal,
    pub equipment: Decimal,
    pub initial_materials: Decimal,
    pub monthly_labor: Decimal,
    pub monthly_utilities: Decimal,
    pub gross_margin_percent: Decimal,
}

impl From<&NewStoreInputs> for NewStoreWorksheetInput {
    fn from(inputs: &NewStoreInputs) -> Self {
        let get = |field| numeric(inputs.value(field));

        Self {
            rent: get(NewStoreField::Rent),
            payment_terms_months: get(NewStoreField::PaymentTermsMonths),
            deposit: get(NewStoreField::Deposit),
            transfer_fee: get(NewStoreField::TransferFee),
            franchise_fee: get(NewStoreField::FranchiseFee),
            renovation_and_ads: get(NewStoreField::RenovationAndAds),
            equipment: get(NewStoreField::Equipment),
            initial_materials: get(NewStoreField::InitialMaterials),
            monthly_labor: get(NewStoreField::MonthlyLabor),
            monthly_utilities: get(NewStoreField::MonthlyUtilities),
            gross_margin_percent: get(NewStoreField::GrossMarginPercent),
        }
    }
}

/// Calculator for the new-store worksheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewStoreWorksheet;

impl NewStoreWorksheet {
    pub fn new() -> Self {
        Self
    }

    /// Calculates every new-store metric. Total for any input.
    pub fn calculate(
        &self,
        input: &NewStoreWorksheetInput,
    ) -> NewStoreMetrics {
        let prepaid_rent = self.prepaid_rent(input.rent, input.payment_terms_months);
        let setup_cost = self.setup_cost(prepaid_rent, input);

        let monthly_fixed_cost =
            self.monthly_fixed_cost(input.rent, input.monthly_labor, input.monthly_utilities);
        let daily_fixed_cost = self.daily_fixed_cost(monthly_fixed_cost);

        let ratio = margin_ratio(input.gross_margin_percent);
        let daily_break_even_revenue = break_even_revenue(daily_fixed_cost, ratio);

        NewStoreMetrics {
            setup_cost,
            daily_fixed_cost,
            daily_break_even_revenue,
        }
    }

    /// Line 1.
    fn prepaid_rent(
        &self,
        rent: Decimal,
        payment_terms_months: Decimal,
    ) -> Decimal {
        rent.saturating_mul(payment_terms_months)
    }

    /// Line 2.
    fn setup_cost(
        &self,
        prepaid_rent: Decimal,
        input: &NewStoreWorksheetInput,
    ) -> Decimal {
        [
            input.deposit,
            input.transfer_fee,
            input.franchise_fee,
            input.renovation_and_ads,
            input.equipment,
            input.initial_materials,
        ]
        .into_iter()
        .fold(prepaid_rent, Decimal::saturating_add)
    }

    /// Line 3.
    fn monthly_fixed_cost(
        &self,
        rent: Decimal,
        labor: Decimal,
        utilities: Decimal,
    ) -> Decimal {
        rent.saturating_add(labor).saturating_add(utilities)
    }

    /// Line 4.
    fn daily_fixed_cost(
        &self,
        monthly_fixed_cost: Decimal,
    ) -> Decimal {
        saturating_div(monthly_fixed_cost, DAYS_PER_MONTH)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn test_input() -> NewStoreWorksheetInput {
        NewStoreWorksheetInput {
            rent: dec!(10000),
            payment_terms_months: dec!(2),
            deposit: dec!(20000),
            transfer_fee: dec!(0),
            franchise_fee: dec!(0),
            renovation_and_ads: dec!(50000),
            equipment: dec!(30000),
            initial_materials: dec!(5000),
            monthly_labor: dec!(15000),
            monthly_utilities: dec!(3000),
            gross_margin_percent: dec!(50),
        }
    }

    // =========================================================================
    // line tests
    // =========================================================================

    #[test]
    fn prepaid_rent_multiplies_rent_by_terms() {
        let worksheet = NewStoreWorksheet::new();

        assert_eq!(worksheet.prepaid_rent(dec!(10000), dec!(3)), dec!(30000));
    }

    #[test]
    fn prepaid_rent_is_zero_without_terms() {
        let worksheet = NewStoreWorksheet::new();

        assert_eq!(worksheet.prepaid_rent(dec!(10000), dec!(0)), dec!(0));
    }

    #[test]
    fn setup_cost_adds_prepaid_rent_and_outlays() {
        let worksheet = NewStoreWorksheet::new();

        let result = worksheet.setup_cost(dec!(20000), &test_input());

        assert_eq!(result, dec!(125000));
    }

    #[test]
    fn monthly_fixed_cost_adds_recurring_costs() {
        let worksheet = NewStoreWorksheet::new();

        let result = worksheet.monthly_fixed_cost(dec!(10000), dec!(15000), dec!(3000));

        assert_eq!(result, dec!(28000));
    }

    #[test]
    fn daily_fixed_cost_spreads_over_thirty_days() {
        let worksheet = NewStoreWorksheet::new();

        let result = worksheet.daily_fixed_cost(dec!(28000));

        assert_eq!(round_half_up(result), dec!(933.33));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_full_worksheet() {
        let metrics = NewStoreWorksheet::new().calculate(&test_input());

        assert_eq!(metrics.setup_cost, dec!(125000));
        assert_eq!(round_half_up(metrics.daily_fixed_cost), dec!(933.33));
        assert_eq!(
            round_half_up(metrics.daily_break_even_revenue),
            dec!(1866.67)
        );
    }

    #[test]
    fn calculate_zero_margin_has_zero_break_even() {
        let input = NewStoreWorksheetInput {
            gross_margin_percent: dec!(0),
            ..test_input()
        };

        let metrics = NewStoreWorksheet::new().calculate(&input);

        assert_eq!(metrics.daily_break_even_revenue, Decimal::ZERO);
        assert!(metrics.daily_fixed_cost > Decimal::ZERO);
    }

    #[test]
    fn calculate_empty_input_is_all_zero() {
        let metrics = NewStoreWorksheet::new().calculate(&NewStoreWorksheetInput::default());

        assert_eq!(metrics.setup_cost, Decimal::ZERO);
        assert_eq!(metrics.daily_fixed_cost, Decimal::ZERO);
        assert_eq!(metrics.daily_break_even_revenue, Decimal::ZERO);
    }

    #[test]
    fn calculate_saturates_instead_of_overflowing() {
        let input = NewStoreWorksheetInput {
            rent: Decimal::MAX,
            payment_terms_months: dec!(12),
            deposit: Decimal::MAX,
            ..NewStoreWorksheetInput::default()
        };

        let metrics = NewStoreWorksheet::new().calculate(&input);

        assert_eq!(metrics.setup_cost, Decimal::MAX);
    }

    // =========================================================================
    // conversion tests
    // =========================================================================

    #[test]
    fn input_from_text_reads_empty_as_zero() {
        let mut inputs = NewStoreInputs::new();
        inputs.update(NewStoreField::Rent, "10000");
        inputs.update(NewStoreField::GrossMarginPercent, "45.");

        let input = NewStoreWorksheetInput::from(&inputs);

        assert_eq!(input.rent, dec!(10000));
        assert_eq!(input.gross_margin_percent, dec!(45));
        assert_eq!(input.deposit, Decimal::ZERO);
    }
}
