//! Existing-store worksheet: daily gross profit, fixed cost, break-even
//! revenue and net profit.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Fixed cost per day: rent + labor + utilities |
//! | 2    | Margin ratio: gross margin % ÷ 100 |
//! | 3    | Gross profit per day: revenue × Line 2 |
//! | 4    | Net profit per day: Line 3 - Line 1 (may be negative) |
//! | 5    | Break-even revenue per day: Line 1 ÷ Line 2 (0 if Line 2 ≤ 0) |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{break_even_revenue, margin_ratio, numeric};
use crate::{ExistingStoreField, ExistingStoreInputs, ExistingStoreMetrics};

/// Numeric values for the existing-store worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingStoreWorksheetInput {
    pub daily_revenue: Decimal,
    pub daily_rent: Decimal,
    pub daily_labor: Decimal,
    pub daily_utilities: Decimal,
    pub gross_margin_percent: Decimal,
}

impl From<&ExistingStoreInputs> for ExistingStoreWorksheetInput {
    fn from(inputs: &ExistingStoreInputs) -> Self {
        let get = |field| numeric(inputs.value(field));

        Self {
            daily_revenue: get(ExistingStoreField::DailyRevenue),
            daily_rent: get(ExistingStoreField::DailyRent),
            daily_labor: get(ExistingStoreField::DailyLabor),
            daily_utilities: get(ExistingStoreField::DailyUtilities),
            gross_margin_percent: get(ExistingStoreField::GrossMarginPercent),
        }
    }
}

/// Calculator for the existing-store worksheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingStoreWorksheet;

impl ExistingStoreWorksheet {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        input: &ExistingStoreWorksheetInput,
    ) -> ExistingStoreMetrics {
        let fixed_cost_per_day =
            self.fixed_cost(input.daily_rent, input.daily_labor, input.daily_utilities);
        let ratio = margin_ratio(input.gross_margin_percent);
        let gross_profit_per_day = self.gross_profit(input.daily_revenue, ratio);
        let net_profit_per_day = self.net_profit(gross_profit_per_day, fixed_cost_per_day);
        let break_even_revenue_per_day = break_even_revenue(fixed_cost_per_day, ratio);

        ExistingStoreMetrics {
            gross_profit_per_day,
            fixed_cost_per_day,
            break_even_revenue_per_day,
            net_profit_per_day,
        }
    }

    fn fixed_cost(
        &self,
        rent: Decimal,
        labor: Decimal,
        utilities: Decimal,
    ) -> Decimal {
        rent.saturating_add(labor).saturating_add(utilities)
    }

    fn gross_profit(
        &self,
        revenue: Decimal,
        margin_ratio: Decimal,
    ) -> Decimal {
        revenue.saturating_mul(margin_ratio)
    }

    fn net_profit(
        &self,
        gross_profit: Decimal,
        fixed_cost: Decimal,
    ) -> Decimal {
        gross_profit.saturating_sub(fixed_cost)
    }
}
