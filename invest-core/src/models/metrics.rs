use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived figures for opening a new store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStoreMetrics {
    /// One-time cash needed to open: prepaid rent plus every setup outlay.
    pub setup_cost: Decimal,

    /// Monthly rent, labor and utilities spread over 30 days.
    pub daily_fixed_cost: Decimal,

    /// Daily revenue at which gross profit covers the daily fixed cost.
    /// Zero when the expected margin is zero.
    pub daily_break_even_revenue: Decimal,
}

/// Derived figures for a store that is already trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingStoreMetrics {
    pub gross_profit_per_day: Decimal,
    pub fixed_cost_per_day: Decimal,

    /// Zero when the actual margin is zero.
    pub break_even_revenue_per_day: Decimal,

    /// Negative on a losing day; never clamped.
    pub net_profit_per_day: Decimal,
}
