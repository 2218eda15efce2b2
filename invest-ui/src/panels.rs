//! What each calculator panel shows, independent of the widget toolkit.
//!
//! A panel has a title, a list of input fields, and a row of result cells.
//! The views module turns these descriptions into Cursive widgets.

use invest_core::calculations::common::format_amount;
use invest_core::{
    CalculatorSession, ExistingStoreField, InputField, NewStoreField, NewStoreSection,
};
use rust_decimal::Decimal;

/// The three panels of the calculator, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    SetupCost,
    BreakEven,
    ExistingStore,
}

impl PanelKind {
    pub const ALL: [Self; 3] = [Self::SetupCost, Self::BreakEven, Self::ExistingStore];

    pub fn key(&self) -> &'static str {
        match self {
            Self::SetupCost => "setup_cost",
            Self::BreakEven => "break_even",
            Self::ExistingStore => "existing_store",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SetupCost => "New store: setup cost",
            Self::BreakEven => "New store: break-even",
            Self::ExistingStore => "Existing store analysis",
        }
    }

    /// Input fields shown in this panel, in form order.
    pub fn fields(&self) -> Vec<InputField> {
        match self {
            Self::SetupCost => NewStoreField::in_section(NewStoreSection::SetupCost)
                .map(InputField::from)
                .collect(),
            Self::BreakEven => NewStoreField::in_section(NewStoreSection::BreakEven)
                .map(InputField::from)
                .collect(),
            Self::ExistingStore => ExistingStoreField::ALL
                .into_iter()
                .map(InputField::from)
                .collect(),
        }
    }

    /// Result cells for the current session state.
    pub fn results(
        &self,
        session: &CalculatorSession,
    ) -> Vec<ResultCell> {
        match self {
            Self::SetupCost => {
                let metrics = session.new_store_metrics();
                vec![ResultCell::accent(
                    "Total setup cost",
                    metrics.setup_cost,
                    Some("rent × terms + fees"),
                    *self,
                )]
            }
            Self::BreakEven => {
                let metrics = session.new_store_metrics();
                vec![
                    ResultCell::accent(
                        "Daily fixed cost",
                        metrics.daily_fixed_cost,
                        Some("(rent + labor + utilities) / 30"),
                        *self,
                    ),
                    ResultCell::accent(
                        "Daily break-even revenue",
                        metrics.daily_break_even_revenue,
                        Some("fixed cost ÷ margin"),
                        *self,
                    ),
                ]
            }
            Self::ExistingStore => {
                let metrics = session.existing_store_metrics();
                vec![
                    ResultCell::signed("Gross profit / day", metrics.gross_profit_per_day, None),
                    ResultCell::signed("Fixed cost / day", metrics.fixed_cost_per_day, None),
                    ResultCell::signed(
                        "Break-even revenue / day",
                        metrics.break_even_revenue_per_day,
                        Some("fixed cost ÷ margin"),
                    ),
                    ResultCell::signed(
                        "Net profit / day",
                        metrics.net_profit_per_day,
                        Some("gross profit - fixed cost"),
                    ),
                ]
            }
        }
    }
}

/// How a result value should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The owning panel's accent color, regardless of sign.
    Accent(PanelKind),
    Positive,
    Negative,
}

impl Tone {
    /// Positive for zero and above, negative below zero. Matches the minus
    /// sign `format_amount` prints.
    pub fn of_signed(value: Decimal) -> Self {
        if value < Decimal::ZERO {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// One labelled result value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCell {
    pub label: &'static str,
    pub value: Decimal,
    pub subtext: Option<&'static str>,
    pub tone: Tone,
}

impl ResultCell {
    fn accent(
        label: &'static str,
        value: Decimal,
        subtext: Option<&'static str>,
        panel: PanelKind,
    ) -> Self {
        Self {
            label,
            value,
            subtext,
            tone: Tone::Accent(panel),
        }
    }

    fn signed(
        label: &'static str,
        value: Decimal,
        subtext: Option<&'static str>,
    ) -> Self {
        Self {
            label,
            value,
            subtext,
            tone: Tone::of_signed(value),
        }
    }

    /// The value with exactly two decimals.
    pub fn display_value(&self) -> String {
        format_amount(self.value)
    }
}

/// Label for an input row: the field label, a required marker, and the
/// unit prefix in brackets when there is one.
pub fn field_caption(
    field: InputField,
    currency: &str,
) -> String {
    let marker = if field.is_required() { " *" } else { "" };
    match field.unit().prefix(currency) {
        "" => format!("{}{marker}", field.label()),
        prefix => format!("{}{marker} [{prefix}]", field.label()),
    }
}

/// Cursive view name for an input field; unique across both records.
pub fn field_view_name(field: InputField) -> String {
    let record = match field {
        InputField::NewStore(_) => "new_store",
        InputField::ExistingStore(_) => "existing_store",
    };
    format!("{record}.{}", field.key())
}
