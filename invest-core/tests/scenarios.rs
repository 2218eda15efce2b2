//! End-to-end scenarios driven through the public session API, the way a
//! form front-end would call it.

use invest_core::calculations::common::format_amount;
use invest_core::{CalculatorSession, ExistingStoreField, FieldUpdate, NewStoreField};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fill(
    session: &mut CalculatorSession,
    values: &[(NewStoreField, &str)],
) {
    for (field, raw) in values {
        assert_eq!(session.update_field(*field, raw), FieldUpdate::Accepted);
    }
}

#[test]
fn test_new_store_setup_cost() {
    let mut session = CalculatorSession::new();
    fill(
        &mut session,
        &[
            (NewStoreField::Rent, "10000"),
            (NewStoreField::PaymentTermsMonths, "2"),
            (NewStoreField::Deposit, "20000"),
            (NewStoreField::TransferFee, "0"),
            (NewStoreField::FranchiseFee, "0"),
            (NewStoreField::RenovationAndAds, "50000"),
            (NewStoreField::Equipment, "30000"),
            (NewStoreField::InitialMaterials, "5000"),
        ],
    );

    let metrics = session.new_store_metrics();

    assert_eq!(metrics.setup_cost, dec!(125000));
    assert_eq!(format_amount(metrics.setup_cost), "125000.00");
}

#[test]
fn test_new_store_daily_fixed_cost() {
    let mut session = CalculatorSession::new();
    fill(
        &mut session,
        &[
            (NewStoreField::Rent, "10000"),
            (NewStoreField::MonthlyLabor, "15000"),
            (NewStoreField::MonthlyUtilities, "3000"),
        ],
    );

    let metrics = session.new_store_metrics();

    assert_eq!(format_amount(metrics.daily_fixed_cost), "933.33");
}

#[test]
fn test_new_store_break_even_with_margin() {
    let mut session = CalculatorSession::new();
    fill(
        &mut session,
        &[
            (NewStoreField::Rent, "10000"),
            (NewStoreField::MonthlyLabor, "15000"),
            (NewStoreField::MonthlyUtilities, "3000"),
            (NewStoreField::GrossMarginPercent, "50"),
        ],
    );

    let metrics = session.new_store_metrics();

    assert_eq!(format_amount(metrics.daily_break_even_revenue), "1866.67");
}

#[test]
fn test_new_store_break_even_with_empty_margin() {
    let mut session = CalculatorSession::new();
    fill(
        &mut session,
        &[
            (NewStoreField::Rent, "10000"),
            (NewStoreField::MonthlyLabor, "15000"),
            (NewStoreField::GrossMarginPercent, ""),
        ],
    );

    let metrics = session.new_store_metrics();

    assert_eq!(metrics.daily_break_even_revenue, Decimal::ZERO);
    assert_eq!(format_amount(metrics.daily_break_even_revenue), "0.00");
}

#[test]
fn test_existing_store_loss() {
    let mut session = CalculatorSession::new();
    for (field, raw) in [
        (ExistingStoreField::DailyRevenue, "2000"),
        (ExistingStoreField::GrossMarginPercent, "40"),
        (ExistingStoreField::DailyRent, "300"),
        (ExistingStoreField::DailyLabor, "400"),
        (ExistingStoreField::DailyUtilities, "200"),
    ] {
        session.update_field(field, raw);
    }

    let metrics = session.existing_store_metrics();

    assert_eq!(format_amount(metrics.gross_profit_per_day), "800.00");
    assert_eq!(format_amount(metrics.fixed_cost_per_day), "900.00");
    assert_eq!(format_amount(metrics.net_profit_per_day), "-100.00");
    assert_eq!(format_amount(metrics.break_even_revenue_per_day), "2250.00");
}

#[test]
fn test_rejected_negative_keeps_prior_value() {
    let mut session = CalculatorSession::new();
    session.update_field(ExistingStoreField::DailyLabor, "500");

    let outcome = session.update_field(ExistingStoreField::DailyLabor, "-1");

    assert_eq!(outcome, FieldUpdate::Rejected);
    assert_eq!(session.value(ExistingStoreField::DailyLabor), "500");
}

#[test]
fn test_typing_a_number_keystroke_by_keystroke() {
    let mut session = CalculatorSession::new();

    for prefix in ["1", "12", "12.", "12.5"] {
        assert_eq!(
            session.update_field(NewStoreField::Rent, prefix),
            FieldUpdate::Accepted
        );
        assert_eq!(session.value(NewStoreField::Rent), prefix);
    }

    assert_eq!(session.new_store_metrics().daily_fixed_cost, dec!(12.5) / dec!(30));
}

#[test]
fn test_records_are_independent() {
    let mut session = CalculatorSession::new();
    session.update_field(NewStoreField::GrossMarginPercent, "60");
    session.update_field(ExistingStoreField::DailyRent, "300");

    assert_eq!(session.existing_store_metrics().break_even_revenue_per_day, Decimal::ZERO);
    assert_eq!(session.new_store_metrics().daily_fixed_cost, Decimal::ZERO);
}

#[test]
fn test_huge_rent_is_stored_and_saturates() {
    let mut session = CalculatorSession::new();
    session.update_field(NewStoreField::PaymentTermsMonths, "2");

    let outcome = session.update_field(NewStoreField::Rent, "99999999999999999999999999999999");

    assert_eq!(outcome, FieldUpdate::Accepted);
    assert_eq!(session.new_store_metrics().setup_cost, Decimal::MAX);
    assert_eq!(
        session.value(NewStoreField::Rent),
        "99999999999999999999999999999999"
    );
}

#[test]
fn test_tiny_loss_renders_with_minus_sign() {
    let mut session = CalculatorSession::new();
    session.update_field(ExistingStoreField::DailyRevenue, "0.01");
    session.update_field(ExistingStoreField::GrossMarginPercent, "40");
    session.update_field(ExistingStoreField::DailyRent, "0.008");

    let metrics = session.existing_store_metrics();

    assert_eq!(metrics.net_profit_per_day, dec!(-0.004));
    assert_eq!(format_amount(metrics.net_profit_per_day), "-0.00");
}
