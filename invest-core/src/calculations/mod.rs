//! Derived metrics for the investment calculator.
//!
//! This module provides the calculation logic behind the calculator's
//! result panels, organized by worksheet.

pub mod common;
pub mod worksheets;

pub use worksheets::{
    ExistingStoreWorksheet, ExistingStoreWorksheetInput, NewStoreWorksheet,
    NewStoreWorksheetInput,
};
