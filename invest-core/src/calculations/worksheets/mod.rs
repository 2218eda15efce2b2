//! Worksheets for the two calculator modes.
//!
//! Each worksheet turns a record of numeric inputs into its metrics record.
//! Both are total: every input produces defined figures.

pub mod existing_store;
pub mod new_store;

pub use existing_store::{ExistingStoreWorksheet, ExistingStoreWorksheetInput};
pub use new_store::{NewStoreWorksheet, NewStoreWorksheetInput};
