mod existing_store;
mod field;
mod metrics;
mod new_store;

pub use existing_store::{ExistingStoreField, ExistingStoreInputs};
pub use field::{FieldUnit, FieldUpdate};
pub use metrics::{ExistingStoreMetrics, NewStoreMetrics};
pub use new_store::{NewStoreField, NewStoreInputs, NewStoreSection};
