pub mod calculator;
pub mod status_bar;

pub use calculator::show_calculator;
