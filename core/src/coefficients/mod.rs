pub mod source;
pub mod table;

pub use source::EnergySource;
pub use table::{CoefficientTable, EnergySourceProfile};
