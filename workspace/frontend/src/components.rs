pub mod common;
pub mod data_grid;
pub mod date_range;
pub mod layout;
