pub mod health;
pub mod root;
