pub mod favorites;
pub mod yards;
