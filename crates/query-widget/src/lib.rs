pub mod actions;
pub mod error;
pub mod form;
pub mod picker;
