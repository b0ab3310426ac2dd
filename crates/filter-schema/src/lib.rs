pub mod descriptor;
pub mod operators;
pub mod property;
