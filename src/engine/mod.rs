pub mod settle;
pub mod validate;
