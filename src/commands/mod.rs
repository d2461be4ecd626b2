pub mod directive;
pub mod env;
pub mod now;
