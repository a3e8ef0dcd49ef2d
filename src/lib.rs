pub mod commands;
pub mod errors;
pub mod heap;
pub mod options;
