//! Command implementations.

pub mod generate;

pub use self::generate::{execute_generate, generate_to_file};
