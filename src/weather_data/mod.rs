pub mod columns;
pub mod error;
pub mod parser;
pub mod query;
