pub mod executor;
pub mod parsers;
