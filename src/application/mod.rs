pub mod builder;
pub mod errors;
pub mod parser_registry;
pub mod ports;
