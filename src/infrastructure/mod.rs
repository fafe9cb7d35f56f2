pub mod parsers;
pub mod storage;
pub mod xml;
