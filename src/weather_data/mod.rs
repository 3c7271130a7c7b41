pub mod assembler;
pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod locator;
pub mod timestamp;
