// File: src/core/mod.rs
pub mod engine;
pub mod index;
pub mod sources;
pub mod suggester;
pub mod types;
