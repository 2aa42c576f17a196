// File: src/fuzzy/mod.rs
pub mod micro;
pub mod text;

pub use micro::{micro_fuzzy, FuzzyResult};
pub use text::{
    capitalize_first_letter, concrete_starts_with, lower_fuzzy, lower_fuzzy_starts_with,
    lower_includes, lower_starts_with, starts_with_upper, strip_diacritics,
};
