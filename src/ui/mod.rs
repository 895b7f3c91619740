//! State layer consumed by presentation code.

pub mod catalog;
pub mod mvi;
