//! Command implementations for the ESPN Fantasy summary

pub mod report;
pub mod summary;
