//! Deterministic text-analysis pipeline

pub mod advice;
pub mod catalog;
pub mod engine;
pub mod extractor;
pub mod matcher;
pub mod scoring;
