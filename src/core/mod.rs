// src/core/mod.rs
pub mod batch;
pub mod report;
