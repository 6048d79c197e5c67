// src/config/mod.rs
pub mod env;
