// src/api/mod.rs
pub mod login;
pub mod models;
