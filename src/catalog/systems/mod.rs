// src/catalog/systems/mod.rs
pub mod io;
pub mod logic;
