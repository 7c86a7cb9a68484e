// src/lib.rs

pub mod config;
pub mod extractor;
pub mod window;
