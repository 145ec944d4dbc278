//! Command handlers

pub mod orchestrate;
