//! Schema definitions for catalog files

pub mod event;
