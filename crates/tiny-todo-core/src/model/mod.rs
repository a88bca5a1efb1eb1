//! Data model types.

pub mod item;
