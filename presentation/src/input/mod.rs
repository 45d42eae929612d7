//! Console input adapters

pub mod stdin;
