pub mod base;
pub mod binary;
pub mod catalog;
pub mod cli;
pub mod constants;
pub mod matrix;
pub mod release;
pub mod tags;

pub use anyhow::Result;
