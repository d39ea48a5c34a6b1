//! Readers and writers used by the command line driver.

pub mod csv;
pub mod json;
