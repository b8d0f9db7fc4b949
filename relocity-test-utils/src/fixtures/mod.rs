//! Test fixture modules for database records and dataset files.
//!
//! - `city` - City rows and their sub-records
//! - `dataset` - Reference files and statistical exports written into the test directory

pub mod city;
pub mod dataset;
