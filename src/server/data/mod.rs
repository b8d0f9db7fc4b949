//! Data access layer repositories.
//!
//! Repositories are generic over `ConnectionTrait` so the same code runs on a plain connection or
//! inside a `DatabaseTransaction`. [`city`] reads the city aggregate and seeds cities; [`sync`]
//! upserts reconciled rows into sub-record tables.

pub mod city;
pub mod sync;

#[cfg(test)]
mod tests;
