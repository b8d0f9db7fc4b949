//! Utility functions and helpers for server operations.
//!
//! This module provides geographic code validation with its fallback chain, and city name
//! cleaning backed by the persisted alias mapping. Both are used by the refresh jobs and the
//! read API.

pub mod city_name;
pub mod geo_code;
