//! Error types for the relocity server and batch jobs.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`], which converts into
//! an Axum response for the read API. Validation failures (malformed geographic codes) are not
//! errors at all: they surface as `None` to the immediate caller.

pub mod config;
pub mod dataset;
pub mod enrichment;
pub mod name_mapping;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, dataset::DatasetError, enrichment::EnrichmentError,
        name_mapping::NameMappingError,
    },
};

/// Main error type for the relocity server and job runner.
///
/// `#[from]` conversions let repositories, loaders and services use `?` freely. Persistence
/// errors raised inside a batch transaction surface here after the transaction has been rolled
/// back.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Reference or statistical dataset could not be read.
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
    /// Derived fields could not be computed for a city.
    #[error(transparent)]
    EnrichmentError(#[from] EnrichmentError),
    /// City name alias mapping could not be read or written.
    #[error(transparent)]
    NameMappingError(#[from] NameMappingError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error outside dataset loading (binding the HTTP listener, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
