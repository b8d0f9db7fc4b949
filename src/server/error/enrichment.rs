use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Field `{field}` of city {eurostat_code} holds a non-finite value: {value}")]
    NonFiniteValue {
        eurostat_code: String,
        field: &'static str,
        value: f64,
    },
    #[error("Field `{field}` of city {eurostat_code} does not fit a whole currency amount: {value}")]
    OutOfRange {
        eurostat_code: String,
        field: &'static str,
        value: f64,
    },
}
