//! Resale valuation over a dataset of past used-car sales.
//!
//! The crate splits into the record set's derived chart views
//! ([`domain::aggregation`]) and a three-heuristic price estimator
//! ([`domain::estimation`]), with CSV ingestion in [`infra::dataset`].
//! Both core operations are pure functions over an immutable record set;
//! session state lives in [`domain::AppState`], owned by the caller.

pub mod domain;
pub mod infra;
pub mod util;

pub use domain::{
    aggregate, predict, AggregateView, AppState, FuelType, PredictionResult, QueryProfile,
    SaleRecord, SellerType, Transmission, DEFAULT_REFERENCE_YEAR,
};
pub use infra::{load_records, DatasetError};
