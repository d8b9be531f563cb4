//! Domain logic for resale valuation lives here.

pub mod aggregation;
pub mod app_state;
pub mod entities;
pub mod estimation;

pub use aggregation::{
    aggregate, AgeBucket, AggregateView, CategorySlice, ScatterPoint, MIN_AGE_BUCKET_SIZE,
    SCATTER_KM_SCALE,
};
pub use app_state::{AppState, PersistedState};
pub use entities::{
    FuelType, QueryProfile, SaleRecord, SellerType, Transmission, DEFAULT_REFERENCE_YEAR,
};
pub use estimation::{
    predict, EstimateMethod, PredictionResult, PriceEstimate, AGE_DEPRECIATION_PER_YEAR,
    COMPARABLE_AGE_WINDOW, MILEAGE_FACTOR_FLOOR, MILEAGE_FULL_DEPRECIATION_KM,
};
