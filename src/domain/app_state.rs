use serde::{Deserialize, Serialize};

use super::aggregation::{aggregate, AggregateView};
use super::entities::{QueryProfile, SaleRecord, DEFAULT_REFERENCE_YEAR};
use super::estimation::{predict, PredictionResult};

/// Session state owned by the caller. The domain functions themselves are
/// pure; everything mutable lives here.
#[derive(Clone, Debug)]
pub struct AppState {
    records: Vec<SaleRecord>,
    reference_year: i32,
    aggregates: AggregateView,
    pub last_query: Option<QueryProfile>,
    pub last_prediction: Option<PredictionResult>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_REFERENCE_YEAR)
    }
}

impl AppState {
    pub fn new(records: Vec<SaleRecord>, reference_year: i32) -> Self {
        let aggregates = aggregate(&records, reference_year);
        Self {
            records,
            reference_year,
            aggregates,
            last_query: None,
            last_prediction: None,
        }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Derived chart views, recomputed whenever the record set is replaced.
    pub fn aggregates(&self) -> &AggregateView {
        &self.aggregates
    }

    /// Swap in a freshly loaded record set and rebuild the derived views.
    pub fn replace_records(&mut self, records: Vec<SaleRecord>) {
        self.records = records;
        self.aggregates = aggregate(&self.records, self.reference_year);
    }

    /// Run the estimator and remember both the query and its result.
    pub fn run_prediction(&mut self, query: QueryProfile) -> PredictionResult {
        let result = predict(&self.records, &query, self.reference_year);
        self.last_query = Some(query);
        self.last_prediction = Some(result.clone());
        result
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.last_query = persisted.last_query;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            last_query: self.last_query.clone(),
        }
    }
}

/// The slice of session state worth keeping between runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub last_query: Option<QueryProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FuelType, SellerType, Transmission};

    fn records() -> Vec<SaleRecord> {
        (0..4)
            .map(|i| SaleRecord {
                name: format!("car {i}"),
                year: 2020,
                selling_price: 4.0 + i as f64,
                present_price: 8.0,
                driven_km: 25_000.0,
                fuel_type: FuelType::Petrol,
                seller_type: SellerType::Dealer,
                transmission: Transmission::Manual,
                owner: 0,
            })
            .collect()
    }

    fn sample_query() -> QueryProfile {
        QueryProfile {
            car_age: 5,
            kms: 25_000.0,
            present_price: 8.0,
            fuel_type: FuelType::Petrol,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Manual,
            owner: 0,
        }
    }

    #[test]
    fn replacing_records_rebuilds_aggregates() {
        let mut state = AppState::default();
        assert!(state.aggregates().scatter.is_empty());
        state.replace_records(records());
        assert_eq!(state.aggregates().scatter.len(), 4);
        assert_eq!(state.aggregates().by_age.len(), 1);
    }

    #[test]
    fn run_prediction_remembers_query_and_result() {
        let mut state = AppState::new(records(), DEFAULT_REFERENCE_YEAR);
        let result = state.run_prediction(sample_query());
        assert!(result.has_comparables());
        assert_eq!(state.last_query.as_ref().unwrap().car_age, 5);
        assert_eq!(state.last_prediction, Some(result));
    }

    #[test]
    fn persisted_state_round_trips_through_json() {
        let mut state = AppState::new(records(), DEFAULT_REFERENCE_YEAR);
        state.run_prediction(sample_query());

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::new(records(), DEFAULT_REFERENCE_YEAR);
        fresh.apply_persisted(restored);
        assert_eq!(fresh.last_query, Some(sample_query()));
    }
}
