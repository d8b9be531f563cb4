//! Resale price estimation from comparable past sales.

use serde::Serialize;

use super::entities::{QueryProfile, SaleRecord};

/// Records within this many years of the query's age count as comparable.
pub const COMPARABLE_AGE_WINDOW: i32 = 2;

/// Showroom value lost per year of age in the age/mileage heuristic.
pub const AGE_DEPRECIATION_PER_YEAR: f64 = 0.08;

/// Odometer reading at which the mileage factor bottoms out.
pub const MILEAGE_FULL_DEPRECIATION_KM: f64 = 150_000.0;

/// The mileage factor never drops below this, however high the odometer.
pub const MILEAGE_FACTOR_FLOOR: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EstimateMethod {
    SimilarCarsAverage,
    PriceRatio,
    AgeAndMileage,
    /// Sentinel when no record matches the comparable-set predicates.
    NoSimilarCars,
}

impl EstimateMethod {
    pub fn label(&self) -> &'static str {
        match self {
            EstimateMethod::SimilarCarsAverage => "Similar Cars Average",
            EstimateMethod::PriceRatio => "Price Ratio Method",
            EstimateMethod::AgeAndMileage => "Age & Mileage Based",
            EstimateMethod::NoSimilarCars => "No similar cars found",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub method: EstimateMethod,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Fixed order: similar-cars average, price ratio, age & mileage.
    /// A single [`EstimateMethod::NoSimilarCars`] entry when nothing matched.
    pub estimates: Vec<PriceEstimate>,
    /// Min and max over the non-zero estimate prices. `None` when there was
    /// no comparable data or every estimate came out zero.
    pub range: Option<(f64, f64)>,
}

impl PredictionResult {
    pub fn has_comparables(&self) -> bool {
        !matches!(
            self.estimates.as_slice(),
            [PriceEstimate {
                method: EstimateMethod::NoSimilarCars,
                ..
            }]
        )
    }
}

/// Estimate the resale price of the queried vehicle three independent ways.
///
/// A record is comparable when its age is within [`COMPARABLE_AGE_WINDOW`]
/// years of the query and its fuel type and transmission match. Seller type,
/// owner count, and odometer are deliberately not filters.
pub fn predict(
    records: &[SaleRecord],
    query: &QueryProfile,
    reference_year: i32,
) -> PredictionResult {
    let comparables: Vec<&SaleRecord> = records
        .iter()
        .filter(|record| {
            (record.age(reference_year) - query.car_age as i32).abs() <= COMPARABLE_AGE_WINDOW
                && record.fuel_type == query.fuel_type
                && record.transmission == query.transmission
        })
        .collect();

    if comparables.is_empty() {
        return PredictionResult {
            estimates: vec![PriceEstimate {
                method: EstimateMethod::NoSimilarCars,
                price: 0.0,
            }],
            range: None,
        };
    }

    let count = comparables.len() as f64;

    let similar_average = comparables
        .iter()
        .map(|record| record.selling_price)
        .sum::<f64>()
        / count;

    // Mean of per-record ratios, not a ratio of sums. present_price is
    // positive for every loaded record.
    let mean_ratio = comparables
        .iter()
        .map(|record| record.selling_price / record.present_price)
        .sum::<f64>()
        / count;
    let ratio_estimate = mean_ratio * query.present_price;

    let age_mileage = age_mileage_estimate(query);

    let estimates = vec![
        PriceEstimate {
            method: EstimateMethod::SimilarCarsAverage,
            price: similar_average,
        },
        PriceEstimate {
            method: EstimateMethod::PriceRatio,
            price: ratio_estimate,
        },
        PriceEstimate {
            method: EstimateMethod::AgeAndMileage,
            price: age_mileage,
        },
    ];

    let range = price_range(&estimates);

    PredictionResult { estimates, range }
}

/// Linear age depreciation followed by a floored mileage factor.
///
/// The age factor is intentionally not clamped and goes negative past
/// 12.5 years, matching the heuristic this tool inherited. The mileage
/// factor is floored at [`MILEAGE_FACTOR_FLOOR`].
fn age_mileage_estimate(query: &QueryProfile) -> f64 {
    let age_adjusted =
        query.present_price * (1.0 - AGE_DEPRECIATION_PER_YEAR * query.car_age as f64);
    let mileage_factor =
        (1.0 - query.kms / MILEAGE_FULL_DEPRECIATION_KM).max(MILEAGE_FACTOR_FLOOR);
    age_adjusted * mileage_factor
}

fn price_range(estimates: &[PriceEstimate]) -> Option<(f64, f64)> {
    let prices: Vec<f64> = estimates
        .iter()
        .map(|estimate| estimate.price)
        .filter(|price| *price != 0.0)
        .collect();

    let min = prices
        .iter()
        .copied()
        .min_by(|a, b| a.partial_cmp(b).unwrap())?;
    let max = prices
        .iter()
        .copied()
        .max_by(|a, b| a.partial_cmp(b).unwrap())?;

    Some((min, max))
}
