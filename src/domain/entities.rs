use serde::{Deserialize, Serialize};

/// Model year the dataset was collected against. Age derivation uses this
/// unless the caller overrides it, so tests are not bound to one calendar year.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    Cng,
}

impl FuelType {
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerType {
    Dealer,
    Individual,
}

impl SellerType {
    pub fn label(&self) -> &'static str {
        match self {
            SellerType::Dealer => "Dealer",
            SellerType::Individual => "Individual",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

/// One past vehicle sale. Loaded once, never mutated afterwards.
/// Prices are in lakhs (₹100,000).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub name: String,
    pub year: i32,
    pub selling_price: f64,
    /// Current showroom price. Must be positive; the loader rejects rows
    /// where it is not, so ratio computations never divide by zero.
    pub present_price: f64,
    pub driven_km: f64,
    pub fuel_type: FuelType,
    pub seller_type: SellerType,
    pub transmission: Transmission,
    pub owner: u8,
}

impl SaleRecord {
    /// Vehicle age at the given reference year. Computed, never stored.
    pub fn age(&self, reference_year: i32) -> i32 {
        reference_year - self.year
    }

    /// First token of the listed name (e.g. "maruti swift" → "maruti").
    pub fn brand(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A hypothetical vehicle the user wants a resale estimate for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub car_age: u32,
    pub kms: f64,
    pub present_price: f64,
    pub fuel_type: FuelType,
    /// Collected by the query form but not consulted by any current heuristic.
    pub seller_type: SellerType,
    pub transmission: Transmission,
    /// Previous owner count 0–3. Also unused by the current heuristics.
    pub owner: u8,
}
