//! Derived chart views over the sale record set.

use std::collections::BTreeMap;

use serde::Serialize;

use super::entities::{FuelType, SaleRecord, Transmission};

/// Age buckets with this many samples or fewer are dropped from the by-age
/// view; they are too noisy to chart.
pub const MIN_AGE_BUCKET_SIZE: usize = 3;

/// Odometer divisor for the scatter bubble size. Consumers multiply back by
/// the same factor to recover kilometers.
pub const SCATTER_KM_SCALE: f64 = 10_000.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgeBucket {
    pub age: i32,
    pub avg_price: f64,
    pub count: usize,
}

/// Average price and sample count for one categorical value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategorySlice<K> {
    pub category: K,
    pub avg_price: f64,
    pub count: usize,
}

/// One record projected for a bubble chart: x = age, y = selling price,
/// z = odometer / [`SCATTER_KM_SCALE`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: i32,
    pub y: f64,
    pub z: f64,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AggregateView {
    /// Ascending by age, sparse buckets suppressed.
    pub by_age: Vec<AgeBucket>,
    /// One slice per distinct fuel type, in first-seen order.
    pub by_fuel: Vec<CategorySlice<FuelType>>,
    /// One slice per distinct transmission, in first-seen order.
    pub by_transmission: Vec<CategorySlice<Transmission>>,
    /// One point per record, in input order.
    pub scatter: Vec<ScatterPoint>,
}

/// Build all four derived views. Pure over the input; empty input yields
/// empty sub-views across the board.
pub fn aggregate(records: &[SaleRecord], reference_year: i32) -> AggregateView {
    AggregateView {
        by_age: age_buckets(records, reference_year),
        by_fuel: category_slices(records, |r| r.fuel_type),
        by_transmission: category_slices(records, |r| r.transmission),
        scatter: scatter_points(records, reference_year),
    }
}

fn age_buckets(records: &[SaleRecord], reference_year: i32) -> Vec<AgeBucket> {
    let mut partitions: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = partitions.entry(record.age(reference_year)).or_insert((0.0, 0));
        entry.0 += record.selling_price;
        entry.1 += 1;
    }

    partitions
        .into_iter()
        .filter(|(_, (_, count))| *count >= MIN_AGE_BUCKET_SIZE)
        .map(|(age, (sum, count))| AgeBucket {
            age,
            avg_price: sum / count as f64,
            count,
        })
        .collect()
}

/// Group by a categorical key, preserving the order in which distinct values
/// first appear. A positional scan keeps that order without an ordered map;
/// there are at most a handful of categories.
fn category_slices<K, F>(records: &[SaleRecord], key: F) -> Vec<CategorySlice<K>>
where
    K: Copy + PartialEq,
    F: Fn(&SaleRecord) -> K,
{
    let mut groups: Vec<(K, f64, usize)> = Vec::new();
    for record in records {
        let value = key(record);
        match groups.iter_mut().find(|(k, _, _)| *k == value) {
            Some((_, sum, count)) => {
                *sum += record.selling_price;
                *count += 1;
            }
            None => groups.push((value, record.selling_price, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(category, sum, count)| CategorySlice {
            category,
            avg_price: sum / count as f64,
            count,
        })
        .collect()
}

fn scatter_points(records: &[SaleRecord], reference_year: i32) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|record| ScatterPoint {
            x: record.age(reference_year),
            y: record.selling_price,
            z: record.driven_km / SCATTER_KM_SCALE,
            label: record.name.clone(),
        })
        .collect()
}
