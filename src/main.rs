use std::process::ExitCode;

use car_value_scanner::domain::{
    AppState, EstimateMethod, FuelType, PredictionResult, QueryProfile, SellerType, Transmission,
    DEFAULT_REFERENCE_YEAR,
};
use car_value_scanner::infra::load_records;
use car_value_scanner::util::{
    format_km, format_lakhs, format_scatter_km, load_persisted_state, save_persisted_state,
};

const DEFAULT_DATASET: &str = "sales.csv";

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    let records = match load_records(&path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("[dataset] {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = AppState::new(records, DEFAULT_REFERENCE_YEAR);
    if let Some(saved) = load_persisted_state() {
        state.apply_persisted(saved);
    }

    print_aggregates(&state);

    let query = state.last_query.clone().unwrap_or_else(example_query);
    println!();
    println!(
        "Estimating resale for: age {}, {} driven, showroom {}, {} {}",
        query.car_age,
        format_km(query.kms),
        format_lakhs(query.present_price),
        query.fuel_type.label(),
        query.transmission.label(),
    );
    let result = state.run_prediction(query);
    print_prediction(&result);

    if let Err(e) = save_persisted_state(&state.to_persisted()) {
        println!("[session] Failed to save session: {e}");
    }

    ExitCode::SUCCESS
}

/// The walkthrough vehicle this tool has always shipped with.
fn example_query() -> QueryProfile {
    QueryProfile {
        car_age: 3,
        kms: 25_000.0,
        present_price: 10.0,
        fuel_type: FuelType::Petrol,
        seller_type: SellerType::Dealer,
        transmission: Transmission::Manual,
        owner: 0,
    }
}

fn print_aggregates(state: &AppState) {
    let view = state.aggregates();

    println!();
    println!("Average selling price by age (buckets of 3+ cars):");
    for bucket in &view.by_age {
        println!(
            "  {:>2} yrs  {}  ({} cars)",
            bucket.age,
            format_lakhs(bucket.avg_price),
            bucket.count
        );
    }

    println!();
    println!("By fuel type:");
    for slice in &view.by_fuel {
        println!(
            "  {:<10} {}  ({} cars)",
            slice.category.label(),
            format_lakhs(slice.avg_price),
            slice.count
        );
    }

    println!();
    println!("By transmission:");
    for slice in &view.by_transmission {
        println!(
            "  {:<10} {}  ({} cars)",
            slice.category.label(),
            format_lakhs(slice.avg_price),
            slice.count
        );
    }

    if let Some(point) = view.scatter.first() {
        println!();
        println!(
            "Scatter sample: {} — age {}, sold {}, {}",
            point.label,
            point.x,
            format_lakhs(point.y),
            format_scatter_km(point.z)
        );
    }
}

fn print_prediction(result: &PredictionResult) {
    for estimate in &result.estimates {
        if estimate.method == EstimateMethod::NoSimilarCars {
            println!("  {}", estimate.method.label());
        } else {
            println!(
                "  {:<22} {}",
                estimate.method.label(),
                format_lakhs(estimate.price)
            );
        }
    }
    match result.range {
        Some((min, max)) => println!(
            "  Expected range:        {} – {}",
            format_lakhs(min),
            format_lakhs(max)
        ),
        None => println!("  Expected range:        Not enough data"),
    }
}
