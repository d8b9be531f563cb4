//! CSV ingestion for the sale-record dataset.
//!
//! The dataset ships with the column headers `Car_Name, Year, Selling_Price,
//! Present_Price, Driven_kms, Fuel_Type, Seller_Type, Transmission, Owner`.
//! A malformed row aborts the whole load: downstream code assumes every
//! record it sees is well-typed, so there is no partial dataset state.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{FuelType, SaleRecord, SellerType, Transmission};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse dataset row: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} (\"{name}\") has non-positive Present_Price {value}")]
    InvalidPresentPrice { row: usize, name: String, value: f64 },
}

/// Row shape as it appears in the CSV file. Older exports of the dataset
/// spell the seller column `Selling_type`, hence the alias.
#[derive(Debug, Deserialize)]
struct SaleRow {
    #[serde(rename = "Car_Name")]
    car_name: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Selling_Price")]
    selling_price: f64,
    #[serde(rename = "Present_Price")]
    present_price: f64,
    #[serde(rename = "Driven_kms")]
    driven_kms: f64,
    #[serde(rename = "Fuel_Type")]
    fuel_type: FuelType,
    #[serde(rename = "Seller_Type", alias = "Selling_type")]
    seller_type: SellerType,
    #[serde(rename = "Transmission")]
    transmission: Transmission,
    #[serde(rename = "Owner")]
    owner: u8,
}

impl SaleRow {
    fn into_record(self) -> SaleRecord {
        SaleRecord {
            name: self.car_name,
            year: self.year,
            selling_price: self.selling_price,
            present_price: self.present_price,
            driven_km: self.driven_kms,
            fuel_type: self.fuel_type,
            seller_type: self.seller_type,
            transmission: self.transmission,
            owner: self.owner,
        }
    }
}

/// Load and validate the full record set from a CSV file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_records(file)?;
    println!(
        "[dataset] Loaded {} sale records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse records from any reader. Validation matches `load_records`.
pub fn parse_records(reader: impl Read) -> Result<Vec<SaleRecord>, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, result) in csv_reader.deserialize::<SaleRow>().enumerate() {
        let row = result?;
        if row.present_price <= 0.0 {
            return Err(DatasetError::InvalidPresentPrice {
                row: index + 1,
                name: row.car_name,
                value: row.present_price,
            });
        }
        records.push(row.into_record());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Car_Name,Year,Selling_Price,Present_Price,Driven_kms,Fuel_Type,Seller_Type,Transmission,Owner";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n\
             ritz,2014,3.35,5.59,27000,Petrol,Dealer,Manual,0\n\
             sx4,2013,4.75,9.54,43000,Diesel,Dealer,Manual,0\n\
             wagon r,2011,2.85,4.15,5200,CNG,Individual,Manual,0\n\
             city,2015,6.0,9.9,61381,Petrol,Dealer,Automatic,1\n"
        );
        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].name, "ritz");
        assert_eq!(records[0].year, 2014);
        assert!((records[0].selling_price - 3.35).abs() < 1e-9);
        assert!((records[0].driven_km - 27_000.0).abs() < 1e-9);
        assert_eq!(records[2].fuel_type, FuelType::Cng);
        assert_eq!(records[2].seller_type, SellerType::Individual);
        assert_eq!(records[3].transmission, Transmission::Automatic);
        assert_eq!(records[3].owner, 1);
        assert_eq!(records[2].brand(), "wagon");
    }

    #[test]
    fn accepts_the_selling_type_header_spelling() {
        let csv = "Car_Name,Year,Selling_Price,Present_Price,Driven_kms,Fuel_Type,Selling_type,Transmission,Owner\n\
                   ritz,2014,3.35,5.59,27000,Petrol,Dealer,Manual,0\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].seller_type, SellerType::Dealer);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let csv = format!("{HEADER}\nritz,2014,abc,5.59,27000,Petrol,Dealer,Manual,0\n");
        assert!(matches!(
            parse_records(csv.as_bytes()),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn rejects_unknown_fuel_types() {
        let csv = format!("{HEADER}\nritz,2014,3.35,5.59,27000,Electric,Dealer,Manual,0\n");
        assert!(parse_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_non_positive_present_price() {
        let csv = format!(
            "{HEADER}\n\
             ritz,2014,3.35,5.59,27000,Petrol,Dealer,Manual,0\n\
             junker,2010,0.5,0,90000,Petrol,Individual,Manual,2\n"
        );
        match parse_records(csv.as_bytes()) {
            Err(DatasetError::InvalidPresentPrice { row, name, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(name, "junker");
            }
            other => panic!("expected InvalidPresentPrice, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_with_header_yields_no_records() {
        let csv = format!("{HEADER}\n");
        assert!(parse_records(csv.as_bytes()).unwrap().is_empty());
    }
}
