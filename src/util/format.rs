//! Display formatting for prices and odometer readings.

use crate::domain::SCATTER_KM_SCALE;

/// Format a price in lakhs for display, e.g. `₹5.25 lakhs`.
pub fn format_lakhs(value: f64) -> String {
    format!("₹{value:.2} lakhs")
}

/// Recover kilometers from a scatter `z` value and format them.
pub fn format_scatter_km(z: f64) -> String {
    format_km(z * SCATTER_KM_SCALE)
}

/// Format an odometer reading with Indian-system digit grouping
/// (last three digits, then pairs): 1234567 → `12,34,567 km`.
pub fn format_km(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = format!("{}", rounded.abs());
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let body: String = grouped.chars().rev().collect();
    if rounded < 0 {
        format!("-{body} km")
    } else {
        format!("{body} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lakhs_round_to_two_decimals() {
        assert_eq!(format_lakhs(5.0), "₹5.00 lakhs");
        assert_eq!(format_lakhs(3.6399), "₹3.64 lakhs");
    }

    #[test]
    fn km_uses_indian_grouping() {
        assert_eq!(format_km(520.0), "520 km");
        assert_eq!(format_km(5_200.0), "5,200 km");
        assert_eq!(format_km(27_000.0), "27,000 km");
        assert_eq!(format_km(150_000.0), "1,50,000 km");
        assert_eq!(format_km(1_234_567.0), "12,34,567 km");
    }

    #[test]
    fn scatter_z_recovers_kilometers() {
        assert_eq!(format_scatter_km(2.7), "27,000 km");
    }
}
