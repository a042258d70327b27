//! Price statistics: currency selection, outlier filtering, median.

use crate::search::Listing;

/// Minimum CAD listings needed before USD is ignored.
pub const MIN_CAD_LISTINGS: usize = 2;

/// Fixed USD → CAD conversion rate.
pub const USD_TO_CAD: f64 = 1.38;

/// Samples below this size are not outlier-filtered.
pub const MIN_FILTER_SAMPLE: usize = 3;

/// Lower bound of the outlier band, as a multiple of the median.
pub const OUTLIER_LOW: f64 = 0.5;

/// Upper bound of the outlier band, as a multiple of the median.
pub const OUTLIER_HIGH: f64 = 2.0;

/// Median of `values`; 0 for an empty slice.
pub fn compute_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Keeps values within `[0.5 × median, 2 × median]`, preserving order.
///
/// Samples smaller than [`MIN_FILTER_SAMPLE`] are returned unchanged, and so is
/// any sample the band would empty out (e.g. all zeros).
pub fn filter_outliers(values: &[f64]) -> Vec<f64> {
    if values.len() < MIN_FILTER_SAMPLE {
        return values.to_vec();
    }

    let median = compute_median(values);
    let (low, high) = (median * OUTLIER_LOW, median * OUTLIER_HIGH);

    let kept: Vec<f64> = values.iter().copied().filter(|v| *v >= low && *v <= high).collect();

    if kept.is_empty() {
        values.to_vec()
    } else {
        kept
    }
}

/// Picks the CAD-equivalent prices to estimate from.
///
/// Two or more CAD listings win outright. Otherwise any USD listings are
/// converted at [`USD_TO_CAD`]. Other currencies are never used.
pub fn select_prices(listings: &[Listing]) -> Vec<f64> {
    let prices_in = |code: &str| -> Vec<f64> {
        listings
            .iter()
            .filter(|l| l.currency.trim().eq_ignore_ascii_case(code))
            .map(|l| l.price)
            .collect()
    };

    let cad = prices_in("CAD");
    if cad.len() >= MIN_CAD_LISTINGS {
        return cad;
    }

    prices_in("USD").into_iter().map(|p| p * USD_TO_CAD).collect()
}

/// Rounds to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
