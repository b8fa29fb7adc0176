//! ZIP code resolution against the bundled `zipcodes` dataset
//!
//! This is a purely local lookup: no network I/O. The dataset defines the
//! order of returned candidates; callers always take the first one.

use crate::models::LocationQuery;
use crate::{BeachDayError, Result};
use tracing::debug;

/// Look up all ZIP codes registered for a city/state pair
///
/// The query is expected to be normalized already (see
/// [`LocationQuery::new`]); matching here is case-insensitive as a guard
/// against dataset casing quirks.
pub fn resolve(query: &LocationQuery) -> Result<Vec<String>> {
    debug!("Looking up ZIP codes for {}, {}", query.city, query.state);

    let matches = zipcodes::filter_by(
        vec![|z: &zipcodes::Zipcode| {
            z.city.eq_ignore_ascii_case(&query.city) && z.state.eq_ignore_ascii_case(&query.state)
        }],
        None,
    )
    .unwrap_or_default();

    if matches.is_empty() {
        return Err(BeachDayError::zip_not_found(
            query.city.clone(),
            query.state.clone(),
        ));
    }

    debug!(
        "Found {} ZIP code(s) for {}, {}",
        matches.len(),
        query.city,
        query.state
    );

    Ok(matches.into_iter().map(|z| z.zip_code).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_city() {
        let query = LocationQuery::new("miami", "fl");
        let zip_codes = resolve(&query).expect("Miami, FL should have ZIP codes");

        assert!(!zip_codes.is_empty());
        assert!(zip_codes.iter().all(|z| z.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let query = LocationQuery::new("Miami", "FL");
        let first = resolve(&query).expect("lookup");
        let second = resolve(&query).expect("lookup");
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_unknown_city() {
        let query = LocationQuery::new("atlantis", "zz");
        let err = resolve(&query).expect_err("no ZIP codes for Atlantis, ZZ");

        assert!(matches!(err, BeachDayError::ZipNotFound { .. }));
        assert_eq!(err.to_string(), "No ZIP code found for Atlantis, ZZ");
    }
}
