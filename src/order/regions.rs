//! Serviceable destination regions
//!
//! Built once at startup and shared read-only across requests.

use rustc_hash::FxHashSet;

/// The 50 U.S. states plus D.C.
pub const US_STATES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// Immutable set of region codes the business ships to
#[derive(Debug, Clone)]
pub struct ServiceableRegions {
    codes: FxHashSet<String>,
}

impl ServiceableRegions {
    /// Default set: [`US_STATES`]
    pub fn us_states() -> Self {
        Self::from_codes(US_STATES)
    }

    /// Build from an explicit list. Codes are kept verbatim; matching is case-sensitive.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, region_code: &str) -> bool {
        self.codes.contains(region_code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for ServiceableRegions {
    fn default() -> Self {
        Self::us_states()
    }
}
