//! Timezone abbreviations
//!
//! Maps the abbreviations clients send (`AEST`, `PDT`, ...) to IANA zones.
//! Conversions go through the zone rather than a fixed offset, so a time in
//! July rendered for `EST` follows New York daylight saving.

use chrono_tz::Tz;

use crate::error::{ApiError, Result};

/// Abbreviation to the IANA zone it stands for.
const ZONES: &[(&str, Tz)] = &[
    // Australia
    ("ACDT", Tz::Australia__Adelaide),
    ("ACST", Tz::Australia__Darwin),
    ("AEDT", Tz::Australia__Sydney),
    ("AEST", Tz::Australia__Brisbane),
    ("AWDT", Tz::Australia__Perth),
    ("AWST", Tz::Australia__Perth),
    // North America
    ("EST", Tz::America__New_York),
    ("EDT", Tz::America__New_York),
    ("CST", Tz::America__Chicago),
    ("CDT", Tz::America__Chicago),
    ("MST", Tz::America__Denver),
    ("MDT", Tz::America__Denver),
    ("PST", Tz::America__Los_Angeles),
    ("PDT", Tz::America__Los_Angeles),
    // Europe
    ("GMT", Tz::Europe__London),
    ("BST", Tz::Europe__London),
    ("CET", Tz::Europe__Paris),
    ("CEST", Tz::Europe__Paris),
    ("EET", Tz::Europe__Bucharest),
    ("EEST", Tz::Europe__Bucharest),
    // Asia
    ("JST", Tz::Asia__Tokyo),
    ("KST", Tz::Asia__Seoul),
    ("CNST", Tz::Asia__Shanghai),
    ("IST", Tz::Asia__Kolkata),
    ("UTC", Tz::UTC),
];

/// Resolves a timezone abbreviation to its zone, case-insensitively.
pub fn zone_for(abbreviation: &str) -> Result<Tz> {
    ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(abbreviation))
        .map(|(_, zone)| *zone)
        .ok_or_else(|| ApiError::InvalidTimezone(abbreviation.to_string()))
}
