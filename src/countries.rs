//! Country codes accepted by VIES.
//!
//! VIES uses its own prefixes rather than plain ISO 3166-1: Greece is `EL`,
//! and Northern Ireland keeps `XI` for goods trade after the Brexit transition.

pub const AUSTRIA: &str = "AT";
pub const BELGIUM: &str = "BE";
pub const BULGARIA: &str = "BG";
pub const CYPRUS: &str = "CY";
pub const CZECHIA: &str = "CZ";
pub const GERMANY: &str = "DE";
pub const DENMARK: &str = "DK";
pub const ESTONIA: &str = "EE";
pub const GREECE: &str = "EL";
pub const SPAIN: &str = "ES";
pub const FINLAND: &str = "FI";
pub const FRANCE: &str = "FR";
pub const CROATIA: &str = "HR";
pub const HUNGARY: &str = "HU";
pub const IRELAND: &str = "IE";
pub const ITALY: &str = "IT";
pub const LITHUANIA: &str = "LT";
pub const LUXEMBOURG: &str = "LU";
pub const LATVIA: &str = "LV";
pub const MALTA: &str = "MT";
pub const NETHERLANDS: &str = "NL";
pub const POLAND: &str = "PL";
pub const PORTUGAL: &str = "PT";
pub const ROMANIA: &str = "RO";
pub const SWEDEN: &str = "SE";
pub const SLOVENIA: &str = "SI";
pub const SLOVAKIA: &str = "SK";
pub const NORTHERN_IRELAND: &str = "XI";

/// Every country code VIES answers for. Sorted for binary search.
pub static VALID_COUNTRIES: &[&str] = &[
    AUSTRIA,
    BELGIUM,
    BULGARIA,
    CYPRUS,
    CZECHIA,
    GERMANY,
    DENMARK,
    ESTONIA,
    GREECE,
    SPAIN,
    FINLAND,
    FRANCE,
    CROATIA,
    HUNGARY,
    IRELAND,
    ITALY,
    LITHUANIA,
    LUXEMBOURG,
    LATVIA,
    MALTA,
    NETHERLANDS,
    POLAND,
    PORTUGAL,
    ROMANIA,
    SWEDEN,
    SLOVENIA,
    SLOVAKIA,
    NORTHERN_IRELAND,
];

/// Check whether `code` is a country code VIES accepts (case-sensitive).
pub fn is_valid_country(code: &str) -> bool {
    VALID_COUNTRIES.binary_search(&code).is_ok()
}
