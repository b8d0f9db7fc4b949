//! Eurostat geographic code validation and fallback resolution.
//!
//! City codes have the shape `XXnnnC` (two-letter country prefix, three digits, `C` for the city
//! proper). Statistical exports do not always carry a row for the city itself, so lookups walk a
//! fallback chain: the functional urban area (`XXnnnF`), then the country (`XX`).

use once_cell::sync::Lazy;
use regex::Regex;

static CITY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{3}C$").expect("city code pattern is valid"));

/// Suffix letter of a city-proper code.
pub const CITY_SUFFIX: char = 'C';
/// Suffix letter of a functional-urban-area code.
pub const FUA_SUFFIX: char = 'F';

/// Sanitizes and validates a city code.
///
/// Surrounding whitespace is removed and the code is upper-cased before matching against
/// `XXnnnC`.
///
/// # Returns
/// - `Some(String)` - The normalized code, e.g. `"AT001C"` for `"  at001c "`
/// - `None` - The input is not a valid city code
pub fn sanitize(code: &str) -> Option<String> {
    let sanitized = code.trim().to_uppercase();

    if CITY_CODE.is_match(&sanitized) {
        Some(sanitized)
    } else {
        None
    }
}

/// Two-letter country prefix of a code, if the code is long enough to carry one.
pub fn country_prefix(code: &str) -> Option<&str> {
    code.get(..2)
}

/// Functional-urban-area variant of a city code (`AT001C` -> `AT001F`).
///
/// Returns `None` for codes that do not end in the city suffix.
pub fn fua_variant(code: &str) -> Option<String> {
    code.strip_suffix(CITY_SUFFIX)
        .map(|stem| format!("{}{}", stem, FUA_SUFFIX))
}

/// Ordered lookup keys for a city code: the code itself, its functional urban area, then its
/// country. The first key that matches a dataset row wins.
pub fn fallback_chain(code: &str) -> Vec<String> {
    let mut chain = vec![code.to_string()];

    if let Some(fua) = fua_variant(code) {
        chain.push(fua);
    }
    if let Some(country) = country_prefix(code) {
        if country != code {
            chain.push(country.to_string());
        }
    }

    chain
}
