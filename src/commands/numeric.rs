//! Integer classification predicates for command tables.
//!
//! Tokens are classified by shape first (a single integer regex) and then by
//! whether they fit the `i64` compute domain. An integer-shaped token that
//! overflows `i64` is "out of range"; tables declare that rule ahead of
//! their computing rule so overflow gets its own message instead of falling
//! through to the wildcard.

use argtree::regex;

/// Integer-shaped token: optional sign followed by digits only.
pub fn is_integer(token: &str) -> bool {
    regex!(r"^[+-]?[0-9]+$").is_match(token)
}

/// Integer-shaped, but overflowing the `i64` compute domain.
pub fn is_out_of_range_integer(token: &str) -> bool {
    is_integer(token) && token.parse::<i64>().is_err()
}

/// Integer strictly greater than zero.
pub fn is_positive_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok_and(|n| n > 0)
}

/// Integer greater than or equal to zero.
pub fn is_non_negative_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok_and(|n| n >= 0)
}
