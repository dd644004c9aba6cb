//! Small prime utilities used when constructing parameterized fields.
//!
//! Both functions use trial division bounded by `sqrt(n)`. They are meant for
//! the small arguments field construction works with, not for cryptographic
//! sizes.

/// Returns true if `n` is prime.
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns the first prime strictly greater than `n`.
///
/// Returns `None` only when no such prime fits in a `u64`.
#[must_use]
pub fn next_prime(n: u64) -> Option<u64> {
    let mut candidate = n.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}
