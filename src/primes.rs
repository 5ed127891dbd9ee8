//! Primality helpers used to size bucket arrays

/// Returns true if `n` is prime.
///
/// Uses trial division by odd factors up to `sqrt(n)`.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= n) {
        if n % factor == 0 {
            return false;
        }
        factor = factor.saturating_add(2);
    }
    true
}

/// Returns the smallest prime `>= n`, scanning odd numbers only.
///
/// Even inputs are bumped to the next odd number first, so this never returns 2.
/// Callers that need a two-bucket table must check [`is_prime`] before calling it.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}
