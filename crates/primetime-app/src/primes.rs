//! Prime arithmetic used by collaborators.
//!
//! None of this goes through the store: the prime modal asks `is_prime` to
//! decide which button to show, and the "what is the nth prime" lookup hands
//! its answer straight to the user.

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut divisor: i64 = 5;
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// Returns the `n`th prime, 1-based. `None` for `n == 0`.
pub fn nth_prime(n: u64) -> Option<i64> {
    if n == 0 {
        return None;
    }
    let mut found = 0;
    let mut candidate: i64 = 1;
    while found < n {
        candidate = candidate.checked_add(1)?;
        if is_prime(candidate) {
            found += 1;
        }
    }
    Some(candidate)
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 22nd...
pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
