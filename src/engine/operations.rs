//! Pure arithmetic behind each endpoint.
//!
//! Fibonacci and factorial are computed exactly and only narrowed to `f64`
//! at the edge, so cached values are always the true integers.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Largest Fibonacci index whose value is a finite `f64`.
///
/// F(1477) is about 2.1e308, past `f64::MAX`.
pub const MAX_FIB_INDEX: u64 = 1476;

/// `value ** exponent` with floating-point semantics.
pub fn power(value: i64, exponent: i64) -> f64 {
    (value as f64).powf(exponent as f64)
}

/// The `n`-th Fibonacci number, F(0) = 0 and F(1) = 1.
///
/// Iterative pair accumulation, O(n) additions.
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

/// `n!` as the running product 2 * 3 * ... * n.
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Narrows an exact integer to `f64`, or `None` if it would be infinite.
pub fn to_finite_f64(value: &BigUint) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite())
}
