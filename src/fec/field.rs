//! Arithmetic in the prime field GF(p) with `p = MODULUS`.
//!
//! Elements are stored as `Elem` in `[0, MODULUS)`. Products and differences are
//! formed in `i64` and folded back into range with [`reduce`].

use super::{Elem, MODULUS};

const P: i64 = MODULUS as i64;

const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// Inverses only exist for every nonzero element when the modulus is prime.
const _: () = assert!(is_prime(MODULUS), "MODULUS must be prime");

/// Maps any integer onto its representative in `[0, MODULUS)`.
#[inline(always)]
pub fn reduce(x: i64) -> Elem {
    let r = x % P;
    if r < 0 {
        (r + P) as Elem
    } else {
        r as Elem
    }
}

// Operands are folded into the field first so products stay below p^2.
#[inline(always)]
fn lift(a: Elem) -> i64 {
    (a % MODULUS) as i64
}

#[inline(always)]
pub fn add(a: Elem, b: Elem) -> Elem {
    reduce(lift(a) + lift(b))
}

#[inline(always)]
pub fn sub(a: Elem, b: Elem) -> Elem {
    reduce(lift(a) - lift(b))
}

#[inline(always)]
pub fn mul(a: Elem, b: Elem) -> Elem {
    reduce(lift(a) * lift(b))
}

/// Computes `a * b + c` in GF(p).
#[inline(always)]
pub fn mul_add(a: Elem, b: Elem, c: Elem) -> Elem {
    reduce(lift(a) * lift(b) + lift(c))
}

/// Computes `c - a * b` in GF(p).
#[inline(always)]
pub fn mul_sub(a: Elem, b: Elem, c: Elem) -> Elem {
    reduce(lift(c) - lift(a) * lift(b))
}

/// Inverse of `a` modulo `m` by the iterative extended Euclidean algorithm.
///
/// `gcd(a, m)` must be 1; for `a ≡ 0 (mod m)` the result is meaningless.
/// A modulus of 1 yields 0.
pub fn mul_inverse(a: i64, m: i64) -> i64 {
    if m == 1 {
        return 0;
    }
    let m0 = m;
    let (mut a, mut m) = (a, m);
    let (mut x0, mut x1) = (0i64, 1i64);
    while a > 1 {
        if m == 0 {
            // gcd(a, m) > 1, no inverse
            return 0;
        }
        let q = a / m;
        (m, a) = (a % m, m);
        (x0, x1) = (x1 - q * x0, x0);
    }
    if x1 < 0 {
        x1 += m0;
    }
    x1
}

/// Multiplicative inverse in GF(p). Zero has none.
#[inline]
pub fn inv(a: Elem) -> Option<Elem> {
    let a = a % MODULUS;
    if a == 0 {
        return None;
    }
    Some(reduce(mul_inverse(a as i64, P)))
}

/// Whether `value` is already a canonical field element.
#[inline(always)]
pub fn contains(value: Elem) -> bool {
    value < MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_handles_negative_intermediates() {
        assert_eq!(reduce(-1), MODULUS - 1);
        assert_eq!(reduce(-(P * 3)), 0);
        assert_eq!(reduce(P), 0);
        assert_eq!(reduce(P + 5), 5);
    }

    #[test]
    fn operations_stay_in_field() {
        for a in 0..MODULUS {
            for b in 0..MODULUS {
                assert!(contains(add(a, b)));
                assert!(contains(sub(a, b)));
                assert!(contains(mul(a, b)));
            }
        }
    }

    #[test]
    fn every_nonzero_element_has_an_inverse() {
        for a in 1..MODULUS {
            let ai = inv(a).unwrap();
            assert_eq!(mul(a, ai), 1, "a = {a}");
        }
        assert_eq!(inv(0), None);
    }

    #[test]
    fn mul_inverse_matches_known_values() {
        assert_eq!(mul_inverse(3, 7), 5);
        assert_eq!(mul_inverse(10, 17), 12);
        assert_eq!(mul_inverse(1, 127), 1);
        assert_eq!(mul_inverse(5, 1), 0);
    }

    #[test]
    fn sub_is_inverse_of_add() {
        assert_eq!(sub(add(100, 50), 50), 100);
        assert_eq!(sub(3, 5), MODULUS - 2);
        assert_eq!(mul_sub(2, 3, 1), MODULUS - 5);
        assert_eq!(mul_add(10, 13, 0), 3);
    }

    #[test]
    fn operands_outside_field_are_folded_first() {
        // u32::MAX = 33818640 * 127 + 15
        assert_eq!(mul(u32::MAX, u32::MAX), 225 % MODULUS);
        assert_eq!(add(u32::MAX, 1), 16);
        assert_eq!(sub(0, u32::MAX), MODULUS - 15);
        assert_eq!(mul_add(u32::MAX, 2, MODULUS + 1), 31);
        assert_eq!(mul_sub(u32::MAX, 1, 0), MODULUS - 15);
        assert_eq!(mul(500, 7), mul(500 % MODULUS, 7));
    }

    #[test]
    fn modulus_is_prime() {
        assert!(is_prime(MODULUS));
        assert!(!is_prime(1));
        assert!(!is_prime(126));
        assert!(is_prime(2));
    }
}
