// Big Integer Operations
// Wrapper around num-bigint for parsing, rendering and modular exponentiation

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};

use crate::error::{Error, Result};

/// Big integer type used by both pipelines
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Parse a non-negative integer from text.
///
/// Accepts decimal digits, or hex digits behind a `0x`/`0X` prefix.
/// `field` names the value in the returned error.
pub fn parse_integer(field: &'static str, text: &str) -> Result<RsaBigInt> {
    let trimmed = text.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidInteger {
            field,
            value: text.to_string(),
        });
    }

    RsaBigInt::from_str_radix(digits, radix).map_err(|_| Error::InvalidInteger {
        field,
        value: text.to_string(),
    })
}

/// Parse a bare hex string (no prefix) into a big integer
pub fn from_hex(field: &'static str, hex: &str) -> Result<RsaBigInt> {
    RsaBigInt::from_str_radix(hex, 16).map_err(|_| Error::InvalidInteger {
        field,
        value: hex.to_string(),
    })
}

/// Lowercase hex rendering without prefix or leading zeros
pub fn to_hex(n: &RsaBigInt) -> String {
    n.to_str_radix(16)
}

/// Decimal rendering
pub fn to_decimal(n: &RsaBigInt) -> String {
    n.to_str_radix(10)
}

/// Modular exponentiation: base^exp mod modulus
///
/// Square-and-multiply over the exponent bits, most significant first.
/// The accumulator is reduced after every multiplication so it never
/// grows past twice the width of the modulus.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    if modulus.is_zero() {
        tracing::error!("modular exponentiation with zero modulus");
        return Err(Error::ZeroModulus);
    }
    if modulus.is_one() {
        return Ok(RsaBigInt::zero());
    }

    let base = base % modulus;
    let mut result = RsaBigInt::one();

    for i in (0..exp.bits()).rev() {
        result = (&result * &result) % modulus;
        if exp.bit(i) {
            result = (&result * &base) % modulus;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let base = from_u64(3);
        let exp = from_u64(5);
        let modulus = from_u64(7);
        let result = mod_pow(&base, &exp, &modulus).unwrap();
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_zero_exponent() {
        let result = mod_pow(&from_u64(12), &from_u64(0), &from_u64(7)).unwrap();
        assert_eq!(result, from_u64(1));
    }

    #[test]
    fn test_mod_pow_modulus_one() {
        let result = mod_pow(&from_u64(12), &from_u64(5), &from_u64(1)).unwrap();
        assert_eq!(result, from_u64(0));
    }

    #[test]
    fn test_mod_pow_zero_modulus() {
        let result = mod_pow(&from_u64(2), &from_u64(5), &from_u64(0));
        assert!(matches!(result, Err(Error::ZeroModulus)));
    }

    #[test]
    fn test_mod_pow_base_larger_than_modulus() {
        // 100 ≡ 2 (mod 7), 2^10 = 1024 ≡ 2 (mod 7)
        let result = mod_pow(&from_u64(100), &from_u64(10), &from_u64(7)).unwrap();
        assert_eq!(result, from_u64(2));
    }

    #[test]
    fn test_mod_pow_cube_matches_repeated_multiplication() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let b: u64 = rng.gen_range(0..1_000_000);
            let m: u64 = rng.gen_range(2..1_000_000);
            let expected = (b * b % m) * b % m;
            let result = mod_pow(&from_u64(b), &from_u64(3), &from_u64(m)).unwrap();
            assert_eq!(result, from_u64(expected), "b={} m={}", b, m);
        }
    }

    #[test]
    fn test_mod_pow_matches_num_bigint() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let b = from_u64(rng.gen());
            let e = from_u64(rng.gen());
            let m = from_u64(rng.gen_range(2..u64::MAX));
            assert_eq!(mod_pow(&b, &e, &m).unwrap(), b.modpow(&e, &m));
        }
    }

    #[test]
    fn test_mod_pow_large_operands() {
        let m = parse_integer("m", &format!("1{}", "0".repeat(300))).unwrap() + 7u8;
        let b = parse_integer("b", &"9".repeat(280)).unwrap();
        let e = parse_integer("e", &"3".repeat(250)).unwrap();
        let result = mod_pow(&b, &e, &m).unwrap();
        assert!(result < m);
        assert_eq!(result, b.modpow(&e, &m));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("n", "3233").unwrap(), from_u64(3233));
        assert_eq!(parse_integer("n", " 3233\n").unwrap(), from_u64(3233));
        assert_eq!(parse_integer("n", "0xca1").unwrap(), from_u64(3233));
        assert_eq!(parse_integer("n", "0XCA1").unwrap(), from_u64(3233));
    }

    #[test]
    fn test_parse_integer_rejects_garbage() {
        for bad in ["", "0x", "-5", "12a", "0xzz", "1.5"] {
            let result = parse_integer("n", bad);
            assert!(
                matches!(result, Err(Error::InvalidInteger { field: "n", .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_render() {
        let n = from_u64(3233);
        assert_eq!(to_hex(&n), "ca1");
        assert_eq!(to_decimal(&n), "3233");
        assert_eq!(from_hex("n", "0001ff").unwrap(), from_u64(0x1ff));
    }
}
