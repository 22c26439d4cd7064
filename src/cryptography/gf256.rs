use once_cell::sync::Lazy;

/// Error struct that is used when two matrices cannot be multiplied because
/// their dimensions do not line up.
#[derive(Debug, PartialEq)]
pub struct Gf256Error {
    pub reason: &'static str,
}

/// Log and antilog tables for GF(2^8) with the generator 3.
///
/// `antilog[i]` holds 3^i, so the antilog table has 255 entries (3^255 = 3^0 = 1
/// would repeat). `log` is its inverse permutation with `log[0]` unused.
struct LogTables {
    log: [u8; 256],
    antilog: [u8; 255],
}

static TABLES: Lazy<LogTables> = Lazy::new(|| {
    let mut log = [0u8; 256];
    let mut antilog = [0u8; 255];

    let mut power = 1u8;
    for (exponent, entry) in antilog.iter_mut().enumerate() {
        *entry = power;
        log[power as usize] = exponent as u8;
        power = multiply(power, 3);
    }

    LogTables { log, antilog }
});

/// Addition in GF(2^8). Since coefficients live in GF(2), adding two
/// polynomials is a carry-less XOR. Subtraction is the same operation.
pub fn add(x: u8, y: u8) -> u8 {
    x ^ y
}

/// Multiplies two elements of GF(2^8), reducing with the AES polynomial
/// x^8 + x^4 + x^3 + x + 1 (0x11b).
///
/// Classic shift-and-add: walk the bits of `y` from the least significant end,
/// accumulate the current multiple of `x` for every set bit, and reduce `x`
/// back into the field each time it outgrows 8 bits.
pub fn multiply(x: u8, y: u8) -> u8 {
    let mut result = 0u8;
    let mut x = x as u16;
    let mut y = y;

    for _ in 0..8 {
        if y & 1 == 1 {
            result ^= x as u8;
        }
        y >>= 1;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= 0x11b;
        }
    }

    result
}

/// Returns the multiplicative inverse of `n`, looked up through the log
/// tables: n^-1 = g^(255 - log_g(n)).
///
/// 0 has no inverse; by convention (and for the S-box construction) the
/// function maps it to 0.
pub fn invert(n: u8) -> u8 {
    if n == 0 {
        return 0;
    }

    let tables = &*TABLES;
    tables.antilog[(255 - tables.log[n as usize] as usize) % 255]
}

/// Multiplies the matrix `a` (m x k) with the matrix `b` (k x m) over GF(2^8),
/// producing the square m x m product.
pub fn matrix_multiply(a: &[Vec<u8>], b: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, Gf256Error> {
    if a.is_empty() || b.is_empty() {
        return Err(Gf256Error {
            reason: "cannot multiply empty matrices",
        });
    }

    if a.len() != b[0].len() || a[0].len() != b.len() {
        return Err(Gf256Error {
            reason: "matrix dimensions do not match",
        });
    }

    let size = a.len();
    let inner = b.len();
    let mut result = vec![vec![0u8; size]; size];

    for i in 0..size {
        for j in 0..size {
            let mut sum = 0u8;
            for k in 0..inner {
                sum = add(sum, multiply(a[i][k], b[k][j]));
            }
            result[i][j] = sum;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_xor() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(0x57, 0x83), 0xd4);
        assert_eq!(add(0xff, 0xff), 0);
        // addition is its own inverse
        assert_eq!(add(add(0x3a, 0x91), 0x91), 0x3a);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(0, 13), 0);
        assert_eq!(multiply(1, 5), 5);
        assert_eq!(multiply(11, 10), 78);
        assert_eq!(multiply(241, 3), 8);
        assert_eq!(multiply(125, 168), 24);
        // FIPS-197 worked example: 0x57 * 0x83 = 0xc1
        assert_eq!(multiply(0x57, 0x83), 0xc1);
    }

    #[test]
    fn test_multiply_commutes() {
        for x in [0u8, 1, 2, 3, 0x1b, 0x53, 0xca, 0xff] {
            for y in [0u8, 1, 2, 3, 0x1b, 0x53, 0xca, 0xff] {
                assert_eq!(multiply(x, y), multiply(y, x));
            }
        }
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(0), 0);
        assert_eq!(invert(1), 1);
        assert_eq!(invert(20), 153);
        assert_eq!(invert(233), 78);
        assert_eq!(invert(113), 183);
    }

    #[test]
    fn test_invert_is_inverse() {
        for n in 1..=255u8 {
            assert_eq!(multiply(n, invert(n)), 1, "failed for {n}");
        }
    }

    #[test]
    fn test_matrix_multiply_identity() {
        let a = vec![vec![2, 3], vec![5, 7]];
        let identity = vec![vec![1, 0], vec![0, 1]];

        assert_eq!(matrix_multiply(&a, &identity), Ok(a.clone()));
        assert_eq!(matrix_multiply(&identity, &a), Ok(a));
    }

    #[test]
    fn test_matrix_multiply_dimension_mismatch() {
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![1, 2], vec![3, 4]];

        assert!(matrix_multiply(&a, &b).is_err());
        assert!(matrix_multiply(&a, &[]).is_err());
    }

    #[test]
    fn test_matrix_multiply_rectangular() {
        // (2 x 3) * (3 x 2) gives a 2 x 2 product
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![1, 0], vec![0, 1], vec![1, 1]];

        let product = matrix_multiply(&a, &b).unwrap();
        assert_eq!(
            product,
            vec![vec![add(1, 3), add(2, 3)], vec![add(4, 6), add(5, 6)]]
        );
    }
}
