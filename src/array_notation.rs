use anyhow::bail;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

pub const PRIME_CEILING: u64 = 53;

pub const PRIMES: [u64; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Exponent of each of `PRIMES` in `number`. Factors above `PRIME_CEILING` are
/// dropped.
pub fn factor_array(number: u64) -> anyhow::Result<[i32; 16]> {
    if number == 0 {
        bail!("Cannot factor 0");
    }
    let mut exponents = [0; 16];
    let mut remaining = number;
    for (i, prime) in PRIMES.iter().enumerate() {
        while remaining % prime == 0 {
            exponents[i] += 1;
            remaining /= prime;
        }
    }
    if remaining > 1 {
        warn!("{number} has a factor {remaining} above {PRIME_CEILING}; ignoring it");
    }
    Ok(exponents)
}

/// `numerator / denominator` as a vector of prime exponents, 2 first.
pub fn array_notation(
    numerator: u64,
    denominator: u64,
    strip_trailing_zeroes: bool,
) -> anyhow::Result<Vec<i32>> {
    let num = factor_array(numerator)?;
    let den = factor_array(denominator)?;
    let mut result = num
        .iter()
        .zip(den.iter())
        .map(|(n, d)| n - d)
        .collect::<Vec<_>>();
    if strip_trailing_zeroes {
        while result.last() == Some(&0) {
            result.pop();
        }
    }
    Ok(result)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ratio {
    pub numerator: u64,
    pub denominator: u64,
}

impl Ratio {
    pub fn array_notation(&self, strip_trailing_zeroes: bool) -> anyhow::Result<Vec<i32>> {
        array_notation(self.numerator, self.denominator, strip_trailing_zeroes)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Accepts `3/2` or a bare integer such as `5`, which is read as `5/1`.
impl FromStr for Ratio {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = match s.trim().split_once('/') {
            Some((n, d)) => (n.trim().parse::<u64>()?, d.trim().parse::<u64>()?),
            None => (s.trim().parse::<u64>()?, 1),
        };
        if numerator == 0 || denominator == 0 {
            bail!("\"{s}\" needs a nonzero numerator and denominator");
        }
        Ok(Ratio {
            numerator,
            denominator,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{array_notation, factor_array, Ratio, PRIMES, PRIME_CEILING};

    #[test]
    fn test_factor_array() {
        let mut expected = [0; 16];
        expected[0] = 2;
        expected[1] = 1;
        assert_eq!(factor_array(12).unwrap(), expected);
        assert_eq!(factor_array(1).unwrap(), [0; 16]);
        let mut expected = [0; 16];
        expected[15] = 1;
        assert_eq!(factor_array(PRIME_CEILING).unwrap(), expected);
        assert_eq!(factor_array(1024).unwrap()[0], 10);
        assert!(factor_array(0).is_err());
    }

    #[test]
    fn test_large_factors_ignored() {
        assert_eq!(factor_array(59).unwrap(), [0; 16]);
        let mut expected = [0; 16];
        expected[0] = 1;
        assert_eq!(factor_array(2 * 59 * 61).unwrap(), expected);
    }

    #[test]
    fn test_every_prime() {
        let product = PRIMES.iter().take(12).product::<u64>();
        let exponents = factor_array(product).unwrap();
        println!("{product}: {exponents:?}");
        assert!(exponents[..12].iter().all(|e| *e == 1));
        assert!(exponents[12..].iter().all(|e| *e == 0));
    }

    #[test]
    fn test_array_notation() {
        assert_eq!(array_notation(3, 2, true).unwrap(), vec![-1, 1]);
        assert_eq!(array_notation(7, 8, true).unwrap(), vec![-3, 0, 0, 1]);
        assert_eq!(array_notation(81, 80, true).unwrap(), vec![-4, 4, -1]);
        assert_eq!(array_notation(1, 1, true).unwrap(), Vec::<i32>::new());
        assert_eq!(array_notation(6, 6, true).unwrap(), Vec::<i32>::new());
        let full = array_notation(3, 2, false).unwrap();
        assert_eq!(full.len(), 16);
        assert_eq!(&full[..3], &[-1, 1, 0]);
        assert!(array_notation(0, 2, true).is_err());
    }

    #[test]
    fn test_ratio() {
        let ratio: Ratio = "3/2".parse().unwrap();
        assert_eq!(ratio, Ratio { numerator: 3, denominator: 2 });
        assert_eq!(ratio.to_string(), "3/2");
        assert_eq!(ratio.array_notation(true).unwrap(), vec![-1, 1]);
        assert_eq!("5".parse::<Ratio>().unwrap().array_notation(true).unwrap(), vec![0, 0, 1]);
        assert!("3/0".parse::<Ratio>().is_err());
        assert!("three halves".parse::<Ratio>().is_err());
        assert!("3/2/1".parse::<Ratio>().is_err());
    }
}
