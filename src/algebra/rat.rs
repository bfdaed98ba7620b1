use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Neg},
};

use rug::{ops::NegAssign, Integer};
use thiserror::Error;

use crate::traits::{One, Zero};

/// Exact fraction of arbitrary-precision integers
///
/// The fraction is always in lowest terms with a positive denominator.
/// Zero is `0/1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rat {
    num: Integer,
    den: Integer,
}

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RatError {
    #[error("Zero denominator")]
    ZeroDenominator,
}

impl Rat {
    /// Construct the fraction `num / den` in lowest terms
    pub fn new(num: Integer, den: Integer) -> Result<Self, RatError> {
        if den.is_zero() {
            return Err(RatError::ZeroDenominator);
        }
        Ok(Self::reduced(num, den))
    }

    pub fn num(&self) -> &Integer {
        &self.num
    }

    pub fn den(&self) -> &Integer {
        &self.den
    }

    /// Convert into an integer if the denominator is one
    ///
    /// Returns the unchanged fraction otherwise.
    pub fn into_integer(self) -> Result<Integer, Self> {
        if self.den.is_one() {
            Ok(self.num)
        } else {
            Err(self)
        }
    }

    // `den` must be non-zero
    fn reduced(mut num: Integer, mut den: Integer) -> Self {
        let g = gcd(&num, &den);
        debug_assert!(!g.is_zero());
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        if den.cmp0() == std::cmp::Ordering::Less {
            num.neg_assign();
            den.neg_assign();
        }
        Self { num, den }
    }
}

/// Greatest common divisor of the absolute values
///
/// `gcd(a, 0) == |a|`, in particular `gcd(0, 0) == 0`.
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    let mut a = a.clone().abs();
    let mut b = b.clone().abs();
    while !b.is_zero() {
        let rem = Integer::from(&a % &b);
        (a, b) = (b, rem);
    }
    a
}

impl Default for Rat {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rat {
    fn zero() -> Self {
        Self {
            num: Zero::zero(),
            den: One::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rat {
    fn one() -> Self {
        Self {
            num: One::one(),
            den: One::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl From<Integer> for Rat {
    fn from(num: Integer) -> Self {
        Self {
            num,
            den: One::one(),
        }
    }
}

impl<'a> Add<&'a Rat> for &'a Rat {
    type Output = Rat;

    fn add(self, rhs: &'a Rat) -> Self::Output {
        let num = Integer::from(&self.num * &rhs.den)
            + Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::reduced(num, den)
    }
}

impl Add for Rat {
    type Output = Rat;

    fn add(self, rhs: Rat) -> Self::Output {
        &self + &rhs
    }
}

impl<'a> Mul<&'a Rat> for &'a Rat {
    type Output = Rat;

    fn mul(self, rhs: &'a Rat) -> Self::Output {
        let num = Integer::from(&self.num * &rhs.num);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::reduced(num, den)
    }
}

impl Mul for Rat {
    type Output = Rat;

    fn mul(self, rhs: Rat) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for Rat {
    type Output = Rat;

    fn neg(mut self) -> Self::Output {
        self.num.neg_assign();
        self
    }
}

impl Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
