use std::fmt::{self, Display};

use rug::Integer;

/// A sampling point `(x, f(x))` of the secret polynomial
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    /// Abscissa, i.e. the share index
    pub x: Integer,
    /// Polynomial value at `x`
    pub y: Integer,
}

impl Point {
    pub fn new(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
