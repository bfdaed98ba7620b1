use rug::Integer;

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl Zero for Integer {
    fn zero() -> Self {
        <Integer as num_traits::Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}

impl One for Integer {
    fn one() -> Self {
        <Integer as num_traits::One>::one()
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}
