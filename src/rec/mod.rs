/// Lagrange interpolation at zero
pub mod lagrange;
/// Majority vote over all threshold-sized subsets
pub mod majority;
/// Sampling points of the secret polynomial
pub mod point;
/// Enumeration of fixed-size subsets
pub mod subsets;
