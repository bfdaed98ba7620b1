use std::borrow::Borrow;

use log::trace;
use rug::{ops::NegAssign, Integer};
use thiserror::Error;

use crate::{
    algebra::rat::Rat,
    rec::point::Point,
    traits::{One, Zero},
};

#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LagrangeError {
    #[error("Need at least one point for interpolation")]
    Empty,
    #[error("Points with duplicate abscissa x = {0}")]
    DuplicateAbscissa(Integer),
    #[error("Interpolation yields non-integer value {0} at zero")]
    NonIntegerResult(Rat),
}

/// Evaluate the interpolating polynomial through `pts` at zero
///
/// For `k` points with pairwise distinct abscissae `x_i` this is
/// ```text
///     f(0) = \sum_i y_i \prod_{j≠i} (0 - x_j) / (x_i - x_j)
/// ```
/// computed exactly. The result has to be an integer.
pub fn interpolate_at_zero<P: Borrow<Point>>(
    pts: &[P],
) -> Result<Integer, LagrangeError> {
    if pts.is_empty() {
        return Err(LagrangeError::Empty);
    }
    let mut res = Rat::zero();
    for (i, pt_i) in pts.iter().map(Borrow::<Point>::borrow).enumerate() {
        let mut num = pt_i.y.clone();
        let mut den = Integer::one();
        let pts_j = pts.iter().map(Borrow::<Point>::borrow);
        for (j, pt_j) in pts_j.enumerate() {
            if i == j {
                continue;
            }
            num *= &pt_j.x;
            num.neg_assign();
            den *= Integer::from(&pt_i.x - &pt_j.x);
        }
        let term = Rat::new(num, den)
            .map_err(|_| LagrangeError::DuplicateAbscissa(pt_i.x.clone()))?;
        trace!("Lagrange term for {pt_i}: {term}");
        res = res + term;
    }
    res.into_integer().map_err(LagrangeError::NonIntegerResult)
}

#[cfg(test)]
mod tests {
    use ::rand::{seq::SliceRandom, Rng, SeedableRng};
    use log::debug;

    use super::*;
    use crate::_test_util::{eval_poly, rand_distinct_ints, rand_poly};

    const NTESTS: usize = 200;
    const MAX_POINTS: usize = 12;

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn pts(pts: &[(i64, i64)]) -> Vec<Point> {
        pts.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn quadratic() {
        log_init();
        let res = interpolate_at_zero(&pts(&[(1, 4), (2, 7), (3, 12)]));
        assert_eq!(res, Ok(Integer::from(3)));
    }

    #[test]
    fn any_three_of_four() {
        log_init();
        let all = pts(&[(1, 4), (2, 7), (3, 12), (6, 39)]);
        for skip in 0..all.len() {
            let mut subset = all.clone();
            subset.remove(skip);
            assert_eq!(interpolate_at_zero(&subset), Ok(Integer::from(3)));
        }
    }

    #[test]
    fn single_point() {
        let res = interpolate_at_zero(&pts(&[(5, -17)]));
        assert_eq!(res, Ok(Integer::from(-17)));
    }

    #[test]
    fn empty() {
        assert_eq!(
            interpolate_at_zero::<Point>(&[]),
            Err(LagrangeError::Empty)
        );
    }

    #[test]
    fn duplicate_abscissa() {
        let res = interpolate_at_zero(&pts(&[(1, 4), (2, 7), (1, 5)]));
        assert_eq!(res, Err(LagrangeError::DuplicateAbscissa(1.into())));
        let res = interpolate_at_zero(&pts(&[(2, 7), (2, 7)]));
        assert_eq!(res, Err(LagrangeError::DuplicateAbscissa(2.into())));
    }

    #[test]
    fn non_integer() {
        log_init();
        let res = interpolate_at_zero(&pts(&[(1, 1), (3, 2)]));
        let half = Rat::new(1.into(), 2.into()).unwrap();
        assert_eq!(res, Err(LagrangeError::NonIntegerResult(half)));
    }

    #[test]
    fn large_shares() {
        log_init();
        let xy = [
            (1, "995085094601491"),
            (3, "196563650089608567"),
            (4, "1016509518118225951"),
            (5, "3711974121218449851"),
            (6, "10788619898233492461"),
            (7, "26709394976508342463"),
            (9, "117852986202006511971"),
        ];
        let pts = Vec::from_iter(
            xy.iter()
                .map(|(x, y)| Point::new(*x, y.parse::<Integer>().unwrap())),
        );
        let res = interpolate_at_zero(&pts).unwrap();
        assert_eq!(res, "79836264049851".parse::<Integer>().unwrap());
    }

    #[test]
    fn random_polynomials() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..NTESTS {
            let k = rng.gen_range(1..=MAX_POINTS);
            let poly = rand_poly(k - 1, &mut rng);
            debug!("polynomial coefficients: {poly:?}");
            let xs = rand_distinct_ints(k, &mut rng);
            let mut pts = Vec::from_iter(
                xs.into_iter().map(|x| {
                    let y = eval_poly(&poly, &x);
                    Point { x, y }
                }),
            );
            assert_eq!(interpolate_at_zero(&pts).as_ref(), Ok(&poly[0]));
            pts.shuffle(&mut rng);
            assert_eq!(interpolate_at_zero(&pts).as_ref(), Ok(&poly[0]));
        }
    }
}
