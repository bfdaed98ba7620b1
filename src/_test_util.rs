use std::collections::BTreeSet;

use rand::Rng;
use rug::{integer::Order, Integer};

use crate::{rec::point::Point, traits::Zero};

const MAX_COEFF_U64_POW: usize = 2;

/// Share set with four consistent shares of `f(x) = x^2 + 3`
pub const SAMPLE_SHARES_JSON: &str = r#"{
    "keys": {
        "n": 4,
        "k": 3
    },
    "1": {
        "base": "10",
        "value": "4"
    },
    "2": {
        "base": "2",
        "value": "111"
    },
    "3": {
        "base": "10",
        "value": "12"
    },
    "6": {
        "base": "4",
        "value": "213"
    }
}"#;

pub const SAMPLE_SECRET: &str = "3";

/// Share set with ten shares of a degree-six polynomial
///
/// The shares with index 2 and 8 are corrupted.
pub const LARGE_SHARES_JSON: &str = r#"{
    "keys": {
        "n": 10,
        "k": 7
    },
    "1": {
        "base": "6",
        "value": "13444211440455345511"
    },
    "2": {
        "base": "15",
        "value": "aed7015a346d635"
    },
    "3": {
        "base": "15",
        "value": "6aeeb69631c227c"
    },
    "4": {
        "base": "16",
        "value": "e1b5e05623d881f"
    },
    "5": {
        "base": "8",
        "value": "316034514573652620673"
    },
    "6": {
        "base": "3",
        "value": "2122212201122002221120200210011020220200"
    },
    "7": {
        "base": "3",
        "value": "20120221122211000100210021102001201112121"
    },
    "8": {
        "base": "6",
        "value": "20220554335330240002224253"
    },
    "9": {
        "base": "12",
        "value": "45153788322a1255483"
    },
    "10": {
        "base": "7",
        "value": "1101613130313526312514143"
    }
}"#;

pub const LARGE_SECRET: &str = "79836264049851";

/// Random integer with up to `MAX_COEFF_U64_POW` 64-bit limbs and random sign
pub fn rand_int(mut rng: impl Rng) -> Integer {
    let len = rng.gen_range(1..=MAX_COEFF_U64_POW);
    let parts = Vec::from_iter((0..len).map(|_| rng.gen::<u64>()));
    let int = Integer::from_digits(&parts, Order::Lsf);
    if rng.gen() {
        int
    } else {
        -int
    }
}

/// `n` pairwise distinct random integers
pub fn rand_distinct_ints(n: usize, mut rng: impl Rng) -> Vec<Integer> {
    let mut seen = BTreeSet::new();
    let mut res = Vec::with_capacity(n);
    while res.len() < n {
        let int = rand_int(&mut rng);
        if seen.insert(int.clone()) {
            res.push(int);
        }
    }
    res
}

/// Coefficients of a random polynomial with the given degree
///
/// The coefficient of `x^i` is at position `i`.
pub fn rand_poly(degree: usize, mut rng: impl Rng) -> Vec<Integer> {
    Vec::from_iter((0..=degree).map(|_| rand_int(&mut rng)))
}

pub fn eval_poly(coeff: &[Integer], x: &Integer) -> Integer {
    coeff.iter().rev().fold(Integer::zero(), |acc, c| acc * x + c)
}

/// Points `(x, f(x))` for `x = 1, ..., n`
pub fn shares(coeff: &[Integer], n: usize) -> Vec<Point> {
    Vec::from_iter((1..=n).map(|x| {
        let x = Integer::from(x);
        let y = eval_poly(coeff, &x);
        Point { x, y }
    }))
}

/// Add a random non-zero offset to the values of the points at the given positions
pub fn corrupt(pts: &mut [Point], pos: &[usize], mut rng: impl Rng) {
    for &i in pos {
        let mut offset = Integer::zero();
        while offset.is_zero() {
            offset = rand_int(&mut rng);
        }
        pts[i].y += offset;
    }
}
