//! Fans a Legendre evaluation grid across a rayon pool.
//!
//! Run with: cargo run --example legendre_sweep --release

use rayon::prelude::*;
use specfun::prelude::*;

type D = Dec<101>;

fn main() {
    let v = D::from_ratio(1, 3);
    let u = D::from_ratio(1, 7);

    let results: Vec<(i64, Result<D>)> = (1..100i64)
        .into_par_iter()
        .map(|k| (k, legendre_q(&v, &u, &D::from_ratio(k, 100))))
        .collect();

    for (k, outcome) in &results {
        match outcome {
            Ok(value) => println!("Q(1/3, 1/7, {k}/100) = {value}"),
            Err(err) => println!("Q(1/3, 1/7, {k}/100) failed: {err}"),
        }
    }
}
