// demos/greeks_demo.rs
use bs_greeks::analytics::{compute_all, OptionInputs};

fn main() {
    // Canonical at-the-money scenario: S=100, K=100, r=5%, vol=20%, 1 year
    let inputs = OptionInputs::default();

    let report = compute_all(&inputs).expect("Valid default scenario");
    println!("{}", report);
}
