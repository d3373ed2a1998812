//! Solves an equation given on the command line and prints its roots.
//!
//! # Usage
//!
//! ```text
//! cargo run --example solve -- "x^3+2x^2+x+1=0"
//! RUST_LOG=debug cargo run --example solve -- "x^2+3=1"
//! ```
//!
//! With `RUST_LOG=debug`, each solver decision (degree dispatch, discriminant
//! branch, coercion) is logged as it happens.

use polyroot::{Config, solve_with};
use polyroot_observers::LogObserver;

fn main() {
    env_logger::init();

    let Some(equation) = std::env::args().nth(1) else {
        eprintln!("Usage: solve <equation>");
        eprintln!("Example: solve \"x^3+x^2+3=3+x-2x^2\"");
        std::process::exit(1);
    };

    let solution = solve_with(&equation, &Config::default(), LogObserver::default());

    if let Some(error) = &solution.error {
        eprintln!("{error}");
        if solution.is_empty() {
            std::process::exit(1);
        }
    }

    for x in &solution.real_roots {
        println!("x = {x}");
    }
    for z in &solution.complex_roots {
        println!("x = {} {} {}i", z.re, if z.im < 0.0 { '-' } else { '+' }, z.im.abs());
    }
}
