//! Prints the roots of x^3 - 6x^2 + 11x - 6.
//!
//! Run with `RUST_LOG=eigenroots=debug` to see how the QR iteration ended.

use std::process::ExitCode;

use eigenroots::prelude::*;

fn main() -> ExitCode {
    env_logger::init();

    let coefficients = [1.0, -6.0, 11.0, -6.0];

    match find_roots(&coefficients) {
        Ok(roots) => {
            println!("Polynomial: {}", format_polynomial(&coefficients));
            println!("Roots: {}", format_roots(&roots));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
