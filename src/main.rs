//! Timing and verification driver.
//!
//! Multiplies two deterministic test matrices with both the Strassen engine
//! and the cubic reference, checks the results agree elementwise, and
//! reports the elapsed time of each.
//!
//! ```bash
//! # 512x512 with verification (the defaults)
//! cargo run --release
//!
//! # 1000x1000 with verification
//! cargo run --release -- 1000
//!
//! # 2048x2048, Strassen timing only
//! cargo run --release -- 2048 0
//! ```

use std::env;
use std::process;
use std::time::Instant;

use strassen::{multiply, multiply_naive, SquareMatrix};

fn usage_exit(arg: &str) -> ! {
    eprintln!("invalid argument '{arg}'");
    eprintln!("usage: strassen [size] [verify]");
    eprintln!("  size    matrix dimension, default 512");
    eprintln!("  verify  1 to check against the cubic reference (default), 0 to skip");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = match args.get(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| usage_exit(arg)),
        None => 512,
    };
    let verification: bool = match args.get(2) {
        Some(arg) => match arg.as_str() {
            "0" => false,
            "1" => true,
            other => usage_exit(other),
        },
        None => true,
    };

    // Deterministic integer-valued inputs. Their products stay well inside
    // f64's exactly representable integer range, so both algorithms must
    // agree bit for bit.
    let a = SquareMatrix::from_fn(n, |i, _| i as f64);
    let b = SquareMatrix::from_fn(n, |_, j| j as f64);

    let mut reference = None;
    let mut reference_elapsed = None;
    if verification {
        let begin = Instant::now();
        let t = multiply_naive(&a, &b).expect("operands are the same size by construction");
        reference_elapsed = Some(begin.elapsed());
        reference = Some(t);
    }

    let begin = Instant::now();
    let c = multiply(&a, &b).expect("operands are the same size by construction");
    let strassen_elapsed = begin.elapsed();

    if let Some(t) = reference {
        for i in 0..n {
            for j in 0..n {
                if t[(i, j)] != c[(i, j)] {
                    eprintln!(
                        "ERROR: calculation result did not match at ({i}, {j}): \
                         correct is {}, and we got {}",
                        t[(i, j)],
                        c[(i, j)]
                    );
                    process::exit(1);
                }
            }
        }
        println!(
            "\nTraditional method spent {:.6} seconds for {n} x {n} matrices.",
            reference_elapsed
                .expect("reference timing recorded together with the reference product")
                .as_secs_f64()
        );
    }

    println!(
        "\nStrassen algorithm spent {:.6} seconds for {n} x {n} matrices.\n",
        strassen_elapsed.as_secs_f64()
    );
}
