#![allow(
    clippy::unwrap_used,
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "Essential for examples: unwrap for simplicity, stdout for demonstration"
)]
//! Curve Sampler
//!
//! Compiles a formula once and samples it across an interval the way a
//! plotter would: real samples become points, complex samples also get an
//! imaginary trace, and undefined samples break the curve into segments.
//!
//! Run with: cargo run --example `sample_curve` -- "sqrt(x) * sin(x)" -6 6 25

use complex_plot_expr::{Expression, ParseError};
use std::env;
use std::process::ExitCode;

fn report(text: &str, err: &ParseError) {
    eprintln!("error: {err}");
    eprintln!("  {text}");
    if let Some(pos) = err.position() {
        eprintln!("  {}^", " ".repeat(pos));
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let text = args.first().map_or("sqrt(x) * sin(x)", String::as_str);
    let from: f64 = args.get(1).map_or(-6.0, |s| s.parse().unwrap());
    let to: f64 = args.get(2).map_or(6.0, |s| s.parse().unwrap());
    let steps: u32 = args.get(3).map_or(24, |s| s.parse().unwrap());

    let mut expr = match Expression::new(text) {
        Ok(expr) => expr,
        Err(err) => {
            report(text, &err);
            return ExitCode::FAILURE;
        }
    };

    println!("f(x) = {expr}");
    println!("rpn:   {}", expr.program());
    println!("stack: {} slots", expr.program().stack_size());
    println!();
    println!("{:>10}  {:>14}  {:>14}", "x", "Re f(x)", "Im f(x)");

    let mut segments = 0;
    let mut in_segment = false;
    for i in 0..=steps {
        let x = from + (to - from) * f64::from(i) / f64::from(steps);
        let y = expr.evaluate(x);

        if y.is_nan() {
            println!("{x:>10.4}  {:>14}  {:>14}", "-", "-");
            in_segment = false;
            continue;
        }
        if !in_segment {
            segments += 1;
            in_segment = true;
        }

        if y.is_real() {
            println!("{x:>10.4}  {:>14.6}  {:>14}", y.re(), "");
        } else {
            println!("{x:>10.4}  {:>14.6}  {:>14.6}", y.re(), y.im());
        }
    }

    println!();
    println!("{segments} continuous segment(s)");
    ExitCode::SUCCESS
}
