//! fastWlr Batch Regression Examples
//!
//! This example demonstrates:
//! - Parallel batch fitting of a large dataset
//! - Sequential fallback
//! - `ndarray` integration
//! - Reading degenerate fits from the result

use fastWlr::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), WlrError> {
    println!("{}", "=".repeat(80));
    println!("fastWlr Batch Regression Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_degenerate_fit()?;

    Ok(())
}

fn synthetic(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
    let y_err: Vec<f64> = (0..n).map(|i| 0.1 + (i % 10) as f64 * 0.02).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 3.0 * xi - 1.0 + ((i % 7) as f64 - 3.0) * 0.01)
        .collect();
    (x, y, y_err)
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution() -> Result<(), WlrError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let (x, y, y_err) = synthetic(n);

    let start = Instant::now();
    let model = Wlr::<f64>::new().adapter(Batch).build()?;
    let result = model.fit(&x, &y, &y_err)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Same fit with parallelism disabled
fn example_2_sequential_fallback() -> Result<(), WlrError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let (x, y, y_err) = synthetic(n);

    let start = Instant::now();
    let model = Wlr::<f64>::new().adapter(Batch).parallel(false).build()?;
    let result = model.fit(&x, &y, &y_err)?;
    let duration = start.elapsed();

    println!("Processed {} points in {:?}", n, duration);
    println!("slope = {:.6} ± {:.2e}", result.slope, result.slope_err);

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
fn example_3_ndarray_integration() -> Result<(), WlrError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let x = Array1::from_vec(vec![1.0, 2.0, 4.0, 8.0, 7.0]);
    let y = Array1::from_vec(vec![10.0, 11.0, 9.0, 7.0, 12.0]);
    let y_err = Array1::from_vec(vec![0.1, 0.2, 0.1, 0.2, 0.4]);

    let result = Wlr::<f64>::new().adapter(Batch).build()?.fit(&x, &y, &y_err)?;

    println!("{}", result);
    for xi in [0.0, 5.0, 10.0] {
        println!(
            "  y({xi:>4}) = {:.4} ± {:.4}",
            result.predict(xi),
            result.prediction_err(xi)
        );
    }

    println!();
    Ok(())
}

/// Example 4: Degenerate Fit
/// All x values identical: no error, but sentinel values in the result
fn example_4_degenerate_fit() -> Result<(), WlrError> {
    println!("Example 4: Degenerate Fit");
    println!("{}", "-".repeat(80));

    let result = regress(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &[0.5, 0.5, 0.5])?;

    println!("vertical: {}", result.is_vertical());
    println!("degenerate: {}", result.is_degenerate());
    println!("{}", result);

    println!();
    Ok(())
}
