//! fastWlr Streaming and Online Regression Examples
//!
//! This example demonstrates:
//! - Folding data in chunks with the streaming adapter
//! - Tracking a drifting relation with a sliding online window

use fastWlr::prelude::*;

fn main() -> Result<(), WlrError> {
    println!("{}", "=".repeat(80));
    println!("fastWlr Streaming and Online Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_streaming()?;
    example_2_online_window()?;

    Ok(())
}

/// Example 1: Streaming
/// Chunks arrive one by one; the fit covers everything seen so far
fn example_1_streaming() -> Result<(), WlrError> {
    println!("Example 1: Streaming");
    println!("{}", "-".repeat(80));

    let mut stream = Wlr::<f64>::new()
        .chunk_size(50_000)
        .adapter(Streaming)
        .build()?;

    for chunk in 0..10 {
        let x: Vec<f64> = (0..100_000).map(|i| (chunk * 100_000 + i) as f64 * 1e-5).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 0.5 * xi + 4.0).collect();
        let y_err = vec![0.2; x.len()];

        stream.process_chunk(&x, &y, &y_err)?;
        let current = stream.current();
        println!(
            "after chunk {:>2}: {:>8} points, slope = {:.6}",
            chunk + 1,
            stream.points(),
            current.slope
        );
    }

    println!("{}", stream.finalize());
    println!();
    Ok(())
}

/// Example 2: Online Window
/// Only the most recent samples contribute to the fit
fn example_2_online_window() -> Result<(), WlrError> {
    println!("Example 2: Online Window");
    println!("{}", "-".repeat(80));

    let mut online = Wlr::<f64>::new()
        .window_capacity(20)
        .min_points(5)
        .adapter(Online)
        .build()?;

    for i in 0..60 {
        let x = i as f64;
        // The slope changes from 1 to -1 halfway through
        let y = if i < 30 { x } else { 60.0 - x };

        if let Some(out) = online.add_point(x, y, 1.0) {
            if i % 10 == 9 {
                println!(
                    "t = {:>2}: slope = {:>7.3} over {} points",
                    i, out.result.slope, out.points
                );
            }
        }
    }

    println!();
    Ok(())
}
