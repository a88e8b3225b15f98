//! Throughput benchmark for the transition engine and timeline replay

use std::time::Instant;

use episim::domain::{ForestFire, Life, Parameters, Rule, SimError, Timeline};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Average ms per freshly computed generation
fn benchmark_compute<R: Rule>(rule: R, size: usize, iterations: u32) -> Result<f64, SimError> {
    let rng = StdRng::seed_from_u64(42);
    let mut timeline = Timeline::create(size, size, rule, Parameters::default(), rng)?;

    let start = Instant::now();
    for _ in 0..iterations {
        timeline.step_forward()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Average ms per forward step over already cached generations
fn benchmark_replay(size: usize, iterations: u32) -> Result<f64, SimError> {
    let rng = StdRng::seed_from_u64(42);
    let mut timeline = Timeline::create(size, size, ForestFire, Parameters::default(), rng)?;
    for _ in 0..iterations {
        timeline.step_forward()?;
    }
    for _ in 0..iterations {
        timeline.step_backward();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        timeline.step_forward()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), SimError> {
    println!("=== episim Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>14}",
        "Size", "Forest", "Life", "Replay", "Forest cells/s"
    );
    println!("{:-<64}", "");

    for size in sizes {
        let forest_ms = benchmark_compute(ForestFire, size, iterations)?;
        let life_ms = benchmark_compute(Life, size, iterations)?;
        let replay_ms = benchmark_replay(size, iterations)?;
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.4} {:>13.1}M",
            format!("{}x{}", size, size),
            forest_ms,
            life_ms,
            replay_ms,
            cells / (forest_ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\nLife switches to parallel stepping at 256x256 and above.");
    Ok(())
}
