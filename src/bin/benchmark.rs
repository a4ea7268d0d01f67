//! Compare serial and rayon generation updates across grid sizes

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use bounded_life::Automaton;

fn seeded(size: usize) -> Automaton {
    let mut automaton = Automaton::new(size, size);
    automaton.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    automaton
}

fn benchmark(size: usize, iterations: u32, step: fn(&mut Automaton)) -> f64 {
    let mut automaton = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut automaton);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Update Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Automaton::update);
        let parallel_ms = benchmark(size, iterations, Automaton::update_parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    // Both update paths must agree
    let mut serial = seeded(300);
    let mut parallel = seeded(300);
    for _ in 0..10 {
        serial.update();
        parallel.update_parallel();
    }
    let agree = serial
        .iter_cells()
        .zip(parallel.iter_cells())
        .all(|(a, b)| a == b);
    println!("\nSerial/parallel agreement after 10 generations: {}", agree);
}
