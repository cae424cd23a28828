//! Throughput comparison of the serial and parallel steppers

use std::time::Instant;

use automata_lab::domain::clamp_u32;
use automata_lab::{Algorithm, EdgeMode, RuleKind, Simulation, SimulationConfig};

fn benchmark(rule: RuleKind, algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let config = SimulationConfig::new(rule, size, size, EdgeMode::Wrap, clamp_u32(size as i64));
    let mut sim = Simulation::new(config);
    sim.set_algorithm(algorithm);
    sim.randomize(None);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Automaton Stepper Benchmark ===\n");

    let sizes = [128, 256, 512, 1024, 2048];
    let iterations = 20;

    for rule in [RuleKind::Life, RuleKind::BriansBrain] {
        println!("{}", rule.name());
        println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
        println!("{:-<48}", "");

        for size in sizes {
            let serial_ms = benchmark(rule, Algorithm::Serial, size, iterations);
            let parallel_ms = benchmark(rule, Algorithm::Parallel, size, iterations);

            println!(
                "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
        println!();
    }

    // The ant rule mutates one cell per generation; report it for scale
    let size = 1024;
    let ant_ms = benchmark(RuleKind::LangtonsAnt, Algorithm::Serial, size, 200);
    println!("{} at {}x{}: {:.3} ms/gen", RuleKind::LangtonsAnt.name(), size, size, ant_ms);
}
