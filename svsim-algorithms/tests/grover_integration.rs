//! Grover search behaviour over many seeded runs

use rand::rngs::StdRng;
use rand::SeedableRng;
use svsim_algorithms::{
    estimate_success_rate, optimal_iterations, run_trials, GroverSearch, SimulatorConfig,
};
use svsim_noise::{NoiseConfig, NoiseModel};

#[test]
fn test_three_qubit_search_succeeds_empirically() {
    let config = SimulatorConfig::debug().with_trials(1000);
    let mut rng = config.rng();
    let grover = GroverSearch::new(3).unwrap();

    for target in [0, 3, 7] {
        let rate = estimate_success_rate(&grover, target, config.trials, &mut rng).unwrap();
        assert!(rate >= 0.9, "target {} rate {}", target, rate);
    }
}

#[test]
fn test_over_iteration_reduces_success() {
    let grover = GroverSearch::new(3).unwrap();
    let optimal = optimal_iterations(3, 1);
    let best = grover.success_probability(&[4]).unwrap();

    // sin²((2k+1)θ) with sin θ = 1/√8 falls to ~0.33 at k = 3 and ~0.01 at k = 4
    let past = grover.clone().with_iterations(optimal + 2);
    assert!(past.success_probability(&[4]).unwrap() < 0.1);

    let mut rng = StdRng::seed_from_u64(17);
    let optimal_rate = estimate_success_rate(&grover, 4, 500, &mut rng).unwrap();
    let over_rate = estimate_success_rate(&past, 4, 500, &mut rng).unwrap();
    assert!(over_rate < optimal_rate);
    assert!(best > 0.9);
}

#[test]
fn test_success_is_non_monotonic_in_iterations() {
    let grover = GroverSearch::new(5).unwrap();
    let curve: Vec<f64> = (0..10)
        .map(|k| grover.clone().with_iterations(k).success_probability(&[13]).unwrap())
        .collect();

    let peak = curve
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(k, _)| k)
        .unwrap();
    assert_eq!(peak, optimal_iterations(5, 1));
    assert!(curve[9] < curve[peak]);
}

#[test]
fn test_multi_target_search() {
    let mut rng = StdRng::seed_from_u64(5);
    let grover = GroverSearch::new(4).unwrap();
    // M/N = 2/16 behaves like a single target among 8
    let targets = [2, 9];
    let hits = (0..300)
        .filter(|_| targets.contains(&grover.search_many(&targets, &mut rng).unwrap()))
        .count();
    assert!(hits >= 265, "hits {}", hits);
    assert!(grover.success_probability(&targets).unwrap() > 0.9);
}

#[test]
fn test_oracle_search_finds_a_solution() {
    let mut rng = StdRng::seed_from_u64(6);
    let grover = GroverSearch::new(5).unwrap();
    // exactly one solution: 21
    let oracle = |idx: usize| idx * idx % 32 == 25 && idx % 7 == 0;
    assert_eq!((0..32).filter(|&i| oracle(i)).collect::<Vec<_>>(), vec![21]);

    // the predicate form runs round((π/4)/θ) = 2 rounds here
    let iterations = svsim_algorithms::oracle_iterations(5, 1);
    assert_eq!(iterations, 2);
    let expected = grover
        .clone()
        .with_iterations(iterations)
        .success_probability(&[21])
        .unwrap();

    let trials = 400;
    let hits = (0..trials)
        .filter(|_| grover.search_with_oracle(oracle, &mut rng).unwrap() == 21)
        .count();
    let rate = hits as f64 / trials as f64;
    assert!((rate - expected).abs() < 0.1, "rate {} expected {}", rate, expected);
    // far above the uniform 1/32
    assert!(rate > 0.4);
}

#[test]
fn test_noise_degrades_search() {
    let grover = GroverSearch::new(3).unwrap();
    let ideal = NoiseModel::ideal();
    let noisy = NoiseModel::new(NoiseConfig::high_noise()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let count = |model: &NoiseModel, rng: &mut StdRng| {
        (0..400)
            .filter(|_| grover.search_with_noise(6, model, rng).unwrap() == 6)
            .count()
    };
    let ideal_hits = count(&ideal, &mut rng);
    let noisy_hits = count(&noisy, &mut rng);
    assert!(noisy_hits < ideal_hits, "noisy {} vs ideal {}", noisy_hits, ideal_hits);
}

#[test]
fn test_run_trials_summary() {
    let mut rng = StdRng::seed_from_u64(8);
    let grover = GroverSearch::new(3).unwrap();
    let summary = run_trials(&grover, 1, 400, &mut rng).unwrap();
    assert_eq!(summary.trials, 400);
    assert!(summary.success_rate() > 0.88);
    assert!(summary.standard_error() < 0.02);
}
