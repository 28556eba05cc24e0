//! Integration tests for u-tsp.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp::construct::{Constructor, GreedyEdge, NearestNeighbor};
use u_tsp::edges::EdgeCatalog;
use u_tsp::io::{parse_points, write_tour};
use u_tsp::pipeline::{Algorithm, Solver, SolverConfig};
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tour::Tour;
use u_tsp::two_opt::{TwoOptConfig, TwoOptRunner};
use u_tsp::TspError;

const UNIT_SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];

fn random_coords(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect()
}

mod construction_tests {
    use super::*;

    #[test]
    fn test_unit_square_nearest_neighbor() {
        let mut tour = Tour::new(UNIT_SQUARE);
        NearestNeighbor.build(&mut tour).unwrap();
        assert_eq!(tour.order(), vec![0, 1, 2, 3]);
        assert_eq!(tour.total_distance(), 4);
    }

    #[test]
    fn test_unit_square_greedy_edge() {
        let mut tour = Tour::new(UNIT_SQUARE);
        GreedyEdge.build(&mut tour).unwrap();
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.total_distance(), 4);
    }

    #[test]
    fn test_three_collinear_points_rejected() {
        let coords = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        for constructor in [&NearestNeighbor as &dyn Constructor, &GreedyEdge] {
            let mut tour = Tour::new(coords);
            let err = constructor.build(&mut tour).unwrap_err();
            assert!(
                matches!(err, TspError::TooFewPoints { found: 3, required: 4 }),
                "{} accepted 3 points",
                constructor.name()
            );
        }
    }

    #[test]
    fn test_greedy_never_longer_than_twice_nearest_on_random() {
        // both are heuristics; this only guards against a broken selection
        for seed in 0..3 {
            let coords = random_coords(200, seed);
            let mut nearest = Tour::new(coords.iter().copied());
            NearestNeighbor.build(&mut nearest).unwrap();
            let mut greedy = Tour::new(coords.iter().copied());
            GreedyEdge.build(&mut greedy).unwrap();
            assert!(greedy.total_distance() < 2 * nearest.total_distance());
        }
    }

    #[test]
    fn test_catalog_covers_all_pairs() {
        let tour = Tour::new(random_coords(30, 4));
        let catalog = EdgeCatalog::new(&tour);
        assert_eq!(catalog.len(), 30 * 29 / 2);
        let dists: Vec<i64> = catalog.iter().map(|e| e.dist).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }
}

mod improvement_tests {
    use super::*;

    #[test]
    fn test_heal_is_idempotent() {
        let mut tour = Tour::new(random_coords(12, 5));
        GreedyEdge.build(&mut tour).unwrap();
        let closed = tour.clone();
        tour.heal();
        tour.heal();
        assert_eq!(tour, closed);
    }

    #[test]
    fn test_annealing_zero_budget() {
        let mut tour = Tour::new(random_coords(100, 6));
        GreedyEdge.build(&mut tour).unwrap();
        let before = tour.clone();
        let distance = tour.total_distance();

        let config = SaConfig::default().with_max_iterations(0);
        let result = SaRunner::run(&mut tour, &config).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(tour, before);
        assert_eq!(tour.total_distance(), distance);
    }

    #[test]
    fn test_two_opt_variants_agree_on_monotonicity() {
        let coords = random_coords(120, 7);
        for config in [TwoOptConfig::exhaustive(500), TwoOptConfig::nearest(500, 15)] {
            let mut tour = Tour::new(coords.iter().copied());
            NearestNeighbor.build(&mut tour).unwrap();
            let start = tour.total_distance();
            let result = TwoOptRunner::run(&mut tour, &config).unwrap();
            assert!(tour.is_valid_cycle());
            assert!(result.final_distance <= start);
            assert!(result.iterations <= config.max_iterations);
        }
    }

    #[test]
    fn test_full_chain_stays_valid() {
        let mut tour = Tour::new(random_coords(150, 8));
        GreedyEdge.build(&mut tour).unwrap();
        let greedy = tour.total_distance();
        TwoOptRunner::run(&mut tour, &TwoOptConfig::nearest(10_000, 30)).unwrap();
        let two_opt = tour.total_distance();
        let result =
            SaRunner::run(&mut tour, &SaConfig::guided(30).with_max_iterations(5000).with_seed(1))
                .unwrap();

        assert!(tour.is_valid_cycle());
        assert!(two_opt <= greedy);
        assert!(result.best_distance <= two_opt);
        assert_eq!(tour.total_distance(), result.best_distance);
    }

    #[test]
    fn test_duplicate_points_are_fine() {
        let mut coords = random_coords(20, 9);
        let copy = coords.clone();
        coords.extend(copy);
        let mut tour = Tour::new(coords);
        GreedyEdge.build(&mut tour).unwrap();
        TwoOptRunner::run(&mut tour, &TwoOptConfig::exhaustive(1000)).unwrap();
        SaRunner::run(&mut tour, &SaConfig::default().with_max_iterations(2000).with_seed(2))
            .unwrap();
        assert!(tour.is_valid_cycle());
    }
}

mod pipeline_tests {
    use super::*;

    fn run(input: &str, algorithm: Algorithm) -> String {
        let points = parse_points(input).unwrap();
        let tour = Solver::new(SolverConfig::new(algorithm).with_seed(42))
            .solve(&points)
            .unwrap();
        let mut out = Vec::new();
        write_tour(&tour, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unit_square_end_to_end() {
        let input = "4\n0 0\n0 1\n1 1\n1 0\n";
        assert_eq!(run(input, Algorithm::Nearest), "0\n1\n2\n3\n");
        for algorithm in [Algorithm::Greedy, Algorithm::GreedyTwoOpt] {
            let lines = run(input, algorithm);
            assert_eq!(lines.lines().count(), 4);
            assert!(lines.starts_with("0\n"));
        }
    }

    #[test]
    fn test_tiny_inputs() {
        assert_eq!(run("0", Algorithm::default()), "");
        assert_eq!(run("1\n5 5", Algorithm::default()), "0\n");
        assert_eq!(run("2\n0 0\n1 1", Algorithm::default()), "0\n1\n");
        assert_eq!(run("3\n0 0\n1 0\n2 0", Algorithm::default()), "0\n1\n2\n");
    }

    #[test]
    fn test_output_is_permutation() {
        let coords = random_coords(75, 10);
        let input = std::iter::once(coords.len().to_string())
            .chain(coords.iter().map(|(x, y)| format!("{x} {y}")))
            .collect::<Vec<_>>()
            .join("\n");

        for algorithm in [Algorithm::NearestTwoOptAnneal, Algorithm::BestOf] {
            let mut indices: Vec<usize> =
                run(&input, algorithm).lines().map(|l| l.parse().unwrap()).collect();
            assert_eq!(indices[0], 0);
            indices.sort_unstable();
            assert_eq!(indices, (0..75).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(parse_points("3\n0 0\n1 1\n").is_err());
        assert!(parse_points("1\nnan 0\n").is_err());
    }
}
