//! Randomized checks of the simplification guarantees on seeded traces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wavethin::simplify::{rdp_indices, Epsilon};
use wavethin::tolerance::{max_deviation, max_deviation_points};
use wavethin::{simplify, simplify_indices, Point2};

const TOLERANCES: [f64; 7] = [0.0, 0.01, 0.1, 0.5, 2.0, 10.0, 100.0];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A breathing-like trace: slow oscillation, a heartbeat ripple and noise.
fn breathing_trace(rng: &mut StdRng, len: usize) -> Vec<Point2<f64>> {
    let phase: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    (0..len)
        .map(|i| {
            let t = i as f64;
            let breath = 200.0 * (t / 80.0 + phase).sin();
            let ripple = 5.0 * (t / 6.0).sin();
            let noise: f64 = rng.gen_range(-0.5..0.5);
            Point2::new(t, breath + ripple + noise)
        })
        .collect()
}

/// Arbitrary points, including repeats and backtracking in x.
fn scattered(rng: &mut StdRng, len: usize) -> Vec<Point2<f64>> {
    let mut points: Vec<Point2<f64>> = (0..len)
        .map(|_| Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)))
        .collect();
    if len > 4 {
        points[len / 2] = points[len / 2 - 1];
    }
    points
}

fn traces() -> Vec<Vec<Point2<f64>>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut all = Vec::new();
    for len in [0, 1, 2, 3, 5, 17, 100, 1000] {
        all.push(breathing_trace(&mut rng, len));
        all.push(scattered(&mut rng, len));
    }
    all
}

fn is_subsequence(sub: &[Point2<f64>], of: &[Point2<f64>]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|p| rest.any(|q| q == p))
}

#[test]
fn short_inputs_are_returned_unchanged() {
    init_logging();
    for points in traces().into_iter().filter(|p| p.len() <= 2) {
        for eps in TOLERANCES {
            assert_eq!(simplify(&points, eps).unwrap(), points);
        }
    }
}

#[test]
fn output_is_subsequence_with_same_endpoints() {
    init_logging();
    for points in traces() {
        for eps in TOLERANCES {
            let result = simplify(&points, eps).unwrap();
            assert!(result.len() <= points.len());
            assert!(is_subsequence(&result, &points));
            assert_eq!(result.first(), points.first());
            assert_eq!(result.last(), points.last());
        }
    }
}

#[test]
fn indices_are_strictly_ascending() {
    init_logging();
    for points in traces() {
        let indices = simplify_indices(&points, 0.5).unwrap();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        if points.len() >= 2 {
            assert_eq!(indices[0], 0);
            assert_eq!(*indices.last().unwrap(), points.len() - 1);
        }
    }
}

#[test]
fn larger_tolerance_never_keeps_more() {
    init_logging();
    for points in traces() {
        let mut previous: Option<Vec<usize>> = None;
        for eps in TOLERANCES {
            let kept = simplify_indices(&points, eps).unwrap();
            if let Some(prev) = &previous {
                assert!(kept.len() <= prev.len());
                // Coarser results only drop points from finer ones
                assert!(kept.iter().all(|i| prev.contains(i)));
            }
            previous = Some(kept);
        }
    }
}

#[test]
fn dropped_points_stay_within_tolerance() {
    init_logging();
    for points in traces() {
        for eps in TOLERANCES {
            let kept = rdp_indices(&points, Epsilon::new(eps).unwrap());
            assert!(
                max_deviation(&points, &kept) <= eps,
                "deviation exceeds {} on {} points",
                eps,
                points.len()
            );

            let simplified = simplify(&points, eps).unwrap();
            let dev = max_deviation_points(&points, &simplified).unwrap();
            assert!(dev <= eps);
        }
    }
}

#[test]
fn results_are_deterministic() {
    init_logging();
    for points in traces() {
        assert_eq!(simplify(&points, 2.0).unwrap(), simplify(&points, 2.0).unwrap());
    }
}

#[test]
fn smooth_breathing_is_reduced() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    let points = breathing_trace(&mut rng, 1000);
    let result = simplify(&points, 2.0).unwrap();
    assert!(result.len() < points.len() / 2, "kept {}", result.len());
}
