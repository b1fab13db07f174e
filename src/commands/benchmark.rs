//! Benchmark command
//!
//! Plays random games against the dictionary and checks every search:
//! the secret must always be among the hits, and the parallel filter must
//! agree with a plain sequential scan.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::search::feedback::{Clues, score};
use crate::search::{admits, filter};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Hit-count buckets reported in the distribution, by inclusive upper bound
pub const HIT_BUCKETS: [(usize, &str); 5] = [
    (1, "1"),
    (5, "2-5"),
    (20, "6-20"),
    (50, "21-50"),
    (usize::MAX, "51+"),
];

/// How the benchmark draws its games
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of random secrets
    pub trials: usize,
    /// Random guesses scored against each secret
    pub guesses: usize,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub seed: u64,
    pub trials: usize,
    pub guesses_per_trial: usize,
    /// Searches whose result did not contain the secret
    pub missed: usize,
    /// Searches where the parallel and sequential scans disagreed
    pub inconsistent: usize,
    /// Clue sets the accumulator rejected
    pub conflicts: usize,
    pub total_hits: usize,
    pub min_hits: usize,
    pub max_hits: usize,
    pub average_hits: f64,
    /// Trial count per entry of [`HIT_BUCKETS`]
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

impl BenchmarkResult {
    /// True when no search missed, disagreed or conflicted
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.missed == 0 && self.inconsistent == 0 && self.conflicts == 0
    }
}

/// Index into [`HIT_BUCKETS`] for a hit count
#[must_use]
pub fn bucket_of(hits: usize) -> usize {
    HIT_BUCKETS
        .iter()
        .position(|&(upper, _)| hits <= upper)
        .unwrap_or(HIT_BUCKETS.len() - 1)
}

/// Run the benchmark over the dictionary
pub fn run_benchmark(dictionary: &Dictionary, config: BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.trials as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut missed = 0;
    let mut inconsistent = 0;
    let mut conflicts = 0;
    let mut total_hits = 0;
    let mut min_hits = usize::MAX;
    let mut max_hits = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();

    for _ in 0..config.trials {
        let Some(secret) = dictionary.words().choose(&mut rng) else {
            break;
        };

        let mut clues = Clues::new();
        for _ in 0..config.guesses {
            if let Some(guess) = dictionary.words().choose(&mut rng) {
                clues.add(guess, &score(guess, secret));
            }
        }

        let constraints = match clues.into_constraints() {
            Ok(constraints) => constraints,
            Err(err) => {
                conflicts += 1;
                pb.println(format!("conflict for {secret}: {err}"));
                pb.inc(1);
                continue;
            }
        };

        let hits = filter(dictionary, &constraints);
        let sequential: Vec<&Word> = dictionary
            .words()
            .iter()
            .filter(|w| admits(w, &constraints))
            .collect();

        if !hits.contains(&secret) {
            missed += 1;
            pb.println(format!("secret {secret} missing for {constraints:?}"));
        }
        if hits != sequential {
            inconsistent += 1;
        }

        total_hits += hits.len();
        min_hits = min_hits.min(hits.len());
        max_hits = max_hits.max(hits.len());
        *distribution.entry(bucket_of(hits.len())).or_insert(0) += 1;

        pb.set_message(format!("{secret}: {} hits", hits.len()));
        pb.inc(1);
    }

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let searched = total_searches(&distribution);

    BenchmarkResult {
        seed,
        trials: config.trials,
        guesses_per_trial: config.guesses,
        missed,
        inconsistent,
        conflicts,
        total_hits,
        min_hits: if searched == 0 { 0 } else { min_hits },
        max_hits,
        average_hits: if searched == 0 {
            0.0
        } else {
            total_hits as f64 / searched as f64
        },
        distribution,
        duration,
        searches_per_second: searched as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn total_searches(distribution: &BTreeMap<usize, usize>) -> usize {
    distribution.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(trials: usize, guesses: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            trials,
            guesses,
            seed: Some(seed),
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_passes_on_embedded_dictionary() {
        let dict = Dictionary::embedded().unwrap();
        let result = run_benchmark(&dict, config(100, 2, 7));

        assert!(result.passed(), "{result:?}");
        assert_eq!(result.trials, 100);
        assert!(result.min_hits >= 1);
        assert!(result.max_hits <= dict.len());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dict = Dictionary::embedded().unwrap();
        let result = run_benchmark(&dict, config(40, 3, 11));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum + result.conflicts, result.trials);
    }

    #[test]
    fn same_seed_same_result() {
        let dict = Dictionary::embedded().unwrap();
        let a = run_benchmark(&dict, config(25, 2, 42));
        let b = run_benchmark(&dict, config(25, 2, 42));

        assert_eq!(a.seed, 42);
        assert_eq!(a.total_hits, b.total_hits);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn no_guesses_match_whole_dictionary() {
        let dict = Dictionary::embedded().unwrap();
        let result = run_benchmark(&dict, config(3, 0, 1));

        assert_eq!(result.min_hits, dict.len());
        assert_eq!(result.max_hits, dict.len());
    }

    #[test]
    fn zero_trials() {
        let dict = Dictionary::embedded().unwrap();
        let result = run_benchmark(&dict, config(0, 2, 1));

        assert_eq!(result.total_hits, 0);
        assert_eq!(result.min_hits, 0);
        assert!(result.passed());
    }

    #[test]
    fn buckets() {
        assert_eq!(bucket_of(1), 0);
        assert_eq!(bucket_of(5), 1);
        assert_eq!(bucket_of(6), 2);
        assert_eq!(bucket_of(50), 3);
        assert_eq!(bucket_of(51), 4);
        assert_eq!(bucket_of(10_000), 4);
    }
}
