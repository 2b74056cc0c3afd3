//! Process sets for demos and experiments.
//!
//! [`demo_processes`] is the classroom default set. [`WorkloadSpec`]
//! generates random sets with Bernoulli arrivals: at every tick a process
//! arrives with probability `p_arrival`, and is short with probability
//! `p_short`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// The default five-process set: `P1(1,7) P2(3,12) P3(5,6) P4(8,9) P5(10,5)`
/// as `(arrival, service)`.
pub fn demo_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 1, 7),
        Process::new("P2", 3, 12),
        Process::new("P3", 5, 6),
        Process::new("P4", 8, 9),
        Process::new("P5", 10, 5),
    ]
}

/// Parameters of a random workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of ticks during which processes may arrive.
    pub ticks: i64,
    /// Probability that a process arrives at a given tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Probability that an arriving process is short (0.0..=1.0).
    pub p_short: f64,
    /// Service time of short processes.
    pub short_service: i64,
    /// Service time of long processes.
    pub long_service: i64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_service: 2,
            long_service: 6,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec over the given number of ticks with default rates.
    pub fn new(ticks: i64) -> Self {
        Self {
            ticks,
            ..Default::default()
        }
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_rate(mut self, p_arrival: f64) -> Self {
        self.p_arrival = p_arrival;
        self
    }

    /// Sets the probability of a short process.
    pub fn with_short_rate(mut self, p_short: f64) -> Self {
        self.p_short = p_short;
        self
    }

    /// Sets short and long service times.
    pub fn with_services(mut self, short_service: i64, long_service: i64) -> Self {
        self.short_service = short_service;
        self.long_service = long_service;
        self
    }

    /// Generates processes named `P1..Pn` in arrival order.
    ///
    /// Probabilities outside `0.0..=1.0` are clamped.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let p_arrival = self.p_arrival.clamp(0.0, 1.0);
        let p_short = self.p_short.clamp(0.0, 1.0);
        let mut processes = Vec::new();

        for t in 0..self.ticks.max(0) {
            if rng.random_bool(p_arrival) {
                let service = if rng.random_bool(p_short) {
                    self.short_service
                } else {
                    self.long_service
                };
                let id = format!("P{}", processes.len() + 1);
                processes.push(Process::new(id, t, service));
            }
        }

        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_processes_valid() {
        let procs = demo_processes();
        assert_eq!(procs.len(), 5);
        assert!(validate_processes(&procs).is_ok());
    }

    #[test]
    fn test_generate_deterministic_for_seed() {
        let spec = WorkloadSpec::new(100);
        let a = spec.generate(&mut StdRng::seed_from_u64(7));
        let b = spec.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_shape() {
        let spec = WorkloadSpec::new(200)
            .with_arrival_rate(0.5)
            .with_short_rate(0.5)
            .with_services(1, 9);
        let procs = spec.generate(&mut StdRng::seed_from_u64(42));

        assert!(!procs.is_empty());
        assert!(validate_processes(&procs).is_ok());
        assert!(procs.windows(2).all(|w| w[0].arrival < w[1].arrival));
        assert!(procs.iter().all(|p| p.service == 1 || p.service == 9));
        assert!(procs.iter().all(|p| (0..200).contains(&p.arrival)));
        assert_eq!(procs[0].id, "P1");
    }

    #[test]
    fn test_generate_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let none = WorkloadSpec::new(30).with_arrival_rate(0.0).generate(&mut rng);
        assert!(none.is_empty());

        let all = WorkloadSpec::new(30)
            .with_arrival_rate(1.5) // clamped to 1.0
            .with_short_rate(1.0)
            .generate(&mut rng);
        assert_eq!(all.len(), 30);
        assert!(all.iter().all(|p| p.service == 2));
    }
}
