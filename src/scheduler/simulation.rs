//! Algorithm selection and complete simulation runs.
//!
//! A run is `schedule` followed by `compute_metrics` over the same process
//! set. Runs share no state, so any number of them can be computed
//! independently (e.g. FIFO and Round Robin side by side).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{compute_metrics, schedule_fifo, schedule_rr, SimulationMetrics};
use crate::models::{Process, Slice};
use crate::validation::{validate_input, ValidationError};

/// Round Robin quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 5;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// Non-preemptive first-in, first-out.
    #[default]
    Fifo,
    /// Preemptive Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous run before preemption.
        quantum: i64,
    },
}

impl Algorithm {
    /// Round Robin with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Algorithm::RoundRobin { quantum }
    }

    /// Short display name ("FIFO" or "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::RoundRobin { .. } => "RR",
        }
    }

    /// Runs the corresponding scheduler.
    pub fn schedule(&self, processes: &[Process]) -> Vec<Slice> {
        match *self {
            Algorithm::Fifo => schedule_fifo(processes),
            Algorithm::RoundRobin { quantum } => schedule_rr(processes, quantum),
        }
    }
}

/// Input container for a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes competing for the processor.
    pub processes: Vec<Process>,
    /// Discipline to simulate.
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a FIFO request over the given processes.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::Fifo,
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Discipline that produced the timeline.
    pub algorithm: Algorithm,
    /// Gantt sequence.
    pub slices: Vec<Slice>,
    /// Per-process metrics and averages.
    pub metrics: SimulationMetrics,
}

/// Runs a simulation without validating its input.
///
/// # Example
///
/// ```
/// use proc_sched::models::Process;
/// use proc_sched::scheduler::{simulate, Algorithm, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
/// ])
/// .with_algorithm(Algorithm::round_robin(2));
///
/// let sim = simulate(&request);
/// assert_eq!(sim.slices.len(), 5);
/// assert!((sim.metrics.average_waiting - 3.0).abs() < 1e-10);
/// ```
pub fn simulate(request: &SimulationRequest) -> Simulation {
    debug!(
        algorithm = request.algorithm.name(),
        processes = request.processes.len(),
        "simulation started"
    );

    let slices = request.algorithm.schedule(&request.processes);
    let metrics = compute_metrics(&slices, &request.processes);

    debug!(
        algorithm = request.algorithm.name(),
        slices = slices.len(),
        average_waiting = metrics.average_waiting,
        average_turnaround = metrics.average_turnaround,
        "simulation finished"
    );

    Simulation {
        algorithm: request.algorithm,
        slices,
        metrics,
    }
}

/// Validates the request, then runs it.
///
/// # Errors
/// Every problem found by [`validate_input`].
pub fn simulate_checked(request: &SimulationRequest) -> Result<Simulation, Vec<ValidationError>> {
    if let Err(errors) = validate_input(&request.processes, &request.algorithm) {
        debug!(errors = errors.len(), "simulation request rejected");
        return Err(errors);
    }
    Ok(simulate(request))
}

/// Runs each algorithm over the same process set.
///
/// Results are returned in the order of `algorithms`.
pub fn compare(processes: &[Process], algorithms: &[Algorithm]) -> Vec<Simulation> {
    algorithms
        .iter()
        .map(|&algorithm| {
            simulate(&SimulationRequest {
                processes: processes.to_vec(),
                algorithm,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::demo_processes;

    #[test]
    fn test_algorithm_dispatch() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        assert_eq!(Algorithm::Fifo.schedule(&procs), schedule_fifo(&procs));
        assert_eq!(
            Algorithm::round_robin(2).schedule(&procs),
            schedule_rr(&procs, 2)
        );
        assert_eq!(Algorithm::Fifo.name(), "FIFO");
        assert_eq!(Algorithm::round_robin(3).name(), "RR");
        assert_eq!(Algorithm::default(), Algorithm::Fifo);
    }

    #[test]
    fn test_simulate_fifo() {
        let request = SimulationRequest::new(Vec::new())
            .with_process(Process::new("P1", 0, 2))
            .with_process(Process::new("P2", 5, 2));
        let sim = simulate(&request);
        assert_eq!(sim.algorithm, Algorithm::Fifo);
        assert_eq!(
            sim.slices,
            vec![
                Slice::process("P1", 0, 2),
                Slice::idle(2, 5),
                Slice::process("P2", 5, 7),
            ]
        );
        assert!((sim.metrics.average_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_simulate_demo_set() {
        let procs = demo_processes();

        let fifo = simulate(&SimulationRequest::new(procs.clone()));
        // P1 1-8, P2 8-20, P3 20-26, P4 26-35, P5 35-40
        assert_eq!(fifo.metrics.makespan(), 40);
        assert_eq!(fifo.metrics.row("P5").unwrap().waiting, 25);
        // WT: 0 + 5 + 15 + 18 + 25 = 63
        assert!((fifo.metrics.average_waiting - 12.6).abs() < 1e-10);

        let rr = simulate(
            &SimulationRequest::new(procs).with_algorithm(Algorithm::round_robin(DEFAULT_QUANTUM)),
        );
        assert_eq!(rr.metrics.makespan(), 40);
        assert_eq!(rr.slices.first(), Some(&Slice::process("P1", 1, 6)));
    }

    #[test]
    fn test_simulate_checked_rejects() {
        let request = SimulationRequest::new(vec![Process::new("P1", 0, 1)])
            .with_algorithm(Algorithm::round_robin(0));
        let errors = simulate_checked(&request).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_simulate_checked_accepts() {
        let request = SimulationRequest::new(vec![Process::new("P1", 0, 4)]);
        let sim = simulate_checked(&request).unwrap();
        assert_eq!(sim.slices, vec![Slice::process("P1", 0, 4)]);
    }

    #[test]
    fn test_compare_runs_independently() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let runs = compare(&procs, &[Algorithm::Fifo, Algorithm::round_robin(2)]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].algorithm, Algorithm::Fifo);
        // FIFO: P1 WT 0, P2 WT 4
        assert!((runs[0].metrics.average_waiting - 2.0).abs() < 1e-10);
        assert!((runs[1].metrics.average_waiting - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_simulate_empty() {
        let sim = simulate(&SimulationRequest::default());
        assert!(sim.slices.is_empty());
        assert!(sim.metrics.rows.is_empty());
        assert!((sim.metrics.average_turnaround - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_request_json() {
        let json = r#"{
            "processes": [
                {"id": "P1", "arrival": 0, "service": 5},
                {"id": "P2", "arrival": 1, "service": 3}
            ],
            "algorithm": {"kind": "round_robin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::round_robin(2));
        assert_eq!(request.processes.len(), 2);

        let fifo: SimulationRequest =
            serde_json::from_str(r#"{"processes": [{"id": "P1", "arrival": 0, "service": 1}]}"#)
                .unwrap();
        assert_eq!(fifo.algorithm, Algorithm::Fifo);

        let out = serde_json::to_value(simulate(&request)).unwrap();
        assert_eq!(out["algorithm"]["kind"], "round_robin");
        assert_eq!(out["slices"].as_array().unwrap().len(), 5);
        assert_eq!(out["metrics"]["rows"][1]["turnaround"], 6);
    }
}
