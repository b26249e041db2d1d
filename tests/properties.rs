//! Invariants that must hold for every algorithm on every valid workload.

use std::num::NonZeroU32;

use cpu_sched::models::{Owner, Process};
use cpu_sched::scheduler::{Algorithm, Simulator};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0i64..15, 1i64..8, 0i32..4), 1..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32 + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn quantum() -> impl Strategy<Value = NonZeroU32> {
    (1u32..5).prop_map(|q| NonZeroU32::new(q).unwrap())
}

proptest! {
    #[test]
    fn every_process_runs_within_its_window(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            for p in &result.processes {
                let start = p.start_time.unwrap();
                let finish = p.finish_time.unwrap();
                prop_assert!(p.arrival_time >= 0);
                prop_assert!(start >= p.arrival_time, "{algorithm}: P{} starts before arrival", p.id);
                prop_assert!(finish > start);
                prop_assert_eq!(p.remaining_time, 0);
                if !algorithm.is_preemptive() {
                    prop_assert_eq!(finish - start, p.burst_time);
                }
            }
        }
    }

    #[test]
    fn work_is_conserved(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            for p in &processes {
                prop_assert_eq!(result.timeline.executed_time(p.id), p.burst_time);
            }
            let total: i64 = processes.iter().map(|p| p.burst_time).sum();
            prop_assert_eq!(result.timeline.busy_time(), total);
        }
    }

    #[test]
    fn timeline_tiles_makespan(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            prop_assert!(result.timeline.is_contiguous(), "{algorithm}: {}", result.timeline);
            let last_finish = result.processes.iter().filter_map(|p| p.finish_time).max().unwrap();
            prop_assert_eq!(result.timeline.makespan(), last_finish);
            prop_assert_eq!(
                result.kpi.total_idle_time + result.timeline.busy_time(),
                result.timeline.makespan()
            );
        }
    }

    #[test]
    fn merged_timeline_is_canonical(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let raw = Simulator::new()
                .with_merge(false)
                .simulate(&processes, &algorithm)
                .unwrap();
            let merged = Simulator::new().simulate(&processes, &algorithm).unwrap();
            prop_assert_eq!(&raw.timeline.merged(), &merged.timeline);
            prop_assert_eq!(&merged.timeline.merged(), &merged.timeline);
            for pair in merged.timeline.intervals.windows(2) {
                prop_assert!(pair[0].owner != pair[1].owner);
            }
        }
    }

    #[test]
    fn averages_are_means(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            let n = result.metrics.len() as f64;
            let waiting: i64 = result.metrics.iter().map(|m| m.waiting_time).sum();
            let turnaround: i64 = result.metrics.iter().map(|m| m.turnaround_time).sum();
            prop_assert!((result.average_waiting_time() - waiting as f64 / n).abs() < 1e-9);
            prop_assert!((result.average_turnaround_time() - turnaround as f64 / n).abs() < 1e-9);
            for m in &result.metrics {
                prop_assert_eq!(m.waiting_time, m.turnaround_time - m.burst_time);
                prop_assert!(m.waiting_time >= 0);
                prop_assert!(m.response_time <= m.waiting_time);
            }
        }
    }

    #[test]
    fn idle_only_when_nothing_is_ready(processes in workload(), q in quantum()) {
        for algorithm in Algorithm::all(q) {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            for interval in result.timeline.iter().filter(|i| i.owner == Owner::Idle) {
                // Nobody who arrived before the gap was still waiting
                for p in &result.processes {
                    if p.arrival_time <= interval.start {
                        prop_assert!(p.finish_time.unwrap() <= interval.start);
                    }
                }
                // The gap ends exactly at an arrival
                prop_assert!(result.processes.iter().any(|p| p.arrival_time == interval.end));
            }
        }
    }

    #[test]
    fn huge_quantum_round_robin_matches_fcfs(processes in workload()) {
        let simulator = Simulator::new();
        let fcfs = simulator.simulate(&processes, &Algorithm::Fcfs).unwrap();
        let rr = simulator
            .simulate(&processes, &Algorithm::round_robin(NonZeroU32::new(1_000).unwrap()))
            .unwrap();
        prop_assert_eq!(fcfs.timeline, rr.timeline);
    }

    #[test]
    fn fcfs_starts_in_arrival_order(processes in workload()) {
        let result = Simulator::new().simulate(&processes, &Algorithm::Fcfs).unwrap();
        let mut by_start: Vec<&Process> = result.processes.iter().collect();
        by_start.sort_by_key(|p| p.start_time);
        for pair in by_start.windows(2) {
            prop_assert!(pair[0].arrival_time <= pair[1].arrival_time);
            if pair[0].arrival_time == pair[1].arrival_time {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn non_preemptive_picks_first_best_in_arrival_order(processes in workload()) {
        let keyed: [(Algorithm, fn(&Process) -> i64); 4] = [
            (Algorithm::Fcfs, |p| p.arrival_time),
            (Algorithm::SjfNonPreemptive, |p| p.burst_time),
            (Algorithm::LjfNonPreemptive, |p| -p.burst_time),
            (Algorithm::PriorityNonPreemptive, |p| i64::from(p.priority)),
        ];
        for (algorithm, key) in keyed {
            let result = Simulator::new().simulate(&processes, &algorithm).unwrap();
            let rank = |i: usize| {
                let p = &result.processes[i];
                (key(p), p.arrival_time, i)
            };
            for (i, picked) in result.processes.iter().enumerate() {
                let start = picked.start_time.unwrap();
                // Everyone still waiting at the dispatch must rank behind the pick
                for (j, other) in result.processes.iter().enumerate() {
                    if other.arrival_time <= start && other.start_time.unwrap() > start {
                        prop_assert!(
                            rank(i) < rank(j),
                            "{algorithm}: P{} picked at t={start} over P{}",
                            picked.id,
                            other.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn input_is_never_mutated(processes in workload(), q in quantum()) {
        let snapshot = processes.clone();
        let _ = Simulator::new().compare(&processes, q).unwrap();
        prop_assert_eq!(processes, snapshot);
    }
}
