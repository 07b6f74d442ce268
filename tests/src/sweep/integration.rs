#![cfg(test)]
use std::collections::HashSet;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sweepr_common::config::Config;
use sweepr_common::network::target::{self, Target};
use sweepr_core::probe::Prober;
use sweepr_core::sweep::{self, ProgressFn, SweepCoordinator};

/// Deterministic stand-in for the ping prober: hosts with an even last
/// octet answer, everything else stays silent.
struct EvenOctetProber;

#[async_trait]
impl Prober for EvenOctetProber {
    async fn probe(&self, addr: IpAddr) -> bool {
        match addr {
            IpAddr::V4(v4) => v4.octets()[3] % 2 == 0,
            IpAddr::V6(_) => false,
        }
    }
}

fn cfg(worker_count: usize) -> Config {
    Config {
        worker_count,
        ..Config::default()
    }
}

/// Drives the full pipeline a user hits: parse a range target, resolve it
/// to a collection, and sweep it with a pool wider than a single worker.
#[tokio::test]
async fn sweep_classifies_parsed_range() {
    let target = Target::from_str("10.20.0.1-32").expect("valid range target");
    let collection = target::to_collection(target);
    assert_eq!(collection.len(), 32);

    let coordinator =
        SweepCoordinator::with_prober(collection, &cfg(8), Arc::new(EvenOctetProber))
            .expect("valid config");
    let report = coordinator.run().await;

    assert_eq!(report.total(), 32);
    assert_eq!(report.alive.len(), 16);
    assert_eq!(report.dead.len(), 16);

    let alive: HashSet<IpAddr> = report.alive.iter().copied().collect();
    for addr in &report.dead {
        assert!(!alive.contains(addr), "{addr} classified both alive and dead");
    }
}

#[tokio::test]
async fn prefix_target_sweeps_conventional_subnet() {
    let target = Target::from_str("192.168.7").expect("valid prefix target");
    let collection = target::to_collection(target);
    assert_eq!(collection.len(), 254);

    let coordinator =
        SweepCoordinator::with_prober(collection, &cfg(16), Arc::new(EvenOctetProber))
            .expect("valid config");
    let report = coordinator.run().await;

    assert_eq!(report.total(), 254);
    assert_eq!(report.alive.len(), 127);
    assert_eq!(report.dead.len(), 127);
}

#[tokio::test]
async fn progress_callback_counts_every_probe() {
    let target = Target::from_str("10.9.0.1-20").expect("valid range target");
    let collection = target::to_collection(target);

    let seen_max = Arc::new(AtomicUsize::new(0));
    let seen_max_ref = Arc::clone(&seen_max);
    let on_probe_done: ProgressFn = Box::new(move |done| {
        seen_max_ref.fetch_max(done, Ordering::Relaxed);
    });

    let coordinator =
        SweepCoordinator::with_prober(collection, &cfg(4), Arc::new(EvenOctetProber))
            .expect("valid config")
            .on_probe_done(on_probe_done);
    let report = coordinator.run().await;

    assert_eq!(report.total(), 20);
    assert_eq!(seen_max.load(Ordering::Relaxed), 20);
}

#[tokio::test]
async fn comma_list_sweeps_every_part() {
    let target = Target::from_str("10.30.0.5, 10.30.0.10-13").expect("valid list target");
    let collection = target::to_collection(target);

    let coordinator =
        SweepCoordinator::with_prober(collection, &cfg(2), Arc::new(EvenOctetProber))
            .expect("valid config");
    let report = coordinator.run().await;

    assert_eq!(report.total(), 5);

    let alive: HashSet<String> = report.alive.iter().map(IpAddr::to_string).collect();
    let expected: HashSet<String> = ["10.30.0.10", "10.30.0.12"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(alive, expected);
}

/// Uses the stock ping prober against loopback. Only the completeness of
/// the report is asserted: whether loopback answers depends on the
/// environment the tests run in.
#[tokio::test]
async fn stock_prober_sweep_classifies_loopback_range() {
    let target = Target::from_str("127.0.0.1-2").expect("valid loopback range");
    let collection = target::to_collection(target);

    let report = sweep::perform_sweep(collection, &cfg(2), None)
        .await
        .expect("sweep runs");

    assert_eq!(report.total(), 2);
}
