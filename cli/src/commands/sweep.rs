use std::net::IpAddr;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::Show;
use crate::terminal::{colors, print};
use sweepr_common::config::Config;
use sweepr_common::network::target::{self, Target};
use sweepr_common::{info, success};
use sweepr_core::sweep::{self, ProgressFn, SweepReport};

pub async fn sweep(target: Target, show: Show, cfg: &Config) -> anyhow::Result<()> {
    let collection = target::to_collection(target);
    let total = collection.len();
    info!("sweeping with {} workers", cfg.worker_count);

    let bar = progress_bar(total, cfg.quiet);
    let bar_ref = bar.clone();
    let on_probe_done: ProgressFn = Box::new(move |done| bar_ref.set_position(done as u64));

    let start_time: Instant = Instant::now();
    let report = sweep::perform_sweep(collection, cfg, Some(on_probe_done)).await?;
    bar.finish_and_clear();

    sweep_ends(&report, show, start_time.elapsed(), cfg);
    Ok(())
}

fn progress_bar(total: usize, q_level: u8) -> ProgressBar {
    if q_level > 0 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template("{spinner:.blue} probing {pos}/{len} hosts").unwrap();
    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn sweep_ends(report: &SweepReport, show: Show, total_time: Duration, cfg: &Config) {
    if report.total() == 0 {
        print::header("NOTHING TO SWEEP", cfg.quiet);
        return;
    }

    print::header("Sweep Results", cfg.quiet);

    if matches!(show, Show::Alive | Show::All) {
        if report.alive.is_empty() {
            print::no_results();
        } else {
            print_classified("alive", &report.alive, colors::ALIVE, cfg);
        }
    }

    if matches!(show, Show::Dead | Show::All) {
        print_classified("dead", &report.dead, colors::DEAD, cfg);
    }

    print_summary(report, total_time, cfg);
}

fn print_classified(label: &str, addrs: &[IpAddr], color: Color, cfg: &Config) {
    if cfg.quiet == 0 {
        print::status(format!("{} {} hosts", addrs.len(), label));
    }

    let mut sorted: Vec<IpAddr> = addrs.to_vec();
    sorted.sort();

    for addr in sorted {
        print::plain(&format!("{}", addr.to_string().color(color)));
    }
}

fn print_summary(report: &SweepReport, total_time: Duration, cfg: &Config) {
    let alive_count: ColoredString = format!("{} alive hosts", report.alive.len()).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!(
        "Sweep complete: {alive_count} of {} probed in {elapsed}",
        report.total()
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }
}
