// demos/demo.rs
use chrono::{DateTime, TimeZone, Utc};
use gbm_sim::earnings;
use gbm_sim::estimate;
use gbm_sim::output;
use gbm_sim::{simulate, SimConfig};
use statrs::statistics::Statistics;
use std::time::Instant;

fn main() {
    println!("Running gbm-sim Demo\n");

    // 30 one-year daily paths, flat drift, the classic textbook setup.
    let cfg = SimConfig {
        drift: 0.0,
        volatility: 0.2,
        horizon: 1.0,
        steps: 252,
        paths: 30,
        initial_price: 100.0,
        seed: 42,
    };

    let start = Instant::now();
    let paths = simulate(&cfg).expect("Valid configuration");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let terminal = paths.terminal_prices();
    let terminal_mean = terminal.iter().mean();
    let terminal_min = terminal.iter().copied().fold(f64::INFINITY, f64::min);
    let terminal_max = terminal.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    println!(
        "Simulated {} paths x {} steps in {:.2} ms",
        paths.num_paths(),
        paths.num_steps(),
        elapsed_ms
    );
    println!(
        "Terminal prices: mean {:.2}, min {:.2}, max {:.2}\n",
        terminal_mean, terminal_min, terminal_max
    );

    output::write_paths_csv("gbm_paths.csv", &paths).expect("Could not write CSV");
    output::write_summary_csv(
        "gbm_summary.csv",
        &[
            ("paths", cfg.paths.to_string()),
            ("steps", cfg.steps.to_string()),
            ("drift", cfg.drift.to_string()),
            ("volatility", cfg.volatility.to_string()),
            ("terminal_mean", format!("{:.4}", terminal_mean)),
        ],
    )
    .expect("Could not write CSV");
    println!("Paths written to gbm_paths.csv, summary to gbm_summary.csv\n");

    // Fit the generating parameters back out of the first simulated path.
    let first_path = paths.path(0).to_vec();
    let fitted = estimate::estimate_gbm(&first_path, cfg.dt()).expect("Valid close series");
    let normality = estimate::return_normality(&first_path).expect("Valid close series");
    println!(
        "Fitted from path 0: mu {:.4}, sigma {:.4} ({} returns)",
        fitted.mu, fitted.sigma, fitted.n_returns
    );
    println!(
        "Return normality: JB {:.3}, p-value {:.3}\n",
        normality.jarque_bera, normality.p_value
    );

    // Earnings windows from a provider-style newest-first date list.
    let announcement_dates: Vec<DateTime<Utc>> = vec![
        Utc.with_ymd_and_hms(2023, 10, 24, 20, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 7, 25, 20, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 4, 25, 20, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 1, 24, 21, 0, 0).unwrap(),
    ];
    let now = Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap();

    let past = earnings::past_dates(&announcement_dates, now);
    println!("Past earnings announcements as of {}:", now.format("%Y-%m-%d"));
    for window in earnings::windows(&past) {
        println!(
            "  window {} -> {}",
            window.start.format("%Y-%m-%d"),
            window.end.format("%Y-%m-%d")
        );
    }
}
