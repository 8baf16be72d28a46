//! Thins a synthetic respiration recording at several tolerances.
//!
//! Run with: RUST_LOG=info cargo run --example waveform

use log::{info, warn};
use wavethin::series::{Channel, PlotConfig, WaveformFrame, DEFAULT_EPSILON};
use wavethin::tolerance::max_deviation_points;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = PlotConfig {
        show_pulse: true,
        ..PlotConfig::default()
    };

    let mut frame = match WaveformFrame::<f64>::new(&config) {
        Ok(frame) => frame,
        Err(err) => {
            warn!("cannot build frame: {err}");
            return;
        }
    };

    // One and a half windows, so the traces have scrolled
    for i in 0..config.samples * 3 / 2 {
        let t = i as f64;
        let chest = 300.0 * (t / 90.0).sin() + 4.0 * (t / 5.0).sin();
        let belly = 220.0 * (t / 90.0 + 0.4).sin();
        let nose = 60.0 * (t / 45.0).sin().signum() * (t / 45.0).sin().abs().sqrt();
        let pulse = 80.0 * (t / 12.0).sin().powi(9);
        frame.push_row([chest, belly, nose, pulse]);
    }

    for eps in [0.0, 0.5, DEFAULT_EPSILON, 10.0, 150.0] {
        config.set_epsilon(eps);
        info!("epsilon {} (requested {})", config.epsilon, eps);

        for (channel, trace) in frame.simplified(config.epsilon()) {
            let original = frame.window(channel).points();
            let deviation = max_deviation_points(&original, &trace).unwrap_or(f64::NAN);
            info!(
                "  {:>5}: {:>4} -> {:>4} points, max deviation {:.3}",
                channel,
                original.len(),
                trace.len(),
                deviation
            );
        }
    }

    let filled = frame.window(Channel::Pulse).filled();
    info!("pulse window filled with {filled} readings");
}
