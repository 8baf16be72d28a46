//! In-memory waveform traces ready for plotting.
//!
//! A live chart keeps a fixed number of recent samples per channel and
//! redraws them on every update. This module holds those samples and turns
//! them into simplified polylines; reading the device and drawing the chart
//! are left to the caller.

mod channel;
mod config;
mod window;

pub use channel::{Channel, WaveformFrame};
pub use config::{PlotConfig, DEFAULT_EPSILON, DEFAULT_SAMPLES, MAX_EPSILON};
pub use window::SampleWindow;
