use super::{PlotConfig, SampleWindow};
use crate::error::Result;
use crate::primitives::Point2;
use crate::simplify::Epsilon;
use log::debug;
use num_traits::Float;
use std::fmt;

/// The traces recorded by the respiration belt and pulse sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    Air1,
    Air2,
    Air3,
    Pulse,
}

impl Channel {
    /// Every channel, in column order.
    pub const ALL: [Channel; 4] = [Channel::Air1, Channel::Air2, Channel::Air3, Channel::Pulse];

    /// Short name used as the series label.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Air1 => "air1",
            Channel::Air2 => "air2",
            Channel::Air3 => "air3",
            Channel::Pulse => "pulse",
        }
    }

    fn slot(self) -> usize {
        match self {
            Channel::Air1 => 0,
            Channel::Air2 => 1,
            Channel::Air3 => 2,
            Channel::Pulse => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One sample window per [`Channel`], advanced together row by row.
///
/// # Example
///
/// ```
/// use wavethin::series::{Channel, PlotConfig, WaveformFrame};
///
/// let config = PlotConfig { samples: 4, ..PlotConfig::default() };
/// let mut frame = WaveformFrame::<f64>::new(&config).unwrap();
/// frame.push_row([1.0, 2.0, 3.0, 70.0]);
///
/// assert_eq!(frame.window(Channel::Air2).get(0), Some(2.0));
/// // Pulse is hidden by default, so it records zero.
/// assert_eq!(frame.window(Channel::Pulse).get(0), Some(0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WaveformFrame<F> {
    windows: [SampleWindow<F>; 4],
    show_pulse: bool,
}

impl<F: Float> WaveformFrame<F> {
    /// Creates a zeroed frame sized and configured from `config`.
    ///
    /// The config is checked with [`PlotConfig::validate`] first, so an
    /// out-of-range tolerance or zero sample count is rejected here rather
    /// than clamped later.
    pub fn new(config: &PlotConfig) -> Result<Self> {
        config.validate()?;
        let window = SampleWindow::with_capacity(config.samples)?;
        Ok(Self {
            windows: [window.clone(), window.clone(), window.clone(), window],
            show_pulse: config.show_pulse,
        })
    }

    /// Returns the window for one channel.
    #[inline]
    pub fn window(&self, channel: Channel) -> &SampleWindow<F> {
        &self.windows[channel.slot()]
    }

    /// Samples kept per channel.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.windows[0].capacity()
    }

    /// Returns `true` while the pulse channel records readings.
    #[inline]
    pub fn show_pulse(&self) -> bool {
        self.show_pulse
    }

    /// Turns pulse recording on or off. Either way the pulse trace is zeroed.
    pub fn set_show_pulse(&mut self, show: bool) {
        debug!("pulse trace {}", if show { "shown" } else { "hidden" });
        self.show_pulse = show;
        self.windows[Channel::Pulse.slot()].clear();
    }

    /// Appends one reading per channel, in [`Channel::ALL`] order.
    pub fn push_row(&mut self, row: [F; 4]) {
        for channel in Channel::ALL {
            let value = if channel == Channel::Pulse && !self.show_pulse {
                F::zero()
            } else {
                row[channel.slot()]
            };
            self.windows[channel.slot()].push(value);
        }
    }

    /// Zeroes every trace.
    pub fn clear(&mut self) {
        debug!("clearing {} samples per channel", self.capacity());
        self.windows.iter_mut().for_each(SampleWindow::clear);
    }

    /// Simplifies every trace with the same tolerance.
    pub fn simplified(&self, epsilon: Epsilon<F>) -> Vec<(Channel, Vec<Point2<F>>)> {
        Channel::ALL
            .iter()
            .map(|&channel| (channel, self.window(channel).simplified(epsilon)))
            .collect()
    }
}
