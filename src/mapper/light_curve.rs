//! Synthetic light curve of the background star.
//!
//! A Gaussian bump of fixed width rides on a flat baseline. The bump's
//! centre moves linearly with the planet angle and its height is the
//! intensity; the sampling window itself never moves.

use crate::types::{
    BASELINE_BRIGHTNESS, BASE_PEAK_TIME, CURRENT_SAMPLE_INDEX, PEAK_WIDTH, SAMPLE_COUNT, TIME_END,
    TIME_START,
};

/// One point of the light curve.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurveSample {
    /// Virtual time
    pub t: f64,
    /// Brightness relative to the unlensed star
    pub brightness: f64,
}

/// Fixed-length sampled light curve.
#[derive(Clone, Debug, PartialEq)]
pub struct LightCurve {
    samples: [CurveSample; SAMPLE_COUNT],
    peak_time: f64,
    intensity: f64,
}

impl LightCurve {
    /// All samples in time order.
    pub fn samples(&self) -> &[CurveSample; SAMPLE_COUNT] {
        &self.samples
    }

    /// The highlighted sample, always the midpoint of the time axis.
    ///
    /// This is not the curve maximum; see [`LightCurve::max_brightness`].
    pub fn current(&self) -> CurveSample {
        self.samples[CURRENT_SAMPLE_INDEX]
    }

    /// Centre of the bump, possibly outside the sampled window.
    pub fn peak_time(&self) -> f64 {
        self.peak_time
    }

    /// Amplitude of the bump.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Largest sampled brightness.
    pub fn max_brightness(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.brightness)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Time of the `i`-th sample: `TIME_START..=TIME_END` in `SAMPLE_COUNT` points.
#[inline]
pub fn sample_time(i: usize) -> f64 {
    let span = TIME_END - TIME_START;
    TIME_START + span * i as f64 / (SAMPLE_COUNT - 1) as f64
}

/// Shift of the peak along the time axis: the full circle spans the window.
#[inline]
pub fn time_offset(angle_deg: f64) -> f64 {
    (angle_deg / 360.0) * (TIME_END - TIME_START)
}

/// Centre of the brightness bump for a given angle. Not clamped.
#[inline]
pub fn peak_time(angle_deg: f64) -> f64 {
    BASE_PEAK_TIME + time_offset(angle_deg)
}

/// Brightness at virtual time `t` for a bump centred on `peak`.
#[inline]
pub fn brightness_at(t: f64, peak: f64, intensity: f64) -> f64 {
    let dt = t - peak;
    BASELINE_BRIGHTNESS + intensity * (-(dt * dt) / (2.0 * PEAK_WIDTH * PEAK_WIDTH)).exp()
}

/// Sample the light curve for a planet angle and intensity.
pub fn synthesize(angle_deg: f64, intensity: f64) -> LightCurve {
    let peak = peak_time(angle_deg);

    let samples = std::array::from_fn(|i| {
        let t = sample_time(i);
        CurveSample {
            t,
            brightness: brightness_at(t, peak, intensity),
        }
    });

    LightCurve {
        samples,
        peak_time: peak,
        intensity,
    }
}
