//! Signal sampling, support detection and area estimation
//!
//! Two modes share one grid walk:
//! - **general**: an expression is sampled over a fixed search range, then
//!   the plotted domain is cut down to where the signal is non-negligible;
//! - **closed form**: the domain is computed from the pulse extents first
//!   and the pulses are sampled only there.
//!
//! # Example
//! ```
//! use signal_plot::Sampler;
//!
//! let result = Sampler::new().search_steps(2000).plot("rect(f)");
//! assert!(result.area > 0.9 && result.area < 1.2);
//! assert!(result.domain_min < -0.5 && result.domain_max > 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::closed_form::{SignalDescriptor, parse_formula};
use crate::error::ConfigError;
use crate::math::round_to;
use crate::parser::parse_with_limits;
use crate::signal::Signal;
use crate::traits::is_negligible;
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};

/// Upper bound on grid intervals in either mode
pub const MAX_STEPS: usize = 10_000_000;

/// One retained sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Everything a chart needs to draw one formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotResult {
    /// Finite samples, `x` strictly increasing
    pub points: Vec<SamplePoint>,
    pub domain_min: f64,
    pub domain_max: f64,
    /// Trapezoidal integral of `|y|`, rounded
    pub area: f64,
}

impl PlotResult {
    /// No points, zero area, and the given fallback window
    pub fn empty(domain: [f64; 2]) -> Self {
        PlotResult {
            points: Vec::new(),
            domain_min: domain[0],
            domain_max: domain[1],
            area: 0.0,
        }
    }

    /// Legend text, e.g. `S(f) [Area: 1.5]`
    pub fn label(&self) -> String {
        format!("S(f) [Area: {}]", self.area)
    }
}

/// Sampling and range-detection settings.
///
/// Defaults reproduce the behaviour documented on [`Sampler`]. Can be read
/// from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Lower bound of the general-mode search range. Default: -100.
    pub search_min: f64,
    /// Upper bound of the general-mode search range. Default: 100.
    pub search_max: f64,
    /// Grid intervals over the search range. Default: 8000.
    pub search_steps: usize,
    /// Grid intervals over a closed-form domain. Default: 4000.
    pub closed_form_steps: usize,
    /// |y| above this counts as signal. Default: 1e-4.
    pub threshold: f64,
    /// Detected spans narrower than this get the fixed padding. Default: 1.
    pub narrow_span: f64,
    /// Padding for narrow spans. Default: 5.
    pub narrow_padding: f64,
    /// Padding for wider spans, as a fraction of the span. Default: 0.15.
    pub padding_ratio: f64,
    /// Minimum closed-form padding. Default: 10.
    pub closed_form_min_padding: f64,
    /// Closed-form padding as a fraction of the span. Default: 0.2.
    pub closed_form_padding_ratio: f64,
    /// General-mode window when nothing exceeds the threshold. Default: [-10, 10].
    pub default_domain: [f64; 2],
    /// Closed-form window when there are no pulses. Default: [-30, 30].
    pub closed_form_default_domain: [f64; 2],
    /// Decimal places kept in the area. Default: 2.
    pub area_digits: u32,
    /// Parser nesting limit. Default: `DEFAULT_MAX_DEPTH`.
    pub max_depth: usize,
    /// Parser node limit. Default: `DEFAULT_MAX_NODES`.
    pub max_nodes: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            search_min: -100.0,
            search_max: 100.0,
            search_steps: 8000,
            closed_form_steps: 4000,
            threshold: 1e-4,
            narrow_span: 1.0,
            narrow_padding: 5.0,
            padding_ratio: 0.15,
            closed_form_min_padding: 10.0,
            closed_form_padding_ratio: 0.2,
            default_domain: [-10.0, 10.0],
            closed_form_default_domain: [-30.0, 30.0],
            area_digits: 2,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl SamplerConfig {
    /// Check every setting.
    ///
    /// The builder setters store values as given; sampling re-checks and
    /// falls back to the empty result when this fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.search_min, self.search_max);
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::InvalidRange { min, max });
        }
        for [lo, hi] in [self.default_domain, self.closed_form_default_domain] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(ConfigError::InvalidRange { min: lo, max: hi });
            }
        }
        for (field, steps) in [
            ("search_steps", self.search_steps),
            ("closed_form_steps", self.closed_form_steps),
        ] {
            if steps == 0 {
                return Err(ConfigError::ZeroSteps { field });
            }
            if steps > MAX_STEPS {
                return Err(ConfigError::TooManySteps {
                    field,
                    limit: MAX_STEPS,
                });
            }
        }
        let non_negative = [
            ("threshold", self.threshold),
            ("narrow_span", self.narrow_span),
            ("narrow_padding", self.narrow_padding),
            ("padding_ratio", self.padding_ratio),
            ("closed_form_min_padding", self.closed_form_min_padding),
            ("closed_form_padding_ratio", self.closed_form_padding_ratio),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SamplerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SamplerConfig::from_json`], reading from any `Read`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: SamplerConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder-style entry point for plotting formulas.
///
/// With the default configuration:
/// - general mode samples `[-100, 100]` in 8000 steps (0.025 apart), keeps
///   the finite samples, and frames the first..last sample with
///   `|y| > 1e-4`, padded by 5 when that span is under 1 and by 15% of it
///   otherwise; a signal that never exceeds the threshold gets `[-10, 10]`;
/// - closed-form mode frames the union of pulse extents (seeded with the
///   origin), padded by `max(10, 20% of span)`, and samples it in 4000
///   steps; no pulses gives `[-30, 30]`;
/// - area is `Σ step·(|y₀|+|y₁|)/2` over consecutive retained samples,
///   rounded to 2 decimals.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Create a sampler with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler from a configuration, rejecting invalid settings
    pub fn with_config(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Sampler { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Set the general-mode search range
    pub fn search_range(mut self, min: f64, max: f64) -> Self {
        self.config.search_min = min;
        self.config.search_max = max;
        self
    }

    /// Set the number of general-mode grid intervals
    pub fn search_steps(mut self, steps: usize) -> Self {
        self.config.search_steps = steps;
        self
    }

    /// Set the number of closed-form grid intervals
    pub fn closed_form_steps(mut self, steps: usize) -> Self {
        self.config.closed_form_steps = steps;
        self
    }

    /// Set the negligibility threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the parser nesting limit
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the parser node limit
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.config.max_nodes = nodes;
        self
    }

    /// Parse `formula` with the general grammar and sample it.
    ///
    /// Blank input and abandoned parses give the empty result on the
    /// default domain; other parse problems only zero out the fragments
    /// involved.
    pub fn plot(&self, formula: &str) -> PlotResult {
        if formula.trim().is_empty() {
            return PlotResult::empty(self.config.default_domain);
        }

        let parsed = parse_with_limits(formula, self.config.max_depth, self.config.max_nodes);
        if let Some(fatal) = parsed.diagnostics.iter().find(|d| d.is_fatal()) {
            log::error!("could not parse '{}': {}", formula, fatal);
            return PlotResult::empty(self.config.default_domain);
        }
        for diagnostic in &parsed.diagnostics {
            log::debug!("{}", diagnostic);
        }

        self.sample_signal(&parsed.expr)
    }

    /// Parse `formula` as a sum of rect/tri pulses and sample it
    pub fn plot_closed_form(&self, formula: &str) -> PlotResult {
        if formula.trim().is_empty() {
            return PlotResult::empty(self.config.closed_form_default_domain);
        }

        let closed_form = parse_formula(formula);
        self.sample_pulses(&closed_form.descriptors)
    }

    /// General mode: sample over the search range and detect the support.
    ///
    /// An invalid configuration is logged and gives the empty result on
    /// the default domain.
    pub fn sample_signal<S: Signal + ?Sized>(&self, signal: &S) -> PlotResult {
        let cfg = &self.config;
        if let Err(e) = cfg.validate() {
            log::error!("cannot sample: {}", e);
            return PlotResult::empty(cfg.default_domain);
        }
        let (points, step) =
            sample_grid(signal, cfg.search_min, cfg.search_max, cfg.search_steps);
        let area = round_to(trapezoid_area(&points, step), cfg.area_digits);
        let (domain_min, domain_max) = self.detect_domain(&points);

        log::debug!(
            "sampled {} finite points, domain [{}, {}], area {}",
            points.len(),
            domain_min,
            domain_max,
            area
        );

        PlotResult {
            points,
            domain_min,
            domain_max,
            area,
        }
    }

    /// Closed-form mode: domain from the pulse extents, then sample it
    pub fn sample_pulses(&self, descriptors: &[SignalDescriptor]) -> PlotResult {
        let cfg = &self.config;
        if let Err(e) = cfg.validate() {
            log::error!("cannot sample: {}", e);
            return PlotResult::empty(cfg.closed_form_default_domain);
        }
        let (domain_min, domain_max) = self.closed_form_domain(descriptors);
        let (points, step) =
            sample_grid(descriptors, domain_min, domain_max, cfg.closed_form_steps);
        let area = round_to(trapezoid_area(&points, step), cfg.area_digits);

        PlotResult {
            points,
            domain_min,
            domain_max,
            area,
        }
    }

    /// First..last non-negligible sample, padded; the default window if none
    pub fn detect_domain(&self, points: &[SamplePoint]) -> (f64, f64) {
        let cfg = &self.config;
        let mut support = points
            .iter()
            .filter(|p| !is_negligible(p.y, cfg.threshold));

        let Some(first) = support.next() else {
            return (cfg.default_domain[0], cfg.default_domain[1]);
        };
        let last = support.last().unwrap_or(first);

        let span = last.x - first.x;
        let padding = if span < cfg.narrow_span {
            cfg.narrow_padding
        } else {
            span * cfg.padding_ratio
        };

        (first.x - padding, last.x + padding)
    }

    /// Union of pulse extents around the origin, padded.
    ///
    /// Pulses without support are ignored; if none are left the result is
    /// the closed-form default window.
    pub fn closed_form_domain(&self, descriptors: &[SignalDescriptor]) -> (f64, f64) {
        let cfg = &self.config;
        if !descriptors.iter().any(SignalDescriptor::has_support) {
            return (
                cfg.closed_form_default_domain[0],
                cfg.closed_form_default_domain[1],
            );
        }

        let (lo, hi) = descriptors
            .iter()
            .filter(|d| d.has_support())
            .map(SignalDescriptor::extent)
            .fold((0.0f64, 0.0f64), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));

        let padding =
            ((hi - lo) * cfg.closed_form_padding_ratio).max(cfg.closed_form_min_padding);
        (lo - padding, hi + padding)
    }
}

/// Evaluate `signal` at `steps + 1` evenly spaced points from `min` to `max`,
/// dropping non-finite values. Returns the points and the grid step.
///
/// `steps == 0` has no grid and returns no points with a zero step.
pub fn sample_grid<S: Signal + ?Sized>(
    signal: &S,
    min: f64,
    max: f64,
    steps: usize,
) -> (Vec<SamplePoint>, f64) {
    if steps == 0 {
        return (Vec::new(), 0.0);
    }
    let step = (max - min) / steps as f64;
    let mut points = Vec::with_capacity(steps.min(MAX_STEPS).saturating_add(1));

    for i in 0..=steps {
        let x = min + i as f64 * step;
        let y = signal.value_at(x);
        if y.is_finite() {
            points.push(SamplePoint { x, y });
        }
    }

    (points, step)
}

/// Trapezoid rule on `|y|` over consecutive points, assuming spacing `step`.
///
/// Gaps left by dropped samples are not widened: each pair of neighbours in
/// `points` contributes exactly one `step`.
pub fn trapezoid_area(points: &[SamplePoint], step: f64) -> f64 {
    points
        .windows(2)
        .map(|w| step * (w[0].y.abs() + w[1].y.abs()) / 2.0)
        .sum()
}
