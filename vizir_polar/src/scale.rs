// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales for polar axes.
//!
//! A [`Scale`] is a value: configuring it returns a new scale rather than mutating shared
//! state, so a domain and a range are always set together before anything reads ticks.
//!
//! ```
//! use vizir_polar::Scale;
//!
//! let scale = Scale::linear()
//!     .with_domain((0.0, 10.0))
//!     .with_range((0.0, 100.0));
//! assert_eq!(scale.map(2.5), 25.0);
//! ```

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::{self, TickFormatter};
use crate::time;

/// A user-supplied monotonic transform for [`ScaleKind::Custom`].
#[derive(Clone)]
pub struct CustomTransform(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl CustomTransform {
    /// Wraps a monotonic function.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    fn apply(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

/// Transforms compare by identity: clones of one transform are equal.
impl PartialEq for CustomTransform {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl core::fmt::Debug for CustomTransform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CustomTransform(..)")
    }
}

/// The mapping family of a [`Scale`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScaleKind {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Logarithmic interpolation (domain must not cross zero).
    Log {
        /// Log base.
        base: f64,
    },
    /// Power interpolation (`sign(x) * |x|^exponent`).
    Pow {
        /// Exponent; `0.5` is a square-root scale.
        exponent: f64,
    },
    /// Linear over timestamps in seconds, with time-aware ticks and labels.
    Time,
    /// Interpolation in the space of a custom monotonic transform.
    ///
    /// Custom scales cannot generate ticks or labels.
    Custom(CustomTransform),
}

impl ScaleKind {
    /// The domain a fresh scale of this kind starts with.
    pub fn default_domain(&self) -> (f64, f64) {
        match self {
            Self::Log { .. } => (1.0, 10.0),
            Self::Linear | Self::Pow { .. } | Self::Time | Self::Custom(_) => (0.0, 1.0),
        }
    }

    /// Whether this is a log scale.
    pub fn is_log(&self) -> bool {
        matches!(self, Self::Log { .. })
    }

    fn transform(&self, x: f64) -> f64 {
        match self {
            Self::Linear | Self::Time => x,
            Self::Log { base } => {
                let denom = base.ln();
                if denom == 0.0 { x.ln() } else { x.ln() / denom }
            }
            Self::Pow { exponent } => {
                if x < 0.0 {
                    -(-x).powf(*exponent)
                } else {
                    x.powf(*exponent)
                }
            }
            Self::Custom(t) => t.apply(x),
        }
    }
}

/// A configured scale mapping a domain onto a range.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    /// Creates a scale of `kind` with its default domain and a unit range.
    pub fn new(kind: ScaleKind) -> Self {
        let domain = kind.default_domain();
        Self {
            kind,
            domain,
            range: (0.0, 1.0),
        }
    }

    /// A linear scale.
    pub fn linear() -> Self {
        Self::new(ScaleKind::Linear)
    }

    /// A base-10 log scale.
    pub fn log() -> Self {
        Self::new(ScaleKind::Log { base: 10.0 })
    }

    /// A square-root scale.
    pub fn sqrt() -> Self {
        Self::new(ScaleKind::Pow { exponent: 0.5 })
    }

    /// A time scale over seconds.
    pub fn time() -> Self {
        Self::new(ScaleKind::Time)
    }

    /// A scale interpolating in the space of `transform`.
    pub fn custom(transform: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(ScaleKind::Custom(CustomTransform::new(transform)))
    }

    /// Returns a copy of this scale with a new domain.
    #[must_use]
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = domain;
        self
    }

    /// Returns a copy of this scale with a new range.
    #[must_use]
    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self
    }

    /// The scale's kind.
    pub fn kind(&self) -> &ScaleKind {
        &self.kind
    }

    /// The configured domain, as authored.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The configured range, as authored.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value into range space.
    ///
    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let t0 = self.kind.transform(self.domain.0);
        let t1 = self.kind.transform(self.domain.1);
        let denom = t1 - t0;
        if denom == 0.0 || !denom.is_finite() {
            return r0;
        }
        let t = (self.kind.transform(x) - t0) / denom;
        if !t.is_finite() {
            return r0;
        }
        r0 + t * (r1 - r0)
    }

    /// Returns roughly `count` tick values inside the domain.
    ///
    /// Returns `None` for scales without a tick generator.
    pub fn ticks(&self, count: usize) -> Option<Vec<f64>> {
        let (d0, d1) = self.domain;
        match &self.kind {
            ScaleKind::Linear | ScaleKind::Pow { .. } => Some(format::linear_ticks(d0, d1, count)),
            ScaleKind::Time => Some(time::time_ticks_seconds(d0, d1, count)),
            ScaleKind::Log { base } => Some(log_ticks(*base, d0, d1, count)),
            ScaleKind::Custom(_) => None,
        }
    }

    /// Returns the scale's label formatter for ticks generated with `count`.
    ///
    /// Returns `None` for scales without a formatter.
    pub fn tick_format(&self, count: usize) -> Option<TickFormatter> {
        let (d0, d1) = self.domain;
        match &self.kind {
            ScaleKind::Linear | ScaleKind::Pow { .. } => {
                let step = format::linear_tick_step(d0, d1, count);
                Some(Arc::new(move |v: f64, _: usize| format::format_tick_with_step(v, step)))
            }
            ScaleKind::Time => {
                let step = time::time_tick_step(d0, d1, count);
                Some(Arc::new(move |v: f64, _: usize| time::format_time_seconds(v, step)))
            }
            ScaleKind::Log { .. } => Some(Arc::new(|v: f64, _: usize| {
                format::format_tick_with_step(v, 0.0)
            })),
            ScaleKind::Custom(_) => None,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::linear()
    }
}

/// Powers of `base` inside the domain, capped at `count` (0 means uncapped).
fn log_ticks(base: f64, d0: f64, d1: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let negative = hi < 0.0;
    let (lo, hi) = if negative { (-hi, -lo) } else { (lo, hi) };
    if lo <= 0.0 || !lo.is_finite() || !hi.is_finite() || base <= 0.0 || base == 1.0 {
        return Vec::new();
    }
    let ln_base = base.ln();
    let exponent = |x: f64| (x.ln() / ln_base).clamp(-1_000.0, 1_000.0);
    // Nudge so exact powers survive `ln` rounding (ln(1000) / ln(10) < 3).
    let (first, last) = ((exponent(lo) - 1e-9).ceil(), (exponent(hi) + 1e-9).floor());

    let mut out = Vec::new();
    let mut e = first;
    while e <= last {
        let v = base.powf(e);
        out.push(if negative { -v } else { v });
        if count != 0 && out.len() >= count {
            break;
        }
        e += 1.0;
    }
    if negative != (d0 > d1) {
        out.reverse();
    }
    out
}
