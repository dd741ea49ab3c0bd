// src/contrast.rs

//! Contrast functions for frequency-domain ICA.
//!
//! The contrast function supplies the non-linearity used in the per-bin
//! unmixing updates. Different contrasts are suited for different source
//! statistics.

use crate::error::{ContrastError, Result};
use ndarray::Array3;
use num_complex::Complex64;
use std::sync::Arc;

/// Trait for contrast functions used in frequency-domain ICA.
///
/// A contrast must provide the value `g` and the first two derivatives of
/// the contrast with respect to the squared sample magnitude u = |y|²,
/// addressed by (frequency bin, source channel, time frame) in the bound
/// estimate cube. Phase never enters: the optimization only needs
/// sensitivity to the magnitude statistic.
///
/// `bind` takes `&mut self` while the queries take `&self`, so a rebind
/// cannot overlap in-flight queries: the single-writer/multi-reader
/// discipline between iterations is enforced by the borrow checker rather
/// than left to the caller.
pub trait Contrast: Clone + Send + Sync {
    /// Replace the bound estimate cube.
    ///
    /// Axes are (bin, source, frame). Subsequent queries read this cube
    /// until the next `bind`. The handle is shared, not copied.
    fn bind(&mut self, estimates: Arc<Array3<Complex64>>);

    /// Contrast value at the given coordinate.
    fn g(&self, bin: usize, source: usize, frame: usize) -> Result<f64>;

    /// First derivative of the contrast with respect to u = |y|².
    fn dg(&self, bin: usize, source: usize, frame: usize) -> Result<f64>;

    /// Second derivative of the contrast with respect to u = |y|².
    fn ddg(&self, bin: usize, source: usize, frame: usize) -> Result<f64>;
}

/// Squared magnitude of the sample at (bin, source, frame), or the matching
/// error when no cube is bound or the coordinate is out of range. Non-finite
/// samples pass through untouched.
fn magnitude_sq(
    estimates: Option<&Array3<Complex64>>,
    bin: usize,
    source: usize,
    frame: usize,
) -> Result<f64> {
    let cube = estimates.ok_or(ContrastError::NotBound)?;
    cube.get((bin, source, frame))
        .map(Complex64::norm_sqr)
        .ok_or_else(|| ContrastError::IndexOutOfBounds {
            requested: (bin, source, frame),
            shape: cube.dim(),
        })
}

/// Stabilization constants must be positive and finite, otherwise the
/// a + |y|² > 0 invariant behind every division and logarithm breaks.
fn check_stabilizer(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ContrastError::InvalidConfig {
            parameter: parameter.into(),
            message: format!("must be positive and finite, got {}", value),
        })
    }
}

/// Log contrast.
///
/// This is the default contrast. It suits super-Gaussian (heavy-tailed)
/// sources such as speech, and corresponds to the natural-log negentropy
/// approximation used in complex FastICA. The additive constant keeps the
/// value and both derivatives finite as |y| → 0.
///
/// The contrast is: `g(y) = ln(a2 + |y|²)`
#[derive(Clone, Debug)]
pub struct Log {
    /// Stabilization constant (default: 0.1).
    a2: f64,
    /// Currently bound estimate cube.
    estimates: Option<Arc<Array3<Complex64>>>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            a2: 0.1,
            estimates: None,
        }
    }
}

impl Log {
    /// Create a new log contrast with the given stabilization constant.
    ///
    /// Rejects `a2` ≤ 0 and non-finite values outright; nothing is clamped.
    pub fn new(a2: f64) -> Result<Self> {
        check_stabilizer("a2", a2)?;
        Ok(Self {
            a2,
            estimates: None,
        })
    }

    /// Stabilization constant in use.
    pub fn a2(&self) -> f64 {
        self.a2
    }
}

impl Contrast for Log {
    fn bind(&mut self, estimates: Arc<Array3<Complex64>>) {
        self.estimates = Some(estimates);
    }

    fn g(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok((self.a2 + u).ln())
    }

    fn dg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok(1.0 / (self.a2 + u))
    }

    fn ddg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        let v = self.a2 + u;
        Ok(-1.0 / (v * v))
    }
}

/// Square-root contrast.
///
/// Grows slowly with magnitude, which de-emphasizes outliers and makes this
/// the most robust choice of the family. Like the log contrast it is
/// stabilized by an additive constant near zero magnitude.
///
/// The contrast is: `g(y) = sqrt(a1 + |y|²)`
#[derive(Clone, Debug)]
pub struct Sqrt {
    /// Stabilization constant (default: 0.1).
    a1: f64,
    /// Currently bound estimate cube.
    estimates: Option<Arc<Array3<Complex64>>>,
}

impl Default for Sqrt {
    fn default() -> Self {
        Self {
            a1: 0.1,
            estimates: None,
        }
    }
}

impl Sqrt {
    /// Create a new square-root contrast with the given stabilization constant.
    ///
    /// Rejects `a1` ≤ 0 and non-finite values outright; nothing is clamped.
    pub fn new(a1: f64) -> Result<Self> {
        check_stabilizer("a1", a1)?;
        Ok(Self {
            a1,
            estimates: None,
        })
    }

    /// Stabilization constant in use.
    pub fn a1(&self) -> f64 {
        self.a1
    }
}

impl Contrast for Sqrt {
    fn bind(&mut self, estimates: Arc<Array3<Complex64>>) {
        self.estimates = Some(estimates);
    }

    fn g(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok((self.a1 + u).sqrt())
    }

    fn dg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok(1.0 / (2.0 * (self.a1 + u).sqrt()))
    }

    fn ddg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        let v = self.a1 + u;
        Ok(-1.0 / (4.0 * v * v.sqrt()))
    }
}

/// Kurtosis contrast.
///
/// Classical fourth-moment estimation. Fast but sensitive to outliers; needs
/// no stabilization constant since nothing is singular at zero magnitude.
///
/// The contrast is: `g(y) = |y|⁴ / 2`
#[derive(Clone, Debug, Default)]
pub struct Kurtosis {
    /// Currently bound estimate cube.
    estimates: Option<Arc<Array3<Complex64>>>,
}

impl Kurtosis {
    /// Create a new kurtosis contrast.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Contrast for Kurtosis {
    fn bind(&mut self, estimates: Arc<Array3<Complex64>>) {
        self.estimates = Some(estimates);
    }

    fn g(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        let u = magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok(0.5 * u * u)
    }

    fn dg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        magnitude_sq(self.estimates.as_deref(), bin, source, frame)
    }

    fn ddg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        magnitude_sq(self.estimates.as_deref(), bin, source, frame)?;
        Ok(1.0)
    }
}

/// Enumeration of built-in contrast types.
///
/// This allows selecting a contrast at runtime without type parameters.
/// Which variant to use is the caller's policy; this crate only evaluates.
#[derive(Clone, Debug)]
pub enum ContrastType {
    /// Log contrast.
    Log(Log),
    /// Square-root contrast.
    Sqrt(Sqrt),
    /// Kurtosis contrast.
    Kurtosis(Kurtosis),
}

impl Default for ContrastType {
    fn default() -> Self {
        ContrastType::Log(Log::default())
    }
}

impl ContrastType {
    /// Create a log contrast with the default stabilization constant.
    pub fn log() -> Self {
        ContrastType::Log(Log::default())
    }

    /// Create a log contrast with a custom stabilization constant.
    pub fn log_with_a2(a2: f64) -> Result<Self> {
        Ok(ContrastType::Log(Log::new(a2)?))
    }

    /// Create a square-root contrast with the default stabilization constant.
    pub fn sqrt() -> Self {
        ContrastType::Sqrt(Sqrt::default())
    }

    /// Create a square-root contrast with a custom stabilization constant.
    pub fn sqrt_with_a1(a1: f64) -> Result<Self> {
        Ok(ContrastType::Sqrt(Sqrt::new(a1)?))
    }

    /// Create a kurtosis contrast.
    pub fn kurtosis() -> Self {
        ContrastType::Kurtosis(Kurtosis::new())
    }

    /// Replace the bound estimate cube.
    pub fn bind(&mut self, estimates: Arc<Array3<Complex64>>) {
        match self {
            ContrastType::Log(c) => c.bind(estimates),
            ContrastType::Sqrt(c) => c.bind(estimates),
            ContrastType::Kurtosis(c) => c.bind(estimates),
        }
    }

    /// Contrast value at the given coordinate.
    pub fn g(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        match self {
            ContrastType::Log(c) => c.g(bin, source, frame),
            ContrastType::Sqrt(c) => c.g(bin, source, frame),
            ContrastType::Kurtosis(c) => c.g(bin, source, frame),
        }
    }

    /// First derivative of the contrast with respect to u = |y|².
    pub fn dg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        match self {
            ContrastType::Log(c) => c.dg(bin, source, frame),
            ContrastType::Sqrt(c) => c.dg(bin, source, frame),
            ContrastType::Kurtosis(c) => c.dg(bin, source, frame),
        }
    }

    /// Second derivative of the contrast with respect to u = |y|².
    pub fn ddg(&self, bin: usize, source: usize, frame: usize) -> Result<f64> {
        match self {
            ContrastType::Log(c) => c.ddg(bin, source, frame),
            ContrastType::Sqrt(c) => c.ddg(bin, source, frame),
            ContrastType::Kurtosis(c) => c.ddg(bin, source, frame),
        }
    }
}
