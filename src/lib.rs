// src/lib.rs

//! # IVA Contrast
//!
//! Contrast (nonlinearity) functions for frequency-domain Independent
//! Component Analysis and Independent Vector Analysis.
//!
//! A frequency-domain separator estimates one unmixing matrix per frequency
//! bin by maximizing an independence criterion over complex source-estimate
//! samples. The criterion is driven by a scalar contrast function and its
//! first two derivatives with respect to the squared sample magnitude
//! u = |y|². This crate implements the instantaneous contrast family from:
//!
//! > Ella Bingham, Aapo Hyvärinen.
//! > "A fast fixed-point algorithm for independent component analysis of
//! > complex valued signals"
//! > International Journal of Neural Systems, 2000
//!
//! The estimates live in a three-dimensional cube indexed by
//! (frequency bin, source channel, time frame). The optimization loop binds
//! a fresh cube once per iteration, then queries `g`/`dg`/`ddg` at arbitrary
//! coordinates while accumulating its score functions; queries are pure
//! reads and may run from many threads at once.
//!
//! ## Example
//!
//! ```rust
//! use iva_contrast::{Contrast, Log};
//! use ndarray::Array3;
//! use num_complex::Complex64;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), iva_contrast::ContrastError> {
//! // Estimate cube: 3 frequency bins, 2 sources, 4 frames.
//! let estimates = Arc::new(Array3::<Complex64>::zeros((3, 2, 4)));
//!
//! let mut contrast = Log::new(0.1)?;
//! contrast.bind(estimates);
//!
//! // At y = 0 the log contrast evaluates to ln(a2).
//! let g = contrast.g(0, 0, 0)?;
//! assert!((g - 0.1_f64.ln()).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

mod contrast;
mod error;

pub use contrast::{Contrast, ContrastType, Kurtosis, Log, Sqrt};
pub use error::ContrastError;

// Re-export the numeric crates for convenience
pub use ndarray;
pub use num_complex;
