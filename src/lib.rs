//! # Twine Renal
//!
//! Glomerular hemodynamics and renal autoregulation models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Renal [`twine_core::Model`] implementations, a scenario
//!   library and the autoregulation curve generator.
//! - [`support`]: Unit and numeric constraint utilities used by the models.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events when inputs are degenerate enough that a
//! denominator is floored or the glomerular pressure is clamped. No subscriber
//! is installed here; applications choose their own.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code stays in each
//! model's internal `core` module until a second model needs it.

#[macro_use]
extern crate uom;

pub mod models;
pub mod support;
