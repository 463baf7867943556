//! Renal physiology models.
//!
//! - [`hemodynamics`]: Closed-form glomerular pressures, filtration and flows.
//! - [`autoregulation`]: GFR and RPF across arterial pressure with myogenic
//!   and tubuloglomerular feedback approximated by a plateau.
//! - [`scenario`]: Named inputs and comparisons against a baseline kidney.

pub mod autoregulation;
pub mod hemodynamics;
pub mod scenario;
