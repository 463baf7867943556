//! Supporting utilities shared by the renal models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Renal quantities missing from `uom`.

pub mod constraint;
pub mod units;
