use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P4, Z0},
};

/// Ultrafiltration coefficient (volume rate per unit pressure), m⁴·s/kg in SI.
pub type UltrafiltrationCoefficient = Quantity<ISQ<P4, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
