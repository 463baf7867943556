//! Clinical volume rate units.

unit! {
    system: uom::si;
    quantity: uom::si::volume_rate;

    @milliliter_per_minute: 1.0_E-6 / 6.0_E1; "mL/min", "milliliter per minute",
        "milliliters per minute";
}
