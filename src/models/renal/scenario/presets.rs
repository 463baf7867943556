use crate::models::renal::hemodynamics::HemodynamicsInput;

use super::Scenario;

/// Clinical-unit inputs in the order MAP, Ra, Re, Pbs, πgc, Kf, Hct.
type Values = [f64; 7];

const BASELINE: Values = [100.0, 1.0, 1.0, 10.0, 25.0, 12.0, 45.0];

const MAP: usize = 0;
const RA: usize = 1;
const RE: usize = 2;
const PBS: usize = 3;
const PI_GC: usize = 4;
const KF: usize = 5;

/// Baseline values with the listed entries replaced.
fn with(changes: &[(usize, f64)]) -> Values {
    let mut values = BASELINE;
    for &(index, value) in changes {
        values[index] = value;
    }
    values
}

fn scenario(name: &'static str, description: &'static str, values: Values) -> Scenario {
    let [map, ra, re, pbs, pi_gc, kf, hct] = values;
    let input = HemodynamicsInput::from_clinical(map, ra, re, pbs, pi_gc, kf, hct)
        .expect("preset values are physiological");
    Scenario::new(name, description, input)
}

pub(super) fn quick() -> Vec<Scenario> {
    vec![
        scenario("Baseline", "Healthy kidney at rest.", BASELINE),
        scenario(
            "Afferent constriction",
            "Raised Ra lowers Pgc, NFP and GFR, and reduces RPF.",
            with(&[(RA, 3.0)]),
        ),
        scenario(
            "Efferent constriction",
            "Raised Re lifts Pgc and GFR while RPF falls, so FF rises.",
            with(&[(RE, 2.5)]),
        ),
        scenario(
            "Obstruction",
            "Raised Bowman's space pressure opposes filtration.",
            with(&[(PBS, 25.0)]),
        ),
        scenario(
            "Dehydration",
            "Raised oncotic pressure lowers NFP and GFR.",
            with(&[(PI_GC, 35.0)]),
        ),
        scenario(
            "Hypotension",
            "Low arterial pressure reduces Pgc and renal flow.",
            with(&[(MAP, 65.0)]),
        ),
        scenario(
            "Glomerular damage",
            "Reduced Kf lowers GFR at the same NFP.",
            with(&[(KF, 5.0)]),
        ),
        scenario(
            "Nephrotic syndrome",
            "Low oncotic pressure raises NFP and GFR.",
            with(&[(PI_GC, 15.0)]),
        ),
    ]
}

pub(super) fn clinical() -> Vec<Scenario> {
    vec![
        scenario(
            "Acute hemorrhage",
            "Hypotension with sympathetic constriction of both arterioles. \
             NFP collapses faster than plasma flow, so FF falls with GFR.",
            with(&[(MAP, 65.0), (RA, 1.4), (RE, 1.6), (PI_GC, 28.0), (PBS, 12.0)]),
        ),
        scenario(
            "Severe dehydration",
            "Volume loss concentrates plasma proteins and lowers MAP.",
            with(&[(MAP, 85.0), (PI_GC, 32.0), (RA, 1.2), (RE, 1.5)]),
        ),
        scenario(
            "Urinary obstruction",
            "Back pressure from a blocked outflow tract.",
            with(&[(PBS, 30.0)]),
        ),
        scenario(
            "Nephrotic proteinuria",
            "Protein loss lowers plasma oncotic pressure.",
            with(&[(PI_GC, 15.0)]),
        ),
        scenario(
            "Renal artery stenosis",
            "Narrowed inflow raises afferent resistance.",
            with(&[(RA, 3.0)]),
        ),
        scenario(
            "Efferent arteriolar constriction",
            "Efferent constriction defends GFR at the cost of RPF.",
            with(&[(RE, 2.5)]),
        ),
        scenario(
            "Glomerulonephritis",
            "Inflamed glomeruli lose filtration surface.",
            with(&[(KF, 5.0)]),
        ),
    ]
}
