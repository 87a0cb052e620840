//! Dataset units to SI
//!
//! All conversions are plain multiplications by the factors in
//! [`crate::constants::units`]; heat capacity terms are additionally
//! rounded to ten decimals.

use crate::app::models::{Correction, Endmember};
use crate::constants::{ROUNDING_DIGITS, units};

use super::python_literal::round_to;

/// Endmember parameters in SI units, as written to `self.params`
#[derive(Debug, Clone, PartialEq)]
pub struct SiParams {
    /// J/mol
    pub h_0: f64,
    /// J/K/mol
    pub s_0: f64,
    /// m^3/mol
    pub v_0: f64,
    pub cp: [f64; 4],
    pub a_0: f64,
    /// Pa
    pub k_0: f64,
    pub kprime_0: f64,
    /// 1/Pa
    pub kdprime_0: f64,
}

impl SiParams {
    pub fn from_endmember(endmember: &Endmember) -> Self {
        let [k0, k0_prime, k0_dprime] = endmember.bulk_modulus_params;
        Self {
            h_0: endmember.enthalpy * units::KILO,
            s_0: endmember.entropy * units::KILO,
            v_0: endmember.volume * units::VOLUME,
            cp: endmember
                .heat_capacity_coeffs
                .map(|c| round_to(c * units::KILO, ROUNDING_DIGITS)),
            a_0: endmember.thermal_expansion,
            k_0: k0 * units::PRESSURE,
            kprime_0: k0_prime,
            kdprime_0: k0_dprime * units::INVERSE_PRESSURE,
        }
    }
}

/// Convert a correction's parameters to SI units
///
/// Landau: `S_D` kJ -> J, `V_D` volume factor; Tc unchanged.
/// Bragg-Williams: energies kJ -> J, volumes by the volume factor;
/// `n` and `factor` are dimensionless.
pub fn correction_to_si(correction: &Correction) -> Correction {
    match *correction {
        Correction::None => Correction::None,
        Correction::Landau { tc, s_d, v_d } => Correction::Landau {
            tc,
            s_d: s_d * units::KILO,
            v_d: v_d * units::VOLUME,
        },
        Correction::BraggWilliams {
            delta_h,
            delta_v,
            wh,
            wv,
            n,
            factor,
        } => Correction::BraggWilliams {
            delta_h: delta_h * units::KILO,
            delta_v: delta_v * units::VOLUME,
            wh: wh * units::KILO,
            wv: wv * units::VOLUME,
            n,
            factor,
        },
    }
}
