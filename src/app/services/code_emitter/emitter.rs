//! Generated module writer
//!
//! Writes the module header, one `Mineral` subclass per emittable
//! endmember and the covariance structure, in that order.

use std::io::Write;
use tracing::{debug, info, warn};

use super::conversion::{SiParams, correction_to_si};
use super::python_literal::{format_float, format_float_list, format_str};
use super::stats::EmitStats;
use crate::app::models::{Correction, CovarianceMatrix, Endmember};
use crate::config::EmitterConfig;
use crate::constants::{
    COVARIANCE_BANNER, ENDMEMBERS_BANNER, EQUATION_OF_STATE, LANDAU_REFERENCE_PRESSURE,
    LANDAU_REFERENCE_TEMPERATURE,
};
use crate::{Error, Result};

/// Emitter for BurnMan endmember modules
#[derive(Debug, Clone, Default)]
pub struct CodeEmitter {
    config: EmitterConfig,
}

impl CodeEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Write the complete module to `out`
    pub fn emit<W: Write + ?Sized>(
        &self,
        out: &mut W,
        endmembers: &[Endmember],
        covariance: &CovarianceMatrix,
    ) -> Result<EmitStats> {
        let (text, stats) = self.emit_to_string(endmembers, covariance)?;
        out.write_all(text.as_bytes())
            .map_err(|e| Error::io("Failed to write generated module", e))?;
        Ok(stats)
    }

    /// Render the complete module as text
    pub fn emit_to_string(
        &self,
        endmembers: &[Endmember],
        covariance: &CovarianceMatrix,
    ) -> Result<(String, EmitStats)> {
        let mut stats = EmitStats::new();
        let mut text = String::new();

        text.push_str(&self.config.module_header);
        text.push_str(ENDMEMBERS_BANNER);

        for endmember in endmembers {
            stats.records_seen += 1;

            if !endmember.is_emittable() {
                if endmember.k0() <= 0.0 && endmember.correction_flag >= 0 {
                    warn!(
                        "Skipping '{}': non-positive K0 {}",
                        endmember.name,
                        endmember.k0()
                    );
                } else {
                    debug!(
                        "Skipping '{}' (flag {})",
                        endmember.name, endmember.correction_flag
                    );
                }
                stats.records_skipped += 1;
                continue;
            }

            let correction = endmember.correction()?;
            match correction {
                Correction::None => {}
                Correction::Landau { .. } => stats.landau_blocks += 1,
                Correction::BraggWilliams { .. } => stats.bragg_williams_blocks += 1,
            }

            text.push_str(&self.render_endmember(endmember, &correction));
            stats.classes_emitted += 1;
        }

        text.push_str(&self.render_covariance(covariance));
        stats.covariance_dimension = covariance.dimension();

        info!(
            "Emitted {} classes, skipped {} records",
            stats.classes_emitted, stats.records_skipped
        );

        Ok((text, stats))
    }

    /// Render one endmember class, correction block included
    pub fn render_endmember(&self, endmember: &Endmember, correction: &Correction) -> String {
        let si = SiParams::from_endmember(endmember);
        let mut s = format!(
            "class {class} (Mineral):\n\
             \x20   def __init__(self):\n\
             \x20       formula = {formula}\n\
             \x20       formula = dictionarize_formula(formula)\n\
             \x20       self.params = {{\n\
             \x20           'name': {name},\n\
             \x20           'formula': formula,\n\
             \x20           'equation_of_state': {eos},\n\
             \x20           'H_0': {h_0},\n\
             \x20           'S_0': {s_0},\n\
             \x20           'V_0': {v_0},\n\
             \x20           'Cp': {cp},\n\
             \x20           'a_0': {a_0},\n\
             \x20           'K_0': {k_0},\n\
             \x20           'Kprime_0': {kprime_0},\n\
             \x20           'Kdprime_0': {kdprime_0},\n\
             \x20           'n': sum(formula.values()),\n\
             \x20           'molar_mass': formula_mass(formula)}}\n",
            class = self.config.class_name(&endmember.name),
            formula = format_str(&endmember.formula),
            name = format_str(&endmember.name),
            eos = format_str(EQUATION_OF_STATE),
            h_0 = format_float(si.h_0),
            s_0 = format_float(si.s_0),
            v_0 = format_float(si.v_0),
            cp = format_float_list(&si.cp),
            a_0 = format_float(si.a_0),
            k_0 = format_float(si.k_0),
            kprime_0 = format_float(si.kprime_0),
            kdprime_0 = format_float(si.kdprime_0),
        );

        s.push_str(&render_correction(correction));
        s.push_str("        Mineral.__init__(self)\n\n");
        s
    }

    /// Render the `cov` dictionary with its banner
    pub fn render_covariance(&self, covariance: &CovarianceMatrix) -> String {
        let width = self.config.line_width;
        let row_indent = " ".repeat("       [".len());

        let rows: Vec<String> = covariance
            .matrix
            .iter()
            .map(|row| {
                let items: Vec<String> = row.iter().map(|v| format_float(*v)).collect();
                format!("[{}]", wrap_items(&items, 1, &row_indent, width))
            })
            .collect();

        let names: Vec<String> = covariance
            .endmember_names
            .iter()
            .map(|name| format_str(name))
            .collect();

        let mut s = String::from(COVARIANCE_BANNER);
        s.push_str("cov = {'covariance_matrix': array([");
        s.push_str(&rows.join(",\n       "));
        s.push_str("]),\n'endmember_names': [");
        s.push_str(&wrap_items(&names, "'endmember_names': [".len(), " ", width));
        s.push_str("]}\n\n");
        s
    }
}

fn render_correction(correction: &Correction) -> String {
    match correction_to_si(correction) {
        Correction::None => String::new(),
        Correction::Landau { tc, s_d, v_d } => format!(
            "        self.property_modifiers = [[\n\
             \x20           'landau_hp', {{'P_0': {p_0},\n\
             \x20                         'T_0': {t_0},\n\
             \x20                         'Tc_0': {tc},\n\
             \x20                         'S_D': {s_d},\n\
             \x20                         'V_D': {v_d}}}]]\n\n",
            p_0 = format_float(LANDAU_REFERENCE_PRESSURE),
            t_0 = format_float(LANDAU_REFERENCE_TEMPERATURE),
            tc = format_float(tc),
            s_d = format_float(s_d),
            v_d = format_float(v_d),
        ),
        Correction::BraggWilliams {
            delta_h,
            delta_v,
            wh,
            wv,
            n,
            factor,
        } => format!(
            "        self.property_modifiers = [[\n\
             \x20           'bragg_williams', {{'deltaH': {delta_h},\n\
             \x20                              'deltaV': {delta_v},\n\
             \x20                              'Wh': {wh},\n\
             \x20                              'Wv': {wv},\n\
             \x20                              'n': {n},\n\
             \x20                              'factor': {factor}}}]]\n",
            delta_h = format_float(delta_h),
            delta_v = format_float(delta_v),
            wh = format_float(wh),
            wv = format_float(wv),
            n = format_float(n),
            factor = format_float(factor),
        ),
    }
}

/// Join items with ", ", breaking lines before `width`
///
/// `start` is the column the first item begins at; continuation lines
/// begin with `indent`.
pub fn wrap_items(items: &[String], start: usize, indent: &str, width: usize) -> String {
    let mut out = String::new();
    let mut column = start;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            column += 1;
            if column + 1 + item.len() > width {
                out.push('\n');
                out.push_str(indent);
                column = indent.len();
            } else {
                out.push(' ');
                column += 1;
            }
        }
        out.push_str(item);
        column += item.len();
    }

    out
}
