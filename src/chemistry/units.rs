//! Rounding and display helpers shared by the formulas and the output records.

use super::ChemistryError;

/// Round to two decimal places, the precision of every reported ratio.
///
/// Exact halves go to the even digit, so `0.125` becomes `0.12`.
pub fn round2(value: f64) -> f64 {
    round_half_even(value * 100.0) / 100.0
}

// f64::round_ties_even is newer than our MSRV
fn round_half_even(value: f64) -> f64 {
    if (value - value.trunc()).abs() == 0.5 {
        2.0 * (value / 2.0).round()
    } else {
        value.round()
    }
}

/// Divide, refusing a zero denominator instead of producing inf/NaN.
pub(crate) fn checked_div(
    numerator: f64,
    denominator: f64,
    quantity: &'static str,
) -> Result<f64, ChemistryError> {
    if denominator == 0.0 {
        return Err(ChemistryError::ZeroDenominator { quantity });
    }
    Ok(numerator / denominator)
}

/// Format moles in scientific notation with two mantissa decimals and a
/// signed two-digit exponent, e.g. `6.58e+00` or `1.20e-03`.
pub fn format_moles(moles: f64) -> String {
    if !moles.is_finite() {
        return format!("{}", moles).to_lowercase();
    }

    let formatted = format!("{:.2e}", moles);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Milligrams to grams
pub fn mg_to_g(mass_mg: f64) -> f64 {
    mass_mg / crate::schema::MILLI_PER_UNIT
}

/// Grams to milligrams
pub fn g_to_mg(mass_g: f64) -> f64 {
    mass_g * crate::schema::MILLI_PER_UNIT
}

/// Microliters to milliliters
pub fn ul_to_ml(volume_ul: f64) -> f64 {
    volume_ul / crate::schema::MILLI_PER_UNIT
}
