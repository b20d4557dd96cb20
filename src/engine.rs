//! Blend calculation engine.
//!
//! Pure functions mapping a validated [`BlendRequest`] to volume, cost and
//! energy figures. The engine holds no state between calls and never rounds;
//! rounding is left to the display layer. It accepts any non-negative
//! `total_volume`, whether it came from a full fill, a partial fill or a
//! top-off.

use crate::error::{BlendError, EngineResult};
use crate::models::{BlendRequest, BlendResult, EnergyContent, VolumeCostBreakdown};

/// Energy per liter of gasoline, the reference.
pub const GASOLINE_ENERGY_WEIGHT: f64 = 1.0;
/// Ethanol carries about 70% of gasoline's energy per liter.
pub const ETHANOL_ENERGY_WEIGHT: f64 = 0.7;

fn non_negative(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(BlendError::invalid(field, value, "must be a finite non-negative number"))
    }
}

fn finite_product(field: &'static str, value: f64, product: f64) -> EngineResult<f64> {
    if product.is_finite() {
        Ok(product)
    } else {
        Err(BlendError::invalid(field, value, "too large to compute a cost"))
    }
}

fn percentage(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(BlendError::invalid(field, value, "must be between 0 and 100"))
    }
}

/// Splits the fill into ethanol and gasoline and prices each part.
///
/// # Errors
///
/// Returns [`BlendError::InvalidInput`] for a negative or non-finite volume
/// or price, an ethanol percentage outside `[0, 100]`, or a volume and price
/// whose cost overflows.
pub fn compute_volumes_and_costs(request: &BlendRequest) -> EngineResult<VolumeCostBreakdown> {
    let total_volume = non_negative("total_volume", request.total_volume)?;
    let ethanol_percent = percentage("ethanol_percent", request.ethanol_percent)?;
    let gas_price = non_negative("gas_price", request.gas_price)?;
    let ethanol_price = non_negative("ethanol_price", request.ethanol_price)?;

    let ethanol_volume = total_volume * (ethanol_percent / 100.0);
    let gasoline_volume = total_volume - ethanol_volume;
    let ethanol_cost = finite_product("ethanol_price", ethanol_price, ethanol_volume * ethanol_price)?;
    let gasoline_cost = finite_product("gas_price", gas_price, gasoline_volume * gas_price)?;
    let total_cost = finite_product("total_volume", total_volume, ethanol_cost + gasoline_cost)?;

    Ok(VolumeCostBreakdown {
        total_volume,
        ethanol_volume,
        gasoline_volume,
        ethanol_cost,
        gasoline_cost,
        total_cost,
    })
}

/// Energy content of the blend relative to pure gasoline, and the matching
/// loss of driving range.
///
/// # Errors
///
/// [`BlendError::InvalidInput`] for negative or non-finite volumes and
/// [`BlendError::UndefinedEnergyContent`] when both volumes are zero.
pub fn compute_energy_content(ethanol_volume: f64, gasoline_volume: f64) -> EngineResult<EnergyContent> {
    let ethanol_volume = non_negative("ethanol_volume", ethanol_volume)?;
    let gasoline_volume = non_negative("gasoline_volume", gasoline_volume)?;

    let largest = ethanol_volume.max(gasoline_volume);
    if largest == 0.0 {
        return Err(BlendError::UndefinedEnergyContent);
    }

    // The ratio is scale-free; normalising keeps the sum from overflowing
    let ethanol_share = ethanol_volume / largest;
    let gasoline_share = gasoline_volume / largest;
    let total_energy = gasoline_share * GASOLINE_ENERGY_WEIGHT + ethanol_share * ETHANOL_ENERGY_WEIGHT;
    let relative_energy_percent = (total_energy / (ethanol_share + gasoline_share)) * 100.0;

    Ok(EnergyContent {
        relative_energy_percent,
        range_impact_percent: 100.0 - relative_energy_percent,
    })
}

/// Runs both steps and assembles the full result.
///
/// # Errors
///
/// Propagates the errors of [`compute_volumes_and_costs`] and
/// [`compute_energy_content`]; a zero `total_volume` therefore yields
/// [`BlendError::UndefinedEnergyContent`].
pub fn calculate_blend(request: &BlendRequest) -> EngineResult<BlendResult> {
    let breakdown = compute_volumes_and_costs(request)?;
    let energy = compute_energy_content(breakdown.ethanol_volume, breakdown.gasoline_volume)?;
    Ok(BlendResult::from_parts(breakdown, energy))
}
