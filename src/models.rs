use crate::config::limits;
use crate::error::{BlendError, EngineResult};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inputs for one blend computation. Prices are per liter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BlendRequest {
    pub total_volume: f64,
    pub ethanol_percent: f64,
    pub gas_price: f64,
    pub ethanol_price: f64,
}

impl BlendRequest {
    pub fn new(total_volume: f64, ethanol_percent: f64, gas_price: f64, ethanol_price: f64) -> Self {
        BlendRequest {
            total_volume,
            ethanol_percent,
            gas_price,
            ethanol_price,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct VolumeCostBreakdown {
    pub total_volume: f64,
    pub ethanol_volume: f64,
    pub gasoline_volume: f64,
    pub ethanol_cost: f64,
    pub gasoline_cost: f64,
    pub total_cost: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EnergyContent {
    pub relative_energy_percent: f64,
    pub range_impact_percent: f64,
}

/// Complete output of a blend computation with non-zero volume.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BlendResult {
    pub ethanol_volume: f64,
    pub gasoline_volume: f64,
    pub ethanol_cost: f64,
    pub gasoline_cost: f64,
    pub total_cost: f64,
    pub relative_energy_percent: f64,
    pub range_impact_percent: f64,
}

impl BlendResult {
    pub fn from_parts(breakdown: VolumeCostBreakdown, energy: EnergyContent) -> Self {
        BlendResult {
            ethanol_volume: breakdown.ethanol_volume,
            gasoline_volume: breakdown.gasoline_volume,
            ethanol_cost: breakdown.ethanol_cost,
            gasoline_cost: breakdown.gasoline_cost,
            total_cost: breakdown.total_cost,
            relative_energy_percent: energy.relative_energy_percent,
            range_impact_percent: energy.range_impact_percent,
        }
    }

    /// Splits the result back into its two halves; `total_volume` is not
    /// carried by the flat result.
    pub fn into_parts(self, total_volume: f64) -> (VolumeCostBreakdown, EnergyContent) {
        (
            VolumeCostBreakdown {
                total_volume,
                ethanol_volume: self.ethanol_volume,
                gasoline_volume: self.gasoline_volume,
                ethanol_cost: self.ethanol_cost,
                gasoline_cost: self.gasoline_cost,
                total_cost: self.total_cost,
            },
            EnergyContent {
                relative_energy_percent: self.relative_energy_percent,
                range_impact_percent: self.range_impact_percent,
            },
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillType {
    #[default]
    FullFill,
    Partial,
    TopOff,
}

impl FillType {
    pub const ALL: [FillType; 3] = [FillType::FullFill, FillType::Partial, FillType::TopOff];

    /// Stable identifier used as the `<option>` value.
    pub fn id(self) -> &'static str {
        match self {
            FillType::FullFill => "full",
            FillType::Partial => "partial",
            FillType::TopOff => "top_off",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Pairs the fill type with the amount field that applies to it.
    pub fn plan(self, partial_amount: f64, current_level: f64) -> FillPlan {
        match self {
            FillType::FullFill => FillPlan::Full,
            FillType::Partial => FillPlan::Partial {
                amount: partial_amount,
            },
            FillType::TopOff => FillPlan::TopOff { current_level },
        }
    }
}

/// A fill type together with the amount the user reported for it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum FillPlan {
    Full,
    Partial { amount: f64 },
    TopOff { current_level: f64 },
}

impl FillPlan {
    /// Liters to dispense for a tank of the given capacity.
    pub fn total_volume(&self, tank_capacity: f64) -> EngineResult<f64> {
        if !tank_capacity.is_finite() || tank_capacity < 0.0 {
            return Err(BlendError::invalid(
                "tank_capacity",
                tank_capacity,
                "must be a finite non-negative number",
            ));
        }

        match *self {
            FillPlan::Full => Ok(tank_capacity),
            FillPlan::Partial { amount } => {
                within_tank("amount", amount, tank_capacity)?;
                Ok(amount)
            }
            FillPlan::TopOff { current_level } => {
                within_tank("current_level", current_level, tank_capacity)?;
                Ok(tank_capacity - current_level)
            }
        }
    }
}

fn within_tank(field: &'static str, value: f64, tank_capacity: f64) -> EngineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BlendError::invalid(field, value, "must be a finite non-negative number"));
    }
    if value > tank_capacity {
        return Err(BlendError::invalid(field, value, "exceeds tank capacity"));
    }
    Ok(())
}

pub const BLEND_PRESETS: [u8; 7] = [0, 5, 10, 15, 20, 25, 85];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendChoice {
    Preset(u8),
    Custom,
}

impl Default for BlendChoice {
    fn default() -> Self {
        BlendChoice::Preset(0)
    }
}

impl BlendChoice {
    pub fn all() -> impl Iterator<Item = BlendChoice> {
        BLEND_PRESETS
            .into_iter()
            .map(BlendChoice::Preset)
            .chain(std::iter::once(BlendChoice::Custom))
    }

    pub fn id(self) -> String {
        match self {
            BlendChoice::Preset(p) => format!("E{p}"),
            BlendChoice::Custom => "custom".to_string(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().find(|c| c.id() == id)
    }

    /// Ethanol percentage, taking the custom field's value for `Custom`.
    pub fn ethanol_percent(self, custom_percent: f64) -> EngineResult<f64> {
        match self {
            BlendChoice::Preset(p) => Ok(f64::from(p)),
            BlendChoice::Custom => {
                let range = limits::CUSTOM_BLEND_MIN..=limits::CUSTOM_BLEND_MAX;
                if custom_percent.is_finite() && range.contains(&custom_percent) {
                    Ok(custom_percent)
                } else {
                    Err(BlendError::invalid(
                        "custom_percent",
                        custom_percent,
                        "must be between 0 and 85",
                    ))
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = BlendError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| BlendError::UnknownLanguage(s.to_string()))
    }
}

/// What the results grid shows for one valid set of inputs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BlendSnapshot {
    pub ethanol_percent: f64,
    pub breakdown: VolumeCostBreakdown,
    /// `None` when no fuel is dispensed.
    pub energy: Option<EnergyContent>,
}

#[derive(Props, Clone, PartialEq)]
pub struct ResultsPanelProps {
    pub lang: Language,
    pub symbol: String,
    pub snapshot: BlendSnapshot,
}
