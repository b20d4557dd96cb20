//! Raw form state of the calculator page and its evaluation.
//!
//! Number fields are kept as the text the user typed, the way the input
//! widgets hold them. Evaluation parses them, derives the fill volume, runs
//! the engine and reports a zero-volume fill as missing energy data instead
//! of an error.

use crate::config::limits;
use crate::currency;
use crate::engine;
use crate::error::{BlendError, EngineResult};
use crate::models::{BlendChoice, BlendRequest, BlendSnapshot, FillType};
use crate::utils::parse_number;

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInputs {
    pub gas_price: String,
    pub ethanol_price: String,
    pub tank_capacity: String,
    pub fill_type: FillType,
    /// `None` until edited; follows the tank capacity meanwhile.
    pub partial_amount: Option<String>,
    pub current_level: Option<String>,
    pub blend: BlendChoice,
    pub custom_percent: String,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self::for_currency(currency::DEFAULT_CURRENCY)
    }
}

impl CalculatorInputs {
    pub fn for_currency(code: &str) -> Self {
        let prices = currency::default_prices(code);
        CalculatorInputs {
            gas_price: format!("{:.2}", prices.gas),
            ethanol_price: format!("{:.2}", prices.ethanol),
            tank_capacity: limits::TANK_CAPACITY_DEFAULT.to_string(),
            fill_type: FillType::default(),
            partial_amount: None,
            current_level: None,
            blend: BlendChoice::default(),
            custom_percent: limits::CUSTOM_BLEND_DEFAULT.to_string(),
        }
    }

    /// Resets both price fields to the defaults of `code`.
    pub fn apply_currency_defaults(&mut self, code: &str) {
        let prices = currency::default_prices(code);
        self.gas_price = format!("{:.2}", prices.gas);
        self.ethanol_price = format!("{:.2}", prices.ethanol);
    }

    fn capacity_hint(&self) -> f64 {
        parse_number(&self.tank_capacity, 0.0)
    }

    /// Text of the partial-fill field: the user's entry, or the default for
    /// the current capacity.
    pub fn partial_amount_text(&self) -> String {
        match &self.partial_amount {
            Some(text) => text.clone(),
            None => limits::partial_amount_default(self.capacity_hint()).to_string(),
        }
    }

    pub fn current_level_text(&self) -> String {
        match &self.current_level {
            Some(text) => text.clone(),
            None => limits::top_off_level_default(self.capacity_hint()).to_string(),
        }
    }

    pub fn evaluate(&self) -> EngineResult<BlendSnapshot> {
        let tank_capacity = limits::tank_capacity(parse_number(&self.tank_capacity, f64::NAN))?;
        let plan = self.fill_type.plan(
            parse_number(&self.partial_amount_text(), f64::NAN),
            parse_number(&self.current_level_text(), f64::NAN),
        );
        let total_volume = plan.total_volume(tank_capacity)?;
        let ethanol_percent = self
            .blend
            .ethanol_percent(parse_number(&self.custom_percent, f64::NAN))?;

        let request = BlendRequest::new(
            total_volume,
            ethanol_percent,
            parse_number(&self.gas_price, f64::NAN),
            parse_number(&self.ethanol_price, f64::NAN),
        );
        let (breakdown, energy) = match engine::calculate_blend(&request) {
            Ok(result) => {
                let (breakdown, energy) = result.into_parts(total_volume);
                (breakdown, Some(energy))
            }
            Err(BlendError::UndefinedEnergyContent) => (engine::compute_volumes_and_costs(&request)?, None),
            Err(e) => return Err(e),
        };

        Ok(BlendSnapshot {
            ethanol_percent,
            breakdown,
            energy,
        })
    }
}
