#[cfg(test)]
mod unit_tests {
    use crate::engine::*;
    use crate::error::BlendError;
    use crate::models::BlendRequest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_egp_e10_scenario() {
        let request = BlendRequest::new(50.0, 10.0, 17.00, 100.00);
        let result = calculate_blend(&request).unwrap();

        assert!(close(result.ethanol_volume, 5.0));
        assert!(close(result.gasoline_volume, 45.0));
        assert!(close(result.ethanol_cost, 500.0));
        assert!(close(result.gasoline_cost, 765.0));
        assert!(close(result.total_cost, 1265.0));
        assert!(close(result.relative_energy_percent, 97.0));
        assert!(close(result.range_impact_percent, 3.0));
    }

    #[test]
    fn test_flex_fuel_scenario() {
        let request = BlendRequest::new(30.0, 85.0, 1.50, 1.20);
        let result = calculate_blend(&request).unwrap();

        assert!(close(result.ethanol_volume, 25.5));
        assert!(close(result.gasoline_volume, 4.5));
        assert!(close(result.ethanol_cost, 30.60));
        assert!(close(result.gasoline_cost, 6.75));
        assert!(close(result.total_cost, 37.35));
        assert!((result.relative_energy_percent - 74.5).abs() < 1e-6);
        assert!((result.range_impact_percent - 25.5).abs() < 1e-6);
    }

    #[test]
    fn test_pure_gasoline() {
        let breakdown = compute_volumes_and_costs(&BlendRequest::new(40.0, 0.0, 1.5, 1.2)).unwrap();
        assert_eq!(breakdown.ethanol_volume, 0.0);
        assert_eq!(breakdown.gasoline_volume, 40.0);

        let energy = compute_energy_content(breakdown.ethanol_volume, breakdown.gasoline_volume).unwrap();
        assert!(close(energy.relative_energy_percent, 100.0));
        assert!(close(energy.range_impact_percent, 0.0));
    }

    #[test]
    fn test_pure_ethanol() {
        let breakdown = compute_volumes_and_costs(&BlendRequest::new(40.0, 100.0, 1.5, 1.2)).unwrap();
        assert_eq!(breakdown.gasoline_volume, 0.0);
        assert!(close(breakdown.ethanol_volume, 40.0));

        let energy = compute_energy_content(breakdown.ethanol_volume, breakdown.gasoline_volume).unwrap();
        assert!(close(energy.relative_energy_percent, 70.0));
        assert!(close(energy.range_impact_percent, 30.0));
    }

    #[test]
    fn test_zero_volume_has_no_energy_content() {
        let request = BlendRequest::new(0.0, 10.0, 1.5, 1.2);
        let breakdown = compute_volumes_and_costs(&request).unwrap();
        assert_eq!(breakdown.total_cost, 0.0);

        assert_eq!(compute_energy_content(0.0, 0.0), Err(BlendError::UndefinedEnergyContent));
        assert_eq!(calculate_blend(&request), Err(BlendError::UndefinedEnergyContent));
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        let negative_percent = compute_volumes_and_costs(&BlendRequest::new(50.0, -5.0, 1.5, 1.2));
        assert!(matches!(
            negative_percent,
            Err(BlendError::InvalidInput { field: "ethanol_percent", .. })
        ));

        let negative_volume = compute_volumes_and_costs(&BlendRequest::new(-1.0, 10.0, 1.5, 1.2));
        assert!(matches!(
            negative_volume,
            Err(BlendError::InvalidInput { field: "total_volume", .. })
        ));

        let over_hundred = compute_volumes_and_costs(&BlendRequest::new(50.0, 100.5, 1.5, 1.2));
        assert!(matches!(over_hundred, Err(BlendError::InvalidInput { .. })));

        let negative_price = compute_volumes_and_costs(&BlendRequest::new(50.0, 10.0, -0.01, 1.2));
        assert!(matches!(
            negative_price,
            Err(BlendError::InvalidInput { field: "gas_price", .. })
        ));

        let nan_price = compute_volumes_and_costs(&BlendRequest::new(50.0, 10.0, 1.5, f64::NAN));
        assert!(matches!(
            nan_price,
            Err(BlendError::InvalidInput { field: "ethanol_price", .. })
        ));

        assert!(matches!(
            compute_energy_content(-1.0, 5.0),
            Err(BlendError::InvalidInput { field: "ethanol_volume", .. })
        ));
    }

    #[test]
    fn test_huge_volumes_stay_in_range() {
        let energy = compute_energy_content(1e308, 1e308).unwrap();
        assert!(close(energy.relative_energy_percent, 85.0));
        assert!(close(energy.range_impact_percent, 15.0));

        let energy = compute_energy_content(f64::MAX, 0.0).unwrap();
        assert!(close(energy.relative_energy_percent, 70.0));
    }

    #[test]
    fn test_overflowing_cost_is_rejected() {
        let request = BlendRequest::new(1e300, 10.0, 1e300, 1e300);
        assert!(matches!(
            calculate_blend(&request),
            Err(BlendError::InvalidInput { field: "ethanol_price", .. })
        ));

        let gasoline_only = BlendRequest::new(1e300, 0.0, 1e300, 1.0);
        assert!(matches!(
            compute_volumes_and_costs(&gasoline_only),
            Err(BlendError::InvalidInput { field: "gas_price", .. })
        ));

        let both_near_max = BlendRequest::new(f64::MAX, 50.0, 1.5, 1.5);
        assert!(matches!(
            compute_volumes_and_costs(&both_near_max),
            Err(BlendError::InvalidInput { field: "total_volume", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = compute_volumes_and_costs(&BlendRequest::new(-1.0, 10.0, 1.5, 1.2)).unwrap_err();
        assert_eq!(err.to_string(), "total_volume = -1: must be a finite non-negative number");
    }
}

#[cfg(test)]
mod shell_tests {
    use crate::calculator::CalculatorInputs;
    use crate::config::{limits, AppConfig};
    use crate::currency::*;
    use crate::error::BlendError;
    use crate::i18n::{self, keys};
    use crate::models::*;
    use crate::utils::*;
    use std::collections::HashMap;
    use tracing::Level;

    #[test]
    fn test_fill_plans() {
        assert_eq!(FillPlan::Full.total_volume(50.0), Ok(50.0));
        assert_eq!(FillPlan::Partial { amount: 30.0 }.total_volume(50.0), Ok(30.0));
        assert_eq!(FillPlan::TopOff { current_level: 12.5 }.total_volume(50.0), Ok(37.5));
        assert_eq!(FillPlan::TopOff { current_level: 50.0 }.total_volume(50.0), Ok(0.0));
    }

    #[test]
    fn test_fill_plan_rejects_amounts_outside_tank() {
        assert!(matches!(
            FillPlan::Partial { amount: 60.0 }.total_volume(50.0),
            Err(BlendError::InvalidInput { field: "amount", .. })
        ));
        assert!(matches!(
            FillPlan::TopOff { current_level: -1.0 }.total_volume(50.0),
            Err(BlendError::InvalidInput { field: "current_level", .. })
        ));
        assert!(matches!(
            FillPlan::Full.total_volume(-10.0),
            Err(BlendError::InvalidInput { field: "tank_capacity", .. })
        ));
    }

    #[test]
    fn test_fill_type_ids() {
        for fill_type in FillType::ALL {
            assert_eq!(FillType::from_id(fill_type.id()), Some(fill_type));
        }
        assert_eq!(FillType::from_id("overflow"), None);
        assert_eq!(FillType::Partial.plan(20.0, 5.0), FillPlan::Partial { amount: 20.0 });
        assert_eq!(FillType::TopOff.plan(20.0, 5.0), FillPlan::TopOff { current_level: 5.0 });
    }

    #[test]
    fn test_blend_choices() {
        let ids: Vec<String> = BlendChoice::all().map(BlendChoice::id).collect();
        assert_eq!(ids, ["E0", "E5", "E10", "E15", "E20", "E25", "E85", "custom"]);
        assert_eq!(BlendChoice::from_id("E85"), Some(BlendChoice::Preset(85)));
        assert_eq!(BlendChoice::from_id("custom"), Some(BlendChoice::Custom));

        assert_eq!(BlendChoice::Preset(15).ethanol_percent(60.0), Ok(15.0));
        assert_eq!(BlendChoice::Custom.ethanol_percent(60.0), Ok(60.0));
        assert!(matches!(
            BlendChoice::Custom.ethanol_percent(90.0),
            Err(BlendError::InvalidInput { field: "custom_percent", .. })
        ));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("ar".parse::<Language>(), Ok(Language::Ar));
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(BlendError::UnknownLanguage("fr".to_string()))
        );
        assert_eq!(Language::Ar.to_string(), "ar");
        assert_eq!(Language::default(), Language::En);
        assert!(Language::Ar.is_rtl());
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn test_translations() {
        assert_eq!(i18n::t(Language::En, keys::TITLE), "Ethanol Blend Calculator");
        assert_eq!(i18n::t(Language::Ar, keys::TITLE), "حاسبة مزيج الإيثانول");
        assert_eq!(i18n::t(Language::Ar, "no_such_key"), "no_such_key");
        assert_eq!(i18n::fill_type_label(Language::En, FillType::TopOff), "Top-off");
        assert_eq!(
            i18n::blend_choice_label(Language::En, BlendChoice::Preset(25)),
            "E25 (Brazil Std.)"
        );
        assert_eq!(i18n::blend_choice_label(Language::Ar, BlendChoice::Custom), "مخصص");
        assert_eq!(i18n::tips(Language::Ar).notes.len(), 3);
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        let english = HashMap::from([(keys::TITLE, "Title"), (keys::CURRENCY, "Currency")]);
        let arabic = HashMap::from([(keys::TITLE, "العنوان")]);

        assert_eq!(i18n::lookup(&arabic, &english, keys::TITLE), "العنوان");
        assert_eq!(i18n::lookup(&arabic, &english, keys::CURRENCY), "Currency");
        assert_eq!(i18n::lookup(&arabic, &english, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_english_key_has_arabic_text() {
        let all_keys = [
            keys::TITLE, keys::CURRENCY, keys::GAS_PRICE, keys::ETHANOL_PRICE,
            keys::TANK_CAPACITY, keys::FILL_TYPE, keys::FULL_FILL, keys::PARTIAL,
            keys::TOP_OFF, keys::ETHANOL_BLEND, keys::CUSTOM_BLEND, keys::AMOUNT_TO_ADD,
            keys::CURRENT_FUEL, keys::VOLUME_BREAKDOWN, keys::TOTAL_MIX,
            keys::GASOLINE_VOLUME, keys::ETHANOL_VOLUME, keys::COST_BREAKDOWN,
            keys::TOTAL_COST, keys::GASOLINE_COST, keys::ETHANOL_COST, keys::PERFORMANCE,
            keys::TOTAL_BLEND, keys::GASOLINE_ENERGY, keys::RANGE_IMPACT,
            keys::NOT_AVAILABLE, keys::INVALID_INPUT,
        ];
        for key in all_keys {
            assert_ne!(i18n::t(Language::En, key), key, "missing English text for {key}");
            assert_ne!(
                i18n::t(Language::Ar, key),
                i18n::t(Language::En, key),
                "missing Arabic text for {key}"
            );
        }
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(currency_symbol(&BuiltinSymbols, "USD"), "$");
        assert_eq!(currency_symbol(&BuiltinSymbols, "EUR"), "€");
        assert_eq!(currency_symbol(&BuiltinSymbols, "EGP"), "EGP");
        assert_eq!(currency_symbol(&BuiltinSymbols, "SEK"), "SEK");
        assert_eq!(currency_symbol(&BuiltinSymbols, "CHF"), "CHF");
        assert_eq!(format_money(&currency_symbol(&BuiltinSymbols, "EGP"), 1265.0), "EGP1265.00");
        for code in COMMON_CURRENCIES {
            assert!(BuiltinSymbols.symbol(code).is_some(), "no symbol for {code}");
        }
        // Unknown code
        assert_eq!(currency_symbol(&BuiltinSymbols, "XYZ"), "XYZ ");
    }

    #[test]
    fn test_injected_symbol_lookup() {
        let lookup = |code: &str| -> Option<String> {
            if code == "EGP" {
                Some("E£".to_string())
            } else {
                None
            }
        };
        assert_eq!(currency_symbol(&lookup, "EGP"), "E£");
        assert_eq!(currency_symbol(&lookup, "USD"), "USD ");
    }

    #[test]
    fn test_default_prices() {
        assert_eq!(COMMON_CURRENCIES.len(), 17);
        assert_eq!(COMMON_CURRENCIES[0], DEFAULT_CURRENCY);
        assert_eq!(default_prices("EGP"), DefaultPrices { gas: 17.0, ethanol: 100.0 });
        assert_eq!(default_prices("JPY"), DefaultPrices { gas: 1.5, ethanol: 1.2 });
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_volume(45.0), "45.0 L");
        assert_eq!(format_volume(25.46), "25.5 L");
        assert_eq!(format_money("$", 37.35), "$37.35");
        assert_eq!(format_money("EGP ", 1265.0), "EGP 1265.00");
        assert_eq!(format_percent(97.0), "97.0%");
        assert_eq!(format_range_impact(3.0), "-3.0%");
        assert_eq!(format_blend_label(10.0), "E10");
    }

    #[test]
    fn test_energy_formatting() {
        let energy = EnergyContent {
            relative_energy_percent: 74.5,
            range_impact_percent: 25.5,
        };
        assert_eq!(
            format_energy(Some(energy), Language::En),
            ("74.5%".to_string(), "-25.5%".to_string())
        );
        assert_eq!(
            format_energy(None, Language::En),
            ("N/A".to_string(), "N/A".to_string())
        );
        assert_eq!(format_energy(None, Language::Ar).0, "غير متاح");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("17.50", 0.0), 17.5);
        assert_eq!(parse_number(" 1,25 ", 0.0), 1.25);
        assert_eq!(parse_number("abc", 3.0), 3.0);
        assert!(parse_number("", f64::NAN).is_nan());
    }

    #[test]
    fn test_default_form() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.gas_price, "17.00");
        assert_eq!(inputs.ethanol_price, "100.00");
        assert_eq!(inputs.tank_capacity, "50");
        assert_eq!(inputs.partial_amount_text(), "30");
        assert_eq!(inputs.current_level_text(), "12.5");

        let snapshot = inputs.evaluate().unwrap();
        assert_eq!(snapshot.ethanol_percent, 0.0);
        assert_eq!(snapshot.breakdown.gasoline_volume, 50.0);
        assert!((snapshot.breakdown.total_cost - 850.0).abs() < 1e-9);
        assert!(snapshot.energy.is_some());
    }

    #[test]
    fn test_form_top_off_with_custom_blend() {
        let mut inputs = CalculatorInputs::for_currency("USD");
        inputs.fill_type = FillType::TopOff;
        inputs.blend = BlendChoice::Custom;
        inputs.custom_percent = "20".to_string();

        let snapshot = inputs.evaluate().unwrap();
        assert!((snapshot.breakdown.total_volume - 37.5).abs() < 1e-9);
        assert!((snapshot.breakdown.ethanol_volume - 7.5).abs() < 1e-9);
        assert!((snapshot.breakdown.total_cost - (7.5 * 1.2 + 30.0 * 1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_form_with_empty_tank_has_no_energy() {
        let mut inputs = CalculatorInputs::default();
        inputs.tank_capacity = "0".to_string();

        let snapshot = inputs.evaluate().unwrap();
        assert_eq!(snapshot.breakdown.total_volume, 0.0);
        assert_eq!(snapshot.breakdown.total_cost, 0.0);
        assert_eq!(snapshot.energy, None);
    }

    #[test]
    fn test_form_rejects_bad_fields() {
        let mut inputs = CalculatorInputs::default();
        inputs.tank_capacity = "301".to_string();
        assert!(matches!(
            inputs.evaluate(),
            Err(BlendError::InvalidInput { field: "tank_capacity", .. })
        ));

        let mut inputs = CalculatorInputs::default();
        inputs.fill_type = FillType::Partial;
        inputs.partial_amount = Some("lots".to_string());
        assert!(matches!(
            inputs.evaluate(),
            Err(BlendError::InvalidInput { field: "amount", .. })
        ));

        let mut inputs = CalculatorInputs::default();
        inputs.gas_price = "-2".to_string();
        assert!(matches!(
            inputs.evaluate(),
            Err(BlendError::InvalidInput { field: "gas_price", .. })
        ));
    }

    #[test]
    fn test_form_fill_defaults_follow_capacity() {
        let mut inputs = CalculatorInputs::default();
        inputs.tank_capacity = "20".to_string();
        inputs.fill_type = FillType::Partial;
        assert_eq!(inputs.partial_amount_text(), "20");
        let snapshot = inputs.evaluate().unwrap();
        assert!((snapshot.breakdown.total_volume - 20.0).abs() < 1e-9);

        inputs.tank_capacity = "10".to_string();
        inputs.fill_type = FillType::TopOff;
        assert_eq!(inputs.current_level_text(), "2.5");
        let snapshot = inputs.evaluate().unwrap();
        assert!((snapshot.breakdown.total_volume - 7.5).abs() < 1e-9);

        // An edited amount is kept when the capacity changes
        inputs.fill_type = FillType::Partial;
        inputs.partial_amount = Some("8".to_string());
        inputs.tank_capacity = "40".to_string();
        assert_eq!(inputs.partial_amount_text(), "8");
        assert!((inputs.evaluate().unwrap().breakdown.total_volume - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_currency_change_resets_prices() {
        let mut inputs = CalculatorInputs::default();
        inputs.gas_price = "20".to_string();
        inputs.apply_currency_defaults("USD");
        assert_eq!(inputs.gas_price, "1.50");
        assert_eq!(inputs.ethanol_price, "1.20");
    }

    #[test]
    fn test_widget_defaults() {
        assert_eq!(limits::partial_amount_default(20.0), 20.0);
        assert_eq!(limits::partial_amount_default(50.0), 30.0);
        assert_eq!(limits::top_off_level_default(60.0), 15.0);
        assert_eq!(limits::tank_capacity(300.0), Ok(300.0));
        assert!(limits::tank_capacity(-1.0).is_err());
    }

    #[test]
    fn test_config_from_lookup() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("9000".to_string()),
            "BLEND_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, Level::DEBUG);

        let defaults = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(defaults, AppConfig::default());

        let bad_port = AppConfig::from_lookup(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert!(matches!(bad_port, Err(BlendError::Config(_))));
    }
}

#[cfg(test)]
mod property_tests {
    use crate::engine::*;
    use crate::error::BlendError;
    use crate::models::BlendRequest;
    use proptest::prelude::*;

    proptest! {
        /// Ethanol and gasoline always add back up to the fill.
        #[test]
        fn volumes_sum_to_total(
            total in 0.0f64..1000.0,
            percent in 0.0f64..=100.0,
            gas in 0.0f64..200.0,
            ethanol in 0.0f64..200.0,
        ) {
            let b = compute_volumes_and_costs(&BlendRequest::new(total, percent, gas, ethanol)).unwrap();
            prop_assert!((b.ethanol_volume + b.gasoline_volume - total).abs() < 1e-9);
            prop_assert!(b.ethanol_volume >= 0.0);
            prop_assert!(b.gasoline_volume >= 0.0);
        }

        #[test]
        fn total_cost_is_sum_of_parts(
            total in 0.0f64..1000.0,
            percent in 0.0f64..=100.0,
            gas in 0.0f64..200.0,
            ethanol in 0.0f64..200.0,
        ) {
            let b = compute_volumes_and_costs(&BlendRequest::new(total, percent, gas, ethanol)).unwrap();
            prop_assert_eq!(b.total_cost, b.ethanol_cost + b.gasoline_cost);
        }

        /// Energy and range impact are complementary and bounded by pure fuels.
        #[test]
        fn energy_and_range_add_to_hundred(
            total in 0.001f64..1000.0,
            percent in 0.0f64..=100.0,
        ) {
            let request = BlendRequest::new(total, percent, 1.0, 1.0);
            let result = calculate_blend(&request).unwrap();
            prop_assert!((result.relative_energy_percent + result.range_impact_percent - 100.0).abs() < 1e-9);
            prop_assert!(result.relative_energy_percent > 70.0 - 1e-9);
            prop_assert!(result.relative_energy_percent <= 100.0 + 1e-9);
        }

        #[test]
        fn percent_outside_range_is_rejected(percent in prop_oneof![-1000.0f64..-0.001, 100.001f64..1000.0]) {
            let outcome = compute_volumes_and_costs(&BlendRequest::new(10.0, percent, 1.0, 1.0));
            let is_invalid = matches!(outcome, Err(BlendError::InvalidInput { .. }));
            prop_assert!(is_invalid);
        }
    }
}
