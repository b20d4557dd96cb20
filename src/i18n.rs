//! Immutable translation tables keyed by [`Language`].

use crate::models::{BlendChoice, FillType, Language};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod keys {
    pub const TITLE: &str = "title";
    pub const CURRENCY: &str = "currency";
    pub const GAS_PRICE: &str = "gas_price";
    pub const ETHANOL_PRICE: &str = "ethanol_price";
    pub const TANK_CAPACITY: &str = "tank_capacity";
    pub const FILL_TYPE: &str = "fill_type";
    pub const FULL_FILL: &str = "full_fill";
    pub const PARTIAL: &str = "partial";
    pub const TOP_OFF: &str = "top_off";
    pub const ETHANOL_BLEND: &str = "ethanol_blend";
    pub const CUSTOM_BLEND: &str = "custom_blend";
    pub const AMOUNT_TO_ADD: &str = "amount_to_add";
    pub const CURRENT_FUEL: &str = "current_fuel";
    pub const VOLUME_BREAKDOWN: &str = "volume_breakdown";
    pub const TOTAL_MIX: &str = "total_mix";
    pub const GASOLINE_VOLUME: &str = "gasoline_volume";
    pub const ETHANOL_VOLUME: &str = "ethanol_volume";
    pub const COST_BREAKDOWN: &str = "cost_breakdown";
    pub const TOTAL_COST: &str = "total_cost";
    pub const GASOLINE_COST: &str = "gasoline_cost";
    pub const ETHANOL_COST: &str = "ethanol_cost";
    pub const PERFORMANCE: &str = "performance";
    pub const TOTAL_BLEND: &str = "total_blend";
    pub const GASOLINE_ENERGY: &str = "gasoline_energy";
    pub const RANGE_IMPACT: &str = "range_impact";
    pub const NOT_AVAILABLE: &str = "not_available";
    pub const INVALID_INPUT: &str = "invalid_input";
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (keys::TITLE, "Ethanol Blend Calculator"),
        (keys::CURRENCY, "Currency"),
        (keys::GAS_PRICE, "Gas Price/L"),
        (keys::ETHANOL_PRICE, "Ethanol Price/L"),
        (keys::TANK_CAPACITY, "Tank Capacity (L)"),
        (keys::FILL_TYPE, "Fill Type"),
        (keys::FULL_FILL, "Full Fill"),
        (keys::PARTIAL, "Partial"),
        (keys::TOP_OFF, "Top-off"),
        (keys::ETHANOL_BLEND, "Ethanol Blend"),
        (keys::CUSTOM_BLEND, "Custom Blend %"),
        (keys::AMOUNT_TO_ADD, "Amount to Add (L)"),
        (keys::CURRENT_FUEL, "Current Fuel Level (L)"),
        (keys::VOLUME_BREAKDOWN, "VOLUME BREAKDOWN"),
        (keys::TOTAL_MIX, "Total Mix Volume"),
        (keys::GASOLINE_VOLUME, "Gasoline Volume"),
        (keys::ETHANOL_VOLUME, "Ethanol Volume"),
        (keys::COST_BREAKDOWN, "COST BREAKDOWN"),
        (keys::TOTAL_COST, "Total Cost"),
        (keys::GASOLINE_COST, "Gasoline Cost"),
        (keys::ETHANOL_COST, "Ethanol Cost"),
        (keys::PERFORMANCE, "PERFORMANCE"),
        (keys::TOTAL_BLEND, "Total Blend Mix"),
        (keys::GASOLINE_ENERGY, "Gasoline Energy"),
        (keys::RANGE_IMPACT, "Range Impact"),
        (keys::NOT_AVAILABLE, "N/A"),
        (keys::INVALID_INPUT, "Invalid input"),
    ])
});

static AR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (keys::TITLE, "حاسبة مزيج الإيثانول"),
        (keys::CURRENCY, "العملة"),
        (keys::GAS_PRICE, "سعر البنزين/لتر"),
        (keys::ETHANOL_PRICE, "سعر الإيثانول/لتر"),
        (keys::TANK_CAPACITY, "سعة الخزان (لتر)"),
        (keys::FILL_TYPE, "نوع التعبئة"),
        (keys::FULL_FILL, "تعبئة كاملة"),
        (keys::PARTIAL, "تعبئة جزئية"),
        (keys::TOP_OFF, "تعبئة علوية"),
        (keys::ETHANOL_BLEND, "مزيج الإيثانول"),
        (keys::CUSTOM_BLEND, "نسبة المزيج المخصص %"),
        (keys::AMOUNT_TO_ADD, "الكمية المراد إضافتها (لتر)"),
        (keys::CURRENT_FUEL, "مستوى الوقود الحالي (لتر)"),
        (keys::VOLUME_BREAKDOWN, "تفصيل الحجم"),
        (keys::TOTAL_MIX, "إجمالي حجم المزيج"),
        (keys::GASOLINE_VOLUME, "حجم البنزين"),
        (keys::ETHANOL_VOLUME, "حجم الإيثانول"),
        (keys::COST_BREAKDOWN, "تفصيل التكلفة"),
        (keys::TOTAL_COST, "التكلفة الإجمالية"),
        (keys::GASOLINE_COST, "تكلفة البنزين"),
        (keys::ETHANOL_COST, "تكلفة الإيثانول"),
        (keys::PERFORMANCE, "الأداء"),
        (keys::TOTAL_BLEND, "إجمالي المزيج"),
        (keys::GASOLINE_ENERGY, "طاقة البنزين"),
        (keys::RANGE_IMPACT, "تأثير المدى"),
        (keys::NOT_AVAILABLE, "غير متاح"),
        (keys::INVALID_INPUT, "مدخلات غير صالحة"),
    ])
});

fn table(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    match lang {
        Language::En => &*EN,
        Language::Ar => &*AR,
    }
}

/// Translated string for `key`. Falls back to English, then to the key.
pub fn t(lang: Language, key: &'static str) -> &'static str {
    lookup(table(lang), &*EN, key)
}

pub(crate) fn lookup<'a>(
    primary: &HashMap<&'static str, &'a str>,
    fallback: &HashMap<&'static str, &'a str>,
    key: &'a str,
) -> &'a str {
    primary
        .get(key)
        .or_else(|| fallback.get(key))
        .copied()
        .unwrap_or(key)
}

pub fn fill_type_label(lang: Language, fill_type: FillType) -> &'static str {
    let key = match fill_type {
        FillType::FullFill => keys::FULL_FILL,
        FillType::Partial => keys::PARTIAL,
        FillType::TopOff => keys::TOP_OFF,
    };
    t(lang, key)
}

pub fn blend_choice_label(lang: Language, choice: BlendChoice) -> &'static str {
    match (lang, choice) {
        (Language::En, BlendChoice::Preset(0)) => "E0 (Pure Gasoline)",
        (Language::En, BlendChoice::Preset(5)) => "E5 (Standard)",
        (Language::En, BlendChoice::Preset(10)) => "E10 (Common)",
        (Language::En, BlendChoice::Preset(15)) => "E15 (Approved 2001+)",
        (Language::En, BlendChoice::Preset(20)) => "E20 (Limited Use)",
        (Language::En, BlendChoice::Preset(25)) => "E25 (Brazil Std.)",
        (Language::En, BlendChoice::Preset(85)) => "E85 (Flex Fuel)",
        (Language::Ar, BlendChoice::Preset(0)) => "E0 (بنزين نقي)",
        (Language::Ar, BlendChoice::Preset(5)) => "E5 (قياسي)",
        (Language::Ar, BlendChoice::Preset(10)) => "E10 (شائع)",
        (Language::Ar, BlendChoice::Preset(15)) => "E15 (معتمد 2001+)",
        (Language::Ar, BlendChoice::Preset(20)) => "E20 (استخدام محدود)",
        (Language::Ar, BlendChoice::Preset(25)) => "E25 (معيار برازيلي)",
        (Language::Ar, BlendChoice::Preset(85)) => "E85 (وقود مرن)",
        (Language::En, BlendChoice::Preset(_)) => "Other",
        (Language::Ar, BlendChoice::Preset(_)) => "أخرى",
        (Language::En, BlendChoice::Custom) => "Custom",
        (Language::Ar, BlendChoice::Custom) => "مخصص",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tips {
    pub title: &'static str,
    pub heading: &'static str,
    pub notes: &'static [&'static str],
}

pub fn tips(lang: Language) -> Tips {
    match lang {
        Language::En => Tips {
            title: "Tips & Information",
            heading: "Safety Notes:",
            notes: &[
                "Always verify your vehicle's recommended maximum ethanol content",
                "Add ethanol first, then gasoline",
                "Don't exceed manufacturer's recommended blend ratio",
            ],
        },
        Language::Ar => Tips {
            title: "نصائح ومعلومات",
            heading: "ملاحظات السلامة:",
            notes: &[
                "تحقق دائمًا من الحد الأقصى للإيثانول الموصى به لسيارتك",
                "أضف الإيثانول أولاً ثم البنزين",
                "لا تتجاوز نسبة الخلط الموصى بها من الشركة المصنعة",
            ],
        },
    }
}
