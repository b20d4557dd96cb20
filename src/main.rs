#![allow(non_snake_case)]
use dioxus::prelude::*;

mod calculator;
mod config;
mod currency;
mod engine;
mod error;
mod i18n;
mod models;
mod utils;

use calculator::CalculatorInputs;
use config::{limits, AppConfig};
use currency::{BuiltinSymbols, COMMON_CURRENCIES, DEFAULT_CURRENCY};
use i18n::keys;
use models::{BlendChoice, BlendSnapshot, FillType, Language};

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Navbar)]
    #[route("/?:lang")]
    Home { lang: Language },
}

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(e) = dotenvy::dotenv() {
            println!("LOG: .env not found: {}", e);
        }
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("LOG: {}; using default configuration", e);
            AppConfig::default()
        }
    };

    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("LOG: logger already initialised: {}", e);
    }

    #[cfg(feature = "server")]
    {
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => {
                if let Err(e) = runtime.block_on(serve(config.port)) {
                    tracing::error!("server stopped: {}", e);
                }
            }
            Err(e) => tracing::error!("failed to start tokio runtime: {}", e),
        }
        return;
    }

    #[cfg(not(feature = "server"))]
    launch(App);
}

#[cfg(feature = "server")]
async fn serve(port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let app = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    axum::serve(listener, app).await
}

fn App() -> Element {
    // Display language of this session
    use_context_provider(|| Signal::new(Language::default()));

    rsx! {
        link { rel: "stylesheet", href: asset!("/assets/style.css") }
        Router::<Route> {}
    }
}

#[component]
fn Navbar() -> Element {
    let mut language = use_context::<Signal<Language>>();
    let nav = use_navigator();
    let lang = language();

    rsx! {
        div {
            class: if lang.is_rtl() { "app rtl" } else { "app" },
            dir: lang.dir(),
            lang: lang.code(),
            nav { class: "navbar",
                h1 { class: "nav-brand", "{i18n::t(lang, keys::TITLE)}" }
                div { class: "language-container",
                    for choice in Language::ALL {
                        button {
                            key: "{choice}",
                            class: if choice == lang { "lang-button active" } else { "lang-button" },
                            onclick: move |_| {
                                tracing::info!(language = %choice, "switching display language");
                                language.set(choice);
                                nav.replace(Route::Home { lang: choice });
                            },
                            "{choice.native_name()}"
                        }
                    }
                }
            }
            Outlet::<Route> {}
            Footer {}
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: String,
    #[props(default)] max: String,
    step: f64,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "modern-input",
                type: "number",
                min: "0",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[component]
fn Home(lang: Language) -> Element {
    let mut language = use_context::<Signal<Language>>();
    // The query parameter wins over the session language
    use_effect(use_reactive((&lang,), move |(lang,)| {
        if *language.peek() != lang {
            language.set(lang);
        }
    }));
    let lang = language();

    let mut currency_code = use_signal(|| DEFAULT_CURRENCY.to_string());
    let mut inputs = use_signal(CalculatorInputs::default);
    let outcome = use_memo(move || inputs.read().evaluate());

    // Shown while the current inputs are invalid
    let mut last_valid = use_signal(|| None::<BlendSnapshot>);
    use_effect(move || {
        if let Ok(snapshot) = outcome() {
            last_valid.set(Some(snapshot));
        }
    });

    let snapshot = match outcome() {
        Ok(snapshot) => Some(snapshot),
        Err(_) => last_valid(),
    };
    let error_msg = outcome().err().map(|e| e.to_string());
    let symbol = currency::currency_symbol(&BuiltinSymbols, &currency_code());
    let form = inputs();
    let capacity_max = limits::TANK_CAPACITY_MAX.to_string();
    let custom_max = limits::CUSTOM_BLEND_MAX.to_string();

    rsx! {
        div { class: "page-container",
            div { class: "content-card",
                div { class: "input-row three",
                    div { class: "field",
                        label { class: "field-label", "{i18n::t(lang, keys::CURRENCY)}" }
                        select {
                            class: "modern-input",
                            value: "{currency_code}",
                            onchange: move |e| {
                                let code = e.value();
                                inputs.write().apply_currency_defaults(&code);
                                currency_code.set(code);
                            },
                            for code in COMMON_CURRENCIES {
                                option { key: "{code}", value: "{code}", selected: code == currency_code(), "{code}" }
                            }
                        }
                    }
                    NumberField {
                        label: i18n::t(lang, keys::GAS_PRICE),
                        value: form.gas_price.clone(),
                        step: limits::PRICE_STEP,
                        oninput: move |v| inputs.write().gas_price = v,
                    }
                    NumberField {
                        label: i18n::t(lang, keys::ETHANOL_PRICE),
                        value: form.ethanol_price.clone(),
                        step: limits::PRICE_STEP,
                        oninput: move |v| inputs.write().ethanol_price = v,
                    }
                }

                div { class: "input-row two",
                    div { class: "column",
                        NumberField {
                            label: i18n::t(lang, keys::TANK_CAPACITY),
                            value: form.tank_capacity.clone(),
                            max: capacity_max,
                            step: limits::TANK_CAPACITY_STEP,
                            oninput: move |v| inputs.write().tank_capacity = v,
                        }
                        div { class: "field",
                            label { class: "field-label", "{i18n::t(lang, keys::FILL_TYPE)}" }
                            select {
                                class: "modern-input",
                                value: "{form.fill_type.id()}",
                                onchange: move |e| {
                                    if let Some(fill_type) = FillType::from_id(&e.value()) {
                                        inputs.write().fill_type = fill_type;
                                    }
                                },
                                for kind in FillType::ALL {
                                    option {
                                        key: "{kind.id()}",
                                        value: "{kind.id()}",
                                        selected: kind == form.fill_type,
                                        "{i18n::fill_type_label(lang, kind)}"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "column",
                        div { class: "field",
                            label { class: "field-label", "{i18n::t(lang, keys::ETHANOL_BLEND)}" }
                            select {
                                class: "modern-input",
                                value: "{form.blend.id()}",
                                onchange: move |e| {
                                    if let Some(blend) = BlendChoice::from_id(&e.value()) {
                                        inputs.write().blend = blend;
                                    }
                                },
                                for choice in BlendChoice::all() {
                                    option {
                                        key: "{choice.id()}",
                                        value: "{choice.id()}",
                                        selected: choice == form.blend,
                                        "{i18n::blend_choice_label(lang, choice)}"
                                    }
                                }
                            }
                        }
                        if form.blend == BlendChoice::Custom {
                            NumberField {
                                label: i18n::t(lang, keys::CUSTOM_BLEND),
                                value: form.custom_percent.clone(),
                                max: custom_max,
                                step: 1.0,
                                oninput: move |v| inputs.write().custom_percent = v,
                            }
                        }
                    }
                }

                match form.fill_type {
                    FillType::FullFill => rsx! {},
                    FillType::Partial => rsx! {
                        NumberField {
                            label: i18n::t(lang, keys::AMOUNT_TO_ADD),
                            value: form.partial_amount_text(),
                            max: form.tank_capacity.clone(),
                            step: 1.0,
                            oninput: move |v| inputs.write().partial_amount = Some(v),
                        }
                    },
                    FillType::TopOff => rsx! {
                        NumberField {
                            label: i18n::t(lang, keys::CURRENT_FUEL),
                            value: form.current_level_text(),
                            max: form.tank_capacity.clone(),
                            step: 1.0,
                            oninput: move |v| inputs.write().current_level = Some(v),
                        }
                    },
                }

                if let Some(msg) = error_msg {
                    div { class: "error-message", "{i18n::t(lang, keys::INVALID_INPUT)}: {msg}" }
                }

                if let Some(snapshot) = snapshot {
                    ResultsPanel { lang: lang, symbol: symbol, snapshot: snapshot }
                }
            }
        }
    }
}

#[component]
fn Metric(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "metric-group",
            div { class: "metric-label", "{label}" }
            div { class: "metric-value", "{value}" }
        }
    }
}

#[component]
fn ResultsPanel(props: models::ResultsPanelProps) -> Element {
    let lang = props.lang;
    let symbol = props.symbol;
    let b = props.snapshot.breakdown;
    let (energy, range) = utils::format_energy(props.snapshot.energy, lang);
    let t = |key: &'static str| i18n::t(lang, key);

    rsx! {
        div { class: "results",
            div { class: "grid-container",
                div { class: "column",
                    div { class: "section-label", "{t(keys::VOLUME_BREAKDOWN)}" }
                    Metric { label: t(keys::TOTAL_MIX), value: utils::format_volume(b.total_volume) }
                    Metric { label: t(keys::GASOLINE_VOLUME), value: utils::format_volume(b.gasoline_volume) }
                    Metric { label: t(keys::ETHANOL_VOLUME), value: utils::format_volume(b.ethanol_volume) }
                }
                div { class: "column",
                    div { class: "section-label", "{t(keys::COST_BREAKDOWN)}" }
                    Metric { label: t(keys::TOTAL_COST), value: utils::format_money(&symbol, b.total_cost) }
                    Metric { label: t(keys::GASOLINE_COST), value: utils::format_money(&symbol, b.gasoline_cost) }
                    Metric { label: t(keys::ETHANOL_COST), value: utils::format_money(&symbol, b.ethanol_cost) }
                }
                div { class: "column",
                    div { class: "section-label", "{t(keys::PERFORMANCE)}" }
                    Metric { label: t(keys::TOTAL_BLEND), value: utils::format_blend_label(props.snapshot.ethanol_percent) }
                    Metric { label: t(keys::GASOLINE_ENERGY), value: energy }
                    Metric { label: t(keys::RANGE_IMPACT), value: range }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;

#[component]
fn Footer() -> Element {
    let language = use_context::<Signal<Language>>();
    let tips = i18n::tips(language());

    rsx! {
        footer { class: "footer",
            details { class: "tips",
                summary { "{tips.title}" }
                h3 { "{tips.heading}" }
                ul {
                    for note in tips.notes.iter() {
                        li { key: "{note}", "{note}" }
                    }
                }
            }
        }
    }
}
