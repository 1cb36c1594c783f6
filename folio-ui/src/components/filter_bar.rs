//! Filter bar view component
//!
//! Language, seed and the two thresholds. Raw input text is coerced with the
//! `folio_core::input` helpers before it reaches the handlers, so handlers
//! always receive a usable value.

use crate::components::button::{Button, ButtonVariant};
use crate::components::number_input::{NumberInput, NumberInputKind};
use crate::components::utils::likes_label;
use crate::stores::catalog::{CatalogUiState, CatalogUiStateStoreExt};
use dioxus::prelude::*;
use folio_core::input::{parse_seed, parse_threshold};
use folio_core::{FilterKind, Language};
use tracing::warn;

/// Labelled column in the filter bar
#[component]
fn FilterField(
    label: String,
    #[props(default)] html_for: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "filter-field",
            label { r#for: html_for, "{label}" }
            {children}
        }
    }
}

/// Filter bar view (pure, props-based)
#[component]
pub fn FilterBarView(
    state: ReadStore<CatalogUiState>,
    on_language_change: EventHandler<Language>,
    on_seed_change: EventHandler<i64>,
    on_filter_change: EventHandler<(FilterKind, f64)>,
) -> Element {
    let language = *state.language().read();
    let seed = *state.seed().read();
    let likes = *state.likes().read();
    let review = *state.review().read();

    rsx! {
        div { class: "filter-bar",
            FilterField { label: "Language".to_string(), html_for: "language-select",
                select {
                    id: "language-select",
                    class: "select",
                    value: language.code(),
                    onchange: move |e| match e.value().parse::<Language>() {
                        Ok(language) => on_language_change.call(language),
                        Err(err) => warn!("Ignoring language change: {}", err),
                    },
                    for choice in Language::ALL {
                        option {
                            key: "{choice.code()}",
                            value: choice.code(),
                            selected: choice == language,
                            "{choice.label()}"
                        }
                    }
                }
            }
            FilterField { label: "Seed".to_string(), html_for: "seed-input",
                NumberInput {
                    id: "seed-input".to_string(),
                    kind: NumberInputKind::Field,
                    value: seed.to_string(),
                    on_input: move |raw: String| on_seed_change.call(parse_seed(&raw)),
                }
            }
            FilterField { label: likes_label(likes), html_for: "likes-input",
                NumberInput {
                    id: "likes-input".to_string(),
                    kind: NumberInputKind::Range,
                    value: likes.to_string(),
                    min: "0",
                    max: "10",
                    step: "0.1",
                    on_input: move |raw: String| {
                        on_filter_change.call((FilterKind::Likes, parse_threshold(&raw)))
                    },
                }
            }
            FilterField { label: "Review".to_string(), html_for: "review-input",
                NumberInput {
                    id: "review-input".to_string(),
                    kind: NumberInputKind::Field,
                    value: review.to_string(),
                    min: "0",
                    max: "5",
                    step: "0.1",
                    on_input: move |raw: String| {
                        on_filter_change.call((FilterKind::Review, parse_threshold(&raw)))
                    },
                }
            }
            if likes != 0.0 || review != 0.0 {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        on_filter_change.call((FilterKind::Likes, 0.0));
                        on_filter_change.call((FilterKind::Review, 0.0));
                    },
                    "Clear filters"
                }
            }
        }
    }
}
