//! Reusable numeric input component

use dioxus::prelude::*;

/// How the number is entered
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NumberInputKind {
    /// Text box with spinner buttons
    Field,
    /// Slider
    Range,
}

impl NumberInputKind {
    fn input_type(self) -> &'static str {
        match self {
            NumberInputKind::Field => "number",
            NumberInputKind::Range => "range",
        }
    }
}

/// Numeric input that reports the raw text of every edit.
///
/// Parsing is left to the caller so that half-typed values like `-` or `1.`
/// can be coerced the same way everywhere.
#[component]
pub fn NumberInput(
    value: String,
    on_input: EventHandler<String>,
    kind: NumberInputKind,
    #[props(default)] min: Option<&'static str>,
    #[props(default)] max: Option<&'static str>,
    #[props(default)] step: Option<&'static str>,
    #[props(default)] id: Option<String>,
) -> Element {
    let class = match kind {
        NumberInputKind::Field => "number-input",
        NumberInputKind::Range => "range-input",
    };

    rsx! {
        input {
            r#type: kind.input_type(),
            class,
            id: id.as_deref(),
            value: "{value}",
            min,
            max,
            step,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
