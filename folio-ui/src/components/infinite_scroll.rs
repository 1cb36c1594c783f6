//! Infinite scroll container
//!
//! Wraps its children in a scrollable element and asks for the next page when
//! the scroll position comes within `threshold` pixels of the bottom. Requests
//! are deduplicated per `generation`, a counter that grows on every window
//! regeneration, so a burst of scroll events before the next render only
//! produces one request. The counter never repeats after a reset, unlike the
//! window size.

use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Scroll geometry of a container, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub scroll_top: f64,
    /// Visible height of the container
    pub client_height: f64,
    /// Full height of the content
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Pixels of content below the visible area
    pub fn distance_to_bottom(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).max(0.0)
    }

    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() <= threshold.max(0.0)
    }
}

/// Whether a load should be requested for the current scroll position
pub fn should_load_more(
    metrics: &ScrollMetrics,
    threshold: f64,
    enabled: bool,
    generation: u64,
    last_requested: Option<u64>,
) -> bool {
    enabled && last_requested != Some(generation) && metrics.is_near_bottom(threshold)
}

async fn measure(element: &MountedData) -> Option<ScrollMetrics> {
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let rect = element.get_client_rect().await.ok()?;
    Some(ScrollMetrics {
        scroll_top: offset.y,
        client_height: rect.height(),
        scroll_height: size.height,
    })
}

/// Scroll container that calls `on_load_more` near the bottom
#[component]
pub fn InfiniteScroll(
    /// False while loading or once everything is loaded
    enabled: bool,
    /// Changes on every window regeneration
    generation: u64,
    /// Number of rendered items; a change re-checks whether the content fills the container
    content_len: usize,
    on_load_more: EventHandler<()>,
    #[props(default = 200.0)] threshold: f64,
    #[props(default = "infinite-scroll".to_string())] class: String,
    children: Element,
) -> Element {
    let mut mounted_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut last_requested = use_signal(|| None::<u64>);

    let check = move |element: Rc<MountedData>, enabled: bool, generation: u64| {
        spawn(async move {
            let Some(metrics) = measure(&element).await else {
                return;
            };
            if should_load_more(&metrics, threshold, enabled, generation, last_requested()) {
                debug!(
                    "Requesting more at generation {} ({}px from bottom)",
                    generation,
                    metrics.distance_to_bottom()
                );
                last_requested.set(Some(generation));
                on_load_more.call(());
            }
        });
    };

    // Short content never scrolls, so re-check after every change. An empty
    // list is left to the caller.
    use_effect(use_reactive(
        (&content_len, &enabled, &generation),
        move |(content_len, enabled, generation)| {
            if content_len == 0 {
                return;
            }
            if let Some(element) = mounted_element.peek().clone() {
                check(element, enabled, generation);
            }
        },
    ));

    rsx! {
        div {
            class: "{class}",
            onscroll: move |_evt| {
                if let Some(element) = mounted_element.read().clone() {
                    check(element, enabled, generation);
                }
            },
            onmounted: move |evt| {
                let data = evt.data();
                mounted_element.set(Some(data.clone()));
                if content_len > 0 {
                    check(data, enabled, generation);
                }
            },
            {children}
        }
    }
}
