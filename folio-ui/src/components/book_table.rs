//! Book table view component - pure rendering, no generation
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogUiState>` and reads the list fields through
//! lenses. Row expansion is local to the view: at most one row is open, and
//! clicking it again closes it.

use crate::components::button::{Button, ButtonVariant};
use crate::components::expanded_book::ExpandedBookRow;
use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{BookOpenIcon, ChevronDownIcon, ChevronRightIcon};
use crate::components::infinite_scroll::InfiniteScroll;
use crate::components::utils::toggle_expanded;
use crate::stores::catalog::{CatalogUiState, CatalogUiStateStoreExt};
use dioxus::prelude::*;
use folio_core::BookRecord;

const COLUMNS: [&str; 5] = ["#", "ISBN", "Title", "Author(s)", "Publisher"];

/// Book row plus its detail row when expanded
#[component]
fn BookRow(book: BookRecord, expanded: bool, on_toggle: EventHandler<u32>) -> Element {
    let id = book.id;
    let row_class = if expanded {
        "book-row active"
    } else {
        "book-row"
    };

    rsx! {
        tr { class: row_class, onclick: move |_| on_toggle.call(id),
            td { class: "book-id",
                if expanded {
                    ChevronDownIcon { class: "icon chevron" }
                } else {
                    ChevronRightIcon { class: "icon chevron" }
                }
                "{book.id}"
            }
            td { class: "mono", "{book.isbn}" }
            td { "{book.title}" }
            td { "{book.authors}" }
            td { "{book.publisher}" }
        }
        if expanded {
            ExpandedBookRow { book: book.clone() }
        }
    }
}

/// Book table view (pure, props-based)
#[component]
pub fn BookTableView(state: ReadStore<CatalogUiState>, on_load_more: EventHandler<()>) -> Element {
    let books = state.books().read().clone();
    let generation = *state.generation().read();
    let is_loading = *state.is_loading().read();
    let has_more = *state.has_more().read();

    let mut expanded_id = use_signal(|| None::<u32>);
    let expanded = expanded_id();
    let content_len = books.len();

    rsx! {
        InfiniteScroll {
            enabled: has_more && !is_loading,
            generation,
            content_len,
            on_load_more,
            class: "book-table-scroll".to_string(),
            table { class: "book-table",
                thead {
                    tr {
                        for column in COLUMNS {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody {
                    for book in books {
                        BookRow {
                            key: "{book.id}",
                            expanded: expanded == Some(book.id),
                            book: book.clone(),
                            on_toggle: move |id: u32| expanded_id.set(toggle_expanded(expanded_id(), id)),
                        }
                    }
                }
            }
            if content_len == 0 {
                div { class: "empty-state",
                    BookOpenIcon { class: "icon icon-large" }
                    h2 { "No books match the current filters" }
                    p { "Lower the likes or review threshold, or load more books." }
                    if has_more && !is_loading {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_load_more.call(()),
                            "Load more"
                        }
                    }
                }
            }
            if has_more {
                LoadingSpinner {}
            }
        }
    }
}
