//! Shared UI components

pub mod app_layout;
pub mod book_table;
pub mod button;
pub mod expanded_book;
pub mod filter_bar;
pub mod helpers;
pub mod icons;
pub mod infinite_scroll;
pub mod number_input;
pub mod title_bar;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use book_table::BookTableView;
pub use button::{Button, ButtonVariant};
pub use expanded_book::ExpandedBookRow;
pub use filter_bar::FilterBarView;
pub use helpers::{LoadingSpinner, PageContainer};
pub use icons::{BookOpenIcon, ChevronDownIcon, ChevronRightIcon, HeartIcon, LoaderIcon};
pub use infinite_scroll::{should_load_more, InfiniteScroll, ScrollMetrics};
pub use number_input::{NumberInput, NumberInputKind};
pub use title_bar::{catalog_status, TitleBarView};
pub use utils::{format_review, likes_label, review_stars, toggle_expanded};
