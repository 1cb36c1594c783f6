//! Common helper UI components

mod loading_spinner;
mod page_container;

pub use loading_spinner::LoadingSpinner;
pub use page_container::PageContainer;
