mod books;
mod layout;

pub use books::Books;
pub use layout::AppLayout;
