//! Expanded book row

use crate::components::icons::HeartIcon;
use crate::components::utils::{format_review, review_stars};
use dioxus::prelude::*;
use folio_core::BookRecord;

/// Detail row shown under an expanded book, spanning every column
#[component]
pub fn ExpandedBookRow(book: BookRecord) -> Element {
    let language = book.language.code().to_uppercase();
    let review = format_review(book.review);
    let stars = review_stars(book.review);

    rsx! {
        tr { class: "expanded-row",
            td { colspan: "5",
                div { class: "expanded-book",
                    img {
                        class: "expanded-book-cover",
                        src: "{book.img}",
                        alt: "{book.title}",
                    }
                    div { class: "expanded-book-body",
                        h4 { "Details for {book.title}" }
                        for (i, paragraph) in book.details.split("\n\n").enumerate() {
                            p { key: "{i}", class: "expanded-book-details", "{paragraph}" }
                        }
                        div { class: "expanded-book-meta",
                            p { "Seed: {book.seed}" }
                            p {
                                strong { "Language:" }
                                " {language}"
                            }
                            p {
                                strong { "Review:" }
                                " {review} "
                                span { class: "stars", "{stars}" }
                            }
                            p { class: "likes",
                                strong { "Likes:" }
                                " "
                                HeartIcon { class: "icon heart" }
                                " {book.likes}"
                            }
                        }
                    }
                }
            }
        }
    }
}
