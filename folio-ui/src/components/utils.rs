//! Utility functions for UI components

/// Review score with one decimal, e.g. `4.0`
pub fn format_review(review: f64) -> String {
    format!("{:.1}", review)
}

/// One star per whole review point, rounded half away from zero
pub fn review_stars(review: f64) -> String {
    let count = if review.is_finite() && review > 0.0 {
        review.round() as usize
    } else {
        0
    };
    "★".repeat(count)
}

/// Label shown above the likes slider
pub fn likes_label(likes: f64) -> String {
    format!("Likes {:.1}", likes)
}

/// Next expanded row after a click on `clicked`: opens it, or closes it if it
/// was already open. Only one row is expanded at a time.
pub fn toggle_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_review() {
        assert_eq!(format_review(4.0), "4.0");
        assert_eq!(format_review(3.14), "3.1");
        assert_eq!(format_review(0.0), "0.0");
    }

    #[test]
    fn test_review_stars() {
        assert_eq!(review_stars(0.0), "");
        assert_eq!(review_stars(0.4), "");
        assert_eq!(review_stars(2.5), "★★★");
        assert_eq!(review_stars(4.4), "★★★★");
        assert_eq!(review_stars(5.0), "★★★★★");
        assert_eq!(review_stars(f64::NAN), "");
    }

    #[test]
    fn test_likes_label() {
        assert_eq!(likes_label(3.5), "Likes 3.5");
        assert_eq!(likes_label(0.0), "Likes 0.0");
        assert_eq!(likes_label(10.0), "Likes 10.0");
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 3), Some(3));
        assert_eq!(toggle_expanded(Some(3), 3), None);
        assert_eq!(toggle_expanded(Some(3), 7), Some(7));
    }
}
