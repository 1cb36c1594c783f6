use folio_core::{
    apply_filters, BookGenerator, Catalog, CatalogConfig, FakeBookGenerator, FilterKind,
    Language, SeededRandom, Thresholds,
};
use proptest::prelude::*;

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::De), Just(Language::Ja)]
}

proptest! {
    #[test]
    fn prop_generate_is_deterministic(
        count in 0usize..120,
        lang in language(),
        seed in any::<i64>(),
    ) {
        let a = FakeBookGenerator.generate(count, lang, seed);
        let b = FakeBookGenerator.generate(count, lang, seed);
        prop_assert_eq!(a.len(), count);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_zero_thresholds_are_identity(
        count in 0usize..80,
        lang in language(),
        seed in any::<i64>(),
        rng_seed in any::<u64>(),
    ) {
        let window = FakeBookGenerator.generate(count, lang, seed);
        let visible = apply_filters(&window, &Thresholds::default(), &mut SeededRandom::new(rng_seed));
        prop_assert_eq!(visible, window);
    }

    #[test]
    fn prop_filtered_books_are_ordered_subset(
        likes in 0.0f64..=10.0,
        review in 0.0f64..=5.0,
        rng_seed in any::<u64>(),
    ) {
        let window = FakeBookGenerator.generate(60, Language::En, 1);
        let thresholds = Thresholds { likes, review };
        let visible = apply_filters(&window, &thresholds, &mut SeededRandom::new(rng_seed));

        let mut ids = window.iter().map(|b| b.id);
        for book in &visible {
            prop_assert!(ids.any(|id| id == book.id), "book {} out of order", book.id);
            if likes != 0.0 {
                prop_assert!(book.likes > 0);
            }
            if review != 0.0 {
                prop_assert!(book.review > 0.0);
            }
        }
    }

    #[test]
    fn prop_next_page_grows_by_page_size(
        page_size in 1usize..40,
        steps in 1usize..8,
        seed in -1000i64..1000,
    ) {
        let config = CatalogConfig { page_size, max_books: 5000 };
        let mut catalog = Catalog::new(config, FakeBookGenerator, SeededRandom::default()).unwrap();
        catalog.set_seed(seed);

        for _ in 0..steps {
            let before = catalog.page();
            prop_assert!(!catalog.is_loading());
            prop_assert!(catalog.request_next_page());
            prop_assert!(!catalog.is_loading());
            prop_assert_eq!(catalog.page(), before + page_size);
            prop_assert_eq!(catalog.all_books().len(), catalog.page());
            prop_assert_eq!(catalog.effective_seed(), seed + catalog.page() as i64);
        }
    }

    #[test]
    fn prop_switch_language_postconditions(
        lang in language(),
        likes in 0.0f64..=10.0,
        review in 0.0f64..=5.0,
        extra_pages in 0usize..4,
    ) {
        let mut catalog: Catalog = Catalog::default();
        catalog.initialize();
        catalog.set_filter(FilterKind::Likes, likes);
        catalog.set_filter(FilterKind::Review, review);
        for _ in 0..extra_pages {
            catalog.request_next_page();
        }

        catalog.switch_language(lang);

        prop_assert_eq!(catalog.language(), lang);
        prop_assert_eq!(catalog.page(), 20);
        prop_assert_eq!(catalog.all_books().len(), 20);
        prop_assert_eq!(catalog.likes(), 0.0);
        prop_assert_eq!(catalog.review(), 0.0);
    }
}
