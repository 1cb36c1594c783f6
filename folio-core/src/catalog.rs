//! Catalog state and its transitions
//!
//! A [`Catalog`] is the single writer of a [`CatalogState`]. Every operation
//! runs to completion synchronously; the UI only ever observes the state
//! between operations.
//!
//! ## Window regeneration
//! The window (`all_books`) is regenerated in full whenever it changes size or
//! seed. The generator is called with `seed + page`, so "load more" produces a
//! new window rather than appending to the old one.

use tracing::{debug, info, warn};

use crate::book::{BookRecord, Language};
use crate::config::CatalogConfig;
use crate::error::ConfigError;
use crate::filter::{apply_filters, FilterKind, Thresholds};
use crate::generator::{BookGenerator, FakeBookGenerator};
use crate::random::{RandomSource, SeededRandom};

/// Everything the presentation layer reads
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub language: Language,
    /// User seed. Zero is a valid seed and the default.
    pub seed: i64,
    /// Likes threshold in [0, 10], zero means inactive
    pub likes: f64,
    /// Review threshold in [0, 5], zero means inactive
    pub review: f64,
    /// Records requested for the current window
    pub page: usize,
    /// Most recently generated window
    pub all_books: Vec<BookRecord>,
    /// `all_books` after filtering, in window order
    pub books: Vec<BookRecord>,
    pub is_loading: bool,
    pub has_more: bool,
    /// Bumped on every regeneration, never reset
    pub generation: u64,
}

impl CatalogState {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            language: Language::default(),
            seed: 0,
            likes: 0.0,
            review: 0.0,
            page: config.page_size,
            all_books: Vec::new(),
            books: Vec::new(),
            is_loading: false,
            has_more: true,
            generation: 0,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            likes: self.likes,
            review: self.review,
        }
    }

    /// Seed handed to the generator for the current window
    pub fn effective_seed(&self) -> i64 {
        self.seed.wrapping_add(self.page as i64)
    }
}

/// Owns the catalog state together with its generator and random source
pub struct Catalog<G = FakeBookGenerator, R = SeededRandom> {
    state: CatalogState,
    config: CatalogConfig,
    generator: G,
    rng: R,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_default_config(FakeBookGenerator, SeededRandom::default())
    }
}

impl<G: BookGenerator, R: RandomSource> Catalog<G, R> {
    /// Create an empty catalog. Call [`Catalog::initialize`] to generate the
    /// first window.
    pub fn new(config: CatalogConfig, generator: G, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CatalogState::new(&config),
            config,
            generator,
            rng,
        })
    }

    /// Like [`Catalog::new`] with [`CatalogConfig::default`], which is always valid
    pub fn with_default_config(generator: G, rng: R) -> Self {
        let config = CatalogConfig::default();
        Self {
            state: CatalogState::new(&config),
            config,
            generator,
            rng,
        }
    }

    /// First load: same as switching to the current language
    pub fn initialize(&mut self) {
        self.switch_language(self.state.language);
    }

    /// Select a language and start over from the first page.
    ///
    /// The new window is filtered with the likes/review thresholds that were
    /// active before the switch; the thresholds are cleared afterwards. The
    /// seed is kept.
    pub fn switch_language(&mut self, language: Language) {
        info!("Switching catalog language to {}", language);
        self.state.language = language;
        self.state.page = self.config.page_size;
        self.state.is_loading = false;
        self.state.has_more = true;
        self.regenerate();
        self.refilter();
        self.state.likes = 0.0;
        self.state.review = 0.0;
    }

    /// Set the user seed and start over from the first page. Thresholds are kept.
    pub fn set_seed(&mut self, seed: i64) {
        info!("Setting catalog seed to {}", seed);
        self.state.seed = seed;
        self.state.page = self.config.page_size;
        self.regenerate();
        self.refilter();
        self.update_has_more();
    }

    /// Grow the window by one page.
    ///
    /// Returns false without touching state when a page step is already in
    /// progress or the visible cap has been reached.
    pub fn request_next_page(&mut self) -> bool {
        if self.state.is_loading || !self.state.has_more {
            debug!(
                "Ignoring next page request (loading: {}, has_more: {})",
                self.state.is_loading, self.state.has_more
            );
            return false;
        }

        self.state.is_loading = true;
        self.state.page += self.config.page_size;
        self.regenerate();
        self.refilter();
        self.update_has_more();
        self.state.is_loading = false;
        true
    }

    /// Change one threshold and recompute the visible set from the current
    /// window. The window itself is not regenerated.
    pub fn set_filter(&mut self, kind: FilterKind, value: f64) {
        let clamped = kind.clamp(value);
        if clamped != value {
            warn!("Clamped {:?} threshold {} to {}", kind, value, clamped);
        }
        match kind {
            FilterKind::Likes => self.state.likes = clamped,
            FilterKind::Review => self.state.review = clamped,
        }
        self.refilter();
        self.update_has_more();
    }

    fn regenerate(&mut self) {
        let count = self.state.page;
        let language = self.state.language;
        let seed = self.state.effective_seed();
        debug!(
            "Generating {} books (language: {}, effective seed: {})",
            count, language, seed
        );
        let books = self.generator.generate(count, language, seed);
        if books.len() != count {
            warn!(
                "Generator returned {} books, expected {}",
                books.len(),
                count
            );
        }
        self.state.all_books = books;
        self.state.generation += 1;
    }

    fn refilter(&mut self) {
        self.state.books = apply_filters(
            &self.state.all_books,
            &self.state.thresholds(),
            &mut self.rng,
        );
        debug!(
            "{} of {} books visible",
            self.state.books.len(),
            self.state.all_books.len()
        );
    }

    /// Pagination stays open while the visible list is under the cap
    fn update_has_more(&mut self) {
        self.state.has_more = self.state.books.len() < self.config.max_books;
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn seed(&self) -> i64 {
        self.state.seed
    }

    pub fn likes(&self) -> f64 {
        self.state.likes
    }

    pub fn review(&self) -> f64 {
        self.state.review
    }

    pub fn page(&self) -> usize {
        self.state.page
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.state.books
    }

    pub fn all_books(&self) -> &[BookRecord] {
        &self.state.all_books
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more
    }

    pub fn effective_seed(&self) -> i64 {
        self.state.effective_seed()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(usize, Language, i64)>>>;

    /// Generator that records its arguments
    fn recording_generator() -> (impl BookGenerator, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&calls);
        let generator = move |count: usize, language: Language, seed: i64| {
            log.borrow_mut().push((count, language, seed));
            FakeBookGenerator.generate(count, language, seed)
        };
        (generator, calls)
    }

    fn catalog_with(
        config: CatalogConfig,
        draw: f64,
    ) -> (Catalog<impl BookGenerator, ScriptedRandom>, Calls) {
        let (generator, calls) = recording_generator();
        let catalog = Catalog::new(config, generator, ScriptedRandom::constant(draw)).unwrap();
        (catalog, calls)
    }

    #[test]
    fn test_new_catalog_is_empty_with_defaults() {
        let catalog: Catalog = Catalog::default();
        assert_eq!(catalog.config(), &CatalogConfig::default());
        assert_eq!(catalog.language(), Language::En);
        assert_eq!(catalog.seed(), 0);
        assert_eq!(catalog.page(), 20);
        assert!(catalog.all_books().is_empty());
        assert!(catalog.has_more());
        assert!(!catalog.is_loading());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CatalogConfig {
            page_size: 0,
            max_books: 10,
        };
        let result = Catalog::new(config, FakeBookGenerator, SeededRandom::default());
        assert!(matches!(result, Err(ConfigError::ZeroPageSize)));
    }

    #[test]
    fn test_initialize_generates_first_page() {
        let (mut catalog, calls) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.initialize();
        assert_eq!(catalog.all_books().len(), 20);
        assert_eq!(catalog.books(), catalog.all_books());
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow().last(), Some(&(20, Language::En, 20)));
    }

    #[test]
    fn test_switch_language_resets_thresholds_but_keeps_seed() {
        let (mut catalog, calls) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.set_seed(7);
        catalog.set_filter(FilterKind::Likes, 4.0);
        catalog.set_filter(FilterKind::Review, 2.0);
        catalog.request_next_page();

        catalog.switch_language(Language::De);

        assert_eq!(catalog.language(), Language::De);
        assert_eq!(catalog.seed(), 7);
        assert_eq!(catalog.page(), 20);
        assert_eq!(catalog.likes(), 0.0);
        assert_eq!(catalog.review(), 0.0);
        assert!(catalog.has_more());
        assert!(!catalog.is_loading());
        assert_eq!(calls.borrow().last(), Some(&(20, Language::De, 27)));
    }

    #[test]
    fn test_switch_language_filters_with_previous_thresholds() {
        // Draw 0.0 passes every active predicate, so only zero-valued
        // records are removed by the previous likes threshold.
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.initialize();
        catalog.set_filter(FilterKind::Likes, 10.0);

        catalog.switch_language(Language::Ja);

        let expected: Vec<_> = catalog
            .all_books()
            .iter()
            .filter(|b| b.likes > 0)
            .cloned()
            .collect();
        assert_eq!(catalog.books(), expected.as_slice());
        assert_eq!(catalog.likes(), 0.0);
    }

    #[test]
    fn test_set_seed_regenerates_first_page() {
        let (mut catalog, calls) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.initialize();
        catalog.request_next_page();
        catalog.set_seed(42);
        assert_eq!(catalog.page(), 20);
        assert_eq!(catalog.effective_seed(), 62);
        assert_eq!(calls.borrow().last(), Some(&(20, Language::En, 62)));
        assert!(catalog.all_books().iter().all(|b| b.seed == 62));
    }

    #[test]
    fn test_set_seed_keeps_thresholds() {
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.initialize();
        catalog.set_filter(FilterKind::Review, 3.0);
        catalog.set_seed(5);
        assert_eq!(catalog.review(), 3.0);
        assert!(catalog.books().iter().all(|b| b.review > 0.0));
    }

    #[test]
    fn test_request_next_page_grows_window() {
        let (mut catalog, calls) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.set_seed(42);
        assert!(catalog.request_next_page());
        assert_eq!(catalog.page(), 40);
        assert_eq!(catalog.all_books().len(), 40);
        assert_eq!(catalog.effective_seed(), 82);
        assert!(!catalog.is_loading());
        assert_eq!(calls.borrow().last(), Some(&(40, Language::En, 82)));
    }

    #[test]
    fn test_request_next_page_stops_at_cap() {
        let config = CatalogConfig {
            page_size: 10,
            max_books: 25,
        };
        let (mut catalog, _) = catalog_with(config, 0.0);
        catalog.initialize();
        assert!(catalog.request_next_page());
        assert!(catalog.has_more());
        assert!(catalog.request_next_page());
        assert_eq!(catalog.books().len(), 30);
        assert!(!catalog.has_more());

        let before = catalog.state().clone();
        assert!(!catalog.request_next_page());
        assert_eq!(catalog.state(), &before);
    }

    #[test]
    fn test_set_filter_does_not_regenerate() {
        let (mut catalog, calls) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.initialize();
        let window = catalog.all_books().to_vec();
        catalog.set_filter(FilterKind::Likes, 5.0);
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(catalog.all_books(), window.as_slice());
        assert_eq!(catalog.page(), 20);
    }

    #[test]
    fn test_set_filter_back_to_zero_restores_window() {
        // Draw 0.99 fails any likes threshold below 9.9
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.99);
        catalog.initialize();
        catalog.set_filter(FilterKind::Likes, 1.0);
        assert!(catalog.books().is_empty());
        catalog.set_filter(FilterKind::Likes, 0.0);
        assert_eq!(catalog.books(), catalog.all_books());
    }

    #[test]
    fn test_set_filter_clamps_out_of_range() {
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.set_filter(FilterKind::Review, 9.0);
        assert_eq!(catalog.review(), 5.0);
        catalog.set_filter(FilterKind::Likes, f64::INFINITY);
        assert_eq!(catalog.likes(), 0.0);
    }

    #[test]
    fn test_effective_seed_wraps() {
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.0);
        catalog.set_seed(i64::MAX);
        assert_eq!(catalog.effective_seed(), i64::MIN + 19);
    }

    #[test]
    fn test_generation_grows_across_resets() {
        let (mut catalog, _) = catalog_with(CatalogConfig::default(), 0.0);
        assert_eq!(catalog.generation(), 0);
        catalog.initialize();
        assert_eq!(catalog.generation(), 1);
        catalog.request_next_page();
        assert_eq!(catalog.page(), 40);
        assert_eq!(catalog.generation(), 2);

        // Page goes back to 20, generation keeps counting
        catalog.set_seed(7);
        assert_eq!(catalog.page(), 20);
        assert_eq!(catalog.generation(), 3);

        // Filtering alone reuses the window
        catalog.set_filter(FilterKind::Likes, 4.0);
        assert_eq!(catalog.generation(), 3);
    }
}
