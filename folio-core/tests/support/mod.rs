use folio_core::{Catalog, CatalogConfig, FakeBookGenerator, ScriptedRandom};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Catalog with the default config whose filter draws are all `draw`
#[allow(dead_code)]
pub fn scripted_catalog(draw: f64) -> Catalog<FakeBookGenerator, ScriptedRandom> {
    Catalog::new(
        CatalogConfig::default(),
        FakeBookGenerator,
        ScriptedRandom::constant(draw),
    )
    .unwrap()
}
