use tracing::{error, Level};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }

    if let Err(e) = folio_web::bootstrap::bootstrap() {
        error!("Failed to start: {}", e);
        panic!("{e}");
    }
}
