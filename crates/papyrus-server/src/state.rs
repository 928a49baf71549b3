use papyrus_core::config::Settings;
use papyrus_core::service::ExtractionService;

/// Shared application state, available to all route handlers via
/// `State<Arc<AppState<_, _>>>`.
///
/// Generic over the fetcher and parser seams so route tests can inject
/// the core mocks instead of live HTTP and a real PDF backend.
pub struct AppState<F, P> {
    pub service: ExtractionService<F, P>,
    pub settings: Settings,
}
