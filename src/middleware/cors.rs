//! Middleware de CORS
//!
//! La API la consume una SPA servida desde otro origen, así que se permite
//! cualquier origen, igual que el `cors()` del servicio original.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS permisivo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
