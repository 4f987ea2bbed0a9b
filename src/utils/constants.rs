/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:4000 (por defecto)
/// - Producción: via BACKEND_URL env var (o .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Ruta fija desde la que el backend sirve las imágenes de los eventos
pub const DEFAULT_ASSET_PATH: &str = "/api";

/// Listado completo de eventos (GET)
pub const EVENTS_ENDPOINT: &str = "/createEvent";

/// Prefijo del endpoint de like (POST) y de la página de reserva
pub const EVENT_ENDPOINT_PREFIX: &str = "/event";
