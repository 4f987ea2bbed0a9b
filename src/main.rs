use event_booking_pwa::components::App;
use event_booking_pwa::config::CONFIG;

fn main() {
    // Panic hook primero para ver los panics en la consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🎟️ Event Booking starting... (backend: {})", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
