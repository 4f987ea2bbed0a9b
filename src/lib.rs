// ============================================================================
// EVENT BOOKING PWA - FRONTEND MVVM (Rust + Yew)
// ============================================================================
// - Components: solo renderizan
// - Hooks: estado de Yew + callbacks
// - ViewModels: lógica, devuelven acciones
// - Stores: snapshots inmutables + transformaciones puras
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
