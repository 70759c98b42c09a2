// ============================================================================
// CONTRACT INTELLIGENCE - FRONTEND YEW (RUST PURO)
// ============================================================================
// Capas:
// - Views: páginas enrutadas
// - Components: piezas de presentación reutilizables
// - Hooks: puente entre stores/servicios y componentes
// - Services: scheduler de timers, fuente de progreso, simulador de subidas
// - Stores: transiciones puras sobre contratos y subidas
// - State: contenedor reactivo con suscriptores
// - Models: estructuras de datos (todo mock, sin backend)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod stores;
pub mod state;
pub mod services;
pub mod hooks;
pub mod components;
pub mod views;
pub mod router;
pub mod utils;

pub use error::{AppError, AppResult};
pub use views::App;
