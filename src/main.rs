use contract_intel_pwa::config::CONFIG;
use contract_intel_pwa::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting ({})...", CONFIG.app_name, CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
