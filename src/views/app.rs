// ============================================================================
// APP VIEW - COMPONENTE PRINCIPAL
// ============================================================================
// Proveedor del store de contratos por encima del router: las páginas
// comparten la misma colección durante toda la sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::ContractProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ContractProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContractProvider>
    }
}
