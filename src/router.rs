use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::{ContractDetailView, ContractListView, HomeView, NotFoundView, UploadView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/contracts")]
    Contracts,
    #[at("/contract/:id")]
    Contract { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Upload => html! { <UploadView /> },
        Route::Contracts => html! { <ContractListView /> },
        Route::Contract { id } => html! { <ContractDetailView id={id} /> },
        Route::NotFound => {
            log::warn!("🧭 Ruta no encontrada");
            html! { <NotFoundView /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_for_every_route() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Upload.to_path(), "/upload");
        assert_eq!(Route::Contracts.to_path(), "/contracts");
        assert_eq!(Route::Contract { id: "3".into() }.to_path(), "/contract/3");
    }

    #[test]
    fn recognizes_contract_ids() {
        assert_eq!(
            Route::recognize("/contract/42"),
            Some(Route::Contract { id: "42".into() })
        );
        assert_eq!(Route::recognize("/upload"), Some(Route::Upload));
        assert_eq!(Route::recognize("/nope/deeper"), Some(Route::NotFound));
    }
}
