// ============================================================================
// CONTRACT CONTEXT - Compartir el ContractStore entre páginas
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_contracts::{use_contract_store, UseContractsHandle};
use crate::models::Contract;

#[derive(Properties, PartialEq)]
pub struct ContractProviderProps {
    /// Colección inicial; por defecto los contratos de demo
    #[prop_or_default]
    pub initial: Option<Vec<Contract>>,
    pub children: Children,
}

/// Provider que envuelve la app y proporciona el store de contratos
#[function_component(ContractProvider)]
pub fn contract_provider(props: &ContractProviderProps) -> Html {
    let handle = use_contract_store(props.initial.clone());

    html! {
        <ContextProvider<UseContractsHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseContractsHandle>>
    }
}
