// ============================================================================
// USE CONTRACTS HOOK - Acceso al ContractStore de la sesión
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::{AppError, AppResult};
use crate::models::{Contract, ContractPatch};
use crate::stores::{ContractAction, ContractStore};

impl Reducible for ContractStore {
    type Action = ContractAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        // Mismo Rc si nada cambió: Yew no vuelve a renderizar
        if next.shares_collection(&self) {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Handle compartido por contexto: lectura de la colección + add / update
#[derive(Clone, PartialEq)]
pub struct UseContractsHandle {
    store: UseReducerHandle<ContractStore>,
}

impl UseContractsHandle {
    pub fn contracts(&self) -> &[Contract] {
        self.store.contracts()
    }

    pub fn get(&self, id: &str) -> Option<&Contract> {
        self.store.get(id)
    }

    pub fn add(&self, contract: Contract) {
        self.store.dispatch(ContractAction::Add(contract));
    }

    pub fn update(&self, id: &str, patch: ContractPatch) {
        self.store.dispatch(ContractAction::Update {
            id: id.to_string(),
            patch,
        });
    }
}

/// Crea el estado del store. Solo lo usa `ContractProvider`.
#[hook]
pub fn use_contract_store(initial: Option<Vec<Contract>>) -> UseContractsHandle {
    let store = use_reducer(move || match initial {
        Some(contracts) => ContractStore::new(contracts),
        None => ContractStore::default(),
    });
    UseContractsHandle { store }
}

#[hook]
pub fn use_contracts_checked() -> AppResult<UseContractsHandle> {
    use_context::<UseContractsHandle>().ok_or(AppError::MissingProvider("use_contracts"))
}

/// Consumidor del store. Fuera de un `ContractProvider` es un error de
/// programación y entra en pánico.
#[hook]
pub fn use_contracts() -> UseContractsHandle {
    match use_contracts_checked() {
        Ok(handle) => handle,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    use super::*;
    use crate::hooks::ContractProvider;

    type Seen = Rc<RefCell<Option<AppResult<usize>>>>;

    #[derive(Properties, PartialEq)]
    struct ReportProps {
        report: Callback<AppResult<usize>>,
    }

    /// Publica lo que devuelve el hook: nº de contratos o el error
    #[function_component(ContractCount)]
    fn contract_count(props: &ReportProps) -> Html {
        let result = use_contracts_checked().map(|handle| handle.contracts().len());
        props.report.emit(result);
        html! {}
    }

    #[function_component(ProvidedContractCount)]
    fn provided_contract_count(props: &ReportProps) -> Html {
        html! {
            <ContractProvider>
                <ContractCount report={props.report.clone()} />
            </ContractProvider>
        }
    }

    fn recorder() -> (Callback<AppResult<usize>>, Seen) {
        let seen: Seen = Rc::new(RefCell::new(None));
        let report = {
            let seen = seen.clone();
            Callback::from(move |result: AppResult<usize>| *seen.borrow_mut() = Some(result))
        };
        (report, seen)
    }

    async fn render<C>(report: Callback<AppResult<usize>>)
    where
        C: BaseComponent<Properties = ReportProps>,
    {
        LocalSet::new()
            .run_until(LocalServerRenderer::<C>::with_props(ReportProps { report }).render())
            .await;
    }

    #[tokio::test]
    async fn outside_provider_reports_missing_provider() {
        let (report, seen) = recorder();
        render::<ContractCount>(report).await;

        let result = seen.borrow_mut().take();
        assert_eq!(result, Some(Err(AppError::MissingProvider("use_contracts"))));
    }

    #[tokio::test]
    async fn inside_provider_reads_the_sample_store() {
        let (report, seen) = recorder();
        render::<ProvidedContractCount>(report).await;

        let result = seen.borrow_mut().take();
        assert_eq!(result, Some(Ok(5)));
    }

    #[test]
    fn unknown_update_keeps_the_same_state() {
        let store = Rc::new(ContractStore::default());
        let next = store.clone().reduce(ContractAction::Update {
            id: "missing".to_string(),
            patch: ContractPatch::default(),
        });
        assert!(Rc::ptr_eq(&store, &next));
    }
}
