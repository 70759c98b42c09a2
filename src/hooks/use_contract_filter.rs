use std::str::FromStr;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::error::AppError;
use crate::models::{Contract, ContractStatus};

/// Filtro de estado de la lista: `all` o un estado concreto
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ContractStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn accepts(&self, status: ContractStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

/// Búsqueda (título o partes, sin mayúsculas) AND filtro de estado
pub fn filter_contracts(contracts: &[Contract], search: &str, status: StatusFilter) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| c.matches_search(search) && status.accepts(c.status))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub completed: usize,
    pub processing: usize,
    pub pending: usize,
    pub error: usize,
}

impl StatusCounts {
    pub fn from_contracts(contracts: &[Contract]) -> Self {
        contracts.iter().fold(
            Self { all: contracts.len(), ..Self::default() },
            |mut counts, c| {
                match c.status {
                    ContractStatus::Completed => counts.completed += 1,
                    ContractStatus::Processing => counts.processing += 1,
                    ContractStatus::Pending => counts.pending += 1,
                    ContractStatus::Error => counts.error += 1,
                }
                counts
            },
        )
    }

    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(ContractStatus::Completed) => self.completed,
            StatusFilter::Only(ContractStatus::Processing) => self.processing,
            StatusFilter::Only(ContractStatus::Pending) => self.pending,
            StatusFilter::Only(ContractStatus::Error) => self.error,
        }
    }
}

pub struct UseContractFilterHandle {
    pub search: String,
    pub status: StatusFilter,
    pub filtered: Vec<Contract>,
    pub counts: StatusCounts,
    pub on_search: Callback<InputEvent>,
    pub on_status: Callback<Event>,
}

impl UseContractFilterHandle {
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }
}

#[hook]
pub fn use_contract_filter(contracts: &[Contract]) -> UseContractFilterHandle {
    let search = use_state(String::new);
    let status = use_state(StatusFilter::default);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<StatusFilter>() {
                Ok(filter) => status.set(filter),
                Err(err) => log::warn!("⚠️ Filtro ignorado: {}", err),
            }
        })
    };

    UseContractFilterHandle {
        filtered: filter_contracts(contracts, &search, *status),
        counts: StatusCounts::from_contracts(contracts),
        search: (*search).clone(),
        status: *status,
        on_search,
        on_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_contracts;

    fn ids(contracts: &[Contract]) -> Vec<&str> {
        contracts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_search_and_all_returns_everything() {
        let contracts = sample_contracts();
        let filtered = filter_contracts(&contracts, "", StatusFilter::All);
        assert_eq!(filtered, contracts);
    }

    #[test]
    fn unmatched_term_is_empty_for_every_filter() {
        let contracts = sample_contracts();
        let mut filters = vec![StatusFilter::All];
        filters.extend(ContractStatus::ALL.map(StatusFilter::Only));
        for filter in filters {
            assert!(filter_contracts(&contracts, "zzz-no-match", filter).is_empty(), "{:?}", filter);
        }
    }

    #[test]
    fn search_hits_titles_and_parties() {
        let contracts = sample_contracts();
        assert_eq!(ids(&filter_contracts(&contracts, "techcorp", StatusFilter::All)), ["1"]);
        assert_eq!(ids(&filter_contracts(&contracts, "PARTNERS", StatusFilter::All)), ["3"]);
        assert_eq!(ids(&filter_contracts(&contracts, "agreement", StatusFilter::All)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn search_and_status_are_anded() {
        let contracts = sample_contracts();
        let completed = StatusFilter::Only(ContractStatus::Completed);
        assert_eq!(ids(&filter_contracts(&contracts, "agreement", completed)), ["1", "3"]);
        assert_eq!(ids(&filter_contracts(&contracts, "", StatusFilter::Only(ContractStatus::Error))), ["4"]);
        assert!(filter_contracts(&contracts, "supply", completed).is_empty());
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "pending".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(ContractStatus::Pending))
        );
        assert!("everything".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(ContractStatus::Error).as_str(), "error");
    }

    #[test]
    fn counts_per_status() {
        let counts = StatusCounts::from_contracts(&sample_contracts());
        assert_eq!(
            counts,
            StatusCounts { all: 5, completed: 2, processing: 1, pending: 1, error: 1 }
        );
        assert_eq!(counts.for_filter(StatusFilter::All), 5);
        assert_eq!(counts.for_filter(StatusFilter::Only(ContractStatus::Completed)), 2);
    }
}
