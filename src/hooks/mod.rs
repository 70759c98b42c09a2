pub mod contract_context;
pub mod use_contracts;
pub mod use_contract_filter;
pub mod use_upload_simulator;

pub use contract_context::ContractProvider;
pub use use_contracts::{use_contracts_checked, use_contracts, UseContractsHandle};
pub use use_contract_filter::{filter_contracts, use_contract_filter, StatusCounts, StatusFilter, UseContractFilterHandle};
pub use use_upload_simulator::{use_upload_simulator, UseUploadSimulatorHandle};
