pub mod contract_store;
pub mod upload_store;

pub use contract_store::{ContractAction, ContractStore};
pub use upload_store::UploadStore;
