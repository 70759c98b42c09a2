pub mod app;
pub mod home;
pub mod upload;
pub mod contract_list;
pub mod contract_detail;
pub mod not_found;

pub use app::App;
pub use home::HomeView;
pub use upload::UploadView;
pub use contract_list::ContractListView;
pub use contract_detail::{detail_sections, find_contract, ContractDetailView};
pub use not_found::NotFoundView;
