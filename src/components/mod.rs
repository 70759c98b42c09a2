pub mod layout;
pub mod status_badge;
pub mod progress_bar;
pub mod contract_card;
pub mod uploaded_file_card;

pub use layout::Layout;
pub use status_badge::{badge_config, BadgeConfig, StatusBadge};
pub use progress_bar::ProgressBar;
pub use contract_card::ContractCard;
pub use uploaded_file_card::UploadedFileCard;
