pub mod contract;
pub mod upload;
pub mod demo;

pub use contract::{Contract, ContractPatch, ContractStatus, ExtractedData};
pub use upload::{FileHandle, FileId, TickOutcome, UploadStatus, UploadedFile, EXTRACTION_SUMMARY};
pub use demo::sample_contracts;
