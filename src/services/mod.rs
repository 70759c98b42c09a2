pub mod scheduler;
pub mod progress;
pub mod upload_simulator;

pub use scheduler::{GlooScheduler, Scheduler, TaskHandle};
pub use progress::{ProgressSource, RandomProgress};
pub use upload_simulator::UploadSimulator;
