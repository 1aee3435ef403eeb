pub mod constants;
pub mod preload;
pub mod storage;

pub use constants::*;
pub use preload::preloaded_state;
pub use storage::{get_local_storage, load_from_storage, save_to_storage};
