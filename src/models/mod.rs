pub mod placeholder;

pub use placeholder::{Placeholder, PlaceholderCache};
