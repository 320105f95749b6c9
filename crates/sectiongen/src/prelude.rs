pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{Context, Result};
pub use std::format as f;
