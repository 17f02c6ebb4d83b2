pub mod cleanup;
pub mod launch;
pub mod list;
pub mod settings;

pub use cleanup::*;
pub use launch::*;
pub use list::*;
pub use settings::*;
