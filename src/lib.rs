mod script;
mod scripts;

pub use script::*;
pub use scripts::*;
