use std::error::Error;

pub use builtin::Builtin;
pub use file::JsonFile;
pub use remote::Remote;

use crate::recipes::Recipe;

mod builtin;
mod file;
mod remote;

pub trait Provider: Send + Sync {
    fn title(&self) -> String {
        "Unknown".into()
    }

    /// Loads all recipes that this provider can provide.
    fn load(&self) -> Result<Vec<Recipe>, Box<dyn Error + Send + Sync>>;
}
