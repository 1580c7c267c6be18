pub use fuzzy::{DEFAULT_MIN_SCORE, FuzzyMatcher};
pub use simple::SubstringMatcher;

mod fuzzy;
mod simple;
