//! Domains and collections of domains.

pub use self::collection::Collection;
pub use self::data_set::DataSet;

mod collection;
mod data_set;
