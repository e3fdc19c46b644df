//! Marketplace lookups: what to ask for, what comes back, and the
//! summary a grid cell is drawn from.

mod error;
mod extension_id;
mod fan_out;
mod query;
mod query_result;
mod recommended;
mod resolver;
mod summary;

pub use error::*;
pub use extension_id::*;
pub use fan_out::*;
pub use query::*;
pub use query_result::*;
pub use recommended::*;
pub use resolver::*;
pub use summary::*;
