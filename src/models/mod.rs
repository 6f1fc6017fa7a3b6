// Domain models: swap samples, paging rates, status and display unit

mod status;
mod swap;
mod unit;

pub use status::Status;
pub use swap::{PagingRates, PagingSample, SwapSample};
pub use unit::{DisplayUnit, UnknownUnit};
