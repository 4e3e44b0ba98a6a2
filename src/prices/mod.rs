//! Daily price history and forward returns

mod returns;
mod yahoo;

pub use returns::{forward_returns, ForwardReturns, ReturnTable};
pub use yahoo::YahooClient;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Daily adjusted-close series for one ticker
///
/// Dates are strictly ascending trading days.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    pub ticker: String,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<Decimal>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
