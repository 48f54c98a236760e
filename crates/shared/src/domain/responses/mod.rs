mod loan;
mod stats;

pub use self::loan::LoanResponse;
pub use self::stats::LoanAggregateResponse;
