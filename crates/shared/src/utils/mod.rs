mod gracefull;
mod logs;
mod metrics;
mod parse_datetime;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::parse_datetime::{deserialize_date, parse_date};
