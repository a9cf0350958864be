//! Supporting utilities: history file I/O, logging, report periods and test fixtures

pub mod io;
pub mod logging;
pub mod period;
pub mod test;

pub use io::JsonlHistoryStore;
pub use logging::{init_logging, log_operation_complete, log_operation_start, log_warning};
pub use period::{DateWindow, ReportPeriod};
