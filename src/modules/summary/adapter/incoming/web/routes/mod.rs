mod get_portfolio_summary;

pub use get_portfolio_summary::{__path_get_portfolio_summary_handler, get_portfolio_summary_handler};
