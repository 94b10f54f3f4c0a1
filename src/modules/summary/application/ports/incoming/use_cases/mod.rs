mod get_portfolio_summary;

pub use get_portfolio_summary::{GetPortfolioSummaryError, GetPortfolioSummaryUseCase};
