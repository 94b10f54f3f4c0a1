mod get_portfolio_summary_service;

pub use get_portfolio_summary_service::{
    GetPortfolioSummaryService, SUMMARY_EXPERIENCE_LIMIT, SUMMARY_PROJECT_LIMIT,
};
