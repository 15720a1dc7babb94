mod calculator;
mod mortgage_error;

pub use calculator::{calculate, MortgageBreakdown, MortgageParams, LOAN_TERM_OPTIONS, PMI_THRESHOLD};
pub use mortgage_error::MortgageError;
