#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MortgageError {
    #[error("Down payment ({down_payment}) exceeds home price ({home_price})")]
    NegativePrincipal { home_price: f64, down_payment: f64 },

    #[error("Loan term must be at least one year")]
    NonPositiveTerm,

    #[error("Loan term cannot be longer than {max} years")]
    TermTooLong { max: u32 },

    #[error("Interest rate cannot be negative ({0}%)")]
    NegativeRate(f64),

    #[error("{field} cannot be negative")]
    NegativeAmount { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} is not a number: '{value}'")]
    Unparseable { field: &'static str, value: String },
}
