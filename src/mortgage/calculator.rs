// src/mortgage/calculator.rs

use crate::mortgage::MortgageError;
use std::collections::HashMap;

/// PMI is charged only while the down payment is below this share of the price.
pub const PMI_THRESHOLD: f64 = 0.20;

pub const LOAN_TERM_OPTIONS: [u32; 3] = [15, 20, 30];

pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Inputs to one estimate. Amounts are dollars; the rate is a percentage
/// (6.5 means 6.5% per year).
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageParams {
    pub home_price: f64,
    pub down_payment: f64,
    pub loan_term_years: u32,
    pub annual_interest_rate_percent: f64,
    pub annual_property_tax: f64,
    pub annual_home_insurance: f64,
    pub monthly_hoa_fees: f64,
    /// Only charged when the down payment is under 20%.
    pub monthly_pmi: f64,
}

impl Default for MortgageParams {
    fn default() -> Self {
        Self::for_home_price(500_000.0)
    }
}

impl MortgageParams {
    /// Starting point for a listing: 20% down, 30 years at 6.5%.
    pub fn for_home_price(home_price: f64) -> Self {
        Self {
            home_price,
            down_payment: home_price * PMI_THRESHOLD,
            loan_term_years: 30,
            annual_interest_rate_percent: 6.5,
            annual_property_tax: 3_000.0,
            annual_home_insurance: 1_200.0,
            monthly_hoa_fees: 0.0,
            monthly_pmi: 0.0,
        }
    }

    /// Overlay URL/form parameters on the defaults. Missing or empty fields
    /// keep their default; present but unparseable fields are an error.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, MortgageError> {
        let home_price = number(params, "homePrice", "Home price")?.unwrap_or(500_000.0);
        let mut out = Self::for_home_price(home_price);

        if let Some(v) = number(params, "downPayment", "Down payment")? {
            out.down_payment = v;
        }
        if let Some(v) = number(params, "loanTerm", "Loan term")? {
            if v < 1.0 || v.fract() != 0.0 {
                return Err(MortgageError::NonPositiveTerm);
            }
            if v > f64::from(MAX_LOAN_TERM_YEARS) {
                return Err(MortgageError::TermTooLong {
                    max: MAX_LOAN_TERM_YEARS,
                });
            }
            out.loan_term_years = v as u32;
        }
        if let Some(v) = number(params, "interestRate", "Interest rate")? {
            out.annual_interest_rate_percent = v;
        }
        if let Some(v) = number(params, "propertyTax", "Property tax")? {
            out.annual_property_tax = v;
        }
        if let Some(v) = number(params, "homeInsurance", "Home insurance")? {
            out.annual_home_insurance = v;
        }
        if let Some(v) = number(params, "hoaFees", "HOA fees")? {
            out.monthly_hoa_fees = v;
        }
        if let Some(v) = number(params, "pmi", "PMI")? {
            out.monthly_pmi = v;
        }

        Ok(out)
    }

    fn validate(&self) -> Result<(), MortgageError> {
        let amounts = [
            ("Home price", self.home_price),
            ("Down payment", self.down_payment),
            ("Interest rate", self.annual_interest_rate_percent),
            ("Property tax", self.annual_property_tax),
            ("Home insurance", self.annual_home_insurance),
            ("HOA fees", self.monthly_hoa_fees),
            ("PMI", self.monthly_pmi),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(MortgageError::NotFinite { field });
            }
        }

        if self.loan_term_years == 0 {
            return Err(MortgageError::NonPositiveTerm);
        }
        if self.loan_term_years > MAX_LOAN_TERM_YEARS {
            return Err(MortgageError::TermTooLong {
                max: MAX_LOAN_TERM_YEARS,
            });
        }
        if self.annual_interest_rate_percent < 0.0 {
            return Err(MortgageError::NegativeRate(
                self.annual_interest_rate_percent,
            ));
        }
        if self.down_payment > self.home_price {
            return Err(MortgageError::NegativePrincipal {
                home_price: self.home_price,
                down_payment: self.down_payment,
            });
        }

        for (field, value) in amounts {
            if value < 0.0 {
                return Err(MortgageError::NegativeAmount { field });
            }
        }

        Ok(())
    }
}

/// The full monthly picture for one set of params. Every field comes from
/// the same [`calculate`] call; nothing is updated piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageBreakdown {
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub number_of_payments: u32,
    pub down_payment_percent: f64,
    pub monthly_principal_and_interest: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_hoa: f64,
    pub monthly_pmi: f64,
    pub total_monthly_payment: f64,
    pub total_of_all_payments: f64,
    pub total_interest_paid: f64,
}

impl MortgageBreakdown {
    /// Extreme but valid inputs can still overflow a derived figure.
    fn ensure_finite(self) -> Result<Self, MortgageError> {
        let derived = [
            ("Monthly payment", self.monthly_principal_and_interest),
            ("Monthly payment", self.total_monthly_payment),
            ("Total of all payments", self.total_of_all_payments),
            ("Total interest", self.total_interest_paid),
        ];
        match derived.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(MortgageError::NotFinite { field }),
            None => Ok(self),
        }
    }
}

/// Fixed-rate amortization. Pure; invalid params are rejected instead of
/// producing NaN or infinite figures.
pub fn calculate(params: &MortgageParams) -> Result<MortgageBreakdown, MortgageError> {
    params.validate()?;

    let principal = params.home_price - params.down_payment;
    let monthly_rate = params.annual_interest_rate_percent / 100.0 / 12.0;
    let number_of_payments = params.loan_term_years * 12;
    let n = f64::from(number_of_payments);

    let growth = (1.0 + monthly_rate).powf(n);
    // A rate too small to move `1 + r` is the zero-interest case.
    let monthly_principal_and_interest = if monthly_rate == 0.0 || growth == 1.0 {
        principal / n
    } else {
        principal * (monthly_rate * growth) / (growth - 1.0)
    };

    let monthly_tax = params.annual_property_tax / 12.0;
    let monthly_insurance = params.annual_home_insurance / 12.0;
    let monthly_hoa = params.monthly_hoa_fees;
    // Hard cutoff at 20% down.
    let monthly_pmi = if params.down_payment < params.home_price * PMI_THRESHOLD {
        params.monthly_pmi
    } else {
        0.0
    };

    let total_monthly_payment =
        monthly_principal_and_interest + monthly_tax + monthly_insurance + monthly_hoa + monthly_pmi;

    let down_payment_percent = if params.home_price > 0.0 {
        params.down_payment / params.home_price * 100.0
    } else {
        0.0
    };

    MortgageBreakdown {
        loan_amount: principal,
        monthly_rate,
        number_of_payments,
        down_payment_percent,
        monthly_principal_and_interest,
        monthly_tax,
        monthly_insurance,
        monthly_hoa,
        monthly_pmi,
        total_monthly_payment,
        total_of_all_payments: total_monthly_payment * n,
        total_interest_paid: monthly_principal_and_interest * n - principal,
    }
    .ensure_finite()
}

fn number(
    params: &HashMap<String, String>,
    key: &str,
    field: &'static str,
) -> Result<Option<f64>, MortgageError> {
    let Some(raw) = params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| MortgageError::Unparseable {
            field,
            value: raw.to_string(),
        })
}
