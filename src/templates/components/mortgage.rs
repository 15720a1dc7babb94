use crate::mortgage::{calculate, MortgageBreakdown, MortgageError, MortgageParams, LOAN_TERM_OPTIONS};
use crate::templates::components::usd;
use maud::{html, Markup};

/// Compact estimate shown on a listing's detail page.
pub fn mortgage_estimate(home_price: u64) -> Markup {
    let params = MortgageParams::for_home_price(home_price as f64);

    html! {
        aside class="mortgage-estimate" {
            h3 { "Quick Estimate" }
            @match calculate(&params) {
                Ok(b) => {
                    p class="muted" {
                        (usd(params.down_payment)) " down (" (format!("{:.1}", b.down_payment_percent)) "%), "
                        (params.loan_term_years) " years at " (params.annual_interest_rate_percent.to_string()) "%"
                    }
                    p class="monthly" { (usd(b.total_monthly_payment)) span { "/mo" } }
                }
                Err(e) => p class="validation" { (e.to_string()) }
            }
            a href=(format!("/mortgage?homePrice={home_price}")) { "Customize in the mortgage calculator" }
        }
    }
}

/// The full calculator form plus either a breakdown or the validation error.
pub fn mortgage_breakdown(
    params: &MortgageParams,
    result: &Result<MortgageBreakdown, MortgageError>,
) -> Markup {
    html! {
        div class="mortgage-calculator" {
            form method="get" action="/mortgage" class="mortgage-form" {
                (money_input("homePrice", "Home Price", params.home_price))
                (money_input("downPayment", "Down Payment", params.down_payment))
                label for="loanTerm" { "Loan Term (years)" }
                select name="loanTerm" id="loanTerm" {
                    @for years in LOAN_TERM_OPTIONS {
                        option value=(years) selected[params.loan_term_years == years] { (years) " years" }
                    }
                }
                label for="interestRate" { "Interest Rate (%)" }
                input type="number" step="0.1" min="0" name="interestRate" id="interestRate"
                    value=(params.annual_interest_rate_percent.to_string());
                (money_input("propertyTax", "Annual Property Tax", params.annual_property_tax))
                (money_input("homeInsurance", "Annual Home Insurance", params.annual_home_insurance))
                (money_input("hoaFees", "Monthly HOA Fees", params.monthly_hoa_fees))
                (money_input("pmi", "Monthly PMI", params.monthly_pmi))
                button type="submit" class="primary" { "Calculate" }
            }

            @match result {
                Ok(b) => (breakdown_table(b)),
                Err(e) => div class="validation" role="alert" {
                    strong { "Check your inputs: " } (e.to_string())
                },
            }
        }
    }
}

fn breakdown_table(b: &MortgageBreakdown) -> Markup {
    html! {
        section class="mortgage-results" {
            div class="monthly-total" {
                p { "Estimated Monthly Payment" }
                p class="monthly" { (usd(b.total_monthly_payment)) span { "/mo" } }
            }
            table {
                tbody {
                    tr { th { "Principal & Interest" } td { (usd(b.monthly_principal_and_interest)) } }
                    tr { th { "Property Tax" } td { (usd(b.monthly_tax)) } }
                    tr { th { "Home Insurance" } td { (usd(b.monthly_insurance)) } }
                    @if b.monthly_hoa > 0.0 {
                        tr { th { "HOA Fees" } td { (usd(b.monthly_hoa)) } }
                    }
                    @if b.monthly_pmi > 0.0 {
                        tr { th { "PMI" } td { (usd(b.monthly_pmi)) } }
                    }
                }
            }
            dl class="loan-summary" {
                dt { "Loan Amount" } dd { (usd(b.loan_amount)) }
                dt { "Down Payment" } dd { (format!("{:.1}%", b.down_payment_percent)) }
                dt { "Total of " (b.number_of_payments) " Payments" } dd { (usd(b.total_of_all_payments)) }
                dt { "Total Interest" } dd { (usd(b.total_interest_paid)) }
            }
        }
    }
}

fn money_input(name: &str, label: &str, value: f64) -> Markup {
    html! {
        label for=(name) { (label) }
        div class="money-input" {
            span { "$" }
            input type="number" min="0" step="any" name=(name) id=(name) value=(value.to_string());
        }
    }
}
