//! Survey Validator Module
//! Applies the data-quality rules that decide which responses count.

use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use super::record::SurveyRecord;

/// Why a record was thrown out. Diagnostic only - rejected rows are dropped,
/// never surfaced as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("invalid email: {0}")]
    Email(String),
    #[error("invalid coffee spend per week: ${0}")]
    CoffeeSpend(String),
    #[error("invalid days on campus: {0}")]
    CampusDays(String),
    #[error("invalid willingness to pay: ${0}")]
    PayAmount(String),
}

/// Filters a loaded table down to the rows usable for analysis.
///
/// Rules, checked in order, first failure rejects the row:
/// 1. Email must contain `@`, must not repeat the email of an earlier kept
///    row (case-sensitive), and must not be a refused-to-answer placeholder
///    (`no@...`, `none@...`, `non@...`, case-insensitive).
/// 2. Coffee spend must be an integer in 1..=50 dollars per week.
/// 3. Days on campus must be an integer in 1..=7.
/// 4. Willingness to pay must be an integer, and positive when the
///    respondent said they would subscribe. Respondents who declined are
///    kept whatever their price, so interest percentages run over the whole
///    qualifying population.
///
/// A garbage team field never rejects a row.
pub struct SurveyValidator;

impl SurveyValidator {
    /// Keep the records passing every rule, in their original order.
    pub fn validate(table: Vec<SurveyRecord>) -> Vec<SurveyRecord> {
        let before = table.len();
        debug!("rows before validation: {}", before);

        let mut kept_emails: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(before);

        for (idx, record) in table.into_iter().enumerate() {
            match Self::check(&record, &kept_emails) {
                Ok(()) => {
                    kept_emails.insert(record.email.clone());
                    kept.push(record);
                }
                Err(reason) => {
                    debug!("row {} rejected: {}", idx, reason);
                }
            }
        }

        debug!("rows after validation: {}", kept.len());
        kept
    }

    /// Run every rule against one record. `kept_emails` holds the emails of
    /// records kept so far; the caller adds this record's email only when it
    /// passes.
    pub fn check(
        record: &SurveyRecord,
        kept_emails: &HashSet<String>,
    ) -> Result<(), RejectReason> {
        if !email_is_acceptable(&record.email) || kept_emails.contains(&record.email) {
            return Err(RejectReason::Email(record.email.clone()));
        }

        match record.spend_per_week() {
            Some(spend) if spend > 0 && spend <= 50 => {}
            _ => return Err(RejectReason::CoffeeSpend(record.coffee_spend.clone())),
        }

        match record.days_on_campus() {
            Some(days) if days > 0 && days <= 7 => {}
            _ => return Err(RejectReason::CampusDays(record.campus_days.clone())),
        }

        match record.amount_willing_to_pay() {
            Some(amount) if !(record.wants_subscription() && amount <= 0) => {}
            _ => return Err(RejectReason::PayAmount(record.pay_amount.clone())),
        }

        Ok(())
    }
}

/// An address is acceptable when it looks like one and isn't a polite
/// refusal ("no@no.no" and friends show up a lot in the export).
fn email_is_acceptable(email: &str) -> bool {
    if !email.contains('@') {
        return false;
    }
    let lower = email.to_lowercase();
    !(lower.starts_with("no@") || lower.starts_with("none@") || lower.starts_with("non@"))
}
