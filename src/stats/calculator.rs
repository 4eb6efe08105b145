//! Statistics Calculator Module
//! The three interest aggregates reported over a validated table.

use thiserror::Error;

use crate::data::SurveyRecord;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("no rows survived validation; not enough data to report on")]
    EmptyTable,
}

/// Aggregates over one validated table.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveySummary {
    pub total_rows: usize,
    pub interested_rows: usize,
    /// Mean stated price over interested rows; `None` when nobody said Yes.
    pub avg_willing_to_pay: Option<f64>,
    /// The legacy report number, `interested / (100 * total)` in integer
    /// arithmetic. Truncates to 0 for any realistic input; kept as the
    /// default output until the downstream sheet stops expecting it.
    pub percent_interested_legacy: i64,
    /// The corrected percentage, `100 * interested / total`.
    pub percent_interested_exact: f64,
    pub avg_coffee_spend: f64,
}

impl SurveySummary {
    /// The three report lines, in their fixed order. `exact_percent` swaps
    /// the legacy percentage for the corrected one.
    pub fn render(&self, exact_percent: bool) -> String {
        let mut out = String::new();

        match self.avg_willing_to_pay {
            Some(avg) => {
                out.push_str(&format!("Average $ people are willing to spend: ${avg}\n"))
            }
            None => out.push_str("Average $ people are willing to spend: n/a\n"),
        }

        if exact_percent {
            out.push_str(&format!(
                "Percent interested in service: {:.1}%\n",
                self.percent_interested_exact
            ));
        } else {
            out.push_str(&format!(
                "Percent interested in service: {}\n",
                self.percent_interested_legacy
            ));
        }

        out.push_str(&format!(
            "Average $ people already spend: ${}\n",
            self.avg_coffee_spend
        ));

        out
    }
}

/// Computes the report aggregates in a single pass over the table.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn summarize(table: &[SurveyRecord]) -> Result<SurveySummary, StatsError> {
        if table.is_empty() {
            return Err(StatsError::EmptyTable);
        }

        let total = table.len();
        let mut interested = 0usize;
        let mut willing_sum = 0i64;
        let mut spend_sum = 0i64;

        for record in table {
            if record.wants_subscription() {
                interested += 1;
                willing_sum += record.amount_willing_to_pay().unwrap_or(0);
            }
            spend_sum += record.spend_per_week().unwrap_or(0);
        }

        let avg_willing_to_pay = if interested > 0 {
            Some(willing_sum as f64 / interested as f64)
        } else {
            None
        };

        Ok(SurveySummary {
            total_rows: total,
            interested_rows: interested,
            avg_willing_to_pay,
            percent_interested_legacy: interested as i64 / (100 * total as i64),
            percent_interested_exact: 100.0 * interested as f64 / total as f64,
            avg_coffee_spend: spend_sum as f64 / total as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respondent(spend: &str, subscribe: &str, pay: &str) -> SurveyRecord {
        SurveyRecord {
            coffee_spend: spend.to_string(),
            would_subscribe: subscribe.to_string(),
            pay_amount: pay.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_average_willing_to_pay_skips_decliners() {
        let table = vec![
            respondent("20", "Yes", "10"),
            respondent("20", "No", "0"),
            respondent("20", "Yes", "20"),
        ];
        let summary = StatsCalculator::summarize(&table).unwrap();

        assert_eq!(summary.avg_willing_to_pay, Some(15.0));
        assert_eq!(summary.interested_rows, 2);
        assert_eq!(summary.total_rows, 3);
    }

    #[test]
    fn test_legacy_percent_truncates_to_zero() {
        let table = vec![
            respondent("20", "Yes", "10"),
            respondent("20", "Yes", "10"),
            respondent("20", "No", "0"),
        ];
        let summary = StatsCalculator::summarize(&table).unwrap();

        // 2 / (100 * 3) in integer arithmetic
        assert_eq!(summary.percent_interested_legacy, 0);
        assert!((summary.percent_interested_exact - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_average_coffee_spend_runs_over_all_rows() {
        let table = vec![
            respondent("10", "Yes", "5"),
            respondent("15", "No", "0"),
        ];
        let summary = StatsCalculator::summarize(&table).unwrap();

        assert_eq!(summary.avg_coffee_spend, 12.5);
    }

    #[test]
    fn test_no_interested_rows_yields_no_average() {
        let table = vec![respondent("10", "No", "0")];
        let summary = StatsCalculator::summarize(&table).unwrap();

        assert_eq!(summary.avg_willing_to_pay, None);
        assert_eq!(summary.percent_interested_exact, 0.0);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        assert!(matches!(
            StatsCalculator::summarize(&[]),
            Err(StatsError::EmptyTable)
        ));
    }

    #[test]
    fn test_render_legacy_and_exact() {
        let table = vec![
            respondent("10", "Yes", "10"),
            respondent("15", "No", "0"),
        ];
        let summary = StatsCalculator::summarize(&table).unwrap();

        let legacy = summary.render(false);
        assert_eq!(
            legacy,
            "Average $ people are willing to spend: $10\n\
             Percent interested in service: 0\n\
             Average $ people already spend: $12.5\n"
        );

        let exact = summary.render(true);
        assert!(exact.contains("Percent interested in service: 50.0%"));
    }

    #[test]
    fn test_render_without_interested_rows() {
        let table = vec![respondent("10", "No", "0")];
        let summary = StatsCalculator::summarize(&table).unwrap();

        assert!(summary
            .render(false)
            .starts_with("Average $ people are willing to spend: n/a\n"));
    }
}
