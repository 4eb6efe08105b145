//! Survey Record Module
//! The fixed 9-column layout of the subscription survey export.

/// Column names in wire order. Shared by the loader and writer so both sides
/// of the pipeline agree on the positional CSV layout.
pub const COLUMN_NAMES: [&str; 9] = [
    "timestamp",
    "team",
    "coffee_spend",
    "campus_days",
    "purchase_location",
    "would_subscribe",
    "decline_reason",
    "pay_amount",
    "email",
];

/// The answer that marks a respondent as interested in subscribing.
pub const SUBSCRIBE_YES: &str = "Yes";

/// One survey response, assembled from a 9-field CSV record at load time.
///
/// Every field is kept as raw text; records that arrived with fewer than 9
/// fields carry empty strings for the missing trailing columns. Numeric
/// interpretation goes through the `Option` accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyRecord {
    pub timestamp: String,
    pub team: String,
    pub coffee_spend: String,
    pub campus_days: String,
    pub purchase_location: String,
    pub would_subscribe: String,
    pub decline_reason: String,
    pub pay_amount: String,
    pub email: String,
}

impl SurveyRecord {
    /// Weekly coffee spend in dollars, if the field holds an integer.
    pub fn spend_per_week(&self) -> Option<i64> {
        parse_int(&self.coffee_spend)
    }

    /// Days per week spent on campus, if the field holds an integer.
    pub fn days_on_campus(&self) -> Option<i64> {
        parse_int(&self.campus_days)
    }

    /// Stated subscription price in dollars, if the field holds an integer.
    pub fn amount_willing_to_pay(&self) -> Option<i64> {
        parse_int(&self.pay_amount)
    }

    /// Whether the respondent said they would subscribe.
    pub fn wants_subscription(&self) -> bool {
        self.would_subscribe == SUBSCRIBE_YES
    }

    /// The record's fields in wire order, matching [`COLUMN_NAMES`].
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.timestamp,
            &self.team,
            &self.coffee_spend,
            &self.campus_days,
            &self.purchase_location,
            &self.would_subscribe,
            &self.decline_reason,
            &self.pay_amount,
            &self.email,
        ]
    }
}

/// Survey exports pad some numeric cells with spaces; tolerate that, but
/// nothing else.
fn parse_int(field: &str) -> Option<i64> {
    field.trim().parse().ok()
}
