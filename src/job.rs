use std::fmt;

// Salary range text comes in two shapes: "$20.00 hourly" (number + unit)
// and "$20.00 - $25.00 hourly" (number, dash, number, unit). Anything
// shorter than two tokens carries no usable number.
const TOKENS_ONE_NUMBER: usize = 2;
const TOKENS_TWO_NUMBERS: usize = 4;
const RANGE_MIN_POS: usize = 0;
const RANGE_MAX_POS: usize = 2;

const HOURS_A_WEEK: f64 = 40.0;
const WEEKS_A_YEAR: f64 = 52.0;
const HOURLY_UNIT: &str = "hourly";

/// Sentinel shown when a salary cannot be derived from the posting text.
pub const NOT_APPLICABLE: &str = "Negotiable";

/// One job posting. Basic fields come from a listing-page fragment, the
/// rest from the posting's detail document; after both passes the record is
/// read-only for the session.
#[derive(Debug, Default, Clone)]
pub struct Job {
    pub title: String,
    pub department: String,
    /// `MM/DD/YYYY`
    pub app_deadline: String,
    pub salary_range: String,
    pub pos_available: u32,
    pub duties_summary: String,
    pub req_qualifications: String,
    pub des_qualifications: String,
    pub category: String,
    pub fte: u32,
    pub full_part: String,
    pub temp_reg: String,
    /// `MM/DD/YYYY`
    pub start_date: String,
    /// `MM/DD/YYYY`
    pub end_date: String,
    pub contact_name: String,
    pub contact_phone: String,
}

/// An annualized salary derived from free-form range text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Salary {
    Annual(f64),
    Negotiable,
}

impl Salary {
    /// Numeric key for ordering; a negotiable salary sorts like zero.
    pub fn sort_value(&self) -> f64 {
        match self {
            Salary::Annual(amount) => *amount,
            Salary::Negotiable => 0.0,
        }
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Annual(amount) => write!(f, "{amount:.2}"),
            Salary::Negotiable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Job {
    /// Low end of the salary range, annualized.
    pub fn min_salary(&self) -> Salary {
        let tokens: Vec<&str> = self.salary_range.split_whitespace().collect();
        if tokens.len() < TOKENS_ONE_NUMBER {
            return Salary::Negotiable;
        }
        Salary::Annual(to_annual(
            money_value(tokens[RANGE_MIN_POS]),
            tokens[tokens.len() - 1],
        ))
    }

    /// High end of the salary range, annualized. Equals the low end when
    /// the posting quotes a single figure.
    pub fn max_salary(&self) -> Salary {
        let tokens: Vec<&str> = self.salary_range.split_whitespace().collect();
        if tokens.len() < TOKENS_ONE_NUMBER {
            return Salary::Negotiable;
        }
        let position = if tokens.len() < TOKENS_TWO_NUMBERS {
            RANGE_MIN_POS
        } else {
            RANGE_MAX_POS
        };
        Salary::Annual(to_annual(
            money_value(tokens[position]),
            tokens[tokens.len() - 1],
        ))
    }
}

// "$1,234.50" -> 1234.5; tokens with no usable number become 0.0 rather
// than an error.
fn money_value(token: &str) -> f64 {
    let cleaned: String = token.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.parse().unwrap_or(0.0)
}

fn to_annual(amount: f64, unit: &str) -> f64 {
    if unit.eq_ignore_ascii_case(HOURLY_UNIT) {
        // Round to cents after scaling up.
        (amount * HOURS_A_WEEK * WEEKS_A_YEAR * 100.0).round() / 100.0
    } else {
        amount
    }
}
