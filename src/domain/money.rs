use std::fmt;

/// Format a USD value with exactly two decimals.
/// Example: 21.000000000000004 -> "21.00", 0.43 -> "0.43"
pub fn format_usd(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse a user-supplied amount.
/// Example: "50" -> 50.0, "12.5" -> 12.5, " 1e3 " -> 1000.0
///
/// Zero and negative values parse successfully; only text that is not a
/// finite number is rejected.
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let input = input.trim();
    let value: f64 = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))?;

    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite(input.to_string()));
    }

    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "invalid amount format: {:?}", input)
            }
            ParseAmountError::NotFinite(input) => write!(f, "amount is not finite: {:?}", input),
        }
    }
}

impl std::error::Error for ParseAmountError {}
