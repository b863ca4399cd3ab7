//! Display helpers shared by every presentation of a result.

use std::fmt;

/// Format `amount` as whole currency units with thousands separators.
///
/// Common currencies get their symbol (`$45,000`, `£9,250`); anything else
/// is prefixed with its code (`CHF 12,000`).
pub fn format_currency(amount: f64, code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" => Some("$"),
        "GBP" => Some("£"),
        "EUR" => Some("€"),
        "AUD" => Some("A$"),
        "CAD" => Some("CA$"),
        "SGD" => Some("S$"),
        _ => None,
    };

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u64);

    match symbol {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code} {digits}"),
    }
}

pub(crate) fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Coarse quality band for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Fair,
    Good,
    Strong,
    Excellent,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => MatchTier::Excellent,
            80..=89 => MatchTier::Strong,
            70..=79 => MatchTier::Good,
            _ => MatchTier::Fair,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent match",
            MatchTier::Strong => "Strong match",
            MatchTier::Good => "Good match",
            MatchTier::Fair => "Fair match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(45_000.0, "USD"), "$45,000");
        assert_eq!(format_currency(9_250.0, "gbp"), "£9,250");
        assert_eq!(format_currency(1_234_567.0, "EUR"), "€1,234,567");
        assert_eq!(format_currency(500.0, "CAD"), "CA$500");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(999.6, "USD"), "$1,000");
        assert_eq!(format_currency(0.0, "USD"), "$0");
        assert_eq!(format_currency(-1_500.0, "AUD"), "-A$1,500");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(format_currency(12_000.0, "CHF"), "CHF 12,000");
    }

    #[test]
    fn test_match_tiers() {
        assert_eq!(MatchTier::from_score(100), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(90), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(89), MatchTier::Strong);
        assert_eq!(MatchTier::from_score(80), MatchTier::Strong);
        assert_eq!(MatchTier::from_score(70), MatchTier::Good);
        assert_eq!(MatchTier::from_score(69), MatchTier::Fair);
        assert_eq!(MatchTier::from_score(0).to_string(), "Fair match");
    }
}
