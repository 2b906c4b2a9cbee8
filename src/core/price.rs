/// How a price expression is denominated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    /// Crop or profit share, e.g. "40% share"
    Share,
    /// Fixed amount, e.g. "15000/month"
    Fixed,
}

/// A free-text price reduced to its first number and its kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedPrice {
    pub value: f64,
    pub kind: PriceKind,
}

impl ParsedPrice {
    /// Parse a price expression.
    ///
    /// The value is the first run of ASCII digits; separators such as commas
    /// end the run, so "15,000" reads as 15. Text mentioning `%` or "share" is
    /// a share, anything else a fixed rate. Returns `None` when the text holds
    /// no digits.
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let kind = if lowered.contains('%') || lowered.contains("share") {
            PriceKind::Share
        } else {
            PriceKind::Fixed
        };

        let start = lowered.find(|c: char| c.is_ascii_digit())?;
        let digits: String = lowered[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value = digits.parse::<f64>().ok()?;

        Some(Self { value, kind })
    }

    /// Ratio of the smaller value to the larger, `None` for mismatched kinds
    /// or when there is nothing to compare against
    pub fn ratio_to(&self, other: &ParsedPrice) -> Option<f64> {
        if self.kind != other.kind {
            return None;
        }
        let larger = self.value.max(other.value);
        if larger <= 0.0 {
            return None;
        }
        Some(self.value.min(other.value) / larger)
    }
}

/// True when a price field carries no text at all
#[inline]
pub fn is_unspecified(price: Option<&str>) -> bool {
    price.map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_rate() {
        let price = ParsedPrice::parse("15000/month").unwrap();
        assert_eq!(price.value, 15000.0);
        assert_eq!(price.kind, PriceKind::Fixed);
    }

    #[test]
    fn test_parse_share() {
        assert_eq!(ParsedPrice::parse("Share 40%").unwrap().kind, PriceKind::Share);
        assert_eq!(ParsedPrice::parse("30 percent SHARE").unwrap().kind, PriceKind::Share);
        assert_eq!(ParsedPrice::parse("40%").unwrap().value, 40.0);
    }

    #[test]
    fn test_first_digit_run_only() {
        assert_eq!(ParsedPrice::parse("Rs 15,000 per acre").unwrap().value, 15.0);
        assert_eq!(ParsedPrice::parse("20000/acre for 3 years").unwrap().value, 20000.0);
    }

    #[test]
    fn test_no_digits() {
        assert!(ParsedPrice::parse("Negotiable").is_none());
        assert!(ParsedPrice::parse("").is_none());
    }

    #[test]
    fn test_ratio() {
        let farmer = ParsedPrice::parse("15000/month").unwrap();
        let land = ParsedPrice::parse("18000/month").unwrap();
        let ratio = farmer.ratio_to(&land).unwrap();
        assert!((ratio - 15000.0 / 18000.0).abs() < 1e-12);
        assert_eq!(ratio, land.ratio_to(&farmer).unwrap());

        let share = ParsedPrice::parse("40% share").unwrap();
        assert!(farmer.ratio_to(&share).is_none());

        let zero = ParsedPrice::parse("0/month").unwrap();
        assert!(zero.ratio_to(&zero).is_none());
    }

    #[test]
    fn test_unspecified() {
        assert!(is_unspecified(None));
        assert!(is_unspecified(Some("")));
        assert!(!is_unspecified(Some(" ")));
        assert!(!is_unspecified(Some("Negotiable")));
    }
}
