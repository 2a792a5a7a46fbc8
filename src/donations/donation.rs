/// The two grouping axes. Each is fed by its own source file and runs the same pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Party,
    Company,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Party, Dimension::Company];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Party => "party",
            Dimension::Company => "company",
        }
    }

    pub fn top_title(self) -> &'static str {
        match self {
            Dimension::Party => "Top 10 Parties with Most Donations via Electoral Bond Purchase",
            Dimension::Company => "Top 10 Companies with Most Electoral Bond Purchase",
        }
    }

    pub fn all_title(self) -> &'static str {
        match self {
            Dimension::Party => "Parties with Donations via Electoral Bond",
            Dimension::Company => "Companies with Electoral Bond Purchases",
        }
    }
}

/// One accepted input line. `amount` is NaN when the amount field had no numeric prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRecord {
    pub sequence_id: u32,
    pub date: String,
    pub entity_name: String,
    pub amount: f64,
}

impl DonationRecord {
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_finite()
    }
}

/// Grouping key used for both dimensions: the entity name, untouched.
pub fn entity_name(record: &DonationRecord) -> &str {
    &record.entity_name
}

/// Parse the leading decimal literal of `text` after trimming surrounding whitespace.
///
/// `"500.5"` and `"12abc"` parse to 500.5 and 12. Empty text, `"abc"`, `"."` or `"-"`
/// give NaN. Literals too large for an f64 come back infinite.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amounts() {
        assert_eq!(parse_amount("500.5"), 500.5);
        assert_eq!(parse_amount("1000"), 1000.0);
        assert_eq!(parse_amount("-25"), -25.0);
        assert_eq!(parse_amount("+7"), 7.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_amount("  42.25 \r"), 42.25);
    }

    #[test]
    fn test_leading_numeric_prefix_is_accepted() {
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("1.5e3 INR"), 1500.0);
        assert_eq!(parse_amount("3e"), 3.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
    }

    #[test]
    fn test_non_numeric_text_is_nan() {
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("   ").is_nan());
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("x12").is_nan());
        assert!(parse_amount(".").is_nan());
        assert!(parse_amount("-").is_nan());
        assert!(parse_amount("Infinity").is_nan());
    }

    #[test]
    fn test_overflow_is_not_finite() {
        let record = DonationRecord {
            sequence_id: 1,
            date: "2023-01-01".to_string(),
            entity_name: "Acme".to_string(),
            amount: parse_amount("1e400"),
        };
        assert!(!record.has_valid_amount());
    }

    #[test]
    fn test_dimension_names() {
        assert_eq!(Dimension::Party.name(), "party");
        assert_eq!(Dimension::Company.name(), "company");
    }
}
