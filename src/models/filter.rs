/// Predicate applied by the listing endpoint. Every variant is scoped to a month of the year.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    MonthOnly { month: u32 },
    MonthAndPrice { month: u32, price: f64 },
    MonthAndText { month: u32, pattern: String },
}

impl Filter {
    /// Search text that reads as a non-zero finite number is an exact price match,
    /// anything else non-empty is a title/description substring match on the text as given.
    pub fn from_search(month: u32, search: &str) -> Filter {
        if search.is_empty() {
            return Filter::MonthOnly { month };
        }
        // Whole-string parse: "100abc" is text, not a price prefix.
        match search.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price != 0.0 => Filter::MonthAndPrice { month, price },
            _ => Filter::MonthAndText {
                month,
                pattern: search.to_string(),
            },
        }
    }

    pub fn month(&self) -> u32 {
        match self {
            Filter::MonthOnly { month }
            | Filter::MonthAndPrice { month, .. }
            | Filter::MonthAndText { month, .. } => *month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_month_only() {
        assert_eq!(Filter::from_search(3, ""), Filter::MonthOnly { month: 3 });
    }

    #[test]
    fn text_pattern_keeps_surrounding_whitespace() {
        assert_eq!(
            Filter::from_search(3, "   "),
            Filter::MonthAndText { month: 3, pattern: "   ".to_string() }
        );
        assert_eq!(
            Filter::from_search(3, " phone"),
            Filter::MonthAndText { month: 3, pattern: " phone".to_string() }
        );
    }

    #[test]
    fn padded_number_is_still_a_price() {
        assert_eq!(
            Filter::from_search(3, " 100 "),
            Filter::MonthAndPrice { month: 3, price: 100.0 }
        );
        assert_eq!(
            Filter::from_search(3, "100abc"),
            Filter::MonthAndText { month: 3, pattern: "100abc".to_string() }
        );
    }

    #[test]
    fn numeric_search_is_exact_price() {
        assert_eq!(
            Filter::from_search(3, "100"),
            Filter::MonthAndPrice { month: 3, price: 100.0 }
        );
        assert_eq!(
            Filter::from_search(7, "329.85"),
            Filter::MonthAndPrice { month: 7, price: 329.85 }
        );
    }

    #[test]
    fn zero_and_non_finite_numbers_fall_back_to_text() {
        assert_eq!(
            Filter::from_search(1, "0"),
            Filter::MonthAndText { month: 1, pattern: "0".to_string() }
        );
        assert_eq!(
            Filter::from_search(1, "inf"),
            Filter::MonthAndText { month: 1, pattern: "inf".to_string() }
        );
        assert_eq!(
            Filter::from_search(1, "NaN"),
            Filter::MonthAndText { month: 1, pattern: "NaN".to_string() }
        );
    }

    #[test]
    fn words_are_text_search() {
        let filter = Filter::from_search(12, "phone");
        assert_eq!(
            filter,
            Filter::MonthAndText { month: 12, pattern: "phone".to_string() }
        );
        assert_eq!(filter.month(), 12);
    }
}
