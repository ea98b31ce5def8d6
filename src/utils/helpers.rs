use crate::error::ParamError;

/// Escapes regular-expression metacharacters so `text` matches literally.
pub fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '.' | '+' | '*' | '?' | '(' | ')' | '|' | '^' | '$' | '{' | '}' | '[' | ']' | '\\'
            | '/' | '-' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            other => escaped.push(other),
        }
    }
    escaped
}

/// Parses a month of the year. Anything that is not 1..=12 yields `None`.
pub fn parse_month(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m))
}

/// Parses a positive integer query parameter, clamping values below 1 up to 1.
pub fn parse_positive(
    name: &'static str,
    value: Option<&str>,
    default: u64,
) -> Result<u64, ParamError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    let parsed = raw.parse::<i64>().map_err(|_| ParamError::NotAnInteger {
        name,
        value: raw.to_string(),
    })?;
    Ok(parsed.max(1) as u64)
}

pub fn total_pages(total_count: u64, per_page: u64) -> u64 {
    total_count.div_ceil(per_page.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(escape_regex("phone"), "phone");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(15\")"), "\\(15\"\\)");
    }

    #[test]
    fn month_outside_calendar_is_rejected() {
        assert_eq!(parse_month(Some("3")), Some(3));
        assert_eq!(parse_month(Some(" 12 ")), Some(12));
        assert_eq!(parse_month(Some("03")), Some(3));
        assert_eq!(parse_month(Some("0")), None);
        assert_eq!(parse_month(Some("13")), None);
        assert_eq!(parse_month(Some("march")), None);
        assert_eq!(parse_month(None), None);
    }

    #[test]
    fn positive_params_default_and_clamp() {
        assert_eq!(parse_positive("page", None, 1).unwrap(), 1);
        assert_eq!(parse_positive("page", Some(""), 1).unwrap(), 1);
        assert_eq!(parse_positive("perPage", Some("25"), 10).unwrap(), 25);
        assert_eq!(parse_positive("page", Some("0"), 1).unwrap(), 1);
        assert_eq!(parse_positive("page", Some("-4"), 1).unwrap(), 1);
        assert!(parse_positive("page", Some("two"), 1).is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(30, 7), 5);
    }
}
