use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Parse an optional CLI date, defaulting to `fallback` (usually "today").
pub fn parse_date_or(s: Option<&String>, fallback: NaiveDate) -> Result<NaiveDate, String> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| raw.to_string()),
        None => Ok(fallback),
    }
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2025-02-28"),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(parse_date("28/02/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn missing_date_falls_back() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date_or(None, d), Ok(d));
        assert_eq!(
            parse_date_or(Some(&"nope".to_string()), d),
            Err("nope".to_string())
        );
    }
}
