//! Fechas de calendario en UTC

use chrono::{NaiveDate, Utc};

/// Fecha actual (UTC), serializada como `AAAA-MM-DD`
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_serializes_as_iso_date() {
        let value = serde_json::to_value(today()).unwrap();
        let text = value.as_str().unwrap();
        assert_eq!(text.len(), 10);
        assert!(NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok());
    }
}
