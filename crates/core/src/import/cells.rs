//! Cell parsing: amounts, dates and spreadsheet date serials.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::table::Cell;

/// Serial of 1970-01-01 in the 1900 spreadsheet date system.
const UNIX_EPOCH_SERIAL: i64 = 25_569;
const SECONDS_PER_DAY: i64 = 86_400;

/// Converts a spreadsheet date serial to a calendar date.
///
/// `date = 1970-01-01 + round((serial - 25569) * 86400)` seconds, so a
/// fractional serial (a time of day) rounds to the nearest second first.
#[must_use]
pub fn serial_to_date(serial: Decimal) -> Option<NaiveDate> {
    let seconds = serial
        .checked_sub(Decimal::from(UNIX_EPOCH_SERIAL))?
        .checked_mul(Decimal::from(SECONDS_PER_DAY))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()?;
    DateTime::from_timestamp(seconds, 0).map(|instant| instant.date_naive())
}

/// Parses a date cell: a serial number, `YYYY-MM-DD` (optionally followed by a
/// time), `DD/MM/YYYY`, or a serial written as text.
#[must_use]
pub fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Empty => None,
        Cell::Number(serial) => serial_to_date(*serial),
        Cell::Text(text) => parse_date_text(text.trim()),
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    if let Some(date) = text
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return Some(date);
    }
    Decimal::from_str(text).ok().and_then(serial_to_date)
}

/// Parses an amount cell: a number, `1500.50`, `1,500.50` or pt-BR text such
/// as `R$ 1.500,50`.
///
/// When both separators appear the last one is the decimal separator; a lone
/// comma is always decimal.
#[must_use]
pub fn parse_amount(cell: &Cell) -> Option<Decimal> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) => Some(*n),
        Cell::Text(text) => parse_amount_text(text),
    }
}

fn parse_amount_text(text: &str) -> Option<Decimal> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("R$", "");
    if compact.is_empty() {
        return None;
    }
    let normalized = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) => compact.replace(',', "."),
        _ => compact,
    };
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serial_45000() {
        assert_eq!(serial_to_date(dec!(45000)), Some(ymd(2023, 3, 15)));
        assert_eq!(serial_to_date(dec!(25569)), Some(ymd(1970, 1, 1)));
        assert_eq!(serial_to_date(dec!(45000.75)), Some(ymd(2023, 3, 15)));
    }

    #[rstest]
    #[case(Cell::Number(dec!(45000)), Some(ymd(2023, 3, 15)))]
    #[case(Cell::from("2025-12-31"), Some(ymd(2025, 12, 31)))]
    #[case(Cell::from("31/12/2025"), Some(ymd(2025, 12, 31)))]
    #[case(Cell::from("2025-12-31T00:00:00.000Z"), Some(ymd(2025, 12, 31)))]
    #[case(Cell::from("45000"), Some(ymd(2023, 3, 15)))]
    #[case(Cell::from("amanhã"), None)]
    #[case(Cell::from("31/02/2025"), None)]
    #[case(Cell::from("79228162514264337593543950335"), None)]
    #[case(Cell::Number(Decimal::MAX), None)]
    #[case(Cell::Number(Decimal::MIN), None)]
    #[case(Cell::Number(dec!(1000000000000000000000000)), None)]
    #[case(Cell::Empty, None)]
    fn test_parse_date(#[case] cell: Cell, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(&cell), expected);
    }

    #[rstest]
    #[case(Cell::Number(dec!(1500)), Some(dec!(1500)))]
    #[case(Cell::from("1500.50"), Some(dec!(1500.50)))]
    #[case(Cell::from("R$ 1.500,50"), Some(dec!(1500.50)))]
    #[case(Cell::from("1,500.50"), Some(dec!(1500.50)))]
    #[case(Cell::from("350,00"), Some(dec!(350.00)))]
    #[case(Cell::from("R$\u{a0}42"), Some(dec!(42)))]
    #[case(Cell::from("-10,5"), Some(dec!(-10.5)))]
    #[case(Cell::from("muito"), None)]
    #[case(Cell::from("R$"), None)]
    fn test_parse_amount(#[case] cell: Cell, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_amount(&cell), expected);
    }
}
