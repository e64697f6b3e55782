//! A small strftime/strptime-style pattern language for calendar units.
//!
//! Supported directives:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `%Y` | Year, zero padded to four digits. |
//! | `%y` | Two-digit year. When parsing, 69-99 map to 19xx and 00-68 to 20xx. |
//! | `%m` | Month, zero padded to two digits. |
//! | `%d` | Day of month, zero padded to two digits. |
//! | `%b` | Abbreviated English month name (`Jan`). |
//! | `%B` | Full English month name (`January`). |
//! | `%G` | Week-numbering year, zero padded to four digits. |
//! | `%g` | Two-digit week-numbering year. Formatting only. |
//! | `%V` | Week number, zero padded to two digits. |
//! | `%%` | A literal `%`. |
//!
//! Every other character is matched or written literally.

use std::fmt::Write;

use crate::date::Date;
use crate::error::Error;

static MONTH_NAMES_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name_full(month: u8) -> &'static str {
    MONTH_NAMES_FULL[usize::from(month - 1)]
}

fn month_name_abbrev(month: u8) -> &'static str {
    &month_name_full(month)[..3]
}

/// The values a pattern can refer to when formatting a calendar unit.
///
/// The week fields are given separately from the date so that a week with a
/// non-Monday first weekday keeps its own numbering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields {
    pub(crate) date: Date,
    pub(crate) iso_year: i32,
    pub(crate) iso_week: u8,
}

/// The fields recovered by [`parse`]. Missing fields are `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub(crate) year: Option<i32>,
    pub(crate) month: Option<u8>,
    pub(crate) day: Option<u8>,
    pub(crate) iso_year: Option<i32>,
    pub(crate) iso_week: Option<u8>,
}

impl Parsed {
    /// The parsed calendar date. Month and day default to 1 when the pattern
    /// does not mention them.
    pub(crate) fn date(&self) -> Option<Date> {
        let year = self.year?;
        Date::new(year, self.month.unwrap_or(1), self.day.unwrap_or(1)).ok()
    }

    pub(crate) fn iso_week(&self) -> Option<(i32, u8)> {
        Some((self.iso_year?, self.iso_week?))
    }
}

enum Failure {
    Pattern(&'static str),
    Mismatch,
}

fn pattern_error(pattern: &str, reason: &'static str) -> Error {
    Error::Pattern {
        pattern: pattern.to_string(),
        reason,
    }
}

/// Formats `fields` according to `pattern`.
pub(crate) fn format(pattern: &str, fields: &Fields) -> Result<String, Error> {
    let (year, month, day) = fields.date.ymd();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(directive) = chars.next() else {
            return Err(pattern_error(pattern, "expected directive after '%'"));
        };
        // Writing to a String never fails.
        let _ = match directive {
            '%' => write!(out, "%"),
            'Y' => write!(out, "{year:04}"),
            'y' => write!(out, "{:02}", year % 100),
            'm' => write!(out, "{month:02}"),
            'd' => write!(out, "{day:02}"),
            'b' => write!(out, "{}", month_name_abbrev(month)),
            'B' => write!(out, "{}", month_name_full(month)),
            'G' => write!(out, "{:04}", fields.iso_year),
            'g' => write!(out, "{:02}", fields.iso_year % 100),
            'V' => write!(out, "{:02}", fields.iso_week),
            _ => return Err(pattern_error(pattern, "unrecognized directive")),
        };
    }
    Ok(out)
}

/// Parses `input` according to `pattern`.
///
/// `type_name` names the value being parsed in the error returned when the
/// input does not match.
pub(crate) fn parse(
    type_name: &'static str,
    pattern: &str,
    input: &str,
) -> Result<Parsed, Error> {
    let mut parser = Parser {
        fmt: pattern.as_bytes(),
        inp: input.as_bytes(),
        parsed: Parsed::default(),
    };
    match parser.parse() {
        Ok(()) => {
            trace!("parsed {input:?} with {pattern:?} into {:?}", parser.parsed);
            Ok(parser.parsed)
        }
        Err(Failure::Pattern(reason)) => Err(pattern_error(pattern, reason)),
        Err(Failure::Mismatch) => Err(Error::parse(type_name, input)),
    }
}

struct Parser<'f, 'i> {
    fmt: &'f [u8],
    inp: &'i [u8],
    parsed: Parsed,
}

impl Parser<'_, '_> {
    fn parse(&mut self) -> Result<(), Failure> {
        while let Some((&f, rest)) = self.fmt.split_first() {
            self.fmt = rest;
            if f != b'%' {
                self.literal(f)?;
                continue;
            }
            let Some((&directive, rest)) = self.fmt.split_first() else {
                return Err(Failure::Pattern("expected directive after '%'"));
            };
            self.fmt = rest;
            match directive {
                b'%' => self.literal(b'%')?,
                b'Y' => self.parsed.year = Some(self.number(4)? as i32),
                b'y' => {
                    let year = self.number(2)? as i32;
                    self.parsed.year = Some(if year <= 68 { year + 2000 } else { year + 1900 });
                }
                b'm' => self.parsed.month = Some(self.bounded(2, 1, 12)?),
                b'd' => self.parsed.day = Some(self.bounded(2, 1, 31)?),
                b'b' => self.parsed.month = Some(self.month_name(true)?),
                b'B' => self.parsed.month = Some(self.month_name(false)?),
                b'G' => self.parsed.iso_year = Some(self.number(4)? as i32),
                b'V' => self.parsed.iso_week = Some(self.bounded(2, 1, 53)?),
                b'g' => return Err(Failure::Pattern("%g is not supported when parsing")),
                _ => return Err(Failure::Pattern("unrecognized directive")),
            }
        }
        if self.inp.is_empty() {
            Ok(())
        } else {
            Err(Failure::Mismatch)
        }
    }

    fn literal(&mut self, expected: u8) -> Result<(), Failure> {
        match self.inp.split_first() {
            Some((&b, rest)) if b == expected => {
                self.inp = rest;
                Ok(())
            }
            _ => Err(Failure::Mismatch),
        }
    }

    /// Consumes between one and `max_digits` ASCII digits.
    fn number(&mut self, max_digits: usize) -> Result<u32, Failure> {
        let len = self
            .inp
            .iter()
            .take(max_digits)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return Err(Failure::Mismatch);
        }
        let (digits, rest) = self.inp.split_at(len);
        self.inp = rest;
        Ok(digits
            .iter()
            .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0')))
    }

    fn bounded(&mut self, max_digits: usize, min: u32, max: u32) -> Result<u8, Failure> {
        let n = self.number(max_digits)?;
        if (min..=max).contains(&n) {
            Ok(n as u8)
        } else {
            Err(Failure::Mismatch)
        }
    }

    fn month_name(&mut self, abbrev: bool) -> Result<u8, Failure> {
        for (index, name) in MONTH_NAMES_FULL.iter().enumerate() {
            let name = if abbrev { &name[..3] } else { name };
            let len = name.len();
            if self.inp.len() >= len && self.inp[..len].eq_ignore_ascii_case(name.as_bytes()) {
                self.inp = &self.inp[len..];
                return Ok(index as u8 + 1);
            }
        }
        Err(Failure::Mismatch)
    }
}

/// Splits a range pattern into the pattern for each unit and the separator.
///
/// `"%Y-%m:--"` splits at the colon into `"%Y-%m"` and `"--"`. Without a
/// colon the last character is the separator, so `"%Y-%m/"` gives `"%Y-%m"`
/// and `"/"`.
pub(crate) fn split_range_pattern(pattern: &str) -> Result<(&str, &str), Error> {
    let (unit, separator) = match pattern.split_once(':') {
        Some((_, separator)) if separator.contains(':') => {
            return Err(pattern_error(pattern, "more than one ':' in range pattern"));
        }
        Some(split) => split,
        None => {
            let Some((index, _)) = pattern.char_indices().next_back() else {
                return Err(pattern_error(pattern, "missing range separator"));
            };
            pattern.split_at(index)
        }
    };
    if separator.is_empty() {
        return Err(pattern_error(pattern, "missing range separator"));
    }
    Ok((unit, separator))
}

/// Splits `text` into exactly two parts around `separator`.
pub(crate) fn split_range_text<'t>(
    type_name: &'static str,
    text: &'t str,
    separator: &str,
) -> Result<(&'t str, &'t str), Error> {
    let mut parts = text.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((start, end)),
        _ => Err(Error::parse(type_name, text)),
    }
}
