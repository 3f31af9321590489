use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

// Day, then a numeric or Spanish-name month, then an optional 2-4 digit year.
// Component separators are `/`, whitespace, `.`, `-` or the word "de".
crate::re!(
    re_date,
    r"(?i)\b(?P<d>\d{1,2})[/\s\.\-](?:de)?\s*(?P<m>(?:ene|feb|mar|abr|may|jun|jul|ago|sep|set|oct|nov|dic)[a-z]*|\d{1,2})[/\s\.\-]*(?P<y>\d{2,4})?\b"
);

/// A resolved date and the byte span of the matched expression, so the
/// extractor can strip it from the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum DateError {
    #[error("no date expression found")]
    NoMatch,
    #[error("date expression does not resolve to a calendar date")]
    Invalid,
}

fn month_stem_to_num(stem: &str) -> Option<u32> {
    match stem {
        "ene" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "abr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "ago" => Some(8),
        "sep" | "set" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dic" => Some(12),
        _ => None,
    }
}

/// Recognize the first date expression embedded in `line`.
///
/// A 2-digit year maps into the 2000s; an absent year takes `fallback_year`
/// (the document-level inference). An unmapped month name or an impossible
/// (day, month, year) combination fails recognition; the caller drops the
/// line rather than correcting it.
pub fn find_date(line: &str, fallback_year: i32) -> Result<DateMatch, DateError> {
    let caps = re_date().captures(line).ok_or(DateError::NoMatch)?;
    let whole = caps.get(0).ok_or(DateError::NoMatch)?;

    let day: u32 = caps
        .name("d")
        .ok_or(DateError::Invalid)?
        .as_str()
        .parse()
        .map_err(|_| DateError::Invalid)?;

    let m_str = caps.name("m").ok_or(DateError::Invalid)?.as_str();
    let month = if m_str.chars().all(|c| c.is_ascii_digit()) {
        m_str.parse::<u32>().map_err(|_| DateError::Invalid)?
    } else {
        let lower = m_str.to_ascii_lowercase();
        month_stem_to_num(&lower[..3]).ok_or(DateError::Invalid)?
    };

    let year = match caps.name("y") {
        Some(y) if y.as_str().len() == 2 => {
            2000 + y.as_str().parse::<i32>().map_err(|_| DateError::Invalid)?
        }
        Some(y) => y.as_str().parse::<i32>().map_err(|_| DateError::Invalid)?,
        None => fallback_year,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::Invalid)?;
    Ok(DateMatch { date, start: whole.start(), end: whole.end() })
}
