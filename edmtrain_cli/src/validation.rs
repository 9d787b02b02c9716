//! Local checks on CLI input before it reaches the query builders.
//!
//! Query values are sent with only spaces escaped, so anything that would
//! change the meaning of the query string is rejected here.

use anyhow::{bail, Result};
use chrono::NaiveDate;

pub const MAX_TEXT_LENGTH: usize = 100;

/// Characters that would split or corrupt a `key=value&` pair.
const RESERVED: &[char] = &['&', '=', '#', '%', '+', '?'];

/// Strip control characters, trim, enforce a length limit and reject
/// query-string delimiters.
pub fn validate_text(field: &str, input: &str) -> Result<String> {
    if input.len() > MAX_TEXT_LENGTH {
        bail!(
            "--{} exceeds maximum length of {} bytes",
            field,
            MAX_TEXT_LENGTH
        );
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        bail!("--{} is empty after sanitization", field);
    }
    if let Some(c) = sanitized.chars().find(|c| RESERVED.contains(c)) {
        bail!("--{} may not contain '{}'", field, c);
    }
    Ok(sanitized)
}

/// Parse a comma-separated list of positive ids, e.g. `12,40,7`.
pub fn parse_id_list(field: &str, input: &str) -> Result<Vec<i64>> {
    let mut ids = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        match part.parse::<i64>() {
            Ok(id) if id > 0 => ids.push(id),
            _ => bail!("--{}: invalid id '{}'. Expected e.g. 12,40,7", field, part),
        }
    }
    Ok(ids)
}

pub fn parse_date(field: &str, input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!(
            "--{}: invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            field,
            trimmed
        ),
    }
}
