//! Input checks for the comment endpoints. Everything here fails with
//! `ApiError::Validation`, which maps to 400.

use std::num::IntErrorKind;

use remark_types::api::{DEFAULT_LIMIT, ListParams, MAX_LIMIT, MAX_PAGE_LEN};
use remark_types::models::ListFilter;

use crate::error::ApiError;

/// Path ids must be positive integers written as plain digits.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    Some(raw)
        .filter(|r| !r.is_empty() && r.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|r| r.parse::<i64>().ok())
        .filter(|id| *id >= 1)
        .ok_or_else(|| ApiError::Validation("Invalid id".into()))
}

/// Trims the text and enforces `1..=max_len` characters.
pub fn comment_text(raw: Option<&str>, max_len: usize) -> Result<String, ApiError> {
    let text = raw.map(str::trim).unwrap_or_default();

    if text.is_empty() {
        return Err(ApiError::Validation("Text is required".into()));
    }
    if text.chars().count() > max_len {
        return Err(ApiError::Validation(format!(
            "Text must be at most {} characters",
            max_len
        )));
    }

    Ok(text.to_string())
}

/// Blank page keys mean "no page".
pub fn page_key(raw: Option<&str>) -> Result<Option<String>, ApiError> {
    let Some(page) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    if page.chars().count() > MAX_PAGE_LEN {
        return Err(ApiError::Validation(format!(
            "Page must be at most {} characters",
            MAX_PAGE_LEN
        )));
    }

    Ok(Some(page.to_string()))
}

pub fn list_filter(params: &ListParams) -> Result<ListFilter, ApiError> {
    let limit = parse_number(params.limit.as_deref(), "limit")?
        .map(|n| n.clamp(1, MAX_LIMIT as i64) as usize)
        .unwrap_or(DEFAULT_LIMIT);
    let offset = parse_number(params.offset.as_deref(), "offset")?
        .map(|n| n.max(0) as usize)
        .unwrap_or(0);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(ListFilter {
        page: page_key(params.page.as_deref())?,
        search,
        limit,
        offset,
    })
}

/// Out-of-range integers saturate; they get clamped by the caller anyway.
fn parse_number(raw: Option<&str>, name: &str) -> Result<Option<i64>, ApiError> {
    let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match value.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(ApiError::Validation(format!("Invalid {}", name))),
        },
    }
}
