use crate::utils::error::{GateError, Result};
use chrono::NaiveDateTime;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GateError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GateError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GateError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GateError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GateError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Parses a form-style instant. The booking form posts `YYYY-MM-DDTHH:MM`;
/// a trailing seconds component is accepted too.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| GateError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Parses the extension-hours field. Must be a positive integer; rejected
/// locally before any network call.
pub fn parse_additional_hours(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(hours) if hours >= 1 => {
            u32::try_from(hours).map_err(|_| GateError::InvalidExtensionHours {
                value: trimmed.to_string(),
                reason: "Value is too large".to_string(),
            })
        }
        Ok(_) => Err(GateError::InvalidExtensionHours {
            value: trimmed.to_string(),
            reason: "Hours must be a positive integer".to_string(),
        }),
        Err(_) => Err(GateError::InvalidExtensionHours {
            value: trimmed.to_string(),
            reason: "Hours must be a whole number".to_string(),
        }),
    }
}
