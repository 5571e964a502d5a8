//! Title Validation

use thiserror::Error;

pub const TITLE_MIN_LEN: usize = 2;
pub const TITLE_MAX_LEN: usize = 1000;

/// Field-level title error; `Display` is the inline message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("入力必須です")]
    Required,
    #[error("{min}文字以上で入力してください")]
    TooShort { min: usize },
    #[error("{max}文字以下で入力してください")]
    TooLong { max: usize },
}

/// Length is counted in UTF-16 code units, the way browser inputs count it.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::Required);
    }
    let len = title.encode_utf16().count();
    if len < TITLE_MIN_LEN {
        return Err(ValidationError::TooShort { min: TITLE_MIN_LEN });
    }
    if len > TITLE_MAX_LEN {
        return Err(ValidationError::TooLong { max: TITLE_MAX_LEN });
    }
    Ok(())
}
