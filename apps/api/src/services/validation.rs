//! Input validation shared by the blog and community services

use crate::error::{ApiError, ApiResult};

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum post/comment body length in characters
pub const MAX_CONTENT_LENGTH: usize = 100_000;

/// Maximum number of images on a community post
pub const MAX_IMAGES: usize = 10;

/// Trim a required text field and check its length
pub fn required_text(field: &'static str, value: &str, max_chars: usize) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingField(field));
    }
    if trimmed.chars().count() > max_chars {
        return Err(ApiError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max_chars
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`], for fields that may be left out of an update
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> ApiResult<Option<String>> {
    value
        .map(|value| required_text(field, value, max_chars))
        .transpose()
}

/// Trim image URLs, rejecting blanks and lists longer than [`MAX_IMAGES`]
pub fn image_list(images: &[String]) -> ApiResult<Vec<String>> {
    if images.len() > MAX_IMAGES {
        return Err(ApiError::BadRequest(format!(
            "a post can have at most {} images",
            MAX_IMAGES
        )));
    }

    images
        .iter()
        .map(|url| {
            let url = url.trim();
            if url.is_empty() {
                Err(ApiError::BadRequest("image URLs cannot be blank".to_string()))
            } else {
                Ok(url.to_string())
            }
        })
        .collect()
}
