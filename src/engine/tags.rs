use thiserror::Error;

/// Errors raised while parsing a serialized genre list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagParseError {
    #[error("unterminated genre list: {0:?}")]
    UnterminatedList(String),
}

/// Parses the dataset's serialized genre representation into a tag list.
///
/// The snapshot stores genres the way the upstream export wrote them: a
/// bracketed, quoted, comma-separated list such as `"['Action', 'Comedy']"`.
/// Bare comma-separated strings (`"Action, Comedy"`) and single tags are
/// accepted as well. Tags are trimmed, unquoted and de-duplicated while
/// preserving first-seen order.
///
/// An opening bracket without a closing one is malformed and returns an
/// error; callers degrade such records to an empty tag set rather than
/// failing the whole dataset.
pub fn parse_genre_tags(raw: &str) -> Result<Vec<String>, TagParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let inner = if let Some(rest) = trimmed.strip_prefix('[') {
        match rest.strip_suffix(']') {
            Some(inner) => inner,
            None => return Err(TagParseError::UnterminatedList(trimmed.to_string())),
        }
    } else {
        trimmed
    };

    let mut tags: Vec<String> = Vec::new();
    for part in inner.split(',') {
        let tag = part.trim().trim_matches(|c| c == '\'' || c == '"').trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    Ok(tags)
}
