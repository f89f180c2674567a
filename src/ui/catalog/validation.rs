//! Local checks run on a search query before anything is sent.

use thiserror::Error;

use crate::api::FilmSearchType;

pub const FILM_QUERY_MAX_CHARS: usize = 100;
pub const CUSTOMER_QUERY_MAX_CHARS: usize = 50;
pub const FILM_TITLE_MIN_CHARS: usize = 2;
pub const ACTOR_NAME_MIN_CHARS: usize = 3;

/// Why a query was rejected. The `Display` text is shown verbatim under the
/// search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("search cannot be empty")]
    Empty,
    #[error("film name too short")]
    FilmNameTooShort,
    #[error("actor name too short")]
    ActorNameTooShort,
    #[error("search too long")]
    TooLong,
    /// Customer search reports every failure the same way.
    #[error("invalid search query")]
    InvalidCustomerQuery,
}

/// Validates a film query and returns the trimmed text to submit.
///
/// Lengths are counted in characters after trimming. Category search has no
/// minimum length.
pub fn validate_film_query(
    query: &str,
    search_type: FilmSearchType,
) -> Result<String, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    match search_type {
        FilmSearchType::Title if len < FILM_TITLE_MIN_CHARS => {
            return Err(ValidationError::FilmNameTooShort)
        }
        FilmSearchType::Actor if len < ACTOR_NAME_MIN_CHARS => {
            return Err(ValidationError::ActorNameTooShort)
        }
        _ => {}
    }

    if len > FILM_QUERY_MAX_CHARS {
        return Err(ValidationError::TooLong);
    }

    Ok(trimmed.to_string())
}

/// Validates a customer query and returns the trimmed text to submit.
pub fn validate_customer_query(query: &str) -> Result<String, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() || trimmed.chars().count() > CUSTOMER_QUERY_MAX_CHARS {
        return Err(ValidationError::InvalidCustomerQuery);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_title_is_rejected() {
        assert_eq!(
            validate_film_query("ac", FilmSearchType::Title),
            Err(ValidationError::FilmNameTooShort)
        );
        assert_eq!(
            validate_film_query("a", FilmSearchType::Title),
            Err(ValidationError::FilmNameTooShort)
        );
    }

    #[test]
    fn two_char_title_is_accepted() {
        assert_eq!(
            validate_film_query("al", FilmSearchType::Title),
            Ok("al".to_string())
        );
    }

    #[test]
    fn actor_needs_three_chars() {
        assert_eq!(
            validate_film_query("ac", FilmSearchType::Actor),
            Err(ValidationError::ActorNameTooShort)
        );
        assert_eq!(
            validate_film_query("act", FilmSearchType::Actor),
            Ok("act".to_string())
        );
    }

    #[test]
    fn category_has_no_minimum() {
        assert_eq!(
            validate_film_query("a", FilmSearchType::Category),
            Ok("a".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_empty() {
        for search_type in FilmSearchType::ALL {
            assert_eq!(
                validate_film_query("   \t", search_type),
                Err(ValidationError::Empty)
            );
        }
        assert_eq!(validate_film_query("", FilmSearchType::Title), Err(ValidationError::Empty));
    }

    #[test]
    fn padding_does_not_count_toward_length() {
        assert_eq!(
            validate_film_query(" a ", FilmSearchType::Title),
            Err(ValidationError::FilmNameTooShort)
        );
        assert_eq!(
            validate_film_query("  alien  ", FilmSearchType::Title),
            Ok("alien".to_string())
        );
    }

    #[test]
    fn film_query_length_limit() {
        let at_limit = "x".repeat(FILM_QUERY_MAX_CHARS);
        let over = "x".repeat(FILM_QUERY_MAX_CHARS + 1);
        assert!(validate_film_query(&at_limit, FilmSearchType::Category).is_ok());
        assert_eq!(
            validate_film_query(&over, FilmSearchType::Category),
            Err(ValidationError::TooLong)
        );
    }

    #[test]
    fn length_is_counted_in_chars() {
        let accented = "é".repeat(FILM_QUERY_MAX_CHARS);
        assert!(validate_film_query(&accented, FilmSearchType::Title).is_ok());
    }

    #[test]
    fn customer_rules() {
        assert_eq!(
            validate_customer_query(""),
            Err(ValidationError::InvalidCustomerQuery)
        );
        assert_eq!(
            validate_customer_query(&"m".repeat(CUSTOMER_QUERY_MAX_CHARS + 1)),
            Err(ValidationError::InvalidCustomerQuery)
        );
        assert_eq!(validate_customer_query(" m "), Ok("m".to_string()));
    }

    #[test]
    fn messages_match_ui_text() {
        assert_eq!(ValidationError::Empty.to_string(), "search cannot be empty");
        assert_eq!(ValidationError::TooLong.to_string(), "search too long");
        assert_eq!(
            ValidationError::InvalidCustomerQuery.to_string(),
            "invalid search query"
        );
    }
}
