//! Project form input validation.
//!
//! Rules are checked in field order (title, description, people) and the
//! first violation is returned. Lengths count UTF-16 code units of the raw
//! value, so a character outside the BMP counts as 2; the required check
//! trims whitespace first.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length in UTF-16 code units.
pub const TITLE_MAX_CHARS: usize = 20;
/// Minimum description length in UTF-16 code units.
pub const DESCRIPTION_MIN_CHARS: usize = 5;
/// Smallest accepted people count.
pub const PEOPLE_MIN: u32 = 1;
/// Largest accepted people count.
pub const PEOPLE_MAX: u32 = 10;

/// Raw values as entered in the project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Validated project fields, ready for `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// First rule violated by a `ProjectInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TitleEmpty,
    TitleTooLong { len: usize, max: usize },
    DescriptionEmpty,
    DescriptionTooShort { len: usize, min: usize },
    PeopleEmpty,
    PeopleNotANumber(String),
    PeopleOutOfRange { value: i64, min: u32, max: u32 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleEmpty => write!(f, "title is required"),
            Self::TitleTooLong { len, max } => {
                write!(f, "title is {len} UTF-16 units long; at most {max} allowed")
            }
            Self::DescriptionEmpty => write!(f, "description is required"),
            Self::DescriptionTooShort { len, min } => {
                write!(f, "description is {len} UTF-16 units long; at least {min} required")
            }
            Self::PeopleEmpty => write!(f, "people count is required"),
            Self::PeopleNotANumber(value) => {
                write!(f, "people count must be a whole number, got `{value}`")
            }
            Self::PeopleOutOfRange { value, min, max } => {
                write!(f, "people count {value} is outside {min}..={max}")
            }
        }
    }
}

impl Error for ValidationError {}

impl ProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates all fields and returns typed values.
    ///
    /// Title and description are passed through unmodified.
    pub fn validate(&self) -> Result<ValidProjectInput, ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        let people = parse_people(&self.people)?;

        Ok(ValidProjectInput {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    let len = utf16_len(title);
    if len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong {
            len,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionEmpty);
    }
    let len = utf16_len(description);
    if len < DESCRIPTION_MIN_CHARS {
        return Err(ValidationError::DescriptionTooShort {
            len,
            min: DESCRIPTION_MIN_CHARS,
        });
    }
    Ok(())
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn parse_people(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::PeopleEmpty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::PeopleNotANumber(trimmed.to_string()))?;

    if value < i64::from(PEOPLE_MIN) || value > i64::from(PEOPLE_MAX) {
        return Err(ValidationError::PeopleOutOfRange {
            value,
            min: PEOPLE_MIN,
            max: PEOPLE_MAX,
        });
    }
    // Range check above guarantees the value fits.
    Ok(value as u32)
}
