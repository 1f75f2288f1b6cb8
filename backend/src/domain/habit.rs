//! Habit aggregate.
//!
//! A habit is a named, optionally described record with a server-assigned
//! identifier and creation timestamp. Only `name` and `description` change
//! after creation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Validation errors raised while building habit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// The name is empty or whitespace-only.
    EmptyName,
    /// The identifier is not a positive 32-bit integer.
    InvalidId { value: String },
}

impl fmt::Display for HabitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name must not be empty"),
            Self::InvalidId { value } => {
                write!(f, "habit id must be a positive integer, got {value:?}")
            }
        }
    }
}

impl std::error::Error for HabitValidationError {}

/// Server-assigned habit identifier (the `habits.id` serial).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitId(i32);

impl HabitId {
    /// Validate a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use habit_tracker::domain::HabitId;
    ///
    /// assert!(HabitId::new(1).is_ok());
    /// assert!(HabitId::new(0).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, HabitValidationError> {
        if value <= 0 {
            return Err(HabitValidationError::InvalidId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Raw integer value as stored in the database.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl FromStr for HabitId {
    type Err = HabitValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i32>()
            .map_err(|_| HabitValidationError::InvalidId {
                value: s.to_owned(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Habit name; never empty or whitespace-only.
///
/// The value is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitName(String);

impl HabitName {
    /// Validate and wrap a name.
    ///
    /// # Examples
    /// ```
    /// use habit_tracker::domain::HabitName;
    ///
    /// assert_eq!(HabitName::new("Read").expect("valid").as_str(), "Read");
    /// assert!(HabitName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, HabitValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// The name exactly as submitted.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for HabitName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HabitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable part of a habit: what create and update write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    name: HabitName,
    description: String,
}

impl HabitDraft {
    /// Build a draft; a missing description becomes the empty string.
    pub fn new(name: HabitName, description: Option<String>) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
        }
    }

    /// Validated habit name.
    pub fn name(&self) -> &HabitName {
        &self.name
    }

    /// Description, empty when none was given.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// A persisted habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    id: HabitId,
    name: HabitName,
    description: String,
    created_at: DateTime<Utc>,
}

impl Habit {
    /// Assemble a habit from its identity, content and creation time.
    pub fn new(id: HabitId, draft: HabitDraft, created_at: DateTime<Utc>) -> Self {
        let HabitDraft { name, description } = draft;
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    /// Copy of this habit with new content; identity and creation time are kept.
    pub fn revised(&self, draft: HabitDraft) -> Self {
        Self::new(self.id, draft, self.created_at)
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> HabitId {
        self.id
    }

    /// Current name.
    pub fn name(&self) -> &HabitName {
        &self.name
    }

    /// Current description; may be empty.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Insertion time; never changes after creation.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    //! Validation rules for habit values.

    use chrono::Duration;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn blank_names_are_rejected(#[case] raw: &str) {
        assert_eq!(HabitName::new(raw), Err(HabitValidationError::EmptyName));
    }

    #[rstest]
    fn names_keep_surrounding_whitespace() {
        let name = HabitName::new("  Stretch ").expect("valid name");
        assert_eq!(name.as_str(), "  Stretch ");
    }

    #[rstest]
    #[case("1", 1)]
    #[case("2147483647", i32::MAX)]
    fn ids_parse_from_path_segments(#[case] raw: &str, #[case] expected: i32) {
        let id: HabitId = raw.parse().expect("valid id");
        assert_eq!(id.as_i32(), expected);
    }

    #[rstest]
    #[case("notanint")]
    #[case("")]
    #[case("0")]
    #[case("-4")]
    #[case("1.5")]
    #[case("2147483648")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        let err = raw.parse::<HabitId>().expect_err("invalid id");
        assert!(matches!(err, HabitValidationError::InvalidId { .. }));
    }

    #[rstest]
    fn missing_description_defaults_to_empty() {
        let draft = HabitDraft::new(HabitName::new("Read").expect("valid"), None);
        assert_eq!(draft.description(), "");
    }

    #[rstest]
    fn revised_keeps_identity_and_creation_time() {
        let created_at = Utc::now() - Duration::days(3);
        let id = HabitId::new(9).expect("valid id");
        let original = Habit::new(
            id,
            HabitDraft::new(
                HabitName::new("Walk").expect("valid"),
                Some("10k steps".to_owned()),
            ),
            created_at,
        );

        let updated = original.revised(HabitDraft::new(
            HabitName::new("Run").expect("valid"),
            None,
        ));

        assert_eq!(updated.id(), id);
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(updated.name().as_str(), "Run");
        assert_eq!(updated.description(), "");
    }
}
