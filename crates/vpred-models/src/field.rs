//! Form field catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Coerced to a number before sending
    Number,
    /// Sent verbatim
    Text,
}

/// Presentation metadata for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Marked as a key input (⭐) in the form
    pub key: bool,
    /// Lives in the collapsible "advanced" section
    pub advanced: bool,
}

/// One of the eight prediction form fields.
///
/// Serialized names match the prediction endpoint's JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Likes,
    Dislikes,
    CommentCount,
    Title,
    Description,
    Tags,
    PublishHour,
    PublishDay,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 8] = [
        FormField::Likes,
        FormField::Dislikes,
        FormField::CommentCount,
        FormField::Title,
        FormField::Description,
        FormField::Tags,
        FormField::PublishHour,
        FormField::PublishDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Likes => "likes",
            FormField::Dislikes => "dislikes",
            FormField::CommentCount => "comment_count",
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Tags => "tags",
            FormField::PublishHour => "publish_hour",
            FormField::PublishDay => "publish_day",
        }
    }

    pub fn spec(&self) -> FieldSpec {
        use FieldKind::{Number, Text};

        let (label, placeholder, kind, key, advanced) = match self {
            FormField::Likes => ("Likes", "e.g., 5000", Number, true, false),
            FormField::Dislikes => ("Dislikes", "e.g., 120", Number, false, false),
            FormField::CommentCount => ("Comment Count", "e.g., 800", Number, false, false),
            FormField::Title => ("Video Title", "Catchy video title", Text, true, false),
            FormField::Description => ("Description", "Short description", Text, false, true),
            FormField::Tags => ("Tags (pipe-separated)", "tech|review", Text, false, true),
            FormField::PublishHour => ("Publish Hour (0-23)", "18", Number, true, false),
            FormField::PublishDay => ("Publish Day (0=Mon)", "4", Number, true, false),
        };

        FieldSpec {
            label,
            placeholder,
            kind,
            key,
            advanced,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.spec().kind
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == FieldKind::Number
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ModelError;

    /// Parse a wire name. Hyphens and case are tolerated (`comment-count`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::unknown_field(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_tolerates_hyphens_and_case() {
        assert_eq!(
            "Comment-Count".parse::<FormField>().unwrap(),
            FormField::CommentCount
        );
        assert_eq!(" publish_day ".parse::<FormField>().unwrap(), FormField::PublishDay);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "views".parse::<FormField>().unwrap_err();
        assert_eq!(err, ModelError::UnknownField("views".to_string()));
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<_> = FormField::ALL
            .into_iter()
            .filter(FormField::is_numeric)
            .collect();
        assert_eq!(
            numeric,
            vec![
                FormField::Likes,
                FormField::Dislikes,
                FormField::CommentCount,
                FormField::PublishHour,
                FormField::PublishDay,
            ]
        );
    }

    #[test]
    fn test_advanced_section_holds_description_and_tags() {
        let advanced: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.spec().advanced)
            .collect();
        assert_eq!(advanced, vec![FormField::Description, FormField::Tags]);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FormField::CommentCount).unwrap();
        assert_eq!(json, "\"comment_count\"");
    }
}
