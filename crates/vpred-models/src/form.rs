//! Prediction form state.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::field::FormField;
use crate::number::{NumericPolicy, WireNumber};
use crate::request::PredictionRequest;

/// Raw values of the eight form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoForm {
    pub likes: String,
    pub dislikes: String,
    pub comment_count: String,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub publish_hour: String,
    pub publish_day: String,
}

impl VideoForm {
    /// The fixed example used by "Prefill Example".
    pub fn example() -> Self {
        Self {
            likes: "5000".to_string(),
            dislikes: "120".to_string(),
            comment_count: "800".to_string(),
            title: "Latest iPhone 15 Review – Hands‑On!".to_string(),
            description: "We tested Apple’s new iPhone 15 for a full week…".to_string(),
            tags: "iphone|review|tech".to_string(),
            publish_hour: "18".to_string(),
            // Friday
            publish_day: "4".to_string(),
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Likes => &mut self.likes,
            FormField::Dislikes => &mut self.dislikes,
            FormField::CommentCount => &mut self.comment_count,
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Tags => &mut self.tags,
            FormField::PublishHour => &mut self.publish_hour,
            FormField::PublishDay => &mut self.publish_day,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Likes => &self.likes,
            FormField::Dislikes => &self.dislikes,
            FormField::CommentCount => &self.comment_count,
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Tags => &self.tags,
            FormField::PublishHour => &self.publish_hour,
            FormField::PublishDay => &self.publish_day,
        }
    }

    /// Replace one field's raw value. No cross-field validation.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Overwrite every field with the fixed example.
    pub fn prefill(&mut self) {
        *self = Self::example();
    }

    /// Fields paired with their raw values, in form order.
    pub fn entries(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Tags split on `|` for display. Empty segments are dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn number(&self, field: FormField, policy: NumericPolicy) -> ModelResult<WireNumber> {
        let raw = self.get(field);
        let number = WireNumber::parse(raw);
        if policy == NumericPolicy::Strict && !number.is_valid() {
            return Err(ModelError::invalid_number(field, raw));
        }
        Ok(number)
    }

    /// Build the request body, coercing the numeric fields.
    ///
    /// Under [`NumericPolicy::Strict`] the first invalid numeric field, in
    /// form order, is reported.
    pub fn to_request(&self, policy: NumericPolicy) -> ModelResult<PredictionRequest> {
        Ok(PredictionRequest {
            likes: self.number(FormField::Likes, policy)?,
            dislikes: self.number(FormField::Dislikes, policy)?,
            comment_count: self.number(FormField::CommentCount, policy)?,
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            publish_hour: self.number(FormField::PublishHour, policy)?,
            publish_day: self.number(FormField::PublishDay, policy)?,
        })
    }
}
