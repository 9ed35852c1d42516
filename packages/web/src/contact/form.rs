//! Form record held by the contact section

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three fields a visitor fills in.
///
/// Serializes to exactly `{"name", "email", "message"}`, which is the body
/// posted to the form backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field of [`ContactForm`], keyed by its HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Message]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl ContactForm {
    /// Reducer: returns the record with exactly `field` replaced.
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let form = ContactForm::default();
        assert!(form.is_empty());
        assert_eq!(form.get(Field::Message), "");
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let form = ContactForm::default()
            .with_field(Field::Name, "Ann")
            .with_field(Field::Email, "a@b.com");

        let updated = form.clone().with_field(Field::Message, "Hi");

        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.message, "Hi");
        assert_eq!(form.message, "");
    }

    #[test]
    fn last_write_per_field_wins_regardless_of_interleaving() {
        let edits_a = [
            (Field::Name, "A"),
            (Field::Email, "x@y.z"),
            (Field::Name, "Ann"),
            (Field::Message, "Hello"),
            (Field::Message, "Hi"),
        ];
        // Same per-field order, different interleaving across fields
        let edits_b = [
            (Field::Message, "Hello"),
            (Field::Name, "A"),
            (Field::Message, "Hi"),
            (Field::Name, "Ann"),
            (Field::Email, "x@y.z"),
        ];

        let apply = |edits: &[(Field, &str)]| {
            edits
                .iter()
                .fold(ContactForm::default(), |form, (field, value)| {
                    form.with_field(*field, *value)
                })
        };

        let expected = ContactForm {
            name: "Ann".into(),
            email: "x@y.z".into(),
            message: "Hi".into(),
        };
        assert_eq!(apply(&edits_a), expected);
        assert_eq!(apply(&edits_b), expected);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = ContactForm::default()
            .with_field(Field::Name, "Ann")
            .with_field(Field::Message, "Hi");

        form.reset();

        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in Field::all() {
            assert_eq!(field.name().parse::<Field>().unwrap(), *field);
        }
        assert_eq!(
            "subject".parse::<Field>(),
            Err(UnknownField("subject".into()))
        );
    }

    #[test]
    fn serializes_to_exactly_three_keys() {
        let form = ContactForm {
            name: "Ann".into(),
            email: "a@b.com".into(),
            message: "Hi".into(),
        };

        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(
            value,
            json!({"name": "Ann", "email": "a@b.com", "message": "Hi"})
        );
    }
}
