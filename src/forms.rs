//! Coercion of the raw string fields supplied by the presentation layer.
//! Required fields are checked for blankness before saving; numeric fields
//! that fail to parse fall back to zero rather than erroring.

use thiserror::Error;

use crate::models::{NewClassInstance, NewYogaClass};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Raw class input exactly as typed into the form.
#[derive(Debug, Clone, Default)]
pub struct ClassForm {
    pub day: String,
    pub time: String,
    pub capacity: String,
    pub duration: String,
    pub price: String,
    pub class_type: String,
    pub description: String,
    pub teacher: String,
}

impl ClassForm {
    /// Rejects blank required fields. Description and teacher are optional.
    pub fn validate(&self) -> Result<(), FormError> {
        for (value, name) in [
            (&self.day, "day"),
            (&self.time, "time"),
            (&self.capacity, "capacity"),
            (&self.duration, "duration"),
            (&self.price, "price"),
            (&self.class_type, "type"),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Coerces to typed fields. Unparsable numerics default to zero; blank
    /// optional fields become None.
    pub fn into_new_class(self) -> NewYogaClass {
        NewYogaClass {
            capacity: self.capacity.trim().parse().unwrap_or(0),
            duration: self.duration.trim().parse().unwrap_or(0),
            price: self.price.trim().parse().unwrap_or(0.0),
            day: self.day,
            time: self.time,
            class_type: self.class_type,
            description: non_blank(self.description),
            teacher: non_blank(self.teacher),
        }
    }
}

/// Raw instance input; the class id comes from the selected list entry, not
/// from a text field.
#[derive(Debug, Clone, Default)]
pub struct InstanceForm {
    pub date: String,
    pub teacher: String,
    pub comments: String,
}

impl InstanceForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.date.trim().is_empty() {
            return Err(FormError::MissingField("date"));
        }
        if self.teacher.trim().is_empty() {
            return Err(FormError::MissingField("teacher"));
        }
        Ok(())
    }

    pub fn into_new_instance(self, class_id: i64) -> NewClassInstance {
        NewClassInstance {
            date: self.date,
            teacher: self.teacher,
            comments: non_blank(self.comments),
            class_id,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
