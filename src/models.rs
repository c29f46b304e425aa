use serde::{Deserialize, Serialize};

/// A recurring class offering. `id` is assigned by whichever store holds the
/// record: the local SQLite rowid, or the remote catalog's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YogaClass {
    pub id: i64,
    pub day: String,
    pub time: String,
    pub capacity: i64,
    pub duration: i64,
    pub price: f64,
    #[serde(rename = "type")]
    pub class_type: String,
    pub description: Option<String>,
    pub teacher: Option<String>,
}

impl YogaClass {
    /// One-line list row: "Monday - 6pm - Hatha".
    pub fn summary(&self) -> String {
        format!("{} - {} - {}", self.day, self.time, self.class_type)
    }

    /// Multi-line detail block as shown in the class details view.
    pub fn details(&self) -> String {
        let description = match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "None",
        };
        format!(
            "Day: {}\nTime: {}\nCapacity: {}\nDuration: {} minutes\nPrice: £{}\nType: {}\nDescription: {}",
            self.day, self.time, self.capacity, self.duration, self.price, self.class_type, description
        )
    }
}

/// Field set for a class that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq)]
pub struct NewYogaClass {
    pub day: String,
    pub time: String,
    pub capacity: i64,
    pub duration: i64,
    pub price: f64,
    pub class_type: String,
    pub description: Option<String>,
    pub teacher: Option<String>,
}

/// One scheduled occurrence of a class. `class_id` is nullable at the storage
/// level; callers always set it, but nothing re-checks it after the referenced
/// class is deleted, so orphaned instances are representable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassInstance {
    pub id: i64,
    pub date: String,
    pub teacher: String,
    pub comments: Option<String>,
    pub class_id: Option<i64>,
}

impl ClassInstance {
    /// One-line list row: "2026-01-05 - Ana".
    pub fn summary(&self) -> String {
        format!("{} - {}", self.date, self.teacher)
    }
}

/// Field set for an instance that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClassInstance {
    pub date: String,
    pub teacher: String,
    pub comments: Option<String>,
    pub class_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hatha() -> YogaClass {
        YogaClass {
            id: 1,
            day: "Monday".to_string(),
            time: "6pm".to_string(),
            capacity: 20,
            duration: 60,
            price: 10.0,
            class_type: "Hatha".to_string(),
            description: Some("relaxing".to_string()),
            teacher: Some("Ana".to_string()),
        }
    }

    #[test]
    fn test_class_summary() {
        assert_eq!(hatha().summary(), "Monday - 6pm - Hatha");
    }

    #[test]
    fn test_class_details() {
        let details = hatha().details();
        assert!(details.contains("Day: Monday"));
        assert!(details.contains("Duration: 60 minutes"));
        assert!(details.contains("Price: £10"));
        assert!(details.contains("Description: relaxing"));
    }

    #[test]
    fn test_class_details_blank_description() {
        let mut class = hatha();
        class.description = None;
        assert!(class.details().contains("Description: None"));

        class.description = Some("   ".to_string());
        assert!(class.details().contains("Description: None"));
    }

    #[test]
    fn test_instance_summary() {
        let instance = ClassInstance {
            id: 3,
            date: "2026-01-05".to_string(),
            teacher: "Ana".to_string(),
            comments: None,
            class_id: Some(1),
        };
        assert_eq!(instance.summary(), "2026-01-05 - Ana");
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let json = serde_json::to_value(hatha()).unwrap();
        assert_eq!(json["type"], "Hatha");
        assert!(json.get("class_type").is_none());
    }
}
