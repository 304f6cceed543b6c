use serde::{Deserialize, Serialize};

/// A member of the travel group.
///
/// `ticket_image` and `ticket_type` only ever live on this device: they are
/// stripped before anything is written to the shared room document and never
/// take part in change detection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub name: String,
    pub emoji: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
}

impl Person {
    /// Identity used to match the same person across devices. Empty when the
    /// name is blank, in which case callers fall back to list position.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Copy of this person without the device-local ticket fields.
    pub fn stripped(&self) -> Person {
        Person {
            ticket_image: None,
            ticket_type: None,
            ..self.clone()
        }
    }

    pub fn has_ticket(&self) -> bool {
        self.ticket_image.is_some()
    }
}

/// Projection of a roster with every device-local ticket field removed.
pub fn strip_tickets(group: &[Person]) -> Vec<Person> {
    group.iter().map(Person::stripped).collect()
}
