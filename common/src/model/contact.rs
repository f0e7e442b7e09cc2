use serde::{Deserialize, Serialize};

/// The fixed set of qualifications offered by the public contact form.
///
/// The wire format and the dashboard both use the display label, so the
/// serde names match `label()` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "Ph.D.")]
    PhD,
}

impl Qualification {
    pub const ALL: [Qualification; 4] = [
        Qualification::HighSchool,
        Qualification::Bachelors,
        Qualification::Masters,
        Qualification::PhD,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Qualification::HighSchool => "High School",
            Qualification::Bachelors => "Bachelor's",
            Qualification::Masters => "Master's",
            Qualification::PhD => "Ph.D.",
        }
    }

    /// Maps a `<select>` value back to the enum. `None` for the empty
    /// placeholder option or anything outside the fixed set.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.label() == label)
    }
}

/// A single lead submitted through the public form, as returned by the
/// listing endpoint.
///
/// `id` is assigned by the storage backend (`_id` on the wire) and is never
/// produced by the client. `qualification` is kept as the raw string so a
/// row renders whatever the backend stored, even if the fixed set changes
/// server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualification_labels_are_the_fixed_set() {
        let labels: Vec<&str> = Qualification::ALL.iter().map(|q| q.label()).collect();
        assert_eq!(labels, ["High School", "Bachelor's", "Master's", "Ph.D."]);
    }

    #[test]
    fn qualification_from_label() {
        assert_eq!(Qualification::from_label("Master's"), Some(Qualification::Masters));
        assert_eq!(Qualification::from_label(""), None);
        assert_eq!(Qualification::from_label("Bootcamp"), None);
    }

    #[test]
    fn contact_deserializes_wire_names() {
        let contact: Contact = serde_json::from_str(
            r#"{"_id":"65af","fullName":"A","email":"a@x.com","phone":"1111111111","qualification":"Bachelor's","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(contact.id.as_deref(), Some("65af"));
        assert_eq!(contact.full_name, "A");
        assert_eq!(contact.message.as_deref(), Some("hi"));
    }

    #[test]
    fn contact_tolerates_missing_id_and_message() {
        let contact: Contact = serde_json::from_str(
            r#"{"fullName":"B","email":"b@x.com","phone":"2222222222","qualification":"Ph.D."}"#,
        )
        .unwrap();
        assert_eq!(contact.id, None);
        assert_eq!(contact.message, None);
    }
}
