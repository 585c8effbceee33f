use serde::{Deserialize, Serialize};

/// Professions offered by the first-run prompt.
///
/// Anything else the user types is kept as a custom profession string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Student,
    Finance,
    Fashion,
    Business,
    Consultant,
    Tech,
    Government,
    Policy,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Profession::Student,
        Profession::Finance,
        Profession::Fashion,
        Profession::Business,
        Profession::Consultant,
        Profession::Tech,
        Profession::Government,
        Profession::Policy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Profession::Student => "student",
            Profession::Finance => "finance",
            Profession::Fashion => "fashion",
            Profession::Business => "business",
            Profession::Consultant => "consultant",
            Profession::Tech => "tech",
            Profession::Government => "government",
            Profession::Policy => "policy",
        }
    }

    /// Human-readable label shown by the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Profession::Student => "Student",
            Profession::Finance => "Finance Professional",
            Profession::Fashion => "Fashion Industry",
            Profession::Business => "Business Owner",
            Profession::Consultant => "Consultant",
            Profession::Tech => "Tech Developer",
            Profession::Government => "Government Employee",
            Profession::Policy => "Policy Maker",
        }
    }

    /// Looks up a known profession by id; custom strings yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}
