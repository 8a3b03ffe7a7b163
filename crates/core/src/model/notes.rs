use serde::{Deserialize, Serialize};

/// Static descriptive notes about the language, shown alongside the lesson list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageNotes {
    pub summary: String,
    pub deeper_study: String,
    #[serde(rename = "conceptOfI")]
    pub concept_of_i: ConceptOfI,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptOfI {
    pub introduction: String,
    pub terms: Vec<ConceptTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptTerm {
    pub term: String,
    pub definition: String,
}
