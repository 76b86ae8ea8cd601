use serde::Serialize;

/// A single hit of the club search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClubCandidate {
    pub name: String,
    pub link: String,
    pub location_text: String,
    pub external_club_id: Option<String>,
}

/// Club profile facts. Unknown facts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClubProfile {
    pub name: String,
    pub founding_year: String,
    pub colors_text: String,
    pub address_text: String,
    pub contact_person_text: String,
    pub website_url: String,
    pub external_club_id: String,
    pub source_url: String,
}
