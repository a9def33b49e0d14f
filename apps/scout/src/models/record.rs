use serde::{Deserialize, Serialize};

/// One summary row per résumé. The serde renames are the exact CSV column
/// headers, so the writer derives its header row from this struct.
///
/// Every field defaults to empty and fields are extracted independently, so
/// a record may be partially filled. The `Company & Position` column holds
/// the role title only; the company itself is the configured employer and
/// identical across the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LinkedIn URL")]
    pub linkedin_url: String,
    #[serde(rename = "Company & Position")]
    pub position: String,
    #[serde(rename = "Work Length")]
    pub work_length: String,
    #[serde(rename = "Last Education")]
    pub education: String,
    #[serde(rename = "Degree")]
    pub degree: String,
    #[serde(rename = "Graduation Year")]
    pub graduation_year: String,
}
