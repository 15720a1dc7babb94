// src/domain/agent.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub bio: String,
    /// Ordered; the first specialty is shown as the agent's headline tag.
    pub specialties: Vec<String>,
    pub years_experience: u32,
    /// 0.0 – 5.0
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    pub active_listings: u32,
    pub properties_sold: u32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl AgentRecord {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}
