use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationItem {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub item_count: i64,

    pub created_at: String,
    pub updated_at: String,
}

pub type LocationsResponse = Vec<LocationItem>;
