use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub description: String,

    pub created_at: String,
    pub updated_at: String,
}

/// Location as embedded in an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub quantity: i64,
    pub purchase_price: f64,

    #[serde(default)]
    pub labels: Vec<Label>,

    pub location: Option<Location>,

    #[serde(default)]
    pub asset_id: String,

    #[serde(default)]
    pub image_id: String,

    #[serde(default)]
    pub thumbnail_id: String,

    #[serde(default)]
    pub insured: bool,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub sold_time: String,

    pub created_at: String,
    pub updated_at: String,
}

/// One page of the items collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub items: Vec<Item>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Full item record returned by the item detail endpoint.
///
/// Warranty, purchase and attachment fields are optional because the
/// upstream omits them for items that never had them filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: Item,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default)]
    pub lifetime_warranty: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expires: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
