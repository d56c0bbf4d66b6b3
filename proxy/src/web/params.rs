use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ItemParams {
    pub item_id: String,
}
