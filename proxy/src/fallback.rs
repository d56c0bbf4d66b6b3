use std::collections::HashMap;
use std::sync::Arc;

use dto::inventory::{Attachment, Item, ItemDetail, Label, Location};

/// Degraded-mode source of item details.
///
/// Consulted only by the item detail route, and only after the upstream
/// answered with a non-2xx status.
pub trait FallbackProvider: Send + Sync {
    fn item_detail(&self, id: &str) -> Option<ItemDetail>;
}

/// Fixed table of hand-authored records, keyed by item id
pub struct StaticFallback {
    records: HashMap<String, ItemDetail>,
}

impl StaticFallback {
    pub fn new() -> Self {
        Self::with_records(placeholder_records())
    }

    pub fn with_records(records: Vec<ItemDetail>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.item.id.clone(), r))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl FallbackProvider for StaticFallback {
    fn item_detail(&self, id: &str) -> Option<ItemDetail> {
        self.records.get(id).cloned()
    }
}

pub struct NoFallback;

impl FallbackProvider for NoFallback {
    fn item_detail(&self, _id: &str) -> Option<ItemDetail> {
        None
    }
}

pub fn create_fallback(enabled: bool) -> Arc<dyn FallbackProvider> {
    match enabled {
        true => Arc::new(StaticFallback::new()),
        false => Arc::new(NoFallback),
    }
}

const CREATED_AT: &str = "2024-03-01T09:00:00Z";
const UPDATED_AT: &str = "2024-06-15T17:30:00Z";

fn label(id: &str, name: &str, color: &str) -> Label {
    Label {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        description: String::new(),
        created_at: CREATED_AT.to_string(),
        updated_at: UPDATED_AT.to_string(),
    }
}

fn location(id: &str, name: &str, description: &str) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: CREATED_AT.to_string(),
        updated_at: UPDATED_AT.to_string(),
    }
}

fn item(id: &str, name: &str, description: &str, price: f64, asset_id: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quantity: 1,
        purchase_price: price,
        labels: Vec::new(),
        location: None,
        asset_id: asset_id.to_string(),
        image_id: String::new(),
        thumbnail_id: String::new(),
        insured: false,
        archived: false,
        sold_time: String::new(),
        created_at: CREATED_AT.to_string(),
        updated_at: UPDATED_AT.to_string(),
    }
}

fn placeholder_records() -> Vec<ItemDetail> {
    let mut drill = item("1", "Cordless Drill", "18V brushless drill with two batteries", 149.99, "000-001");
    drill.labels = vec![label("label-tools", "Tools", "#F59E0B")];
    drill.location = Some(location("loc-garage", "Garage", "Wall shelves and workbench"));

    let mut espresso = item("2", "Espresso Machine", "Dual boiler espresso machine", 899.0, "000-002");
    espresso.labels = vec![
        label("label-kitchen", "Kitchen", "#10B981"),
        label("label-appliances", "Appliances", "#3B82F6"),
    ];
    espresso.location = Some(location("loc-kitchen", "Kitchen", "Counter and pantry"));
    espresso.insured = true;

    let mut bike = item("3", "Road Bike", "Carbon frame, 56cm", 2100.0, "000-003");
    bike.labels = vec![label("label-sports", "Sports", "#EF4444")];
    bike.location = Some(location("loc-garage", "Garage", "Wall shelves and workbench"));
    bike.insured = true;

    vec![
        ItemDetail {
            item: drill,
            serial_number: Some("DRL-2024-88731".to_string()),
            model_number: Some("XFD131".to_string()),
            manufacturer: Some("Makita".to_string()),
            lifetime_warranty: false,
            warranty_expires: Some("2027-03-01T00:00:00Z".to_string()),
            warranty_details: Some("3 year limited warranty on tool and batteries".to_string()),
            purchase_time: Some("2024-03-01T00:00:00Z".to_string()),
            purchase_from: Some("Home Depot".to_string()),
            notes: Some("Batteries stored in the charger drawer".to_string()),
            attachments: vec![Attachment {
                id: "att-drill-receipt".to_string(),
                name: "receipt.pdf".to_string(),
                kind: Some("receipt".to_string()),
            }],
        },
        ItemDetail {
            item: espresso,
            serial_number: Some("ESP-55-10293".to_string()),
            model_number: Some("DB-2".to_string()),
            manufacturer: Some("La Spaziale".to_string()),
            lifetime_warranty: false,
            warranty_expires: Some("2026-05-20T00:00:00Z".to_string()),
            warranty_details: None,
            purchase_time: Some("2024-05-20T00:00:00Z".to_string()),
            purchase_from: Some("Seattle Coffee Gear".to_string()),
            notes: Some("Descale every three months".to_string()),
            attachments: vec![
                Attachment {
                    id: "att-espresso-manual".to_string(),
                    name: "manual.pdf".to_string(),
                    kind: Some("manual".to_string()),
                },
                Attachment {
                    id: "att-espresso-receipt".to_string(),
                    name: "receipt.pdf".to_string(),
                    kind: Some("receipt".to_string()),
                },
            ],
        },
        ItemDetail {
            item: bike,
            serial_number: Some("WTU123C4567".to_string()),
            model_number: None,
            manufacturer: Some("Canyon".to_string()),
            lifetime_warranty: true,
            warranty_expires: None,
            warranty_details: Some("Lifetime frame warranty for the original owner".to_string()),
            purchase_time: Some("2023-08-12T00:00:00Z".to_string()),
            purchase_from: Some("Canyon".to_string()),
            notes: None,
            attachments: Vec::new(),
        },
    ]
}
