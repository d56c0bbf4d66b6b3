use serde::Serialize;

use crate::Result;

#[derive(Serialize)]
pub struct LiveStatus {
    pub status: String,
}

pub async fn check_liveness() -> Result<LiveStatus> {
    // Nothing much to check, if it hits this function, it's alive
    Ok(LiveStatus {
        status: "UP".to_string(),
    })
}
