use serde::{Deserialize, Serialize};
use streetcode_core::types::DbId;
use streetcode_db::models::toponym::Toponym;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToponymDto {
    pub id: DbId,
    pub oblast: String,
    pub adminregion_old: Option<String>,
    pub adminregion_new: Option<String>,
    pub gromada: Option<String>,
    pub community: Option<String>,
    pub street_name: String,
    pub street_type: Option<String>,
}

impl From<Toponym> for ToponymDto {
    fn from(row: Toponym) -> Self {
        Self {
            id: row.id,
            oblast: row.oblast,
            adminregion_old: row.adminregion_old,
            adminregion_new: row.adminregion_new,
            gromada: row.gromada,
            community: row.community,
            street_name: row.street_name,
            street_type: row.street_type,
        }
    }
}

/// One page of toponyms and the total page count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToponymPageDto {
    pub pages: usize,
    pub toponyms: Vec<ToponymDto>,
}
