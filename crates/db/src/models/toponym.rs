use sqlx::FromRow;
use streetcode_core::types::DbId;

/// A row from the `toponyms` table.
#[derive(Debug, Clone, FromRow)]
pub struct Toponym {
    pub id: DbId,
    pub oblast: String,
    pub adminregion_old: Option<String>,
    pub adminregion_new: Option<String>,
    pub gromada: Option<String>,
    pub community: Option<String>,
    pub street_name: String,
    pub street_type: Option<String>,
}
