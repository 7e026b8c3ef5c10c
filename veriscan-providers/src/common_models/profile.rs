use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::common_models::macros::{impl_display, impl_from, impl_into};

time::serde::format_description!(plain_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ProfileId(Uuid);
impl_display!(ProfileId);
impl_from!(ProfileId; Uuid);
impl_into!(ProfileId; Uuid);

/// Summary of the student a document was issued to, as embedded in
/// decode responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: ProfileId,
    pub name: String,
    /// The registrar-assigned student number, distinct from the record id.
    pub id_number: String,
    pub course: String,
    #[serde(default, with = "plain_date::option")]
    pub birthdate: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
