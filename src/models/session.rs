use serde::{Deserialize, Serialize};

/// Profile record returned by the remote account service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub admin: bool,
    pub created_at: String,
}

/// Local session snapshot. A `logged_in` flag without a profile is the
/// inconsistent shape `db --check` repairs by force-clearing the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

impl Session {
    pub fn is_consistent(&self) -> bool {
        !self.logged_in || self.profile.is_some()
    }
}
