use crate::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// Backend configuration as exposed by `GET /api/config` and accepted by
/// `POST /api/config`.
///
/// The backend owns and persists it; the console only keeps a transient copy
/// bound to the configuration form.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ConfigModel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliate: AffiliateSettings,
}

/// Credentials for the affiliate commission API.
///
/// Missing fields decode to an empty string or `false`, matching what the
/// form shows for an unconfigured backend.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct AffiliateSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub app_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secret: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
}
