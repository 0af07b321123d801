use crate::account::domain::profile::Profile;
use serde::{Deserialize, Serialize};

/// Wire shape of one profile document in the remote collection.
///
/// Documents are stored with camelCase field names, so records written by
/// other clients of the same collection read back verbatim.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub height: String,
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            age: profile.age,
            height: profile.height,
        }
    }
}

impl From<ProfileDocument> for Profile {
    fn from(document: ProfileDocument) -> Self {
        Self {
            first_name: document.first_name,
            last_name: document.last_name,
            email: document.email,
            phone: document.phone,
            age: document.age,
            height: document.height,
        }
    }
}
