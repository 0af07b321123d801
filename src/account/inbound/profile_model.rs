use crate::account::domain::identity::Identity;
use crate::account::domain::profile::{Profile, ProfileField};
use crate::account::domain::session::SessionSnapshot;
use serde::{Deserialize, Serialize};

// --- Session snapshot ---

#[derive(Serialize)]
pub struct IdentityResponse {
    pub uid: String,
    pub email: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            uid: identity.uid,
            email: identity.email,
        }
    }
}

/// Profile payload with the same field names the form binds to.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub height: String,
}

impl From<Profile> for ProfileResponse {
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

#[derive(Serialize)]
pub struct SessionResponse {
    pub identity: Option<IdentityResponse>,
    pub profile: Option<ProfileResponse>,
    pub loading: bool,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            identity: snapshot.identity.map(IdentityResponse::from),
            profile: snapshot.profile.map(ProfileResponse::from),
            loading: snapshot.loading,
        }
    }
}

// --- Edit Profile (local) ---

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Height,
}

impl From<FieldName> for ProfileField {
    fn from(field: FieldName) -> Self {
        match field {
            FieldName::FirstName => ProfileField::FirstName,
            FieldName::LastName => ProfileField::LastName,
            FieldName::Email => ProfileField::Email,
            FieldName::Phone => ProfileField::Phone,
            FieldName::Age => ProfileField::Age,
            FieldName::Height => ProfileField::Height,
        }
    }
}

#[derive(Deserialize)]
pub struct EditProfileRequest {
    pub field: FieldName,
    pub value: String,
}

// --- Save Profile ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub height: String,
}

impl From<SaveProfileRequest> for Profile {
    fn from(request: SaveProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            age: request.age,
            height: request.height,
        }
    }
}
