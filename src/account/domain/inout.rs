use validator::Validate;

use super::profile::{Profile, ProfileField};

// ╔════════════════════════════╗
// ║         Sign In            ║
// ╚════════════════════════════╝

#[derive(Debug, Validate)]
pub struct SignInInput {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub uid: String,
    pub email: String,
}

// ╔════════════════════════════╗
// ║         Sign Up            ║
// ╚════════════════════════════╝

#[derive(Debug, Validate)]
pub struct SignUpInput {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug)]
pub struct SignUpOutput {
    pub uid: String,
    pub email: String,
}

// ╔════════════════════════════╗
// ║         Sign Out           ║
// ╚════════════════════════════╝

#[derive(Debug)]
pub struct SignOutOutput {
    pub success: bool,
}

// ╔════════════════════════════╗
// ║   Edit Profile (local)     ║
// ╚════════════════════════════╝

/// Mutates the in-memory profile copy only; nothing is persisted until an
/// explicit save. Fields are unconstrained free text.
#[derive(Debug)]
pub struct EditProfileInput {
    pub field: ProfileField,
    pub value: String,
}

#[derive(Debug)]
pub struct EditProfileOutput {
    pub profile: Profile,
}

// ╔════════════════════════════╗
// ║       Save Profile         ║
// ╚════════════════════════════╝

#[derive(Debug)]
pub struct SaveProfileInput {
    pub profile: Profile,
}

#[derive(Debug)]
pub struct SaveProfileOutput {
    pub profile: Profile,
}
