use crate::account::domain::inout::{SignInOutput, SignOutOutput, SignUpOutput};
use serde::{Deserialize, Serialize};

// --- Sign In ---

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub uid: String,
    pub email: String,
}

impl From<SignInOutput> for SignInResponse {
    fn from(output: SignInOutput) -> Self {
        Self {
            uid: output.uid,
            email: output.email,
        }
    }
}

// --- Sign Up ---

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub uid: String,
    pub email: String,
}

impl From<SignUpOutput> for SignUpResponse {
    fn from(output: SignUpOutput) -> Self {
        Self {
            uid: output.uid,
            email: output.email,
        }
    }
}

// --- Sign Out ---

#[derive(Serialize)]
pub struct SignOutResponse {
    pub success: bool,
}

impl From<SignOutOutput> for SignOutResponse {
    fn from(output: SignOutOutput) -> Self {
        Self {
            success: output.success,
        }
    }
}
