/// The user-editable record of personal fields stored per identity.
///
/// All fields are free text, including `age` and `height`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub height: String,
}

impl Profile {
    /// The record written on first sign-in: every field empty except the
    /// email, which is copied from the identity.
    pub fn default_for(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Age => self.age = value,
            ProfileField::Height => self.height = value,
        }
    }
}

/// A single editable field of the profile form.
///
/// `Email` can be edited locally like any other field; the store adapter
/// overrides it with the identity's own address on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Height,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_for_copies_only_the_email() {
        let profile = Profile::default_for("a@x.com");

        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.age, "");
        assert_eq!(profile.height, "");
    }

    #[test]
    fn set_updates_the_addressed_field_only() {
        let mut profile = Profile::default_for("a@x.com");

        profile.set(ProfileField::FirstName, "Jane".to_string());

        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.email, "a@x.com");
    }
}
