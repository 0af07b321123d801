/// The externally issued, authenticated user record.
///
/// Identities are owned entirely by the identity provider. This application
/// never constructs or destroys one on its own; it only observes what the
/// provider reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}
