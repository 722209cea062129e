use std::{fmt::Display, ops::Deref};

/// The label used for a listed repository that comes without a name.
pub const UNNAMED_REPOSITORY: &str = "Unnamed Repository";

/// The identifier of a remote project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(pub String);

impl Deref for ProjectId {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque bearer token.
///
/// The token is never printed: both `Debug` and `Display` redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Creates a new `Credential` from a raw token.
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }

    /// Exposes the raw token, for use in an authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}

impl Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "***")
    }
}

/// Identifies the remote project to enumerate, along with the credential used to do so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandle {
    /// The project identifier.
    project_id: ProjectId,

    /// The credential sent as a bearer token.
    credential: Credential,
}

impl ProjectHandle {
    /// Creates a new `ProjectHandle` instance.
    pub fn new(project_id: &str, credential: &str) -> Self {
        Self {
            project_id: ProjectId(project_id.to_string()),
            credential: Credential::new(credential),
        }
    }

    /// Retrieves the project identifier.
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Retrieves the credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Creates a dummy `ProjectHandle` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("proj1", "tok")
    }
}

/// The display name of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository listed by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    /// The display name of the repository.
    name: RepositoryName,

    /// The URL to clone the repository from, if the service reported one.
    clone_url: Option<String>,
}

impl RepositoryDescriptor {
    /// Creates a new `RepositoryDescriptor` instance.
    ///
    /// A missing name falls back to [UNNAMED_REPOSITORY]. A blank clone URL counts as missing.
    pub fn new(name: Option<&str>, clone_url: Option<&str>) -> Self {
        Self {
            name: RepositoryName(name.unwrap_or(UNNAMED_REPOSITORY).to_string()),
            clone_url: clone_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.to_string()),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the clone URL.
    pub fn clone_url(&self) -> Option<&str> {
        self.clone_url.as_deref()
    }
}

impl Display for RepositoryDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Url: {}",
            self.name,
            self.clone_url.as_deref().unwrap_or("<none>")
        )
    }
}
