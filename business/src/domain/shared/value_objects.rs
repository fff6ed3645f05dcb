/// Role of the caller, taken from the `role` request header.
/// Only `Admin` may update or delete products.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Other(String),
    Anonymous,
}

impl Role {
    const ADMIN: &'static str = "admin";

    /// Builds a role from the raw header value. The match is exact.
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            None => Role::Anonymous,
            Some(Self::ADMIN) => Role::Admin,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", Self::ADMIN),
            Role::Other(value) => write!(f, "{}", value),
            Role::Anonymous => write!(f, "anonymous"),
        }
    }
}
