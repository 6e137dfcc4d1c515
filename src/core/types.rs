use std::fmt;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUri(pub String);

/// Plaintext client secret. Only ever held in memory while a client is being
/// created; `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(pub String);

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(<redacted>)")
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashedClientSecret(pub String);

impl From<String> for HashedClientSecret {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for HashedClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Grant types a client may use.
///
/// `Unrestricted` records no constraint at all and is not the same thing as
/// `Restricted(vec![])`, which would permit nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrantTypes {
    Unrestricted,
    Restricted(Vec<String>),
}

impl GrantTypes {
    /// Splits a comma separated list, trimming each entry. Order and
    /// duplicates are kept as given.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unrestricted,
            Some(raw) => Self::Restricted(raw.split(',').map(|g| g.trim().to_string()).collect()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    pub fn as_parts(&self) -> Option<&[String]> {
        match self {
            Self::Unrestricted => None,
            Self::Restricted(parts) => Some(parts),
        }
    }
}

impl fmt::Display for GrantTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => f.write_str("any"),
            Self::Restricted(parts) => f.write_str(&parts.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_keeps_order() {
        let parsed = GrantTypes::parse(Some("bar, baz,bat , man ,asd"));
        assert_eq!(
            parsed,
            GrantTypes::Restricted(vec![
                "bar".into(),
                "baz".into(),
                "bat".into(),
                "man".into(),
                "asd".into()
            ])
        );
    }

    #[test]
    fn parse_keeps_duplicates() {
        let parsed = GrantTypes::parse(Some("code,code"));
        assert_eq!(parsed.as_parts().unwrap(), &["code", "code"]);
    }

    #[test]
    fn unset_is_unrestricted_not_empty() {
        let unset = GrantTypes::parse(None);
        assert!(unset.is_unrestricted());
        assert_ne!(unset, GrantTypes::Restricted(Vec::new()));
        assert_eq!(unset.as_parts(), None);
    }

    #[test]
    fn display_joins_with_comma() {
        assert_eq!(GrantTypes::parse(Some("a,b")).to_string(), "a, b");
        assert_eq!(GrantTypes::Unrestricted.to_string(), "any");
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = ClientSecret("hunter2".to_string());
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }
}
