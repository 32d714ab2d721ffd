use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments the portal can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Staging environment for pre-production testing.
    Staging,
    /// Production portal backend.
    #[default]
    Production,
}

impl Environment {
    /// Returns the portal backend URL associated with the environment.
    pub fn portal_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8787".to_string(),
            Environment::Staging => "https://staging.portal.example.org".to_string(),
            Environment::Production => "https://portal.example.org".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.portal_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(
            "PRODUCTION".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("beta".parse::<Environment>().is_err());
    }
}
