use std::fmt;
use std::str::FromStr;

use crate::error::OctofitError;
use crate::octofit_error;

/// URL of one resource collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// `<base>/<path>/`, tolerating a trailing slash on `base`.
    pub fn for_path(base_url: &str, path: &str) -> Self {
        Self(format!("{}/{}/", base_url.trim_end_matches('/'), path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Teams,
        Resource::Activities,
        Resource::Leaderboard,
        Resource::Workouts,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Teams => "teams",
            Resource::Activities => "activities",
            Resource::Leaderboard => "leaderboard",
            Resource::Workouts => "workouts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Users => "Users",
            Resource::Teams => "Teams",
            Resource::Activities => "Activities",
            Resource::Leaderboard => "Leaderboard",
            Resource::Workouts => "Workouts",
        }
    }

    pub fn endpoint(self, base_url: &str) -> Endpoint {
        Endpoint::for_path(base_url, self.path())
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Resource {
    type Err = OctofitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.path() == wanted)
            .ok_or_else(|| octofit_error!(InvalidInput, "unknown resource '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        assert_eq!(
            Resource::Users.endpoint("https://fit.example.com/api").as_str(),
            "https://fit.example.com/api/users/"
        );
        assert_eq!(
            Resource::Leaderboard.endpoint("http://localhost:8000/api/").as_str(),
            "http://localhost:8000/api/leaderboard/"
        );
    }

    #[test]
    fn test_endpoint_identity_is_string_equality() {
        assert_eq!(Endpoint::new("http://a/users/"), Resource::Users.endpoint("http://a"));
        assert_ne!(Resource::Users.endpoint("http://a"), Resource::Teams.endpoint("http://a"));
    }

    #[test]
    fn test_parse_resource() {
        assert_eq!("Workouts".parse::<Resource>().unwrap(), Resource::Workouts);
        assert!("badges".parse::<Resource>().is_err());
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Resource::Workouts.next(), Resource::Users);
        assert_eq!(Resource::Users.prev(), Resource::Workouts);
        assert_eq!(Resource::Teams.next(), Resource::Activities);
    }
}
