use std::fmt;

pub const ENTERPRISE_TEAM_KEY: &str = "enterprise_team_key";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const TWO_FACTOR_AUTH_CODE: &str = "two_factor_auth_code";

/// What the installation authenticates with when activating. Empty strings
/// mean "not provided" throughout.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    EnterpriseKey(String),
    UsernamePassword {
        username: String,
        password: String,
        two_factor_code: String,
    },
}

impl Credentials {
    /// Picks the credentials to send. A team key wins over username and
    /// password; username and password are only used together. Returns `None`
    /// when neither is complete.
    pub fn select(
        team_key: &str,
        username: &str,
        password: &str,
        two_factor_code: &str,
    ) -> Option<Self> {
        if !team_key.is_empty() {
            Some(Credentials::EnterpriseKey(team_key.to_owned()))
        } else if !username.is_empty() && !password.is_empty() {
            Some(Credentials::UsernamePassword {
                username: username.to_owned(),
                password: password.to_owned(),
                two_factor_code: two_factor_code.to_owned(),
            })
        } else {
            None
        }
    }

    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Credentials::EnterpriseKey(team_key) => vec![(ENTERPRISE_TEAM_KEY, team_key.as_str())],
            Credentials::UsernamePassword {
                username,
                password,
                two_factor_code,
            } => {
                let mut params = vec![(USERNAME, username.as_str()), (PASSWORD, password.as_str())];
                if !two_factor_code.is_empty() {
                    params.push((TWO_FACTOR_AUTH_CODE, two_factor_code.as_str()));
                }
                params
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::EnterpriseKey(_) => "enterprise team key",
            Credentials::UsernamePassword {
                two_factor_code, ..
            } if !two_factor_code.is_empty() => "username/password with 2FA code",
            Credentials::UsernamePassword { .. } => "username/password",
        }
    }
}

// Secrets stay out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::EnterpriseKey(_) => f.debug_tuple("EnterpriseKey").field(&"***").finish(),
            Credentials::UsernamePassword {
                username,
                two_factor_code,
                ..
            } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"***")
                .field("two_factor_code", &!two_factor_code.is_empty())
                .finish(),
        }
    }
}
