use serde::{Deserialize, Serialize};

/// Credentials and identity of the signed-in operator.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub access_token: String,
    pub refresh_token: String,
    pub name: String,
    pub issuer: String,
    pub audience: String,
    pub is_authenticated: bool,
}

impl From<LoginResponse> for UserSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            is_authenticated: !response.access_token.is_empty(),
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            name: response.name,
            issuer: response.issuer,
            audience: response.audience,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub audience: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_is_authenticated_only_with_access_token() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"abc","refreshToken":"r","name":"admin","issuer":"i","audience":"a"}"#,
        )
        .unwrap();
        let session = UserSession::from(response);
        assert!(session.is_authenticated);
        assert_eq!(session.name, "admin");

        let empty: LoginResponse = serde_json::from_str(r#"{"accessToken":""}"#).unwrap();
        assert!(!UserSession::from(empty).is_authenticated);
    }
}
