use serde::Deserialize;
use validator::Validate;

use crate::domain::session::LoginRequest;
use crate::forms::not_blank;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub user_name: String,
    #[validate(length(min = 1, max = 255))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        Self {
            user_name: form.user_name.trim().to_string(),
            password: form.password,
            remember_me: form.remember_me,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_required() {
        let form = LoginForm::default();

        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_name"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn request_keeps_password_verbatim() {
        let request = LoginRequest::from(LoginForm {
            user_name: " admin ".to_string(),
            password: " secret ".to_string(),
            remember_me: true,
        });

        assert_eq!(request.user_name, "admin");
        assert_eq!(request.password, " secret ");
        assert!(request.remember_me);
    }
}
