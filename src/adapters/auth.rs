use crate::domain::http::RequestContext;
use crate::domain::ports::SecurityAuthentication;
use crate::utils::error::Result;

/// Sends `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerTokenAuthentication {
    token: String,
}

impl BearerTokenAuthentication {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for BearerTokenAuthentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthentication")
            .field("token", &"***")
            .finish()
    }
}

impl SecurityAuthentication for BearerTokenAuthentication {
    fn name(&self) -> &str {
        "bearer"
    }

    fn apply_security_authentication(&self, context: &mut RequestContext) -> Result<()> {
        context.set_header_param("Authorization", &format!("Bearer {}", self.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use url::Url;

    #[test]
    fn sets_authorization_header() {
        let mut ctx = RequestContext::new(
            Url::parse("http://api.example.xyz/v1/pets").unwrap(),
            Method::PATCH,
        );
        let auth = BearerTokenAuthentication::new("abc123");

        auth.apply_security_authentication(&mut ctx).unwrap();

        assert_eq!(ctx.headers()["authorization"], "Bearer abc123");
        assert!(!format!("{:?}", auth).contains("abc123"));
    }
}
