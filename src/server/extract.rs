use async_trait::async_trait;
use axum::extract::{FromRequest, RequestParts};
use uuid::Uuid;

use crate::auth::{Role, User};
use crate::error::{unauthenticated_error, Error};

// The auth gateway terminates credentials and forwards the verified actor
// on these headers; a request without a complete descriptor never reaches
// the engine.
const USER_ID_HEADER: &str = "x-user-id";
const USER_EMAIL_HEADER: &str = "x-user-email";
const USER_ROLE_HEADER: &str = "x-user-role";

#[async_trait]
impl<B: Send> FromRequest<B> for User {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let id = header(req, USER_ID_HEADER)
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(|| unauthenticated_error())?;

        let email = header(req, USER_EMAIL_HEADER)
            .ok_or_else(|| unauthenticated_error())?
            .to_string();

        let role = header(req, USER_ROLE_HEADER)
            .and_then(Role::parse)
            .ok_or_else(|| unauthenticated_error())?;

        Ok(User { id, email, role })
    }
}

fn header<'a, B>(req: &'a RequestParts<B>, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tokio_test::block_on;

    fn parts(headers: &[(&str, &str)]) -> RequestParts<Body> {
        let mut builder = Request::builder().uri("/bids");

        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        RequestParts::new(builder.body(Body::empty()).unwrap())
    }

    #[test]
    fn complete_descriptor_yields_a_user() {
        let id = Uuid::new_v4();
        let mut parts = parts(&[
            (USER_ID_HEADER, &id.to_string()),
            (USER_EMAIL_HEADER, "buyer@example.com"),
            (USER_ROLE_HEADER, "buyer"),
        ]);

        let user = block_on(User::from_request(&mut parts)).unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.email, "buyer@example.com");
        assert_eq!(user.role, Role::Buyer);
    }

    #[test]
    fn missing_or_malformed_descriptors_are_rejected() {
        let id = Uuid::new_v4().to_string();

        let mut incomplete = parts(&[(USER_ID_HEADER, &id), (USER_EMAIL_HEADER, "x@example.com")]);
        let err = block_on(User::from_request(&mut incomplete)).unwrap_err();
        assert_eq!(err.code, 104);

        let mut bad_id = parts(&[
            (USER_ID_HEADER, "42"),
            (USER_EMAIL_HEADER, "x@example.com"),
            (USER_ROLE_HEADER, "buyer"),
        ]);
        let err = block_on(User::from_request(&mut bad_id)).unwrap_err();
        assert_eq!(err.code, 104);

        let mut bad_role = parts(&[
            (USER_ID_HEADER, &id),
            (USER_EMAIL_HEADER, "x@example.com"),
            (USER_ROLE_HEADER, "superuser"),
        ]);
        let err = block_on(User::from_request(&mut bad_role)).unwrap_err();
        assert_eq!(err.code, 104);
    }
}
