// Caller identity taken from the headers set by the upstream identity proxy.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::attendance::core::actor::{Actor, Role};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActorRejection {
    #[error("missing {0} header")]
    Missing(&'static str),

    #[error("invalid {0} header")]
    Invalid(&'static str),
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        let status = match self {
            ActorRejection::Missing(_) => StatusCode::UNAUTHORIZED,
            ActorRejection::Invalid(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ActorRejection> {
    let user_id = header_text(headers, USER_ID_HEADER)?;
    let role: Role = header_text(headers, USER_ROLE_HEADER)?
        .parse()
        .map_err(|_| ActorRejection::Invalid(USER_ROLE_HEADER))?;
    Ok(Actor::new(user_id, role))
}

fn header_text<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, ActorRejection> {
    let value = headers.get(name).ok_or(ActorRejection::Missing(name))?;
    let text = value
        .to_str()
        .map_err(|_| ActorRejection::Invalid(name))?
        .trim();
    if text.is_empty() {
        return Err(ActorRejection::Missing(name));
    }
    Ok(text)
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers)
    }
}
