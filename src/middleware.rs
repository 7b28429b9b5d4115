//! Turns `401 Unauthorized` responses into a redirect to the sign-in page.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};

pub const LOGIN_PATH: &str = "/login";

/// Middleware answering any 401 produced downstream with
/// `303 See Other` to [`LOGIN_PATH`].
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            if res.status() != StatusCode::UNAUTHORIZED {
                return Ok(res.map_into_left_body());
            }

            log::debug!("Redirecting unauthenticated request for {}", res.request().path());
            let (req, _) = res.into_parts();
            let redirect = HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish()
                .map_into_right_body();
            Ok(ServiceResponse::new(req, redirect))
        })
    }
}
