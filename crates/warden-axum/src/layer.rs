//! Tower middleware layer for Warden authentication.
//!
//! [`AuthLayer`] is the per-request access filter: it extracts the bearer
//! token, authenticates it against the identity store, binds the resulting
//! [`Principal`] to the request, and evaluates the route policy before the
//! handler runs.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use warden_core::{AuthError, AuthService, IdentityStore};
use warden_types::Principal;

use crate::extractors::PrincipalExt;
use crate::policy::{Decision, RoutePolicy};

type AuthFuture = Pin<Box<dyn Future<Output = Result<Principal, AuthError>> + Send>>;

/// Tower layer that adds Warden authentication to requests.
pub struct AuthLayer<ST: IdentityStore> {
    auth: Arc<AuthService<ST>>,
    policy: Arc<RoutePolicy>,
}

impl<ST: IdentityStore> AuthLayer<ST> {
    /// Create a new auth layer with the given authenticator and policy.
    #[must_use]
    pub fn new(auth: Arc<AuthService<ST>>, policy: RoutePolicy) -> Self {
        Self {
            auth,
            policy: Arc::new(policy),
        }
    }
}

impl<ST: IdentityStore> Clone for AuthLayer<ST> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<SVC, ST: IdentityStore> Layer<SVC> for AuthLayer<ST> {
    type Service = AuthMiddleware<SVC, ST>;

    fn layer(&self, inner: SVC) -> Self::Service {
        AuthMiddleware {
            inner,
            auth: Arc::clone(&self.auth),
            policy: Arc::clone(&self.policy),
        }
    }
}

/// The authentication middleware service.
pub struct AuthMiddleware<SVC, ST: IdentityStore> {
    inner: SVC,
    auth: Arc<AuthService<ST>>,
    policy: Arc<RoutePolicy>,
}

impl<SVC: Clone, ST: IdentityStore> Clone for AuthMiddleware<SVC, ST> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            auth: Arc::clone(&self.auth),
            policy: Arc::clone(&self.policy),
        }
    }
}

/// Extract the bearer credential from the `Authorization` header.
///
/// A missing header or one without the literal `Bearer ` prefix means no
/// credential was presented. That is soft: the request proceeds
/// unauthenticated and the route policy decides whether to reject it.
fn extract_bearer(req: &Request<Body>) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::to_string)
}

impl<SVC, ST, ResBody> Service<Request<Body>> for AuthMiddleware<SVC, ST>
where
    SVC: Service<Request<Body>, Response = Response<ResBody>> + Clone + Send + 'static,
    SVC::Future: Send,
    ST: IdentityStore + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = SVC::Response;
    type Error = SVC::Error;
    type Future = AuthMiddlewareFuture<SVC, ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        // Strictly sequential per request: extract, then decode + lookup,
        // then policy evaluation. Dropping the returned future cancels the
        // in-flight lookup without ever binding a partial principal.
        let lookup = extract_bearer(&req).map(|token| {
            let auth = Arc::clone(&self.auth);
            Box::pin(async move { auth.authenticate(&token).await }) as AuthFuture
        });

        AuthMiddlewareFuture {
            state: FutureState::Gate {
                inner: Some(self.inner.clone()),
                req: Some(req),
                lookup,
                policy: Arc::clone(&self.policy),
            },
        }
    }
}

pin_project! {
    /// Future for the authentication middleware.
    pub struct AuthMiddlewareFuture<SVC, ResBody>
    where
        SVC: Service<Request<Body>, Response = Response<ResBody>>,
    {
        #[pin]
        state: FutureState<SVC, ResBody>,
    }
}

pin_project! {
    #[project = FutureStateProj]
    enum FutureState<SVC, ResBody>
    where
        SVC: Service<Request<Body>, Response = Response<ResBody>>,
    {
        Gate {
            inner: Option<SVC>,
            req: Option<Request<Body>>,
            lookup: Option<AuthFuture>,
            policy: Arc<RoutePolicy>,
        },
        Calling {
            #[pin]
            future: SVC::Future,
        },
        Done,
    }
}

impl<SVC, ResBody> Future for AuthMiddlewareFuture<SVC, ResBody>
where
    SVC: Service<Request<Body>, Response = Response<ResBody>> + Clone + Send + 'static,
    SVC::Future: Send,
    ResBody: Default + Send + 'static,
{
    type Output = Result<SVC::Response, SVC::Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            let this = self.as_mut().project();

            match this.state.project() {
                FutureStateProj::Gate {
                    inner,
                    req,
                    lookup,
                    policy,
                } => {
                    // Await the authenticator if a credential was presented.
                    // An invalid credential does not abort the request here:
                    // the policy below rejects unauthenticated access to
                    // protected routes.
                    let principal = match lookup.as_mut() {
                        Some(fut) => match fut.as_mut().poll(cx) {
                            Poll::Pending => return Poll::Pending,
                            Poll::Ready(Ok(principal)) => Some(principal),
                            Poll::Ready(Err(err)) => {
                                tracing::debug!(
                                    code = err.error_code(),
                                    "bearer authentication failed"
                                );
                                None
                            }
                        },
                        None => None,
                    };

                    let mut request = req.take().expect("request polled twice");

                    // Pre-flight requests are always permitted, even for
                    // paths the router does not know
                    if request.method() == Method::OPTIONS {
                        let response = Response::builder()
                            .status(StatusCode::OK)
                            .body(ResBody::default())
                            .unwrap();
                        self.set(AuthMiddlewareFuture {
                            state: FutureState::Done,
                        });
                        return Poll::Ready(Ok(response));
                    }

                    let decision = policy.evaluate(
                        request.method(),
                        request.uri().path(),
                        principal.as_ref(),
                    );

                    let status = match decision {
                        Decision::Allow => None,
                        Decision::Unauthenticated => Some(StatusCode::UNAUTHORIZED),
                        Decision::Forbidden => Some(StatusCode::FORBIDDEN),
                    };

                    if let Some(status) = status {
                        // Terminate before the handler runs; empty body
                        let response = Response::builder()
                            .status(status)
                            .body(ResBody::default())
                            .unwrap();
                        self.set(AuthMiddlewareFuture {
                            state: FutureState::Done,
                        });
                        return Poll::Ready(Ok(response));
                    }

                    if let Some(principal) = principal {
                        request.extensions_mut().insert(PrincipalExt(principal));
                    }

                    let mut service = inner.take().expect("service polled twice");
                    let future = service.call(request);

                    self.set(AuthMiddlewareFuture {
                        state: FutureState::Calling { future },
                    });
                }
                FutureStateProj::Calling { future } => {
                    return future.poll(cx);
                }
                FutureStateProj::Done => {
                    panic!("polled after completion");
                }
            }
        }
    }
}
