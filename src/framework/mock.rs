//! # Mock Tables
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a table actor.
//! It lets a test drive code that depends on a table (an identity resolver,
//! the order table's placement step) without any real rows.
//!
//! Expectations are consumed in the order they were declared. A request that
//! does not match the next expectation panics the mock task, which the caller
//! observes as [`FrameworkError::ActorDropped`]; [`MockClient::verify`] then
//! reports the expectations that were never reached.
//!
//! ```rust,ignore
//! let mut menu = MockClient::<MenuItem>::new();
//! menu.expect_get(MenuItemId(1)).return_ok(Some(burger));
//! let menu_client = MenuClient::new(menu.client());
//! // ... exercise code that reads the menu ...
//! menu.verify();
//! ```
//!
//! For step-by-step control over a single request, [`create_mock_client`]
//! returns the raw receiver and the `expect_*` helpers pull requests off it.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// A scripted answer for the next request.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    FindUnique(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock table with expectation tracking.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, next) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, r))) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        answer(respond_to, r)
                    }
                    (ResourceRequest::FindUnique { respond_to, .. }, Some(Expectation::FindUnique(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => {
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(expected, r)),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, r))) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(expected, r)),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        answer(respond_to, r)
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_find_unique(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::FindUnique)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |r| Expectation::Action(id, r))
    }

    /// Panics if any expectation was never reached.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declares the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(expectation);
    }
}

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pulls the next request and returns its parts if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pulls the next request and returns its parts if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
