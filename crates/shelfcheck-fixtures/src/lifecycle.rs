//! Create-and-guarantee-cleanup lifecycle for remote resources
//!
//! Every resource a test creates must be deleted during teardown even if
//! the test body panics; a leaked resource corrupts ID allocation for
//! every test that follows, so a failed cleanup is a hard infrastructure
//! failure rather than something to swallow.

use crate::allocate::Resource;
use crate::error::{FixtureError, FixtureResult};
use serde_json::Value;
use shelfcheck_client::{ApiClient, ApiResponse, ClientResult};
use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use tracing::info;

/// Tracks resources created during a test, pending cleanup
///
/// Two states: tracking (created IDs pending) and finalized (after
/// [`ResourceGuard::finish`] consumed the guard and ran teardown).
pub struct ResourceGuard<'a> {
    client: &'a ApiClient,
    resource: Resource,
    created: RefCell<Vec<i64>>,
}

impl<'a> ResourceGuard<'a> {
    /// Start tracking creations for one resource kind
    pub const fn new(client: &'a ApiClient, resource: Resource) -> Self {
        Self {
            client,
            resource,
            created: RefCell::new(Vec::new()),
        }
    }

    /// POST a payload to the collection endpoint, recording the created ID
    /// on success
    ///
    /// The ID echoed in the response body is preferred; the payload's `id`
    /// is the fallback when the body omits it. The response is returned
    /// unconditionally - tests that create with bad data on purpose assert
    /// on the failure status themselves.
    ///
    /// # Errors
    /// Only transport-level failures.
    pub fn create(&self, payload: &Value) -> ClientResult<ApiResponse> {
        let response = self.client.post(self.resource.collection_path(), payload)?;

        if response.is_success() {
            let created_id = response
                .json()
                .and_then(|body| body.get("id").and_then(Value::as_i64))
                .or_else(|| payload.get("id").and_then(Value::as_i64));
            if let Some(id) = created_id {
                self.created.borrow_mut().push(id);
            }
        }

        Ok(response)
    }

    /// IDs recorded so far, in creation order
    pub fn created_ids(&self) -> Vec<i64> {
        self.created.borrow().clone()
    }

    /// Run teardown: DELETE every recorded ID in creation order
    ///
    /// # Errors
    /// `FixtureError::Cleanup` on the first deletion that does not
    /// succeed, `FixtureError::Client` on transport failure.
    pub fn finish(self) -> FixtureResult<()> {
        let resource = self.resource;
        for id in self.created.into_inner() {
            let response = self.client.delete(&resource.item_path(id))?;
            if !response.is_success() {
                return Err(FixtureError::Cleanup {
                    resource: resource.name(),
                    id,
                    status: response.status,
                });
            }
            info!(resource = resource.name(), id, "cleaned up");
        }
        Ok(())
    }
}

/// Run a test body with guaranteed teardown
///
/// The body runs under `catch_unwind`; teardown always runs afterward.
/// A teardown failure panics (infrastructure failure), otherwise the
/// body's own panic is resumed so the test reports its original failure.
///
/// # Panics
/// Panics if teardown fails, and re-raises any panic from the body.
#[allow(clippy::panic)]
pub fn with_cleanup<F>(client: &ApiClient, resource: Resource, body: F)
where
    F: FnOnce(&ResourceGuard<'_>),
{
    let guard = ResourceGuard::new(client, resource);
    let outcome = catch_unwind(AssertUnwindSafe(|| body(&guard)));

    if let Err(error) = guard.finish() {
        panic!("test teardown failed: {error}");
    }

    if let Err(panic) = outcome {
        resume_unwind(panic);
    }
}
