//! Remote read-only query state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workspace shell runs three of these (user, channels, members). A
//! query only ever holds the latest settled value; `data == None` means
//! "not loaded yet", never "empty".

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Latest value and error of one remote query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub loading: bool,
    /// Request sequence; results from superseded requests are dropped.
    pub seq: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            seq: 0,
        }
    }
}

impl<T> QueryState<T> {
    /// Mark a new request in flight and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Settle request `seq`. Returns `false` if a newer request superseded it.
    ///
    /// Errors keep the previous value, matching revalidation semantics.
    pub fn resolve(&mut self, seq: u64, result: Result<T, ApiError>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Forget the value (e.g. the query key changed) and drop in-flight results.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.data = None;
        self.error = None;
        self.loading = false;
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

/// Start a request for `query` and settle it when `fetch` completes.
///
/// Browser only; on the server the query stays in its loading state.
pub fn spawn_query<T, F>(query: RwSignal<QueryState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(seq) = query.try_update(QueryState::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        query.update(|q| {
            if !q.resolve(seq, result) {
                leptos::logging::log!("dropped superseded query result {seq}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, fetch);
}
