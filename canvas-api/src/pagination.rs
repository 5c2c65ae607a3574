//! Lazily paginated collections.

use std::{
    collections::VecDeque,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

use futures_util::{
    stream::{self, BoxStream},
    Stream, StreamExt, TryStreamExt,
};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    error::Result,
    requester::{self, Requester},
};

/// A collection that Canvas returns page by page.
///
/// Pages are requested on demand while the stream is polled. The URL of the
/// following page is taken from the `rel="next"` entry of the `Link` header,
/// and the stream ends once a page has no such entry. The first error ends
/// the stream.
pub struct PaginatedList<T> {
    inner: BoxStream<'static, Result<T>>,
}

struct State<T> {
    requester: Requester,
    method: Method,
    next: Option<RequestBuilder>,
    buffer: VecDeque<T>,
}

impl<T> PaginatedList<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub(crate) fn new<P>(
        requester: &Requester,
        method: Method,
        path: &str,
        params: Option<&P>,
    ) -> Self
    where
        P: Serialize + ?Sized,
    {
        let first = requester.builder(method.clone(), requester.endpoint(path), params);
        let state = State {
            requester: requester.clone(),
            method,
            next: Some(first),
            buffer: VecDeque::new(),
        };
        Self {
            inner: stream::try_unfold(state, State::advance).boxed(),
        }
    }

    /// Applies `f` to every item, e.g. to attach the id of the owning course.
    #[must_use]
    pub(crate) fn inspect_items<F>(self, mut f: F) -> Self
    where
        F: FnMut(&mut T) + Send + 'static,
    {
        Self {
            inner: self
                .inner
                .map_ok(move |mut item| {
                    f(&mut item);
                    item
                })
                .boxed(),
        }
    }

    /// Fetches all remaining pages.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T> State<T>
where
    T: DeserializeOwned,
{
    async fn advance(mut self) -> Result<Option<(T, Self)>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some((item, self)));
            }
            let Some(request) = self.next.take() else {
                return Ok(None);
            };
            let response = self.requester.execute(request).await?;
            let next = requester::next_link(response.headers())?;
            let page = Requester::decode::<Vec<T>>(response).await?;
            debug!(items = page.len(), has_next = next.is_some(), "Fetched page");
            self.buffer.extend(page);
            self.next = next.map(|url| {
                self.requester
                    .builder::<()>(self.method.clone(), url, None)
            });
        }
    }
}

impl<T> Stream for PaginatedList<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> fmt::Debug for PaginatedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedList").finish_non_exhaustive()
    }
}
