//! Sequential sweep scheduler
//!
//! Drives the shuffled work set one item at a time: search, look up
//! details, filter by length, hand the batch to the caller, account the
//! retrieval against the query's quota and decide whether to follow the
//! continuation. Items are separated by a fixed delay, which is the only
//! rate control. Failures drop the current item and the run carries on.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::ClientConfig;
use crate::config::SweepConfig;
use crate::error::Result;
use crate::filter::{MIN_VIDEO_DURATION_SECS, filter_by_duration};
use crate::query::{generate_queries, shuffle_work};
use crate::quota::QuotaTracker;
use crate::service::{SearchService, VideoDetailService};
use crate::types::{SearchPage, Video, WorkItem};
use crate::youtube::YouTubeApi;

/// Lifecycle of a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Work set built, nothing executed yet
    Idle,
    /// A search + detail round trip is in flight
    Running,
    /// Waiting out the delay before the next item
    Draining,
    /// Work set exhausted or run cancelled
    Done,
}

/// Outcome of a finished run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Work items popped and executed, including continuations
    pub items_processed: usize,
    /// Items whose search and detail calls both succeeded
    pub pages_succeeded: usize,
    /// Items dropped because a collaborator failed
    pub items_failed: usize,
    /// Videos returned by detail lookups before filtering
    pub videos_retrieved: u64,
    /// Videos handed to the batch callback
    pub videos_delivered: u64,
    /// Inter-item delays waited out
    pub delays: usize,
    /// Whether the run stopped on the cancellation token
    pub cancelled: bool,
    /// Final per-query retrieval totals
    pub quota: QuotaTracker,
}

/// Executes a sweep against a search and a detail collaborator
pub struct Scheduler<S, D> {
    search: S,
    details: D,
    work: Vec<WorkItem>,
    quota: QuotaTracker,
    max_results_per_query: Option<u64>,
    min_duration_secs: f64,
    delay: Duration,
    cancel: CancellationToken,
    state: watch::Sender<SchedulerState>,
}

impl<S, D> Scheduler<S, D>
where
    S: SearchService,
    D: VideoDetailService,
{
    /// Build the work set from `config` and shuffle it
    ///
    /// Uses `config.seed` when present, OS entropy otherwise.
    pub fn new(config: &SweepConfig, search: S, details: D) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, search, details, &mut rng)
    }

    /// Build the work set from `config`, shuffled with `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        config: &SweepConfig,
        search: S,
        details: D,
        rng: &mut R,
    ) -> Self {
        let items: Vec<WorkItem> =
            generate_queries(&config.tags, config.start_index, config.end_index)
                .into_iter()
                .map(|query| WorkItem::new(query, &config.embed, &config.time_window))
                .collect();

        Self {
            search,
            details,
            work: shuffle_work(items, rng),
            quota: QuotaTracker::new(),
            max_results_per_query: config.max_results_per_query,
            min_duration_secs: MIN_VIDEO_DURATION_SECS,
            delay: config.request_delay(),
            cancel: CancellationToken::new(),
            state: watch::Sender::new(SchedulerState::Idle),
        }
    }

    /// Stop the run at the next suspension point once `token` fires
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Override the pause between work items
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Current lifecycle state
    ///
    /// `run` holds the scheduler mutably, so from the owner this only shows
    /// `Idle` before and `Done` after. Use [`Scheduler::subscribe`] to watch
    /// `Running` and `Draining` while a run is in progress.
    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Receiver that sees every state change, including mid-run ones
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: SchedulerState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            debug!(from = ?previous, to = ?state, "scheduler state");
        }
    }

    /// Number of work items still queued
    pub fn pending(&self) -> usize {
        self.work.len()
    }

    /// Run until the work set is empty or the token is cancelled
    ///
    /// `on_batch` is called once per successful page with the videos that
    /// passed the duration filter. The returned summary is the completion
    /// notification.
    pub async fn run<F>(&mut self, mut on_batch: F) -> RunSummary
    where
        F: FnMut(Vec<Video>),
    {
        info!(
            pending = self.work.len(),
            max_results_per_query = ?self.max_results_per_query,
            delay_ms = self.delay.as_millis() as u64,
            "sweep started"
        );

        let mut summary = RunSummary::default();

        loop {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            let Some(item) = self.work.pop() else {
                break;
            };

            self.set_state(SchedulerState::Running);
            self.process(item, &mut on_batch, &mut summary).await;

            if self.work.is_empty() {
                break;
            }

            self.set_state(SchedulerState::Draining);
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    summary.cancelled = true;
                    break;
                }
                _ = tokio::time::sleep(self.delay) => {
                    summary.delays += 1;
                }
            }
        }

        self.set_state(SchedulerState::Done);
        summary.quota = std::mem::take(&mut self.quota);

        info!(
            processed = summary.items_processed,
            failed = summary.items_failed,
            retrieved = summary.videos_retrieved,
            delivered = summary.videos_delivered,
            cancelled = summary.cancelled,
            remaining = self.work.len(),
            "sweep finished"
        );

        summary
    }

    async fn process<F>(&mut self, item: WorkItem, on_batch: &mut F, summary: &mut RunSummary)
    where
        F: FnMut(Vec<Video>),
    {
        summary.items_processed += 1;
        info!(q = %item.query.rendered_text, continued = item.page_token.is_some(), "search");

        let (page, videos) = match self.execute(&item).await {
            Ok(result) => result,
            Err(e) => {
                summary.items_failed += 1;
                warn!(
                    q = %item.query.rendered_text,
                    transport = e.is_transport(),
                    error = %e,
                    "dropping work item"
                );
                return;
            }
        };

        let identity = item.identity();
        let retrieved = videos.len() as u64;
        let kept = filter_by_duration(videos, self.min_duration_secs);
        info!(q = identity, retrieved, kept = kept.len(), "retrieved vids");

        summary.pages_succeeded += 1;
        summary.videos_retrieved += retrieved;
        summary.videos_delivered += kept.len() as u64;
        on_batch(kept);

        self.quota.record(identity, retrieved);

        if let Some(token) = page.next_page_token {
            if self.quota.allows_more(identity, self.max_results_per_query) {
                debug!(q = identity, total = self.quota.total(identity), "following continuation");
                self.work.push(item.continuation(token));
            } else {
                debug!(q = identity, total = self.quota.total(identity), "query quota reached");
            }
        }
    }

    async fn execute(&self, item: &WorkItem) -> Result<(SearchPage, Vec<Video>)> {
        let page = self.search.search(item).await?;
        let videos = if page.video_ids.is_empty() {
            Vec::new()
        } else {
            self.details.list_details(&page.video_ids).await?
        };
        Ok((page, videos))
    }
}

/// Run a full sweep against the YouTube Data API
///
/// Validates both configurations before any request is made.
///
/// # Errors
/// - `InvalidConfig` if `config` has no usable tags or an inverted range
/// - `MissingApiKey` if the client has no key
/// - `HttpError` if the HTTP client cannot be built
pub async fn sweep<F>(
    config: &SweepConfig,
    client: ClientConfig,
    cancel: CancellationToken,
    on_batch: F,
) -> Result<RunSummary>
where
    F: FnMut(Vec<Video>),
{
    config.validate()?;
    let api = Arc::new(YouTubeApi::new(client)?);

    let mut scheduler = Scheduler::new(config, Arc::clone(&api), api).with_cancellation(cancel);
    Ok(scheduler.run(on_batch).await)
}
