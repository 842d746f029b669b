//! Create-group screen adapter.
//!
//! Owns the group-name input and the busy flag around a [`GroupCreator`], and
//! turns its result into something a view can show. On success it schedules
//! navigation to the new group after a fixed delay; the pending navigation is
//! tied to the screen and aborted when the screen goes away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use roster_domain::id::GroupId;

use crate::domain::types::normalize_group_name;
use crate::error::GroupsServiceError;
use crate::usecase::group::GroupCreator;

/// Time the success state stays on screen before navigating away.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(2000);

/// Navigation target the screen hands control to.
pub trait Navigator: Send + Sync + 'static {
    fn go_to(&self, path: &str);
}

/// What the view should show after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Group created; navigation to it is scheduled.
    Created(GroupId),
    /// Input rejected before anything was sent.
    Rejected(String),
    /// Creation failed; the message is display-ready.
    Failed(String),
    /// Another submit is still in flight.
    Ignored,
}

pub fn group_path(id: GroupId) -> String {
    format!("/groups/{id}")
}

pub struct CreateGroupScreen<W, N>
where
    W: GroupCreator,
    N: Navigator,
{
    creator: W,
    navigator: Arc<N>,
    navigation_delay: Duration,
    name: String,
    busy: AtomicBool,
    pending_navigation: Mutex<Option<JoinHandle<()>>>,
}

impl<W, N> CreateGroupScreen<W, N>
where
    W: GroupCreator,
    N: Navigator,
{
    pub fn new(creator: W, navigator: Arc<N>) -> Self {
        Self::with_navigation_delay(creator, navigator, DEFAULT_NAVIGATION_DELAY)
    }

    pub fn with_navigation_delay(creator: W, navigator: Arc<N>, delay: Duration) -> Self {
        Self {
            creator,
            navigator,
            navigation_delay: delay,
            name: String::new(),
            busy: AtomicBool::new(false),
            pending_navigation: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Create a group from the current name.
    ///
    /// Must run inside a tokio runtime: success spawns the delayed navigation.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Ignored;
        };
        let Some(name) = normalize_group_name(&self.name) else {
            return SubmitOutcome::Rejected(GroupsServiceError::InvalidGroupName.to_string());
        };
        match self.creator.create_group(&name).await {
            Ok(group_id) => {
                self.schedule_navigation(group_path(group_id));
                SubmitOutcome::Created(group_id)
            }
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        }
    }

    /// Cancel a scheduled navigation, if any.
    pub fn dismiss(&self) {
        if let Some(handle) = self.pending().take() {
            handle.abort();
        }
    }

    fn schedule_navigation(&self, path: String) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.navigation_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(%path, "navigating after group creation");
            navigator.go_to(&path);
        });
        if let Some(previous) = self.pending().replace(handle) {
            previous.abort();
        }
    }

    fn pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending_navigation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W, N> Drop for CreateGroupScreen<W, N>
where
    W: GroupCreator,
    N: Navigator,
{
    fn drop(&mut self) {
        self.dismiss();
    }
}

/// Holds the busy flag; clears it on drop, including on early return.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
