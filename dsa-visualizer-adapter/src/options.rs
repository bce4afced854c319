use alloc::sync::Arc;
use core::time::Duration;

use dsa_visualizer::Pivot;

/// Waits out one step delay. Adapters decide what "waiting" means: sleeping a thread, yielding to
/// an event loop, or nothing at all in tests.
pub type Pacer = Arc<dyn Fn(Duration) + Send + Sync>;

/// Configuration for [`crate::Controller`].
///
/// Cheap to clone: the pacer is stored in an `Arc`.
#[derive(Clone)]
pub struct SessionOptions {
    /// Delay after each search frame.
    pub search_delay: Duration,
    /// Delay after each sort frame.
    pub sort_delay: Duration,
    /// Delay after each traversal visit.
    pub traversal_delay: Duration,
    /// Delay after each positional list frame.
    pub list_delay: Duration,

    /// Called with the family delay after every frame. When `None`, frames are delivered back to
    /// back.
    pub pacer: Option<Pacer>,

    pub pivot: Pivot,

    /// Whether binary and jump search sort a copy of their input before searching.
    ///
    /// When disabled, unsorted input is searched as-is and the result is unspecified.
    pub sort_search_input: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(300),
            sort_delay: Duration::from_millis(300),
            traversal_delay: Duration::from_millis(500),
            list_delay: Duration::from_millis(500),
            pacer: None,
            pivot: Pivot::Last,
            sort_search_input: true,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn with_sort_delay(mut self, delay: Duration) -> Self {
        self.sort_delay = delay;
        self
    }

    pub fn with_traversal_delay(mut self, delay: Duration) -> Self {
        self.traversal_delay = delay;
        self
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = delay;
        self
    }

    /// Sets every family delay at once.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.with_search_delay(delay)
            .with_sort_delay(delay)
            .with_traversal_delay(delay)
            .with_list_delay(delay)
    }

    pub fn with_pacer(mut self, pacer: impl Fn(Duration) + Send + Sync + 'static) -> Self {
        self.pacer = Some(Arc::new(pacer));
        self
    }

    /// Delivers frames back to back.
    pub fn without_pacer(mut self) -> Self {
        self.pacer = None;
        self
    }

    /// Paces frames by blocking the current thread.
    #[cfg(feature = "std")]
    pub fn with_thread_sleep(self) -> Self {
        self.with_pacer(std::thread::sleep)
    }

    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_sort_search_input(mut self, sort_search_input: bool) -> Self {
        self.sort_search_input = sort_search_input;
        self
    }
}

impl core::fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionOptions")
            .field("search_delay", &self.search_delay)
            .field("sort_delay", &self.sort_delay)
            .field("traversal_delay", &self.traversal_delay)
            .field("list_delay", &self.list_delay)
            .field("has_pacer", &self.pacer.is_some())
            .field("pivot", &self.pivot)
            .field("sort_search_input", &self.sort_search_input)
            .finish_non_exhaustive()
    }
}
