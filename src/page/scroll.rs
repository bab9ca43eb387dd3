use serde::Serialize;
use tokio::sync::watch;
use tracing::trace;

/// Vertical offset past which the navigation bar gets its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Publishes the document's vertical scroll offset.
#[derive(Debug)]
pub struct ScrollSignal {
    sender: watch::Sender<f64>,
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0.0);
        Self { sender }
    }

    pub fn emit(&self, offset: f64) {
        trace!(offset, "Scroll");
        self.sender.send_replace(offset);
    }

    pub fn offset(&self) -> f64 {
        *self.sender.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn subscribe(&self) -> watch::Receiver<f64> {
        self.sender.subscribe()
    }
}

/// Threshold model for the navigation bar. The page script mirrors it in the
/// browser through `data-scroll-threshold`, so both read `SCROLL_THRESHOLD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavBar {
    is_scrolled: bool,
}

impl NavBar {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            is_scrolled: offset > SCROLL_THRESHOLD,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn class(&self) -> &'static str {
        if self.is_scrolled {
            "bg-white shadow-lg"
        } else {
            "bg-transparent"
        }
    }

    /// Starts following `signal`. The subscription lives exactly as long as
    /// the returned value.
    pub fn mount(self, signal: &ScrollSignal) -> MountedNavBar {
        let receiver = signal.subscribe();
        let mut mounted = MountedNavBar {
            nav: self,
            receiver,
        };
        mounted.sync();
        mounted
    }
}

#[derive(Debug)]
pub struct MountedNavBar {
    nav: NavBar,
    receiver: watch::Receiver<f64>,
}

impl MountedNavBar {
    pub fn nav(&self) -> NavBar {
        self.nav
    }

    /// Recomputes from the latest offset. Returns true if the style flipped.
    pub fn sync(&mut self) -> bool {
        let offset = *self.receiver.borrow_and_update();
        let next = NavBar::at_offset(offset);
        let flipped = next != self.nav;
        self.nav = next;
        flipped
    }

    /// Waits for the next scroll event and applies it. Returns false once
    /// the signal is gone.
    pub async fn next(&mut self) -> bool {
        if self.receiver.changed().await.is_err() {
            return false;
        }
        self.sync();
        true
    }

    pub fn unmount(self) -> NavBar {
        self.nav
    }
}
