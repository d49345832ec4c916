//! Runs a [`ScrollMapSynchronizer`] as a tokio task.
//!
//! The task is subscribed once, at construction, to a single event channel;
//! scroll offsets and list replacements flow through it and camera moves come
//! out on the [`MapSurface`].

use crate::places::model::Place;
use crate::runtime::{self, AsyncHandle};
use crate::sync::synchronizer::ScrollMapSynchronizer;
use crate::sync::MapSurface;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub enum SyncEvent {
    Scroll(f64),
    Places(Vec<Place>),
}

/// Handle to the running synchronizer task. Dropping it stops the task.
pub struct SyncDriver {
    tx: UnboundedSender<SyncEvent>,
    handle: Box<dyn AsyncHandle>,
}

impl SyncDriver {
    /// Spawns the synchronizer loop on the current tokio runtime.
    pub fn spawn<S>(sync: ScrollMapSynchronizer, surface: S) -> Self
    where
        S: MapSurface + Send + 'static,
    {
        let (tx, rx) = unbounded_channel();
        let handle = runtime::spawn(run(sync, surface, rx));
        Self { tx, handle }
    }

    /// Feeds a scroll offset. Returns `false` once the task has stopped.
    pub fn scroll(&self, x: f64) -> bool {
        self.tx.send(SyncEvent::Scroll(x)).is_ok()
    }

    pub fn set_places(&self, places: Vec<Place>) -> bool {
        self.tx.send(SyncEvent::Places(places)).is_ok()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        self.handle.cancel();
    }
}

impl Drop for SyncDriver {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

async fn run<S>(
    mut sync: ScrollMapSynchronizer,
    mut surface: S,
    mut rx: UnboundedReceiver<SyncEvent>,
) where
    S: MapSurface,
{
    loop {
        let deadline = sync.next_deadline().map(Instant::from_std);
        tokio::select! {
            event = rx.recv() => match event {
                Some(SyncEvent::Scroll(x)) => sync.on_scroll(x, Instant::now().into_std()),
                Some(SyncEvent::Places(places)) => sync.set_places(&places),
                None => break,
            },
            _ = sleep_until(deadline), if deadline.is_some() => {
                if let Some(camera) = sync.poll(Instant::now().into_std()) {
                    surface.animate_to_region(camera.region, camera.duration);
                }
            }
        }
    }
    log::debug!("scroll synchronizer stopped");
}

async fn sleep_until(deadline: Option<Instant>) {
    if let Some(deadline) = deadline {
        tokio::time::sleep_until(deadline).await;
    }
}
