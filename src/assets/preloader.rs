//! Asset preloading with settle-counting progress.
//!
//! Every image load and the single audio load are started together and each
//! one counts once towards completion when it reaches its first terminal
//! outcome. Failures are logged and counted like successes, so the preload
//! always converges on 100%.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::future::join_all;

use crate::assets::{
    audio::AudioRequest,
    source::{AssetSource, DecodedImage},
};
use crate::prelude::{HashMap, HashSet, Mutex};

/// Snapshot of preload progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloadState {
    pub completed_count: usize,
    pub total_count: usize,
    /// `completed_count / total_count * 100`, exactly 100 once complete.
    pub percentage: f64,
}

impl PreloadState {
    pub fn new(completed_count: usize, total_count: usize) -> Self {
        let completed_count = completed_count.min(total_count);
        let percentage = if completed_count == total_count {
            100.0
        } else {
            completed_count as f64 / total_count as f64 * 100.0
        };

        Self {
            completed_count,
            total_count,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_count == self.total_count
    }

    /// Percentage rounded for display.
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// Progress messages sent from the preload task to the UI thread.
#[derive(Debug, Clone)]
pub enum PreloadEvent {
    Progress(PreloadState),
    Complete(PreloadReport),
}

/// What the preload produced once everything settled.
#[derive(Debug, Clone)]
pub struct PreloadReport {
    pub state: PreloadState,
    /// Decoded artwork by URL, for loads that succeeded.
    pub images: HashMap<String, DecodedImage>,
    /// URLs whose load failed; the map will be drawn without them.
    pub failed: Vec<String>,
    /// Cue bytes, when the audio resource is available.
    pub audio: Option<Arc<Vec<u8>>>,
}

impl PreloadReport {
    /// Move the decoded artwork out, e.g. once it has been uploaded as
    /// textures. Counts and failures stay in the report.
    pub fn take_images(&mut self) -> HashMap<String, DecodedImage> {
        std::mem::take(&mut self.images)
    }
}

#[derive(Debug)]
struct TrackerInner {
    settled: Vec<bool>,
    completed: usize,
}

/// Counts settlements per resource slot. A slot settles at most once.
#[derive(Debug)]
pub struct PreloadTracker {
    inner: Mutex<TrackerInner>,
    total: usize,
    events: Option<Sender<PreloadEvent>>,
}

impl PreloadTracker {
    pub fn new(total: usize, events: Option<Sender<PreloadEvent>>) -> Self {
        Self {
            inner: Mutex::new(TrackerInner {
                settled: vec![false; total],
                completed: 0,
            }),
            total,
            events,
        }
    }

    /// Mark `slot` settled. Returns the new state, or `None` when the slot
    /// was already settled (or is out of range) and nothing changed.
    pub fn settle(&self, slot: usize) -> Option<PreloadState> {
        let state = {
            let mut inner = match self.inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match inner.settled.get_mut(slot) {
                Some(settled) if !*settled => *settled = true,
                _ => return None,
            }
            inner.completed += 1;
            PreloadState::new(inner.completed, self.total)
        };

        log::debug!(
            "preload {}/{} ({:.0}%)",
            state.completed_count,
            state.total_count,
            state.percentage
        );
        if let Some(events) = &self.events {
            let _ = events.send(PreloadEvent::Progress(state));
        }
        Some(state)
    }

    pub fn state(&self) -> PreloadState {
        let completed = match self.inner.lock() {
            Ok(guard) => guard.completed,
            Err(poisoned) => poisoned.into_inner().completed,
        };
        PreloadState::new(completed, self.total)
    }
}

/// Loads every layer image plus the hover cue and reports progress.
pub struct AssetPreloader<S: AssetSource> {
    source: Arc<S>,
    events: Option<Sender<PreloadEvent>>,
}

impl<S: AssetSource> AssetPreloader<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            events: None,
        }
    }

    /// Create the progress channel. Events sent before the receiver is read
    /// are buffered.
    pub fn subscribe(&mut self) -> Receiver<PreloadEvent> {
        let (tx, rx) = unbounded();
        self.events = Some(tx);
        rx
    }

    /// Load everything and wait for every resource to settle.
    ///
    /// Duplicate URLs are fetched once. The audio slot is always part of the
    /// total; when there is no audio element it settles straight away, so an
    /// empty image list completes immediately.
    pub async fn run(&self, image_urls: Vec<String>, audio: AudioRequest) -> PreloadReport {
        let mut seen = HashSet::default();
        let urls: Vec<String> = image_urls
            .into_iter()
            .filter(|url| seen.insert(url.clone()))
            .collect();

        let audio_slot = urls.len();
        let tracker = PreloadTracker::new(urls.len() + 1, self.events.clone());
        log::info!("preloading {} images and the hover cue", urls.len());

        let tracker = &tracker;
        let source = self.source.as_ref();

        let audio_load = async move {
            let data = match audio {
                AudioRequest::Absent => None,
                AudioRequest::Buffered(data) => Some(data),
                AudioRequest::Remote(url) => match source.load_audio(&url).await {
                    Ok(data) => Some(data),
                    Err(e) => {
                        log::error!("Failed to preload audio {}: {}", url, e);
                        None
                    }
                },
            };
            tracker.settle(audio_slot);
            data
        };

        let image_loads = urls.iter().enumerate().map(|(slot, url)| async move {
            let result = source.load_image(url).await;
            if let Err(e) = &result {
                log::error!("Failed to load image {}: {}", url, e);
            }
            tracker.settle(slot);
            (url.clone(), result.ok())
        });

        let (audio, images) = futures::join!(audio_load, join_all(image_loads));

        let mut loaded = HashMap::default();
        let mut failed = Vec::new();
        for (url, image) in images {
            match image {
                Some(image) => {
                    loaded.insert(url, image);
                }
                None => failed.push(url),
            }
        }

        let report = PreloadReport {
            state: tracker.state(),
            images: loaded,
            failed,
            audio,
        };

        if !report.failed.is_empty() {
            log::warn!(
                "{} of {} images failed to load",
                report.failed.len(),
                urls.len()
            );
        }
        if let Some(events) = &self.events {
            let _ = events.send(PreloadEvent::Complete(report.clone()));
        }
        report
    }
}

#[cfg(feature = "tokio-runtime")]
impl<S: AssetSource + 'static> AssetPreloader<S> {
    /// Run the preload on the async runtime; progress arrives on the
    /// returned channel, ending with [`PreloadEvent::Complete`].
    pub fn start(
        mut self,
        image_urls: Vec<String>,
        audio: AudioRequest,
    ) -> (Receiver<PreloadEvent>, Box<dyn crate::runtime::AsyncHandle>) {
        let rx = self.subscribe();
        let handle = crate::runtime::spawn(async move {
            self.run(image_urls, audio).await;
        });
        (rx, handle)
    }
}
