//! Narration transport
//!
//! [`MediaElement`] is an in-process playback clock over one scene's
//! narration timeline. It emits [`MediaEvent`]s to whoever subscribed through
//! its listener registry. [`AudioPlayer`] is the view-side state: it mounts
//! one subscription per event kind and mirrors the transport from the events
//! it receives. A new `AudioPlayer` is mounted for every scene; dropping the
//! old one releases its subscriptions, so listeners never pile up.

use vibeparse_core::{ListenerId, ListenerRegistry, Subscription};

/// Events a media element emits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata { duration: f64 },
    TimeUpdate { position: f64 },
    Ended,
}

impl MediaEvent {
    pub fn kind(&self) -> MediaEventKind {
        match self {
            MediaEvent::LoadedMetadata { .. } => MediaEventKind::LoadedMetadata,
            MediaEvent::TimeUpdate { .. } => MediaEventKind::TimeUpdate,
            MediaEvent::Ended => MediaEventKind::Ended,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEventKind {
    LoadedMetadata,
    TimeUpdate,
    Ended,
}

/// Listener record: which event, for which scene's player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaListener {
    pub kind: MediaEventKind,
    pub scene: usize,
}

/// One event delivered to one listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaDelivery {
    pub listener: ListenerId,
    pub scene: usize,
    pub event: MediaEvent,
}

/// Playback clock
#[derive(Debug, Default)]
pub struct MediaElement {
    duration: f64,
    position: f64,
    playing: bool,
    ended: bool,
    listeners: ListenerRegistry<MediaListener>,
}

impl MediaElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listeners(&self) -> &ListenerRegistry<MediaListener> {
        &self.listeners
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Load a new timeline, paused at zero
    pub fn load(&mut self, duration: f64) -> Vec<MediaDelivery> {
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        self.position = 0.0;
        self.playing = false;
        self.ended = false;
        self.emit(MediaEvent::LoadedMetadata {
            duration: self.duration,
        })
    }

    /// Play/pause. Playing a finished timeline restarts it.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.playing = false;
        } else {
            if self.ended || self.position >= self.duration {
                self.position = 0.0;
                self.ended = false;
            }
            self.playing = self.duration > 0.0;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Move to `t`, clamped to `[0, duration]`
    pub fn seek(&mut self, t: f64) -> Vec<MediaDelivery> {
        let t = if t.is_nan() { 0.0 } else { t };
        self.position = t.clamp(0.0, self.duration);
        if self.position < self.duration {
            self.ended = false;
        }
        self.emit(MediaEvent::TimeUpdate {
            position: self.position,
        })
    }

    /// Advance the clock by `dt` seconds while playing
    ///
    /// Emits a time update, plus `Ended` exactly once when the end is reached.
    pub fn advance(&mut self, dt: f64) -> Vec<MediaDelivery> {
        if !self.playing || dt.is_nan() || dt <= 0.0 {
            return Vec::new();
        }
        self.position = (self.position + dt).min(self.duration);
        let mut out = self.emit(MediaEvent::TimeUpdate {
            position: self.position,
        });
        if self.position >= self.duration && !self.ended {
            self.ended = true;
            self.playing = false;
            out.extend(self.emit(MediaEvent::Ended));
        }
        out
    }

    fn emit(&self, event: MediaEvent) -> Vec<MediaDelivery> {
        self.listeners
            .snapshot()
            .into_iter()
            .filter(|(_, listener)| listener.kind == event.kind())
            .map(|(listener, record)| MediaDelivery {
                listener,
                scene: record.scene,
                event,
            })
            .collect()
    }
}

/// View-side transport state for the current scene
#[derive(Debug)]
pub struct AudioPlayer {
    scene: usize,
    pub duration: f64,
    pub position: f64,
    pub playing: bool,
    /// The narration reached its end at least once
    pub finished: bool,
    _subscriptions: Vec<Subscription<MediaListener>>,
}

impl AudioPlayer {
    /// Subscribe to `media` on behalf of `scene`
    pub fn mount(media: &MediaElement, scene: usize) -> Self {
        let subscriptions = [
            MediaEventKind::LoadedMetadata,
            MediaEventKind::TimeUpdate,
            MediaEventKind::Ended,
        ]
        .into_iter()
        .map(|kind| media.listeners().subscribe(MediaListener { kind, scene }))
        .collect();

        Self {
            scene,
            duration: 0.0,
            position: 0.0,
            playing: false,
            finished: false,
            _subscriptions: subscriptions,
        }
    }

    pub fn scene(&self) -> usize {
        self.scene
    }

    /// Apply a delivered event; deliveries for another scene are ignored
    pub fn handle(&mut self, delivery: &MediaDelivery) {
        if delivery.scene != self.scene {
            return;
        }
        match delivery.event {
            MediaEvent::LoadedMetadata { duration } => self.duration = duration,
            MediaEvent::TimeUpdate { position } => self.position = position,
            MediaEvent::Ended => {
                self.playing = false;
                self.finished = true;
            }
        }
    }

    /// `m:ss / m:ss`
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.position),
            format_time(self.duration)
        )
    }

    /// Position as a fraction of the duration
    pub fn ratio(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(duration: f64) -> (MediaElement, AudioPlayer) {
        let mut media = MediaElement::new();
        let mut player = AudioPlayer::mount(&media, 0);
        for d in media.load(duration) {
            player.handle(&d);
        }
        (media, player)
    }

    #[test]
    fn test_mount_subscribes_per_event_kind() {
        let (media, player) = mounted(10.0);
        assert_eq!(media.listeners().len(), 3);
        assert_eq!(player.duration, 10.0);
        drop(player);
        assert!(media.listeners().is_empty());
    }

    #[test]
    fn test_remount_does_not_accumulate() {
        let mut media = MediaElement::new();
        let mut player = AudioPlayer::mount(&media, 0);
        for scene in 1..5 {
            player = AudioPlayer::mount(&media, scene);
            let _ = media.load(5.0);
        }
        assert_eq!(media.listeners().len(), 3);
        assert_eq!(player.scene(), 4);
    }

    #[test]
    fn test_seek_clamps() {
        let (mut media, mut player) = mounted(10.0);
        for d in media.seek(25.0) {
            player.handle(&d);
        }
        assert_eq!(player.position, 10.0);
        for d in media.seek(-3.0) {
            player.handle(&d);
        }
        assert_eq!(player.position, 0.0);
    }

    #[test]
    fn test_advance_only_while_playing() {
        let (mut media, _player) = mounted(10.0);
        assert!(media.advance(1.0).is_empty());
        assert!(media.toggle());
        let deliveries = media.advance(1.5);
        assert_eq!(deliveries.len(), 1);
        assert_eq!(media.position(), 1.5);
    }

    #[test]
    fn test_ended_fires_once() {
        let (mut media, mut player) = mounted(2.0);
        media.toggle();

        let mut ended = 0;
        for _ in 0..5 {
            for d in media.advance(1.0) {
                if d.event == MediaEvent::Ended {
                    ended += 1;
                }
                player.handle(&d);
            }
        }
        assert_eq!(ended, 1);
        assert!(player.finished);
        assert!(!player.playing);
        assert!(!media.is_playing());
    }

    #[test]
    fn test_toggle_after_end_restarts() {
        let (mut media, _player) = mounted(1.0);
        media.toggle();
        let _ = media.advance(2.0);
        assert!(media.toggle());
        assert_eq!(media.position(), 0.0);
    }

    #[test]
    fn test_zero_duration_never_plays() {
        let (mut media, _player) = mounted(0.0);
        assert!(!media.toggle());
    }

    #[test]
    fn test_stale_scene_delivery_ignored() {
        let media = MediaElement::new();
        let mut player = AudioPlayer::mount(&media, 2);
        player.handle(&MediaDelivery {
            listener: media.listeners().snapshot()[0].0,
            scene: 1,
            event: MediaEvent::LoadedMetadata { duration: 99.0 },
        });
        assert_eq!(player.duration, 0.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
