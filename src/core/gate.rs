//! Entry gate: keeps the map hidden until every asset has settled.
//!
//! The gate is driven by explicit instants so the UI loop (and tests) decide
//! when time advances. `Entered` is terminal for the session.

use std::time::Duration;

use crate::core::config::GateMode;
use crate::prelude::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryGateState {
    Loading,
    ReadyToEnter,
    Entered,
}

#[derive(Debug, Clone)]
pub struct EntryGate {
    mode: GateMode,
    fade_in: Duration,
    state: EntryGateState,
    /// When preload reached 100%; the ready delay counts from here.
    completed_at: Option<Instant>,
    entered_at: Option<Instant>,
}

impl EntryGate {
    pub fn new(mode: GateMode, fade_in: Duration) -> Self {
        Self {
            mode,
            fade_in,
            state: EntryGateState::Loading,
            completed_at: None,
            entered_at: None,
        }
    }

    pub fn state(&self) -> EntryGateState {
        self.state
    }

    pub fn mode(&self) -> GateMode {
        self.mode
    }

    /// Whether the loading screen should be drawn instead of the map.
    pub fn shows_loading_screen(&self) -> bool {
        self.state != EntryGateState::Entered
    }

    /// Feed the latest preload percentage. Reaching 100 starts the delay;
    /// later calls are ignored.
    pub fn on_progress(&mut self, percentage: f64, now: Instant) {
        if self.completed_at.is_none() && percentage >= 100.0 {
            log::debug!("preload complete, gate delay started");
            self.completed_at = Some(now);
        }
    }

    /// Advance delay-driven transitions. Returns true when the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != EntryGateState::Loading {
            return false;
        }
        let Some(completed_at) = self.completed_at else {
            return false;
        };
        if now.saturating_duration_since(completed_at) < self.mode.delay() {
            return false;
        }

        match self.mode {
            GateMode::ClickToEnter { .. } => {
                log::info!("assets ready, waiting for visitor to enter");
                self.state = EntryGateState::ReadyToEnter;
            }
            GateMode::AutoEnter { .. } => {
                log::info!("assets ready, entering map");
                self.state = EntryGateState::Entered;
                self.entered_at = Some(now);
            }
        }
        true
    }

    /// Time left before the next delay-driven transition, if one is pending.
    pub fn time_until_transition(&self, now: Instant) -> Option<Duration> {
        if self.state != EntryGateState::Loading {
            return None;
        }
        let completed_at = self.completed_at?;
        Some(
            self.mode
                .delay()
                .saturating_sub(now.saturating_duration_since(completed_at)),
        )
    }

    /// Visitor dismissed the loading screen. Only honoured in `ReadyToEnter`.
    pub fn enter(&mut self, now: Instant) -> bool {
        if self.state != EntryGateState::ReadyToEnter {
            return false;
        }
        self.state = EntryGateState::Entered;
        self.entered_at = Some(now);
        log::info!("visitor entered the map");
        true
    }

    /// Map opacity in `[0, 1]`; ramps linearly over the fade-in duration.
    pub fn fade_alpha(&self, now: Instant) -> f32 {
        let Some(entered_at) = self.entered_at else {
            return 0.0;
        };
        if self.fade_in.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(entered_at);
        (elapsed.as_secs_f32() / self.fade_in.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_fading(&self, now: Instant) -> bool {
        self.state == EntryGateState::Entered && self.fade_alpha(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_gate() -> EntryGate {
        EntryGate::new(
            GateMode::ClickToEnter { ready_delay_ms: 500 },
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn test_click_to_enter_sequence() {
        let start = Instant::now();
        let mut gate = click_gate();

        gate.on_progress(50.0, start);
        assert!(!gate.tick(start + Duration::from_secs(5)));
        assert_eq!(gate.state(), EntryGateState::Loading);

        gate.on_progress(100.0, start);
        assert!(!gate.tick(start + Duration::from_millis(499)));
        assert_eq!(gate.state(), EntryGateState::Loading);

        assert!(gate.tick(start + Duration::from_millis(500)));
        assert_eq!(gate.state(), EntryGateState::ReadyToEnter);
        assert!(gate.shows_loading_screen());

        assert!(gate.enter(start + Duration::from_millis(600)));
        assert_eq!(gate.state(), EntryGateState::Entered);
        assert!(!gate.shows_loading_screen());
    }

    #[test]
    fn test_enter_ignored_while_loading() {
        let mut gate = click_gate();
        assert!(!gate.enter(Instant::now()));
        assert_eq!(gate.state(), EntryGateState::Loading);
    }

    #[test]
    fn test_auto_enter_skips_ready_state() {
        let start = Instant::now();
        let mut gate = EntryGate::new(GateMode::AutoEnter { delay_ms: 500 }, Duration::ZERO);

        gate.on_progress(100.0, start);
        assert!(gate.tick(start + Duration::from_millis(500)));
        assert_eq!(gate.state(), EntryGateState::Entered);
        assert_eq!(gate.fade_alpha(start + Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn test_entered_is_terminal() {
        let start = Instant::now();
        let mut gate = click_gate();
        gate.on_progress(100.0, start);
        gate.tick(start + Duration::from_secs(1));
        gate.enter(start + Duration::from_secs(1));

        assert!(!gate.tick(start + Duration::from_secs(10)));
        assert!(!gate.enter(start + Duration::from_secs(10)));
        assert_eq!(gate.state(), EntryGateState::Entered);
    }

    #[test]
    fn test_fade_ramps_over_duration() {
        let start = Instant::now();
        let mut gate = click_gate();
        gate.on_progress(100.0, start);
        gate.tick(start + Duration::from_millis(500));
        gate.enter(start + Duration::from_millis(500));

        let half = gate.fade_alpha(start + Duration::from_millis(1000));
        assert!((half - 0.5).abs() < 1e-3);
        assert!(gate.is_fading(start + Duration::from_millis(1000)));
        assert_eq!(gate.fade_alpha(start + Duration::from_millis(2000)), 1.0);
    }

    #[test]
    fn test_time_until_transition() {
        let start = Instant::now();
        let mut gate = click_gate();
        assert!(gate.time_until_transition(start).is_none());

        gate.on_progress(100.0, start);
        assert_eq!(
            gate.time_until_transition(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
    }
}
