//! Timed overlays and the damage flash
//!
//! An overlay is a full-screen message that forces the game into an
//! auto-pause until its expiry timestamp passes. Only one can be active;
//! while it is, the manual pause key does nothing. What should happen when it
//! expires is stored as a [`PendingAction`] that the caller applies after the
//! overlay has already returned to idle.
//!
//! The flash is independent: a red tint whose opacity is derived from the
//! current timestamp, so it needs no timer of its own.

use serde::{Deserialize, Serialize};

use super::state::RuntimeState;
use crate::consts::FLASH_MAX_ALPHA;
use crate::error::OverlayError;

/// Deferred work to run once an overlay expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// Full reset: lives, score, level index, cars
    ResetGame,
}

/// Active overlay message, if any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    message: Option<String>,
    /// Timestamp (ms) at which the overlay ends
    expires_at: f64,
    /// True while the pause is imposed by this overlay rather than the player
    auto_pause: bool,
    pending: Option<PendingAction>,
}

impl OverlayState {
    /// Idle means no overlay; the game runs subject to manual pause
    pub fn is_idle(&self) -> bool {
        !self.auto_pause
    }

    pub fn auto_pause(&self) -> bool {
        self.auto_pause
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expires_at(&self) -> f64 {
        self.expires_at
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Show `text` for `duration_ms` and pause the game.
    ///
    /// Rejected while another overlay is showing; the active one keeps running.
    pub fn begin(
        &mut self,
        runtime: &mut RuntimeState,
        text: &str,
        duration_ms: f64,
        now: f64,
        pending: Option<PendingAction>,
    ) -> Result<(), OverlayError> {
        if self.auto_pause {
            return Err(OverlayError::Busy {
                active: self.message.clone().unwrap_or_default(),
                requested: text.to_string(),
            });
        }

        self.message = Some(text.to_string());
        self.expires_at = now + duration_ms;
        self.auto_pause = true;
        self.pending = pending;
        runtime.paused = true;
        Ok(())
    }

    /// Expire the overlay if its time is up.
    ///
    /// On expiry the overlay is idle and the game unpaused before the pending
    /// action is handed back, so applying it may start another overlay.
    pub fn update(&mut self, runtime: &mut RuntimeState, now: f64) -> Option<PendingAction> {
        if !self.auto_pause || now < self.expires_at {
            return None;
        }

        let pending = self.pending.take();
        self.message = None;
        self.auto_pause = false;
        runtime.paused = false;
        pending
    }

    /// Flip the manual pause. Does nothing while an overlay is showing.
    /// Returns whether the toggle took effect.
    pub fn toggle_manual_pause(&self, runtime: &mut RuntimeState) -> bool {
        if self.auto_pause {
            return false;
        }
        runtime.paused = !runtime.paused;
        true
    }
}

/// Decaying red screen tint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    expires_at: f64,
    duration_ms: f64,
}

impl Flash {
    /// Start (or restart) the flash
    pub fn trigger(&mut self, now: f64, duration_ms: f64) {
        self.expires_at = now + duration_ms;
        self.duration_ms = duration_ms;
    }

    /// Opacity at `now`: falls linearly from the peak to 0 over the duration
    pub fn alpha(&self, now: f64) -> f32 {
        if self.duration_ms <= 0.0 || now >= self.expires_at {
            return 0.0;
        }
        let remaining = ((self.expires_at - now) / self.duration_ms).min(1.0);
        FLASH_MAX_ALPHA * remaining as f32
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.alpha(now) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_pauses_and_expires() {
        let mut overlay = OverlayState::default();
        let mut runtime = RuntimeState::default();

        overlay
            .begin(&mut runtime, "NEXT LEVEL", 900.0, 1000.0, None)
            .unwrap();
        assert!(runtime.paused);
        assert!(overlay.auto_pause());
        assert_eq!(overlay.message(), Some("NEXT LEVEL"));

        assert_eq!(overlay.update(&mut runtime, 1899.0), None);
        assert!(runtime.paused);

        assert_eq!(overlay.update(&mut runtime, 1900.0), None);
        assert!(!runtime.paused);
        assert!(overlay.is_idle());
        assert_eq!(overlay.message(), None);
    }

    #[test]
    fn test_pending_action_returned_once() {
        let mut overlay = OverlayState::default();
        let mut runtime = RuntimeState::default();
        overlay
            .begin(
                &mut runtime,
                "GAME OVER",
                1400.0,
                0.0,
                Some(PendingAction::ResetGame),
            )
            .unwrap();

        assert_eq!(
            overlay.update(&mut runtime, 1400.0),
            Some(PendingAction::ResetGame)
        );
        assert_eq!(overlay.update(&mut runtime, 1500.0), None);
        assert_eq!(overlay.pending(), None);
    }

    #[test]
    fn test_second_overlay_rejected() {
        let mut overlay = OverlayState::default();
        let mut runtime = RuntimeState::default();
        overlay
            .begin(
                &mut runtime,
                "GAME OVER",
                1400.0,
                0.0,
                Some(PendingAction::ResetGame),
            )
            .unwrap();

        let err = overlay
            .begin(&mut runtime, "NEXT LEVEL", 900.0, 10.0, None)
            .unwrap_err();
        assert_eq!(
            err,
            OverlayError::Busy {
                active: "GAME OVER".into(),
                requested: "NEXT LEVEL".into()
            }
        );
        assert_eq!(overlay.message(), Some("GAME OVER"));
        assert_eq!(overlay.expires_at(), 1400.0);
        assert_eq!(overlay.pending(), Some(PendingAction::ResetGame));
    }

    #[test]
    fn test_overlay_can_begin_again_after_expiry() {
        let mut overlay = OverlayState::default();
        let mut runtime = RuntimeState::default();
        overlay.begin(&mut runtime, "A", 100.0, 0.0, None).unwrap();
        overlay.update(&mut runtime, 100.0);
        assert!(overlay.begin(&mut runtime, "B", 100.0, 100.0, None).is_ok());
    }

    #[test]
    fn test_manual_pause_suppressed_during_overlay() {
        let mut overlay = OverlayState::default();
        let mut runtime = RuntimeState::default();

        assert!(overlay.toggle_manual_pause(&mut runtime));
        assert!(runtime.paused);
        assert!(overlay.toggle_manual_pause(&mut runtime));
        assert!(!runtime.paused);

        overlay.begin(&mut runtime, "NEXT LEVEL", 900.0, 0.0, None).unwrap();
        assert!(!overlay.toggle_manual_pause(&mut runtime));
        assert!(runtime.paused);
    }

    #[test]
    fn test_flash_decays_linearly() {
        let mut flash = Flash::default();
        assert_eq!(flash.alpha(0.0), 0.0);

        flash.trigger(1000.0, 180.0);
        assert!((flash.alpha(1000.0) - 0.5).abs() < 1e-6);
        assert!((flash.alpha(1090.0) - 0.25).abs() < 1e-6);
        assert_eq!(flash.alpha(1180.0), 0.0);
        assert!(!flash.is_active(2000.0));
    }
}
