//! Cart overlay open/close state machine.
//!
//! Two states, three events, no blocked transitions: the cart icon
//! toggles, the back-arrow close control and clicks outside the widget
//! both force the overlay closed. Both states are freely re-entrant.

/// Visibility of the cart overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// UI events that drive the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Click on the cart icon.
    IconClick,
    /// Click on the explicit close control.
    CloseControl,
    /// Click anywhere outside both the cart icon and the overlay.
    OutsideClick,
}

impl OverlayState {
    /// Apply one event and return the resulting state.
    #[must_use]
    pub const fn apply(self, event: OverlayEvent) -> Self {
        match event {
            OverlayEvent::IconClick => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            OverlayEvent::CloseControl | OverlayEvent::OutsideClick => Self::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_click_toggles() {
        let state = OverlayState::Closed;
        let state = state.apply(OverlayEvent::IconClick);
        assert_eq!(state, OverlayState::Open);
        let state = state.apply(OverlayEvent::IconClick);
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn test_close_events_force_closed() {
        assert_eq!(
            OverlayState::Open.apply(OverlayEvent::CloseControl),
            OverlayState::Closed
        );
        assert_eq!(
            OverlayState::Open.apply(OverlayEvent::OutsideClick),
            OverlayState::Closed
        );
    }

    #[test]
    fn test_close_is_reentrant() {
        assert_eq!(
            OverlayState::Closed.apply(OverlayEvent::OutsideClick),
            OverlayState::Closed
        );
        assert_eq!(
            OverlayState::Closed.apply(OverlayEvent::CloseControl),
            OverlayState::Closed
        );
    }
}
