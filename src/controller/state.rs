//! Send lifecycle of the popup.
//!
//! Two states, one transition each way, and a single-flight guard: a send
//! holds a [`FlightGuard`] for its whole duration, and dropping the guard
//! is the only way back to `Idle`, so every exit path restores it.

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// Mutex-backed single-flight flag.
pub(crate) struct SingleFlight {
    state: Mutex<SendState>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SendState::Idle),
        }
    }

    pub fn current(&self) -> SendState {
        *self.state.lock()
    }

    /// Attempts the Idle → Sending transition. Returns `None` while a
    /// send is already in flight.
    pub fn begin(&self) -> Option<FlightGuard<'_>> {
        let mut state = self.state.lock();
        match *state {
            SendState::Sending => None,
            SendState::Idle => {
                *state = SendState::Sending;
                Some(FlightGuard { flight: self })
            }
        }
    }
}

pub(crate) struct FlightGuard<'a> {
    flight: &'a SingleFlight,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self.flight.state.lock() = SendState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight_transitions() {
        let flight = SingleFlight::new();
        assert_eq!(flight.current(), SendState::Idle);

        let guard = flight.begin().unwrap();
        assert_eq!(flight.current(), SendState::Sending);
        assert!(flight.begin().is_none(), "second begin must be refused");

        drop(guard);
        assert_eq!(flight.current(), SendState::Idle);
        assert!(flight.begin().is_some());
    }
}
