//! Actuator movement states.
//!
//! A `State` is the controller's belief about what the actuator is
//! physically doing. There is no position feedback, so the belief only
//! changes when an action is accepted by the profile's transition table or
//! when it is forced during device bring-up.

labelled_enum! {
    /// Believed movement phase of a window-covering actuator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use actuator_fsm::core::State;
    ///
    /// let state: State = "movement_slats".parse().unwrap();
    /// assert_eq!(state, State::MovementSlats);
    /// assert!(state.is_moving());
    /// assert_eq!(state.to_string(), "MOVEMENT_SLATS");
    /// ```
    pub enum State {
        /// At rest, ready for a new request.
        Idle => "IDLE",
        MovementPositionUp => "MOVEMENT_POSITION_UP",
        MovementPositionDown => "MOVEMENT_POSITION_DOWN",
        /// Position reached, slats not yet adjusted (blinds only).
        PositionReached => "POSITION_REACHED",
        MovementSlats => "MOVEMENT_SLATS",
        MovementCalibrationUp => "MOVEMENT_CALIBRATION_UP",
        MovementCalibrationDown => "MOVEMENT_CALIBRATION_DOWN",
        /// Fault state. Left only through a calibration cycle.
        Invalid => "INVALID",
    }
}

impl State {
    /// State every machine starts in.
    pub const INITIAL: State = State::Idle;

    /// Whether the actuator is believed to be moving.
    pub fn is_moving(&self) -> bool {
        matches!(
            self,
            Self::MovementPositionUp
                | Self::MovementPositionDown
                | Self::MovementSlats
                | Self::MovementCalibrationUp
                | Self::MovementCalibrationDown
        )
    }

    /// Whether a calibration run is in progress.
    pub fn is_calibrating(&self) -> bool {
        matches!(
            self,
            Self::MovementCalibrationUp | Self::MovementCalibrationDown
        )
    }

    /// Whether this is the fault state.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}
