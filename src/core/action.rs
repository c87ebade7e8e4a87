//! Inputs to the actuator state machine.

labelled_enum! {
    /// An outbound request or an inbound device report.
    ///
    /// Both directions are treated uniformly as input to the machine: the
    /// command path feeds `*_REQUEST` actions, the telemetry path feeds
    /// `*_DONE` confirmations and `INVALID_REQUEST` fault reports.
    pub enum Action {
        PositionRequestUp => "POSITION_REQUEST_UP",
        PositionRequestDown => "POSITION_REQUEST_DOWN",
        PositionDone => "POSITION_DONE",
        SlatsPosRequest => "SLATS_POS_REQUEST",
        SlatsPosDone => "SLATS_POS_DONE",
        CalibrationRequestUp => "CALIBRATION_REQUEST_UP",
        CalibrationRequestDown => "CALIBRATION_REQUEST_DOWN",
        CalibrationDone => "CALIBRATION_DONE",
        /// Interrupted or erroneous movement reported by the device.
        InvalidRequest => "INVALID_REQUEST",
    }
}

impl Action {
    /// Whether this action asks the actuator to start moving.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::PositionRequestUp
                | Self::PositionRequestDown
                | Self::SlatsPosRequest
                | Self::CalibrationRequestUp
                | Self::CalibrationRequestDown
        )
    }

    /// Whether this action confirms that a movement finished.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::PositionDone | Self::SlatsPosDone | Self::CalibrationDone
        )
    }

    /// Whether this action reports a fault.
    pub fn is_fault_report(&self) -> bool {
        matches!(self, Self::InvalidRequest)
    }
}
