//! Transition data of the built-in profiles.
//!
//! Blinds pass through `POSITION_REACHED` after a position move so that the
//! slats can be set afterwards. Rollershutters have no slats and go straight
//! back to `IDLE`. Both recover from `INVALID` only through calibration.

use crate::core::Action::*;
use crate::core::State::*;
use crate::table::Transition;

pub const BLINDS: &[Transition] = &[
    Transition::new(Idle, PositionRequestUp, MovementPositionUp),
    Transition::new(Idle, PositionRequestDown, MovementPositionDown),
    Transition::new(Idle, SlatsPosRequest, MovementSlats),
    Transition::new(MovementPositionUp, PositionDone, PositionReached),
    Transition::new(MovementPositionDown, PositionDone, PositionReached),
    Transition::new(PositionReached, SlatsPosRequest, MovementSlats),
    Transition::new(MovementSlats, SlatsPosDone, Idle),
    Transition::new(PositionReached, SlatsPosDone, Idle),
    Transition::new(Invalid, CalibrationRequestUp, MovementCalibrationUp),
    Transition::new(Invalid, CalibrationRequestDown, MovementCalibrationDown),
    Transition::new(MovementCalibrationUp, CalibrationDone, Idle),
    Transition::new(MovementCalibrationDown, CalibrationDone, Idle),
    Transition::new(MovementCalibrationUp, InvalidRequest, Invalid),
    Transition::new(MovementCalibrationDown, InvalidRequest, Invalid),
    Transition::new(MovementSlats, InvalidRequest, Invalid),
];

pub const ROLLERSHUTTER: &[Transition] = &[
    Transition::new(Idle, PositionRequestUp, MovementPositionUp),
    Transition::new(Idle, PositionRequestDown, MovementPositionDown),
    Transition::new(MovementPositionUp, PositionDone, Idle),
    Transition::new(MovementPositionDown, PositionDone, Idle),
    Transition::new(Invalid, CalibrationRequestUp, MovementCalibrationUp),
    Transition::new(Invalid, CalibrationRequestDown, MovementCalibrationDown),
    Transition::new(MovementCalibrationUp, CalibrationDone, Idle),
    Transition::new(MovementCalibrationDown, CalibrationDone, Idle),
    Transition::new(MovementCalibrationUp, InvalidRequest, Invalid),
    Transition::new(MovementCalibrationDown, InvalidRequest, Invalid),
];
