//! Movement scenarios of the built-in profiles.

use actuator_fsm::core::{Action, State};
use actuator_fsm::machine::{ApplyOutcome, StateMachine};
use actuator_fsm::profile::{builtin, ProfileId, ProfileRegistry};
use actuator_fsm::table::{ConfigError, TransitionTable};
use std::collections::HashSet;

fn machine(profile: ProfileId) -> StateMachine {
    ProfileRegistry::builtin().instantiate(&profile).unwrap()
}

/// Apply `steps` in order, asserting each is accepted into the given state.
fn walk(machine: &mut StateMachine, steps: &[(Action, State)]) {
    for (action, expected) in steps {
        assert_eq!(
            machine.apply(*action),
            ApplyOutcome::Accepted(*expected),
            "{action} from {:?}",
            machine.previous_state()
        );
    }
}

#[test]
fn absent_pairs_are_rejected_without_state_change() {
    for profile in ProfileId::BUILTIN {
        let table = ProfileRegistry::builtin().get(&profile).unwrap();
        let mut machine = machine(profile.clone());

        for state in State::ALL {
            for action in Action::ALL {
                if table.contains(*state, *action) {
                    continue;
                }
                machine.force(*state);
                let outcome = machine.apply(*action);

                assert_eq!(
                    outcome,
                    ApplyOutcome::Rejected {
                        state: *state,
                        action: *action
                    },
                    "{profile}: ({state}, {action})"
                );
                assert_eq!(machine.current_state(), *state);
            }
        }
    }
}

#[test]
fn builtin_tables_have_unique_keys() {
    for (profile, transitions) in [
        (ProfileId::Blinds, builtin::BLINDS),
        (ProfileId::Rollershutter, builtin::ROLLERSHUTTER),
    ] {
        let keys: HashSet<_> = transitions.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), transitions.len(), "{profile}");
        assert!(TransitionTable::new(profile, transitions.iter().copied()).is_ok());
    }
}

#[test]
fn duplicated_builtin_data_fails_construction() {
    let mut transitions = builtin::BLINDS.to_vec();
    transitions.push(builtin::BLINDS[3]);

    let result = TransitionTable::new(ProfileId::Blinds, transitions);
    assert!(matches!(result, Err(ConfigError::DuplicateTransitions { .. })));
}

#[test]
fn blinds_round_trip() {
    let mut blinds = machine(ProfileId::Blinds);
    walk(
        &mut blinds,
        &[
            (Action::PositionRequestUp, State::MovementPositionUp),
            (Action::PositionDone, State::PositionReached),
            (Action::SlatsPosRequest, State::MovementSlats),
            (Action::SlatsPosDone, State::Idle),
        ],
    );
    assert_eq!(
        blinds.history().get_path(),
        vec![
            State::Idle,
            State::MovementPositionUp,
            State::PositionReached,
            State::MovementSlats,
            State::Idle
        ]
    );
}

#[test]
fn blinds_position_reached_can_finish_without_slats_move() {
    let mut blinds = machine(ProfileId::Blinds);
    walk(
        &mut blinds,
        &[
            (Action::PositionRequestDown, State::MovementPositionDown),
            (Action::PositionDone, State::PositionReached),
            (Action::SlatsPosDone, State::Idle),
        ],
    );
}

#[test]
fn blinds_direct_slats_path() {
    let mut blinds = machine(ProfileId::Blinds);
    walk(
        &mut blinds,
        &[
            (Action::SlatsPosRequest, State::MovementSlats),
            (Action::SlatsPosDone, State::Idle),
        ],
    );
}

#[test]
fn rollershutter_skips_position_reached() {
    let mut shutter = machine(ProfileId::Rollershutter);
    walk(
        &mut shutter,
        &[
            (Action::PositionRequestDown, State::MovementPositionDown),
            (Action::PositionDone, State::Idle),
        ],
    );
}

#[test]
fn rollershutter_rejects_slats() {
    let mut shutter = machine(ProfileId::Rollershutter);
    assert!(shutter.apply(Action::SlatsPosRequest).is_rejected());
    assert_eq!(shutter.current_state(), State::Idle);
}

#[test]
fn calibration_recovers_both_profiles() {
    for profile in ProfileId::BUILTIN {
        let mut m = machine(profile);
        m.force(State::Invalid);
        walk(
            &mut m,
            &[
                (Action::CalibrationRequestUp, State::MovementCalibrationUp),
                (Action::CalibrationDone, State::Idle),
            ],
        );

        m.force(State::Invalid);
        walk(
            &mut m,
            &[
                (Action::CalibrationRequestDown, State::MovementCalibrationDown),
                (Action::CalibrationDone, State::Idle),
            ],
        );
    }
}

#[test]
fn calibration_is_not_available_from_idle() {
    for profile in ProfileId::BUILTIN {
        let mut m = machine(profile);
        assert!(m.apply(Action::CalibrationRequestUp).is_rejected());
        assert_eq!(m.current_state(), State::Idle);
    }
}

#[test]
fn fault_during_calibration_enters_invalid() {
    for profile in ProfileId::BUILTIN {
        let mut m = machine(profile);
        m.force(State::MovementCalibrationUp);

        let outcome = m.apply(Action::InvalidRequest);
        assert_eq!(outcome, ApplyOutcome::Accepted(State::Invalid));
        assert!(outcome.is_fault());
        assert!(m.is_faulted());
    }
}

#[test]
fn fault_during_slats_move_is_blinds_only() {
    let mut blinds = machine(ProfileId::Blinds);
    walk(
        &mut blinds,
        &[
            (Action::SlatsPosRequest, State::MovementSlats),
            (Action::InvalidRequest, State::Invalid),
        ],
    );

    let mut shutter = machine(ProfileId::Rollershutter);
    shutter.force(State::MovementSlats);
    let outcome = shutter.apply(Action::InvalidRequest);
    assert!(outcome.is_rejected());
    assert!(!outcome.is_fault());
    assert_eq!(shutter.current_state(), State::MovementSlats);
}

#[test]
fn fault_report_during_position_move_is_ignored() {
    let mut blinds = machine(ProfileId::Blinds);
    let _ = blinds.apply(Action::PositionRequestUp);

    let outcome = blinds.apply(Action::InvalidRequest);
    assert_eq!(
        outcome,
        ApplyOutcome::Rejected {
            state: State::MovementPositionUp,
            action: Action::InvalidRequest
        }
    );
    assert!(outcome.into_result().is_err());
}

#[test]
fn force_succeeds_from_every_state() {
    for profile in ProfileId::BUILTIN {
        let mut m = machine(profile);
        for from in State::ALL {
            for to in State::ALL {
                m.force(*from);
                m.force(*to);
                assert_eq!(m.current_state(), *to);
            }
        }
    }
}
