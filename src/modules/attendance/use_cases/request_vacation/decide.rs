use crate::modules::attendance::core::vacation_request::{VacationRequest, VacationStatus};
use crate::modules::attendance::use_cases::request_vacation::{
    command::RequestVacation,
    decision::{DecideError, Decision},
};

pub fn decide_request(command: RequestVacation) -> Decision {
    if !command.actor.can_act_for(&command.user_id) {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    }
    if command.start_date > command.end_date {
        return Decision::Rejected {
            reason: DecideError::InvalidRange {
                start: command.start_date,
                end: command.end_date,
            },
        };
    }
    Decision::Accepted {
        request: VacationRequest {
            id: command.request_id,
            user_id: command.user_id,
            start_date: command.start_date,
            end_date: command.end_date,
            status: VacationStatus::Pending,
            created_at: command.requested_at,
            updated_at: command.requested_at,
        },
    }
}

#[cfg(test)]
mod request_vacation_decide_tests {
    use super::*;
    use crate::modules::attendance::core::actor::{Actor, Role};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn on(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, day).expect("valid date")
    }

    #[fixture]
    fn request_command() -> RequestVacation {
        RequestVacation {
            request_id: "vr-fixed-0001".into(),
            actor: Actor::new("user-fixed-0001", Role::Employee),
            user_id: "user-fixed-0001".into(),
            start_date: on(11),
            end_date: on(20),
            requested_at: Utc
                .with_ymd_and_hms(2025, 7, 1, 9, 0, 0)
                .single()
                .expect("valid instant"),
        }
    }

    #[rstest]
    fn it_should_decide_to_open_a_pending_request(request_command: RequestVacation) {
        match decide_request(request_command) {
            Decision::Accepted { request } => {
                assert_eq!(request.status, VacationStatus::Pending);
                assert_eq!(request.start_date, on(11));
                assert_eq!(request.created_at, request.updated_at);
            }
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    #[rstest]
    fn it_should_accept_a_single_day(request_command: RequestVacation) {
        let command = RequestVacation {
            end_date: on(11),
            ..request_command
        };
        assert!(matches!(decide_request(command), Decision::Accepted { .. }));
    }

    #[rstest]
    fn it_should_decide_that_an_inverted_range_is_invalid(request_command: RequestVacation) {
        let command = RequestVacation {
            start_date: on(20),
            end_date: on(11),
            ..request_command
        };
        assert!(matches!(
            decide_request(command),
            Decision::Rejected {
                reason: DecideError::InvalidRange { .. }
            }
        ));
    }

    #[rstest]
    fn it_should_decide_that_another_employee_is_forbidden(request_command: RequestVacation) {
        let command = RequestVacation {
            actor: Actor::new("user-fixed-0002", Role::Employee),
            ..request_command
        };
        assert!(matches!(
            decide_request(command),
            Decision::Rejected {
                reason: DecideError::Forbidden
            }
        ));
    }
}
