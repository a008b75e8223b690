use crate::modules::attendance::core::vacation_request::{VacationRequest, VacationStatus};
use crate::modules::attendance::use_cases::update_vacation_status::{
    command::{UpdateVacationStatus, VacationAction},
    decision::{DecideError, Decision},
};

pub fn decide_transition(request: &VacationRequest, command: &UpdateVacationStatus) -> Decision {
    let next = match command.action {
        VacationAction::Approve | VacationAction::Reject => {
            if !command.actor.is_admin() {
                return Decision::Rejected {
                    reason: DecideError::AdminOnly,
                };
            }
            if request.status != VacationStatus::Pending {
                return Decision::Rejected {
                    reason: DecideError::NotPending {
                        status: request.status,
                    },
                };
            }
            if command.action == VacationAction::Approve {
                VacationStatus::Approved
            } else {
                VacationStatus::Rejected
            }
        }
        VacationAction::Cancel => {
            if !command.actor.can_act_for(&request.user_id) {
                return Decision::Rejected {
                    reason: DecideError::NotOwner,
                };
            }
            if matches!(
                request.status,
                VacationStatus::Cancelled | VacationStatus::Rejected
            ) {
                return Decision::Rejected {
                    reason: DecideError::AlreadyClosed {
                        status: request.status,
                    },
                };
            }
            VacationStatus::Cancelled
        }
    };

    Decision::Accepted {
        request: VacationRequest {
            status: next,
            updated_at: command.updated_at,
            ..request.clone()
        },
    }
}
