use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::attendance_records_in_memory::InMemoryAttendanceRecords;
use crate::modules::attendance::adapters::outbound::monthly_closures_in_memory::InMemoryMonthlyClosures;
use crate::modules::attendance::adapters::outbound::vacation_requests_in_memory::InMemoryVacationRequests;
use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::use_cases::get_attendance_records::handler::GetAttendanceRecordsHandler;
use crate::modules::attendance::use_cases::list_month_closures::handler::ListMonthClosuresHandler;
use crate::modules::attendance::use_cases::list_vacation_requests::handler::ListVacationRequestsHandler;
use crate::modules::attendance::use_cases::month_summary::handler::MonthSummaryHandler;
use crate::modules::attendance::use_cases::record_attendance::handler::RecordAttendanceHandler;
use crate::modules::attendance::use_cases::request_vacation::handler::RequestVacationHandler;
use crate::modules::attendance::use_cases::submit_month_closure::handler::SubmitMonthClosureHandler;
use crate::modules::attendance::use_cases::update_vacation_status::handler::UpdateVacationStatusHandler;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<InMemoryAttendanceRecords>,
    pub closures: Arc<InMemoryMonthlyClosures>,
    pub vacation_requests: Arc<InMemoryVacationRequests>,
    pub record_attendance: Arc<RecordAttendanceHandler<InMemoryAttendanceRecords>>,
    pub get_attendance_records: Arc<GetAttendanceRecordsHandler<InMemoryAttendanceRecords>>,
    pub month_summary: Arc<MonthSummaryHandler<InMemoryAttendanceRecords>>,
    pub submit_month_closure:
        Arc<SubmitMonthClosureHandler<InMemoryAttendanceRecords, InMemoryMonthlyClosures>>,
    pub list_month_closures: Arc<ListMonthClosuresHandler<InMemoryMonthlyClosures>>,
    pub request_vacation: Arc<RequestVacationHandler<InMemoryVacationRequests>>,
    pub update_vacation_status: Arc<UpdateVacationStatusHandler<InMemoryVacationRequests>>,
    pub list_vacation_requests: Arc<ListVacationRequestsHandler<InMemoryVacationRequests>>,
}

impl AppState {
    pub fn new(
        policy: AccountingPolicy,
        records: Arc<InMemoryAttendanceRecords>,
        closures: Arc<InMemoryMonthlyClosures>,
        vacation_requests: Arc<InMemoryVacationRequests>,
    ) -> Self {
        Self {
            record_attendance: Arc::new(RecordAttendanceHandler::new(records.clone(), policy)),
            get_attendance_records: Arc::new(GetAttendanceRecordsHandler::new(records.clone())),
            month_summary: Arc::new(MonthSummaryHandler::new(records.clone(), policy)),
            submit_month_closure: Arc::new(SubmitMonthClosureHandler::new(
                records.clone(),
                closures.clone(),
                policy,
            )),
            list_month_closures: Arc::new(ListMonthClosuresHandler::new(closures.clone())),
            request_vacation: Arc::new(RequestVacationHandler::new(vacation_requests.clone())),
            update_vacation_status: Arc::new(UpdateVacationStatusHandler::new(
                vacation_requests.clone(),
            )),
            list_vacation_requests: Arc::new(ListVacationRequestsHandler::new(
                vacation_requests.clone(),
            )),
            records,
            closures,
            vacation_requests,
        }
    }

    pub fn in_memory(policy: AccountingPolicy) -> Self {
        Self::new(
            policy,
            Arc::new(InMemoryAttendanceRecords::new()),
            Arc::new(InMemoryMonthlyClosures::new()),
            Arc::new(InMemoryVacationRequests::new()),
        )
    }
}
