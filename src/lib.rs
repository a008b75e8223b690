pub mod shared {
    pub mod core {
        pub mod clock_time;
        pub mod italian_calendar;
        pub mod month_key;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod accounting_policy;
            pub mod actor;
            pub mod attendance_record;
            pub mod day_accounting;
            pub mod monthly_closure;
            pub mod period_accounting;
            pub mod ports;
            pub mod vacation_request;
            pub mod projections {
                pub mod presence_sheet;
                pub mod printable_report;
                pub mod spreadsheet;
                pub mod summary_view;
            }
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod record_attendance {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_attendance_records {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod month_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_month_closure {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_month_closures {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod request_vacation {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_vacation_status {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_vacation_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod attendance_records_in_memory;
                pub mod monthly_closures_in_memory;
                pub mod spreadsheet_csv;
                pub mod vacation_requests_in_memory;
            }
        }
    }
}

pub mod shell;
