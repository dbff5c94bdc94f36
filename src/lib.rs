pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod timecards {
        pub mod core {
            pub mod affordances;
            pub mod document;
            pub mod errors;
            pub mod ledger;
            pub mod line;
            pub mod ports;
            pub mod representation;
            pub mod status;
            pub mod timecard;
            pub mod transition;
        }
        pub mod use_cases {
            pub mod errors;

            pub mod create_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_timecards {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_line {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_line {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_line {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_lines {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_transitions {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod return_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod approve_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reject_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_timecard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
