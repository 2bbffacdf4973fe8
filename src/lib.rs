pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod breaks;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
            pub mod view;
        }
        pub mod use_cases {
            pub mod clock_in {
                pub mod command;
                pub mod decide;
            }
            pub mod pause_time_entry {
                pub mod decide;
            }
            pub mod resume_time_entry {
                pub mod decide;
            }
            pub mod update_check_in_notes {
                pub mod decide;
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
            }
            pub mod track_time {
                pub mod handler;
                pub mod location;
                pub mod registry;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod summarize_time_entries {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod summary;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod status_projector;
                pub mod time_entry_repository;
            }
        }
    }
}

pub mod shell;
