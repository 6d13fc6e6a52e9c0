pub mod shared {
    pub mod infrastructure {
        pub mod blob_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod store;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod multipart;
            }
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
