pub mod shared {
    pub mod http {
        pub mod responses;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod seed;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_activities {
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unregister {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod activity_registry;
            }
        }
    }
}

pub mod shell;
