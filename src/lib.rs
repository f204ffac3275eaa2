pub mod shared {
    pub mod core {
        pub mod call_context;
    }
    pub mod infrastructure {
        pub mod execution_sink;
    }
}

pub mod modules {
    pub mod vehicle {
        pub mod core {
            pub mod closures;
            pub mod intents;
            pub mod messages;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod closure_actions {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod car_server_actions {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
        pub mod vehicle;
    }
}

pub mod shell;
