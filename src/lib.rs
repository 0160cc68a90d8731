pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod fields;
            pub mod input;
            pub mod messages;
            pub mod outcome;
            pub mod state;
            pub mod validation;
        }
        pub mod ports;
        pub mod use_cases {
            pub mod submit_registration {
                pub mod decide;
                pub mod handler;
            }
            pub mod live_feedback {
                pub mod confirmation_check;
                pub mod email_check;
                pub mod handler;
                pub mod password_strength;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod headless_view;
            }
            pub mod outbound {
                pub mod http_gateway;
            }
        }
        pub mod controller;
    }
}

pub mod shell;
