pub mod application {
    pub mod product {
        pub mod create;
        pub mod lookup;
    }
    pub mod workflow {
        pub mod session;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod lookup;
        }
    }
    pub mod scan {
        pub mod model;
        pub mod services;
    }
    pub mod workflow {
        pub mod errors;
        pub mod events;
        pub mod machine;
        pub mod state;
    }
}
