pub mod application {
    pub mod product {
        pub mod append_review;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;

        #[cfg(any(test, feature = "test-support"))]
        pub mod in_memory;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod listing;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod append_review;
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
}
