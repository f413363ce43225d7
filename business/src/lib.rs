pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod update_item;
    }
    pub mod chat {
        pub mod respond;
    }
    pub mod order {
        pub mod cancel;
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
    }
    pub mod product {
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod list_categories;
        pub mod search;
    }
    pub mod user {
        pub mod get_profile;
        pub mod login;
        pub mod signup;
    }
    pub mod wishlist {
        pub mod add_item;
        pub mod get;
        pub mod remove_item;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_item;
        }
    }
    pub mod chat {
        pub mod errors;
        pub mod intent;
        pub mod model;
        pub mod replies;
        pub mod use_cases {
            pub mod respond;
        }
    }
    pub mod marketplace {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod cancel;
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod list_categories;
            pub mod search;
        }
    }
    pub mod search {
        pub mod parser;
        pub mod vocabulary;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_profile;
            pub mod login;
            pub mod signup;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get;
            pub mod remove_item;
        }
    }
}
