//! Book catalog over HTTP backed by an in-memory store, with a client side
//! proxy and an interactive shell.

pub mod core {
    pub mod command;
    pub mod config;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod get_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
        pub mod update_book_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
}

pub mod proxy;
pub mod shell;

pub mod utils {
    pub mod logging;
}
