pub mod core {
    pub mod access;
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
    #[cfg(test)]
    pub mod testing;
}
pub mod gateway;
pub mod rentals;
pub mod routes;
pub mod users;
pub mod utils {
    pub mod date;
    pub mod logs;
    pub mod memory;
}
pub mod vehicles;
