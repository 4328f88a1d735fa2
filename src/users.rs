use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;
pub mod controller;

pub(crate) trait User: Identifiable {
    fn is_role(&self, match_role: Role) -> bool;
}
