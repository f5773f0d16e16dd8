use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;

pub(crate) trait Account: Identifiable {
    fn role(&self) -> Role;
    fn borrowed_titles(&self) -> &[String];
    fn holds(&self, title: &str) -> bool {
        self.borrowed_titles().iter().any(|t| t == title)
    }
    fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}
