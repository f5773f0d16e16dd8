use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn total_copies(&self) -> u32;
    fn available_copies(&self) -> u32;
    fn is_available(&self) -> bool {
        self.available_copies() > 0
    }
}
