use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;

    // case-insensitive substring match on the title
    fn title_contains(&self, fragment: &str) -> bool {
        self.title().to_lowercase().contains(&fragment.to_lowercase())
    }
}
