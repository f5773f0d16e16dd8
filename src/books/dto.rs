use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub series: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, series: &str, total_copies: u32) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            series: series.to_string(),
            total_copies,
            available_copies: total_copies,
        }
    }

    pub(crate) fn from_entity(title: &str, entity: &BookEntity) -> Self {
        Self {
            title: title.to_string(),
            author: entity.author.to_string(),
            series: entity.series.to_string(),
            total_copies: entity.total_copies,
            available_copies: entity.available_copies,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            author: other.author.to_string(),
            series: other.series.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookDto {
    fn total_copies(&self) -> u32 {
        self.total_copies
    }

    fn available_copies(&self) -> u32 {
        self.available_copies
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", "Frank Herbert", "Dune", 2);
        assert_eq!("Dune", book.id().as_str());
        assert_eq!(2, book.available_copies());
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let mut entity = BookEntity::new("Frank Herbert", "Dune", 1);
        entity.take_copy();
        let book = BookDto::from_entity("Dune", &entity);
        assert!(!book.is_available());
        assert_eq!(entity, BookEntity::from(&book));
    }
}
