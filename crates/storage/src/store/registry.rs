use uuid::Uuid;

use crate::error::{Result, StorageError};

/// Anything that can live in an admin registry.
pub trait RegistryItem {
    fn id(&self) -> Uuid;
}

/// Append/remove list with generated identifiers, backing the coach,
/// member and workout-template admin screens.
#[derive(Debug)]
pub struct Registry<T: RegistryItem> {
    items: Vec<T>,
}

impl<T: RegistryItem> Registry<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

impl<T: RegistryItem> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coach;

    fn coach(name: &str) -> Coach {
        Coach {
            coach_id: Uuid::new_v4(),
            name: name.to_owned(),
            email: format!("{}@resiliente.com", name.to_lowercase()),
            specialties: vec!["CrossFit".to_owned()],
            bio: String::new(),
        }
    }

    #[test]
    fn add_then_remove() {
        let mut registry = Registry::default();
        let sarah = coach("Sarah");
        let id = sarah.id();
        registry.add(sarah);
        registry.add(coach("Mike"));

        assert_eq!(registry.list().len(), 2);
        registry.remove(id).unwrap();
        assert_eq!(registry.list().len(), 1);
        assert_eq!(registry.list()[0].name, "Mike");
    }

    #[test]
    fn removing_an_unknown_id_is_not_found() {
        let mut registry: Registry<Coach> = Registry::default();
        assert!(matches!(
            registry.remove(Uuid::new_v4()),
            Err(StorageError::NotFound)
        ));
    }
}
