//! The four-legged capability and its implementations for the pet types.

use critters_pets::{Cat, Dog};

/// Anything that can walk and sit.
///
/// Both behaviors describe the action as a human-readable line mentioning the
/// animal's name. They have no side effects; [`crate::demo()`] writes them out.
pub trait FourLegged {
    fn walk(&self) -> String;
    fn sit(&self) -> String;
}

impl FourLegged for Dog {
    fn walk(&self) -> String {
        format!("{} walks across the room", self.name())
    }

    fn sit(&self) -> String {
        format!("{} sits down", self.name())
    }
}

impl FourLegged for Cat {
    fn walk(&self) -> String {
        format!("{} walks across the room", self.name())
    }

    fn sit(&self) -> String {
        format!("{} sits down", self.name())
    }
}

impl<T: FourLegged + ?Sized> FourLegged for Box<T> {
    fn walk(&self) -> String {
        (**self).walk()
    }

    fn sit(&self) -> String {
        (**self).sit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_walks_and_sits_by_name() {
        let dog = Dog::new("Fido", "Terrier");
        assert!(dog.walk().contains("Fido walks across the room"));
        assert!(dog.sit().contains("Fido sits down"));
    }

    #[test]
    fn cat_walks_and_sits_by_name() {
        let cat = Cat::new("Fluffy", "Siamese");
        assert_eq!(cat.walk(), "Fluffy walks across the room");
        assert_eq!(cat.sit(), "Fluffy sits down");
    }

    #[test]
    fn breed_does_not_leak_into_descriptions() {
        let dog = Dog::new("Rex", "Terrier");
        assert!(!dog.walk().contains("Terrier"));
        assert!(!dog.sit().contains("Terrier"));
    }

    #[test]
    fn trait_objects_delegate() {
        let dog = Dog::new("Fido", "Terrier");
        let by_ref: &dyn FourLegged = &dog;
        let boxed: Box<dyn FourLegged> = Box::new(dog.clone());

        assert_eq!(by_ref.walk(), dog.walk());
        assert_eq!(by_ref.sit(), dog.sit());
        assert_eq!(boxed.sit(), dog.sit());
    }
}
