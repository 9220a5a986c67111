//! Listings page state (generator form)

use realty_hub_core::types::ListingDraft;

/// Form input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingField {
    #[default]
    PropertyType,
    Location,
    Bedrooms,
    Amenities,
}

impl ListingField {
    pub fn all() -> &'static [ListingField] {
        &[
            ListingField::PropertyType,
            ListingField::Location,
            ListingField::Bedrooms,
            ListingField::Amenities,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingField::PropertyType => "Property Type",
            ListingField::Location => "Location",
            ListingField::Bedrooms => "Bedrooms",
            ListingField::Amenities => "Amenities",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ListingField::PropertyType => "e.g. Penthouse",
            ListingField::Location => "e.g. Downtown Dubai",
            ListingField::Bedrooms => "e.g. 3",
            ListingField::Amenities => "e.g. Pool, Gym, Concierge",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ListingField::PropertyType => ListingField::Location,
            ListingField::Location => ListingField::Bedrooms,
            ListingField::Bedrooms => ListingField::Amenities,
            ListingField::Amenities => ListingField::PropertyType,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            ListingField::PropertyType => ListingField::Amenities,
            ListingField::Location => ListingField::PropertyType,
            ListingField::Bedrooms => ListingField::Location,
            ListingField::Amenities => ListingField::Bedrooms,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListingsState {
    pub property_type: String,
    pub location: String,
    pub bedrooms: String,
    pub amenities: String,
    pub focused: ListingField,
}

impl ListingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ListingField) -> &str {
        match field {
            ListingField::PropertyType => &self.property_type,
            ListingField::Location => &self.location,
            ListingField::Bedrooms => &self.bedrooms,
            ListingField::Amenities => &self.amenities,
        }
    }

    fn value_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::PropertyType => &mut self.property_type,
            ListingField::Location => &mut self.location,
            ListingField::Bedrooms => &mut self.bedrooms,
            ListingField::Amenities => &mut self.amenities,
        }
    }

    /// Type into the focused field. Bedrooms only takes digits.
    pub fn input(&mut self, c: char) {
        if self.focused == ListingField::Bedrooms && !c.is_ascii_digit() {
            return;
        }
        self.value_mut(self.focused).push(c);
    }

    pub fn backspace(&mut self) {
        self.value_mut(self.focused).pop();
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Snapshot of the form for the generator
    pub fn draft(&self) -> ListingDraft {
        ListingDraft {
            property_type: self.property_type.trim().to_string(),
            location: self.location.trim().to_string(),
            bedrooms: self.bedrooms.parse().ok(),
            amenities: self.amenities.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bedrooms_rejects_letters() {
        let mut form = ListingsState::new();
        form.focused = ListingField::Bedrooms;
        for c in "3a".chars() {
            form.input(c);
        }
        assert_eq!(form.bedrooms, "3");
        assert_eq!(form.draft().bedrooms, Some(3));
    }

    #[test]
    fn field_cycle_wraps() {
        let mut form = ListingsState::new();
        form.prev_field();
        assert_eq!(form.focused, ListingField::Amenities);
        form.next_field();
        assert_eq!(form.focused, ListingField::PropertyType);
    }

    #[test]
    fn oversized_bedroom_count_is_dropped_from_draft() {
        let mut form = ListingsState::new();
        form.bedrooms = "999".to_string();
        assert_eq!(form.draft().bedrooms, None);
    }
}
