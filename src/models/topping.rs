use serde::{Deserialize, Serialize};

/// Optional add-on for a cup of coffee
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    /// Whipped cream on top of the cup
    WhippedCream,
    /// Chocolate mixed into the cup
    Chocolate,
}

impl Topping {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Topping::WhippedCream => "whipped_cream",
            Topping::Chocolate => "chocolate",
        }
    }

    /// Converts a string to a Topping enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "whipped_cream" => Some(Topping::WhippedCream),
            "chocolate" => Some(Topping::Chocolate),
            _ => None,
        }
    }
}

/// Toppings selected for every cup in an order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ToppingSelection {
    /// Whether whipped cream is selected
    pub whipped_cream: bool,
    /// Whether chocolate is selected
    pub chocolate: bool,
}

impl ToppingSelection {
    /// Creates a selection with no toppings
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a selection from both flags
    pub fn new(whipped_cream: bool, chocolate: bool) -> Self {
        Self {
            whipped_cream,
            chocolate,
        }
    }

    /// Returns true when the given topping is selected
    pub fn is_selected(&self, topping: Topping) -> bool {
        match topping {
            Topping::WhippedCream => self.whipped_cream,
            Topping::Chocolate => self.chocolate,
        }
    }

    /// Selects or clears the given topping
    pub fn set(&mut self, topping: Topping, selected: bool) {
        match topping {
            Topping::WhippedCream => self.whipped_cream = selected,
            Topping::Chocolate => self.chocolate = selected,
        }
    }

    /// Lists the selected toppings in menu order
    pub fn selected(&self) -> Vec<Topping> {
        let mut toppings = Vec::new();
        if self.whipped_cream {
            toppings.push(Topping::WhippedCream);
        }
        if self.chocolate {
            toppings.push(Topping::Chocolate);
        }
        toppings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_flags() {
        let mut selection = ToppingSelection::none();
        assert!(!selection.is_selected(Topping::WhippedCream));
        assert!(!selection.is_selected(Topping::Chocolate));

        selection.set(Topping::WhippedCream, true);
        assert!(selection.is_selected(Topping::WhippedCream));
        assert_eq!(selection.selected(), vec![Topping::WhippedCream]);

        selection.set(Topping::Chocolate, true);
        assert_eq!(
            selection.selected(),
            vec![Topping::WhippedCream, Topping::Chocolate]
        );

        selection.set(Topping::WhippedCream, false);
        assert_eq!(selection.selected(), vec![Topping::Chocolate]);
    }

    #[test]
    fn test_topping_string_representation() {
        assert_eq!(Topping::WhippedCream.as_str(), "whipped_cream");
        assert_eq!(Topping::from_str("chocolate"), Some(Topping::Chocolate));
        assert_eq!(Topping::from_str("caramel"), None);
    }
}
