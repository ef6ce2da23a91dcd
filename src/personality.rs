use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine personality traits the recommender understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
    Adventurous,
    Analytical,
    Creative,
    Traditional,
}

/// Cuisine list used when a trait label is unknown.
pub const DEFAULT_CUISINES: &[&str] = &["Italian"];

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 9] = [
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
        PersonalityTrait::Adventurous,
        PersonalityTrait::Analytical,
        PersonalityTrait::Creative,
        PersonalityTrait::Traditional,
    ];

    /// Ranked cuisines for this trait. The list is never empty; search
    /// logic currently consumes only the first entry, the rest are
    /// alternates.
    pub fn cuisines(&self) -> &'static [&'static str] {
        match self {
            Self::Openness => &["Japanese", "Indian", "Mediterranean"],
            Self::Conscientiousness => &["Balanced", "Low-Carb", "Mediterranean"],
            Self::Extraversion => &["BBQ", "Mexican", "Italian"],
            Self::Agreeableness => &["Vegetarian", "Comfort Food", "Vegan"],
            Self::Neuroticism => &["Healthy", "Mediterranean", "Comfort Food"],
            Self::Adventurous => &["Thai", "Korean", "Ethiopian"],
            Self::Analytical => &["French", "Greek", "Fusion"],
            Self::Creative => &["Molecular Gastronomy", "Experimental", "Fusion"],
            Self::Traditional => &["American", "British", "German"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
            Self::Adventurous => "Adventurous",
            Self::Analytical => "Analytical",
            Self::Creative => "Creative",
            Self::Traditional => "Traditional",
        }
    }
}

impl FromStr for PersonalityTrait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown personality trait: {}", s))
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a free-text trait label to its ranked cuisine list, falling
/// back to ["Italian"] for anything unrecognized.
pub fn cuisines_for(label: &str) -> &'static [&'static str] {
    label
        .parse::<PersonalityTrait>()
        .map(|t| t.cuisines())
        .unwrap_or(DEFAULT_CUISINES)
}

/// Diet filters supported by the recipe provider. Labels are forwarded
/// verbatim as the `diet` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    GlutenFree,
    Ketogenic,
    Vegetarian,
    LactoVegetarian,
    OvoVegetarian,
    Vegan,
    Pescetarian,
    Paleo,
    Primal,
    LowFodmap,
    Whole30,
}

impl DietType {
    pub const ALL: [DietType; 11] = [
        DietType::GlutenFree,
        DietType::Ketogenic,
        DietType::Vegetarian,
        DietType::LactoVegetarian,
        DietType::OvoVegetarian,
        DietType::Vegan,
        DietType::Pescetarian,
        DietType::Paleo,
        DietType::Primal,
        DietType::LowFodmap,
        DietType::Whole30,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlutenFree => "Gluten Free",
            Self::Ketogenic => "Ketogenic",
            Self::Vegetarian => "Vegetarian",
            Self::LactoVegetarian => "Lacto-Vegetarian",
            Self::OvoVegetarian => "Ovo-Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescetarian => "Pescetarian",
            Self::Paleo => "Paleo",
            Self::Primal => "Primal",
            Self::LowFodmap => "Low FODMAP",
            Self::Whole30 => "Whole30",
        }
    }
}

impl FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown diet type: {}", s))
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Nutrients the range search supports. Provider parameter names are fixed
/// here instead of being composed from the label at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nutrient {
    Calories,
    Protein,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Calories, Nutrient::Protein, Nutrient::Fat];

    pub fn min_param(&self) -> &'static str {
        match self {
            Self::Calories => "minCalories",
            Self::Protein => "minProtein",
            Self::Fat => "minFat",
        }
    }

    pub fn max_param(&self) -> &'static str {
        match self {
            Self::Calories => "maxCalories",
            Self::Protein => "maxProtein",
            Self::Fat => "maxFat",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Fat => "Fat",
        }
    }
}

impl FromStr for Nutrient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown nutrient: {}", s))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trait_has_a_first_cuisine() {
        for trait_ in PersonalityTrait::ALL {
            let cuisines = trait_.cuisines();
            assert!(!cuisines.is_empty(), "{} has no cuisines", trait_);
            assert!(!cuisines[0].is_empty());
            assert_eq!(cuisines, trait_.cuisines());
        }
    }

    #[test]
    fn extraversion_resolves_to_bbq_first() {
        assert_eq!(cuisines_for("Extraversion")[0], "BBQ");
    }

    #[test]
    fn unknown_labels_fall_back_to_italian() {
        assert_eq!(cuisines_for("Melancholic"), ["Italian"]);
        assert_eq!(cuisines_for(""), ["Italian"]);
    }

    #[test]
    fn trait_labels_round_trip() {
        for trait_ in PersonalityTrait::ALL {
            assert_eq!(trait_.as_str().parse::<PersonalityTrait>(), Ok(trait_));
        }
        assert_eq!(
            "openness".parse::<PersonalityTrait>(),
            Ok(PersonalityTrait::Openness)
        );
    }

    #[test]
    fn diet_labels_round_trip() {
        for diet in DietType::ALL {
            assert_eq!(diet.as_str().parse::<DietType>(), Ok(diet));
        }
        assert_eq!("gluten free".parse::<DietType>(), Ok(DietType::GlutenFree));
        assert!("Carnivore".parse::<DietType>().is_err());
    }

    #[test]
    fn nutrient_params_use_provider_spelling() {
        assert_eq!(Nutrient::Calories.min_param(), "minCalories");
        assert_eq!(Nutrient::Calories.max_param(), "maxCalories");
        assert_eq!(Nutrient::Protein.min_param(), "minProtein");
        assert_eq!(Nutrient::Protein.max_param(), "maxProtein");
        assert_eq!(Nutrient::Fat.min_param(), "minFat");
        assert_eq!(Nutrient::Fat.max_param(), "maxFat");
    }
}
