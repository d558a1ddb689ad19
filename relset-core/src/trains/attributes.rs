//! Categorical wagon attributes and their fixed value enumerations.

use crate::logic::Term;
use serde::{Deserialize, Serialize};

/// Wagon body shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Ellipse,
    Rectangle,
    Bucket,
    Hexagon,
    UShaped,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Ellipse,
        Shape::Rectangle,
        Shape::Bucket,
        Shape::Hexagon,
        Shape::UShaped,
    ];

    pub fn as_symbol(&self) -> &'static str {
        match self {
            Shape::Ellipse => "ellipse",
            Shape::Rectangle => "rectangle",
            Shape::Bucket => "bucket",
            Shape::Hexagon => "hexagon",
            Shape::UShaped => "u_shaped",
        }
    }
}

/// Wagon length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Short,
    Long,
}

impl Length {
    pub const ALL: [Length; 2] = [Length::Short, Length::Long];

    pub fn as_symbol(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Long => "long",
        }
    }
}

/// Whether the wagon has double walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sides {
    NotDouble,
    Double,
}

impl Sides {
    pub const ALL: [Sides; 2] = [Sides::NotDouble, Sides::Double];

    pub fn as_symbol(&self) -> &'static str {
        match self {
            Sides::NotDouble => "not_double",
            Sides::Double => "double",
        }
    }
}

/// Wagon roof style. `None` means an open wagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Roof {
    Jagged,
    Arc,
    None,
    Flat,
    Peaked,
}

impl Roof {
    pub const ALL: [Roof; 5] = [Roof::Jagged, Roof::Arc, Roof::None, Roof::Flat, Roof::Peaked];

    pub fn as_symbol(&self) -> &'static str {
        match self {
            Roof::Jagged => "jagged",
            Roof::Arc => "arc",
            Roof::None => "none",
            Roof::Flat => "flat",
            Roof::Peaked => "peaked",
        }
    }
}

/// Shape of the freight the wagon carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadShape {
    Hexagon,
    Triangle,
    Diamond,
    Rectangle,
    Circle,
}

impl LoadShape {
    pub const ALL: [LoadShape; 5] = [
        LoadShape::Hexagon,
        LoadShape::Triangle,
        LoadShape::Diamond,
        LoadShape::Rectangle,
        LoadShape::Circle,
    ];

    pub fn as_symbol(&self) -> &'static str {
        match self {
            LoadShape::Hexagon => "hexagon",
            LoadShape::Triangle => "triangle",
            LoadShape::Diamond => "diamond",
            LoadShape::Rectangle => "rectangle",
            LoadShape::Circle => "circle",
        }
    }
}

/// Possible wheel counts per wagon.
pub const WHEEL_COUNTS: [i64; 2] = [2, 3];

/// Possible load item counts per wagon.
pub const LOAD_COUNTS: [i64; 4] = [0, 1, 2, 3];

macro_rules! impl_term_from {
    ($($attr:ty),+) => {
        $(impl From<$attr> for Term {
            fn from(value: $attr) -> Term {
                Term::sym(value.as_symbol())
            }
        })+
    };
}

impl_term_from!(Shape, Length, Sides, Roof, LoadShape);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_match_serde_names() {
        for shape in Shape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.as_symbol()));
        }
        for roof in Roof::ALL {
            let json = serde_json::to_string(&roof).unwrap();
            assert_eq!(json, format!("\"{}\"", roof.as_symbol()));
        }
    }

    #[test]
    fn test_term_conversion() {
        assert_eq!(Term::from(Shape::UShaped), Term::sym("u_shaped"));
        assert_eq!(Term::from(Sides::NotDouble), Term::sym("not_double"));
    }
}
