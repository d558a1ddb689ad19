//! The fixed source table: one record per train car.

use super::attributes::{Length, LoadShape, Roof, Shape, Sides};
use serde::{Deserialize, Serialize};

/// One raw row of the trains table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Source dataset id. The shipped table is a single dataset, always 1.
    pub dataset: u8,
    /// Train this car belongs to, 1..=20.
    pub train: u8,
    /// Position of the car within its train, front to back.
    pub position: u8,
    pub shape: Shape,
    pub length: Length,
    pub sides: Sides,
    pub roof: Roof,
    pub wheels: u8,
    pub load_shape: LoadShape,
    pub load_count: u8,
}

#[allow(clippy::too_many_arguments)]
const fn car(
    train: u8,
    position: u8,
    shape: Shape,
    length: Length,
    sides: Sides,
    roof: Roof,
    wheels: u8,
    load_shape: LoadShape,
    load_count: u8,
) -> CarRecord {
    CarRecord {
        dataset: 1,
        train,
        position,
        shape,
        length,
        sides,
        roof,
        wheels,
        load_shape,
        load_count,
    }
}

/// Car records for all 20 trains. Trains 1-10 run east (positive label),
/// trains 11-20 run west (negative label).
pub const TRAIN_CARS: &[CarRecord] = &[
    // Train 1 (east)
    car(1, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 3),
    car(1, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Peaked, 2, LoadShape::Triangle, 1),
    car(1, 3, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 3, LoadShape::Hexagon, 1),
    car(1, 4, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    // Train 2 (east)
    car(2, 1, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    car(2, 2, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    car(2, 3, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Flat, 2, LoadShape::Circle, 2),
    // Train 3 (east)
    car(3, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 3, LoadShape::Hexagon, 1),
    car(3, 2, Shape::Hexagon, Length::Short, Sides::NotDouble, Roof::Flat, 2, LoadShape::Triangle, 1),
    car(3, 3, Shape::Ellipse, Length::Short, Sides::NotDouble, Roof::Arc, 2, LoadShape::Diamond, 1),
    // Train 4 (east)
    car(4, 1, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    car(4, 2, Shape::Ellipse, Length::Short, Sides::NotDouble, Roof::Arc, 2, LoadShape::Diamond, 1),
    car(4, 3, Shape::Rectangle, Length::Short, Sides::Double, Roof::None, 2, LoadShape::Triangle, 1),
    car(4, 4, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    // Train 5 (east)
    car(5, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 2),
    car(5, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Flat, 3, LoadShape::Circle, 1),
    car(5, 3, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::Jagged, 2, LoadShape::Hexagon, 1),
    // Train 6 (east)
    car(6, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::Jagged, 3, LoadShape::Rectangle, 1),
    car(6, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Peaked, 2, LoadShape::Circle, 1),
    // Train 7 (east)
    car(7, 1, Shape::Rectangle, Length::Short, Sides::Double, Roof::None, 2, LoadShape::Circle, 1),
    car(7, 2, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    car(7, 3, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Arc, 2, LoadShape::Rectangle, 1),
    // Train 8 (east)
    car(8, 1, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::Flat, 2, LoadShape::Diamond, 1),
    car(8, 2, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 3, LoadShape::Rectangle, 3),
    // Train 9 (east)
    car(9, 1, Shape::Rectangle, Length::Long, Sides::Double, Roof::None, 2, LoadShape::Hexagon, 2),
    car(9, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::Flat, 2, LoadShape::Rectangle, 1),
    car(9, 3, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    car(9, 4, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 0),
    // Train 10 (east)
    car(10, 1, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::Flat, 2, LoadShape::Circle, 1),
    car(10, 2, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 2),
    // Train 11 (west)
    car(11, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::Flat, 3, LoadShape::Circle, 3),
    car(11, 2, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    // Train 12 (west)
    car(12, 1, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    car(12, 2, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    car(12, 3, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 3, LoadShape::Hexagon, 1),
    // Train 13 (west)
    car(13, 1, Shape::Ellipse, Length::Long, Sides::NotDouble, Roof::Arc, 2, LoadShape::Diamond, 1),
    car(13, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    // Train 14 (west)
    car(14, 1, Shape::Rectangle, Length::Long, Sides::Double, Roof::Flat, 3, LoadShape::Rectangle, 3),
    car(14, 2, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    car(14, 3, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Hexagon, 1),
    // Train 15 (west)
    car(15, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::Jagged, 2, LoadShape::Rectangle, 0),
    car(15, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 3, LoadShape::Circle, 1),
    // Train 16 (west)
    car(16, 1, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    car(16, 2, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 2),
    car(16, 3, Shape::Hexagon, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    // Train 17 (west)
    car(17, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 3, LoadShape::Rectangle, 1),
    car(17, 2, Shape::Rectangle, Length::Short, Sides::Double, Roof::None, 2, LoadShape::Diamond, 1),
    car(17, 3, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 1),
    car(17, 4, Shape::Bucket, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    // Train 18 (west)
    car(18, 1, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::Flat, 2, LoadShape::Hexagon, 2),
    car(18, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    // Train 19 (west)
    car(19, 1, Shape::Rectangle, Length::Long, Sides::Double, Roof::Jagged, 3, LoadShape::Rectangle, 3),
    car(19, 2, Shape::Rectangle, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Circle, 1),
    car(19, 3, Shape::Ellipse, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Diamond, 1),
    // Train 20 (west)
    car(20, 1, Shape::UShaped, Length::Short, Sides::NotDouble, Roof::None, 2, LoadShape::Rectangle, 1),
    car(20, 2, Shape::Rectangle, Length::Long, Sides::NotDouble, Roof::None, 2, LoadShape::Triangle, 2),
];
