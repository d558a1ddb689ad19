//! Example and query construction from the raw car table.

use super::data::CarRecord;
use super::template::build_template;
use crate::config::TrainsConfig;
use crate::dataset::{Dataset, Example, Query};
use crate::error::RelsetError;
use crate::logic::{Atom, Predicate, Template, Term};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The combined artifact handed to the learning framework: the rule
/// template plus its matching dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainsTask {
    pub template: Template,
    pub dataset: Dataset,
}

impl TrainsTask {
    /// Serialize the task for export or inspection.
    pub fn to_json_pretty(&self) -> Result<String, RelsetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the task as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), RelsetError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Convert one car record into its seven facts, all bound to the car's
/// position.
fn car_facts(car: &CarRecord) -> [Atom; 7] {
    let pos = Term::Int(i64::from(car.position));
    [
        Atom::new(Predicate::Shape, vec![pos.clone(), car.shape.into()]),
        Atom::new(Predicate::Length, vec![pos.clone(), car.length.into()]),
        Atom::new(Predicate::Sides, vec![pos.clone(), car.sides.into()]),
        Atom::new(Predicate::Roof, vec![pos.clone(), car.roof.into()]),
        Atom::new(
            Predicate::Wheels,
            vec![pos.clone(), Term::Int(i64::from(car.wheels))],
        ),
        Atom::new(Predicate::LoadShape, vec![pos.clone(), car.load_shape.into()]),
        Atom::new(
            Predicate::LoadNum,
            vec![pos, Term::Int(i64::from(car.load_count))],
        ),
    ]
}

/// Group car records into one example per train.
///
/// Records may arrive in any order; grouping is by train id only, and each
/// train slot gets its own freshly allocated fact list. A train id outside
/// `1..=config.train_count` fails fast rather than growing the example
/// list.
pub fn build_examples(
    cars: &[CarRecord],
    config: &TrainsConfig,
) -> Result<Vec<Example>, RelsetError> {
    config.validate()?;
    let mut examples: Vec<Example> = (0..config.train_count).map(|_| Example::new()).collect();
    for record in cars {
        let train = record.train as usize;
        if train == 0 || train > config.train_count {
            return Err(RelsetError::TrainOutOfRange {
                train_id: record.train,
                max: config.train_count,
            });
        }
        examples[train - 1].extend(car_facts(record));
    }
    tracing::debug!(
        cars = cars.len(),
        examples = examples.len(),
        "grouped car records into examples"
    );
    Ok(examples)
}

/// One query per train in train-id order: +1.0 for the first
/// `positive_count` trains, -1.0 for the rest.
pub fn build_queries(config: &TrainsConfig) -> Result<Vec<Query>, RelsetError> {
    config.validate()?;
    let mut queries = Vec::with_capacity(config.train_count);
    for train in 1..=config.train_count {
        let target = if train <= config.positive_count { 1.0 } else { -1.0 };
        queries.push(Query::new(Atom::nullary(Predicate::Direction), target));
    }
    Ok(queries)
}

/// Build the complete trains task: template plus validated dataset.
pub fn build(cars: &[CarRecord], config: &TrainsConfig) -> Result<TrainsTask, RelsetError> {
    let template = build_template();
    let mut dataset = Dataset::new();
    dataset.add_examples(build_examples(cars, config)?);
    dataset.add_queries(build_queries(config)?);
    dataset.validate()?;
    tracing::info!(
        rules = template.len(),
        examples = dataset.examples.len(),
        facts = dataset.fact_count(),
        "built trains task"
    );
    Ok(TrainsTask { template, dataset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trains::attributes::{Length, LoadShape, Roof, Shape, Sides};
    use crate::trains::data::TRAIN_CARS;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn single_car() -> CarRecord {
        CarRecord {
            dataset: 1,
            train: 1,
            position: 1,
            shape: Shape::Ellipse,
            length: Length::Short,
            sides: Sides::Double,
            roof: Roof::Flat,
            wheels: 2,
            load_shape: LoadShape::Circle,
            load_count: 1,
        }
    }

    #[test]
    fn test_single_car_yields_seven_facts_at_position_one() {
        let config = TrainsConfig::default();
        let examples = build_examples(&[single_car()], &config).unwrap();
        assert_eq!(examples.len(), 20);
        assert_eq!(examples[0].len(), 7);
        for fact in &examples[0].facts {
            assert!(fact.is_ground());
            assert_eq!(fact.terms[0], Term::Int(1));
        }
        let queries = build_queries(&config).unwrap();
        assert_eq!(queries[0].target, 1.0);
    }

    #[test]
    fn test_groups_seven_facts_per_recorded_car() {
        let examples = build_examples(TRAIN_CARS, &TrainsConfig::default()).unwrap();
        assert_eq!(examples.len(), 20);
        for (idx, example) in examples.iter().enumerate() {
            let cars = TRAIN_CARS
                .iter()
                .filter(|c| c.train as usize == idx + 1)
                .count();
            assert_eq!(example.len(), 7 * cars, "train {}", idx + 1);
            assert!(!example.is_empty());
        }
    }

    #[test]
    fn test_facts_reference_only_recorded_positions() {
        let examples = build_examples(TRAIN_CARS, &TrainsConfig::default()).unwrap();
        for (idx, example) in examples.iter().enumerate() {
            let positions: HashSet<i64> = TRAIN_CARS
                .iter()
                .filter(|c| c.train as usize == idx + 1)
                .map(|c| i64::from(c.position))
                .collect();
            for fact in &example.facts {
                assert_eq!(fact.terms.len(), 2);
                assert!(positions.contains(match &fact.terms[0] {
                    Term::Int(pos) => pos,
                    other => panic!("non-integer position term {other:?}"),
                }));
            }
        }
    }

    #[test]
    fn test_grouping_ignores_record_order() {
        let config = TrainsConfig::default();
        let forward = build_examples(TRAIN_CARS, &config).unwrap();
        let mut shuffled = TRAIN_CARS.to_vec();
        shuffled.reverse();
        let backward = build_examples(&shuffled, &config).unwrap();
        for (a, b) in forward.iter().zip(&backward) {
            let lhs: HashSet<&Atom> = a.facts.iter().collect();
            let rhs: HashSet<&Atom> = b.facts.iter().collect();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn test_out_of_range_train_fails_fast() {
        let mut record = single_car();
        record.train = 21;
        let err = build_examples(&[record], &TrainsConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RelsetError::TrainOutOfRange {
                train_id: 21,
                max: 20
            }
        ));
    }

    #[test]
    fn test_query_targets_split_positive_negative() {
        let queries = build_queries(&TrainsConfig::default()).unwrap();
        assert_eq!(queries.len(), 20);
        for (idx, query) in queries.iter().enumerate() {
            assert_eq!(query.atom, Atom::nullary(Predicate::Direction));
            let expected = if idx < 10 { 1.0 } else { -1.0 };
            assert_eq!(query.target, expected, "train {}", idx + 1);
        }
    }

    #[test]
    fn test_build_produces_validated_task() {
        let task = build(TRAIN_CARS, &TrainsConfig::default()).unwrap();
        assert_eq!(task.template.len(), 28);
        assert_eq!(task.dataset.examples.len(), task.dataset.queries.len());
        assert_eq!(task.dataset.fact_count(), 7 * TRAIN_CARS.len());
        assert!(task.dataset.validate().is_ok());
    }

    #[test]
    fn test_save_json_round_trips() {
        let task = build(TRAIN_CARS, &TrainsConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trains.json");
        task.save_json(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let loaded: TrainsTask = serde_json::from_str(&written).unwrap();
        assert_eq!(loaded, task);
    }

    #[test]
    fn test_save_json_surfaces_io_failure() {
        let task = build(TRAIN_CARS, &TrainsConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trains.json");
        assert!(matches!(task.save_json(&path), Err(RelsetError::Io(_))));
    }
}
