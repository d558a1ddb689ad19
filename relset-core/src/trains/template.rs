//! Template construction for the trains task.

use super::attributes::{LOAD_COUNTS, Length, LoadShape, Roof, Shape, Sides, WHEEL_COUNTS};
use crate::logic::{Atom, BodyLiteral, Predicate, Rule, Template, Term};

/// The rule variable ranging over wagon positions.
const POSITION_VAR: &str = "Y";

/// The seven per-wagon attribute predicates aggregated by the wagon rule.
pub const WAGON_ATTRIBUTES: [Predicate; 7] = [
    Predicate::Shape,
    Predicate::Length,
    Predicate::Sides,
    Predicate::Roof,
    Predicate::Wheels,
    Predicate::LoadNum,
    Predicate::LoadShape,
];

/// Build the full generalization template: one existence rule per category
/// value, a wagon-level aggregation over all seven attributes, a
/// train-level aggregation over wagon positions, and the direction rule.
///
/// The rule list is fixed and fully determined by the category
/// enumerations; building twice yields an identical template.
pub fn build_template() -> Template {
    let mut template = Template::new();

    // attr(Y) :- attr(Y, value) [1], one rule per category value.
    for shape in Shape::ALL {
        template.add_rule(attribute_rule(Predicate::Shape, shape.into()));
    }
    for length in Length::ALL {
        template.add_rule(attribute_rule(Predicate::Length, length.into()));
    }
    for sides in Sides::ALL {
        template.add_rule(attribute_rule(Predicate::Sides, sides.into()));
    }
    for roof in Roof::ALL {
        template.add_rule(attribute_rule(Predicate::Roof, roof.into()));
    }
    for wheels in WHEEL_COUNTS {
        template.add_rule(attribute_rule(Predicate::Wheels, Term::Int(wheels)));
    }
    for count in LOAD_COUNTS {
        template.add_rule(attribute_rule(Predicate::LoadNum, Term::Int(count)));
    }
    for load in LoadShape::ALL {
        template.add_rule(attribute_rule(Predicate::LoadShape, load.into()));
    }

    // wagon(Y) :- shape(Y) [1], ..., load_shape(Y) [1]
    let wagon_body = WAGON_ATTRIBUTES
        .iter()
        .map(|attr| BodyLiteral::once(Atom::new(*attr, vec![Term::var(POSITION_VAR)])))
        .collect();
    template.add_rule(Rule::new(
        Atom::new(Predicate::Wagon, vec![Term::var(POSITION_VAR)]),
        wagon_body,
    ));

    // train :- wagon(Y) [1]
    template.add_rule(Rule::new(
        Atom::nullary(Predicate::Train),
        vec![BodyLiteral::once(Atom::new(
            Predicate::Wagon,
            vec![Term::var(POSITION_VAR)],
        ))],
    ));

    // direction :- train [1]
    template.add_rule(Rule::new(
        Atom::nullary(Predicate::Direction),
        vec![BodyLiteral::once(Atom::nullary(Predicate::Train))],
    ));

    tracing::debug!(rules = template.len(), "built trains template");
    template
}

fn attribute_rule(predicate: Predicate, value: Term) -> Rule {
    let head = Atom::new(predicate, vec![Term::var(POSITION_VAR)]);
    let body = Atom::new(predicate, vec![Term::var(POSITION_VAR), value]);
    Rule::new(head, vec![BodyLiteral::once(body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_count() {
        // 5 shapes + 2 lengths + 2 sides + 5 roofs + 2 wheel counts
        // + 4 load counts + 5 load shapes + wagon + train + direction.
        assert_eq!(build_template().len(), 28);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        assert_eq!(build_template(), build_template());
    }

    #[test]
    fn test_wagon_rule_aggregates_all_attributes() {
        let template = build_template();
        let wagon = template
            .rules()
            .iter()
            .find(|r| r.head.predicate == Predicate::Wagon)
            .unwrap();
        assert_eq!(wagon.body.len(), 7);
        for literal in &wagon.body {
            assert_eq!(literal.min_count, 1);
            assert_eq!(literal.atom.terms, vec![Term::var(POSITION_VAR)]);
        }
        let body_predicates: Vec<Predicate> =
            wagon.body.iter().map(|l| l.atom.predicate).collect();
        assert_eq!(body_predicates, WAGON_ATTRIBUTES);
    }

    #[test]
    fn test_direction_chains_from_train() {
        let template = build_template();
        let rules = template.rules();
        let train = &rules[rules.len() - 2];
        let direction = &rules[rules.len() - 1];
        assert_eq!(train.head, Atom::nullary(Predicate::Train));
        assert_eq!(train.body[0].atom.predicate, Predicate::Wagon);
        assert_eq!(direction.head, Atom::nullary(Predicate::Direction));
        assert_eq!(direction.body[0].atom, Atom::nullary(Predicate::Train));
    }

    #[test]
    fn test_attribute_rules_pair_head_and_body_positions() {
        let template = build_template();
        for rule in template.rules().iter().take(25) {
            assert_eq!(rule.head.terms, vec![Term::var(POSITION_VAR)]);
            assert_eq!(rule.body.len(), 1);
            let body = &rule.body[0];
            assert_eq!(body.min_count, 1);
            assert_eq!(body.atom.predicate, rule.head.predicate);
            assert_eq!(body.atom.terms.len(), 2);
            assert_eq!(body.atom.terms[0], Term::var(POSITION_VAR));
            assert!(body.atom.terms[1].is_ground());
        }
    }
}
