//! Rule sets: every property rule declared for one subject type.

use super::descriptor::{DescribedValidator, RuleDescriptor, Validator};
use super::report::ValidationReport;
use crate::builder::{BuildError, Initial, Options, RuleBuilder};
use crate::core::{combine, Member, PropertyRule, ValidationOutcome};
use crate::resolve::{Container, Resolver};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type-erased view of a `PropertyRule<T, P>` for any `P`.
trait ErasedRule<T>: Send + Sync {
    fn property_name(&self) -> &'static str;
    fn validator_count(&self) -> usize;
    fn validate(&self, instance: &T) -> ValidationOutcome;
    fn describe(&self) -> Vec<DescribedValidator>;
}

impl<T, P: 'static> ErasedRule<T> for PropertyRule<T, P> {
    fn property_name(&self) -> &'static str {
        PropertyRule::property_name(self)
    }

    fn validator_count(&self) -> usize {
        self.len()
    }

    fn validate(&self, instance: &T) -> ValidationOutcome {
        PropertyRule::validate(self, instance)
    }

    fn describe(&self) -> Vec<DescribedValidator> {
        let member = PropertyRule::property_name(self);
        self.validators()
            .iter()
            .map(|validator| DescribedValidator::new(member, Arc::clone(validator)))
            .collect()
    }
}

/// The rules declared for subject type `T`.
///
/// Rules are declared with [`rule_for`](Self::rule_for), which hands a
/// [`RuleBuilder`] to the caller and takes ownership of the finished rule.
///
/// # Example
///
/// ```rust
/// use rulebind::validators::{InclusiveBetween, NotEmpty};
/// use rulebind::{member, RuleSet};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let mut rules = RuleSet::new();
/// rules
///     .rule_for(member!(Person, name), |rule| rule.set_validator(NotEmpty))?
///     .rule_for(member!(Person, age), |rule| {
///         rule.set_validator(InclusiveBetween::new(0, 150))
///     })?;
///
/// let report = rules.report(&Person { name: String::new(), age: 200 });
/// assert_eq!(report.failures.len(), 2);
/// # Ok::<(), rulebind::builder::BuildError>(())
/// ```
pub struct RuleSet<T> {
    rules: Vec<Box<dyn ErasedRule<T>>>,
    resolver: Arc<dyn Resolver>,
}

impl<T: 'static> RuleSet<T> {
    /// Create a rule set with an empty [`Container`] as resolver.
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(Container::new()))
    }

    /// Create a rule set that resolves validator types through `resolver`.
    pub fn with_resolver(resolver: Arc<dyn Resolver>) -> Self {
        Self {
            rules: Vec::new(),
            resolver,
        }
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// Declare a rule for `member`.
    ///
    /// The rule is kept even when `define` fails part way, with whatever
    /// validators were attached before the failure.
    pub fn rule_for<P, F>(&mut self, member: Member<T, P>, define: F) -> Result<&mut Self, BuildError>
    where
        P: 'static,
        F: for<'r> FnOnce(
            RuleBuilder<'r, T, P, Initial>,
        ) -> Result<RuleBuilder<'r, T, P, Options>, BuildError>,
    {
        let mut rule = PropertyRule::new(member);
        let outcome = define(RuleBuilder::new(&mut rule, self.resolver.as_ref())).map(|_| ());

        debug!(
            property = rule.property_name(),
            validators = rule.len(),
            "rule declared"
        );
        self.rules.push(Box::new(rule));

        outcome?;
        Ok(self)
    }

    /// Adopt a rule built elsewhere.
    pub fn add_rule<P: 'static>(&mut self, rule: PropertyRule<T, P>) -> &mut Self {
        debug!(
            property = rule.property_name(),
            validators = rule.len(),
            "rule added"
        );
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `instance`, keeping all failures.
    pub fn validate(&self, instance: &T) -> ValidationOutcome {
        let outcomes = self
            .rules
            .iter()
            .map(|rule| {
                trace!(
                    property = rule.property_name(),
                    validators = rule.validator_count(),
                    "running rule"
                );
                rule.validate(instance)
            })
            .collect();

        combine(outcomes)
    }

    /// Run every rule and flatten the outcome into a report.
    pub fn report(&self, instance: &T) -> ValidationReport {
        ValidationReport::from(&self.validate(instance))
    }
}

impl<T: 'static> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> RuleDescriptor for RuleSet<T> {
    fn members(&self) -> Vec<&str> {
        let mut members: Vec<&str> = Vec::new();
        for rule in &self.rules {
            let name = rule.property_name();
            if !members.contains(&name) {
                members.push(name);
            }
        }
        members
    }

    fn validators_for_member(&self, member: &str) -> Vec<DescribedValidator> {
        self.rules
            .iter()
            .filter(|rule| rule.property_name() == member)
            .flat_map(|rule| rule.describe())
            .collect()
    }
}

impl<T: 'static> Validator<T> for RuleSet<T> {
    fn validate(&self, instance: &T) -> ValidationOutcome {
        RuleSet::validate(self, instance)
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<(&str, usize)> = self
            .rules
            .iter()
            .map(|rule| (rule.property_name(), rule.validator_count()))
            .collect();
        f.debug_struct("RuleSet").field("rules", &rules).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RuleBuilder;
    use crate::core::PropertyValidator;
    use crate::member;
    use crate::validators::{InclusiveBetween, NotEmpty};

    struct Product {
        sku: String,
        price: u32,
    }

    fn product(sku: &str, price: u32) -> Product {
        Product {
            sku: sku.to_string(),
            price,
        }
    }

    fn product_rules() -> RuleSet<Product> {
        let mut rules = RuleSet::new();
        rules
            .rule_for(member!(Product, sku), |rule| rule.set_validator(NotEmpty))
            .unwrap()
            .rule_for(member!(Product, price), |rule| {
                rule.set_validator(InclusiveBetween::new(1, 10_000))
            })
            .unwrap();
        rules
    }

    #[test]
    fn valid_instance_passes() {
        let rules = product_rules();
        assert!(rules.validate(&product("A-1", 50)).is_success());
    }

    #[test]
    fn all_failing_rules_are_reported() {
        let rules = product_rules();
        let report = rules.report(&product("", 0));

        let properties: Vec<&str> = report
            .failures
            .iter()
            .map(|f| f.property_name.as_str())
            .collect();
        assert_eq!(properties, vec!["sku", "price"]);
    }

    #[test]
    fn members_are_listed_once_in_declaration_order() {
        let mut rules = product_rules();
        rules
            .rule_for(member!(Product, sku), |rule| rule.set_validator(NotEmpty))
            .unwrap();

        assert_eq!(rules.len(), 3);
        assert_eq!(rules.members(), vec!["sku", "price"]);
    }

    #[test]
    fn validators_for_member_spans_every_rule_for_it() {
        let mut rules = product_rules();
        rules
            .rule_for(member!(Product, sku), |rule| rule.set_validator(NotEmpty))
            .unwrap();

        let described = rules.validators_for_member("sku");
        assert_eq!(described.len(), 2);
        assert!(described.iter().all(|d| d.member() == "sku"));
        assert!(rules.validators_for_member("missing").is_empty());
    }

    #[test]
    fn failed_definition_keeps_partial_rule() {
        let mut rules: RuleSet<Product> = RuleSet::new();

        let result = rules.rule_for(member!(Product, sku), |rule| {
            rule.set_validator(NotEmpty)?.set_shared_validator(None)
        });

        assert!(result.is_err());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.validators_for_member("sku").len(), 1);
    }

    #[test]
    fn add_rule_adopts_prebuilt_rule() {
        struct Even;
        impl PropertyValidator<u32> for Even {
            fn name(&self) -> &str {
                "Even"
            }
            fn is_valid(&self, value: &u32) -> bool {
                value % 2 == 0
            }
        }

        let resolver = Container::new();
        let mut rule = PropertyRule::new(member!(Product, price));
        RuleBuilder::new(&mut rule, &resolver)
            .set_validator(Even)
            .unwrap();

        let mut rules = RuleSet::new();
        rules.add_rule(rule);

        assert!(rules.validate(&product("A", 4)).is_success());
        assert!(rules.validate(&product("A", 5)).is_failure());
    }

    #[test]
    fn debug_shows_rule_summary() {
        let rendered = format!("{:?}", product_rules());
        assert!(rendered.contains("sku"));
        assert!(rendered.contains("price"));
    }
}
