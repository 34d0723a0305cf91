//! Fluent builder attaching validators to one property rule.

use crate::builder::error::BuildError;
use crate::core::{Member, PropertyRule, PropertyValidator, SharedValidator};
use crate::resolve::{resolve, Resolver};
use crate::validation::{ChildValidatorAdaptor, DescribedValidator, RuleDescriptor, Validator};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Initial {}
    impl Sealed for super::Options {}
}

/// Capability view of a [`RuleBuilder`].
pub trait Stage: sealed::Sealed {}

/// View before any validator is attached: only attach and import.
#[derive(Debug)]
pub enum Initial {}

/// View after an attach: additionally allows `configure`.
#[derive(Debug)]
pub enum Options {}

impl Stage for Initial {}
impl Stage for Options {}

const SET_VALIDATOR: &str = "set_validator";
const SET_SHARED_VALIDATOR: &str = "set_shared_validator";
const SET_CHILD_VALIDATOR: &str = "set_child_validator";
const SET_SHARED_CHILD_VALIDATOR: &str = "set_shared_child_validator";
const SET_VALIDATOR_TYPE: &str = "set_validator_type";
const SET_PROPERTY_VALIDATOR_TYPE: &str = "set_property_validator_type";
const IMPORT_RULES: &str = "import_rules";
const IMPORT_RULES_FOR: &str = "import_rules_for";

/// Fluent façade over a borrowed [`PropertyRule`].
///
/// The builder holds the rule and the resolver it constructs validators
/// through, nothing else. The stage parameter only restricts which
/// operations can be called next; both views wrap the same rule.
///
/// # Example
///
/// ```rust
/// use rulebind::builder::RuleBuilder;
/// use rulebind::resolve::Container;
/// use rulebind::validators::InclusiveBetween;
/// use rulebind::{member, PropertyRule};
///
/// struct Person {
///     age: u32,
/// }
///
/// let resolver = Container::new();
/// let mut rule = PropertyRule::new(member!(Person, age));
///
/// RuleBuilder::new(&mut rule, &resolver)
///     .set_validator(InclusiveBetween::new(0, 150))?
///     .configure(|rule| rule.set_display_name("Age"));
///
/// assert_eq!(rule.len(), 1);
/// assert_eq!(rule.display_name(), "Age");
/// # Ok::<(), rulebind::builder::BuildError>(())
/// ```
///
/// `configure` is only available once a validator has been attached:
///
/// ```compile_fail
/// use rulebind::builder::RuleBuilder;
/// use rulebind::resolve::Container;
/// use rulebind::{member, PropertyRule};
///
/// struct Person {
///     age: u32,
/// }
///
/// let resolver = Container::new();
/// let mut rule = PropertyRule::new(member!(Person, age));
///
/// RuleBuilder::new(&mut rule, &resolver).configure(|_| {});
/// ```
pub struct RuleBuilder<'a, T, P, S = Initial> {
    rule: &'a mut PropertyRule<T, P>,
    resolver: &'a dyn Resolver,
    _stage: PhantomData<S>,
}

impl<'a, T, P> RuleBuilder<'a, T, P, Initial> {
    /// Start building on `rule`, resolving validator types through `resolver`.
    pub fn new(rule: &'a mut PropertyRule<T, P>, resolver: &'a dyn Resolver) -> Self {
        Self {
            rule,
            resolver,
            _stage: PhantomData,
        }
    }
}

impl<'a, T, P: 'static, S: Stage> RuleBuilder<'a, T, P, S> {
    /// The rule being built.
    pub fn rule(&self) -> &PropertyRule<T, P> {
        &*self.rule
    }

    /// Attach a validator unit.
    pub fn set_validator<V>(self, validator: V) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: PropertyValidator<P> + 'static,
    {
        self.append(Some(Arc::new(validator) as SharedValidator<P>), SET_VALIDATOR)
    }

    /// Attach a shared validator unit, failing if there is none.
    pub fn set_shared_validator(
        self,
        validator: Option<SharedValidator<P>>,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError> {
        self.append(validator, SET_SHARED_VALIDATOR)
    }

    /// Attach a validator for the whole property value.
    pub fn set_child_validator<V>(
        self,
        validator: V,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: Validator<P> + 'static,
    {
        self.attach_child(
            Some(Arc::new(validator) as Arc<dyn Validator<P>>),
            SET_CHILD_VALIDATOR,
        )
    }

    /// Attach a shared child validator, failing if there is none.
    pub fn set_shared_child_validator(
        self,
        validator: Option<Arc<dyn Validator<P>>>,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError> {
        self.attach_child(validator, SET_SHARED_CHILD_VALIDATOR)
    }

    /// Resolve a child validator of type `V` and attach it.
    pub fn set_validator_type<V>(self) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: Validator<P> + 'static,
    {
        let validator = resolve::<V>(self.resolver).map(|v| Arc::new(v) as Arc<dyn Validator<P>>);
        self.attach_child(validator, SET_VALIDATOR_TYPE)
    }

    /// Resolve a validator unit of type `V` and attach it.
    pub fn set_property_validator_type<V>(
        self,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: PropertyValidator<P> + 'static,
    {
        let unit = resolve::<V>(self.resolver).map(|v| Arc::new(v) as SharedValidator<P>);
        self.append(unit, SET_PROPERTY_VALIDATOR_TYPE)
    }

    /// Import the units `V` registers for a member with this rule's name.
    pub fn import_rules<V>(self) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: RuleDescriptor + 'static,
    {
        let member = self.rule.property_name();
        self.import_from::<V>(member, IMPORT_RULES)
    }

    /// Import the units `V` registers for `member` of another model.
    pub fn import_rules_for<V, U>(
        self,
        member: Member<U, P>,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: RuleDescriptor + 'static,
    {
        self.import_from::<V>(member.name(), IMPORT_RULES_FOR)
    }

    fn attach_child(
        self,
        validator: Option<Arc<dyn Validator<P>>>,
        operation: &'static str,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError> {
        let unit = validator.map(|v| Arc::new(ChildValidatorAdaptor::new(v)) as SharedValidator<P>);
        self.append(unit, operation)
    }

    fn import_from<V>(
        self,
        member: &str,
        operation: &'static str,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError>
    where
        V: RuleDescriptor + 'static,
    {
        let descriptor = resolve::<V>(self.resolver).ok_or_else(|| null_validator(operation))?;

        // Every unit must fit this property before any is appended.
        let units = descriptor
            .validators_for_member(member)
            .into_iter()
            .map(DescribedValidator::downcast::<P>)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| null_validator(operation))?;

        debug!(
            property = self.rule.property_name(),
            source_member = member,
            count = units.len(),
            "importing rules"
        );

        let mut builder = self.widen();
        for unit in units {
            builder = builder.append(Some(unit), operation)?;
        }
        Ok(builder)
    }

    fn append(
        self,
        validator: Option<SharedValidator<P>>,
        operation: &'static str,
    ) -> Result<RuleBuilder<'a, T, P, Options>, BuildError> {
        let validator = validator.ok_or_else(|| null_validator(operation))?;

        debug!(
            property = self.rule.property_name(),
            validator = validator.name(),
            operation = operation,
            "validator attached"
        );
        self.rule.push(validator);
        Ok(self.widen())
    }

    fn widen(self) -> RuleBuilder<'a, T, P, Options> {
        RuleBuilder {
            rule: self.rule,
            resolver: self.resolver,
            _stage: PhantomData,
        }
    }
}

impl<'a, T, P> RuleBuilder<'a, T, P, Options> {
    /// Run `action` on the underlying rule.
    pub fn configure<F>(self, action: F) -> Self
    where
        F: FnOnce(&mut PropertyRule<T, P>),
    {
        action(&mut *self.rule);
        self
    }
}

fn null_validator(operation: &'static str) -> BuildError {
    warn!(operation = operation, "null validator rejected");
    BuildError::NullArgument {
        argument: "validator",
        operation,
    }
}
