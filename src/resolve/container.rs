//! A small type-keyed factory registry.

use super::resolver::{Instance, Resolver, TypeRequest};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

type Factory = Box<dyn Fn() -> Instance + Send + Sync>;

/// Resolver backed by registered factories, one per type.
///
/// Registering a type twice replaces the earlier factory.
///
/// # Example
///
/// ```rust
/// use rulebind::resolve::{resolve, Container};
///
/// #[derive(Default)]
/// struct Settings {
///     strict: bool,
/// }
///
/// let container = Container::new()
///     .register(|| Settings { strict: true })
///     .register_default::<Vec<u8>>();
///
/// assert!(resolve::<Settings>(&container).unwrap().strict);
/// assert!(resolve::<Vec<u8>>(&container).is_some());
/// assert!(resolve::<String>(&container).is_none());
/// ```
pub struct Container {
    factories: HashMap<TypeId, Factory>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory for `V`.
    pub fn register<V, F>(mut self, factory: F) -> Self
    where
        V: Send + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.factories.insert(
            TypeId::of::<V>(),
            Box::new(move || Box::new(factory()) as Instance),
        );
        self
    }

    /// Register plain instantiation of `V` through `Default`.
    pub fn register_default<V>(self) -> Self
    where
        V: Default + Send + 'static,
    {
        self.register(V::default)
    }

    /// Register a value handed out as a fresh clone on every request.
    pub fn with_instance<V>(self, instance: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.register(move || instance.clone())
    }

    pub fn contains(&self, request: TypeRequest) -> bool {
        self.factories.contains_key(&request.type_id())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for Container {
    fn resolve(&self, request: TypeRequest) -> Option<Instance> {
        self.factories
            .get(&request.type_id())
            .map(|factory| factory())
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("registered", &self.factories.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Limit(u32);

    #[test]
    fn empty_container_resolves_nothing() {
        let container = Container::new();

        assert!(container.is_empty());
        assert_eq!(resolve::<Limit>(&container), None);
    }

    #[test]
    fn registered_factory_is_used() {
        let container = Container::new().register(|| Limit(5));

        assert!(container.contains(TypeRequest::of::<Limit>()));
        assert_eq!(resolve::<Limit>(&container), Some(Limit(5)));
    }

    #[test]
    fn register_default_instantiates_plainly() {
        let container = Container::new().register_default::<Limit>();
        assert_eq!(resolve::<Limit>(&container), Some(Limit(0)));
    }

    #[test]
    fn with_instance_clones_per_request() {
        let container = Container::new().with_instance(Limit(9));

        assert_eq!(resolve::<Limit>(&container), Some(Limit(9)));
        assert_eq!(resolve::<Limit>(&container), Some(Limit(9)));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let container = Container::new()
            .register(|| Limit(1))
            .register(|| Limit(2));

        assert_eq!(container.len(), 1);
        assert_eq!(resolve::<Limit>(&container), Some(Limit(2)));
    }
}
