//! The resolver seam used to obtain validator instances.

use std::any::{self, Any, TypeId};
use std::fmt;
use tracing::debug;

/// A boxed instance produced by a resolver.
pub type Instance = Box<dyn Any + Send>;

/// Identifies the type a caller wants an instance of.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRequest {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeRequest {
    /// Request an instance of `V`.
    pub fn of<V: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            type_name: any::type_name::<V>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this request asks for `V`.
    pub fn is<V: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<V>()
    }
}

impl fmt::Debug for TypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRequest").field(&self.type_name).finish()
    }
}

/// Maps a requested type to an instance.
///
/// The rule builder never constructs validators itself; every type-driven
/// operation asks a resolver. Returning `None` means the type is unknown to
/// this resolver.
///
/// Any `Fn(TypeRequest) -> Option<Instance>` closure is a resolver:
///
/// ```rust
/// use rulebind::resolve::{resolve, Instance, Resolver, TypeRequest};
///
/// #[derive(Default)]
/// struct Widget;
///
/// let resolver = |request: TypeRequest| -> Option<Instance> {
///     request.is::<Widget>().then(|| Box::new(Widget) as Instance)
/// };
///
/// assert!(resolve::<Widget>(&resolver).is_some());
/// assert!(resolve::<String>(&resolver).is_none());
/// ```
pub trait Resolver: Send + Sync {
    fn resolve(&self, request: TypeRequest) -> Option<Instance>;
}

impl<F> Resolver for F
where
    F: Fn(TypeRequest) -> Option<Instance> + Send + Sync,
{
    fn resolve(&self, request: TypeRequest) -> Option<Instance> {
        self(request)
    }
}

/// Resolve and downcast an instance of `V`.
///
/// A resolver that yields nothing and one that yields a value of another
/// type are treated the same: both give `None`.
pub fn resolve<V: 'static>(resolver: &dyn Resolver) -> Option<V> {
    let request = TypeRequest::of::<V>();
    let Some(instance) = resolver.resolve(request) else {
        debug!(requested = request.type_name(), "resolver produced no instance");
        return None;
    };

    match instance.downcast::<V>() {
        Ok(value) => Some(*value),
        Err(_) => {
            debug!(
                requested = request.type_name(),
                "resolver produced an instance of another type"
            );
            None
        }
    }
}
