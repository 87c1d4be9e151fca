//! Type identity for capabilities and their implementations.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The contract a caller asks for, usually a trait object type such as `dyn Greeter`.
#[derive(Clone, Copy, Debug)]
pub struct Capability {
    id: TypeId,
    name: &'static str,
}

impl Capability {
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name, e.g. `dyn app::greet::Greeter`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment without `dyn`, generic arguments or extra bounds, e.g. `Greeter`.
    pub fn simple_name(&self) -> &'static str {
        simple_name(self.name)
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Capability {}

impl Hash for Capability {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// The concrete implementation type selected at runtime. Cache key of the registry.
#[derive(Clone, Copy, Debug)]
pub struct ConcreteType {
    id: TypeId,
    name: &'static str,
}

impl ConcreteType {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn simple_name(&self) -> &'static str {
        simple_name(self.name)
    }
}

impl PartialEq for ConcreteType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConcreteType {}

impl Hash for ConcreteType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn simple_name(full: &'static str) -> &'static str {
    let head = full.strip_prefix("dyn ").unwrap_or(full);
    let head = &head[..head.find('<').unwrap_or(head.len())];
    let head = head.split(" + ").next().unwrap_or(head);
    let start = head.rfind("::").map_or(0, |i| i + 2);
    &head[start..]
}

type Upcast = Arc<dyn Fn(Arc<dyn Any + Send + Sync>) -> Option<Box<dyn Any>> + Send + Sync>;

/// One discovered candidate: a constructed instance plus what it provides.
///
/// The instance is kept as its concrete type so the registry can share it
/// between every capability that concrete type is registered for; `upcast`
/// turns a shared instance back into `Arc<C>` for the capability at hand.
pub struct Implementation {
    capability: Capability,
    concrete: ConcreteType,
    instance: Arc<dyn Any + Send + Sync>,
    upcast: Upcast,
}

impl Implementation {
    /// Wrap `instance` as a provider of `C`. `upcast` is normally the unsizing
    /// coercion `|instance| instance` (see `provider!`).
    pub fn new<C, T>(instance: Arc<T>, upcast: fn(Arc<T>) -> Arc<C>) -> Self
    where
        C: ?Sized + 'static,
        T: Send + Sync + 'static,
    {
        Self {
            capability: Capability::of::<C>(),
            concrete: ConcreteType::of::<T>(),
            instance,
            upcast: Arc::new(move |shared: Arc<dyn Any + Send + Sync>| {
                shared
                    .downcast::<T>()
                    .ok()
                    .map(|concrete| Box::new(upcast(concrete)) as Box<dyn Any>)
            }),
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn concrete(&self) -> ConcreteType {
        self.concrete
    }

    pub fn instance(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }

    /// View `shared` (an instance of this implementation's concrete type) as `C`.
    pub fn cast<C: ?Sized + 'static>(&self, shared: Arc<dyn Any + Send + Sync>) -> Option<Arc<C>> {
        (self.upcast)(shared)?
            .downcast::<Arc<C>>()
            .ok()
            .map(|boxed| *boxed)
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("capability", &self.capability.name())
            .field("concrete", &self.concrete.name())
            .finish_non_exhaustive()
    }
}
