//! Route components, built eagerly or on first use.

use std::sync::OnceLock;

/// The component a route renders.
///
/// A lazy component is built by its loader the first time it is requested
/// and cached afterwards. The loader runs at most once, even when several
/// threads request the component at the same time.
#[derive(Debug)]
pub enum Component<T> {
    Eager(T),
    Lazy(LazyComponent<T>),
}

#[derive(Debug)]
pub struct LazyComponent<T> {
    loader: fn() -> T,
    cell: OnceLock<T>,
}

impl<T> Component<T> {
    pub fn eager(component: T) -> Self {
        Self::Eager(component)
    }

    pub fn lazy(loader: fn() -> T) -> Self {
        Self::Lazy(LazyComponent {
            loader,
            cell: OnceLock::new(),
        })
    }

    /// Get the component, building it first if it is lazy and not yet loaded.
    pub fn get(&self) -> &T {
        match self {
            Self::Eager(component) => component,
            Self::Lazy(lazy) => lazy.cell.get_or_init(|| {
                tracing::info!("Loading lazy route component");
                (lazy.loader)()
            }),
        }
    }

    /// Whether the component exists already (always true for eager ones).
    pub fn is_loaded(&self) -> bool {
        match self {
            Self::Eager(_) => true,
            Self::Lazy(lazy) => lazy.cell.get().is_some(),
        }
    }
}
