//! Generic object pool
//!
//! Recycles expensive-to-build values (scratch buffers, query result lists)
//! instead of reallocating per frame. The pool only holds released values;
//! acquired values are fully owned by the caller until released back.

/// A free-list pool over values produced by a factory closure
///
/// [`acquire`](Pool::acquire) pops a recycled value or builds a fresh one;
/// [`release`](Pool::release) runs the optional reset hook and returns the
/// value to the free list. Values never given back are simply dropped by
/// the caller, which is allowed.
pub struct Pool<T> {
    free: Vec<T>,
    factory: Box<dyn FnMut() -> T>,
    reset: Option<Box<dyn FnMut(&mut T)>>,
}

impl<T> Pool<T> {
    /// Create a pool whose values come from `factory`
    pub fn new(factory: impl FnMut() -> T + 'static) -> Self {
        Self {
            free: Vec::new(),
            factory: Box::new(factory),
            reset: None,
        }
    }

    /// Create a pool with a reset hook run on every released value
    pub fn with_reset(
        factory: impl FnMut() -> T + 'static,
        reset: impl FnMut(&mut T) + 'static,
    ) -> Self {
        Self {
            free: Vec::new(),
            factory: Box::new(factory),
            reset: Some(Box::new(reset)),
        }
    }

    /// Take a value from the pool, building a fresh one when empty
    pub fn acquire(&mut self) -> T {
        match self.free.pop() {
            Some(value) => value,
            None => (self.factory)(),
        }
    }

    /// Return a value to the pool
    ///
    /// The reset hook (if any) runs exactly once, here, so every value on
    /// the free list is already clean when the next acquire hands it out.
    pub fn release(&mut self, mut value: T) {
        if let Some(reset) = &mut self.reset {
            reset(&mut value);
        }
        self.free.push(value);
    }

    /// Top the free list up to at least `count` values
    ///
    /// Only the shortfall is built; a pool already holding `count` free
    /// values is untouched.
    pub fn preallocate(&mut self, count: usize) {
        while self.free.len() < count {
            let value = (self.factory)();
            self.free.push(value);
        }
    }

    /// Drop every pooled value
    pub fn clear(&mut self) {
        self.free.clear();
    }

    /// Number of values currently available for acquire
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// True when the next acquire must build a fresh value
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

impl<T> std::fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("free", &self.free.len())
            .field("has_reset", &self.reset.is_some())
            .finish()
    }
}
