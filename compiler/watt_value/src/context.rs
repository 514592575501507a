//! Binding environment shared by type inference and evaluation.
//!
//! Two persistent name maps, one for types and one for values. Adding a binding
//! returns a new [`Context`] with one more frame in front; older contexts keep seeing
//! the frames they had. Every frame points at a cell in an arena shared by the whole
//! lineage, and [`Context::set_value`] overwrites that cell, so a reassignment is seen
//! by every snapshot that holds the frame.
//!
//! Scoping is the caller's job: take a [`ScopeMark`] with [`Context::enter`] and hand
//! it back to [`Context::restore`] on exit. Cells allocated inside the scope are
//! released then, since no frame outside the scope can point at them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// A single-threaded shared cell.
///
/// All binding cells of one context lineage live in one `LocalScope<Vec<Value>>`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// Error returned by [`Context::set_value`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// No value is bound under this name.
    #[error("'{0}' is not defined")]
    Undefined(String),
}

/// Index into the cell arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellId(usize);

#[derive(Debug)]
struct Frame {
    name: String,
    cell: CellId,
    next: Bindings,
}

type Bindings = Option<Rc<Frame>>;

fn lookup(mut bindings: &Bindings, name: &str) -> Option<CellId> {
    while let Some(frame) = bindings {
        if frame.name == name {
            return Some(frame.cell);
        }
        bindings = &frame.next;
    }
    None
}

/// `bindings` without the most recent frame for `name`. Frames behind it are shared.
fn remove(bindings: &Bindings, name: &str) -> Bindings {
    let mut kept = Vec::new();
    let mut cursor = bindings;
    while let Some(frame) = cursor {
        if frame.name == name {
            return kept.into_iter().rev().fold(frame.next.clone(), |next, f: &Frame| {
                Some(Rc::new(Frame {
                    name: f.name.clone(),
                    cell: f.cell,
                    next,
                }))
            });
        }
        kept.push(&**frame);
        cursor = &frame.next;
    }
    bindings.clone()
}

/// A context together with the arena length at the moment a scope was entered.
#[derive(Debug)]
pub struct ScopeMark {
    context: Context,
    cells: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Context {
    cells: LocalScope<Vec<Value>>,
    types: Bindings,
    values: Bindings,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    pub fn get_type(&self, name: &str) -> Option<Value> {
        lookup(&self.types, name).map(|cell| self.read(cell))
    }

    pub fn get_value(&self, name: &str) -> Option<Value> {
        lookup(&self.values, name).map(|cell| self.read(cell))
    }

    /// Shadow `name` in the type map.
    #[must_use]
    pub fn add_type(&self, name: &str, value: Value) -> Context {
        Context {
            types: self.push(&self.types, name, value),
            ..self.clone()
        }
    }

    /// Shadow `name` in the value map.
    #[must_use]
    pub fn add_value(&self, name: &str, value: Value) -> Context {
        Context {
            values: self.push(&self.values, name, value),
            ..self.clone()
        }
    }

    /// Overwrite the innermost value cell bound to `name`.
    pub fn set_value(&self, name: &str, value: Value) -> Result<(), AssignError> {
        let cell = lookup(&self.values, name)
            .ok_or_else(|| AssignError::Undefined(name.to_string()))?;
        self.cells.borrow_mut()[cell.0] = value;
        Ok(())
    }

    #[must_use]
    pub fn delete_type(&self, name: &str) -> Context {
        Context {
            types: remove(&self.types, name),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn delete_value(&self, name: &str) -> Context {
        Context {
            values: remove(&self.values, name),
            ..self.clone()
        }
    }

    /// A copy with its own cell arena: reassignments made through the copy are not
    /// seen by this context.
    #[must_use]
    pub fn fork(&self) -> Context {
        Context {
            cells: LocalScope::new(self.cells.borrow().clone()),
            types: self.types.clone(),
            values: self.values.clone(),
        }
    }

    pub fn enter(&self) -> ScopeMark {
        ScopeMark {
            context: self.clone(),
            cells: self.cells_in_use(),
        }
    }

    /// The context `mark` was taken from, with every cell allocated since dropped.
    pub fn restore(mark: ScopeMark) -> Context {
        mark.context.cells.borrow_mut().truncate(mark.cells);
        mark.context
    }

    /// Number of cells allocated in this context's arena.
    pub fn cells_in_use(&self) -> usize {
        self.cells.borrow().len()
    }

    fn read(&self, cell: CellId) -> Value {
        self.cells.borrow()[cell.0].clone()
    }

    fn push(&self, bindings: &Bindings, name: &str, value: Value) -> Bindings {
        let mut cells = self.cells.borrow_mut();
        let cell = CellId(cells.len());
        cells.push(value);
        Some(Rc::new(Frame {
            name: name.to_string(),
            cell,
            next: bindings.clone(),
        }))
    }
}

#[cfg(test)]
mod tests;
