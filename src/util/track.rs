use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times a callback has been invoked, so tests can assert that a combinator was
/// lazy (or wasn't).
#[derive(Debug, Clone, Default)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
