//! Proxies for cells that may or may not be materialized.
//!
//! Point access into a sparse vector cannot hand out a plain reference:
//! a void cell has no storage behind it. These little boxes stand in for
//! the cell instead. Reading through them synthesizes the zero value for
//! void cells; writing is only possible where a real cell exists.

use num_traits::Zero;

use crate::error::{Error, Result};

/// Read-only proxy for a possibly-void cell.
#[derive(Debug)]
pub struct CellRef<'a, T> {
    cell: Option<&'a T>,
}

impl<T> Clone for CellRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellRef<'_, T> {}

impl<'a, T> CellRef<'a, T> {
    pub(crate) fn new(cell: Option<&'a T>) -> Self {
        Self { cell }
    }

    /// Return true if no materialized cell backs this proxy.
    pub fn is_void(&self) -> bool {
        self.cell.is_none()
    }

    /// The underlying cell, if it is materialized.
    pub fn as_ref(&self) -> Option<&'a T> {
        self.cell
    }
}

impl<T: Zero + Clone> CellRef<'_, T> {
    /// The value of the cell; zero if the cell is void.
    pub fn value(&self) -> T {
        self.cell.cloned().unwrap_or_else(T::zero)
    }
}

/// Write-through proxy for a possibly-void cell.
///
/// Carries the absolute index of the cell it stands for, so a rejected
/// write can report where it happened.
#[derive(Debug)]
pub struct CellMut<'a, T> {
    cell: Option<&'a mut T>,
    index: usize,
}

impl<'a, T> CellMut<'a, T> {
    pub(crate) fn new(cell: Option<&'a mut T>, index: usize) -> Self {
        Self { cell, index }
    }

    /// Return true if no materialized cell backs this proxy.
    pub fn is_void(&self) -> bool {
        self.cell.is_none()
    }

    /// Absolute index of the cell this proxy stands for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The underlying cell, if it is materialized.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.cell.as_deref_mut()
    }

    /// Assign `value` to the cell.
    ///
    /// Fails with [`Error::VoidWrite`] if the cell is void; a void cell can
    /// only be materialized through the container itself.
    pub fn set(&mut self, value: T) -> Result<&mut T> {
        match self.cell.as_deref_mut() {
            Some(cell) => {
                *cell = value;
                Ok(cell)
            }
            None => Err(Error::VoidWrite(self.index)),
        }
    }
}

impl<T: Zero + Clone> CellMut<'_, T> {
    /// The value of the cell; zero if the cell is void.
    pub fn value(&self) -> T {
        self.cell.as_deref().cloned().unwrap_or_else(T::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ref_void_reads_zero() {
        let r: CellRef<'_, i32> = CellRef::new(None);
        assert!(r.is_void());
        assert_eq!(r.value(), 0);
        assert_eq!(r.as_ref(), None);
    }

    #[test]
    fn test_cell_mut_write_through() {
        let mut v = 5;
        let mut cell = CellMut::new(Some(&mut v), 3);
        assert_eq!(cell.value(), 5);
        cell.set(9).unwrap();
        assert_eq!(v, 9);
    }

    #[test]
    fn test_cell_mut_void_write_fails() {
        let mut cell: CellMut<'_, i32> = CellMut::new(None, 7);
        assert_eq!(cell.set(1), Err(Error::VoidWrite(7)));
        assert_eq!(cell.value(), 0);
    }
}
