/* ********************************************************************** **
**  This file is part of lineup.                                          **
**                                                                        **
**  lineup is free software: you can redistribute it and/or modify it     **
**  under the terms of the GNU General Public License, version 3, as      **
**  published by the Free Software Foundation.                            **
**                                                                        **
**      http://www.r-project.org/Licenses/GPL-3                           **
** ********************************************************************** */

use crate::FailResult;
use crate::columns::{Columns, ColumnsMut};

use ::std::ops::{Index, IndexMut};

/// Owned matrix type with Fortran (column-major) layout.
///
/// This is the layout the host uses, so a `Matrix` can be handed across
/// the boundary as a flat buffer and viewed the same way on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // column-contiguous data
    data: Vec<T>,
    // invariant: nrow * ncol == data.len()
    nrow: usize,
    ncol: usize,
}

impl<T> Matrix<T> {
    pub fn from_column_major_data((nrow, ncol): (usize, usize), data: Vec<T>) -> FailResult<Self>
    {
        match nrow.checked_mul(ncol) {
            Some(size) if size == data.len() => {},
            _ => bail!("{} elements cannot form a {} x {} matrix", data.len(), nrow, ncol),
        }
        Ok(Matrix { data, nrow, ncol })
    }

    pub fn dims(&self) -> (usize, usize) { (self.nrow, self.ncol) }
    pub fn num_rows(&self) -> usize { self.nrow }
    pub fn num_cols(&self) -> usize { self.ncol }
    pub fn is_square(&self) -> bool { self.nrow == self.ncol }
    pub fn size(&self) -> usize { self.data.len() }

    pub fn column_major_data(&self) -> &[T] { &self.data }
    pub fn column_major_data_mut(&mut self) -> &mut [T] { &mut self.data }
    pub fn into_column_major_data(self) -> Vec<T> { self.data }

    /// View as a table of columns.  Never fails, since the invariant
    /// already guarantees the buffer is the right size.
    ///
    /// A matrix with no columns produces an empty table.
    pub fn columns(&self) -> Columns<'_, T>
    { Columns::split(self.nrow, self.ncol, &self.data) }

    pub fn columns_mut(&mut self) -> ColumnsMut<'_, T>
    { ColumnsMut::split(self.nrow, self.ncol, &mut self.data) }
}

impl<T: Clone> Matrix<T> {
    pub fn new_filled((nrow, ncol): (usize, usize), fill: &T) -> Self
    {
        let size = nrow.checked_mul(ncol)
            .unwrap_or_else(|| panic!("a {} x {} matrix has too many elements", nrow, ncol));
        Matrix {
            data: (0..size).map(|_| fill.clone()).collect(),
            nrow,
            ncol,
        }
    }

    pub fn to_transpose(&self) -> Self
    {
        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..self.nrow {
            for c in 0..self.ncol {
                data.push(self[(r, c)].clone());
            }
        }
        Matrix { data, nrow: self.ncol, ncol: self.nrow }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &T
    {
        assert!(r < self.nrow, "row {} out of bounds for {} rows", r, self.nrow);
        &self.data[c * self.nrow + r]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T
    {
        assert!(r < self.nrow, "row {} out of bounds for {} rows", r, self.nrow);
        &mut self.data[c * self.nrow + r]
    }
}
