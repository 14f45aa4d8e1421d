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

use ::std::ops::{Index, IndexMut};
use ::std::{iter, ptr, slice};

/// Bad dimensions given for a flat buffer.
#[derive(Debug, Fail, Copy, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[fail(display = "matrix must have at least one row")]
    ZeroRows,
    #[fail(display = "matrix must have at least one column")]
    ZeroCols,
    #[fail(display = "a {} x {} matrix has too many elements to address", nrow, ncol)]
    Overflow { nrow: usize, ncol: usize },
    #[fail(display = "buffer of length {} cannot hold {} elements", actual, needed)]
    BufferTooShort { needed: usize, actual: usize },
}

/// Returns the number of elements covered by the table.
fn check_dims(nrow: usize, ncol: usize, len: usize) -> Result<usize, DimensionError>
{
    if nrow == 0 {
        return Err(DimensionError::ZeroRows);
    }
    if ncol == 0 {
        return Err(DimensionError::ZeroCols);
    }
    let needed = nrow.checked_mul(ncol).ok_or(DimensionError::Overflow { nrow, ncol })?;
    if len < needed {
        return Err(DimensionError::BufferTooShort { needed, actual: len });
    }
    Ok(needed)
}

/// Borrow a column-major buffer as a table of columns, so that it can be
/// indexed like `x[col][row]`.
///
/// Column `i` starts at element `i * nrow` of `data`.  Nothing is copied;
/// the table holds one slice per column and cannot outlive `data`.
///
/// `data` may be longer than `nrow * ncol`.  The excess is not reachable
/// through the table.
pub fn reorganize<T>(nrow: usize, ncol: usize, data: &[T]) -> FailResult<Columns<'_, T>>
{Ok({
    let size = check_dims(nrow, ncol, data.len())?;
    trace!("reorganize: {} x {} over {} elements", nrow, ncol, data.len());
    Columns::split(nrow, ncol, &data[..size])
})}

/// Mutable version of [`reorganize`].
pub fn reorganize_mut<T>(nrow: usize, ncol: usize, data: &mut [T]) -> FailResult<ColumnsMut<'_, T>>
{Ok({
    let size = check_dims(nrow, ncol, data.len())?;
    trace!("reorganize_mut: {} x {} over {} elements", nrow, ncol, data.len());
    ColumnsMut::split(nrow, ncol, &mut data[..size])
})}

/// Build a table of `ncol` pointers, each `nrow` elements past the last.
///
/// This is the form expected by C code that indexes `x[col][row]`.
///
/// # Safety
///
/// `data` must be valid for `nrow * ncol` elements, and the returned
/// pointers are only meaningful for as long as that remains true.
/// Nothing here is checked.
pub unsafe fn column_pointers<T>(nrow: usize, ncol: usize, data: *mut T) -> Vec<*mut T>
{
    let mut table = Vec::with_capacity(ncol);
    if ncol == 0 {
        return table;
    }

    table.push(data);
    for i in 1..ncol {
        let prev = table[i - 1];
        table.push(prev.add(nrow));
    }
    table
}

//------------------------------

/// Table of borrowed columns over a column-major buffer.
///
/// Produced by [`reorganize`] or [`Matrix::columns`](crate::Matrix::columns).
#[derive(Debug)]
pub struct Columns<'a, T> {
    // invariant: every entry has length nrow, and entry i
    //            begins i * nrow elements into the source buffer
    table: Vec<&'a [T]>,
    nrow: usize,
}

pub type ColumnIter<'b, 'a, T> = iter::Cloned<slice::Iter<'b, &'a [T]>>;

impl<'a, T> Columns<'a, T> {
    // `data` must have exactly nrow * ncol elements.
    pub(crate) fn split(nrow: usize, ncol: usize, data: &'a [T]) -> Self
    {
        debug_assert_eq!(data.len(), nrow * ncol);
        let table = match nrow {
            0 => (0..ncol).map(|_| Default::default()).collect(),
            _ => data.chunks_exact(nrow).collect(),
        };
        Columns { table, nrow }
    }

    pub fn nrow(&self) -> usize { self.nrow }
    pub fn ncol(&self) -> usize { self.table.len() }
    pub fn dims(&self) -> (usize, usize) { (self.nrow, self.ncol()) }

    /// Number of entries in the table (i.e. the number of columns).
    pub fn len(&self) -> usize { self.table.len() }
    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> &'a [T] { self.table[col] }
    pub fn get(&self, col: usize) -> Option<&'a [T]> { self.table.get(col).cloned() }
    pub fn iter(&self) -> ColumnIter<'_, 'a, T> { self.table.iter().cloned() }

    pub fn as_slice(&self) -> &[&'a [T]] { &self.table }
    pub fn into_vec(self) -> Vec<&'a [T]> { self.table }

    /// Address of the first element, or null for an empty table.
    pub fn base_ptr(&self) -> *const T
    { self.table.first().map_or(ptr::null(), |col| col.as_ptr()) }
}

impl<'a, T> Index<usize> for Columns<'a, T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, col: usize) -> &[T] { self.table[col] }
}

impl<'a, T> Index<(usize, usize)> for Columns<'a, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T { &self.table[col][row] }
}

impl<'b, 'a, T> IntoIterator for &'b Columns<'a, T> {
    type Item = &'a [T];
    type IntoIter = ColumnIter<'b, 'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

//------------------------------

/// Table of mutably borrowed columns over a column-major buffer.
#[derive(Debug)]
pub struct ColumnsMut<'a, T> {
    table: Vec<&'a mut [T]>,
    nrow: usize,
}

impl<'a, T> ColumnsMut<'a, T> {
    pub(crate) fn split(nrow: usize, ncol: usize, data: &'a mut [T]) -> Self
    {
        debug_assert_eq!(data.len(), nrow * ncol);
        let table = match nrow {
            0 => (0..ncol).map(|_| Default::default()).collect(),
            _ => data.chunks_exact_mut(nrow).collect(),
        };
        ColumnsMut { table, nrow }
    }

    pub fn nrow(&self) -> usize { self.nrow }
    pub fn ncol(&self) -> usize { self.table.len() }
    pub fn dims(&self) -> (usize, usize) { (self.nrow, self.ncol()) }
    pub fn len(&self) -> usize { self.table.len() }
    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    pub fn column(&self, col: usize) -> &[T] { &self.table[col] }
    pub fn column_mut(&mut self, col: usize) -> &mut [T] { &mut self.table[col] }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, &'a mut [T]> { self.table.iter_mut() }
    pub fn as_mut_slice(&mut self) -> &mut [&'a mut [T]] { &mut self.table }

    pub fn into_vec(self) -> Vec<&'a mut [T]> { self.table }
}

impl<'a, T> Index<usize> for ColumnsMut<'a, T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, col: usize) -> &[T] { &self.table[col] }
}

impl<'a, T> IndexMut<usize> for ColumnsMut<'a, T> {
    #[inline(always)]
    fn index_mut(&mut self, col: usize) -> &mut [T] { &mut self.table[col] }
}

impl<'b, 'a, T> IntoIterator for &'b mut ColumnsMut<'a, T> {
    type Item = &'b mut &'a mut [T];
    type IntoIter = slice::IterMut<'b, &'a mut [T]>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T> Index<(usize, usize)> for ColumnsMut<'a, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T { &self.table[col][row] }
}

impl<'a, T> IndexMut<(usize, usize)> for ColumnsMut<'a, T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T { &mut self.table[col][row] }
}

//------------------------------
