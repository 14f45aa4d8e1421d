/* ********************************************************************** **
**  This file is part of lineup.                                          **
**                                                                        **
**  lineup is free software: you can redistribute it and/or modify it     **
**  under the terms of the GNU General Public License, version 3, as      **
**  published by the Free Software Foundation.                            **
**                                                                        **
**      http://www.r-project.org/Licenses/GPL-3                           **
** ********************************************************************** */

//! Entry points called by the host environment.
//!
//! The host stores every matrix as one long column-major vector.  These
//! functions build a table of column pointers over such a vector so that
//! native code can write `x[col][row]`.
//!
//! The table is allocated here and must be handed back to the matching
//! `free_*_table` function once the host is done with it.  The data itself
//! is never copied, and remains owned by the host.

use crate::FailResult;
use ::lineup_matrix::column_pointers;

use ::std::os::raw::{c_double, c_int};
use ::std::panic::{self, AssertUnwindSafe};
use ::std::ptr;

/// Convert a dimension received from the host.
fn positive_dim(value: c_int, name: &str) -> FailResult<usize>
{
    if value <= 0 {
        bail!("{} must be positive, got {}", name, value);
    }
    Ok(value as usize)
}

unsafe fn build_table<T>(nrow: c_int, ncol: c_int, x: *mut T) -> FailResult<Box<[*mut T]>>
{Ok({
    let nrow = positive_dim(nrow, "nrow")?;
    let ncol = positive_dim(ncol, "ncol")?;
    if x.is_null() {
        bail!("null data pointer for a {} x {} matrix", nrow, ncol);
    }
    if nrow.checked_mul(ncol).is_none() {
        bail!("a {} x {} matrix has too many elements to address", nrow, ncol);
    }
    column_pointers(nrow, ncol, x).into_boxed_slice()
})}

/// Shared body of the `reorg_*` entry points.
///
/// On any failure the error is logged and `*out` is set to null.
unsafe fn reorg_matrix<T>(func: &str, nrow: c_int, ncol: c_int, x: *mut T, out: *mut *mut *mut T)
{
    api_trace!("{}({}, {}, {:p}, {:p})", func, nrow, ncol, x, out);

    if out.is_null() {
        error!("{}: null output pointer; nothing to do", func);
        return;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| build_table(nrow, ncol, x)));
    *out = match result {
        Ok(Ok(table)) => Box::into_raw(table) as *mut *mut T,
        Ok(Err(e)) => {
            error!("{}: {}", func, e);
            ptr::null_mut()
        },
        Err(_) => {
            error!("{}: panicked while building the column table", func);
            ptr::null_mut()
        },
    };
    api_trace!("{} -> {:p}", func, *out);
}

unsafe fn free_table<T>(func: &str, table: *mut *mut T, ncol: c_int)
{
    api_trace!("{}({:p}, {})", func, table, ncol);

    if table.is_null() {
        return;
    }
    if ncol <= 0 {
        // no table of this length was ever handed out, so leak it
        error!("{}: bad column count {}; table {:p} was not freed", func, ncol, table);
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(table, ncol as usize)));
}

/// Reorganize a column-major matrix of doubles so that it can be indexed
/// as `X[col][row]`.
///
/// On success, `*out` receives a table of `ncol` pointers into `x`, where
/// entry `i` is `x + i * nrow`.  On bad arguments an error is logged and
/// `*out` is set to null.  If `out` itself is null, nothing happens.
///
/// # Safety
///
/// `x` must point to at least `nrow * ncol` doubles, and must stay valid
/// (and not be reallocated) for as long as the table is used.  The table
/// must eventually be released with [`free_dmatrix_table`].
#[no_mangle]
pub unsafe extern "C" fn reorg_dmatrix(
    nrow: c_int,
    ncol: c_int,
    x: *mut c_double,
    out: *mut *mut *mut c_double,
) {
    reorg_matrix("reorg_dmatrix", nrow, ncol, x, out)
}

/// Integer counterpart of [`reorg_dmatrix`].
///
/// # Safety
///
/// Same as [`reorg_dmatrix`], with the table released by [`free_imatrix_table`].
#[no_mangle]
pub unsafe extern "C" fn reorg_imatrix(
    nrow: c_int,
    ncol: c_int,
    x: *mut c_int,
    out: *mut *mut *mut c_int,
) {
    reorg_matrix("reorg_imatrix", nrow, ncol, x, out)
}

/// Release a table produced by [`reorg_dmatrix`].  Null is ignored.
///
/// # Safety
///
/// `table` must be null or come from [`reorg_dmatrix`] called with the
/// same `ncol`, and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn free_dmatrix_table(table: *mut *mut c_double, ncol: c_int)
{ free_table("free_dmatrix_table", table, ncol) }

/// Release a table produced by [`reorg_imatrix`].  Null is ignored.
///
/// # Safety
///
/// See [`free_dmatrix_table`].
#[no_mangle]
pub unsafe extern "C" fn free_imatrix_table(table: *mut *mut c_int, ncol: c_int)
{ free_table("free_imatrix_table", table, ncol) }
