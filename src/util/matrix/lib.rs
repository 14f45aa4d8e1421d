/* ********************************************************************** **
**  This file is part of lineup.                                          **
**                                                                        **
**  lineup is free software: you can redistribute it and/or modify it     **
**  under the terms of the GNU General Public License, version 3, as      **
**  published by the Free Software Foundation.                            **
**                                                                        **
**      http://www.r-project.org/Licenses/GPL-3                           **
** ********************************************************************** */

//! Column-major views over flat numeric buffers.
//!
//! Matrices handed to us by the host arrive as one long vector in
//! column-major order.  The tools here let you index them as `x[col][row]`
//! without copying anything:
//!
//!  * **[`reorganize`]**: borrow `&[T]` as a table of column slices.
//!  * **[`reorganize_mut`]**: the same for `&mut [T]`.
//!  * **[`column_pointers`]**: the raw pointer table, for code that talks to C.
//!  * **[`Matrix`]**: owned column-major storage with the same views.
//!
//! # Examples
//! ```
//! use ::lineup_matrix::reorganize;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let x = reorganize(3, 2, &data).unwrap();
//! assert_eq!(x[0], [1.0, 2.0, 3.0]);
//! assert_eq!(x[1][2], 6.0);
//! ```

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub type FailResult<T> = Result<T, ::failure::Error>;

pub use self::columns::{reorganize, reorganize_mut, column_pointers};
pub use self::columns::{Columns, ColumnsMut, ColumnIter, DimensionError};
pub use self::matrix::Matrix;

mod columns;
mod matrix;
