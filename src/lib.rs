/* ********************************************************************** **
**  This file is part of lineup.                                          **
**                                                                        **
**  lineup is free software: you can redistribute it and/or modify it     **
**  under the terms of the GNU General Public License, version 3, as      **
**  published by the Free Software Foundation.                            **
**                                                                        **
**      http://www.r-project.org/Licenses/GPL-3                           **
** ********************************************************************** */
#![deny(unused_must_use)]

#[macro_use] extern crate log;
#[macro_use] extern crate failure;

use ::log::Level;

pub use ::lineup_matrix::FailResult;
pub use ::lineup_matrix::{reorganize, reorganize_mut, column_pointers};
pub use ::lineup_matrix::{Columns, ColumnsMut, ColumnIter, DimensionError, Matrix};

/// Log target for every call that crosses the C ABI.
pub const API_TRACE_TARGET: &str = concat!(module_path!(), "::c_api");
pub const API_TRACE_LEVEL: Level = Level::Trace;

macro_rules! api_trace {
    ($($t:tt)*) => { log!(target: crate::API_TRACE_TARGET, crate::API_TRACE_LEVEL, $($t)*) };
}

pub mod ffi;
