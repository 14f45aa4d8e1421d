use ::lineup::ffi::{reorg_dmatrix, reorg_imatrix, free_dmatrix_table, free_imatrix_table};
use ::pretty_assertions::assert_eq;
use ::rand::Rng;

use ::std::os::raw::{c_double, c_int};
use ::std::ptr;
use ::std::slice;
use ::std::sync::Once;

static LOGGER_ONCE: Once = Once::new();

fn init_logger() {
    LOGGER_ONCE.call_once(|| {
        env_logger::Builder::new()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .init();
    });
}

/// Calls `reorg_dmatrix` and copies the resulting table, freeing the original.
fn dmatrix_table(nrow: c_int, ncol: c_int, data: &mut [c_double]) -> Option<Vec<*mut c_double>>
{
    let mut out: *mut *mut c_double = ptr::null_mut();
    unsafe {
        reorg_dmatrix(nrow, ncol, data.as_mut_ptr(), &mut out);
        if out.is_null() {
            return None;
        }
        let table = slice::from_raw_parts(out, ncol as usize).to_vec();
        free_dmatrix_table(out, ncol);
        Some(table)
    }
}

#[test]
fn three_by_two() {
    init_logger();
    let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let base = data.as_mut_ptr();
    let table = dmatrix_table(3, 2, &mut data).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table[0], base);
    assert_eq!(table[1], base.wrapping_add(3));
    unsafe {
        assert_eq!(slice::from_raw_parts(table[0], 3), &[1.0, 2.0, 3.0][..]);
        assert_eq!(slice::from_raw_parts(table[1], 3), &[4.0, 5.0, 6.0][..]);
    }
}

#[test]
fn one_row() {
    init_logger();
    let mut data = vec![10.0, 20.0, 30.0, 40.0];
    let base = data.as_mut_ptr();
    let table = dmatrix_table(1, 4, &mut data).unwrap();

    assert_eq!(table.len(), 4);
    for i in 0..4 {
        assert_eq!(table[i], base.wrapping_add(i));
        assert_eq!(unsafe { *table[i] }, data[i]);
    }
}

#[test]
fn one_column() {
    init_logger();
    let mut data = vec![7.0, 8.0, 9.0];
    let base = data.as_mut_ptr();
    assert_eq!(dmatrix_table(3, 1, &mut data).unwrap(), vec![base]);
}

#[test]
fn random_dims() {
    init_logger();
    let mut rng = ::rand::thread_rng();
    for _ in 0..100 {
        let nrow: c_int = rng.gen_range(1, 20);
        let ncol: c_int = rng.gen_range(1, 20);
        let len = (nrow * ncol) as usize;
        let mut data: Vec<c_double> = (0..len).map(|i| -(i as c_double)).collect();
        let before = data.clone();
        let base = data.as_mut_ptr();

        let table = dmatrix_table(nrow, ncol, &mut data).unwrap();
        assert_eq!(table.len(), ncol as usize);
        for (i, &col) in table.iter().enumerate() {
            let offset = i * nrow as usize;
            assert_eq!(col, base.wrapping_add(offset));
            assert_eq!(unsafe { *col }, -(offset as c_double));
        }
        assert_eq!(data, before);
    }
}

#[test]
fn integer_matrix() {
    init_logger();
    let mut data: Vec<c_int> = vec![1, 2, 1, 3, 3, 2, 1, 1];
    let base = data.as_mut_ptr();
    let mut out: *mut *mut c_int = ptr::null_mut();
    unsafe {
        reorg_imatrix(2, 4, base, &mut out);
        assert!(!out.is_null());

        let table = slice::from_raw_parts(out, 4);
        assert_eq!(table[0], base);
        assert_eq!(*table[3].add(1), 1);
        assert_eq!(slice::from_raw_parts(table[1], 2), &[1, 3][..]);

        free_imatrix_table(out, 4);
    }
}

#[test]
fn writes_through_table_reach_the_buffer() {
    init_logger();
    let mut data = vec![0.0; 6];
    let mut out: *mut *mut c_double = ptr::null_mut();
    unsafe {
        reorg_dmatrix(2, 3, data.as_mut_ptr(), &mut out);
        let table = slice::from_raw_parts(out, 3);
        *table[2].add(1) = 5.0;
        *table[0] = 1.0;
        free_dmatrix_table(out, 3);
    }
    assert_eq!(data, vec![1.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
}

#[test]
fn bad_dims_give_null() {
    init_logger();
    let mut data = vec![0.0; 4];
    assert_eq!(dmatrix_table(0, 2, &mut data), None);
    assert_eq!(dmatrix_table(2, 0, &mut data), None);
    assert_eq!(dmatrix_table(-1, 2, &mut data), None);
    assert_eq!(dmatrix_table(2, -3, &mut data), None);
}

#[test]
fn null_pointers() {
    init_logger();

    // null data
    let mut out: *mut *mut c_double = 0x10 as *mut _;
    unsafe { reorg_dmatrix(2, 2, ptr::null_mut(), &mut out) };
    assert!(out.is_null());

    // null output is a no-op
    let mut data = vec![0.0; 4];
    unsafe { reorg_dmatrix(2, 2, data.as_mut_ptr(), ptr::null_mut()) };

    // freeing null is a no-op
    unsafe {
        free_dmatrix_table(ptr::null_mut(), 2);
        free_imatrix_table(ptr::null_mut(), 2);
    }
}

#[test]
fn free_with_bad_column_count_leaves_table_alone() {
    init_logger();
    let mut data = vec![1.0, 2.0, 3.0, 4.0];
    let mut out: *mut *mut c_double = ptr::null_mut();
    unsafe {
        reorg_dmatrix(2, 2, data.as_mut_ptr(), &mut out);
        assert!(!out.is_null());

        // rejected; the table must still be readable afterwards
        free_dmatrix_table(out, 0);
        free_dmatrix_table(out, -1);
        assert_eq!(*slice::from_raw_parts(out, 2)[1], 3.0);

        free_dmatrix_table(out, 2);
    }
}

#[test]
fn rust_view_agrees_with_c_table() {
    init_logger();
    let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let table = dmatrix_table(2, 3, &mut data).unwrap();

    let x = ::lineup::reorganize(2, 3, &data).unwrap();
    let columns: ::lineup::ColumnIter<'_, '_, c_double> = x.iter();
    for (col, &raw) in columns.zip(&table) {
        assert_eq!(col.as_ptr(), raw as *const c_double);
    }
}
