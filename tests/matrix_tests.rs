// tests/matrix_tests.rs

use linalg_engine::{initializers, LinalgError, Matrix, Vector};

const EPS: f64 = 1e-12;

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn construct_from_rows() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert_eq!(a.rows(), 2);
    assert_eq!(a.columns(), 3);
    assert!(!a.is_square());
    assert_eq!(a[(1, 2)], 6.0);
    assert_eq!(a.get(1, 2), Some(6.0));
    assert_eq!(a.get(2, 0), None);
    assert_eq!(a.get(0, 3), None);
}

#[test]
fn construct_rejects_empty_and_ragged() {
    assert_eq!(Matrix::from_rows(vec![]), Err(LinalgError::EmptyMatrix));
    assert_eq!(Matrix::from_rows(vec![vec![]]), Err(LinalgError::EmptyMatrix));
    assert_eq!(Matrix::zeros(0, 3), Err(LinalgError::EmptyMatrix));
    assert_eq!(Matrix::zeros(3, 0), Err(LinalgError::EmptyMatrix));
    assert!(matches!(
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        Matrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0]),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn zeros_and_identity() {
    let z = Matrix::zeros(2, 3).unwrap();
    assert_eq!(z.as_slice(), &[0.0; 6]);
    let i = Matrix::identity(3).unwrap();
    assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn from_fn_uses_one_based_coordinates() {
    let a = Matrix::from_fn(2, 2, |r, c| (10 * r + c) as f64).unwrap();
    assert_eq!(a.as_slice(), &[11.0, 12.0, 21.0, 22.0]);

    let b = Matrix::from_fn_with_dims(3, 3, initializers::increment).unwrap();
    assert_eq!(
        b,
        m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
    );
}

#[test]
fn set_values_overwrites_every_cell() {
    let mut a = Matrix::from_fn_with_dims(2, 3, initializers::increment).unwrap();
    a.set_values(initializers::identity);
    assert_eq!(a.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    a.set_values_with_dims(|r, c, rows, cols| (r * c + rows * cols) as f64);
    assert_eq!(a.as_slice(), &[7.0, 8.0, 9.0, 8.0, 10.0, 12.0]);
}

#[test]
fn clone_is_deep() {
    let a = Matrix::identity(2).unwrap();
    let mut b = a.clone();
    b[(0, 1)] = 5.0;
    assert_eq!(a[(0, 1)], 0.0);
    assert_eq!(b[(0, 1)], 5.0);
}

#[test]
#[should_panic]
fn index_out_of_bounds_panics() {
    let a = Matrix::zeros(2, 3).unwrap();
    let _ = a[(0, 3)];
}

#[test]
fn row_and_column_vectors_are_copies() {
    let mut a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    let mut row = a.row_vector(1).unwrap();
    let col = a.column_vector(1).unwrap();
    assert_eq!(row, Vector::from([3.0, 4.0]));
    assert_eq!(col, Vector::from([2.0, 4.0, 6.0]));

    row[0] = 100.0;
    assert_eq!(a[(1, 0)], 3.0);
    a[(2, 1)] = -1.0;
    assert_eq!(col[2], 6.0);

    assert_eq!(
        a.row_vector(3),
        Err(LinalgError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        a.column_vector(2),
        Err(LinalgError::IndexOutOfBounds { index: 2, len: 2 })
    );
}

#[test]
fn add_sub_scale() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = m(vec![vec![0.5, -1.0], vec![2.0, 0.0]]);
    assert_eq!(a.try_add(&b).unwrap().as_slice(), &[1.5, 1.0, 5.0, 4.0]);
    assert_eq!(a.try_sub(&b).unwrap().as_slice(), &[0.5, 3.0, 1.0, 4.0]);
    assert_eq!(a.scale(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(2.0 * &a, &a * 2.0);
    assert_eq!(-&a, a.scale(-1.0));
    // operands untouched
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn add_requires_same_shape() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    assert_eq!(
        a.try_add(&b).unwrap_err().to_string(),
        "dimension mismatch in matrix add: 2x3 vs 3x2"
    );
    assert!(a.try_sub(&b).is_err());
}

#[test]
fn multiply_2x2() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = m(vec![vec![3.0, 1.0], vec![2.0, 1.0]]);
    let c = a.multiply(&b).unwrap();
    assert_eq!(c.as_slice(), &[7.0, 3.0, 17.0, 7.0]);
}

#[test]
fn multiply_rectangular() {
    // 2x3 · 3x1 -> 2x1
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = m(vec![vec![1.0], vec![0.0], vec![-1.0]]);
    let c = a.multiply(&b).unwrap();
    assert_eq!((c.rows(), c.columns()), (2, 1));
    assert_eq!(c.as_slice(), &[-2.0, -2.0]);
}

#[test]
fn multiply_checks_inner_dimensions() {
    // 2x3 · 2x2: rows(A) == columns(B) but columns(A) != rows(B)
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(2, 2).unwrap();
    assert!(matches!(
        a.multiply(&b),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    // 3x2 · 2x2 is fine even though rows(A) != columns(B)
    let a = Matrix::zeros(3, 2).unwrap();
    assert_eq!(a.multiply(&b).unwrap().rows(), 3);
}

#[test]
fn multiply_by_identity_is_noop() {
    let a = m(vec![vec![1.5, -2.0, 3.0], vec![0.25, 5.0, -6.0]]);
    let left = Matrix::identity(2).unwrap().multiply(&a).unwrap();
    let right = a.multiply(&Matrix::identity(3).unwrap()).unwrap();
    assert_eq!(left, a);
    assert_eq!(right, a);
}

#[test]
fn multiply_increment_by_itself() {
    let a = Matrix::from_fn_with_dims(3, 3, initializers::increment).unwrap();
    let sq = a.multiply(&a).unwrap();
    assert_eq!(
        sq,
        m(vec![
            vec![30.0, 36.0, 42.0],
            vec![66.0, 81.0, 96.0],
            vec![102.0, 126.0, 150.0],
        ])
    );
}

#[test]
fn multiply_vector() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let v = Vector::from([1.0, 0.0, -1.0]);
    let r = a.multiply_vector(&v).unwrap();
    assert_eq!(r.dimensions(), 2);
    assert_eq!(r, Vector::from([-2.0, -2.0]));
    assert!(matches!(
        a.multiply_vector(&Vector::from([1.0, 2.0])),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn transpose_2x3() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!((t.rows(), t.columns()), (3, 2));
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(t.transpose(), a);
}

#[test]
fn equality_uses_tolerance() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let close = m(vec![vec![1.0 + 5e-6, 2.0], vec![3.0, 4.0 - 5e-6]]);
    let far = m(vec![vec![1.0 + 1e-4, 2.0], vec![3.0, 4.0]]);
    assert_eq!(a, close);
    assert_ne!(a, far);
    assert_ne!(a, Matrix::zeros(2, 3).unwrap());
    assert!(a.approx_eq(&far, 1e-3));
    assert!(!a.approx_eq(&close, EPS));
}

#[test]
fn display_and_array_string() {
    let a = m(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
    assert_eq!(
        a.to_string(),
        "2x2 Matrix:\n|\t1 \t-2 \t|\n|\t0.5 \t4 \t|"
    );
    assert_eq!(a.to_array_string(), "{1,-2,},\n{0.5,4,},");
}

#[test]
fn construct_rejects_unstorable_shapes() {
    let huge = usize::MAX / 2 + 1;
    assert_eq!(
        Matrix::zeros(huge, 2),
        Err(LinalgError::ShapeOverflow { rows: huge, columns: 2 })
    );
    assert_eq!(
        Matrix::from_row_major(huge, 2, vec![]),
        Err(LinalgError::ShapeOverflow { rows: huge, columns: 2 })
    );
    // element count fits in usize but the byte size does not
    let wide = usize::MAX / 4;
    assert!(matches!(
        Matrix::from_fn(1, wide, |_, _| 0.0),
        Err(LinalgError::ShapeOverflow { .. })
    ));
    assert!(matches!(
        Matrix::from_fn_with_dims(wide, 1, initializers::increment),
        Err(LinalgError::ShapeOverflow { .. })
    ));
    // zero-sized shapes still report as empty
    assert_eq!(
        Matrix::from_row_major(0, huge, vec![]),
        Err(LinalgError::EmptyMatrix)
    );
}
