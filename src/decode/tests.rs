//! Error-locator solver and root finder unit tests

use super::*;
use crate::poly::SqrtTable;

/// Product of (x + r) over the given roots.
fn locator_from_roots(roots: &[u16], fld: &Gf2m) -> Poly {
    let mut sigma = Poly::one();
    for &r in roots {
        sigma = sigma.mul(&Poly::from_coeffs(&[r, 1]), fld);
    }
    sigma
}

#[test]
fn zero_syndrome_yields_identity_locator() {
    let fld = Gf2m::new(4).unwrap();
    let goppa = Poly::from_coeffs(&[8, 1, 1]);
    let table = SqrtTable::new(&goppa, &fld).unwrap();

    let sigma = goppa_error_locator(&Poly::default(), &fld, &goppa, &table).unwrap();
    assert_eq!(sigma, Poly::one());

    let sigma = alternant_error_locator(&Poly::default(), &fld, 2).unwrap();
    assert_eq!(sigma, Poly::one());
}

#[test]
fn identity_locator_marks_no_positions() {
    let fld = Gf2m::new(4).unwrap();
    let one = Poly::one();
    assert_eq!(find_roots_brute(&one, &fld).unwrap().weight(), 0);
    assert_eq!(find_roots_trace(&one, &fld).unwrap().weight(), 0);
}

#[test]
fn root_finders_agree_on_split_locators() {
    let cases: &[(u32, &[u16])] = &[
        (3, &[1, 3, 5]),
        (3, &[0, 6]),
        (4, &[0, 2, 7, 11]),
        (4, &[9]),
        (5, &[4, 19]),
        (5, &[1, 2, 3, 30, 31]),
    ];
    for &(m, roots) in cases {
        let fld = Gf2m::new(m).unwrap();
        let sigma = locator_from_roots(roots, &fld);

        let brute = find_roots_brute(&sigma, &fld).unwrap();
        let trace = find_roots_trace(&sigma, &fld).unwrap();
        assert_eq!(brute, trace, "m={} roots={:?}", m, roots);

        let mut expected: alloc::vec::Vec<usize> = roots.iter().map(|&r| r as usize).collect();
        expected.sort_unstable();
        assert_eq!(brute.positions(), expected);
    }
}

#[test]
fn scaled_locator_finds_same_roots() {
    let fld = Gf2m::new(4).unwrap();
    let mut sigma = locator_from_roots(&[3, 12], &fld);
    sigma.scale(7, &fld);
    let brute = find_roots_brute(&sigma, &fld).unwrap();
    let trace = find_roots_trace(&sigma, &fld).unwrap();
    assert_eq!(brute.positions(), &[3, 12]);
    assert_eq!(brute, trace);
}

#[test]
fn unsplittable_locator_fails_both_finders() {
    // x^2 + x + 8 is irreducible over GF(16): no roots in the field
    let fld = Gf2m::new(4).unwrap();
    let sigma = Poly::from_coeffs(&[8, 1, 1]);
    assert_eq!(find_roots_brute(&sigma, &fld), Err(Error::DecodeFailure));
    assert_eq!(find_roots_trace(&sigma, &fld), Err(Error::DecodeFailure));
}

#[test]
fn alternant_rejects_zero_error_budget() {
    let fld = Gf2m::new(4).unwrap();
    let syndrome = Poly::from_coeffs(&[1, 2, 3, 4]);
    assert!(alternant_error_locator(&syndrome, &fld, 0).is_err());
}

#[test]
fn patterson_rejects_zero_goppa() {
    let fld = Gf2m::new(4).unwrap();
    let goppa = Poly::from_coeffs(&[8, 1, 1]);
    let table = SqrtTable::new(&goppa, &fld).unwrap();
    let syndrome = Poly::from_coeffs(&[1, 1]);
    assert!(goppa_error_locator(&syndrome, &fld, &Poly::default(), &table).is_err());
}

#[test]
fn error_vector_accessors() {
    let mut ev = ErrorVector::new(8);
    assert_eq!(ev.len(), 8);
    assert_eq!(ev.weight(), 0);
    ev.set(1);
    ev.set(6);
    assert!(ev.get(1));
    assert!(!ev.get(2));
    assert_eq!(ev.weight(), 2);
    assert_eq!(ev.positions(), &[1, 6]);
}
