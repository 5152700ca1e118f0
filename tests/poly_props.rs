//! Property tests for the polynomial engine over GF(2^3)

use mceliece_algorithms::{Gf2m, Poly};
use proptest::collection::vec;
use proptest::prelude::*;

fn fld() -> Gf2m {
    Gf2m::new(3).unwrap()
}

proptest! {
    #[test]
    fn addition_is_an_involution(
        a in vec(0u16..8, 0..12),
        b in vec(0u16..8, 0..12),
    ) {
        let fld = fld();
        let mut orig = Poly::from_coeffs(&a);
        orig.strip();

        let mut t = Poly::from_coeffs(&a);
        let b = Poly::from_coeffs(&b);
        t.add(&b, &fld);
        t.add(&b, &fld);
        t.strip();
        prop_assert_eq!(t, orig);
    }

    #[test]
    fn division_identity_holds(
        a in vec(0u16..8, 0..12),
        b in vec(0u16..8, 1..8),
    ) {
        let fld = fld();
        let a = Poly::from_coeffs(&a);
        let b = Poly::from_coeffs(&b);
        prop_assume!(!b.is_zero());

        let (q, r) = a.divmod(&b, &fld).unwrap();
        prop_assert!(r.degree() < b.degree());

        let mut back = q.mul(&b, &fld);
        back.add(&r, &fld);
        back.strip();
        let mut a2 = a.clone();
        a2.strip();
        prop_assert_eq!(back, a2);
    }

    #[test]
    fn gcd_divides_both(
        a in vec(0u16..8, 1..10),
        b in vec(0u16..8, 1..10),
    ) {
        let fld = fld();
        let a = Poly::from_coeffs(&a);
        let b = Poly::from_coeffs(&b);
        prop_assume!(!a.is_zero() && !b.is_zero());

        let g = a.gcd(&b, &fld).unwrap();
        prop_assert!(!g.is_zero());

        let mut ra = a.clone();
        ra.rem_assign(&g, &fld).unwrap();
        prop_assert!(ra.is_zero());
        let mut rb = b.clone();
        rb.rem_assign(&g, &fld).unwrap();
        prop_assert!(rb.is_zero());
    }

    #[test]
    fn square_matches_self_product(a in vec(0u16..8, 0..12)) {
        let fld = fld();
        let p = Poly::from_coeffs(&a);
        let mut sq = p.clone();
        sq.square(&fld);
        sq.strip();
        let mut prod = p.mul(&p, &fld);
        prod.strip();
        prop_assert_eq!(sq, prod);
    }
}
