use log::info;
use permalg::{action::LeftAction, ParseError, Perm, PermError};

fn p1() -> Perm {
    Perm::from_vec(vec![6, 2, 1, 5, 4, 3]).unwrap()
}

fn p2() -> Perm {
    Perm::from_cycles("(1 5)(2 3)", 6).unwrap()
}

#[test_log::test]
fn explicit_images() {
    let p1 = p1();
    info!("p1 = {:?}", p1);
    assert_eq!(
        p1.to_string(),
        "1 -> 6\n2 -> 2\n3 -> 1\n4 -> 5\n5 -> 4\n6 -> 3\n"
    );
    assert_eq!(p1.decomposition().to_string(), "(1 6 3)(4 5)");
    assert_eq!(p1.order(), 6);
    assert_eq!(
        p1.inverse().to_string(),
        "1 -> 3\n2 -> 2\n3 -> 6\n4 -> 5\n5 -> 4\n6 -> 1\n"
    );
}

#[test_log::test]
fn cycle_notation() {
    let p2 = p2();
    assert_eq!(
        p2.to_string(),
        "1 -> 5\n2 -> 3\n3 -> 2\n4 -> 4\n5 -> 1\n6 -> 6\n"
    );
    assert_eq!(p2.decomposition().to_string(), "(1 5)(2 3)");
    assert_eq!(p2.order(), 2);
    assert_eq!(p2.inverse(), p2);
}

#[test_log::test]
fn products() {
    let (p1, p2) = (p1(), p2());

    let p1_p2 = (&p1 * &p2).unwrap();
    assert_eq!(p1_p2.image_of(1).unwrap(), 4);
    assert_eq!(
        p1_p2.image_of(1).unwrap(),
        p1.image_of(p2.image_of(1).unwrap()).unwrap()
    );
    assert_eq!(p1_p2.as_slice(), &[4, 1, 2, 5, 6, 3]);
    assert_eq!(p1_p2.decomposition().to_string(), "(1 4 5 6 3 2)");

    let p2_p1 = (&p2 * &p1).unwrap();
    assert_eq!(p2_p1.as_slice(), &[6, 3, 5, 1, 4, 2]);
    assert_ne!(p1_p2, p2_p1);
    assert_eq!(p1.left_apply(&p2).unwrap(), p1_p2);
}

#[test_log::test]
fn powers() {
    let p1 = p1();
    assert_eq!(p1.pow(0), Perm::identity(6));
    assert_eq!(p1.pow(1), p1);
    assert_eq!(p1.pow(-1), p1.inverse());
    assert_eq!(p1.pow(3).decomposition().to_string(), "(4 5)");
    assert_eq!(p1.pow(-4), p1.pow(2));
    assert_eq!(p1.pow(1_000_000_007u64), p1.pow(1_000_000_007u64 % 6));
}

#[test_log::test]
fn identity() {
    for size in 0..5 {
        let identity = Perm::from_cycles("", size).unwrap();
        assert_eq!(identity, Perm::identity(size));
        assert_eq!(identity.order(), 1);
        assert_eq!(identity.decomposition().to_string(), "");
    }
}

#[test_log::test]
fn failures() {
    let err = p1().compose(&Perm::identity(5)).unwrap_err();
    assert_eq!(err, PermError::SizeMismatch { left: 6, right: 5 });
    assert_eq!(err.to_string(), "Mismatched permutation sizes 6 and 5");

    assert_eq!(
        p1().image_of(7),
        Err(PermError::ElementOutOfRange {
            element: 7,
            size: 6
        })
    );
    assert_eq!(
        Perm::from_vec(vec![1, 1, 2]),
        Err(PermError::DuplicateImage { image: 1 })
    );
    assert!(matches!(
        Perm::from_cycles("(1 2)(3 x)", 6),
        Err(PermError::Parse(ParseError::InvalidToken { .. }))
    ));
    assert!(matches!(
        Perm::from_cycles("(1 9)", 6),
        Err(PermError::Parse(ParseError::ElementOutOfRange {
            element: 9,
            size: 6
        }))
    ));
}
