use super::*;

#[test]
fn point_arithmetic() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, -1.0);
    assert_eq!(a + b, Point::new(4.0, 3.0));
    assert_eq!(a - b, Point::new(2.0, 5.0));
    assert_eq!(-a, Point::new(-3.0, -4.0));
    assert_eq!(a * 2.0, Point::new(6.0, 8.0));
    assert_eq!(a.length(), 5.0);
    assert_eq!(Point::ZERO.distance_to(a), 5.0);
}

#[test]
fn card_transform_builders() {
    assert!(CardTransform::default().is_identity());
    let transform = CardTransform::translated(10.0, -4.0).with_rotation(15.0);
    assert_eq!(transform.translation, Point::new(10.0, -4.0));
    assert_eq!(transform.rotation_degrees, 15.0);
    assert!(!transform.is_identity());
    assert!(CardTransform::translated(0.0, 0.0).is_identity());
}
