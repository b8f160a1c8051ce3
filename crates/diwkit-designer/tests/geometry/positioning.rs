use diwkit_designer::{set_position, PlateShape, Serpentine, SerpentineParameters};

fn params_at(x_pos: f64, y_pos: f64) -> SerpentineParameters {
    SerpentineParameters {
        x_pos,
        y_pos,
        x_width: 20.0,
        y_width: 10.0,
        constant_pitch: true,
        min_pitch: 1.0,
        first_inlet_diameter: 0.4,
        last_inlet_diameter: 0.8,
    }
}

#[test]
fn test_centered_on_rounded_plate_spans_origin() {
    // 20 unit gaps fit, the even count is trimmed to 19
    let (x, y) = set_position(PlateShape::Rounded, 60.0, true, 0.0, 0.0, 20.0, 10.0);
    let serpentine = Serpentine::new(params_at(x, y)).unwrap();

    let xs = serpentine.x_coords();
    let ys = serpentine.y_coords();
    assert_eq!(xs[0], -10.0);
    assert_eq!(xs[xs.len() - 1], 9.0);
    assert_eq!(ys.iter().copied().fold(f64::MIN, f64::max), 5.0);
    assert_eq!(ys.iter().copied().fold(f64::MAX, f64::min), -5.0);
}

#[test]
fn test_centered_on_squared_plate_stays_on_plate() {
    let (x, y) = set_position(PlateShape::Squared, 60.0, true, 0.0, 0.0, 20.0, 10.0);
    assert_eq!((x, y), (20.0, 25.0));

    let serpentine = Serpentine::new(params_at(x, y)).unwrap();
    assert!(serpentine.x_coords().iter().all(|x| (0.0..=60.0).contains(x)));
    assert!(serpentine.y_coords().iter().all(|y| (0.0..=60.0).contains(y)));
}

#[test]
fn test_explicit_position_is_kept() {
    let (x, y) = set_position(PlateShape::Squared, 60.0, false, 7.5, 2.5, 20.0, 10.0);
    let serpentine = Serpentine::new(params_at(x, y)).unwrap();
    assert_eq!(serpentine.points()[0], (7.5, 2.5));
}
