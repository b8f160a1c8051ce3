use diwkit_designer::{Segment, Serpentine, SerpentineParameters, Sketch};
use proptest::prelude::*;

fn serpentine_params() -> impl Strategy<Value = SerpentineParameters> {
    (
        -50.0f64..50.0,
        -50.0f64..50.0,
        0.1f64..5.0,
        1.0f64..40.0,
        0.5f64..20.0,
        any::<bool>(),
    )
        .prop_map(|(x_pos, y_pos, min_pitch, extra, y_width, constant_pitch)| {
            SerpentineParameters {
                x_pos,
                y_pos,
                x_width: min_pitch + extra,
                y_width,
                constant_pitch,
                min_pitch,
                first_inlet_diameter: 0.4,
                last_inlet_diameter: 0.8,
            }
        })
}

proptest! {
    #[test]
    fn serpentine_fits_requested_width(params in serpentine_params()) {
        let x_width = params.x_width;
        let serpentine = Serpentine::new(params).unwrap();
        // coordinates are rounded to 0.01 mm
        prop_assert!(serpentine.width() <= x_width + 0.011);
    }

    #[test]
    fn serpentine_has_odd_gap_count_and_closes_on_start_y(params in serpentine_params()) {
        let serpentine = Serpentine::new(params).unwrap();
        prop_assert_eq!(serpentine.distances().len() % 2, 1);

        let ys = serpentine.y_coords();
        prop_assert_eq!(ys[0], ys[ys.len() - 1]);
        prop_assert_eq!(serpentine.number_of_segments(), 2 * (serpentine.distances().len() + 1));
    }

    #[test]
    fn serpentine_x_never_decreases(params in serpentine_params()) {
        let serpentine = Serpentine::new(params).unwrap();
        let xs = serpentine.x_coords();
        prop_assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(serpentine.vertical_segments_info().len(), serpentine.stroke_count());
    }

    #[test]
    fn growing_pitch_gaps_shrink_away_from_anchor(
        min_pitch in 0.5f64..3.0,
        extra in 5.0f64..40.0,
    ) {
        let serpentine = Serpentine::new(SerpentineParameters {
            x_pos: 0.0,
            y_pos: 0.0,
            x_width: min_pitch + extra,
            y_width: 5.0,
            constant_pitch: false,
            min_pitch,
            first_inlet_diameter: 0.4,
            last_inlet_diameter: 0.4,
        })
        .unwrap();
        let gaps: Vec<f64> = serpentine
            .vertical_segments_info()
            .iter()
            .skip(1)
            .map(|info| info.distance_from_previous)
            .collect();
        // both ends of each gap are rounded to 0.01 mm
        prop_assert!(gaps.windows(2).all(|w| w[0] >= w[1] - 0.02));
    }

    #[test]
    fn segment_has_two_points_with_one_diameter(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        length in -50.0f64..50.0,
        diameter in 0.1f64..2.0,
        is_vertical in any::<bool>(),
    ) {
        let segment = Segment::new(x, y, length, diameter, is_vertical);
        let trace = segment.trace_info();
        prop_assert_eq!(trace.len(), 2);
        prop_assert!(trace.iter().all(|p| p.filament_diameter == diameter));

        let points = segment.points();
        let (dx, dy) = (points[1].0 - points[0].0, points[1].1 - points[0].1);
        if is_vertical {
            prop_assert_eq!(dx, 0.0);
        } else {
            prop_assert_eq!(dy, 0.0);
        }
    }

    #[test]
    fn sketch_heights_are_multiples_of_layer_height(
        layer_height in 0.05f64..1.0,
        count in 0usize..30,
    ) {
        let trace = Segment::new(0.0, 0.0, 5.0, 0.4, false).trace_info();
        let mut sketch = Sketch::new(layer_height);
        sketch.add_serpentine_layers(&trace, count);

        let layers = sketch.finalize_heights();
        prop_assert_eq!(layers.len(), count);
        for (i, layer) in layers.iter().enumerate() {
            let expected = layer_height * (i + 1) as f64;
            prop_assert!((layer.height - expected).abs() < 1e-9);
            prop_assert_eq!(&layer.trace, &trace);
        }
    }
}
