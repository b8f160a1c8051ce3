use diwkit_designer::{Segment, Serpentine, SerpentineParameters, Sketch};

fn serpentine() -> Serpentine {
    Serpentine::new(SerpentineParameters {
        x_pos: 0.0,
        y_pos: 0.0,
        x_width: 10.0,
        y_width: 4.0,
        constant_pitch: true,
        min_pitch: 2.0,
        first_inlet_diameter: 0.4,
        last_inlet_diameter: 0.6,
    })
    .unwrap()
}

#[test]
fn test_capped_stack() {
    let serpentine = serpentine();
    let capping = Segment::capping(&serpentine, 0.5, false, 0.4);

    let mut sketch = Sketch::new(0.25);
    sketch.add_serpentine_layers(&serpentine.trace_info(), 4);
    sketch.add_segment_layer(&capping.trace_info());

    let layers = sketch.finalize_heights();
    assert_eq!(layers.len(), 5);
    assert_eq!(layers[4].height, 1.25);
    assert_eq!(layers[4].trace.len(), 2);
    assert_eq!(layers[4].trace.x_coords(), vec![0.0, 10.0]);
    assert_eq!(layers[4].trace.y_coords(), vec![2.0, 2.0]);
    assert!(layers[..4]
        .iter()
        .all(|layer| layer.trace.len() == serpentine.number_of_segments()));
}

#[test]
fn test_purge_sketch_has_single_layer() {
    let purge = Segment::new(-20.0, -20.0, 15.0, 0.5, true);
    let mut sketch = Sketch::new(0.2);
    sketch.add_segment_layer(&purge.trace_info());

    let layers = sketch.finalize_heights();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].height, 0.2);
    assert_eq!(layers[0].trace.y_coords(), vec![-20.0, -5.0]);
}
