//! End-to-end tests for the cleaning and normalization pipeline.

use gesturenorm::*;
use proptest::prelude::*;

const RECORDING: &str = "\
Frame,X,Y,Z,QW,QX,QY,QZ
1,2.0,1.0,0.5,0.7071067811865476,0,0,0.7071067811865476
2,2.0,1.0,0.5,0.7071067811865476,0,0,0.7071067811865476
3,2.1,1.1,0.5,0.7071067811865476,0,0,0.7071067811865476
4,2.2,1.2,0.6,0.7071067811865476,0,0,0.7071067811865476
5,2.3,1.3,0.6,0.7071067811865476,0,0,0.7071067811865476
6,2.4,1.4,0.7,0.7071067811865476,0,0,0.7071067811865476
7,2.5,1.5,0.8,0.7071067811865476,0,0,0.7071067811865476
8,9.0,9.0,9.0,0.7071067811865476,0,0,0.7071067811865476
";

fn frames(motion: &Motion) -> Vec<i64> {
    motion.iter().map(|p| p.frame_index).collect()
}

#[test]
fn test_jump_scenario() {
    // Ten poses one unit apart, except a gap of 100 between poses 5 and 6.
    let mut x = 1.0;
    let positions = (0..10).map(|i| {
        if i > 0 {
            x += if i == 5 { 100.0 } else { 1.0 };
        }
        DVec3::new(x, 0.0, 0.0)
    });
    let mut motion = Motion::from_positions(positions.collect::<Vec<_>>());

    let dropped = JumpSegmenter::new(3.0, true).apply(&mut motion).unwrap();

    assert_eq!(dropped, 5);
    assert_eq!(frames(&motion), vec![1, 2, 3, 4, 5]);
    assert_eq!(motion.first().unwrap().position.x, 1.0);
}

#[test]
fn test_dedup_scenario() {
    let mut positions = vec![DVec3::ONE; 5];
    positions.push(DVec3::new(1.0, 1.0, 1.0001));
    let mut motion = Motion::from_positions(positions);

    let removed = PointDeduplicator::new(1e-7, true).apply(&mut motion);

    assert_eq!(removed, 4);
    assert_eq!(motion.len(), 2);
    assert_eq!(motion.last().unwrap().position.z, 1.0001);
}

#[test]
fn test_csv_to_report() {
    let motion = read_motion(RECORDING.as_bytes(), ',').unwrap();
    assert_eq!(motion.len(), 8);

    let options = NormalizeOptions::new()
        .with_translation(TranslationMode::Start)
        .with_rotation(RotationMode::Start);
    let out = Normalizer::new(options).normalize(motion).unwrap();

    // The first two poses coincide with the origin after translation, and
    // the final pose sits behind a jump.
    assert_eq!(out.removed, 3);
    assert_eq!(frames(&out.motion), vec![1, 2, 3, 4, 5]);
    for pose in &out.motion {
        assert!((pose.rotation - DQuat::IDENTITY).length() < 1e-9);
    }

    let mut report = ReportWriter::new(Vec::new(), Vec::new()).unwrap();
    report.write_normalized("drift", &out).unwrap();
    let text = String::from_utf8(report.finish().unwrap()).unwrap();
    let row = text.lines().nth(1).unwrap();
    assert!(row.starts_with("drift,2.000,1.000,0.500,0.707,0.000,0.000,0.707,0.000,0.000,0.000,3"));
}

#[test]
fn test_options_from_json_drive_pipeline() {
    let options = NormalizeOptions::from_json_str(
        r#"{ "translation": "mean", "scale": "largest", "cleaning": false }"#,
    )
    .unwrap();
    let motion = read_motion(RECORDING.as_bytes(), ',').unwrap();
    let out = normalize(motion, &options).unwrap();

    assert_eq!(out.motion.len(), 8);
    let (min, max) = out.motion.bounding_box().unwrap();
    assert!(((max - min).max_element() - 1.0).abs() < 1e-9);
}

#[test]
fn test_typo_mode_is_a_noop() {
    let mode = TranslationMode::parse_lenient("strat");
    assert_eq!(mode, TranslationMode::None);
    assert!("strat".parse::<TranslationMode>().is_err());
}

#[test]
fn test_training_set_from_batch() {
    let normalizer = Normalizer::new(NormalizeOptions::new().with_translation(TranslationMode::Median));
    let inputs = (0..3).map(|k| {
        let motion = read_motion(RECORDING.as_bytes(), ',').unwrap();
        (format!("take_{k}"), motion)
    });
    let outcome = normalize_batch(&normalizer, inputs);
    assert!(outcome.skipped.is_empty());

    let set: TrainingSet = outcome.normalized.iter().map(|(_, n)| &n.motion).collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.features.len(), set.lengths.iter().sum::<usize>());
}

fn arb_motion() -> impl Strategy<Value = Motion> {
    let pose = (
        (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0),
        (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0, 0.1f64..1.0),
    );
    prop::collection::vec(pose, 3..40).prop_map(|poses| {
        poses
            .into_iter()
            .zip(1..)
            .map(|(((x, y, z), (qx, qy, qz, qw)), frame)| {
                let rotation = DQuat::from_xyzw(qx, qy, qz, qw).normalize();
                Pose::new(frame, DVec3::new(x, y, z), rotation)
            })
            .collect::<Motion>()
    })
}

proptest! {
    #[test]
    fn prop_start_frame_invariants(motion in arb_motion()) {
        let options = NormalizeOptions::new()
            .with_translation(TranslationMode::Start)
            .with_rotation(RotationMode::Start)
            .with_cleaning(false);
        let out = normalize(motion, &options).unwrap();

        let first = out.motion.first().unwrap();
        prop_assert!(first.position.length() < 1e-9);
        prop_assert!((first.rotation - DQuat::IDENTITY).length() < 1e-9);
    }

    #[test]
    fn prop_end_translation(motion in arb_motion()) {
        let mut motion = motion;
        translate(&mut motion, TranslationMode::End).unwrap();
        prop_assert_eq!(motion.last().unwrap().position, DVec3::ZERO);
    }

    #[test]
    fn prop_cleaned_frames_are_consecutive(motion in arb_motion()) {
        let mut motion = motion;
        if Cleaner::default().clean(&mut motion).is_ok() {
            let expected: Vec<i64> = (1..=motion.len() as i64).collect();
            prop_assert_eq!(frames(&motion), expected);
        }
    }
}
