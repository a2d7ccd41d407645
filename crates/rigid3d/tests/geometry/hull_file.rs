use rigid3d::math::Point;
use rigid3d::transformation::{load_convex_segment, HullFileError};
use std::fs::File;
use std::io::{BufReader, Write};

const CUBE: &str = "8 12
-1 -1 -1
1 -1 -1
1 1 -1
-1 1 -1
-1 -1 1
1 -1 1
1 1 1
-1 1 1
0 2 1
0 3 2
4 5 6
4 6 7
0 1 5
0 5 4
3 6 2
3 7 6
0 4 7
0 7 3
1 2 6
1 6 5
";

#[test]
fn load_a_cube_from_disk() {
    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("cube.hull");
    File::create(&path)
        .unwrap()
        .write_all(CUBE.as_bytes())
        .unwrap();

    let segment = load_convex_segment(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(segment.num_faces(), 12);
    assert!(segment.contains_point(&Point::new(0.9, -0.9, 0.5)));
    assert!(!segment.contains_point(&Point::new(1.1, 0.0, 0.0)));

    let res = segment.point_containment(&Point::new(0.0, 0.0, 0.8));
    assert!(res.is_inside);
    assert!((res.closest_distance - 0.2).abs() < 1.0e-6);
}

#[test]
fn missing_file_content_is_an_error() {
    let err = load_convex_segment(std::io::Cursor::new("")).unwrap_err();
    assert!(matches!(err, HullFileError::UnexpectedEof { line: 1 }));
    assert_eq!(err.to_string(), "unexpected end of file at line 1");
}
