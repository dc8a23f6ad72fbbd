//! Integration tests for projection-based slicing

use mdtools_slice::{
    calculate_extents, projection_labels, read_projection_file, Basis, BinSpec, CoordinateSystem,
    CutMd, Error, MdDataset, MdDimension, ProjectionTable, Rebin, RebinMode, RebinRequest, Result,
};
use nalgebra::Vector3;
use rstest::{fixture, rstest};
use std::path::PathBuf;

/// Binner stand-in that hands the request straight back for inspection
struct EchoBinner;

impl Rebin for EchoBinner {
    type Output = RebinRequest;

    fn rebin(&mut self, request: RebinRequest) -> Result<RebinRequest> {
        Ok(request)
    }
}

#[fixture]
fn cube() -> MdDataset {
    MdDataset::hkl(vec![
        MdDimension::new("H", "r.l.u.", -5.0, 5.0),
        MdDimension::new("K", "r.l.u.", -5.0, 5.0),
        MdDimension::new("L", "r.l.u.", -5.0, 5.0),
    ])
}

#[fixture]
fn diagonal_projection() -> ProjectionTable {
    // u along [110], v along [1-10], w generated as v x u
    ProjectionTable {
        u: vec![1.0, 1.0, 0.0],
        v: vec![1.0, -1.0, 0.0],
        w: None,
        offsets: Some(vec![0.0, 0.0, 0.0]),
        types: vec!["r".to_string(), "r".to_string(), "r".to_string()],
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{a} != {b}");
}

/// Write a throwaway projection file for the loading tests
fn write_projection_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[rstest]
#[case(&[1.0], -5.0, 5.0, (-5.0, 5.0), 10)] // case 1: step only
#[case(&[0.5], -5.0, 5.0, (-5.0, 5.0), 20)] // case 2: finer step
#[case(&[-1.0, 1.0], -5.0, 5.0, (-1.0, 1.0), 1)] // case 3: integration range
#[case(&[-1.0, 0.5, 1.0], -5.0, 5.0, (-1.0, 1.0), 20)] // case 4: range and step
fn bin_specs_resolve(
    #[case] values: &[f64],
    #[case] axis_min: f64,
    #[case] axis_max: f64,
    #[case] range: (f64, f64),
    #[case] bins: usize,
) {
    let binning = BinSpec::from(values).resolve(axis_min, axis_max).unwrap();
    assert_eq!((binning.min, binning.max), range);
    assert_eq!(binning.bin_count(), bins);
    assert!(binning.min < binning.max);
    assert!(binning.bins >= 1.0);
}

// Case 4 above also pins the historical quirk: the step in a 3-value spec
// divides the axis extent, not the requested [min, max] range.

#[rstest]
fn bin_spec_fractional_count_truncates() {
    let binning = BinSpec::from(vec![0.3]).resolve(0.0, 1.0).unwrap();
    assert!(binning.bins > 3.0 && binning.bins < 4.0);
    assert_eq!(binning.bin_count(), 3);
}

#[rstest]
#[case(&[])] // case 1: empty
#[case(&[1.0, 2.0, 3.0, 4.0])] // case 2: too many values
fn bin_spec_wrong_length_is_rejected(#[case] values: &[f64]) {
    let result = BinSpec::from(values).resolve(-5.0, 5.0);
    assert!(matches!(result, Err(Error::InvalidBinSpec(_))));
}

#[rstest]
fn bin_spec_degenerate_range_is_rejected() {
    let result = BinSpec::from(vec![1.0, -1.0]).resolve(-5.0, 5.0);
    assert!(matches!(result, Err(Error::DegenerateRange { .. })));
}

#[rstest]
fn bin_spec_too_few_bins_is_rejected() {
    // a 20 r.l.u. step over a 10 r.l.u. extent gives half a bin
    let result = BinSpec::from(vec![20.0]).resolve(-5.0, 5.0);
    assert!(matches!(result, Err(Error::TooFewBins(_))));
}

#[rstest]
fn identity_extents_reproduce_dataset(cube: MdDataset) {
    let extents = calculate_extents(&Basis::identity(), &cube).unwrap();

    assert_eq!(extents.len(), 3);
    for (extent, dimension) in extents.iter().zip(&cube.dimensions) {
        assert_eq!(extent.min, dimension.min);
        assert_eq!(extent.max, dimension.max);
    }
}

#[rstest]
fn extra_dimensions_pass_through(cube: MdDataset) {
    let mut dataset = cube;
    dataset
        .dimensions
        .push(MdDimension::new("DeltaE", "meV", 0.0, 100.0));

    let extents = calculate_extents(&Basis::identity(), &dataset).unwrap();
    assert_eq!(extents.len(), 4);
    assert_eq!((extents[3].min, extents[3].max), (0.0, 100.0));
}

#[rstest]
fn diagonal_extents_contain_the_rotated_cube(
    cube: MdDataset,
    diagonal_projection: ProjectionTable,
) {
    let basis = Basis::from_table(Some(&diagonal_projection)).unwrap();
    assert_eq!(basis.w, Vector3::new(0.0, 0.0, 2.0));

    let extents = calculate_extents(&basis, &cube).unwrap();

    // corners map to (h + k) / 2, (h - k) / 2, l / 2
    assert_close(extents[0].min, -5.0);
    assert_close(extents[0].max, 5.0);
    assert_close(extents[1].min, -5.0);
    assert_close(extents[1].max, 5.0);
    assert_close(extents[2].min, -2.5);
    assert_close(extents[2].max, 2.5);

    // the bounding box strictly contains the projected cube, which only
    // touches the new axes at (+-5, 0) and (0, +-5)
    assert!(extents[0].width() > cube.dimensions[2].width() / 2.0);
}

#[rstest]
fn singular_projection_is_rejected(cube: MdDataset) {
    // v parallel to u collapses the basis
    let basis = Basis {
        u: Vector3::new(1.0, 1.0, 0.0),
        v: Vector3::new(2.0, 2.0, 0.0),
        w: Vector3::new(0.0, 0.0, 1.0),
    };

    let result = calculate_extents(&basis, &cube);
    assert!(matches!(result, Err(Error::SingularProjection)));
}

#[rstest]
fn absent_projection_defaults_to_identity() {
    let basis = Basis::from_table(None).unwrap();
    assert_eq!(basis.u, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(basis.v, Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(basis.w, Vector3::new(0.0, 0.0, 1.0));
}

#[rstest]
#[case(2)] // case 1: too few rows
#[case(4)] // case 2: too many rows
fn wrong_row_count_is_rejected(#[case] rows: usize) {
    let table = ProjectionTable {
        u: vec![1.0; rows],
        v: vec![0.0; rows],
        w: None,
        offsets: None,
        types: vec!["r".to_string(); rows],
    };

    let result = Basis::from_table(Some(&table));
    assert!(matches!(result, Err(Error::MalformedProjection(_))));
}

#[rstest]
fn off_schema_column_set_is_rejected() {
    // {u, v, w, type} is not an accepted schema; w requires offsets
    let table = ProjectionTable {
        u: vec![1.0, 0.0, 0.0],
        v: vec![0.0, 1.0, 0.0],
        w: Some(vec![0.0, 0.0, 1.0]),
        offsets: None,
        types: vec!["r".to_string(), "r".to_string(), "r".to_string()],
    };

    let result = Basis::from_table(Some(&table));
    assert!(matches!(result, Err(Error::MalformedProjection(_))));
}

#[rstest]
fn projection_file_loads_and_derives_a_basis() {
    let path = write_projection_file(
        "mdtools_projection_110.json",
        r#"{"u": [1.0, 1.0, 0.0], "v": [1.0, -1.0, 0.0], "type": ["r", "r", "r"]}"#,
    );

    let table = read_projection_file(&path).unwrap();
    assert_eq!(table.u, [1.0, 1.0, 0.0]);
    assert_eq!(table.v, [1.0, -1.0, 0.0]);
    assert!(table.w.is_none());

    let basis = Basis::from_table(Some(&table)).unwrap();
    assert_eq!(basis.u, Vector3::new(1.0, 1.0, 0.0));
    assert_eq!(basis.w, Vector3::new(0.0, 0.0, 2.0));
}

#[rstest]
fn projection_file_with_wrong_rows_is_rejected() {
    let path = write_projection_file(
        "mdtools_projection_two_rows.json",
        r#"{"u": [1.0, 0.0], "v": [0.0, 1.0], "type": ["r", "r"]}"#,
    );

    let result = read_projection_file(&path);
    assert!(matches!(result, Err(Error::MalformedProjection(_))));
}

#[rstest]
fn projection_file_with_unknown_column_is_rejected() {
    // a "q" column is outside every accepted schema
    let path = write_projection_file(
        "mdtools_projection_q_column.json",
        r#"{"u": [1.0, 0.0, 0.0], "v": [0.0, 1.0, 0.0], "q": [0.0, 0.0, 1.0], "type": ["r", "r", "r"]}"#,
    );

    let result = read_projection_file(&path);
    assert!(matches!(result, Err(Error::MalformedProjection(_))));
}

#[rstest]
fn unreadable_projection_file_is_rejected() {
    let path = write_projection_file("mdtools_projection_garbage.json", "not a json table");
    assert!(matches!(
        read_projection_file(&path),
        Err(Error::JSONError(_))
    ));

    let missing = std::env::temp_dir().join("mdtools_projection_missing.json");
    assert!(matches!(
        read_projection_file(&missing),
        Err(Error::IOError(_))
    ));
}

#[rstest]
fn two_dimensional_dataset_is_rejected() {
    let dataset = MdDataset::hkl(vec![
        MdDimension::new("H", "r.l.u.", -5.0, 5.0),
        MdDimension::new("K", "r.l.u.", -5.0, 5.0),
    ]);

    let result = calculate_extents(&Basis::identity(), &dataset);
    assert!(matches!(result, Err(Error::UnsupportedDimensionality(2))));
    assert_eq!(
        result.unwrap_err().to_string(),
        "basis vector generation requires the 3 crystallographic dimensions (dataset has 2)"
    );
}

#[rstest]
fn identity_labels() {
    let labels = projection_labels(&Basis::identity());
    assert_eq!(labels, ["zeta", "eta", "xi"]);
}

#[rstest]
fn identity_cut_end_to_end(cube: MdDataset) {
    let request = CutMd::new(cube)
        .bin_specs([
            BinSpec::from(vec![1.0]),
            BinSpec::from(vec![1.0]),
            BinSpec::from(vec![1.0]),
            BinSpec::empty(),
        ])
        .run(&mut EchoBinner)
        .unwrap();

    assert_eq!(request.mode, RebinMode::Event);
    assert_eq!(request.bins, [10, 10, 10]);
    assert!(!request.normalize_basis_vectors);
    assert!(!request.axis_aligned);

    // identity projection leaves the extents unchanged
    assert_eq!(
        request.flat_extents(),
        [-5.0, 5.0, -5.0, 5.0, -5.0, 5.0]
    );

    let descriptions = request
        .basis_vectors
        .iter()
        .map(|axis| axis.description())
        .collect::<Vec<String>>();
    assert_eq!(
        descriptions,
        [
            "zeta, r.l.u., 1,0,0",
            "eta, r.l.u., 0,1,0",
            "xi, r.l.u., 0,0,1",
        ]
    );
}

#[rstest]
fn diagonal_cut_end_to_end(cube: MdDataset, diagonal_projection: ProjectionTable) {
    let request = CutMd::new(cube)
        .projection(diagonal_projection)
        .bin_specs([
            BinSpec::from(vec![0.5]),
            BinSpec::from(vec![0.5]),
            BinSpec::from(vec![-2.0, 2.0]),
            BinSpec::empty(),
        ])
        .no_pix(true)
        .run(&mut EchoBinner)
        .unwrap();

    assert_eq!(request.mode, RebinMode::Histogram);
    assert_eq!(request.bins, [20, 20, 1]);
    assert_eq!(request.basis_vectors[0].label, "zeta, zeta");
    assert_eq!(request.basis_vectors[1].label, "eta, -eta");
    assert_eq!(request.basis_vectors[2].label, "2.00xi");

    // a widened, rotated box rather than the input extents
    assert_close(request.extents[2].min, -2.5);
    assert_close(request.extents[2].max, 2.5);
}

#[rstest]
fn per_axis_specs_resolve_independently() {
    // distinct extents per axis catch any axis-1 spec reuse
    let dataset = MdDataset::hkl(vec![
        MdDimension::new("H", "r.l.u.", -5.0, 5.0),
        MdDimension::new("K", "r.l.u.", -2.0, 2.0),
        MdDimension::new("L", "r.l.u.", 0.0, 1.0),
    ]);

    let request = CutMd::new(dataset)
        .bin_specs([
            BinSpec::from(vec![1.0]),
            BinSpec::from(vec![0.5]),
            BinSpec::from(vec![0.1]),
            BinSpec::empty(),
        ])
        .run(&mut EchoBinner)
        .unwrap();

    assert_eq!(request.bins, [10, 8, 10]);
}

#[rstest]
fn non_hkl_dataset_is_rejected() {
    let dataset = MdDataset::new(
        CoordinateSystem::QSample,
        vec![
            MdDimension::new("Q_x", "A^-1", -5.0, 5.0),
            MdDimension::new("Q_y", "A^-1", -5.0, 5.0),
            MdDimension::new("Q_z", "A^-1", -5.0, 5.0),
        ],
    );

    let result = CutMd::new(dataset).build_request();
    assert!(matches!(result, Err(Error::WrongCoordinateSystem(_))));
}

#[rstest]
fn four_dimensional_dataset_is_rejected(cube: MdDataset) {
    let mut dataset = cube;
    dataset
        .dimensions
        .push(MdDimension::new("DeltaE", "meV", 0.0, 100.0));

    let result = CutMd::new(dataset).build_request();
    assert!(matches!(result, Err(Error::UnsupportedDimensionality(4))));
}
