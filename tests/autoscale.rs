use scatterview::{AxisRange, AxisUpdate, DataSource, RangeAutoscale, Value};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn source(x: Vec<Value>, y: Vec<Value>) -> DataSource {
    DataSource::from_columns("scatter_source", [("x", x), ("y", y)]).unwrap()
}

#[test]
fn nan_rows_drop_out_of_both_axes() {
    let src = source(
        vec![1.0.into(), 2.0.into(), "NaN".into(), 4.0.into()],
        vec![10.0.into(), "NaN".into(), 30.0.into(), 40.0.into()],
    );
    let mut x_range = AxisRange::new("x_range", 0.0, 1.0);
    let mut y_range = AxisRange::new("y_range", 0.0, 1.0);
    RangeAutoscale::new()
        .apply(&src, &mut x_range, &mut y_range)
        .unwrap();

    assert!(approx(x_range.start, 0.85), "{}", x_range.start);
    assert!(approx(x_range.end, 4.15), "{}", x_range.end);
    assert!(approx(y_range.start, 8.5), "{}", y_range.start);
    assert!(approx(y_range.end, 41.5), "{}", y_range.end);
}

#[test]
fn buffer_is_five_percent_of_span() {
    let src = source(
        vec![(-3.0).into(), 7.0.into(), 2.0.into()],
        vec![100.0.into(), 300.0.into(), Value::Missing],
    );
    let mut xr = AxisRange::default();
    let mut yr = AxisRange::default();
    let out = RangeAutoscale::new().apply(&src, &mut xr, &mut yr).unwrap();

    // row 2 has no y, so x spans -3..7 only
    assert!(xr.start < xr.end);
    assert!(approx(xr.start, -3.5) && approx(xr.end, 7.5));
    assert!(approx(yr.start, 90.0) && approx(yr.end, 310.0));
    assert_eq!(
        out.x,
        AxisUpdate::Updated {
            start: xr.start,
            end: xr.end
        }
    );
}

#[test]
fn invalid_rows_never_contribute() {
    let src = source(
        vec![1.0.into(), 1000.0.into(), Value::Missing, 2.0.into()],
        vec![5.0.into(), f64::NAN.into(), (-1000.0).into(), 6.0.into()],
    );
    let mut xr = AxisRange::default();
    let mut yr = AxisRange::default();
    RangeAutoscale::new().apply(&src, &mut xr, &mut yr).unwrap();
    assert!(xr.end < 3.0);
    assert!(yr.start > 4.0);
}

#[test]
fn rerun_on_same_data_is_identical() {
    let src = source(
        vec![0.1.into(), 0.7.into(), 0.3.into()],
        vec![1.1.into(), 0.2.into(), 0.9.into()],
    );
    let scaler = RangeAutoscale::new();
    let mut xr = AxisRange::default();
    let mut yr = AxisRange::default();
    scaler.apply(&src, &mut xr, &mut yr).unwrap();
    let first = (xr.clone(), yr.clone());
    let again = scaler.apply(&src, &mut xr, &mut yr).unwrap();
    assert!(!again.moved);
    assert_eq!((xr, yr), first);
}

#[test]
fn custom_columns_and_padding() {
    let src = DataSource::from_columns(
        "scatter_source",
        [
            ("wt", vec![Value::from(0.0), Value::from(10.0)]),
            ("mut", vec![Value::from(0.0), Value::from(1.0)]),
        ],
    )
    .unwrap();
    let mut xr = AxisRange::default();
    let mut yr = AxisRange::default();
    RangeAutoscale::new()
        .with_columns("wt", "mut")
        .with_padding(0.1)
        .apply(&src, &mut xr, &mut yr)
        .unwrap();
    assert!(approx(xr.start, -1.0) && approx(xr.end, 11.0));
    assert!(approx(yr.start, -0.1) && approx(yr.end, 1.1));
}
