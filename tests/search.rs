use scatterview::{DataSource, SearchFilter, Selection, Value};

fn genes() -> DataSource {
    DataSource::from_columns(
        "scatter_source",
        [
            (
                "alias",
                vec![
                    Value::from("RPL3"),
                    Value::from("rpl4a"),
                    Value::from("TUB1"),
                    Value::from("act1"),
                    Value::Missing,
                ],
            ),
            (
                "description",
                vec![
                    Value::from("Ribosomal protein L3"),
                    Value::from("ribosomal protein L4"),
                    Value::from("Alpha-tubulin"),
                    Value::from("Actin, structural protein"),
                    Value::from("unknown"),
                ],
            ),
            (
                "length",
                vec![
                    Value::from(387.0),
                    Value::from(362.0),
                    Value::from(447.0),
                    Value::from(375.0),
                    Value::from(1e3),
                ],
            ),
        ],
    )
    .unwrap()
}

fn brute_force(src: &DataSource, columns: &[&str], query: &str) -> Vec<usize> {
    let q = query.to_lowercase();
    (0..src.row_count())
        .filter(|&row| {
            !q.is_empty()
                && columns.iter().any(|c| {
                    src.value(c, row)
                        .map(|v| v.search_text().to_lowercase().contains(&q))
                        .unwrap_or(false)
                })
        })
        .collect()
}

#[test]
fn app_matches_both_apples() {
    let mut src = DataSource::from_columns(
        "scatter_source",
        [(
            "name",
            vec![Value::from("Apple"), Value::from("apple pie"), Value::from("Banana")],
        )],
    )
    .unwrap();
    let filter = SearchFilter::new(["name"]);
    assert_eq!(filter.apply(&mut src, "app").unwrap(), 2);
    assert_eq!(src.selection().as_slice(), &[0, 1]);

    filter.apply(&mut src, "").unwrap();
    assert!(src.selection().is_empty());
}

#[test]
fn selection_is_exactly_the_matching_rows() {
    let src = genes();
    let columns = ["alias", "description", "length"];
    let filter = SearchFilter::new(columns);
    for query in ["rpl", "PROTEIN", "tub", "3", "000", "zzz", "l"] {
        let sel = filter.matching_rows(&src, query).unwrap();
        let mut got: Vec<usize> = sel.iter().collect();
        got.sort_unstable();
        assert_eq!(got, brute_force(&src, &columns, query), "query {query:?}");
        // no duplicates
        assert_eq!(sel.len(), got.len());
    }
}

#[test]
fn membership_does_not_depend_on_column_order() {
    let src = genes();
    let forward = SearchFilter::new(["alias", "description"]);
    let backward = SearchFilter::new(["description", "alias"]);
    for query in ["r", "in", "act"] {
        let mut a: Vec<usize> = forward.matching_rows(&src, query).unwrap().iter().collect();
        let mut b: Vec<usize> = backward.matching_rows(&src, query).unwrap().iter().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "query {query:?}");
    }
}

#[test]
fn empty_query_clears_previous_selection() {
    let mut src = genes();
    src.set_selection(Selection::from_indices([1, 3])).unwrap();
    SearchFilter::new(["alias"]).apply(&mut src, "").unwrap();
    assert!(src.selection().is_empty());
}

#[test]
fn listener_sees_the_new_selection() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut src = genes();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    src.add_listener(move |s: &DataSource| sink.borrow_mut().push(s.selection().as_slice().to_vec()));

    SearchFilter::new(["alias"]).apply(&mut src, "rpl").unwrap();
    assert_eq!(*seen.borrow(), vec![vec![0, 1]]);
}
