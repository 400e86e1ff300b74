use filequery::paths::{
    GlobPatterns, RegexPatterns, dir_exists, file_exists, file_like_exists, file_like_name,
    path_is_absolute, path_is_relative, path_matches, path_matches_glob, path_matches_regex,
};
use filequery::{
    Cell, Encoding, FileQueryError, FileSize, FileSizeUnit, FunctionalIterator, Table,
    WalkOptions, expand_path, relative_path,
};
use std::cmp::Ordering;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::tempdir;
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ranked {
    key: u32,
    tag: char,
}
impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
fn ranked(key: u32, tag: char) -> Ranked {
    Ranked { key, tag }
}
fn table_fixture() -> Table {
    Table::from_rows(["Col1", "Col2", "Col3"], [["A", "B", "C"], ["D", "E", "F"]]).unwrap()
}
// ----------------------- FunctionalIterator -----------------------
#[test]
fn test_filter_map_list_matches_eager() {
    let lazy = FunctionalIterator::new(1..=10)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 3)
        .list()
        .unwrap();
    let eager: Vec<i32> = (1..=10).filter(|x| x % 2 == 0).map(|x| x * 3).collect();
    assert_eq!(lazy, eager);
}
#[test]
fn test_combinators_are_lazy() {
    let calls = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&calls);
    let seq = FunctionalIterator::new(vec![1, 2, 3]).filter(move |_| {
        counter.set(counter.get() + 1);
        true
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(seq.len().unwrap(), 3);
    assert_eq!(calls.get(), 3);
}
#[test]
fn test_take_stops_pulling() {
    let calls = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&calls);
    let taken = FunctionalIterator::new(0..)
        .map(move |x: u64| {
            counter.set(counter.get() + 1);
            x
        })
        .take(3)
        .list()
        .unwrap();
    assert_eq!(taken, vec![0, 1, 2]);
    assert_eq!(calls.get(), 3);
}
#[test]
fn test_sum_and_len() {
    assert_eq!(FunctionalIterator::new(vec![2usize, 4, 6]).sum().unwrap(), 12);
    assert_eq!(FunctionalIterator::new(Vec::<usize>::new()).sum().unwrap(), 0);
    assert_eq!(FunctionalIterator::new(Vec::<u8>::new()).len().unwrap(), 0);
    let items = vec!["x", "y", "z"];
    assert_eq!(
        FunctionalIterator::new(items.clone()).len().unwrap(),
        FunctionalIterator::new(items).list().unwrap().len()
    );
}
#[test]
fn test_reduce_is_left_fold() {
    let joined = FunctionalIterator::new(vec!["a", "b", "c"])
        .reduce(String::from(">"), |acc, s| acc + s)
        .unwrap();
    assert_eq!(joined, ">abc");
}
#[test]
fn test_min_max() {
    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(FunctionalIterator::new(values.clone()).min().unwrap(), 1);
    assert_eq!(FunctionalIterator::new(values).max().unwrap(), 9);
    let tied = vec![ranked(2, 'a'), ranked(1, 'b'), ranked(2, 'c'), ranked(1, 'd')];
    assert_eq!(FunctionalIterator::new(tied.clone()).min().unwrap().tag, 'b');
    assert_eq!(FunctionalIterator::new(tied).max().unwrap().tag, 'a');
}
#[test]
fn test_min_max_empty_fails() {
    let min = FunctionalIterator::new(Vec::<i32>::new()).min();
    assert!(matches!(min, Err(FileQueryError::EmptySequence)));
    let max = FunctionalIterator::new(Vec::<i32>::new()).max();
    assert!(matches!(max, Err(FileQueryError::EmptySequence)));
}
#[test]
fn test_sorting() {
    let values = vec![3, 1, 2];
    assert_eq!(FunctionalIterator::new(values.clone()).sort_asc().unwrap(), vec![1, 2, 3]);
    assert_eq!(FunctionalIterator::new(values.clone()).sort().unwrap(), vec![1, 2, 3]);
    assert_eq!(FunctionalIterator::new(values).sort_desc().unwrap(), vec![3, 2, 1]);
}
#[test]
fn test_top_n() {
    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(FunctionalIterator::new(values.clone()).top_n(3).unwrap(), vec![9, 6, 5]);
    assert_eq!(
        FunctionalIterator::new(values.clone()).top_n(100).unwrap(),
        vec![9, 6, 5, 4, 3, 2, 1, 1]
    );
    assert!(FunctionalIterator::new(values).top_n(0).unwrap().is_empty());
}
#[test]
fn test_top_n_ties_keep_sequence_order() {
    let items = vec![ranked(5, 'a'), ranked(7, 'b'), ranked(5, 'c'), ranked(7, 'd')];
    let tags = |v: Vec<Ranked>| v.into_iter().map(|r| r.tag).collect::<String>();
    assert_eq!(tags(FunctionalIterator::new(items.clone()).top_n(2).unwrap()), "bd");
    assert_eq!(tags(FunctionalIterator::new(items.clone()).top_n(3).unwrap()), "bda");
    assert_eq!(tags(FunctionalIterator::new(items).top_n(4).unwrap()), "bdac");
}
#[test]
fn test_for_each_visits_in_order() {
    let mut seen = Vec::new();
    FunctionalIterator::new(vec![1, 2, 3])
        .for_each(|x| seen.push(x * 10))
        .unwrap();
    assert_eq!(seen, vec![10, 20, 30]);
}
#[test]
fn test_errors_stop_terminals() {
    let source = || {
        FunctionalIterator::from_results(vec![
            Ok(1),
            Err(FileQueryError::Walk("boom".into())),
            Ok(3),
        ])
    };
    assert!(matches!(source().list(), Err(FileQueryError::Walk(_))));
    assert!(source().sum().is_err());
    let mut seen = Vec::new();
    assert!(source().for_each(|x| seen.push(x)).is_err());
    assert_eq!(seen, vec![1]);
    // A filter that rejects everything still lets the error through.
    assert!(source().filter(|_| false).list().is_err());
    // Taking before the error never reaches it.
    assert_eq!(source().take(1).list().unwrap(), vec![1]);
}
#[test]
fn test_try_map_and_try_filter_surface_errors() {
    let mapped = FunctionalIterator::new(vec![1, 2, 3]).try_map(|x| {
        if x == 2 {
            Err(FileQueryError::Walk("two".into()))
        } else {
            Ok(x)
        }
    });
    assert!(mapped.list().is_err());
    let filtered = FunctionalIterator::new(vec![1, 2, 3, 4])
        .try_filter(|x| Ok(x % 2 == 1))
        .list()
        .unwrap();
    assert_eq!(filtered, vec![1, 3]);
}
#[test]
fn test_into_iterator() {
    let collected: Vec<i32> = FunctionalIterator::new(vec![1, 2])
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(collected, vec![1, 2]);
}
// ----------------------- Paths -----------------------
#[test]
fn test_expand_path_normalizes() {
    assert_eq!(expand_path("/a/b/../c/./d").unwrap(), PathBuf::from("/a/c/d"));
    assert_eq!(
        expand_path("a.txt").unwrap(),
        std::env::current_dir().unwrap().join("a.txt")
    );
}
#[test]
fn test_expand_path_home_and_vars() {
    if let Ok(home) = std::env::var("HOME") {
        assert_eq!(expand_path("~").unwrap(), expand_path(&home).unwrap());
        assert_eq!(
            expand_path("~/x").unwrap(),
            expand_path("${HOME}/x").unwrap()
        );
        assert_eq!(expand_path("$HOME/x").unwrap(), expand_path("~/x").unwrap());
    }
    assert_eq!(
        expand_path("/x/$FILEQUERY_SURELY_UNSET_VAR/y").unwrap(),
        PathBuf::from("/x/$FILEQUERY_SURELY_UNSET_VAR/y")
    );
}
#[test]
fn test_expand_path_is_idempotent() {
    for input in [
        "~",
        "~/x/../y",
        "$HOME/z",
        "${HOME}/q",
        "rel/./p",
        "/a/b/../c",
        "$FILEQUERY_SURELY_UNSET_VAR/x",
        "..",
    ] {
        let once = expand_path(input).unwrap();
        assert_eq!(expand_path(&once).unwrap(), once, "input {}", input);
        assert!(path_is_absolute(&once));
    }
}
#[test]
fn test_expand_path_substitutes_in_a_single_pass() {
    // Only this test reads these variables.
    unsafe {
        std::env::set_var("FILEQUERY_INNER_VAR", "inner");
        std::env::set_var("FILEQUERY_OUTER_VAR", "$FILEQUERY_INNER_VAR");
    }
    let once = expand_path("/a/$FILEQUERY_OUTER_VAR/b").unwrap();
    assert_eq!(once, PathBuf::from("/a/$FILEQUERY_INNER_VAR/b"));
    assert_eq!(expand_path(&once).unwrap(), PathBuf::from("/a/inner/b"));
}
#[test]
fn test_relative_path() {
    assert_eq!(relative_path("/a/b/c.txt", "/a").unwrap(), PathBuf::from("b/c.txt"));
    assert_eq!(relative_path("/a/x", "/a/b").unwrap(), PathBuf::from("../x"));
    assert_eq!(relative_path("/a/b", "/a/b").unwrap(), PathBuf::from("."));
}
#[test]
fn test_path_matches_is_segment_based() {
    assert!(path_matches("/a/b/x", ["/a/b"]).unwrap());
    assert!(path_matches("/a/b", ["/a/b"]).unwrap());
    assert!(path_matches("/a/b/x", ["/c", "/a"]).unwrap());
    assert!(!path_matches("/a/bb/x", ["/a/b"]).unwrap());
    assert!(!path_matches("/a", ["/a/b"]).unwrap());
    assert!(!path_matches("/a/b", Vec::<PathBuf>::new()).unwrap());
}
#[test]
fn test_path_matches_glob() {
    assert!(path_matches_glob("/tmp/d/a.txt", ["*/a.txt"]).unwrap());
    assert!(path_matches_glob("/tmp/d/sub/a.txt", ["*.txt"]).unwrap());
    assert!(!path_matches_glob("/tmp/d/a.txt", ["*.md"]).unwrap());
    assert!(!path_matches_glob("/tmp/d/a.txt", Vec::<&str>::new()).unwrap());
    let globs = GlobPatterns::new(["*.md", "*/sub/*"]).unwrap();
    assert!(globs.is_match("/tmp/sub/x.rs"));
    assert!(!globs.is_match("/tmp/x.rs"));
}
#[test]
fn test_path_matches_regex_is_full_match() {
    assert!(path_matches_regex("/d/a.txt", [r".*a\.txt"]).unwrap());
    assert!(!path_matches_regex("/d/a.txt", [r"a\.txt"]).unwrap());
    assert!(path_matches_regex("/d/a.txt", [r"nope", r"/d/.*"]).unwrap());
    let regexes = RegexPatterns::new([r"\d+"]).unwrap();
    assert!(regexes.is_match("123"));
    assert!(!regexes.is_match("123a"));
}
#[test]
fn test_invalid_patterns() {
    let err = path_matches_regex("/d/a.txt", ["("]).unwrap_err();
    assert!(matches!(err, FileQueryError::InvalidPattern { .. }));
    let err = path_matches_glob("/d/a.txt", ["a[.txt"]).unwrap_err();
    assert!(matches!(err, FileQueryError::InvalidPattern { .. }));
}
#[test]
fn test_path_predicates() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("f.txt");
    std::fs::write(&file, "x").unwrap();
    assert!(file_like_exists(&file));
    assert!(file_exists(&file));
    assert!(!dir_exists(&file));
    assert!(dir_exists(dir.path()));
    assert!(!file_exists(dir.path()));
    assert!(!file_like_exists(dir.path().join("missing")));
    assert!(path_is_absolute("/a"));
    assert!(path_is_relative("a/b"));
    assert_eq!(file_like_name("/a/b.txt"), "b.txt");
    assert_eq!(file_like_name("/a/dir/"), "dir");
}
// ----------------------- Table -----------------------
#[test]
fn test_table_requires_columns() {
    assert!(matches!(
        Table::new(Vec::<String>::new()),
        Err(FileQueryError::SchemaMismatch(_))
    ));
    assert!(matches!(
        Table::new(["A", "B", "A"]),
        Err(FileQueryError::SchemaMismatch(_))
    ));
}
#[test]
fn test_table_accessors() {
    let table = table_fixture();
    assert_eq!(table.col_name(1), Some("Col2"));
    assert_eq!(table.col_names(), ["Col1", "Col2", "Col3"]);
    assert_eq!(table.col(0).unwrap(), vec![&Cell::from("A"), &Cell::from("D")]);
    assert_eq!(
        table.col_by_name("Col3").unwrap(),
        vec![&Cell::from("C"), &Cell::from("F")]
    );
    assert_eq!(table.value(1, 1), Some(&Cell::from("E")));
    assert_eq!(table.value_by_name(0, "Col3"), Some(&Cell::from("C")));
    assert_eq!(
        table.row(1).unwrap(),
        [Cell::from("D"), Cell::from("E"), Cell::from("F")]
    );
    let record = table.row_record(0).unwrap();
    assert_eq!(record[0], ("Col1", &Cell::from("A")));
    assert_eq!(record[2], ("Col3", &Cell::from("C")));
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.n_cols(), 3);
    assert_eq!(table.rows().count(), 2);
    assert!(table.value(2, 0).is_none());
    assert!(table.col_by_name("Nope").is_none());
}
#[test]
fn test_table_add_row_arity() {
    let mut table = table_fixture();
    let err = table.add_row(["G", "H"]).unwrap_err();
    assert!(matches!(err, FileQueryError::SchemaMismatch(_)));
    assert_eq!(table.n_rows(), 2);
    table.add_row([Cell::from("G"), Cell::from(7u64), Cell::from(1.5)]).unwrap();
    assert_eq!(table.value(2, 1), Some(&Cell::UInt(7)));
}
#[test]
fn test_table_add_record() {
    let mut table = table_fixture();
    table
        .add_record([("Col3", "I"), ("Col1", "G"), ("Col2", "H")])
        .unwrap();
    assert_eq!(
        table.row(2).unwrap(),
        [Cell::from("G"), Cell::from("H"), Cell::from("I")]
    );
    let err = table
        .add_record([("Col1", "J"), ("Col4", "K"), ("Col3", "L")])
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Col2"));
    assert!(message.contains("Col4"));
    assert_eq!(table.n_rows(), 3);
}
#[test]
fn test_table_display() {
    let table = table_fixture();
    assert_eq!(
        table.to_string(),
        "Col1 Col2 Col3 \nA    B    C    \nD    E    F    \n"
    );
    let mut wide = Table::new(["N", "Name"]).unwrap();
    wide.add_row([Cell::from(10), Cell::from("x")]).unwrap();
    assert_eq!(wide.to_string(), "N  Name \n10 x    \n");
}
#[test]
fn test_table_serialize() {
    let table = table_fixture();
    assert_eq!(
        serde_json::to_string(&table).unwrap(),
        r#"[{"Col1":"A","Col2":"B","Col3":"C"},{"Col1":"D","Col2":"E","Col3":"F"}]"#
    );
}
// ----------------------- FileSize -----------------------
#[test]
fn test_file_size_units() {
    let size = FileSize::new(1500);
    assert_eq!(size.size(FileSizeUnit::Kb, 3), "1.5KB");
    assert_eq!(size.size(FileSizeUnit::Byte, 0), "1500B");
    assert_eq!(size.size_f(FileSizeUnit::Kb), 1.5);
    assert_eq!(FileSize::new(2048).size(FileSizeUnit::Kib, 2), "2KiB");
    assert_eq!(FileSize::new(1 << 20).size(FileSizeUnit::Mib, 1), "1MiB");
    assert_eq!(FileSize::new(1234).size(FileSizeUnit::Kb, 1), "1.2KB");
}
#[test]
fn test_file_size_auto() {
    assert_eq!(FileSize::new(512).to_string(), "512B");
    assert_eq!(FileSize::new(500).to_string(), "500B");
    assert_eq!(FileSize::new(1000).to_string(), "1KB");
    assert_eq!(FileSize::new(1_500_000).to_string(), "1.5MB");
    assert_eq!(FileSize::new(2_000_000_000).size(FileSizeUnit::Auto, 1), "2GB");
    assert_eq!(FileSize::new(0).to_string(), "0B");
}
#[test]
fn test_file_size_symbols() {
    assert!(matches!(
        FileSizeUnit::Auto.symbol(),
        Err(FileQueryError::InvalidUnit(_))
    ));
    assert_eq!(FileSizeUnit::Kb.symbol().unwrap(), "KB");
    assert_eq!(FileSizeUnit::Tib.symbol().unwrap(), "TiB");
    assert_eq!(FileSizeUnit::Auto.factor(), None);
    assert_eq!(FileSizeUnit::Gib.factor(), Some(1 << 30));
}
#[test]
fn test_file_size_arithmetic() {
    let total: FileSize = [FileSize::new(1), FileSize::new(2), FileSize::from(3)]
        .into_iter()
        .sum();
    assert_eq!(u64::from(total), 6);
    assert_eq!((FileSize::new(4) + FileSize::new(5)).bytes(), 9);
    assert!(FileSize::new(1) < FileSize::new(2));
}
// ----------------------- Options -----------------------
#[test]
fn test_walk_options_defaults() {
    let options = WalkOptions::default();
    assert!(options.include_hidden);
    assert!(!options.respect_gitignore);
    assert_eq!(options.max_depth, None);
    assert_eq!(WalkOptions::builder().build(), options);
    assert_eq!(Encoding::default(), Encoding::Utf8);
}
#[test]
fn test_walk_options_builder() {
    let options = WalkOptions::builder()
        .include_hidden(false)
        .respect_gitignore(true)
        .max_depth(2)
        .build();
    assert!(!options.include_hidden);
    assert!(options.respect_gitignore);
    assert_eq!(options.max_depth, Some(2));
    let unlimited = WalkOptions::builder().max_depth(2).no_limit_depth().build();
    assert_eq!(unlimited.max_depth, None);
}
