//! Unit tests for the catalog browser CLI helpers.

use rstest::{fixture, rstest};

use super::*;
use crate::sort::SortColumn;

#[fixture]
fn settings() -> CatalogSettings {
    CatalogSettings {
        dataset_path: None,
        log_json: false,
    }
}

fn parse(args: &[&str]) -> BrowseArgs {
    BrowseArgs::try_parse_from(std::iter::once("catalog-browse").chain(args.iter().copied()))
        .expect("parse args")
}

#[test]
fn no_flags_produce_no_events() {
    let args = parse(&[]);

    assert!(args.events().is_empty());
}

#[test]
fn flags_map_to_events_in_a_fixed_order() {
    let args = parse(&[
        "--sort", "user:desc", "--category", "2", "--query", "milk", "--category", "4",
        "--user", "1",
    ]);

    assert_eq!(
        args.events(),
        vec![
            FilterEvent::SelectUser(UserId::new(1)),
            FilterEvent::SetSearchQuery("milk".to_owned()),
            FilterEvent::ToggleCategory(CategoryId::new(2)),
            FilterEvent::ToggleCategory(CategoryId::new(4)),
            FilterEvent::SortBy(SortOrder::descending(SortColumn::User)),
        ]
    );
}

#[test]
fn empty_query_is_ignored() {
    let args = parse(&["--query", ""]);

    assert!(args.events().is_empty());
}

#[rstest]
#[case(&["--user", "abc"])]
#[case(&["--sort", "price"])]
#[case(&["--category"])]
#[case(&["--unknown"])]
fn invalid_flags_are_rejected(#[case] args: &[&str]) {
    let result =
        BrowseArgs::try_parse_from(std::iter::once("catalog-browse").chain(args.iter().copied()));

    assert!(result.is_err());
}

#[rstest]
fn flag_overrides_configured_dataset(mut settings: CatalogSettings) {
    settings.dataset_path = Some(PathBuf::from("configured.json"));
    let args = parse(&["--dataset", "flag.json"]);

    let path = resolve_dataset_path(&args, &settings).expect("resolve path");

    assert_eq!(path, Some(Utf8PathBuf::from("flag.json")));
}

#[rstest]
fn configured_dataset_is_used_without_flag(mut settings: CatalogSettings) {
    settings.dataset_path = Some(PathBuf::from("configured.json"));

    let path = resolve_dataset_path(&BrowseArgs::default(), &settings).expect("resolve path");

    assert_eq!(path, Some(Utf8PathBuf::from("configured.json")));
}

#[rstest]
fn embedded_dataset_is_the_fallback(settings: CatalogSettings) {
    let path = resolve_dataset_path(&BrowseArgs::default(), &settings).expect("resolve path");
    let dataset = load_dataset(path.as_deref()).expect("embedded dataset");

    assert!(path.is_none());
    assert_eq!(dataset, Dataset::embedded().expect("embedded dataset"));
}

#[rstest]
fn browse_renders_filtered_table(settings: CatalogSettings) {
    let args = parse(&["--user", "1", "--category", "4"]);
    let mut out = Vec::new();

    let view = browse(&args, &settings, &mut out).expect("browse");

    let names: Vec<_> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "TV"]);
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.contains("[Roma]"));
    assert!(text.contains("Laptop"));
}

#[test]
fn repeated_category_is_selected_once() {
    let args = parse(&["--category", "2", "--category", "2"]);

    assert_eq!(
        args.events(),
        vec![FilterEvent::ToggleCategory(CategoryId::new(2))]
    );
}

#[rstest]
fn browse_keeps_a_repeated_category_selected(settings: CatalogSettings) {
    let args = parse(&["--category", "2", "--category", "2"]);

    let view = browse(&args, &settings, std::io::sink()).expect("browse");

    let names: Vec<_> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Ice cream"]);
}

#[rstest]
fn browse_reports_missing_dataset(settings: CatalogSettings) {
    let args = parse(&["--dataset", "target/no-such-dir/catalog.json"]);

    let err = browse(&args, &settings, std::io::sink()).expect_err("expected error");

    assert!(matches!(
        err,
        BrowseError::Dataset {
            source: DatasetError::Io { .. }
        }
    ));
}
