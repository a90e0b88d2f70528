// File: crates/news-chart/tests/smoke.rs
// Purpose: End-to-end runs of the pipeline writing PNGs.

use std::path::PathBuf;

use news_chart::{run, ChartError, PlotConfig, StyleSheet, TableError};

fn shipped_input() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../files/input/news.csv"))
}

fn out_root(name: &str) -> PathBuf {
    PathBuf::from("target/test_out").join(name)
}

#[test]
fn renders_shipped_news_csv() {
    let root = out_root("e2e");
    // start without the output directory so the run has to create it
    std::fs::remove_dir_all(&root).ok();

    let config = PlotConfig {
        input_path: shipped_input(),
        output_path: root.join("files/plots/news.png"),
        ..PlotConfig::default()
    };
    let out = run(&config).expect("render should succeed");
    assert_eq!(out, config.output_path);
    assert!(root.join("files/plots").is_dir());

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(!bytes.is_empty(), "png should be non-empty");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 500));
}

#[test]
fn rerun_writes_same_path() {
    let config = PlotConfig {
        input_path: shipped_input(),
        output_path: out_root("rerun").join("news.png"),
        ..PlotConfig::default()
    };
    let a = run(&config).expect("first run");
    let b = run(&config).expect("second run");
    assert_eq!(a, b);
    assert!(b.is_file());
}

#[test]
fn default_config_uses_fixed_paths() {
    let config = PlotConfig::default();
    assert_eq!(config.input_path, PathBuf::from("files/input/news.csv"));
    assert_eq!(config.output_path, PathBuf::from("files/plots/news.png"));
    assert_eq!(config.styles.len(), 4);
    assert_eq!((config.render.width, config.render.height), (800, 500));
}

#[test]
fn missing_input_propagates() {
    let config = PlotConfig {
        input_path: PathBuf::from("target/test_out/missing/news.csv"),
        output_path: out_root("missing_input").join("news.png"),
        ..PlotConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ChartError::Table(TableError::Io { .. })), "got {err:?}");
    assert!(!config.output_path.exists());
}

#[test]
fn missing_style_writes_nothing() {
    let root = out_root("missing_style");
    std::fs::remove_dir_all(&root).ok();

    let mut partial = StyleSheet::new();
    for name in ["Newspaper", "Television", "Radio"] {
        partial.insert(name, *StyleSheet::news().get(name).expect("preset"));
    }
    let config = PlotConfig {
        input_path: shipped_input(),
        output_path: root.join("news.png"),
        styles: partial,
        ..PlotConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ChartError::MissingStyle { ref column } if column == "Internet"), "got {err:?}");
    assert!(!config.output_path.exists());
}

#[test]
fn unwritable_output_is_io_error() {
    let root = out_root("blocked");
    std::fs::create_dir_all(&root).expect("create root");
    // a regular file where a directory is needed
    let blocker = root.join("not_a_dir");
    std::fs::write(&blocker, b"x").expect("write blocker");

    let config = PlotConfig {
        input_path: shipped_input(),
        output_path: blocker.join("plots/news.png"),
        ..PlotConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }), "got {err:?}");
}

#[test]
fn output_directory_is_created_before_rendering() {
    let root = out_root("dir_first");
    std::fs::remove_dir_all(&root).ok();

    let table = news_chart::Table::from_path(shipped_input()).expect("shipped csv");
    let fig = news_chart::build_figure(&table, &StyleSheet::news(), &news_chart::FigureStyle::default())
        .expect("build");
    // an empty canvas cannot get a raster surface
    let mut opts = news_chart::RenderOptions::default();
    opts.width = 0;
    opts.height = 0;

    let out = root.join("plots/news.png");
    let err = news_chart::render_to_png(&fig, &opts, &out).unwrap_err();
    assert!(matches!(err, ChartError::Surface { .. }), "got {err:?}");
    assert!(root.join("plots").is_dir());
    assert!(!out.exists());
}
