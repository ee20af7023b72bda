use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use uplaylist::config::Config;
use uplaylist::media::scanner::scan;
use uplaylist::media::urlpath::translate;

fn config_for(root: &Path) -> Config {
    Config {
        port: 8080,
        root: root.to_path_buf(),
        prefix: "/movies".to_string(),
    }
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

/// The two-directory tree from the reference scenario:
/// <root>/a/X-Movie.mp4, <root>/b/other.mp4, plus two decoys that must
/// never match.
fn scenario_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("a/X-Movie.mp4"));
    touch(&tmp.path().join("b/other.mp4"));
    touch(&tmp.path().join("notes.txt"));
    touch(&tmp.path().join("b/clip.mkv"));
    tmp
}

fn file_set(entries: &[uplaylist::media::playlist::PlaylistEntry]) -> BTreeSet<String> {
    entries.iter().map(|e| e.file.clone()).collect()
}

#[test]
fn empty_keyword_includes_every_mp4() {
    let tmp = scenario_tree();
    let entries = scan(&config_for(tmp.path()), "");
    assert_eq!(
        file_set(&entries),
        BTreeSet::from([
            "/movies/a/X-Movie.mp4".to_string(),
            "/movies/b/other.mp4".to_string(),
        ])
    );
}

#[test]
fn titles_are_base_names_with_extension() {
    let tmp = scenario_tree();
    let entries = scan(&config_for(tmp.path()), "");
    let titles: BTreeSet<String> = entries.iter().map(|e| e.title.clone()).collect();
    assert_eq!(
        titles,
        BTreeSet::from(["X-Movie.mp4".to_string(), "other.mp4".to_string()])
    );
}

#[test]
fn keyword_matches_base_name_case_insensitively() {
    let tmp = scenario_tree();
    let entries = scan(&config_for(tmp.path()), "movie");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "X-Movie.mp4");
    assert_eq!(entries[0].file, "/movies/a/X-Movie.mp4");
}

#[test]
fn partial_keyword_matches() {
    let tmp = scenario_tree();
    let entries = scan(&config_for(tmp.path()), "MOV");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "X-Movie.mp4");
}

#[test]
fn unmatched_keyword_yields_empty_sequence() {
    let tmp = scenario_tree();
    assert!(scan(&config_for(tmp.path()), "zzz").is_empty());
}

#[test]
fn wrong_extensions_never_match_even_with_matching_keyword() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("movie.mkv"));
    touch(&tmp.path().join("movie.txt"));
    assert!(scan(&config_for(tmp.path()), "movie").is_empty());
    assert!(scan(&config_for(tmp.path()), "").is_empty());
}

#[test]
fn extension_match_is_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("CLIP.MP4"));
    assert!(scan(&config_for(tmp.path()), "").is_empty());
}

#[test]
fn placeholder_fields_are_always_empty() {
    let tmp = scenario_tree();
    for entry in scan(&config_for(tmp.path()), "") {
        assert_eq!(entry.image, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.media_id, "");
    }
}

#[test]
fn space_in_name_is_percent_encoded_but_separators_stay_literal() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("films/My Movie.mp4"));
    let entries = scan(&config_for(tmp.path()), "");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file, "/movies/films/My%20Movie.mp4");
    assert_eq!(entries[0].title, "My Movie.mp4");
}

#[test]
fn scan_of_missing_root_returns_empty_not_error() {
    let config = config_for(&PathBuf::from("/nonexistent/path/does/not/exist"));
    assert!(scan(&config, "").is_empty());
}

#[test]
fn repeated_scans_are_set_equal() {
    let tmp = scenario_tree();
    let config = config_for(tmp.path());
    assert_eq!(file_set(&scan(&config, "")), file_set(&scan(&config, "")));
}

#[test]
fn translated_paths_start_with_prefix_and_drop_root_text() {
    let tmp = scenario_tree();
    let config = config_for(tmp.path());
    let root_text = tmp.path().to_string_lossy().into_owned();
    for entry in scan(&config, "") {
        assert!(entry.file.starts_with("/movies/"), "got {}", entry.file);
        assert!(
            !entry.file.contains(&root_text),
            "{} leaks the scan root",
            entry.file
        );
    }
}

#[test]
fn translate_encodes_hash_and_question_mark() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(tmp.path());
    let path = tmp.path().join("what? #1.mp4");
    let url = translate(&config, &path);
    assert_eq!(url, "/movies/what%3F%20%231.mp4");
}

#[test]
fn translate_encodes_non_ascii() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(tmp.path());
    let url = translate(&config, &tmp.path().join("café.mp4"));
    assert_eq!(url, "/movies/caf%C3%A9.mp4");
}

#[test]
fn translate_falls_back_to_textual_replace_outside_root() {
    let config = Config {
        port: 8080,
        root: PathBuf::from("/data"),
        prefix: "/movies".to_string(),
    };
    // Not under the root: the first occurrence of the root text is still
    // rewritten, and only the first.
    let url = translate(&config, Path::new("/other/data/data/x.mp4"));
    assert_eq!(url, "/other/movies/data/x.mp4");
}
