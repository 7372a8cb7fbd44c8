mod common;

use common::{dir, file, StubHost};
use gitgrade::config::{FetchSettings, TreeStrategy};
use gitgrade::errors::GitGradeError;
use gitgrade::fetch::Fetcher;
use gitgrade::models::{EntryKind, TreeEntry};

fn contents_settings() -> FetchSettings {
    FetchSettings { strategy: TreeStrategy::Contents, ..Default::default() }
}

fn tree_settings() -> FetchSettings {
    FetchSettings { strategy: TreeStrategy::GitTree, ..Default::default() }
}

fn small_repo() -> StubHost {
    StubHost::new()
        .listing("", vec![file("README.md"), file("package.json"), dir("src")])
        .listing("src", vec![file("src/main.py"), file("src/util.py"), dir("src/sub")])
        .listing("src/sub", vec![file("src/sub/deep.py")])
        .file("README.md", "# Demo\nHello")
        .file("package.json", "{\"name\": \"demo\"}")
        .file("src/main.py", "print('hi')")
}

#[tokio::test]
async fn test_owner_and_name_from_url() {
    let host = small_repo();
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo.git/").await.unwrap();
    assert_eq!(snapshot.owner, "octo");
    assert_eq!(snapshot.name, "demo");
    assert_eq!(snapshot.full_name(), "octo/demo");
    assert_eq!(calls.lock().unwrap()[0], "repository octo/demo");
    assert_eq!(snapshot.stars, Some(42));
    assert_eq!(snapshot.description.as_deref(), Some("A demo project"));
}

#[tokio::test]
async fn test_invalid_url_makes_no_requests() {
    for url in ["https://gitlab.com/octo/demo", "https://github.com/octo", "not a url"] {
        let host = small_repo();
        let calls = host.call_log();
        let fetcher = Fetcher::new(Box::new(host), contents_settings());

        let err = fetcher.fetch(url).await.unwrap_err();
        assert!(matches!(err, GitGradeError::InvalidUrl(_)), "{} gave {:?}", url, err);
        assert_eq!(err.classify().error_type, "InvalidURL");
        assert!(calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_contents_walk_stops_at_max_depth() {
    let host = small_repo();
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    let paths: Vec<&str> = snapshot.file_tree().collect();
    assert_eq!(
        paths,
        vec!["README.md", "package.json", "src", "src/main.py", "src/util.py", "src/sub"]
    );
    assert_eq!(snapshot.tree[2].kind, EntryKind::Dir);

    let listings: Vec<String> = calls.lock().unwrap()
        .iter()
        .filter(|c| c.starts_with("list"))
        .cloned()
        .collect();
    assert_eq!(listings, vec!["list ", "list src"]);
}

#[tokio::test]
async fn test_contents_depth_three_descends_further() {
    let settings = FetchSettings { max_depth: 3, ..contents_settings() };
    let fetcher = Fetcher::new(Box::new(small_repo()), settings);

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert!(snapshot.file_tree().any(|p| p == "src/sub/deep.py"));
}

#[tokio::test]
async fn test_important_files_downloaded_from_default_branch() {
    let host = small_repo();
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.files.len(), 3);
    assert_eq!(snapshot.files["README.md"], "# Demo\nHello");
    assert!(!snapshot.files.contains_key("src/util.py"));
    assert!(snapshot.omitted.is_empty());
    assert!(calls.lock().unwrap().contains(&"raw README.md@main".to_string()));
}

#[tokio::test]
async fn test_failed_downloads_become_omissions() {
    let host = StubHost::new()
        .listing("", vec![file("README.md"), file("Dockerfile")])
        .file("README.md", "# Demo");
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.files.len(), 1);
    assert_eq!(snapshot.omitted.len(), 1);
    assert_eq!(snapshot.omitted[0].path, "Dockerfile");
    assert!(snapshot.omitted[0].reason.contains("404"));
}

#[tokio::test]
async fn test_failed_subdirectory_listing_is_recorded() {
    let host = StubHost::new()
        .listing("", vec![file("main.py"), dir("vendor")])
        .failing_listing("vendor")
        .file("main.py", "x = 1");
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.tree.len(), 2);
    assert_eq!(snapshot.omitted[0].path, "vendor");
    assert!(snapshot.omitted[0].reason.starts_with("directory listing failed"));
}

#[tokio::test]
async fn test_failed_root_listing_aborts() {
    let host = StubHost::new().failing_listing("");
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let err = fetcher.fetch("https://github.com/octo/demo").await.unwrap_err();
    assert!(matches!(err, GitGradeError::Fetch(_)));
    assert_eq!(err.classify().exit_code, 3);
}

#[tokio::test]
async fn test_file_budget_truncates_on_char_boundaries() {
    let long = "é".repeat(6_000);
    let host = StubHost::new()
        .listing("", vec![file("README.md")])
        .file("README.md", &long);
    let fetcher = Fetcher::new(Box::new(host), contents_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.files["README.md"].chars().count(), 5_000);
}

#[tokio::test]
async fn test_git_tree_uses_reported_default_branch() {
    let mut host = StubHost::new()
        .tree("develop", vec![TreeEntry::file("README.md"), TreeEntry::dir("src")])
        .file("README.md", "# Demo");
    host.metadata.default_branch = Some("develop".into());
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), tree_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.tree.len(), 2);
    let calls = calls.lock().unwrap();
    assert!(calls.contains(&"tree develop".to_string()));
    assert!(calls.contains(&"raw README.md@develop".to_string()));
}

#[tokio::test]
async fn test_git_tree_falls_back_to_master() {
    let mut host = StubHost::new()
        .tree("master", vec![TreeEntry::file("app.py"), TreeEntry::file("lib/helpers.py")])
        .file("app.py", "app = 1");
    host.metadata.default_branch = None;
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), tree_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.files["app.py"], "app = 1");

    let tree_calls: Vec<String> = calls.lock().unwrap()
        .iter()
        .filter(|c| c.starts_with("tree"))
        .cloned()
        .collect();
    assert_eq!(tree_calls, vec!["tree main", "tree master"]);
}

#[tokio::test]
async fn test_git_tree_without_any_branch_fails() {
    let fetcher = Fetcher::new(Box::new(StubHost::new()), tree_settings());
    let err = fetcher.fetch("https://github.com/octo/demo").await.unwrap_err();
    assert!(matches!(err, GitGradeError::Fetch(_)));
}

#[tokio::test]
async fn test_git_tree_skips_files_below_max_depth() {
    let mut entries = vec![TreeEntry::dir("packages")];
    for i in 0..400 {
        entries.push(TreeEntry::dir(&format!("packages/p{}", i)));
        entries.push(TreeEntry::file(&format!("packages/p{}/package.json", i)));
    }
    let host = StubHost::new().tree("main", entries);
    let calls = host.call_log();
    let fetcher = Fetcher::new(Box::new(host), tree_settings());

    let snapshot = fetcher.fetch("https://github.com/octo/monorepo").await.unwrap();
    assert_eq!(snapshot.tree.len(), 801);
    assert!(snapshot.files.is_empty());
    assert!(snapshot.omitted.is_empty());
    assert!(!calls.lock().unwrap().iter().any(|c| c.starts_with("raw")));
}

#[tokio::test]
async fn test_downloads_capped_and_root_first() {
    let mut entries = Vec::new();
    for i in 0..30 {
        entries.push(TreeEntry::file(&format!("pkg{}/package.json", i)));
    }
    entries.push(TreeEntry::file("package.json"));
    let mut host = StubHost::new().tree("main", entries).file("package.json", "{}");
    for i in 0..30 {
        host = host.file(&format!("pkg{}/package.json", i), "{}");
    }
    let calls = host.call_log();
    let settings = FetchSettings { max_files: 4, ..tree_settings() };
    let fetcher = Fetcher::new(Box::new(host), settings);

    let snapshot = fetcher.fetch("https://github.com/octo/demo").await.unwrap();
    assert_eq!(snapshot.files.len(), 4);
    assert!(snapshot.files.contains_key("package.json"));

    let raw: Vec<String> = calls.lock().unwrap()
        .iter()
        .filter(|c| c.starts_with("raw"))
        .cloned()
        .collect();
    assert_eq!(
        raw,
        vec![
            "raw package.json@main",
            "raw pkg0/package.json@main",
            "raw pkg1/package.json@main",
            "raw pkg2/package.json@main",
        ]
    );
}
