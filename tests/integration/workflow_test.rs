use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use sysmon::workflow;
use tempfile::tempdir;

fn commit_all(repo: &Repository, message: &str) {
    let signature = Signature::now("Tester", "tester@example.com").unwrap();
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap();
}

#[test]
fn plain_directory_reports_no_git_and_full_stats() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
    fs::write(dir.path().join("b.rs"), "fn b() {}\nfn c() {}\n").unwrap();

    let report = workflow::inspect(dir.path()).unwrap();
    assert!(report.git.is_none());
    assert_eq!(report.project.total_files, 2);
    assert_eq!(report.project.total_lines, 3);
    assert_eq!(report.project.file_types, vec![(".rs".to_string(), 2)]);
}

#[test]
fn committed_repository_reports_branch_and_clean_tree() {
    let dir = tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("README.md"), "# project\n").unwrap();
    commit_all(&repo, "initial commit");

    let report = workflow::inspect(dir.path()).unwrap();
    let git = report.git.expect("repository should be detected");

    assert_ne!(git.branch, "unknown");
    assert!(!git.has_changes);
    assert!(git.last_commit.contains("Tester"));
    assert!(git.last_commit.contains("initial commit"));
}

#[test]
fn dirty_repository_is_flagged() {
    let dir = tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("tracked.txt"), "v1\n").unwrap();
    commit_all(&repo, "add tracked");
    fs::write(dir.path().join("tracked.txt"), "v2\n").unwrap();

    let report = workflow::inspect(dir.path()).unwrap();
    assert!(report.git.unwrap().has_changes);
}

#[test]
fn repository_metadata_is_excluded_from_project_stats() {
    let dir = tempdir().unwrap();
    Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("src.rs"), "fn main() {}\n").unwrap();

    let report = workflow::inspect(dir.path()).unwrap();
    // .git is a hidden path; nothing under it is counted.
    assert_eq!(report.project.total_files, 1);
    assert!(report
        .project
        .largest_files
        .iter()
        .all(|file| !Path::new(&file.path).starts_with(".git")));
}
