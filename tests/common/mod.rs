//! Scratch repositories for integration tests.

#![allow(dead_code)]

use std::path::Path;

const IDENTITY: &str = "[user]\n\tname = Release Bot\n\temail = release@example.com\n";

/// Initialize a repository with a committer identity and `trunk` as HEAD branch.
pub fn init_repo(dir: &Path) -> gix::Repository {
    let repo = gix::init(dir).expect("init repository");
    let git_dir = repo.path().to_path_buf();
    drop(repo);

    append_config(&git_dir, IDENTITY);
    std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/trunk\n").expect("write HEAD");

    gix::open(dir).expect("reopen repository")
}

/// Append raw text to the repository's config file
pub fn append_config(git_dir: &Path, text: &str) {
    append_config_bytes(git_dir, text.as_bytes());
}

/// Append raw bytes, which need not be valid UTF-8, to the config file
pub fn append_config_bytes(git_dir: &Path, bytes: &[u8]) {
    let config_path = git_dir.join("config");
    let mut config = std::fs::read(&config_path).expect("read config");
    config.extend_from_slice(bytes);
    std::fs::write(&config_path, config).expect("write config");
}

/// Remove the `[user]` section written by [`init_repo`]
pub fn remove_identity(git_dir: &Path) {
    let config_path = git_dir.join("config");
    let config = std::fs::read_to_string(&config_path).expect("read config");
    std::fs::write(&config_path, config.replace(IDENTITY, "")).expect("write config");
}

/// Point the `trunk` branch at an arbitrary object id
pub fn set_trunk(git_dir: &Path, id: &str) {
    let branch = git_dir.join("refs").join("heads").join("trunk");
    std::fs::create_dir_all(branch.parent().expect("refs/heads")).expect("create refs/heads");
    std::fs::write(branch, format!("{}\n", id)).expect("write branch");
}

/// Configure `origin` with the given URLs, in order
pub fn add_origin(repo: &gix::Repository, urls: &[&str]) {
    let mut section = String::from("[remote \"origin\"]\n");
    for url in urls {
        section.push_str(&format!("\turl = {}\n", url));
    }
    section.push_str("\tfetch = +refs/heads/*:refs/remotes/origin/*\n");
    append_config(repo.path(), &section);
}

/// Commit an empty tree on top of HEAD, returning the new commit id as hex
pub fn commit(dir: &Path, message: &str) -> String {
    let repo = gix::open(dir).expect("open repository");
    let tree = repo
        .write_object(gix::objs::Tree::empty())
        .expect("write tree")
        .detach();
    let parents: Vec<gix::ObjectId> = repo.head_id().ok().map(|id| id.detach()).into_iter().collect();
    repo.commit("HEAD", message, tree, parents)
        .expect("create commit")
        .to_string()
}

/// Commit a tag ultimately points to
pub fn peeled_tag(dir: &Path, tag: &str) -> String {
    let repo = gix::open(dir).expect("open repository");
    repo.rev_parse_single(format!("refs/tags/{}^{{commit}}", tag).as_str())
        .expect("tag should peel to a commit")
        .to_string()
}
