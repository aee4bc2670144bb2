//! GitHub URL parsing
//!
//! Accepts repository, tree and blob URLs:
//! `https://github.com/{owner}/{repo}[/(tree|blob)/{branch}[/{path}]]`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Branch assumed when the URL does not name one
pub const DEFAULT_BRANCH: &str = "main";

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?github\.com/(?P<owner>[A-Za-z0-9_.-]+)/(?P<repo>[A-Za-z0-9_.-]+?)(?:\.git)?(?:/(?:tree|blob)/(?P<branch>[^/]+)(?:/(?P<path>.+?))?)?/?$",
    )
    .expect("GitHub URL regex is valid")
});

/// Components of a GitHub URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubTarget {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
}

impl GithubTarget {
    /// Parse a GitHub URL, returning `None` for anything else
    pub fn parse(url: &str) -> Option<Self> {
        let caps = GITHUB_URL.captures(url.trim())?;
        Some(Self {
            owner: caps["owner"].to_string(),
            repo: caps["repo"].to_string(),
            branch: caps
                .name("branch")
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            path: caps
                .name("path")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// `owner/repo` slug
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for GithubTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.slug(), self.branch)?;
        if !self.path.is_empty() {
            write!(f, ":{}", self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_url() {
        let target = GithubTarget::parse("https://github.com/x/y").unwrap();
        assert_eq!(target.owner, "x");
        assert_eq!(target.repo, "y");
        assert_eq!(target.branch, DEFAULT_BRANCH);
        assert_eq!(target.path, "");
        assert_eq!(target.slug(), "x/y");
    }

    #[test]
    fn test_parse_tree_and_blob_urls() {
        let tree = GithubTarget::parse("https://github.com/rust-lang/rust/tree/master/library/core")
            .unwrap();
        assert_eq!(tree.branch, "master");
        assert_eq!(tree.path, "library/core");

        let blob = GithubTarget::parse("https://github.com/a/b/blob/dev/src/main.rs").unwrap();
        assert_eq!(blob.branch, "dev");
        assert_eq!(blob.path, "src/main.rs");
        assert_eq!(blob.to_string(), "a/b@dev:src/main.rs");
    }

    #[test]
    fn test_parse_tolerates_trailing_slash_and_git_suffix() {
        assert_eq!(GithubTarget::parse("https://github.com/x/y/").unwrap().repo, "y");
        assert_eq!(GithubTarget::parse("github.com/x/y.git").unwrap().repo, "y");
    }

    #[test]
    fn test_parse_rejects_other_urls() {
        assert!(GithubTarget::parse("").is_none());
        assert!(GithubTarget::parse("https://gitlab.com/x/y").is_none());
        assert!(GithubTarget::parse("https://github.com/onlyowner").is_none());
        assert!(GithubTarget::parse("not a url").is_none());
    }
}
