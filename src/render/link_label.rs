use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn pull_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/pull/\d+").expect("static regex"))
}

fn issue_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/issues/\d+").expect("static regex"))
}

/// Display label for an outbound link, chosen from its host and path.
/// Never fails: anything that does not parse as a URL is labelled "View".
pub fn link_label(raw: &str) -> &'static str {
    let url = match Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return "View",
    };
    let host = url.host_str().unwrap_or("");
    let path = url.path();

    if host.contains("github.com") {
        if pull_re().is_match(path) {
            return "Pull Request";
        }
        if issue_re().is_match(path) {
            return "GitHub Issue";
        }
        return "GitHub Repo";
    }
    if host.contains("youtube.com") || host.contains("youtu.be") {
        return "YouTube";
    }
    if host.contains("npmjs.com") {
        return "npm Package";
    }
    if host.contains("nuget.org") {
        return "NuGet Package";
    }
    "Website"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_links() {
        assert_eq!(link_label("https://github.com/x/y/pull/42"), "Pull Request");
        assert_eq!(link_label("https://github.com/x/y/issues/7"), "GitHub Issue");
        assert_eq!(link_label("https://github.com/x/y"), "GitHub Repo");
        assert_eq!(link_label("https://github.com/x/y/pull/"), "GitHub Repo");
        assert_eq!(link_label("https://gist.github.com/x/abc"), "GitHub Repo");
    }

    #[test]
    fn test_registries_and_video() {
        assert_eq!(link_label("https://www.youtube.com/watch?v=abc"), "YouTube");
        assert_eq!(link_label("https://youtu.be/abc"), "YouTube");
        assert_eq!(link_label("https://www.npmjs.com/package/left-pad"), "npm Package");
        assert_eq!(link_label("https://www.nuget.org/packages/Foo"), "NuGet Package");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(link_label("https://example.com/about"), "Website");
        assert_eq!(link_label("not a url"), "View");
        assert_eq!(link_label(""), "View");
        assert_eq!(link_label("/relative/path"), "View");
    }
}
