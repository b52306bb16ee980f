use chrono::NaiveDate;
use std::cmp::Ordering;

use super::PostSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::TitleAsc,
        SortOption::TitleDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOption::DateDesc => "Newest first",
            SortOption::DateAsc => "Oldest first",
            SortOption::TitleAsc => "Title A-Z",
            SortOption::TitleDesc => "Title Z-A",
        }
    }

    /// Cycle to the following option.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Parse the date formats posts are written with. `None` sorts as oldest.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
    let date = date.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Sorted copy of `posts`. The sort is stable.
pub fn sort_posts(posts: &[PostSummary], sort: SortOption) -> Vec<PostSummary> {
    let mut sorted = posts.to_vec();
    match sort {
        SortOption::DateDesc => sorted.sort_by_key(|p| std::cmp::Reverse(parse_date(&p.date))),
        SortOption::DateAsc => sorted.sort_by_key(|p| parse_date(&p.date)),
        SortOption::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOption::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
    sorted
}

/// Posts matching `search` (case-insensitive, over title, summary, category
/// and tags) and, when given, exactly `category`.
pub fn filter_posts(
    posts: &[PostSummary],
    search: &str,
    category: Option<&str>,
) -> Vec<PostSummary> {
    let needle = search.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let matches_search = needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.summary.to_lowercase().contains(&needle)
                || post.category.to_lowercase().contains(&needle)
                || post.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            let matches_category = category.is_none_or(|c| post.category == c);
            matches_search && matches_category
        })
        .cloned()
        .collect()
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(posts: &[PostSummary]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for post in posts {
        if !post.category.is_empty() && !seen.contains(&post.category) {
            seen.push(post.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PostKind;
    use relative_path::RelativePathBuf;
    use rstest::rstest;

    fn post(title: &str, date: &str, category: &str, tags: &[&str]) -> PostSummary {
        PostSummary {
            slug: title.to_lowercase().replace(' ', "-"),
            relative_path: RelativePathBuf::from(format!("{title}.md")),
            kind: PostKind::Markdown,
            title: title.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: format!("About {title}"),
            body: None,
        }
    }

    fn titles(posts: &[PostSummary]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    fn sample() -> Vec<PostSummary> {
        vec![
            post("beta", "2024-03-01", "EdTech", &["AI"]),
            post("Alpha", "March 15, 2024", "Physics", &["time"]),
            post("gamma", "someday", "EdTech", &[]),
        ]
    }

    #[rstest]
    #[case(SortOption::DateDesc, vec!["Alpha", "beta", "gamma"])]
    #[case(SortOption::DateAsc, vec!["gamma", "beta", "Alpha"])]
    #[case(SortOption::TitleAsc, vec!["Alpha", "beta", "gamma"])]
    #[case(SortOption::TitleDesc, vec!["gamma", "beta", "Alpha"])]
    fn sorting(#[case] sort: SortOption, #[case] expected: Vec<&str>) {
        assert_eq!(titles(&sort_posts(&sample(), sort)), expected);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut option = SortOption::default();
        for _ in 0..SortOption::ALL.len() {
            option = option.next();
        }
        assert_eq!(option, SortOption::DateDesc);
    }

    #[test]
    fn parses_long_form_dates() {
        assert_eq!(
            parse_date("March 15, 2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date("nope"), None);
    }

    #[rstest]
    #[case("", None, vec!["beta", "Alpha", "gamma"])]
    #[case("ALPHA", None, vec!["Alpha"])]
    #[case("ai", None, vec!["beta"])]
    #[case("", Some("EdTech"), vec!["beta", "gamma"])]
    #[case("about", Some("Physics"), vec!["Alpha"])]
    fn filtering(
        #[case] search: &str,
        #[case] category: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(titles(&filter_posts(&sample(), search, category)), expected);
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(categories(&sample()), vec!["EdTech", "Physics"]);
    }
}
