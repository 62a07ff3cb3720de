use crate::builder::index::model::PostSummary;

/// Posts written in `lang`, in index order
pub fn for_locale<'a>(posts: &'a [PostSummary], lang: &str) -> Vec<&'a PostSummary> {
    posts.iter().filter(|post| post.lang() == Some(lang)).collect()
}

/// Sort newest first; posts without a usable date go last
pub fn newest_first(posts: &mut [&PostSummary]) {
    posts.sort_by(|a, b| b.date().cmp(&a.date()));
}
