use crate::builder::{build_index, for_locale, newest_first, PostSummary};
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Build the post index once and print it as JSON
pub fn handle_index_command(
    config: &Config,
    lang: Option<&str>,
    sort_newest_first: bool,
    pretty: bool,
) -> BoxResult<()> {
    let posts = build_index(config)?;
    println!("{}", render_listing(&posts, lang, sort_newest_first, pretty)?);
    Ok(())
}

fn render_listing(
    posts: &[PostSummary],
    lang: Option<&str>,
    sort_newest_first: bool,
    pretty: bool,
) -> BoxResult<String> {
    let mut selected: Vec<&PostSummary> = match lang {
        Some(lang) => for_locale(posts, lang),
        None => posts.iter().collect(),
    };
    if sort_newest_first {
        newest_first(&mut selected);
    }

    let json = if pretty {
        serde_json::to_string_pretty(&selected)?
    } else {
        serde_json::to_string(&selected)?
    };
    Ok(json)
}
