use log::debug;

use crate::config::Config;
use crate::utils::error::BoxResult;

/// Print the localized path a request would be served from
pub fn handle_rewrite_command(
    config: &Config,
    path: &str,
    locale: Option<&str>,
    search: &str,
) -> BoxResult<()> {
    let rewriter = config.locale_rewriter();
    match rewriter.rewrite(path, search, locale) {
        Some(target) => println!("{}", target),
        None => {
            debug!("{} is not a localized route; passing through", path);
            println!("{}{}", path, search);
        }
    }
    Ok(())
}
