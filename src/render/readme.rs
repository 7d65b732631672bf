use super::answers::Answers;
use super::sections;
use crate::config::{
    DEFAULT_CONTRIBUTING, DEFAULT_EMAIL, DEFAULT_GITHUB_USERNAME, DEFAULT_PROJECT_NAME,
};
use crate::detection::ProjectInfo;

pub const FALLBACK_DESCRIPTION: &str = "A project created with repome";
pub const FALLBACK_LICENSE: &str = "ISC";

const HOMEPAGE: &str = env!("CARGO_PKG_REPOSITORY");

/// Renders the complete README for `info` and `answers`.
///
/// Each field resolves independently: the answer first, then the detected
/// value where one exists, then a fixed fallback.
pub fn render(info: &ProjectInfo, answers: &Answers) -> String {
    let owner = answers.github_username().unwrap_or(DEFAULT_GITHUB_USERNAME);

    let title = answers
        .project_name()
        .or(info.name.as_deref())
        .unwrap_or(DEFAULT_PROJECT_NAME);
    let description = answers
        .description()
        .or(info.description.as_deref())
        .unwrap_or(FALLBACK_DESCRIPTION);
    let contributing = answers.contributing().unwrap_or(DEFAULT_CONTRIBUTING);
    let license = answers
        .license()
        .or(info.license.as_deref())
        .unwrap_or(FALLBACK_LICENSE);
    let email = answers.email().unwrap_or(DEFAULT_EMAIL);

    let badges = sections::badges(info, owner);
    let toc = sections::table_of_contents(info);
    let installation = answers
        .installation()
        .map(str::to_string)
        .unwrap_or_else(|| sections::installation(info, owner));
    let usage = answers
        .usage()
        .map(str::to_string)
        .unwrap_or_else(|| sections::usage(info));
    let dependencies = sections::dependencies_section(info);
    let testing = sections::testing_section(info);

    format!(
        "# {title}\n\
         \n\
         {badges}\n\
         \n\
         {description}\n\
         \n\
         ## Table of Contents\n\
         {toc}\n\
         \n\
         ## Installation\n\
         {installation}\n\
         \n\
         ## Usage\n\
         {usage}\n\
         \n\
         {dependencies}{testing}## Contributing\n\
         \n\
         {contributing}\n\
         \n\
         ## License\n\
         \n\
         This project is licensed under the {license} License.\n\
         \n\
         ## Author\n\
         \n\
         **{owner}**\n\
         - GitHub: [@{owner}](https://github.com/{owner})\n\
         - Email: {email}\n\
         \n\
         ---\n\
         *This README was generated with [repome]({HOMEPAGE}) - A CLI tool for creating beautiful README files*\n"
    )
}
