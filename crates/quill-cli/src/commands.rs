//! Command parsing and execution for the `quill` binary.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use quill_core::api::ApiClient;
use quill_core::models::{Comment, LoginForm, NewArticleComment, PageQuery};
use quill_core::utils::{excerpt, format_count, format_date};
use quill_core::{ArticleStore, Config, SessionState, SessionStore};
use tracing::info;

/// Width of list excerpts in characters.
const EXCERPT_WIDTH: usize = 60;

pub const USAGE: &str = "\
Usage: quill <command>

Account:
  login [username]          Log in (prompts for password)
  logout                    Forget the saved session
  status                    Check whether the saved session is still valid
  me                        Show your profile

Reading:
  articles                  List articles
  article <id>              Show an article
  like <id>                 Like an article
  tag <id>                  List articles with a tag
  category <id>             List articles in a category
  categories                List categories
  comments <article-id>     Show an article's comments
  comment <article-id> <text...>
                            Comment on an article
  talks [page] [size]       List talks
  site                      Show site info and stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: Option<String> },
    Logout,
    Status,
    Me,
    Articles,
    Article(i64),
    Like(i64),
    Tag(i64),
    Category(i64),
    Categories,
    Comments(i64),
    Comment { article_id: i64, text: String },
    Talks(PageQuery),
    Site,
    Help,
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        let command = match name.as_str() {
            "login" => Command::Login {
                username: rest.first().cloned(),
            },
            "logout" => Command::Logout,
            "status" => Command::Status,
            "me" => Command::Me,
            "articles" => Command::Articles,
            "article" => Command::Article(id_arg(rest, "article id")?),
            "like" => Command::Like(id_arg(rest, "article id")?),
            "tag" => Command::Tag(id_arg(rest, "tag id")?),
            "category" => Command::Category(id_arg(rest, "category id")?),
            "categories" => Command::Categories,
            "comments" => Command::Comments(id_arg(rest, "article id")?),
            "comment" => {
                let article_id = id_arg(rest, "article id")?;
                let text = rest[1..].join(" ");
                if text.trim().is_empty() {
                    bail!("Missing comment text");
                }
                Command::Comment { article_id, text }
            }
            "talks" => {
                let page = number_arg(rest.first(), "page")?.unwrap_or(1);
                let size = number_arg(rest.get(1), "page size")?
                    .unwrap_or(PageQuery::default().page_size);
                Command::Talks(PageQuery::new(page, size))
            }
            "site" => Command::Site,
            "help" | "--help" | "-h" => Command::Help,
            other => bail!("Unknown command: {}\n\n{}", other, USAGE),
        };
        Ok(command)
    }
}

fn id_arg(rest: &[String], what: &str) -> Result<i64> {
    let raw = rest
        .first()
        .with_context(|| format!("Missing {}", what))?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid {}: {}", what, raw))
}

fn number_arg(raw: Option<&String>, what: &str) -> Result<Option<u32>> {
    raw.map(|r| r.parse::<u32>().with_context(|| format!("Invalid {}: {}", what, r)))
        .transpose()
}

/// Everything a command may touch.
pub struct AppContext {
    pub config: Config,
    pub session: SessionStore,
    pub articles: ArticleStore,
}

impl AppContext {
    fn client(&self) -> &ApiClient {
        self.session.client()
    }
}

pub async fn run(command: Command, ctx: &mut AppContext) -> Result<()> {
    match command {
        Command::Help => println!("{}", USAGE),
        Command::Login { username } => login(ctx, username).await?,
        Command::Logout => {
            ctx.session.logout();
            println!("Logged out.");
        }
        Command::Status => status(ctx).await,
        Command::Me => {
            let profile = ctx.client().user_info().await?;
            println!("{}", profile.display_name());
            if let Some(ref email) = profile.email {
                println!("  email:  {}", email);
            }
            if let Some(ref since) = profile.register_time {
                println!("  joined: {}", format_date(since));
            }
        }
        Command::Articles => {
            let articles = ctx.client().article_list().await?;
            print_articles(&articles);
        }
        Command::Article(id) => {
            let article = ctx.client().article_detail(id).await?;
            ctx.articles.set_article(&serde_json::to_value(&article)?)?;

            println!("{}", article.title);
            println!(
                "{} | {} | {} views | {} likes",
                format_date(&article.created_time),
                article.category_name,
                format_count(article.views),
                format_count(article.likes)
            );
            if !article.tags.is_empty() {
                println!("tags: {}", article.tag_names().join(", "));
            }
            println!();
            println!(
                "{}",
                article.content.as_deref().unwrap_or(&article.description)
            );
        }
        Command::Like(id) => {
            ctx.client().like_article(id).await?;
            println!("Liked article {}.", id);
        }
        Command::Tag(id) => {
            ctx.articles.set_selected_tag(Some(id));
            let articles = ctx.client().articles_by_tag(id).await?;
            print_articles(&articles);
        }
        Command::Category(id) => {
            ctx.articles.set_selected_category(Some(id));
            let articles = ctx.client().articles_by_category(id).await?;
            print_articles(&articles);
        }
        Command::Categories => {
            for category in ctx.client().category_list().await? {
                match category.article_count {
                    Some(count) => println!("{:>5}  {} ({})", category.id, category.name, count),
                    None => println!("{:>5}  {}", category.id, category.name),
                }
            }
        }
        Command::Comments(article_id) => {
            let comments = ctx.client().article_comments(article_id).await?;
            if comments.is_empty() {
                println!("No comments yet.");
            }
            for comment in &comments {
                print_comment(comment, 0);
            }
        }
        Command::Comment { article_id, text } => {
            if ctx.session.state() == SessionState::Anonymous {
                bail!("Commenting requires a login. Run `quill login` first.");
            }
            let comment = NewArticleComment {
                article_id,
                content: text,
                parent_id: None,
            };
            ctx.client().add_article_comment(&comment).await?;
            println!("Comment posted.");
        }
        Command::Talks(page) => {
            let talks = ctx.client().talk_list(page).await?;
            for talk in &talks.records {
                let when = talk.create_time.as_deref().map(format_date).unwrap_or_default();
                println!("{:>12}  {}", when, excerpt(&talk.content, EXCERPT_WIDTH));
            }
            println!("page {} ({} talks total)", page.page, talks.total);
        }
        Command::Site => {
            let (info, stats) = futures::try_join!(
                ctx.client().site_base_info(),
                ctx.client().site_stats()
            )?;
            println!("{}", info.web_name.as_deref().unwrap_or("(untitled)"));
            if let Some(ref author) = info.author {
                println!("by {}", author);
            }
            if let Some(ref intro) = info.introduction {
                println!("{}", intro);
            }
            println!(
                "{} articles, {} categories, {} tags, {} talks, {} views",
                stats.article_count,
                stats.category_count,
                stats.tag_count,
                stats.talk_count,
                format_count(stats.view_count)
            );
        }
    }
    Ok(())
}

async fn login(ctx: &mut AppContext, username: Option<String>) -> Result<()> {
    let username = match username.or_else(|| ctx.config.last_username.clone()) {
        Some(name) => name,
        None => prompt("Username: ")?,
    };
    let password = rpassword::prompt_password(format!("Password for {}: ", username))
        .context("Failed to read password")?;

    ctx.session
        .login(&LoginForm::new(username.clone(), password))
        .await?;

    ctx.config.last_username = Some(username.clone());
    ctx.config.save().context("Failed to save config")?;

    info!(username = %username, "Login complete");
    println!("Logged in as {}.", username);
    Ok(())
}

async fn status(ctx: &AppContext) {
    match ctx.session.state() {
        SessionState::Anonymous => println!("Not logged in."),
        SessionState::Authenticated => {
            let name = ctx
                .session
                .user_info()
                .username
                .as_deref()
                .unwrap_or("(unknown)");
            if ctx.session.check_login().await {
                println!("Logged in as {}.", name);
            } else {
                println!("Session for {} is no longer valid. Run `quill login`.", name);
            }
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        bail!("No username given");
    }
    Ok(value)
}

fn print_articles(articles: &[quill_core::models::Article]) {
    if articles.is_empty() {
        println!("No articles.");
        return;
    }
    for article in articles {
        println!(
            "{:>5}  {:<12}  {}",
            article.id,
            format_date(&article.created_time),
            excerpt(&article.title, EXCERPT_WIDTH)
        );
    }
}

fn print_comment(comment: &Comment, depth: usize) {
    let indent = "  ".repeat(depth);
    let when = comment.create_time.as_deref().map(format_date).unwrap_or_default();
    println!("{}{} {}: {}", indent, when, comment.author(), comment.content);
    for reply in &comment.children {
        print_comment(reply, depth + 1);
    }
}
