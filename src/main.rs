use anyhow::Result;
use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use postwright::config::Config;
use postwright::post::PostRecord;
use postwright::query::{select, SortMode};
use postwright::store;
use postwright::write::Draft;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let posts_arg = Arg::with_name("posts")
        .long("posts")
        .short("p")
        .takes_value(true)
        .help("Path to the posts.json collection file");

    let matches = App::new("postwright")
        .version(crate_version!())
        .about("Tooling for the posts.json collection behind my portfolio blog")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists posts, optionally filtered and sorted")
                .arg(
                    Arg::with_name("query")
                        .long("query")
                        .short("q")
                        .takes_value(true)
                        .help("Keep posts whose title, excerpt, or tags contain this text"),
                )
                .arg(
                    Arg::with_name("sort")
                        .long("sort")
                        .short("s")
                        .takes_value(true)
                        .default_value("new")
                        .possible_values(&["new", "old"])
                        .help("Sort by date"),
                )
                .arg(posts_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Shows one post's detail")
                .arg(Arg::with_name("ID").required(true))
                .arg(posts_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("new")
                .about("Assembles a draft into a JSON block ready to paste into posts.json")
                .arg(
                    Arg::with_name("DRAFT")
                        .required(true)
                        .help("Path to a YAML draft file"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("list", Some(matches)) => list(matches),
        ("show", Some(matches)) => show(matches),
        ("new", Some(matches)) => new(matches),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Resolves the collection file path: the `--posts` flag wins, otherwise the
/// project configuration discovered from the working directory.
fn posts_file(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.value_of("posts") {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(Config::from_directory(&std::env::current_dir()?)?.posts_file),
    }
}

fn list(matches: &ArgMatches) -> Result<()> {
    let posts = store::load_posts_or_empty(&posts_file(matches)?);
    let query = matches.value_of("query").unwrap_or("");
    let mode: SortMode = matches
        .value_of("sort")
        .unwrap_or("new")
        .parse()
        .unwrap_or(SortMode::Unsorted);

    for post in select(&posts, query, mode) {
        println!("{}", listing_line(&post));
    }
    Ok(())
}

/// One listing row: id, display date, title, category badge, and tags.
fn listing_line(post: &PostRecord) -> String {
    let mut line = format!("{}  {}  {}", post.id, post.display_date(), post.title);
    if let Some(category) = &post.category {
        line.push_str(&format!("  [{}]", category.label));
    }
    for tag in &post.tags {
        line.push_str(&format!("  #{}", tag));
    }
    line
}

fn show(matches: &ArgMatches) -> Result<()> {
    let posts = store::load_posts_or_empty(&posts_file(matches)?);
    let id = matches.value_of("ID").unwrap_or("");
    match store::find_post(&posts, id) {
        None => {
            // A miss is a normal outcome, not a fault.
            println!("post not found: {}", id);
        }
        Some(post) => print_detail(post),
    }
    Ok(())
}

fn print_detail(post: &PostRecord) {
    match &post.category {
        Some(category) => println!("{} [{}]", post.title, category.label),
        None => println!("{}", post.title),
    }
    println!("{}", post.display_date());
    if !post.image.is_empty() {
        println!("image: {}", image_src(&post.image));
    }
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" "));
    }
    println!();
    println!("{}", post.content);
}

/// The detail view serves images from the deployment root, so the stored
/// `public/` prefix is dropped for display.
fn image_src(stored: &str) -> &str {
    match stored.strip_prefix("public/") {
        Some(rest) => rest,
        None => stored,
    }
}

fn new(matches: &ArgMatches) -> Result<()> {
    let path = Path::new(matches.value_of("DRAFT").unwrap_or(""));
    let record = Draft::from_file(path)?.assemble()?;
    // The operator pastes this into posts.json and fills in the id.
    println!("{}", record.to_json_pretty()?);
    Ok(())
}
