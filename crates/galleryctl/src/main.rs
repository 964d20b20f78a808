use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use clap_complete::{generate, CompleteEnv, Shell};
use gallery_core::{
    category_catalog, load_store, visible_photos, Category, CategoryFilter, DatasetSource,
    GalleryConfig, Photo, PhotoStore,
};

const COMPLETE_ENV_VAR: &str = "GALLERYCTL_COMPLETE";

#[derive(Parser)]
#[command(name = "galleryctl", version, about = "CLI tools for the photo gallery")]
struct Cli {
    /// Dataset file (JSON array of photo records)
    #[arg(long, short)]
    dataset: Option<PathBuf>,

    /// Suppress dataset resolution notices
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List photos, optionally narrowed to one category
    List {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Search photos by substring in title/description/tags
    Search {
        query: String,
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// Show the category catalog with photo counts
    Categories,
    /// Show the full record for one photo
    Show {
        #[arg(add = ArgValueCompleter::new(complete_photo_id))]
        id: String,
        /// Print the record as pretty JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
        /// Generate static (AOT) completion script instead of dynamic registration
        #[arg(long)]
        aot: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryArg {
    TeamVibes,
    CreativeCampaigns,
    WorkHardPlayHard,
    BehindTheScenes,
}

impl CategoryArg {
    fn into_filter(self) -> CategoryFilter {
        let category = match self {
            CategoryArg::TeamVibes => Category::TeamVibes,
            CategoryArg::CreativeCampaigns => Category::CreativeCampaigns,
            CategoryArg::WorkHardPlayHard => Category::WorkHardPlayHard,
            CategoryArg::BehindTheScenes => Category::BehindTheScenes,
        };
        CategoryFilter::Only(category)
    }
}

fn main() -> Result<()> {
    CompleteEnv::with_factory(|| Cli::command())
        .var(COMPLETE_ENV_VAR)
        .complete();

    let cli = Cli::parse();
    let config = match cli.dataset {
        Some(path) => GalleryConfig::with_dataset(path),
        None => GalleryConfig::default(),
    };

    match cli.command {
        Commands::List { category, limit } => list_command(&config, category, limit, cli.quiet),
        Commands::Search {
            query,
            category,
            limit,
        } => search_command(&config, &query, category, limit, cli.quiet),
        Commands::Categories => categories_command(&config, cli.quiet),
        Commands::Show { id, json } => show_command(&config, &id, json, cli.quiet),
        Commands::Completion { shell, aot } => completion_command(shell, aot),
    }
}

fn open_store(config: &GalleryConfig, quiet: bool) -> Result<PhotoStore> {
    let (store, source) = load_store(config)?;
    if !quiet {
        if let DatasetSource::BuiltIn = source {
            eprintln!("notice: no dataset file found, using the built-in collection");
        }
    }
    Ok(store)
}

fn list_command(
    config: &GalleryConfig,
    category: Option<CategoryArg>,
    limit: usize,
    quiet: bool,
) -> Result<()> {
    let store = open_store(config, quiet)?;
    let filter = category.map_or(CategoryFilter::All, CategoryArg::into_filter);
    for photo in visible_photos(store.photos(), filter, "")
        .into_iter()
        .take(limit)
    {
        println!("{}", photo_row(photo));
    }
    Ok(())
}

fn search_command(
    config: &GalleryConfig,
    query: &str,
    category: Option<CategoryArg>,
    limit: usize,
    quiet: bool,
) -> Result<()> {
    if query.is_empty() {
        return Err(anyhow!("no search query provided"));
    }

    let store = open_store(config, quiet)?;
    let filter = category.map_or(CategoryFilter::All, CategoryArg::into_filter);
    let matches = visible_photos(store.photos(), filter, query);
    for photo in matches.iter().take(limit) {
        println!("{}", photo_row(photo));
    }
    if !quiet {
        eprintln!("{} match(es)", matches.len());
    }
    Ok(())
}

fn categories_command(config: &GalleryConfig, quiet: bool) -> Result<()> {
    let store = open_store(config, quiet)?;
    for info in category_catalog() {
        let count = store.iter().filter(|p| p.category == info.id).count();
        println!(
            "{} | {} | {} photo(s) | {}",
            info.slug, info.label, count, info.description
        );
    }
    println!("total: {} photo(s)", store.len());
    Ok(())
}

fn show_command(config: &GalleryConfig, id: &str, json: bool, quiet: bool) -> Result<()> {
    let store = open_store(config, quiet)?;
    let photo = store
        .get_by_id(id)
        .ok_or_else(|| anyhow!("no photo with id {id:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(photo)?);
        return Ok(());
    }

    println!("Id: {}", photo.id);
    println!("Title: {}", photo.title);
    println!("Category: {} ({})", photo.category.label(), photo.category.slug());
    println!("Date: {}", format_display_date(&photo.date));
    if photo.tags.is_empty() {
        println!("Tags: (none)");
    } else {
        println!("Tags: {}", photo.tags.join(" "));
    }
    println!("Source: {}", photo.src);
    println!("Alt text: {}", photo.alt);
    match photo.description.as_str() {
        "" => println!("Description: (none)"),
        desc if desc.contains('\n') => println!("Description:\n{desc}"),
        desc => println!("Description: {desc}"),
    }

    Ok(())
}

fn completion_command(shell: Shell, aot: bool) -> Result<()> {
    if aot {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let current_dir = std::env::current_dir().ok();
    let argv0 = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("galleryctl"));
    let args = vec![argv0, OsString::from("--")];
    let shell_name = shell.to_string().to_ascii_lowercase();

    std::env::set_var(COMPLETE_ENV_VAR, shell_name);
    let completed = CompleteEnv::with_factory(|| Cli::command())
        .var(COMPLETE_ENV_VAR)
        .try_complete(args, current_dir.as_deref())?;
    std::env::remove_var(COMPLETE_ENV_VAR);

    if !completed {
        return Err(anyhow!("failed to generate dynamic completion script"));
    }
    Ok(())
}

// Photo ids complete from whatever dataset the command line being completed
// points at.
fn complete_photo_id(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(current) = current.to_str() else {
        return Vec::new();
    };

    let config = match dataset_from_env() {
        Some(path) => GalleryConfig::with_dataset(path),
        None => GalleryConfig::default(),
    };
    let Ok((store, _)) = load_store(&config) else {
        return Vec::new();
    };

    let mut ids = candidate_ids(&store, current);
    ids.sort();
    ids.into_iter().map(CompletionCandidate::new).collect()
}

fn candidate_ids(store: &PhotoStore, prefix: &str) -> Vec<String> {
    store
        .iter()
        .map(|photo| photo.id.clone())
        .filter(|id| id.starts_with(prefix))
        .collect()
}

fn dataset_from_env() -> Option<PathBuf> {
    let words = completion_words_from_env();
    let mut i = 0;
    while i < words.len() {
        let token = words[i].to_string_lossy();
        if token == "--dataset" || token == "-d" {
            return words.get(i + 1).map(PathBuf::from);
        }
        if let Some(rest) = token.strip_prefix("--dataset=") {
            if !rest.is_empty() {
                return Some(PathBuf::from(rest));
            }
        }
        if token.len() > 2 && token.starts_with("-d") {
            return Some(PathBuf::from(&token[2..]));
        }
        i += 1;
    }
    None
}

fn completion_words_from_env() -> Vec<OsString> {
    let mut out = Vec::new();
    let mut after_sep = false;
    for arg in std::env::args_os().skip(1) {
        if after_sep {
            out.push(arg);
            continue;
        }
        if arg.as_os_str() == OsStr::new("--") {
            after_sep = true;
        }
    }
    out
}

fn photo_row(photo: &Photo) -> String {
    format!(
        "{} | {} | {} | {}",
        photo.id,
        photo.category.slug(),
        format_display_date(&photo.date),
        photo.title
    )
}

fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use gallery_core::{demo_photos, photo_matches_query, visible_photos, CategoryFilter, PhotoStore};

    use super::{candidate_ids, format_display_date};

    #[test]
    fn dates_render_in_long_form() {
        assert_eq!(format_display_date("2024-01-08"), "January 8, 2024");
        assert_eq!(format_display_date("2024-12-31"), "December 31, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_display_date("sometime in May"), "sometime in May");
    }

    #[test]
    fn search_reaches_tags_not_just_titles() {
        let photos = demo_photos();
        let matches = visible_photos(&photos, CategoryFilter::All, "launch");
        assert!(!matches.is_empty());
        for photo in &matches {
            assert!(photo_matches_query(photo, "launch"));
            assert!(!photo.title.to_lowercase().contains("launch"));
        }
    }

    #[test]
    fn id_candidates_filter_by_prefix() {
        let store = PhotoStore::new(demo_photos()).unwrap();
        let ids = candidate_ids(&store, "team-");
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|id| id.starts_with("team-")));
        assert!(candidate_ids(&store, "zzz").is_empty());
    }
}
