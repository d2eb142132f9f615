use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{auth, browse, featured, home, lists, profile, KindArg, ListAction};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "streamshelf")]
#[command(about = "StreamShelf - browse movies, series, books and reels from one shelf")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing view: featured spotlight plus a shelf per collection
    Home,

    /// Browse one catalog collection with search, filters, and sorting
    #[command(long_about = "Browse a collection. The search term matches titles, descriptions, authors and creators case-insensitively; the genre filter matches any of an item's comma-separated genre labels.")]
    Browse {
        /// Which collection to browse
        #[arg(value_enum)]
        kind: KindArg,

        /// Free-text search term
        #[arg(long)]
        search: Option<String>,

        /// Genre filter ('all' or one genre label)
        #[arg(long)]
        genre: Option<String>,

        /// Series status filter: 'all', 'ongoing', or 'completed'
        #[arg(long)]
        status: Option<String>,

        /// Sort key: 'title', 'rating', 'year', 'count', 'author', 'views', or 'likes'
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show the featured lineup and spotlight
    Featured {
        /// Step the spotlight rotation this many positions (may be negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        rotate: i64,
    },

    /// List the genre choices for a collection
    Genres {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Log in (mock authentication; any non-empty credentials are accepted)
    Login {
        #[arg(long)]
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account (mock; requires name, email, and password)
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and forget the saved session
    Logout,

    /// Show the signed-in profile and its lists
    Profile,

    /// Add or remove a favorite
    Favorite {
        #[arg(value_enum)]
        action: ListAction,

        #[arg(value_enum)]
        kind: KindArg,

        id: u32,
    },

    /// Add to the watch-later list
    WatchLater {
        #[arg(value_enum)]
        kind: KindArg,

        id: u32,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let mut ctx = commands::init_context().map_err(|e| eyre!("{}", e))?;

    match cli.command {
        Commands::Home => home::run_home(&ctx, &output),
        Commands::Browse {
            kind,
            search,
            genre,
            status,
            sort,
        } => browse::run_browse(&ctx, kind, search, genre, status, sort, &output),
        Commands::Featured { rotate } => featured::run_featured(&ctx, rotate, &output),
        Commands::Genres { kind } => browse::run_genres(kind, &output),
        Commands::Login { email, password } => auth::run_login(&mut ctx, email, password, &output),
        Commands::Signup {
            name,
            email,
            password,
        } => auth::run_signup(&mut ctx, name, email, password, &output),
        Commands::Logout => auth::run_logout(&mut ctx, &output),
        Commands::Profile => profile::run_profile(&ctx, &output),
        Commands::Favorite { action, kind, id } => {
            lists::run_favorite(&mut ctx, action, kind, id, &output)
        }
        Commands::WatchLater { kind, id } => lists::run_watch_later(&mut ctx, kind, id, &output),
    }
}
