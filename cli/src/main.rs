mod api;
mod token_store;


use std::path::PathBuf;
use std::process::ExitCode;

use catalog::book::{Book, BookDraft, BookPatch, MutationResponse};
use catalog::endpoints::{BookScope, DEFAULT_API_BASE};
use catalog::session::{self, Access};
use catalog::{Action, ApiError, LoginRequest, RegisterRequest, Route, TokenStore};
use clap::{Args, Parser, Subcommand};

use api::{ApiClient, ImageUpload};
use token_store::{DEFAULT_TOKEN_FILE, FileTokenStore};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `bookshelf login` first")]
    NotLoggedIn,
    /// Backend refusal or transport failure, already reduced to user text.
    #[error("{0}")]
    Failed(String),
    /// The backend refused the stored token.
    #[error("{0}; run `bookshelf login` to sign in again")]
    Unauthorized(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("missing: {0}")]
    MissingFields(String),
    #[error("nothing to update; pass at least one of --title, --author, --genre, --image")]
    EmptyUpdate,
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", about = "Library catalog client")]
struct Cli {
    #[arg(long, env = "BOOKSHELF_API_URL", default_value = DEFAULT_API_BASE)]
    api_url: String,

    #[arg(long, env = "BOOKSHELF_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    token_file: String,

    /// Print raw JSON instead of one line per book.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Status,
    Books(BooksCommand),
}

#[derive(Args, Debug)]
struct BooksCommand {
    #[command(subcommand)]
    command: BooksSubcommand,
}

#[derive(Subcommand, Debug)]
enum BooksSubcommand {
    /// Every book in the catalog.
    List,
    /// Books you added.
    Mine,
    /// Books you currently hold.
    Borrowed,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        image: PathBuf,
    },
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    Delete {
        id: String,
    },
    Borrow {
        id: String,
    },
    Return {
        id: String,
    },
}

impl BooksSubcommand {
    /// Browser route whose guard this command shares.
    fn route(&self) -> Route {
        match self {
            Self::List | Self::Borrow { .. } => Route::Home,
            Self::Mine | Self::Update { .. } | Self::Delete { .. } => Route::MyBooks,
            Self::Borrowed | Self::Return { .. } => Route::BorrowedBooks,
            Self::Add { .. } => Route::AddBook,
        }
    }
}

struct CliContext {
    api: ApiClient,
    store: FileTokenStore,
    json: bool,
}

impl CliContext {
    /// Token for `route`, or `NotLoggedIn` before any request is made.
    fn token_for(&self, route: Route) -> Result<String, CliError> {
        let token = self.store.load();
        match session::guard(route, token.as_deref()) {
            Access::Allow => token.ok_or(CliError::NotLoggedIn),
            Access::Redirect(_) => Err(CliError::NotLoggedIn),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = CliContext {
        api: ApiClient::new(&cli.api_url)?,
        store: FileTokenStore::from_config(&cli.token_file)?,
        json: cli.json,
    };
    tracing::debug!(api = %cli.api_url, token_file = %ctx.store.path().display(), "configured");

    match cli.command {
        Command::Signup { name, email, password } => run_signup(&ctx, RegisterRequest { name, email, password }).await,
        Command::Login { email, password } => run_login(&ctx, LoginRequest { email, password }).await,
        Command::Logout => run_logout(&ctx),
        Command::Status => {
            let state = if session::has_token(ctx.store.load().as_deref()) { "logged in" } else { "not logged in" };
            println!("{state}");
            Ok(())
        }
        Command::Books(books) => run_books(&ctx, books.command).await,
    }
}

async fn run_signup(ctx: &CliContext, req: RegisterRequest) -> Result<(), CliError> {
    let message = ctx.api.register(&req).await.and_then(catalog::AuthResponse::into_message);
    match message {
        Ok(_) => {
            println!("{}", catalog::auth::SIGNUP_SUCCEEDED);
            Ok(())
        }
        Err(err) => Err(failure(&err, catalog::auth::SIGNUP_FAILED)),
    }
}

async fn run_login(ctx: &CliContext, req: LoginRequest) -> Result<(), CliError> {
    let resp = ctx.api.login(&req).await;
    let token = match resp.and_then(catalog::AuthResponse::into_token) {
        Ok(token) => token,
        Err(err) => return Err(failure(&err, catalog::auth::LOGIN_FAILED)),
    };
    ctx.store.store(&token)?;
    println!("logged in");
    Ok(())
}

fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    session::logout(&ctx.store)?;
    println!("logged out");
    Ok(())
}

async fn run_books(ctx: &CliContext, command: BooksSubcommand) -> Result<(), CliError> {
    let token = ctx.token_for(command.route())?;
    match command {
        BooksSubcommand::List => list(ctx, &token, BookScope::All).await,
        BooksSubcommand::Mine => list(ctx, &token, BookScope::Mine).await,
        BooksSubcommand::Borrowed => list(ctx, &token, BookScope::Borrowed).await,
        BooksSubcommand::Add { title, author, genre, image } => {
            let draft = BookDraft { title, author, genre };
            let missing = draft.missing_fields();
            if !missing.is_empty() {
                return Err(CliError::MissingFields(missing.join(", ")));
            }
            let image = ImageUpload::read(&image).await?;
            let result = ctx.api.create_book(&token, &draft, image).await;
            report(ctx, Action::Create, result)
        }
        BooksSubcommand::Update { id, title, author, genre, image } => {
            let patch = BookPatch { title, author, genre };
            if patch.is_empty() && image.is_none() {
                return Err(CliError::EmptyUpdate);
            }
            let image = match image {
                Some(path) => Some(ImageUpload::read(&path).await?),
                None => None,
            };
            let result = ctx.api.update_book(&token, &id, &patch, image).await;
            report(ctx, Action::Update, result)
        }
        BooksSubcommand::Delete { id } => report(ctx, Action::Delete, ctx.api.delete_book(&token, &id).await),
        BooksSubcommand::Borrow { id } => report(ctx, Action::Borrow, ctx.api.borrow_book(&token, &id).await),
        BooksSubcommand::Return { id } => report(ctx, Action::Return, ctx.api.return_book(&token, &id).await),
    }
}

async fn list(ctx: &CliContext, token: &str, scope: BookScope) -> Result<(), CliError> {
    let books = match ctx.api.books(token, scope).await {
        Ok(books) => books,
        Err(err) => return Err(failure(&err, catalog::listing::FETCH_FAILED)),
    };
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }
    if books.is_empty() {
        println!("{}", empty_message(scope));
    }
    for book in &books {
        println!("{}", book_line(book, scope));
    }
    Ok(())
}

/// Print the confirmation, or fail with the backend text or action fallback.
fn report(ctx: &CliContext, action: Action, result: Result<MutationResponse, ApiError>) -> Result<(), CliError> {
    match result {
        Ok(resp) => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&resp.data)?);
            }
            println!("{}", resp.message_or(action.success_fallback()));
            Ok(())
        }
        Err(err) => Err(failure(&err, action.failure_fallback())),
    }
}

fn failure(err: &ApiError, fallback: &str) -> CliError {
    tracing::debug!(error = %err, "request failed");
    if err.is_unauthorized() {
        CliError::Unauthorized(err.message_or(fallback))
    } else {
        CliError::Failed(err.message_or(fallback))
    }
}

fn empty_message(scope: BookScope) -> &'static str {
    match scope {
        BookScope::All => "No books in the catalog.",
        BookScope::Mine => "No books found!",
        BookScope::Borrowed => "No books are borrowed!",
    }
}

fn book_line(book: &Book, scope: BookScope) -> String {
    let status = match scope {
        BookScope::Mine => book.borrower_label(),
        BookScope::All | BookScope::Borrowed => book.availability_label().to_owned(),
    };
    format!("{}\t{}\t{}\t{}\t{status}", book.id, book.title, book.author, book.genre)
}
