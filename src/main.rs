//! Booklend demonstration runner
//!
//! Seeds the library from configuration and replays a short lending session,
//! printing each outcome.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booklend::{
    config::{AppConfig, LoggingConfig},
    models::BookView,
    AppResult, LendingService,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    tracing::info!("Starting Booklend v{}", env!("CARGO_PKG_VERSION"));

    let mut library = LendingService::new(config.loans);
    for book in config.seed.books {
        library.add_book(book.into());
    }
    for user in config.seed.users {
        library.add_user(user.into());
    }

    report(library.login("john").map(|()| "Logged in as: john".to_string()));

    println!("Books in the library:");
    print_books(&library.list_books());

    for id in [1, 2] {
        report(library.borrow_book(id).map(|r| format!("Book borrowed: {} (due {})", r.title, r.due_date)));
    }
    print_borrowed(&library);

    report(library.return_book(1).map(|r| {
        if r.on_time {
            format!("Book returned on time: {}", r.title)
        } else {
            format!("Book returned late! Fine: {}", r.fine_units)
        }
    }));
    print_borrowed(&library);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("booklend={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }
    Ok(())
}

fn report(outcome: AppResult<String>) {
    match outcome {
        Ok(message) => println!("{}", message),
        Err(e) => println!("[{}] {}", e.code() as u32, e),
    }
}

fn print_books(books: &[BookView]) {
    for book in books {
        println!("  {}", book);
    }
}

fn print_borrowed<C: booklend::services::Clock>(library: &LendingService<C>) {
    match library.list_borrowed_books() {
        Ok(books) => {
            println!("Borrowed books:");
            print_books(&books);
        }
        Err(e) => report(Err(e)),
    }
}
