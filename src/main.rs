use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use console::style;

use storefront_search::config::AppConfig;
use storefront_search::core::search::{self, Product, SearchSession};

/// Demo catalog used when no catalog file is configured.
const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // The REPL owns stdout/stderr, so logs go to the file only
    let _log_guard = storefront_search::core::logging::init_file_only(&config.log_dir());
    log::info!("{} v{} starting", storefront_search::NAME, storefront_search::VERSION);

    let products = load_products(&config)?;
    let mut session = SearchSession::from_config(&config)?;
    session.set_catalog(&products);

    println!(
        "{} {} products loaded. Type a query, {} / {} to move, {} to open, {} to exit.",
        style("storefront-search").yellow().bold(),
        products.len(),
        style(":next").cyan(),
        style(":prev").cyan(),
        style(":open").cyan(),
        style(":quit").cyan(),
    );
    print_popular(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":next" => {
                session.select_next();
                render(&session);
            }
            ":prev" => {
                session.select_previous();
                render(&session);
            }
            ":open" => match session.selected() {
                Some(hit) => println!("{}", style(hit.product.product.link()).green()),
                None => println!("{}", style("Nothing selected").dim()),
            },
            "" => {
                session.clear();
                print_popular(&session);
            }
            _ => {
                session.set_query(&line);
                render(&session);
            }
        }
        prompt(&mut stdout)?;
    }

    log::info!("Exiting");
    Ok(())
}

/// Catalog from the command line, then the config file, then the bundled sample.
fn load_products(config: &AppConfig) -> search::Result<Vec<Product>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.catalog.path.clone());

    match path {
        Some(path) => search::load_catalog(&path),
        None => {
            log::info!("No catalog configured, using bundled sample");
            search::parse_catalog(SAMPLE_CATALOG)
        }
    }
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("{} ", style("search>").bold());
    stdout.flush()
}

fn print_popular(session: &SearchSession) {
    println!(
        "{} {}",
        style("Popular:").dim(),
        session.popular_queries().join(", ")
    );
}

fn render(session: &SearchSession) {
    if let Some(hint) = session.hint() {
        println!("{}", style(hint).yellow());
    }

    if session.is_empty_state() {
        println!("{}", style("Ничего не найдено").dim());
        println!("{}", style("Попробуйте изменить запрос").dim());
        return;
    }

    let selected = session.selected_index();
    for (i, (hit, row)) in session.results().iter().zip(session.rows()).enumerate() {
        let marker = if i == selected { style(">").cyan().bold() } else { style(" ") };
        let labels: Vec<&str> = [row.category.as_str(), row.line.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        let mut price = style(&row.price_display).bold().to_string();
        if let Some(old) = &row.old_price_display {
            price.push(' ');
            price.push_str(&style(old).dim().strikethrough().to_string());
        }

        println!(
            "{} {}  {}  {}  {}",
            marker,
            style(&row.title).bold(),
            style(labels.join(" · ")).dim(),
            price,
            style(format!("{:.4}", hit.score)).dim(),
        );
    }
}
