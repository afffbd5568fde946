use clap::{Parser, Subcommand};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use webutil::config::Config;
use webutil::format;
use webutil::manifest;
use webutil::request;

#[derive(Parser)]
#[command(name = "webutil")]
#[command(about = "Formatting, tagging and manifest helpers", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a magnitude with an SI prefix
    Human {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit suffix (e.g. "B")
        #[arg(short, long)]
        suffix: Option<String>,

        /// Digits to keep after the leading one
        #[arg(long)]
        sig: Option<u32>,
    },

    /// Turn a label into a CSS-class-safe tag id
    Tagify {
        label: String,

        #[arg(short = 't', long)]
        category: Option<String>,
    },

    /// List the dependencies declared in a package manifest
    Deps {
        /// Path to package.json
        manifest: String,

        /// Categories to include (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Recursion level; past 0 only "dependencies" is followed
        #[arg(short, long)]
        level: Option<u32>,

        /// Print JSON instead of one line per entry
        #[arg(long)]
        json: bool,
    },

    /// Split a "name@version" module key
    Key { key: String },

    /// Render a pluralizing template ("{}" placeholders, "[one|many]" branches)
    Plural {
        template: String,

        /// Values: a number, "number:label", or plain text
        values: Vec<String>,
    },

    /// Request a URL and print the JSON response
    Fetch {
        url: String,

        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request body; sent as JSON when it parses as JSON
        #[arg(short, long)]
        body: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };

    match cli.command {
        Commands::Human { value, suffix, sig } => {
            let suffix = suffix.unwrap_or(config.format.suffix);
            let sig = sig.unwrap_or(config.format.sig);
            println!("{}", format::human(value, &suffix, sig));
        }
        Commands::Tagify { label, category } => {
            let category = category.unwrap_or(config.tags.category);
            println!("{}", webutil::dom::tagify(&category, &label));
        }
        Commands::Deps {
            manifest,
            include,
            level,
            json,
        } => list_dependencies(
            &manifest,
            &include.unwrap_or(config.dependencies.include),
            level.unwrap_or(config.dependencies.level),
            json,
        )?,
        Commands::Key { key } => {
            let key = manifest::entry_from_key(&key);
            match key.version {
                Some(version) => println!("{} {}", key.name, version),
                None => println!("{}", key.name),
            }
        }
        Commands::Plural { template, values } => {
            let args: Vec<format::PluralArg> = values.iter().map(|v| parse_plural_arg(v)).collect();
            println!("{}", format::simplur(&format::template_segments(&template), &args));
        }
        Commands::Fetch { url, method, body } => fetch(&url, &method, body)?,
    }

    Ok(())
}

fn list_dependencies(
    path: &str,
    include: &[String],
    level: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let pkg: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path, e))?;

    let entries = manifest::get_dependency_entries(&pkg, include, level);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  - {}@{} ({})",
            entry.name,
            entry.version.as_deref().unwrap_or("*"),
            entry.category
        );
    }
    println!("{}", webutil::simplur!("{} dependenc[y|ies]", entries.len()));

    Ok(())
}

/// "3" -> count, "3:three" -> labeled count, anything else -> text
fn parse_plural_arg(value: &str) -> format::PluralArg {
    if let Ok(n) = value.parse::<f64>() {
        return format::PluralArg::Count(n);
    }
    match value.split_once(':') {
        Some((count, label)) => match count.parse::<f64>() {
            Ok(count) => format::PluralArg::Labeled {
                count,
                label: label.to_string(),
            },
            Err(_) => format::PluralArg::Text(value.to_string()),
        },
        None => format::PluralArg::Text(value.to_string()),
    }
}

fn fetch(url: &str, method: &str, body: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let body = body.map(|raw| match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => request::Body::Json(value),
        Err(_) => request::Body::Text(raw),
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let transport = Rc::new(request::ReqwestTransport::new());
    let value = runtime.block_on(request::ajax(transport, method, url, body))?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
