// Admin CLI over the gallery store: list, create, upload with progress, curate, download.
// Usage: cargo run --bin lumina-admin -- <command> [args]

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use lumina_client_core::{
    slugify, AdminGate, ClientConfig, EventId, GalleryApi, GeminiSuggester, HttpApi, NewEvent,
    PhotoId, Store, TextSuggester, UploadFile,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "lumina-admin", about = "Manage Lumina portfolio events and photos")]
struct Cli {
    /// Overrides LUMINA_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the configured admin password against the backend.
    Login,
    /// List events, newest first.
    Events,
    /// List photos, optionally for one event slug.
    Photos {
        #[arg(long)]
        event: Option<String>,
    },
    CreateEvent {
        title: String,
        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Derived from the title when omitted.
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        watermark: Option<String>,
        /// Fill an empty description from the suggestion service.
        #[arg(long)]
        suggest: bool,
    },
    DeleteEvent {
        id: String,
    },
    /// Upload files one by one to an event.
    Upload {
        event_id: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    DeletePhotos {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    Caption {
        photo_id: String,
        text: Option<String>,
        /// Suggest the caption from a local copy of the image.
        #[arg(long)]
        suggest_from: Option<PathBuf>,
    },
    Cover {
        event_id: String,
        photo_id: String,
    },
    Favorite {
        photo_id: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Save the event's zip archive.
    Download {
        slug: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina_client_core=info,lumina_admin=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if !config.enable_admin {
        bail!("admin features are disabled (LUMINA_ENABLE_ADMIN=false)");
    }
    info!("Using API {}", config.api_url);

    let api = HttpApi::new(&config).context("building HTTP client")?;
    let store = Store::new(api);
    run(cli.command, &store, &config).await
}

async fn run(command: Command, store: &Store<HttpApi>, config: &ClientConfig) -> anyhow::Result<()> {
    match command {
        Command::Login => {
            let gate = AdminGate::try_unlock(store.api(), &config.admin_password).await?;
            if !gate.is_unlocked() {
                bail!("invalid admin password");
            }
            println!("Admin password accepted");
        }
        Command::Events => {
            store.refresh().await.context("loading events")?;
            let snapshot = store.snapshot();
            for event in &snapshot.events {
                let count = snapshot.photos_for_event(&event.id).len();
                println!("{}  {}  /event/{}  {} ({} photos)", event.id, event.date, event.slug, event.title, count);
            }
        }
        Command::Photos { event } => {
            let photos = match event {
                Some(slug) => store.api().list_event_photos(&slug).await?,
                None => store.api().list_photos().await?,
            };
            for photo in photos {
                let star = if photo.is_favorite { "*" } else { " " };
                println!("{star} {}  {}  {}", photo.id, photo.name, photo.url);
            }
        }
        Command::CreateEvent { title, date, slug, description, watermark, suggest } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let slug = slug.unwrap_or_else(|| slugify(&title));
            if slug.is_empty() {
                bail!("cannot derive a slug from {title:?}; pass --slug");
            }
            let mut description = description.filter(|d| !d.is_empty());
            if description.is_none() && suggest {
                let suggested = GeminiSuggester::new(config.gemini_api_key.clone())
                    .describe_event(&title, &date)
                    .await;
                description = Some(suggested).filter(|d| !d.is_empty());
            }
            let created = store
                .add_event(NewEvent { title, slug, date, description, watermark_text: watermark })
                .await
                .context("creating event")?;
            println!("Created {} /event/{}", created.id, created.slug);
        }
        Command::DeleteEvent { id } => {
            store.delete_event(&EventId::parse(&id)?).await.context("deleting event")?;
            println!("Deleted event {id}");
        }
        Command::Upload { event_id, files } => {
            let event_id = EventId::parse(&event_id)?;
            let files = files
                .iter()
                .map(|path| UploadFile::from_path(path).with_context(|| format!("reading {}", path.display())))
                .collect::<anyhow::Result<Vec<_>>>()?;
            store
                .add_photos_with_progress(&event_id, files, |p| {
                    println!(
                        "[{}/{}] {} ({} / {} bytes, {:.0}%)",
                        p.current,
                        p.total,
                        p.file.name,
                        p.uploaded_bytes,
                        p.total_bytes,
                        p.fraction() * 100.0
                    );
                })
                .await
                .context("upload failed")?;
        }
        Command::DeletePhotos { ids } => {
            let ids = ids.iter().map(PhotoId::parse).collect::<Result<Vec<_>, _>>()?;
            store.delete_photos(&ids).await.context("deleting photos")?;
            println!("Deleted {} photos", ids.len());
        }
        Command::Caption { photo_id, text, suggest_from } => {
            let photo_id = PhotoId::parse(&photo_id)?;
            let caption = match (text, suggest_from) {
                (Some(text), _) => text,
                (None, Some(path)) => {
                    let file = UploadFile::from_path(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    let mime = file.mime.clone().unwrap_or_else(|| "image/jpeg".to_string());
                    GeminiSuggester::new(config.gemini_api_key.clone())
                        .caption_photo(&mime, &file.bytes)
                        .await
                }
                (None, None) => bail!("pass a caption or --suggest-from <image>"),
            };
            if caption.is_empty() {
                bail!("no caption to set");
            }
            store.refresh().await.context("loading photos")?;
            if store.snapshot().photo(&photo_id).is_none() {
                bail!("unknown photo {photo_id}");
            }
            store.update_photo_caption(&photo_id, &caption).await?;
            println!("Caption set: {caption}");
        }
        Command::Cover { event_id, photo_id } => {
            store
                .set_cover_photo(&EventId::parse(&event_id)?, &PhotoId::parse(&photo_id)?)
                .await
                .context("setting cover")?;
            println!("Cover updated");
        }
        Command::Favorite { photo_id, value } => {
            store.toggle_photo_favorite(&PhotoId::parse(&photo_id)?, value).await?;
            println!("Favorite = {value}");
        }
        Command::Download { slug, out } => {
            let bytes = store.api().download_event_zip(&slug).await.context("downloading album")?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{slug}-album.zip")));
            std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
            println!("Saved {} ({} bytes)", out.display(), bytes.len());
        }
    }
    Ok(())
}
