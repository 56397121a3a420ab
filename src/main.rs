use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use time::OffsetDateTime;

use cigcount::ShapeCounter;
use cigcount::store::{DetectionDb, DetectionRepository, NewDetection};

#[derive(Parser)]
#[command(name = "cigcount")]
#[command(about = "Count cigarette ends in photographs")]
struct Cli {
    /// Directory holding the result database and stored uploads
    #[arg(long, value_name = "DIR", default_value = "cigcount-data")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count shapes in an image and record the result
    Scan {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Print the count without storing the image or the result
        #[arg(long)]
        no_store: bool,
    },
    /// List recorded detections, newest first
    History,
    /// Print one recorded detection
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Delete a recorded detection and its stored image
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Scan {
            image_path,
            no_store,
        } => scan(&args.data_dir, &image_path, no_store, args.verbose).await,
        Command::History => history(&args.data_dir).await,
        Command::Show { id } => show(&args.data_dir, id).await,
        Command::Remove { id } => remove(&args.data_dir, id).await,
    }
}

async fn scan(
    data_dir: &Path,
    image_path: &Path,
    no_store: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let counter = ShapeCounter::new().with_verbose(verbose);

    if verbose {
        println!("Analyzing image: {:?}\n", image_path);
    }

    // A file that cannot be decoded is an error here, not a zero count;
    // nothing gets stored for it.
    let count = counter
        .count_path(image_path)
        .with_context(|| format!("Cannot analyze {:?}", image_path))?;

    if no_store {
        println!("Counted {} cigarette ends in {:?}", count, image_path);
        return Ok(());
    }

    let db = DetectionDb::open(data_dir).await?;
    let stored_name = db.store_upload(image_path).await?;
    let filename = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();
    let record = db
        .add_detection(&NewDetection {
            count,
            filename,
            stored_name,
        })
        .await?;

    println!(
        "[{}] {}: {} cigarette ends ({})",
        record.id,
        record.filename,
        record.count,
        format_timestamp(&record.recorded_at)?
    );

    db.close().await
}

async fn history(data_dir: &Path) -> anyhow::Result<()> {
    let db = DetectionDb::open(data_dir).await?;
    let records = db.get_detections().await?;

    if records.is_empty() {
        println!("No detections recorded yet.");
    } else {
        println!("{:>4}  {:<19}  {:>5}  filename", "id", "recorded at", "count");
        for record in &records {
            println!(
                "{:>4}  {:<19}  {:>5}  {}",
                record.id,
                format_timestamp(&record.recorded_at)?,
                record.count,
                record.filename
            );
        }
    }

    db.close().await
}

async fn show(data_dir: &Path, id: i64) -> anyhow::Result<()> {
    let db = DetectionDb::open(data_dir).await?;
    let record = db
        .get_detection_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("No detection with id {}", id))?;

    println!("id:          {}", record.id);
    println!("recorded at: {}", format_timestamp(&record.recorded_at)?);
    println!("count:       {}", record.count);
    println!("filename:    {}", record.filename);
    println!("stored copy: {:?}", db.upload_path(&record.stored_name));

    db.close().await
}

async fn remove(data_dir: &Path, id: i64) -> anyhow::Result<()> {
    let db = DetectionDb::open(data_dir).await?;
    let record = db
        .get_detection_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("No detection with id {}", id))?;

    let stored_name = record.stored_name.clone();
    db.delete_detection(record).await?;
    if let Err(e) = db.remove_upload(&stored_name).await {
        eprintln!("Warning: record deleted but stored image was not: {}", e);
    }
    println!("Removed detection {}", id);

    db.close().await
}

fn format_timestamp(recorded_at: &OffsetDateTime) -> anyhow::Result<String> {
    let format =
        time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")?;
    Ok(recorded_at.format(&format)?)
}
